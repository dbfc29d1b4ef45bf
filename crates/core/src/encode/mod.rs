// Copyright 2025 Irreducible Inc.

//! Serialization of plans, expressions, result sets and parameters into the wire format read by
//! the evaluators.

mod expr;
mod plan;
mod value;

pub use expr::*;
pub use plan::*;
pub use value::*;
