// Copyright 2025 Irreducible Inc.

//! Reusable constraint gadgets shared by expression and plan evaluation.
//!
//! Each gadget consumes proof material from the builder in a fixed order and produces a fixed
//! number of constraints; callers rely on both to keep the queues aligned with the prover.

mod filter;
mod monotonic;
mod shift;
mod sign;

pub use filter::*;
pub use monotonic::*;
pub use shift::*;
pub use sign::*;
