// Copyright 2025 Irreducible Inc.

//! Checks a plaintext result set against the evaluations of the plan's output columns.

mod checker;

pub use checker::*;
