// Copyright 2025 Irreducible Inc.

//! Multilinear helpers used by the query verifier.
//!
//! * Lagrange-basis evaluation vectors of the equality indicator at a challenge point
//! * Evaluations of the "ones" (chi) and "row index" (rho) columns of a given length
//! * Horner folds collapsing a list of evaluations with a challenge

mod error;
mod evaluation_vector;
mod fold;

pub use error::*;
pub use evaluation_vector::*;
pub use fold::*;
