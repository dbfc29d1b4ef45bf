// Copyright 2025 Irreducible Inc.

//! Verification of SQL query results against succinct proofs.
//!
//! A proof plan is a serialized tree of relational operators over committed tables. Walking it
//! with a [`VerificationBuilder`] loaded with the prover's material yields the claimed
//! evaluations of the output columns, and accumulates a random linear combination of every
//! constraint the plan implies. [`verify_query`] ties this walk to the aggregate check, the
//! commitment check and the comparison against the returned result set.

pub mod builder;
pub mod codec;
pub mod config;
pub mod encode;
mod error;
pub mod proof_exprs;
pub mod proof_gadgets;
pub mod proof_plans;
pub mod result_evaluation;
#[cfg(test)]
mod test_utils;
mod verify;

pub use builder::{ChiEvaluation, VerificationBuilder};
pub use config::VerifierConfig;
pub use error::*;
pub use proof_plans::PlanEvaluation;
pub use verify::*;
