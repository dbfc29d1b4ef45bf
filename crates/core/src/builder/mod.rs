// Copyright 2025 Irreducible Inc.

//! The verification context: queued proof material and the running constraint aggregate.

mod bit_distribution;
mod queue;
#[cfg(test)]
mod tests;
mod verification_builder;

pub use bit_distribution::*;
pub use queue::*;
pub use verification_builder::*;
