// Copyright 2025 Irreducible Inc.

use sqlproof_utils::env::{boolean_env_flag_set, STRICT_QUEUE_DRAIN_FLAG};

/// Knobs of the top-level verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierConfig {
	/// Reject proofs that leave material in the builder queues after the plan is walked. When
	/// unset, leftover material is only logged.
	pub strict_queue_drain: bool,
}

impl VerifierConfig {
	pub const STRICT: Self = Self {
		strict_queue_drain: true,
	};

	/// Reads the configuration from the process environment.
	pub fn from_env() -> Self {
		Self {
			strict_queue_drain: boolean_env_flag_set(STRICT_QUEUE_DRAIN_FLAG),
		}
	}
}

impl Default for VerifierConfig {
	fn default() -> Self {
		Self::from_env()
	}
}
