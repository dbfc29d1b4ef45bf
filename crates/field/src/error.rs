// Copyright 2025 Irreducible Inc.

/// Failures of checked field constructors.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	/// The word is at or above the BN254 scalar modulus.
	#[error("value is not in the field")]
	NotInField,
}
