// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("length {length} exceeds the {max} points of a hypercube with {n_vars} variables")]
	LengthExceedsHypercube {
		length: usize,
		n_vars: usize,
		max: usize,
	},
}
