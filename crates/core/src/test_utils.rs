// Copyright 2025 Irreducible Inc.

//! Fixtures for building proof material from plain columns.

use rand::{rngs::StdRng, SeedableRng};
use sqlproof_field::Scalar;
use sqlproof_math::{compute_truncated_lagrange_basis_sum, evaluate_mle};

use crate::builder::{BitDistribution, BitKind, ChiEvaluation, SIGN_BIT};

pub fn scalars(values: &[i64]) -> Vec<Scalar> {
	values.iter().copied().map(Scalar::from).collect()
}

pub fn random_point(n_vars: usize, seed: u64) -> Vec<Scalar> {
	let mut rng = StdRng::seed_from_u64(seed);
	(0..n_vars).map(|_| Scalar::random(&mut rng)).collect()
}

pub fn chi(length: usize, point: &[Scalar]) -> ChiEvaluation {
	let evaluation = compute_truncated_lagrange_basis_sum(length, point).unwrap();
	ChiEvaluation::new(length, evaluation)
}

pub fn mle(values: &[Scalar], point: &[Scalar]) -> Scalar {
	evaluate_mle(values, point).unwrap()
}

/// Bit distribution of `values` together with the final round MLEs the sign gadget consumes for
/// it: the sign column if it varies, then each free bit column in ascending order.
pub fn sign_hint(values: &[Scalar], point: &[Scalar]) -> (BitDistribution, Vec<Scalar>) {
	let distribution = BitDistribution::from_scalars(values);
	let words = values
		.iter()
		.map(|value| value.to_twos_complement())
		.collect::<Vec<_>>();
	let bit_column_eval = |index: usize| {
		let column = words
			.iter()
			.map(|word| Scalar::from(word.bit(index)))
			.collect::<Vec<_>>();
		mle(&column, point)
	};

	let mut evals = Vec::new();
	if distribution.sign_varies() {
		evals.push(bit_column_eval(SIGN_BIT));
	}
	for index in 0..SIGN_BIT {
		if distribution.bit_kind(index) == BitKind::Free {
			evals.push(bit_column_eval(index));
		}
	}
	(distribution, evals)
}

/// Evaluation of the column flagging negative values.
pub fn sign_column_eval(values: &[Scalar], point: &[Scalar]) -> Scalar {
	let column = values
		.iter()
		.map(|value| Scalar::from(value.is_negative()))
		.collect::<Vec<_>>();
	mle(&column, point)
}
