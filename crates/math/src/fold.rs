// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;

/// Folds `values` into a single element with Horner's rule.
///
/// Returns $\sum_i v_i \beta^{n - 1 - i}$, so the first value carries the highest power. An empty
/// slice folds to zero.
pub fn fold_vals<'a>(beta: Scalar, values: impl IntoIterator<Item = &'a Scalar>) -> Scalar {
	values
		.into_iter()
		.fold(Scalar::ZERO, |acc, value| acc * beta + value)
}
