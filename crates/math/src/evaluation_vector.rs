// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;
use sqlproof_utils::bail;

use crate::Error;

/// Computes the first `length` values of the equality indicator partially evaluated at `point`.
///
/// The full vector is the tensor product
///
/// $$
/// (1 - r_0, r_0) \otimes ... \otimes (1 - r_{n-1}, r_{n-1}),
/// $$
///
/// so that the weight of row $i$ is $\prod_j (i_j ? r_j : 1 - r_j)$ where $i_j$ is the $j$-th
/// little-endian bit of $i$. The inner product of a column with this vector is the evaluation of
/// the column's multilinear extension at `point`.
///
/// Only the prefix of length `length` is materialised, which must not exceed $2^n$.
pub fn compute_evaluation_vector(length: usize, point: &[Scalar]) -> Result<Vec<Scalar>, Error> {
	check_length(length, point.len())?;

	let mut values = vec![Scalar::ZERO; length];
	if length == 0 {
		return Ok(values);
	}
	values[0] = Scalar::ONE;

	for (i, r_i) in point.iter().enumerate() {
		let prev_length = 1usize.checked_shl(i as u32).unwrap_or(usize::MAX);
		for h in 0..prev_length.min(length) {
			// x * (1 - r_i) = x - x * r_i, reusing the product for the upper half
			let x = values[h];
			let prod = x * r_i;
			values[h] = x - prod;
			if let Some(upper) = values.get_mut(prev_length | h) {
				*upper = prod;
			}
		}
	}
	Ok(values)
}

/// Evaluation at `point` of the multilinear extension of the column holding `length` ones
/// followed by zeros.
pub fn compute_truncated_lagrange_basis_sum(
	length: usize,
	point: &[Scalar],
) -> Result<Scalar, Error> {
	Ok(compute_evaluation_vector(length, point)?.into_iter().sum())
}

/// Evaluation at `point` of the multilinear extension of the row-index column
/// `[0, 1, ..., length - 1]`.
pub fn compute_rho_evaluation(length: usize, point: &[Scalar]) -> Result<Scalar, Error> {
	Ok(compute_evaluation_vector(length, point)?
		.into_iter()
		.enumerate()
		.map(|(i, weight)| Scalar::from(i) * weight)
		.sum())
}

/// Evaluation at `point` of the multilinear extension of `values`.
pub fn evaluate_mle(values: &[Scalar], point: &[Scalar]) -> Result<Scalar, Error> {
	let weights = compute_evaluation_vector(values.len(), point)?;
	Ok(values.iter().zip(weights).map(|(v, w)| *v * w).sum())
}

fn check_length(length: usize, n_vars: usize) -> Result<(), Error> {
	if let Some(max) = 1usize.checked_shl(n_vars as u32) {
		if length > max {
			bail!(Error::LengthExceedsHypercube {
				length,
				n_vars,
				max
			});
		}
	}
	Ok(())
}
