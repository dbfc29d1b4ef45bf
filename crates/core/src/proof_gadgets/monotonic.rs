// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;
use sqlproof_utils::ensure;

use super::{verify_shift, verify_sign_decomposition};
use crate::{
	builder::{ChiEvaluation, VerificationBuilder},
	Error, VerificationError,
};

/// Certifies that a column is strictly increasing over its window.
///
/// The column is compared with its shift by one row: every interior difference
/// `previous - current` must be negative. The first and last rows of the shifted window compare
/// against the zero padding and may carry either sign.
pub fn verify_monotonic(
	builder: &mut VerificationBuilder,
	alpha: Scalar,
	beta: Scalar,
	column_eval: Scalar,
	chi: ChiEvaluation,
) -> Result<(), Error> {
	let shifted_column_eval = builder.consume_final_round_mle()?;
	let shifted_chi = builder.consume_chi_evaluation()?;
	ensure!(
		Some(shifted_chi.length) == chi.length.checked_add(1),
		VerificationError::MonotonyCheckFailed
	);

	verify_shift(
		builder,
		alpha,
		beta,
		column_eval,
		shifted_column_eval,
		chi.evaluation,
		shifted_chi.evaluation,
	)?;

	let indicator_eval = shifted_column_eval - column_eval;
	let sign_eval = verify_sign_decomposition(builder, indicator_eval, shifted_chi.evaluation)?;

	let first_row_eval = builder.singleton_chi_evaluation();
	let last_row_eval = shifted_chi.evaluation - chi.evaluation;
	let interior_eval = shifted_chi.evaluation - first_row_eval - last_row_eval;
	let allowed = [
		interior_eval,
		interior_eval + first_row_eval,
		interior_eval + last_row_eval,
		interior_eval + first_row_eval + last_row_eval,
	];
	ensure!(allowed.contains(&sign_eval), VerificationError::MonotonyCheckFailed);
	Ok(())
}
