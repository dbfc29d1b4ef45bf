// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;

use crate::{builder::VerificationBuilder, Error};

/// Certifies that `shifted_column_eval` is the column prefixed by a single zero row.
///
/// Rows are tagged with their index through the rho evaluations: row `i` of the column is
/// matched against row `i + 1` of the shifted column, and the extra leading row of the shifted
/// column folds to zero. Consumes two rho evaluations and two final round MLEs, and produces one
/// zero-sum and two identity constraints.
pub fn verify_shift(
	builder: &mut VerificationBuilder,
	alpha: Scalar,
	beta: Scalar,
	column_eval: Scalar,
	shifted_column_eval: Scalar,
	chi_eval: Scalar,
	shifted_chi_eval: Scalar,
) -> Result<(), Error> {
	let rho_eval = builder.consume_rho_evaluation()?;
	let shifted_rho_eval = builder.consume_rho_evaluation()?;
	let c_star = builder.consume_final_round_mle()?;
	let d_star = builder.consume_final_round_mle()?;

	let c_fold = alpha * ((rho_eval + chi_eval) * beta + column_eval);
	let d_fold = alpha * (shifted_rho_eval * beta + shifted_column_eval);
	let singleton_chi_eval = builder.singleton_chi_evaluation();

	builder.produce_zerosum_constraint(c_star + singleton_chi_eval - d_star, 1)?;
	builder.produce_identity_constraint(c_star + c_fold * c_star - chi_eval, 2)?;
	builder.produce_identity_constraint(d_star + d_fold * d_star - shifted_chi_eval, 2)?;
	Ok(())
}
