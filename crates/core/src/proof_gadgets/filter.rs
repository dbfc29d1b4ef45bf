// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;

use crate::{builder::VerificationBuilder, Error};

/// Certifies that the output rows are the input rows selected by `selection_eval`, in order.
///
/// `c_fold` and `d_fold` are the challenge folds of the input and output rows. The prover
/// supplies `c_star = chi_in / (1 + c_fold)` and `d_star = chi_out / (1 + d_fold)` as final round
/// MLEs, and the selected part of the first must sum to the second. Produces one zero-sum and
/// three identity constraints.
pub fn verify_filter(
	builder: &mut VerificationBuilder,
	c_fold: Scalar,
	d_fold: Scalar,
	input_chi_eval: Scalar,
	output_chi_eval: Scalar,
	selection_eval: Scalar,
) -> Result<(), Error> {
	let c_star = builder.consume_final_round_mle()?;
	let d_star = builder.consume_final_round_mle()?;

	builder.produce_zerosum_constraint(c_star * selection_eval - d_star, 2)?;
	builder.produce_identity_constraint(c_star + c_fold * c_star - input_chi_eval, 2)?;
	builder.produce_identity_constraint(d_star + d_fold * d_star - output_chi_eval, 2)?;
	// output rows past the output window must fold to zero
	builder.produce_identity_constraint(d_fold * (output_chi_eval - Scalar::ONE), 2)?;
	Ok(())
}
