// Copyright 2025 Irreducible Inc.

use sqlproof_field::{Scalar, Square};
use sqlproof_utils::ensure;

use crate::{
	builder::{BitKind, VerificationBuilder, SIGN_BIT},
	Error, VerificationError,
};

/// Verifies a bit decomposition of the column evaluated to `evaluation` and returns the
/// evaluation of its sign column (one for negative rows, zero otherwise).
///
/// Consumes a bit distribution, then one final round MLE for the sign if it varies, then one
/// final round MLE per free bit in ascending order. Each committed bit gets a booleanity
/// identity constraint. Constant and sign-following bits are expressed through `chi_eval` and
/// the sign evaluation, and the whole decomposition must recompose to `evaluation`.
pub fn verify_sign_decomposition(
	builder: &mut VerificationBuilder,
	evaluation: Scalar,
	chi_eval: Scalar,
) -> Result<Scalar, Error> {
	let distribution = builder.consume_bit_distribution()?;
	distribution.validate()?;

	let sign_eval = if distribution.sign_varies() {
		builder.consume_final_round_mle()?
	} else if distribution.constant_sign() {
		chi_eval
	} else {
		Scalar::ZERO
	};
	let free_bit_evals = distribution
		.free_bits()
		.map(|_| builder.consume_final_round_mle())
		.collect::<Result<Vec<_>, _>>()?;

	if distribution.sign_varies() {
		builder.produce_identity_constraint(sign_eval - sign_eval.square(), 2)?;
	}
	for &bit_eval in &free_bit_evals {
		builder.produce_identity_constraint(bit_eval - bit_eval.square(), 2)?;
	}

	let mut free_bit_evals = free_bit_evals.into_iter();
	let mut recomposed = Scalar::ZERO;
	let mut power = Scalar::ONE;
	for index in 0..SIGN_BIT {
		let bit_eval = match distribution.bit_kind(index) {
			BitKind::Free => free_bit_evals
				.next()
				.ok_or(VerificationError::InternalError("free bit count changed"))?,
			BitKind::FollowsSign => sign_eval,
			BitKind::Constant(true) => chi_eval,
			BitKind::Constant(false) => Scalar::ZERO,
		};
		recomposed += power * bit_eval;
		power = power + power;
	}
	// the sign bit carries weight -2^255
	recomposed -= power * sign_eval;

	ensure!(recomposed == evaluation, VerificationError::BitDecompositionInvalid);
	Ok(sign_eval)
}
