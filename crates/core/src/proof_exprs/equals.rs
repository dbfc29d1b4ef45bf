// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;

use super::evaluate_operands;
use crate::{builder::VerificationBuilder, codec::Cursor, Error};

/// Equality through an inverse hint.
///
/// With `diff = lhs - rhs`, the prover commits to `diff_star` (the inverse of `diff` where it is
/// nonzero) and to the result column. The constraints `result * diff = 0` and
/// `diff * diff_star + result = chi` force the result to be one exactly where `diff` is zero.
pub(super) fn equals_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, lhs, rhs) = evaluate_operands(cursor, builder, chi_eval)?;
	let diff = lhs - rhs;
	let diff_star = builder.consume_final_round_mle()?;
	let result = builder.consume_final_round_mle()?;

	builder.produce_identity_constraint(result * diff, 2)?;
	builder.produce_identity_constraint(chi_eval - (diff * diff_star + result), 2)?;
	Ok((cursor, result))
}
