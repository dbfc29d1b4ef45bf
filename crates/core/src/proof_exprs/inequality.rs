// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;

use super::evaluate_operands;
use crate::{
	builder::VerificationBuilder, codec::Cursor, proof_gadgets::verify_sign_decomposition, Error,
};

/// Strict comparison. The result is the sign column of `lhs - rhs` for `<`, or of `rhs - lhs`
/// for `>`.
pub(super) fn inequality_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, lhs, rhs) = evaluate_operands(cursor, builder, chi_eval)?;
	let (cursor, is_lt) = cursor.read_bool()?;
	let diff = if is_lt { lhs - rhs } else { rhs - lhs };
	let sign_eval = verify_sign_decomposition(builder, diff, chi_eval)?;
	Ok((cursor, sign_eval))
}
