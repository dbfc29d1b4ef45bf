// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;

use super::{evaluate_operands, evaluate_proof_expr, verify_product};
use crate::{builder::VerificationBuilder, codec::Cursor, Error};

pub(super) fn and_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, lhs, rhs) = evaluate_operands(cursor, builder, chi_eval)?;
	let conjunction = verify_product(builder, lhs, rhs)?;
	Ok((cursor, conjunction))
}

pub(super) fn or_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, lhs, rhs) = evaluate_operands(cursor, builder, chi_eval)?;
	let lhs_times_rhs = verify_product(builder, lhs, rhs)?;
	Ok((cursor, lhs + rhs - lhs_times_rhs))
}

pub(super) fn not_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, eval) = evaluate_proof_expr(cursor, builder, chi_eval)?;
	Ok((cursor, chi_eval - eval))
}
