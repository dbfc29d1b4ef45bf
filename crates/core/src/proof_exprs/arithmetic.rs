// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;

use super::{evaluate_operands, evaluate_proof_expr, verify_product};
use crate::{
	builder::VerificationBuilder,
	codec::{read_data_type, Cursor},
	Error,
};

pub(super) fn add_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, lhs, rhs) = evaluate_operands(cursor, builder, chi_eval)?;
	Ok((cursor, lhs + rhs))
}

pub(super) fn subtract_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, lhs, rhs) = evaluate_operands(cursor, builder, chi_eval)?;
	Ok((cursor, lhs - rhs))
}

pub(super) fn multiply_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, lhs, rhs) = evaluate_operands(cursor, builder, chi_eval)?;
	let product = verify_product(builder, lhs, rhs)?;
	Ok((cursor, product))
}

/// Type casts between integer-like types do not change the field representation.
pub(super) fn cast_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, eval) = evaluate_proof_expr(cursor, builder, chi_eval)?;
	let (cursor, _) = read_data_type(cursor)?;
	Ok((cursor, eval))
}

/// Decimal rescaling multiplies every value by a constant power of ten.
pub(super) fn scaling_cast_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, eval) = evaluate_proof_expr(cursor, builder, chi_eval)?;
	let (cursor, _) = read_data_type(cursor)?;
	let (cursor, factor) = cursor.read_word()?;
	let factor = Scalar::new(factor)?;
	Ok((cursor, eval * factor))
}
