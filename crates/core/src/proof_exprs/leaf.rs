// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;

use crate::{
	builder::VerificationBuilder,
	codec::{read_data_type, read_entry, Cursor},
	Error,
};

pub(super) fn column_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &VerificationBuilder,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, index) = cursor.read_usize()?;
	Ok((cursor, builder.column_evaluation(index)?))
}

/// A literal broadcast over the window evaluates to the literal times the chi evaluation.
pub(super) fn literal_evaluate(
	cursor: Cursor<'_>,
	chi_eval: Scalar,
) -> Result<(Cursor<'_>, Scalar), Error> {
	let (cursor, data_type) = read_data_type(cursor)?;
	let (cursor, value) = read_entry(cursor, data_type)?;
	Ok((cursor, value * chi_eval))
}

pub(super) fn placeholder_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let (cursor, index) = cursor.read_usize()?;
	// the declared type is only validated
	let (cursor, _) = read_data_type(cursor)?;
	let value = builder.placeholder_parameter(index)?;
	Ok((cursor, value * chi_eval))
}
