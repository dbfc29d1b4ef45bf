// Copyright 2025 Irreducible Inc.

use super::{read_indices, PlanEvaluation};
use crate::{builder::VerificationBuilder, codec::Cursor, Error};

/// A committed table: its columns are looked up by index, its window by table index.
pub(super) fn table_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
) -> Result<(Cursor<'a>, PlanEvaluation), Error> {
	let (cursor, table_index) = cursor.read_usize()?;
	let (cursor, column_indices) = read_indices(cursor)?;

	let output_chi = builder.table_chi_evaluation(table_index)?;
	let column_evaluations = column_indices
		.into_iter()
		.map(|index| builder.column_evaluation(index))
		.collect::<Result<Vec<_>, _>>()?;
	Ok((
		cursor,
		PlanEvaluation {
			column_evaluations,
			output_chi,
		},
	))
}
