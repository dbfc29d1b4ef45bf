// Copyright 2025 Irreducible Inc.

use super::{evaluate_exprs, evaluate_proof_plan, PlanEvaluation};
use crate::{builder::VerificationBuilder, codec::Cursor, Error};

/// Projection evaluates its select list over the input window and adds no constraints.
pub(super) fn projection_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
) -> Result<(Cursor<'a>, PlanEvaluation), Error> {
	let (cursor, input) = evaluate_proof_plan(cursor, builder)?;
	let output_chi = input.output_chi;
	let (cursor, column_evaluations) = evaluate_exprs(cursor, builder, output_chi.evaluation)?;
	Ok((
		cursor,
		PlanEvaluation {
			column_evaluations,
			output_chi,
		},
	))
}
