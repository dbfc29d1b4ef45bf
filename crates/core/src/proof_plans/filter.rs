// Copyright 2025 Irreducible Inc.

use super::{evaluate_exprs, fold_row, PlanEvaluation};
use crate::{
	builder::VerificationBuilder, codec::Cursor, proof_exprs::evaluate_proof_expr,
	proof_gadgets::verify_filter, Error,
};

/// Selection of table rows by a boolean predicate.
///
/// Consumes two challenges, one first round MLE per selected column and one output chi
/// evaluation, then the material of the filter gadget.
pub(super) fn filter_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
) -> Result<(Cursor<'a>, PlanEvaluation), Error> {
	let alpha = builder.consume_challenge()?;
	let beta = builder.consume_challenge()?;

	let (cursor, table_index) = cursor.read_usize()?;
	let input_chi = builder.table_chi_evaluation(table_index)?;
	let (cursor, selection_eval) = evaluate_proof_expr(cursor, builder, input_chi.evaluation)?;
	let (cursor, input_evals) = evaluate_exprs(cursor, builder, input_chi.evaluation)?;
	let c_fold = fold_row(alpha, beta, &input_evals);

	let output_evals = builder.consume_first_round_mles(input_evals.len())?;
	let d_fold = fold_row(alpha, beta, &output_evals);
	let output_chi = builder.consume_chi_evaluation()?;

	verify_filter(
		builder,
		c_fold,
		d_fold,
		input_chi.evaluation,
		output_chi.evaluation,
		selection_eval,
	)?;

	Ok((
		cursor,
		PlanEvaluation {
			column_evaluations: output_evals,
			output_chi,
		},
	))
}
