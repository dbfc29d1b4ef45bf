// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;
use sqlproof_math::fold_vals;
use sqlproof_utils::ensure;

use super::{evaluate_exprs, fold_row, read_indices, PlanEvaluation};
use crate::{
	builder::VerificationBuilder, codec::Cursor, proof_exprs::evaluate_proof_expr,
	proof_gadgets::verify_monotonic, Error, VerificationError,
};

/// Grouped sums and counts over the rows of a table that satisfy a predicate.
///
/// The output has one column per group-by column, one per sum expression and a trailing count
/// column. Input and output rows are matched through their group keys: for every key the
/// predicate-weighted input rows, folded with their sums and a one, must add up to the output
/// row folded with its sums and count. With one group-by column the output keys must be strictly
/// increasing, which makes them distinct. Without group-by columns the output is a single row,
/// or none at all.
pub(super) fn group_by_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
) -> Result<(Cursor<'a>, PlanEvaluation), Error> {
	let alpha = builder.consume_challenge()?;
	let beta = builder.consume_challenge()?;

	let (cursor, table_index) = cursor.read_usize()?;
	let input_chi = builder.table_chi_evaluation(table_index)?;
	let (cursor, group_by_indices) = read_indices(cursor)?;
	ensure!(group_by_indices.len() <= 1, VerificationError::UnprovableGroupBy);
	let group_by_in = group_by_indices
		.into_iter()
		.map(|index| builder.column_evaluation(index))
		.collect::<Result<Vec<_>, _>>()?;

	let (cursor, where_eval) = evaluate_proof_expr(cursor, builder, input_chi.evaluation)?;
	let (cursor, sums_in) = evaluate_exprs(cursor, builder, input_chi.evaluation)?;

	let group_by_out = builder.consume_first_round_mles(group_by_in.len())?;
	let sums_out = builder.consume_first_round_mles(sums_in.len())?;
	let count_out = builder.consume_first_round_mle()?;
	let output_chi = builder.consume_chi_evaluation()?;

	if group_by_in.is_empty() {
		ensure!(output_chi.length <= 1, VerificationError::UnprovableGroupBy);
		ensure!(
			output_chi.length == 0
				|| output_chi.evaluation == builder.singleton_chi_evaluation(),
			VerificationError::UnprovableGroupBy
		);
	}

	let g_in_star = builder.consume_final_round_mle()?;
	let g_out_star = builder.consume_final_round_mle()?;

	let g_in_fold = fold_row(alpha, beta, &group_by_in);
	let g_out_fold = fold_row(alpha, beta, &group_by_out);
	let sum_in_fold = input_chi.evaluation + beta * fold_vals(beta, &sums_in);
	let sum_out_fold = count_out + beta * fold_vals(beta, &sums_out);

	builder.produce_zerosum_constraint(
		g_in_star * where_eval * sum_in_fold - g_out_star * sum_out_fold,
		3,
	)?;
	builder.produce_identity_constraint(
		g_in_star + g_in_star * g_in_fold - input_chi.evaluation,
		2,
	)?;
	builder.produce_identity_constraint(
		g_out_star + g_out_star * g_out_fold - output_chi.evaluation,
		2,
	)?;

	if let [group_key] = group_by_out.as_slice() {
		verify_monotonic(builder, alpha, beta, *group_key, output_chi)?;
	}

	let column_evaluations = group_by_out
		.into_iter()
		.chain(sums_out)
		.chain(std::iter::once(count_out))
		.collect::<Vec<Scalar>>();
	Ok((
		cursor,
		PlanEvaluation {
			column_evaluations,
			output_chi,
		},
	))
}
