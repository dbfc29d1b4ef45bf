// Copyright 2025 Irreducible Inc.

use sqlproof_field::Scalar;
use sqlproof_utils::{bail, ensure};

use super::{evaluate_proof_plan, fold_row, PlanEvaluation};
use crate::{builder::VerificationBuilder, codec::Cursor, Error};

/// Concatenation of the rows of several inputs with equal column counts.
///
/// Each input contributes `c_star = chi / (1 + fold)` and the output `d_star` likewise; the
/// input fractions must sum to the output one.
pub(super) fn union_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
) -> Result<(Cursor<'a>, PlanEvaluation), Error> {
	let alpha = builder.consume_challenge()?;
	let beta = builder.consume_challenge()?;

	let (mut cursor, input_count) = cursor.read_usize()?;
	if input_count == 0 {
		bail!(Error::UnionNotEnoughInputPlans);
	}

	let mut column_count = None;
	let mut c_star_sum = Scalar::ZERO;
	let mut total_length = 0usize;
	for _ in 0..input_count {
		let (next, input) = evaluate_proof_plan(cursor, builder)?;
		cursor = next;

		let expected = *column_count.get_or_insert(input.column_evaluations.len());
		ensure!(
			input.column_evaluations.len() == expected,
			Error::UnionInvalidColumnCounts {
				expected,
				actual: input.column_evaluations.len(),
			}
		);

		let c_fold = fold_row(alpha, beta, &input.column_evaluations);
		let c_star = builder.consume_final_round_mle()?;
		builder.produce_identity_constraint(
			c_star + c_fold * c_star - input.output_chi.evaluation,
			2,
		)?;
		c_star_sum += c_star;
		total_length = total_length.saturating_add(input.output_chi.length);
	}

	let output_evals = builder.consume_first_round_mles(column_count.unwrap_or_default())?;
	let output_chi = builder.consume_chi_evaluation()?;
	ensure!(
		output_chi.length == total_length,
		Error::UnionOutputLengthMismatch {
			expected: total_length,
			actual: output_chi.length,
		}
	);

	let d_fold = fold_row(alpha, beta, &output_evals);
	let d_star = builder.consume_final_round_mle()?;
	builder.produce_identity_constraint(d_star + d_fold * d_star - output_chi.evaluation, 2)?;
	builder.produce_zerosum_constraint(c_star_sum - d_star, 1)?;

	Ok((
		cursor,
		PlanEvaluation {
			column_evaluations: output_evals,
			output_chi,
		},
	))
}
