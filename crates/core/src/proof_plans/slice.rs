// Copyright 2025 Irreducible Inc.

use sqlproof_utils::{bail, ensure};

use super::{evaluate_proof_plan, fold_row, PlanEvaluation};
use crate::{
	builder::VerificationBuilder, codec::Cursor, proof_gadgets::verify_filter, Error,
	VerificationError,
};

/// Rows `[skip, skip + fetch)` of the input, clamped to the input length.
///
/// The selected rows are those inside the max window but not the offset window. Both windows
/// are read from the chi queue and their lengths are checked against `skip` and `fetch`.
pub(super) fn slice_evaluate<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
) -> Result<(Cursor<'a>, PlanEvaluation), Error> {
	let alpha = builder.consume_challenge()?;
	let beta = builder.consume_challenge()?;

	let (cursor, input) = evaluate_proof_plan(cursor, builder)?;
	let (cursor, skip) = cursor.read_usize()?;
	let (cursor, has_fetch) = cursor.read_bool()?;
	let (cursor, fetch) = if has_fetch {
		let (cursor, fetch) = cursor.read_usize()?;
		(cursor, Some(fetch))
	} else {
		(cursor, None)
	};

	let input_length = input.output_chi.length;
	let max_length = match fetch {
		Some(fetch) => skip.saturating_add(fetch).min(input_length),
		None => input_length,
	};
	let offset_length = skip.min(input_length);

	let offset_chi = builder.consume_chi_evaluation()?;
	ensure!(
		offset_chi.length == offset_length,
		Error::SliceOffsetPlanValueMismatch {
			expected: offset_length,
			actual: offset_chi.length,
		}
	);
	let max_chi = builder.consume_chi_evaluation()?;
	ensure!(
		max_chi.length == max_length,
		Error::SliceMaxLengthMismatch {
			expected: max_length,
			actual: max_chi.length,
		}
	);
	let selection_eval = max_chi.evaluation - offset_chi.evaluation;

	let c_fold = fold_row(alpha, beta, &input.column_evaluations);
	let output_evals = builder.consume_first_round_mles(input.column_evaluations.len())?;
	let d_fold = fold_row(alpha, beta, &output_evals);

	let output_chi = builder.consume_chi_evaluation()?;
	let Some(output_length) = max_length.checked_sub(offset_length) else {
		bail!(VerificationError::InternalError("slice window ends before it starts"));
	};
	ensure!(
		output_chi.length == output_length,
		Error::SliceOutputLengthMismatch {
			expected: output_length,
			actual: output_chi.length,
		}
	);

	verify_filter(
		builder,
		c_fold,
		d_fold,
		input.output_chi.evaluation,
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
