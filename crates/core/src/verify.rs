// Copyright 2025 Irreducible Inc.

use auto_impl::auto_impl;
use sqlproof_field::Scalar;
use sqlproof_utils::{bail, ensure};
use tracing::{instrument, warn};

use crate::{
	builder::VerificationBuilder,
	codec::Cursor,
	config::VerifierConfig,
	proof_plans::{evaluate_proof_plan, PlanEvaluation},
	result_evaluation::verify_result_evaluations,
	Error, VerificationError,
};

/// Check of the round commitments loaded into a builder against the evaluations it consumed.
///
/// The commitment scheme itself lives outside this crate.
#[auto_impl(&, Box)]
pub trait CommitmentCheck {
	fn check_commitments(&self, builder: &VerificationBuilder) -> Result<(), VerificationError>;
}

/// Accepts every builder. Useful when the commitments were checked elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipCommitmentCheck;

impl CommitmentCheck for SkipCommitmentCheck {
	fn check_commitments(&self, _builder: &VerificationBuilder) -> Result<(), VerificationError> {
		Ok(())
	}
}

/// Verifies a query result against its proof plan.
///
/// The builder must already hold the proof material of the query. The plan is walked to
/// completion, after which the aggregate of the produced constraints must vanish, the
/// commitments must check out and every result column must evaluate to the matching output
/// column evaluation of the plan.
#[instrument(skip_all, name = "verify_query", level = "debug")]
pub fn verify_query(
	plan: &[u8],
	result: &[u8],
	column_names: &[&str],
	evaluation_point: &[Scalar],
	builder: &mut VerificationBuilder,
	config: &VerifierConfig,
	commitment_check: impl CommitmentCheck,
) -> Result<PlanEvaluation, Error> {
	let (cursor, evaluation) = evaluate_proof_plan(Cursor::new(plan), builder)?;
	ensure!(
		cursor.is_empty(),
		Error::TrailingPlanBytes {
			remaining: cursor.remaining()
		}
	);

	builder.check_aggregate_evaluation()?;

	let remaining = builder.remaining_material();
	if remaining != 0 {
		if config.strict_queue_drain {
			bail!(Error::QueuesNotDrained { remaining });
		}
		warn!("Verification builder is not fully consumed: {remaining} proof elements left");
	}

	commitment_check.check_commitments(builder)?;

	verify_result_evaluations(
		result,
		column_names,
		evaluation_point,
		&evaluation.column_evaluations,
	)?;
	Ok(evaluation)
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;
	use crate::{
		builder::{ChiEvaluation, CommitmentHandle},
		encode::{encode_result, ProofPlan, ResultColumn, Value},
	};

	struct RejectAll;

	impl CommitmentCheck for RejectAll {
		fn check_commitments(
			&self,
			_builder: &VerificationBuilder,
		) -> Result<(), VerificationError> {
			Err(VerificationError::RoundEvaluationMismatch)
		}
	}

	/// Expects a fixed number of first round commitments.
	struct FirstRoundCommitments(usize);

	impl CommitmentCheck for FirstRoundCommitments {
		fn check_commitments(&self, builder: &VerificationBuilder) -> Result<(), VerificationError> {
			ensure!(
				builder.first_round_commitments().len() == self.0,
				VerificationError::RoundEvaluationMismatch
			);
			Ok(())
		}
	}

	fn table_builder() -> VerificationBuilder {
		let mut builder = VerificationBuilder::new(3);
		builder.set_column_evaluations([Scalar::from(10u64), Scalar::from(20u64)]);
		builder.set_table_chi_evaluations([ChiEvaluation::new(1, Scalar::ONE)]);
		builder
	}

	fn table_plan() -> Vec<u8> {
		ProofPlan::Table {
			table: 0,
			columns: vec![0, 1],
		}
		.to_bytes()
	}

	fn result(a: i64, b: i64) -> Vec<u8> {
		encode_result(&[
			ResultColumn::new("a", vec![Value::BigInt(a)]),
			ResultColumn::new("b", vec![Value::BigInt(b)]),
		])
	}

	fn verify(
		plan: &[u8],
		result: &[u8],
		builder: &mut VerificationBuilder,
		config: VerifierConfig,
		commitment_check: impl CommitmentCheck,
	) -> Result<PlanEvaluation, Error> {
		verify_query(plan, result, &["a", "b"], &[], builder, &config, commitment_check)
	}

	#[test]
	fn test_accepts_table_scan() {
		let evaluation = verify(
			&table_plan(),
			&result(10, 20),
			&mut table_builder(),
			VerifierConfig::STRICT,
			SkipCommitmentCheck,
		)
		.unwrap();
		assert_eq!(evaluation.column_evaluations, [Scalar::from(10u64), Scalar::from(20u64)]);
		assert_eq!(evaluation.output_chi, ChiEvaluation::new(1, Scalar::ONE));
	}

	#[test]
	fn test_rejects_trailing_plan_bytes() {
		let mut plan = table_plan();
		plan.push(0);
		assert_matches!(
			verify(
				&plan,
				&result(10, 20),
				&mut table_builder(),
				VerifierConfig::STRICT,
				SkipCommitmentCheck
			),
			Err(Error::TrailingPlanBytes { remaining: 1 })
		);
	}

	#[test]
	fn test_rejects_nonzero_aggregate() {
		let mut builder = table_builder();
		builder.set_aggregate_evaluation(Scalar::ONE);
		assert_matches!(
			verify(
				&table_plan(),
				&result(10, 20),
				&mut builder,
				VerifierConfig::STRICT,
				SkipCommitmentCheck
			),
			Err(Error::Verification(VerificationError::AggregateEvaluationMismatch))
		);
	}

	#[test]
	fn test_queue_drain_is_configurable() {
		let lenient = VerifierConfig {
			strict_queue_drain: false,
		};
		let mut builder = table_builder();
		builder.set_challenges([Scalar::ONE]);
		verify(&table_plan(), &result(10, 20), &mut builder, lenient, SkipCommitmentCheck).unwrap();

		let mut builder = table_builder();
		builder.set_challenges([Scalar::ONE]);
		assert_matches!(
			verify(
				&table_plan(),
				&result(10, 20),
				&mut builder,
				VerifierConfig::STRICT,
				SkipCommitmentCheck
			),
			Err(Error::QueuesNotDrained { remaining: 1 })
		);
	}

	#[test]
	fn test_runs_commitment_check() {
		assert_matches!(
			verify(&table_plan(), &result(10, 20), &mut table_builder(), VerifierConfig::STRICT, RejectAll),
			Err(Error::Verification(VerificationError::RoundEvaluationMismatch))
		);

		let check = FirstRoundCommitments(1);
		let mut builder = table_builder();
		assert_matches!(
			verify(&table_plan(), &result(10, 20), &mut builder, VerifierConfig::STRICT, &check),
			Err(Error::Verification(VerificationError::RoundEvaluationMismatch))
		);
		builder = table_builder();
		builder.set_first_round_commitments(vec![CommitmentHandle::default()]);
		let boxed: Box<dyn CommitmentCheck> = Box::new(check);
		verify(&table_plan(), &result(10, 20), &mut builder, VerifierConfig::STRICT, boxed).unwrap();
	}

	#[test]
	fn test_rejects_wrong_result() {
		assert_matches!(
			verify(
				&table_plan(),
				&result(10, 21),
				&mut table_builder(),
				VerifierConfig::STRICT,
				SkipCommitmentCheck
			),
			Err(Error::IncorrectResult { column: 1 })
		);
	}
}
