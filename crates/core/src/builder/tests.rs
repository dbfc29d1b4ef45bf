// Copyright 2025 Irreducible Inc.

use assert_matches::assert_matches;
use proptest::prelude::*;
use sqlproof_field::Scalar;

use super::*;
use crate::{Error, VerificationError};

fn scalars(values: &[u64]) -> Vec<Scalar> {
	values.iter().copied().map(Scalar::from).collect()
}

#[test]
fn test_empty_queue_reports_its_kind() {
	let mut builder = VerificationBuilder::new(3);
	assert_matches!(
		builder.consume_challenge(),
		Err(Error::EmptyQueue(MaterialKind::Challenges))
	);
	assert_matches!(
		builder.consume_chi_evaluation(),
		Err(Error::EmptyQueue(MaterialKind::ChiEvaluations))
	);
	assert_matches!(
		builder.produce_zerosum_constraint(Scalar::ONE, 1),
		Err(Error::EmptyQueue(MaterialKind::ConstraintMultipliers))
	);
}

#[test]
fn test_pop_many_is_all_or_nothing() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_first_round_mles(scalars(&[1, 2, 3]));
	assert_matches!(
		builder.consume_first_round_mles(4),
		Err(Error::EmptyQueue(MaterialKind::FirstRoundMles))
	);
	assert_eq!(builder.first_round_mles().len(), 3);
	assert_eq!(builder.consume_first_round_mles(2).unwrap(), scalars(&[1, 2]));
	assert_eq!(builder.consume_first_round_mle().unwrap(), Scalar::from(3u64));
}

#[test]
fn test_array_lookup_is_bounds_checked() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_column_evaluations(scalars(&[10, 20]));
	assert_eq!(builder.column_evaluation(1).unwrap(), Scalar::from(20u64));
	assert_matches!(
		builder.column_evaluation(2),
		Err(Error::InvalidIndex {
			kind: MaterialKind::ColumnEvaluations,
			index: 2,
			length: 2
		})
	);
	// lookups do not consume
	assert_eq!(builder.column_evaluation(1).unwrap(), Scalar::from(20u64));
	assert_matches!(
		builder.table_chi_evaluation(0),
		Err(Error::InvalidIndex {
			kind: MaterialKind::TableChiEvaluations,
			..
		})
	);
}

#[test]
fn test_constraint_degree_gates() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_constraint_multipliers(scalars(&[1, 1, 1, 1]));

	builder.produce_zerosum_constraint(Scalar::ZERO, 3).unwrap();
	assert_matches!(
		builder.produce_zerosum_constraint(Scalar::ZERO, 4),
		Err(Error::Verification(VerificationError::ConstraintDegreeTooHigh {
			degree: 4,
			max_degree: 3
		}))
	);
	builder.produce_identity_constraint(Scalar::ZERO, 2).unwrap();
	assert_matches!(
		builder.produce_identity_constraint(Scalar::ZERO, 3),
		Err(Error::Verification(VerificationError::ConstraintDegreeTooHigh { .. }))
	);
	// rejected constraints do not consume multipliers
	assert_eq!(builder.constraint_multipliers().len(), 2);
}

#[test]
fn test_constraints_accumulate_weighted_by_multipliers() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_constraint_multipliers(scalars(&[5, 7]));
	builder.set_row_multipliers_evaluation(Scalar::from(11u64));

	builder.produce_zerosum_constraint(Scalar::from(2u64), 1).unwrap();
	builder.produce_identity_constraint(Scalar::from(3u64), 2).unwrap();

	let expected = Scalar::from(2u64 * 5 + 3 * 7 * 11);
	assert_eq!(builder.aggregate_evaluation(), expected);
	assert!(builder.constraint_multipliers().is_empty());
}

#[test]
fn test_check_aggregate_is_idempotent() {
	let mut builder = VerificationBuilder::new(3);
	assert_eq!(builder.check_aggregate_evaluation(), Ok(()));
	assert_eq!(builder.check_aggregate_evaluation(), Ok(()));

	builder.set_aggregate_evaluation(Scalar::ONE);
	for _ in 0..2 {
		assert_matches!(
			builder.check_aggregate_evaluation(),
			Err(VerificationError::AggregateEvaluationMismatch)
		);
		assert_eq!(builder.aggregate_evaluation(), Scalar::ONE);
	}
}

#[test]
fn test_remaining_material_counts_queues_only() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_challenges(scalars(&[1, 2]));
	builder.set_final_round_mles(scalars(&[3]));
	builder.set_chi_evaluations([ChiEvaluation::new(1, Scalar::ONE)]);
	builder.set_bit_distributions([BitDistribution::default()]);
	builder.set_column_evaluations(scalars(&[4, 5, 6]));
	assert_eq!(builder.remaining_material(), 5);

	builder.consume_challenge().unwrap();
	builder.consume_bit_distribution().unwrap();
	assert_eq!(builder.remaining_material(), 3);
}

proptest! {
	#[test]
	fn test_queue_is_fifo(values in prop::collection::vec(any::<u64>(), 0..32), lookups in 0usize..4) {
		let mut builder = VerificationBuilder::new(3);
		builder.set_rho_evaluations(values.iter().copied().map(Scalar::from));
		builder.set_placeholder_parameters(scalars(&[9]));
		for value in &values {
			for _ in 0..lookups {
				prop_assert_eq!(builder.placeholder_parameter(0).unwrap(), Scalar::from(9u64));
			}
			prop_assert_eq!(builder.consume_rho_evaluation().unwrap(), Scalar::from(*value));
		}
		prop_assert_eq!(
			builder.consume_rho_evaluation(),
			Err(Error::EmptyQueue(MaterialKind::RhoEvaluations))
		);
	}
}
