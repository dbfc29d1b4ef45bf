// Copyright 2025 Irreducible Inc.

use alloy_primitives::U256;
use assert_matches::assert_matches;
use proptest::prelude::*;
use sqlproof_field::{Scalar, MODULUS};

use super::*;
use crate::{
	builder::{MaterialKind, MAX_NESTING_DEPTH},
	codec::DataType,
	encode::{ProofExpr, Value},
	test_utils::{chi, mle, random_point, scalars, sign_column_eval, sign_hint},
	VerificationError,
};

fn bigint(value: i64) -> ProofExpr {
	ProofExpr::literal(Value::BigInt(value))
}

fn evaluate(
	expr: &ProofExpr,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<Scalar, Error> {
	let bytes = expr.to_bytes();
	let (cursor, eval) = evaluate_proof_expr(Cursor::new(&bytes), builder, chi_eval)?;
	assert!(cursor.is_empty());
	Ok(eval)
}

#[test]
fn test_variant_tags_round_trip() {
	for (tag, variant) in ProofExprVariant::ALL.iter().enumerate() {
		assert_eq!(variant.tag(), tag as u32);
		assert_eq!(ProofExprVariant::try_from(tag as u32).unwrap(), *variant);
	}
}

#[test]
fn test_literal_is_scaled_by_chi() {
	let bytes = [
		1u32.to_be_bytes().as_slice(),
		DataType::BIGINT_TAG.to_be_bytes().as_slice(),
		2i64.to_be_bytes().as_slice(),
	]
	.concat();
	let mut builder = VerificationBuilder::new(3);
	let (cursor, eval) =
		evaluate_proof_expr(Cursor::new(&bytes), &mut builder, Scalar::from(3u64)).unwrap();
	assert_eq!(eval, Scalar::from(6u64));
	assert!(cursor.is_empty());
}

#[test]
fn test_literal_rejects_scalar_type() {
	let expr = ProofExpr::literal(Value::Scalar(U256::from(1u64)));
	let mut builder = VerificationBuilder::new(3);
	assert_matches!(
		evaluate(&expr, &mut builder, Scalar::ONE),
		Err(Error::UnsupportedDataTypeVariant(DataType::Scalar))
	);
}

#[test]
fn test_column_and_placeholder_lookups() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_column_evaluations(scalars(&[10, 20]));
	builder.set_placeholder_parameters(scalars(&[7]));

	let column = evaluate(&ProofExpr::column(1), &mut builder, Scalar::ONE).unwrap();
	assert_eq!(column, Scalar::from(20u64));
	let placeholder = ProofExpr::placeholder(0, DataType::Int);
	let placeholder = evaluate(&placeholder, &mut builder, Scalar::from(5u64)).unwrap();
	assert_eq!(placeholder, Scalar::from(35u64));

	assert_matches!(
		evaluate(&ProofExpr::column(2), &mut builder, Scalar::ONE),
		Err(Error::InvalidIndex {
			kind: MaterialKind::ColumnEvaluations,
			index: 2,
			length: 2
		})
	);
	assert_matches!(
		evaluate(&ProofExpr::placeholder(1, DataType::Int), &mut builder, Scalar::ONE),
		Err(Error::InvalidIndex {
			kind: MaterialKind::PlaceholderParameters,
			..
		})
	);
}

#[test]
fn test_linear_expressions_produce_no_constraints() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_column_evaluations(scalars(&[10, 4]));
	let chi_eval = Scalar::from(2u64);

	let sum = ProofExpr::add(ProofExpr::column(0), bigint(3));
	assert_eq!(evaluate(&sum, &mut builder, chi_eval).unwrap(), Scalar::from(16u64));

	let difference = ProofExpr::subtract(ProofExpr::column(1), ProofExpr::column(0));
	assert_eq!(evaluate(&difference, &mut builder, chi_eval).unwrap(), Scalar::from(-6i64));

	let negation = ProofExpr::not(ProofExpr::column(1));
	assert_eq!(evaluate(&negation, &mut builder, chi_eval).unwrap(), Scalar::from(-2i64));

	let cast = ProofExpr::cast(ProofExpr::column(1), DataType::BigInt);
	assert_eq!(evaluate(&cast, &mut builder, chi_eval).unwrap(), Scalar::from(4u64));

	assert_eq!(builder.aggregate_evaluation(), Scalar::ZERO);
}

#[test]
fn test_scaling_cast() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_column_evaluations(scalars(&[-7]));
	let target = DataType::Decimal75 {
		precision: 20,
		scale: 2,
	};

	let cast = ProofExpr::scaling_cast(ProofExpr::column(0), target, U256::from(100u64));
	assert_eq!(evaluate(&cast, &mut builder, Scalar::ONE).unwrap(), Scalar::from(-700i64));

	let overflowing = ProofExpr::scaling_cast(ProofExpr::column(0), target, MODULUS);
	assert_matches!(
		evaluate(&overflowing, &mut builder, Scalar::ONE),
		Err(Error::Field(sqlproof_field::Error::NotInField))
	);
}

#[test]
fn test_equals_of_equal_values() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_final_round_mles([Scalar::ZERO, Scalar::ONE]);
	builder.set_constraint_multipliers(scalars(&[3, 5]));
	builder.set_row_multipliers_evaluation(Scalar::from(7u64));

	let expr = ProofExpr::equals(bigint(5), bigint(5));
	assert_eq!(evaluate(&expr, &mut builder, Scalar::ONE).unwrap(), Scalar::ONE);
	assert_eq!(builder.check_aggregate_evaluation(), Ok(()));
}

#[test]
fn test_equals_of_distinct_values() {
	let diff_star = Scalar::from(-2i64).invert().unwrap();

	let mut builder = VerificationBuilder::new(3);
	builder.set_final_round_mles([diff_star, Scalar::ZERO]);
	builder.set_constraint_multipliers(scalars(&[3, 5]));
	builder.set_row_multipliers_evaluation(Scalar::from(7u64));

	let expr = ProofExpr::equals(bigint(5), bigint(7));
	assert_eq!(evaluate(&expr, &mut builder, Scalar::ONE).unwrap(), Scalar::ZERO);
	assert_eq!(builder.check_aggregate_evaluation(), Ok(()));

	// claiming equality of distinct values leaves a residue
	let mut builder = VerificationBuilder::new(3);
	builder.set_final_round_mles([diff_star, Scalar::ONE]);
	builder.set_constraint_multipliers(scalars(&[3, 5]));
	builder.set_row_multipliers_evaluation(Scalar::from(7u64));
	evaluate(&expr, &mut builder, Scalar::ONE).unwrap();
	assert_matches!(
		builder.check_aggregate_evaluation(),
		Err(VerificationError::AggregateEvaluationMismatch)
	);
}

#[test]
fn test_equals_accumulates_both_identities() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_final_round_mles(scalars(&[0, 123]));
	builder.set_constraint_multipliers(scalars(&[456, 457]));
	builder.set_row_multipliers_evaluation(Scalar::from(789u64));

	let chi_eval = Scalar::from(999u64);
	let expr = ProofExpr::equals(bigint(2), bigint(2));
	assert_eq!(evaluate(&expr, &mut builder, chi_eval).unwrap(), Scalar::from(123u64));

	let (diff_star, result, row) = (Scalar::ZERO, Scalar::from(123u64), Scalar::from(789u64));
	let diff = Scalar::from(2u64) * chi_eval - Scalar::from(2u64) * chi_eval;
	let expected = result * diff * Scalar::from(456u64) * row
		+ (chi_eval - (diff * diff_star + result)) * Scalar::from(457u64) * row;
	assert_eq!(builder.aggregate_evaluation(), expected);
	assert!(builder.final_round_mles().is_empty());
	assert!(builder.constraint_multipliers().is_empty());
}

#[test]
fn test_equals_respects_degree_bound() {
	let mut builder = VerificationBuilder::new(2);
	builder.set_final_round_mles(scalars(&[0, 1]));
	builder.set_constraint_multipliers(scalars(&[1, 1]));
	assert_matches!(
		evaluate(&ProofExpr::equals(bigint(1), bigint(1)), &mut builder, Scalar::ONE),
		Err(Error::Verification(VerificationError::ConstraintDegreeTooHigh { .. }))
	);
}

#[test]
fn test_product_gadgets() {
	let row = Scalar::from(11u64);
	let (lhs, rhs) = (Scalar::from(3u64), Scalar::from(4u64));

	for (expr, committed, expected_eval) in [
		(ProofExpr::multiply(ProofExpr::column(0), ProofExpr::column(1)), 12u64, 12i64),
		(ProofExpr::and(ProofExpr::column(0), ProofExpr::column(1)), 12, 12),
		(ProofExpr::or(ProofExpr::column(0), ProofExpr::column(1)), 12, 3 + 4 - 12),
	] {
		let mut builder = VerificationBuilder::new(3);
		builder.set_column_evaluations([lhs, rhs]);
		builder.set_final_round_mles([Scalar::from(committed)]);
		builder.set_constraint_multipliers(scalars(&[9]));
		builder.set_row_multipliers_evaluation(row);

		let eval = evaluate(&expr, &mut builder, Scalar::ONE).unwrap();
		assert_eq!(eval, Scalar::from(expected_eval));
		assert_eq!(builder.check_aggregate_evaluation(), Ok(()));
	}

	// a wrong committed product is caught by the aggregate
	let mut builder = VerificationBuilder::new(3);
	builder.set_column_evaluations([lhs, rhs]);
	builder.set_final_round_mles(scalars(&[13]));
	builder.set_constraint_multipliers(scalars(&[9]));
	builder.set_row_multipliers_evaluation(row);
	let product = ProofExpr::multiply(ProofExpr::column(0), ProofExpr::column(1));
	evaluate(&product, &mut builder, Scalar::ONE).unwrap();
	assert_eq!(builder.aggregate_evaluation(), Scalar::from(9u64 * 11));
}

#[test]
fn test_inequality_on_columns() {
	let point = random_point(2, 7);
	let a = scalars(&[1, 5, 3, -4]);
	let b = scalars(&[2, 2, 3, -9]);
	let chi_eval = chi(a.len(), &point).evaluation;

	for is_lt in [true, false] {
		let diff = a
			.iter()
			.zip(&b)
			.map(|(x, y)| if is_lt { *x - *y } else { *y - *x })
			.collect::<Vec<_>>();
		let (distribution, bit_evals) = sign_hint(&diff, &point);

		let mut builder = VerificationBuilder::new(3);
		builder.set_column_evaluations([mle(&a, &point), mle(&b, &point)]);
		builder.set_bit_distributions([distribution]);
		builder.set_final_round_mles(bit_evals.clone());
		builder.set_constraint_multipliers(vec![Scalar::ONE; bit_evals.len()]);

		let expr = if is_lt {
			ProofExpr::less_than(ProofExpr::column(0), ProofExpr::column(1))
		} else {
			ProofExpr::greater_than(ProofExpr::column(0), ProofExpr::column(1))
		};
		let eval = evaluate(&expr, &mut builder, chi_eval).unwrap();
		assert_eq!(eval, sign_column_eval(&diff, &point));
		assert_eq!(builder.remaining_material(), 0);
	}
}

#[test]
fn test_inequality_rejects_invalid_flag() {
	let mut bytes = ProofExpr::less_than(bigint(1), bigint(2)).to_bytes();
	let last = bytes.len() - 1;
	bytes[last] = 2;
	let mut builder = VerificationBuilder::new(3);
	assert_matches!(
		evaluate_proof_expr(Cursor::new(&bytes), &mut builder, Scalar::ONE),
		Err(Error::InvalidBoolean(2))
	);
}

#[test]
fn test_nested_expressions_consume_in_preorder() {
	// (c0 = 1) or (c1 = 2): both equalities consume their hints before the disjunction's product
	let expr = ProofExpr::or(
		ProofExpr::equals(ProofExpr::column(0), bigint(1)),
		ProofExpr::equals(ProofExpr::column(1), bigint(2)),
	);
	let mut builder = VerificationBuilder::new(3);
	builder.set_column_evaluations(scalars(&[1, 5]));
	builder.set_final_round_mles([
		Scalar::ZERO,
		Scalar::ONE,
		Scalar::from(3i64).invert().unwrap(),
		Scalar::ZERO,
		Scalar::ZERO,
	]);
	builder.set_constraint_multipliers(scalars(&[2, 3, 5, 7, 11]));
	builder.set_row_multipliers_evaluation(Scalar::from(13u64));

	assert_eq!(evaluate(&expr, &mut builder, Scalar::ONE).unwrap(), Scalar::ONE);
	assert_eq!(builder.check_aggregate_evaluation(), Ok(()));
	assert_eq!(builder.remaining_material(), 0);
}

#[test]
fn test_truncated_expression() {
	let bytes = ProofExpr::add(bigint(1), bigint(2)).to_bytes();
	let mut builder = VerificationBuilder::new(3);
	assert_matches!(
		evaluate_proof_expr(Cursor::new(&bytes[..bytes.len() - 1]), &mut builder, Scalar::ONE),
		Err(Error::NotEnoughBytes { .. })
	);
}

/// `depth` nested negations of column 0, written straight to bytes.
fn negation_chain(depth: usize) -> Vec<u8> {
	let not_tag = ProofExprVariant::Not.tag().to_be_bytes();
	let mut bytes = not_tag.repeat(depth);
	bytes.extend(ProofExprVariant::Column.tag().to_be_bytes());
	bytes.extend(0u64.to_be_bytes());
	bytes
}

#[test]
fn test_nested_negations_within_limit() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_column_evaluations(scalars(&[5]));
	let bytes = negation_chain(32);
	let (cursor, eval) =
		evaluate_proof_expr(Cursor::new(&bytes), &mut builder, Scalar::ONE).unwrap();
	assert!(cursor.is_empty());
	assert_eq!(eval, Scalar::from(5u64));
	assert_eq!(builder.nesting_depth(), 0);
}

#[test]
fn test_deeply_nested_expression_is_rejected() {
	let mut builder = VerificationBuilder::new(3);
	builder.set_column_evaluations(scalars(&[5]));
	let bytes = negation_chain(200_000);
	assert_eq!(
		evaluate_proof_expr(Cursor::new(&bytes), &mut builder, Scalar::ONE),
		Err(Error::NestingTooDeep {
			limit: MAX_NESTING_DEPTH
		})
	);
	assert_eq!(builder.nesting_depth(), 0);

	let bytes = negation_chain(MAX_NESTING_DEPTH - 1);
	assert!(evaluate_proof_expr(Cursor::new(&bytes), &mut builder, Scalar::ONE).is_ok());
	let bytes = negation_chain(MAX_NESTING_DEPTH);
	assert_matches!(
		evaluate_proof_expr(Cursor::new(&bytes), &mut builder, Scalar::ONE),
		Err(Error::NestingTooDeep { .. })
	);
}

proptest! {
	#[test]
	fn test_unsupported_variant(tag in 13u32.., trailing in any::<Vec<u8>>()) {
		let mut bytes = tag.to_be_bytes().to_vec();
		bytes.extend(trailing);
		let mut builder = VerificationBuilder::new(3);
		builder.set_final_round_mles(scalars(&[1]));
		prop_assert_eq!(
			evaluate_proof_expr(Cursor::new(&bytes), &mut builder, Scalar::ONE),
			Err(Error::UnsupportedProofExprVariant(tag))
		);
		prop_assert_eq!(builder.remaining_material(), 1);
	}
}
