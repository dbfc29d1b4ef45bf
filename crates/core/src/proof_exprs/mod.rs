// Copyright 2025 Irreducible Inc.

//! Evaluation of serialized proof expressions.
//!
//! An expression node starts with a 4-byte [`ProofExprVariant`] tag followed by its operands.
//! Every expression is evaluated relative to a row window given by the chi evaluation its plan
//! passes down, and yields the evaluation of the column it computes over that window.

mod arithmetic;
mod equals;
mod inequality;
mod leaf;
mod logical;
#[cfg(test)]
mod tests;

use sqlproof_field::Scalar;
use sqlproof_utils::bail;
use tracing::{debug, instrument};

use crate::{builder::VerificationBuilder, codec::Cursor, Error};

/// Wire tags of the proof expression variants.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProofExprVariant {
	Column = 0,
	Literal = 1,
	Equals = 2,
	Add = 3,
	Subtract = 4,
	Multiply = 5,
	And = 6,
	Or = 7,
	Not = 8,
	Cast = 9,
	Inequality = 10,
	Placeholder = 11,
	ScalingCast = 12,
}

impl ProofExprVariant {
	pub const ALL: [Self; 13] = [
		Self::Column,
		Self::Literal,
		Self::Equals,
		Self::Add,
		Self::Subtract,
		Self::Multiply,
		Self::And,
		Self::Or,
		Self::Not,
		Self::Cast,
		Self::Inequality,
		Self::Placeholder,
		Self::ScalingCast,
	];

	pub const fn tag(self) -> u32 {
		self as u32
	}
}

impl TryFrom<u32> for ProofExprVariant {
	type Error = Error;

	fn try_from(tag: u32) -> Result<Self, Self::Error> {
		match Self::ALL.get(tag as usize) {
			Some(variant) => Ok(*variant),
			None => bail!(Error::UnsupportedProofExprVariant(tag)),
		}
	}
}

/// Evaluates the expression at `cursor` over the window with chi evaluation `chi_eval`.
///
/// Returns the cursor positioned after the expression and its evaluation. Proof material is
/// consumed from `builder` in the order the prover produced it.
#[instrument(skip_all, name = "evaluate_proof_expr", level = "debug")]
pub fn evaluate_proof_expr<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar), Error> {
	let offset = cursor.offset();
	let (cursor, tag) = cursor.read_u32()?;
	let variant = ProofExprVariant::try_from(tag)?;
	debug!(?variant, offset, "evaluating expression");

	builder.enter_node()?;
	let evaluation = match variant {
		ProofExprVariant::Column => leaf::column_evaluate(cursor, builder),
		ProofExprVariant::Literal => leaf::literal_evaluate(cursor, chi_eval),
		ProofExprVariant::Placeholder => leaf::placeholder_evaluate(cursor, builder, chi_eval),
		ProofExprVariant::Equals => equals::equals_evaluate(cursor, builder, chi_eval),
		ProofExprVariant::Add => arithmetic::add_evaluate(cursor, builder, chi_eval),
		ProofExprVariant::Subtract => arithmetic::subtract_evaluate(cursor, builder, chi_eval),
		ProofExprVariant::Multiply => arithmetic::multiply_evaluate(cursor, builder, chi_eval),
		ProofExprVariant::Cast => arithmetic::cast_evaluate(cursor, builder, chi_eval),
		ProofExprVariant::ScalingCast => {
			arithmetic::scaling_cast_evaluate(cursor, builder, chi_eval)
		}
		ProofExprVariant::And => logical::and_evaluate(cursor, builder, chi_eval),
		ProofExprVariant::Or => logical::or_evaluate(cursor, builder, chi_eval),
		ProofExprVariant::Not => logical::not_evaluate(cursor, builder, chi_eval),
		ProofExprVariant::Inequality => inequality::inequality_evaluate(cursor, builder, chi_eval),
	};
	builder.exit_node();
	evaluation
}

/// Evaluates the two operands of a binary expression, left first.
fn evaluate_operands<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Scalar, Scalar), Error> {
	let (cursor, lhs) = evaluate_proof_expr(cursor, builder, chi_eval)?;
	let (cursor, rhs) = evaluate_proof_expr(cursor, builder, chi_eval)?;
	Ok((cursor, lhs, rhs))
}

/// Consumes the committed product of two columns and constrains it. Returns the product.
fn verify_product(
	builder: &mut VerificationBuilder,
	lhs: Scalar,
	rhs: Scalar,
) -> Result<Scalar, Error> {
	let product = builder.consume_final_round_mle()?;
	builder.produce_identity_constraint(product - lhs * rhs, 2)?;
	Ok(product)
}
