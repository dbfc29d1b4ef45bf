// Copyright 2025 Irreducible Inc.

//! Evaluation of serialized proof plans.
//!
//! A plan node starts with a 4-byte [`ProofPlanVariant`] tag. Evaluating a node yields the
//! evaluations of its output columns and the chi evaluation of its output window, after
//! producing the constraints that tie its output to its input.

mod filter;
mod group_by;
mod projection;
mod slice;
mod table;
mod union;

use sqlproof_field::Scalar;
use sqlproof_math::fold_vals;
use sqlproof_utils::bail;
use tracing::{debug, instrument};

use crate::{
	builder::{ChiEvaluation, VerificationBuilder},
	codec::Cursor,
	proof_exprs::evaluate_proof_expr,
	Error,
};

/// Wire tags of the proof plan variants.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProofPlanVariant {
	Filter = 0,
	Empty = 1,
	Table = 2,
	Projection = 3,
	Slice = 4,
	GroupBy = 5,
	Union = 6,
}

impl ProofPlanVariant {
	pub const ALL: [Self; 7] = [
		Self::Filter,
		Self::Empty,
		Self::Table,
		Self::Projection,
		Self::Slice,
		Self::GroupBy,
		Self::Union,
	];

	pub const fn tag(self) -> u32 {
		self as u32
	}
}

impl TryFrom<u32> for ProofPlanVariant {
	type Error = Error;

	fn try_from(tag: u32) -> Result<Self, Self::Error> {
		match Self::ALL.get(tag as usize) {
			Some(variant) => Ok(*variant),
			None => bail!(Error::UnsupportedProofPlanVariant(tag)),
		}
	}
}

/// Output of a plan node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEvaluation {
	pub column_evaluations: Vec<Scalar>,
	pub output_chi: ChiEvaluation,
}

/// Evaluates the plan at `cursor`, returning the cursor positioned after it.
#[instrument(skip_all, name = "evaluate_proof_plan", level = "debug")]
pub fn evaluate_proof_plan<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
) -> Result<(Cursor<'a>, PlanEvaluation), Error> {
	let offset = cursor.offset();
	let (cursor, tag) = cursor.read_u32()?;
	let variant = ProofPlanVariant::try_from(tag)?;
	debug!(?variant, offset, "evaluating plan");

	builder.enter_node()?;
	let evaluation = match variant {
		ProofPlanVariant::Filter => filter::filter_evaluate(cursor, builder),
		ProofPlanVariant::Empty => Ok((cursor, empty_evaluate(builder))),
		ProofPlanVariant::Table => table::table_evaluate(cursor, builder),
		ProofPlanVariant::Projection => projection::projection_evaluate(cursor, builder),
		ProofPlanVariant::Slice => slice::slice_evaluate(cursor, builder),
		ProofPlanVariant::GroupBy => group_by::group_by_evaluate(cursor, builder),
		ProofPlanVariant::Union => union::union_evaluate(cursor, builder),
	};
	builder.exit_node();
	evaluation
}

/// The single-row relation with no columns.
fn empty_evaluate(builder: &VerificationBuilder) -> PlanEvaluation {
	PlanEvaluation {
		column_evaluations: Vec::new(),
		output_chi: ChiEvaluation::new(1, builder.singleton_chi_evaluation()),
	}
}

/// Reads an 8-byte count followed by that many 8-byte indices.
fn read_indices(cursor: Cursor<'_>) -> Result<(Cursor<'_>, Vec<usize>), Error> {
	let (mut cursor, count) = cursor.read_usize()?;
	let mut indices = Vec::new();
	for _ in 0..count {
		let (next, index) = cursor.read_usize()?;
		indices.push(index);
		cursor = next;
	}
	Ok((cursor, indices))
}

/// Reads an 8-byte count followed by that many expressions, evaluated over `chi_eval`.
fn evaluate_exprs<'a>(
	cursor: Cursor<'a>,
	builder: &mut VerificationBuilder,
	chi_eval: Scalar,
) -> Result<(Cursor<'a>, Vec<Scalar>), Error> {
	let (mut cursor, count) = cursor.read_usize()?;
	let mut evals = Vec::new();
	for _ in 0..count {
		let (next, eval) = evaluate_proof_expr(cursor, builder, chi_eval)?;
		evals.push(eval);
		cursor = next;
	}
	Ok((cursor, evals))
}

/// Challenge fold `alpha * fold(beta, evals)` of one row of a relation.
fn fold_row(alpha: Scalar, beta: Scalar, evals: &[Scalar]) -> Scalar {
	alpha * fold_vals(beta, evals)
}
