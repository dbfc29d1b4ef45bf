// Copyright 2025 Irreducible Inc.

use alloy_primitives::U256;
use getset::{CopyGetters, Getters};
use sqlproof_field::Scalar;
use sqlproof_utils::{bail, ensure};

use super::{BitDistribution, EvaluationArray, EvaluationQueue, MaterialKind};
use crate::{Error, VerificationError};

/// Maximum combined nesting of plan and expression nodes read from the wire.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Length and MLE evaluation of an all-ones indicator column over a row window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChiEvaluation {
	pub length: usize,
	pub evaluation: Scalar,
}

impl ChiEvaluation {
	pub const fn new(length: usize, evaluation: Scalar) -> Self {
		Self { length, evaluation }
	}
}

/// Handle to a commitment point carried alongside a round of MLEs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitmentHandle {
	pub x: U256,
	pub y: U256,
}

/// Mutable verification context threaded through a plan evaluation.
///
/// The builder owns every piece of proof material as a FIFO queue or an indexed array and
/// accumulates the random linear combination of all constraints produced while walking the
/// plan. A proof is accepted only if that combination is zero at the end, see
/// [`Self::check_aggregate_evaluation`].
///
/// Queues must be consumed in the exact order the prover serialized them; the plan and
/// expression evaluators are written to follow that order.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct VerificationBuilder {
	#[get = "pub"]
	challenges: EvaluationQueue<Scalar>,
	#[get = "pub"]
	first_round_mles: EvaluationQueue<Scalar>,
	#[get = "pub"]
	final_round_mles: EvaluationQueue<Scalar>,
	#[get = "pub"]
	chi_evaluations: EvaluationQueue<ChiEvaluation>,
	#[get = "pub"]
	rho_evaluations: EvaluationQueue<Scalar>,
	#[get = "pub"]
	bit_distributions: EvaluationQueue<BitDistribution>,
	#[get = "pub"]
	constraint_multipliers: EvaluationQueue<Scalar>,
	#[get = "pub"]
	column_evaluations: EvaluationArray<Scalar>,
	#[get = "pub"]
	table_chi_evaluations: EvaluationArray<ChiEvaluation>,
	#[get = "pub"]
	placeholder_parameters: EvaluationArray<Scalar>,
	#[get = "pub"]
	first_round_commitments: Vec<CommitmentHandle>,
	#[get = "pub"]
	final_round_commitments: Vec<CommitmentHandle>,
	#[get_copy = "pub"]
	max_degree: usize,
	#[get_copy = "pub"]
	aggregate_evaluation: Scalar,
	#[get_copy = "pub"]
	row_multipliers_evaluation: Scalar,
	#[get_copy = "pub"]
	singleton_chi_evaluation: Scalar,
	/// Plan and expression nodes currently being evaluated.
	#[get_copy = "pub"]
	nesting_depth: usize,
}

impl Default for VerificationBuilder {
	fn default() -> Self {
		Self::new(0)
	}
}

impl VerificationBuilder {
	/// Creates a builder with empty material and a zero aggregate.
	pub fn new(max_degree: usize) -> Self {
		Self {
			challenges: EvaluationQueue::empty(MaterialKind::Challenges),
			first_round_mles: EvaluationQueue::empty(MaterialKind::FirstRoundMles),
			final_round_mles: EvaluationQueue::empty(MaterialKind::FinalRoundMles),
			chi_evaluations: EvaluationQueue::empty(MaterialKind::ChiEvaluations),
			rho_evaluations: EvaluationQueue::empty(MaterialKind::RhoEvaluations),
			bit_distributions: EvaluationQueue::empty(MaterialKind::BitDistributions),
			constraint_multipliers: EvaluationQueue::empty(MaterialKind::ConstraintMultipliers),
			column_evaluations: EvaluationArray::empty(MaterialKind::ColumnEvaluations),
			table_chi_evaluations: EvaluationArray::empty(MaterialKind::TableChiEvaluations),
			placeholder_parameters: EvaluationArray::empty(MaterialKind::PlaceholderParameters),
			first_round_commitments: Vec::new(),
			final_round_commitments: Vec::new(),
			max_degree,
			aggregate_evaluation: Scalar::ZERO,
			row_multipliers_evaluation: Scalar::ZERO,
			singleton_chi_evaluation: Scalar::ZERO,
			nesting_depth: 0,
		}
	}

	pub fn set_challenges(&mut self, values: impl IntoIterator<Item = Scalar>) {
		self.challenges.refill(values);
	}

	pub fn set_first_round_mles(&mut self, values: impl IntoIterator<Item = Scalar>) {
		self.first_round_mles.refill(values);
	}

	pub fn set_final_round_mles(&mut self, values: impl IntoIterator<Item = Scalar>) {
		self.final_round_mles.refill(values);
	}

	pub fn set_chi_evaluations(&mut self, values: impl IntoIterator<Item = ChiEvaluation>) {
		self.chi_evaluations.refill(values);
	}

	pub fn set_rho_evaluations(&mut self, values: impl IntoIterator<Item = Scalar>) {
		self.rho_evaluations.refill(values);
	}

	pub fn set_bit_distributions(&mut self, values: impl IntoIterator<Item = BitDistribution>) {
		self.bit_distributions.refill(values);
	}

	pub fn set_constraint_multipliers(&mut self, values: impl IntoIterator<Item = Scalar>) {
		self.constraint_multipliers.refill(values);
	}

	pub fn set_column_evaluations(&mut self, values: impl IntoIterator<Item = Scalar>) {
		self.column_evaluations.replace(values);
	}

	pub fn set_table_chi_evaluations(&mut self, values: impl IntoIterator<Item = ChiEvaluation>) {
		self.table_chi_evaluations.replace(values);
	}

	pub fn set_placeholder_parameters(&mut self, values: impl IntoIterator<Item = Scalar>) {
		self.placeholder_parameters.replace(values);
	}

	pub fn set_first_round_commitments(&mut self, commitments: Vec<CommitmentHandle>) {
		self.first_round_commitments = commitments;
	}

	pub fn set_final_round_commitments(&mut self, commitments: Vec<CommitmentHandle>) {
		self.final_round_commitments = commitments;
	}

	pub fn set_max_degree(&mut self, max_degree: usize) {
		self.max_degree = max_degree;
	}

	pub fn set_aggregate_evaluation(&mut self, value: Scalar) {
		self.aggregate_evaluation = value;
	}

	pub fn set_row_multipliers_evaluation(&mut self, value: Scalar) {
		self.row_multipliers_evaluation = value;
	}

	pub fn set_singleton_chi_evaluation(&mut self, value: Scalar) {
		self.singleton_chi_evaluation = value;
	}

	pub fn consume_challenge(&mut self) -> Result<Scalar, Error> {
		self.challenges.pop()
	}

	pub fn consume_first_round_mle(&mut self) -> Result<Scalar, Error> {
		self.first_round_mles.pop()
	}

	pub fn consume_first_round_mles(&mut self, count: usize) -> Result<Vec<Scalar>, Error> {
		self.first_round_mles.pop_many(count)
	}

	pub fn consume_final_round_mle(&mut self) -> Result<Scalar, Error> {
		self.final_round_mles.pop()
	}

	pub fn consume_chi_evaluation(&mut self) -> Result<ChiEvaluation, Error> {
		self.chi_evaluations.pop()
	}

	pub fn consume_rho_evaluation(&mut self) -> Result<Scalar, Error> {
		self.rho_evaluations.pop()
	}

	pub fn consume_bit_distribution(&mut self) -> Result<BitDistribution, Error> {
		self.bit_distributions.pop()
	}

	pub fn column_evaluation(&self, index: usize) -> Result<Scalar, Error> {
		self.column_evaluations.get(index)
	}

	pub fn table_chi_evaluation(&self, index: usize) -> Result<ChiEvaluation, Error> {
		self.table_chi_evaluations.get(index)
	}

	pub fn placeholder_parameter(&self, index: usize) -> Result<Scalar, Error> {
		self.placeholder_parameters.get(index)
	}

	/// Adds `evaluation` times the next constraint multiplier to the aggregate.
	///
	/// `degree` is the degree of the constraint polynomial and must not exceed the maximum degree.
	pub fn produce_zerosum_constraint(
		&mut self,
		evaluation: Scalar,
		degree: usize,
	) -> Result<(), Error> {
		if degree > self.max_degree {
			bail!(VerificationError::ConstraintDegreeTooHigh {
				degree,
				max_degree: self.max_degree,
			});
		}
		let multiplier = self.constraint_multipliers.pop()?;
		self.aggregate_evaluation += evaluation * multiplier;
		Ok(())
	}

	/// Adds `evaluation` times the next constraint multiplier and the row multipliers evaluation
	/// to the aggregate.
	///
	/// Weighting by the row multipliers raises the degree by one, so `degree + 1` must not exceed
	/// the maximum degree.
	pub fn produce_identity_constraint(
		&mut self,
		evaluation: Scalar,
		degree: usize,
	) -> Result<(), Error> {
		let weighted_degree = degree.saturating_add(1);
		if weighted_degree > self.max_degree {
			bail!(VerificationError::ConstraintDegreeTooHigh {
				degree: weighted_degree,
				max_degree: self.max_degree,
			});
		}
		let multiplier = self.constraint_multipliers.pop()?;
		self.aggregate_evaluation += evaluation * multiplier * self.row_multipliers_evaluation;
		Ok(())
	}

	/// Final verdict on the constraints: every one of them, batched by its multiplier, must
	/// cancel out.
	pub fn check_aggregate_evaluation(&self) -> Result<(), VerificationError> {
		ensure!(
			self.aggregate_evaluation.is_zero(),
			VerificationError::AggregateEvaluationMismatch
		);
		Ok(())
	}

	/// Marks the start of a nested plan or expression node.
	///
	/// Fails once [`MAX_NESTING_DEPTH`] nodes are open. Every successful call must be paired with
	/// [`Self::exit_node`].
	pub fn enter_node(&mut self) -> Result<(), Error> {
		ensure!(
			self.nesting_depth < MAX_NESTING_DEPTH,
			Error::NestingTooDeep {
				limit: MAX_NESTING_DEPTH
			}
		);
		self.nesting_depth += 1;
		Ok(())
	}

	pub fn exit_node(&mut self) {
		self.nesting_depth = self.nesting_depth.saturating_sub(1);
	}

	/// Number of queued elements not yet consumed, summed over all queues.
	pub fn remaining_material(&self) -> usize {
		self.challenges.len()
			+ self.first_round_mles.len()
			+ self.final_round_mles.len()
			+ self.chi_evaluations.len()
			+ self.rho_evaluations.len()
			+ self.bit_distributions.len()
			+ self.constraint_multipliers.len()
	}
}
