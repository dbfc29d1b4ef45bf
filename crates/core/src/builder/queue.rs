// Copyright 2025 Irreducible Inc.

use std::{collections::VecDeque, fmt};

use sqlproof_utils::bail;

use crate::Error;

/// Identifies one of the sequences of proof material held by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
	Challenges,
	FirstRoundMles,
	FinalRoundMles,
	ChiEvaluations,
	RhoEvaluations,
	BitDistributions,
	ConstraintMultipliers,
	ColumnEvaluations,
	TableChiEvaluations,
	PlaceholderParameters,
}

impl fmt::Display for MaterialKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Challenges => "challenge",
			Self::FirstRoundMles => "first round MLE",
			Self::FinalRoundMles => "final round MLE",
			Self::ChiEvaluations => "chi evaluation",
			Self::RhoEvaluations => "rho evaluation",
			Self::BitDistributions => "bit distribution",
			Self::ConstraintMultipliers => "constraint multiplier",
			Self::ColumnEvaluations => "column evaluation",
			Self::TableChiEvaluations => "table chi evaluation",
			Self::PlaceholderParameters => "placeholder parameter",
		};
		f.write_str(name)
	}
}

/// A FIFO of proof material, drained in the exact order the prover produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationQueue<T> {
	kind: MaterialKind,
	items: VecDeque<T>,
}

impl<T> EvaluationQueue<T> {
	pub fn new(kind: MaterialKind, items: impl IntoIterator<Item = T>) -> Self {
		Self {
			kind,
			items: items.into_iter().collect(),
		}
	}

	pub fn empty(kind: MaterialKind) -> Self {
		Self::new(kind, [])
	}

	pub const fn kind(&self) -> MaterialKind {
		self.kind
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Iterates over the remaining elements, front first.
	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		self.items.iter()
	}

	/// Replaces the remaining contents.
	pub fn refill(&mut self, items: impl IntoIterator<Item = T>) {
		self.items = items.into_iter().collect();
	}

	/// Pops the front element.
	pub fn pop(&mut self) -> Result<T, Error> {
		match self.items.pop_front() {
			Some(item) => Ok(item),
			None => bail!(Error::EmptyQueue(self.kind)),
		}
	}

	/// Pops `count` front elements in order. Nothing is consumed when fewer remain.
	pub fn pop_many(&mut self, count: usize) -> Result<Vec<T>, Error> {
		if count > self.items.len() {
			bail!(Error::EmptyQueue(self.kind));
		}
		Ok(self.items.drain(..count).collect())
	}
}

/// Random-access proof material, indexed by position in the plan's wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationArray<T> {
	kind: MaterialKind,
	items: Vec<T>,
}

impl<T: Copy> EvaluationArray<T> {
	pub fn new(kind: MaterialKind, items: impl IntoIterator<Item = T>) -> Self {
		Self {
			kind,
			items: items.into_iter().collect(),
		}
	}

	pub fn empty(kind: MaterialKind) -> Self {
		Self::new(kind, [])
	}

	pub const fn kind(&self) -> MaterialKind {
		self.kind
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn as_slice(&self) -> &[T] {
		&self.items
	}

	pub fn replace(&mut self, items: impl IntoIterator<Item = T>) {
		self.items = items.into_iter().collect();
	}

	pub fn get(&self, index: usize) -> Result<T, Error> {
		match self.items.get(index) {
			Some(item) => Ok(*item),
			None => bail!(Error::InvalidIndex {
				kind: self.kind,
				index,
				length: self.items.len(),
			}),
		}
	}
}
