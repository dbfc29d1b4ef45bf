// Copyright 2025 Irreducible Inc.

use alloy_primitives::U256;
use bytes::BufMut;

use super::Value;
use crate::{codec::DataType, proof_exprs::ProofExprVariant};

/// An owned proof expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofExpr {
	Column(u64),
	Literal(Value),
	Equals(Box<ProofExpr>, Box<ProofExpr>),
	Add(Box<ProofExpr>, Box<ProofExpr>),
	Subtract(Box<ProofExpr>, Box<ProofExpr>),
	Multiply(Box<ProofExpr>, Box<ProofExpr>),
	And(Box<ProofExpr>, Box<ProofExpr>),
	Or(Box<ProofExpr>, Box<ProofExpr>),
	Not(Box<ProofExpr>),
	Cast {
		expr: Box<ProofExpr>,
		to: DataType,
	},
	Inequality {
		lhs: Box<ProofExpr>,
		rhs: Box<ProofExpr>,
		is_lt: bool,
	},
	Placeholder {
		index: u64,
		data_type: DataType,
	},
	ScalingCast {
		expr: Box<ProofExpr>,
		to: DataType,
		factor: U256,
	},
}

impl ProofExpr {
	pub fn column(index: u64) -> Self {
		Self::Column(index)
	}

	pub fn literal(value: Value) -> Self {
		Self::Literal(value)
	}

	pub fn placeholder(index: u64, data_type: DataType) -> Self {
		Self::Placeholder { index, data_type }
	}

	pub fn equals(lhs: Self, rhs: Self) -> Self {
		Self::Equals(Box::new(lhs), Box::new(rhs))
	}

	pub fn add(lhs: Self, rhs: Self) -> Self {
		Self::Add(Box::new(lhs), Box::new(rhs))
	}

	pub fn subtract(lhs: Self, rhs: Self) -> Self {
		Self::Subtract(Box::new(lhs), Box::new(rhs))
	}

	pub fn multiply(lhs: Self, rhs: Self) -> Self {
		Self::Multiply(Box::new(lhs), Box::new(rhs))
	}

	pub fn and(lhs: Self, rhs: Self) -> Self {
		Self::And(Box::new(lhs), Box::new(rhs))
	}

	pub fn or(lhs: Self, rhs: Self) -> Self {
		Self::Or(Box::new(lhs), Box::new(rhs))
	}

	#[allow(clippy::should_implement_trait)]
	pub fn not(expr: Self) -> Self {
		Self::Not(Box::new(expr))
	}

	pub fn cast(expr: Self, to: DataType) -> Self {
		Self::Cast {
			expr: Box::new(expr),
			to,
		}
	}

	pub fn scaling_cast(expr: Self, to: DataType, factor: U256) -> Self {
		Self::ScalingCast {
			expr: Box::new(expr),
			to,
			factor,
		}
	}

	pub fn less_than(lhs: Self, rhs: Self) -> Self {
		Self::Inequality {
			lhs: Box::new(lhs),
			rhs: Box::new(rhs),
			is_lt: true,
		}
	}

	pub fn greater_than(lhs: Self, rhs: Self) -> Self {
		Self::Inequality {
			lhs: Box::new(lhs),
			rhs: Box::new(rhs),
			is_lt: false,
		}
	}

	pub const fn variant(&self) -> ProofExprVariant {
		match self {
			Self::Column(_) => ProofExprVariant::Column,
			Self::Literal(_) => ProofExprVariant::Literal,
			Self::Equals(..) => ProofExprVariant::Equals,
			Self::Add(..) => ProofExprVariant::Add,
			Self::Subtract(..) => ProofExprVariant::Subtract,
			Self::Multiply(..) => ProofExprVariant::Multiply,
			Self::And(..) => ProofExprVariant::And,
			Self::Or(..) => ProofExprVariant::Or,
			Self::Not(_) => ProofExprVariant::Not,
			Self::Cast { .. } => ProofExprVariant::Cast,
			Self::Inequality { .. } => ProofExprVariant::Inequality,
			Self::Placeholder { .. } => ProofExprVariant::Placeholder,
			Self::ScalingCast { .. } => ProofExprVariant::ScalingCast,
		}
	}

	pub fn encode_into(&self, out: &mut Vec<u8>) {
		out.put_u32(self.variant().tag());
		match self {
			Self::Column(index) => out.put_u64(*index),
			Self::Literal(value) => value.encode_into(out),
			Self::Equals(lhs, rhs)
			| Self::Add(lhs, rhs)
			| Self::Subtract(lhs, rhs)
			| Self::Multiply(lhs, rhs)
			| Self::And(lhs, rhs)
			| Self::Or(lhs, rhs) => {
				lhs.encode_into(out);
				rhs.encode_into(out);
			}
			Self::Not(expr) => expr.encode_into(out),
			Self::Cast { expr, to } => {
				expr.encode_into(out);
				to.encode_into(out);
			}
			Self::Inequality { lhs, rhs, is_lt } => {
				lhs.encode_into(out);
				rhs.encode_into(out);
				out.put_u8(u8::from(*is_lt));
			}
			Self::Placeholder { index, data_type } => {
				out.put_u64(*index);
				data_type.encode_into(out);
			}
			Self::ScalingCast { expr, to, factor } => {
				expr.encode_into(out);
				to.encode_into(out);
				out.put_slice(&factor.to_be_bytes::<32>());
			}
		}
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		let mut out = Vec::new();
		self.encode_into(&mut out);
		out
	}
}
