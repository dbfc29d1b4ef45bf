// Copyright 2025 Irreducible Inc.

use crate::{builder::MaterialKind, codec::DataType};

/// Failures while decoding or walking a plan, or while checking a result set.
///
/// All variants are fatal: verification of the query is rejected at the first one raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("read of {needed} bytes at offset {offset} exceeds the {remaining} remaining bytes")]
	NotEnoughBytes {
		offset: usize,
		needed: usize,
		remaining: usize,
	},
	#[error("integer {0} read from the wire does not fit in usize")]
	ValueOutOfRange(u64),
	#[error("unsupported data type tag {0}")]
	UnsupportedDataType(u32),
	#[error("data type {0:?} cannot be decoded in this position")]
	UnsupportedDataTypeVariant(DataType),
	#[error("invalid boolean byte {0:#04x}")]
	InvalidBoolean(u8),
	#[error("unsupported proof plan variant {0}")]
	UnsupportedProofPlanVariant(u32),
	#[error("unsupported proof expression variant {0}")]
	UnsupportedProofExprVariant(u32),
	#[error("{remaining} trailing bytes after the proof plan")]
	TrailingPlanBytes { remaining: usize },
	#[error("the {0} queue is empty")]
	EmptyQueue(MaterialKind),
	#[error("index {index} is out of range for {kind} of length {length}")]
	InvalidIndex {
		kind: MaterialKind,
		index: usize,
		length: usize,
	},
	#[error("plans and expressions are nested deeper than {limit} levels")]
	NestingTooDeep { limit: usize },
	#[error("{remaining} proof elements left unconsumed after the plan evaluation")]
	QueuesNotDrained { remaining: usize },
	#[error("the result has {actual} columns, expected {expected}")]
	ResultColumnCountMismatch { expected: usize, actual: usize },
	#[error("result column {column} has {actual} rows, expected {expected}")]
	InconsistentResultColumnLengths {
		column: usize,
		expected: usize,
		actual: usize,
	},
	#[error("result column {column} has an unexpected name")]
	InvalidResultColumnName { column: usize },
	#[error("result column {column} does not match its claimed evaluation")]
	IncorrectResult { column: usize },
	#[error("a union needs at least one input plan")]
	UnionNotEnoughInputPlans,
	#[error("union input has {actual} columns, expected {expected}")]
	UnionInvalidColumnCounts { expected: usize, actual: usize },
	#[error("union output has length {actual}, expected {expected}")]
	UnionOutputLengthMismatch { expected: usize, actual: usize },
	#[error("slice offset window has length {actual}, expected {expected}")]
	SliceOffsetPlanValueMismatch { expected: usize, actual: usize },
	#[error("slice max window has length {actual}, expected {expected}")]
	SliceMaxLengthMismatch { expected: usize, actual: usize },
	#[error("slice output has length {actual}, expected {expected}")]
	SliceOutputLengthMismatch { expected: usize, actual: usize },
	#[error("field error: {0}")]
	Field(#[from] sqlproof_field::Error),
	#[error("math error: {0}")]
	Math(#[from] sqlproof_math::Error),
	#[error("verification failure: {0}")]
	Verification(#[from] VerificationError),
}

/// Algebraic and consistency failures of the proof material itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
	#[error("constraint of degree {degree} exceeds the maximum degree {max_degree}")]
	ConstraintDegreeTooHigh { degree: usize, max_degree: usize },
	#[error("the aggregate constraint evaluation is not zero")]
	AggregateEvaluationMismatch,
	#[error("a round evaluation does not match its claimed value")]
	RoundEvaluationMismatch,
	#[error("the grouped column is not strictly increasing")]
	MonotonyCheckFailed,
	#[error("the bit distribution is malformed or out of the provable range")]
	InvalidVaryingBits,
	#[error("the bit decomposition does not recompose to the claimed value")]
	BitDecompositionInvalid,
	#[error("the grouping cannot be proven")]
	UnprovableGroupBy,
	#[error("internal error: {0}")]
	InternalError(&'static str),
}
