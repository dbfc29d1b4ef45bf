// Copyright 2025 Irreducible Inc.

use alloy_primitives::U256;
use bytes::BufMut;
use itertools::Itertools;
use sqlproof_field::Scalar;

use crate::codec::{hash_bytes, DataType};

/// A typed value as it appears in literals, result rows and query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	Boolean(bool),
	TinyInt(i8),
	SmallInt(i16),
	Int(i32),
	BigInt(i64),
	Varchar(String),
	Decimal75 {
		precision: u8,
		scale: i8,
		value: U256,
	},
	Timestamp {
		time_unit: u32,
		timezone: i32,
		value: i64,
	},
	Scalar(U256),
	Varbinary(Vec<u8>),
}

impl Value {
	pub fn data_type(&self) -> DataType {
		match self {
			Self::Boolean(_) => DataType::Boolean,
			Self::TinyInt(_) => DataType::TinyInt,
			Self::SmallInt(_) => DataType::SmallInt,
			Self::Int(_) => DataType::Int,
			Self::BigInt(_) => DataType::BigInt,
			Self::Varchar(_) => DataType::Varchar,
			Self::Decimal75 {
				precision, scale, ..
			} => DataType::Decimal75 {
				precision: *precision,
				scale: *scale,
			},
			Self::Timestamp {
				time_unit,
				timezone,
				..
			} => DataType::Timestamp {
				time_unit: *time_unit,
				timezone: *timezone,
			},
			Self::Scalar(_) => DataType::Scalar,
			Self::Varbinary(_) => DataType::Varbinary,
		}
	}

	/// The field element the value decodes to.
	pub fn to_scalar(&self) -> Scalar {
		match self {
			Self::Boolean(value) => Scalar::from(*value),
			Self::TinyInt(value) => Scalar::from(*value),
			Self::SmallInt(value) => Scalar::from(*value),
			Self::Int(value) => Scalar::from(*value),
			Self::BigInt(value) | Self::Timestamp { value, .. } => Scalar::from(*value),
			Self::Varchar(value) => hash_bytes(value.as_bytes()),
			Self::Decimal75 { value, .. } | Self::Scalar(value) => Scalar::from_u256_reduced(*value),
			Self::Varbinary(value) => hash_bytes(value),
		}
	}

	/// Appends the value without its data type.
	pub fn encode_value_into(&self, out: &mut Vec<u8>) {
		match self {
			Self::Boolean(value) => out.put_u8(u8::from(*value)),
			Self::TinyInt(value) => out.put_i8(*value),
			Self::SmallInt(value) => out.put_i16(*value),
			Self::Int(value) => out.put_i32(*value),
			Self::BigInt(value) | Self::Timestamp { value, .. } => out.put_i64(*value),
			Self::Varchar(value) => put_bytes(out, value.as_bytes()),
			Self::Decimal75 { value, .. } | Self::Scalar(value) => {
				out.put_slice(&value.to_be_bytes::<32>())
			}
			Self::Varbinary(value) => put_bytes(out, value),
		}
	}

	/// Appends the data type followed by the value.
	pub fn encode_into(&self, out: &mut Vec<u8>) {
		self.data_type().encode_into(out);
		self.encode_value_into(out);
	}
}

/// One named column of a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultColumn {
	pub name: String,
	pub data_type: DataType,
	pub rows: Vec<Value>,
}

impl ResultColumn {
	/// Creates a column whose data type is taken from its first row, or `BigInt` when empty.
	pub fn new(name: impl Into<String>, rows: Vec<Value>) -> Self {
		let data_type = rows.first().map_or(DataType::BigInt, Value::data_type);
		Self {
			name: name.into(),
			data_type,
			rows,
		}
	}

	pub fn to_scalars(&self) -> Vec<Scalar> {
		self.rows.iter().map(Value::to_scalar).collect_vec()
	}
}

/// Encodes a result set: column count, then per column its name, a zero quote flag, the data
/// type, the row count and the rows.
pub fn encode_result(columns: &[ResultColumn]) -> Vec<u8> {
	let mut out = Vec::new();
	out.put_u64(columns.len() as u64);
	for column in columns {
		put_bytes(&mut out, column.name.as_bytes());
		out.put_u8(0);
		column.data_type.encode_into(&mut out);
		out.put_u64(column.rows.len() as u64);
		for row in &column.rows {
			row.encode_value_into(&mut out);
		}
	}
	out
}

/// Encodes a parameter array: count, then each value with its data type.
pub fn encode_parameters(values: &[Value]) -> Vec<u8> {
	let mut out = Vec::new();
	out.put_u64(values.len() as u64);
	for value in values {
		value.encode_into(&mut out);
	}
	out
}

fn put_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
	out.put_u64(bytes.len() as u64);
	out.put_slice(bytes);
}
