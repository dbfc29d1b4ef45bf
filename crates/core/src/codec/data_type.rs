// Copyright 2025 Irreducible Inc.

use bytes::BufMut;
use sqlproof_utils::bail;

use super::Cursor;
use crate::Error;

/// Column data type, as carried by literals, placeholders, casts and result columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
	Boolean,
	TinyInt,
	SmallInt,
	Int,
	BigInt,
	Varchar,
	Decimal75 { precision: u8, scale: i8 },
	Timestamp { time_unit: u32, timezone: i32 },
	/// Raw field element. Only valid for query parameters.
	Scalar,
	Varbinary,
}

impl DataType {
	pub const BOOLEAN_TAG: u32 = 0;
	pub const TINYINT_TAG: u32 = 2;
	pub const SMALLINT_TAG: u32 = 3;
	pub const INT_TAG: u32 = 4;
	pub const BIGINT_TAG: u32 = 5;
	pub const VARCHAR_TAG: u32 = 7;
	pub const DECIMAL75_TAG: u32 = 8;
	pub const TIMESTAMP_TAG: u32 = 9;
	pub const SCALAR_TAG: u32 = 10;
	pub const VARBINARY_TAG: u32 = 11;

	pub const fn tag(&self) -> u32 {
		match self {
			Self::Boolean => Self::BOOLEAN_TAG,
			Self::TinyInt => Self::TINYINT_TAG,
			Self::SmallInt => Self::SMALLINT_TAG,
			Self::Int => Self::INT_TAG,
			Self::BigInt => Self::BIGINT_TAG,
			Self::Varchar => Self::VARCHAR_TAG,
			Self::Decimal75 { .. } => Self::DECIMAL75_TAG,
			Self::Timestamp { .. } => Self::TIMESTAMP_TAG,
			Self::Scalar => Self::SCALAR_TAG,
			Self::Varbinary => Self::VARBINARY_TAG,
		}
	}

	/// Width in bytes of one encoded value, or `None` for length-prefixed types.
	pub const fn fixed_width(&self) -> Option<usize> {
		match self {
			Self::Boolean | Self::TinyInt => Some(1),
			Self::SmallInt => Some(2),
			Self::Int => Some(4),
			Self::BigInt | Self::Timestamp { .. } => Some(8),
			Self::Decimal75 { .. } | Self::Scalar => Some(32),
			Self::Varchar | Self::Varbinary => None,
		}
	}

	/// Appends the wire form of the type: tag, then the Decimal75/Timestamp parameters.
	pub fn encode_into(&self, out: &mut Vec<u8>) {
		out.put_u32(self.tag());
		match self {
			Self::Decimal75 { precision, scale } => {
				out.put_u8(*precision);
				out.put_i8(*scale);
			}
			Self::Timestamp {
				time_unit,
				timezone,
			} => {
				out.put_u32(*time_unit);
				out.put_i32(*timezone);
			}
			_ => {}
		}
	}
}

/// Decodes a data type: a 4-byte tag, followed by precision and scale bytes for Decimal75, or by
/// 4-byte time unit and timezone for Timestamp.
pub fn read_data_type(cursor: Cursor<'_>) -> Result<(Cursor<'_>, DataType), Error> {
	let (cursor, tag) = cursor.read_u32()?;
	let decoded = match tag {
		DataType::BOOLEAN_TAG => (cursor, DataType::Boolean),
		DataType::TINYINT_TAG => (cursor, DataType::TinyInt),
		DataType::SMALLINT_TAG => (cursor, DataType::SmallInt),
		DataType::INT_TAG => (cursor, DataType::Int),
		DataType::BIGINT_TAG => (cursor, DataType::BigInt),
		DataType::VARCHAR_TAG => (cursor, DataType::Varchar),
		DataType::DECIMAL75_TAG => {
			let (cursor, precision) = cursor.read_u8()?;
			let (cursor, scale) = cursor.read_i8()?;
			(cursor, DataType::Decimal75 { precision, scale })
		}
		DataType::TIMESTAMP_TAG => {
			let (cursor, time_unit) = cursor.read_u32()?;
			let (cursor, timezone) = cursor.read_i32()?;
			(
				cursor,
				DataType::Timestamp {
					time_unit,
					timezone,
				},
			)
		}
		DataType::SCALAR_TAG => (cursor, DataType::Scalar),
		DataType::VARBINARY_TAG => (cursor, DataType::Varbinary),
		_ => bail!(Error::UnsupportedDataType(tag)),
	};
	Ok(decoded)
}
