// Copyright 2025 Irreducible Inc.

use alloy_primitives::U256;
use sqlproof_field::{Scalar, MODULUS_MASK};
use sqlproof_utils::bail;
use tiny_keccak::{Hasher, Keccak};

use super::{read_data_type, Cursor, DataType};
use crate::Error;

/// Canonicalizes a variable-length string or byte payload to one field element.
///
/// The empty payload maps to zero. Anything else maps to the keccak-256 digest, read as a
/// little-endian word and masked to its low 253 bits so the result is below the modulus.
pub fn hash_bytes(bytes: &[u8]) -> Scalar {
	if bytes.is_empty() {
		return Scalar::ZERO;
	}
	let mut digest = [0u8; 32];
	let mut hasher = Keccak::v256();
	hasher.update(bytes);
	hasher.finalize(&mut digest);

	let masked = U256::from_le_bytes(digest) & MODULUS_MASK;
	Scalar::from_u256_reduced(masked)
}

/// Decodes one value of a result column or literal.
///
/// [`DataType::Scalar`] is rejected here; raw field elements only travel as query parameters,
/// see [`read_parameter_entry`].
pub fn read_entry(cursor: Cursor<'_>, data_type: DataType) -> Result<(Cursor<'_>, Scalar), Error> {
	match data_type {
		DataType::Scalar => bail!(Error::UnsupportedDataTypeVariant(data_type)),
		_ => read_value(cursor, data_type),
	}
}

/// Decodes one query parameter value. Unlike [`read_entry`] this accepts [`DataType::Scalar`].
pub fn read_parameter_entry(
	cursor: Cursor<'_>,
	data_type: DataType,
) -> Result<(Cursor<'_>, Scalar), Error> {
	read_value(cursor, data_type)
}

/// Decodes a parameter array: an 8-byte count, then a data type and value per parameter.
pub fn read_parameters(cursor: Cursor<'_>) -> Result<(Cursor<'_>, Vec<Scalar>), Error> {
	let (mut cursor, count) = cursor.read_usize()?;
	let mut parameters = Vec::new();
	for _ in 0..count {
		let (next, data_type) = read_data_type(cursor)?;
		let (next, value) = read_parameter_entry(next, data_type)?;
		parameters.push(value);
		cursor = next;
	}
	Ok((cursor, parameters))
}

fn read_value(cursor: Cursor<'_>, data_type: DataType) -> Result<(Cursor<'_>, Scalar), Error> {
	let decoded = match data_type {
		DataType::Boolean => {
			let (cursor, value) = cursor.read_bool()?;
			(cursor, Scalar::from(value))
		}
		DataType::TinyInt => {
			let (cursor, value) = cursor.read_i8()?;
			(cursor, Scalar::from(value))
		}
		DataType::SmallInt => {
			let (cursor, value) = cursor.read_i16()?;
			(cursor, Scalar::from(value))
		}
		DataType::Int => {
			let (cursor, value) = cursor.read_i32()?;
			(cursor, Scalar::from(value))
		}
		DataType::BigInt | DataType::Timestamp { .. } => {
			let (cursor, value) = cursor.read_i64()?;
			(cursor, Scalar::from(value))
		}
		DataType::Decimal75 { .. } | DataType::Scalar => {
			let (cursor, word) = cursor.read_word()?;
			(cursor, Scalar::from_u256_reduced(word))
		}
		DataType::Varchar | DataType::Varbinary => {
			let (cursor, bytes) = cursor.read_bytes()?;
			(cursor, hash_bytes(bytes))
		}
	};
	Ok(decoded)
}
