// Copyright 2025 Irreducible Inc.

use alloy_primitives::U256;
use bytes::Buf;
use sqlproof_utils::bail;

use crate::Error;

/// An immutable read position within a byte buffer.
///
/// Reads never mutate the cursor; each one returns the advanced cursor alongside the decoded
/// value, so a caller that fails half-way keeps its original position. All multi-byte integers
/// are big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
	data: &'a [u8],
	offset: usize,
}

impl<'a> Cursor<'a> {
	pub const fn new(data: &'a [u8]) -> Self {
		Self { data, offset: 0 }
	}

	/// Number of bytes consumed from the start of the buffer.
	pub const fn offset(&self) -> usize {
		self.offset
	}

	pub fn remaining(&self) -> usize {
		self.data.len() - self.offset
	}

	pub fn remaining_bytes(&self) -> &'a [u8] {
		&self.data[self.offset..]
	}

	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// Splits off the next `len` bytes.
	pub fn take(self, len: usize) -> Result<(Self, &'a [u8]), Error> {
		let remaining = self.remaining();
		if len > remaining {
			bail!(Error::NotEnoughBytes {
				offset: self.offset,
				needed: len,
				remaining,
			});
		}
		let chunk = &self.data[self.offset..self.offset + len];
		let advanced = Self {
			data: self.data,
			offset: self.offset + len,
		};
		Ok((advanced, chunk))
	}

	pub fn read_u8(self) -> Result<(Self, u8), Error> {
		let (cursor, mut chunk) = self.take(1)?;
		Ok((cursor, chunk.get_u8()))
	}

	pub fn read_u32(self) -> Result<(Self, u32), Error> {
		let (cursor, mut chunk) = self.take(4)?;
		Ok((cursor, chunk.get_u32()))
	}

	pub fn read_u64(self) -> Result<(Self, u64), Error> {
		let (cursor, mut chunk) = self.take(8)?;
		Ok((cursor, chunk.get_u64()))
	}

	pub fn read_i8(self) -> Result<(Self, i8), Error> {
		let (cursor, mut chunk) = self.take(1)?;
		Ok((cursor, chunk.get_i8()))
	}

	pub fn read_i16(self) -> Result<(Self, i16), Error> {
		let (cursor, mut chunk) = self.take(2)?;
		Ok((cursor, chunk.get_i16()))
	}

	pub fn read_i32(self) -> Result<(Self, i32), Error> {
		let (cursor, mut chunk) = self.take(4)?;
		Ok((cursor, chunk.get_i32()))
	}

	pub fn read_i64(self) -> Result<(Self, i64), Error> {
		let (cursor, mut chunk) = self.take(8)?;
		Ok((cursor, chunk.get_i64()))
	}

	/// Reads an 8-byte count or index.
	pub fn read_usize(self) -> Result<(Self, usize), Error> {
		let (cursor, value) = self.read_u64()?;
		let value = usize::try_from(value).map_err(|_| Error::ValueOutOfRange(value))?;
		Ok((cursor, value))
	}

	/// Reads a single byte that must be `0` or `1`.
	pub fn read_bool(self) -> Result<(Self, bool), Error> {
		let (cursor, byte) = self.read_u8()?;
		match byte {
			0 => Ok((cursor, false)),
			1 => Ok((cursor, true)),
			_ => bail!(Error::InvalidBoolean(byte)),
		}
	}

	/// Reads a raw 32-byte word.
	pub fn read_word(self) -> Result<(Self, U256), Error> {
		let (cursor, chunk) = self.take(32)?;
		Ok((cursor, U256::from_be_slice(chunk)))
	}

	/// Reads a byte string prefixed by its 8-byte length.
	pub fn read_bytes(self) -> Result<(Self, &'a [u8]), Error> {
		let (cursor, len) = self.read_u64()?;
		// A length that does not fit in usize can never fit in the buffer either.
		let len = usize::try_from(len).unwrap_or(usize::MAX);
		cursor.take(len)
	}
}
