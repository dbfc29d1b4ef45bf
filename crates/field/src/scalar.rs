// Copyright 2025 Irreducible Inc.

use std::{
	fmt::{self, Debug, Display},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use alloy_primitives::U256;
use rand::RngCore;

use crate::{
	arithmetic_traits::{InvertOrZero, Square},
	error::Error,
};

/// Order of the BN254 scalar field.
pub const MODULUS: U256 = U256::from_limbs([
	0x43e1f593f0000001,
	0x2833e84879b97091,
	0xb85045b68181585d,
	0x30644e72e131a029,
]);

/// `MODULUS - 1`, the field representation of `-1`.
pub const MODULUS_MINUS_ONE: U256 = U256::from_limbs([
	0x43e1f593f0000000,
	0x2833e84879b97091,
	0xb85045b68181585d,
	0x30644e72e131a029,
]);

/// Low 253 bits. Any word masked with this is strictly below [`MODULUS`].
pub const MODULUS_MASK: U256 = U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, 0x1fffffffffffffff]);

/// `(MODULUS - 1) / 2`, the largest element interpreted as non-negative.
pub const MAX_SIGNED: U256 = U256::from_limbs([
	0xa1f0fac9f8000000,
	0x9419f4243cdcb848,
	0xdc2822db40c0ac2e,
	0x183227397098d014,
]);

/// `2^256 - MODULUS`, added to a negative element to obtain its two's complement word.
const TWOS_COMPLEMENT_OFFSET: U256 = U256::from_limbs([
	0xbc1e0a6c0fffffff,
	0xd7cc17b786468f6e,
	0x47afba497e7ea7a2,
	0xcf9bb18d1ece5fd6,
]);

/// An element of the BN254 scalar field.
///
/// The inner word is always canonically reduced, i.e. strictly below [`MODULUS`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scalar(U256);

impl Scalar {
	pub const ZERO: Self = Self(U256::ZERO);
	pub const ONE: Self = Self(U256::from_limbs([1, 0, 0, 0]));
	pub const MINUS_ONE: Self = Self(MODULUS_MINUS_ONE);

	/// Creates an element from a canonical word, failing if the word is not below the modulus.
	pub fn new(value: U256) -> Result<Self, Error> {
		if value >= MODULUS {
			return Err(Error::NotInField);
		}
		Ok(Self(value))
	}

	/// Creates an element from an arbitrary 256-bit word, reducing it modulo the field order.
	pub fn from_u256_reduced(value: U256) -> Self {
		Self(value.reduce_mod(MODULUS))
	}

	/// Interprets 32 big-endian bytes as a word and reduces it modulo the field order.
	pub fn from_be_bytes_reduced(bytes: [u8; 32]) -> Self {
		Self::from_u256_reduced(U256::from_be_bytes(bytes))
	}

	/// Returns `2^exponent` reduced modulo the field order, or `None` when the power does not fit
	/// in a 256-bit word.
	pub fn pow2(exponent: usize) -> Option<Self> {
		(exponent < 256)
			.then(|| Self::from_u256_reduced(U256::from_limbs([1, 0, 0, 0]) << exponent))
	}

	/// Returns an element chosen uniformly at random using a user-provided RNG.
	pub fn random(mut rng: impl RngCore) -> Self {
		loop {
			let mut bytes = [0u8; 32];
			rng.fill_bytes(&mut bytes);
			let candidate = U256::from_be_bytes(bytes) & MODULUS_MASK;
			if candidate < MODULUS {
				return Self(candidate);
			}
		}
	}

	pub const fn into_u256(self) -> U256 {
		self.0
	}

	pub fn to_be_bytes(self) -> [u8; 32] {
		self.0.to_be_bytes::<32>()
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	/// Returns true iff the element represents a negative signed integer, i.e. it lies above
	/// [`MAX_SIGNED`].
	pub fn is_negative(&self) -> bool {
		self.0 > MAX_SIGNED
	}

	/// The 256-bit two's complement word of the signed integer this element represents.
	///
	/// Elements up to [`MAX_SIGNED`] map to themselves, the rest to `2^256 - (MODULUS - x)`.
	pub fn to_twos_complement(self) -> U256 {
		if self.is_negative() {
			self.0.wrapping_add(TWOS_COMPLEMENT_OFFSET)
		} else {
			self.0
		}
	}

	/// Computes the multiplicative inverse, returning `None` for zero.
	pub fn invert(&self) -> Option<Self> {
		self.0.inv_mod(MODULUS).map(Self)
	}
}

impl Square for Scalar {
	fn square(self) -> Self {
		self * self
	}
}

impl InvertOrZero for Scalar {
	fn invert_or_zero(self) -> Self {
		self.invert().unwrap_or(Self::ZERO)
	}
}

impl Debug for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Scalar({:#x})", self.0)
	}
}

impl Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<bool> for Scalar {
	fn from(value: bool) -> Self {
		if value {
			Self::ONE
		} else {
			Self::ZERO
		}
	}
}

impl From<u64> for Scalar {
	fn from(value: u64) -> Self {
		Self(U256::from(value))
	}
}

impl From<u32> for Scalar {
	fn from(value: u32) -> Self {
		Self::from(value as u64)
	}
}

impl From<usize> for Scalar {
	fn from(value: usize) -> Self {
		Self::from(value as u64)
	}
}

impl From<i64> for Scalar {
	fn from(value: i64) -> Self {
		let magnitude = Self::from(value.unsigned_abs());
		if value < 0 {
			-magnitude
		} else {
			magnitude
		}
	}
}

impl From<i32> for Scalar {
	fn from(value: i32) -> Self {
		Self::from(value as i64)
	}
}

impl From<i16> for Scalar {
	fn from(value: i16) -> Self {
		Self::from(value as i64)
	}
}

impl From<i8> for Scalar {
	fn from(value: i8) -> Self {
		Self::from(value as i64)
	}
}

impl TryFrom<U256> for Scalar {
	type Error = Error;

	fn try_from(value: U256) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<Scalar> for U256 {
	fn from(value: Scalar) -> Self {
		value.0
	}
}

impl Neg for Scalar {
	type Output = Self;

	fn neg(self) -> Self {
		if self.0.is_zero() {
			self
		} else {
			Self(MODULUS - self.0)
		}
	}
}

impl Add for Scalar {
	type Output = Self;

	#[inline]
	fn add(self, rhs: Self) -> Self {
		Self(self.0.add_mod(rhs.0, MODULUS))
	}
}

impl Sub for Scalar {
	type Output = Self;

	/// Subtraction is addition of `rhs * (MODULUS - 1)`, so no intermediate leaves `[0, MODULUS)`.
	#[inline]
	fn sub(self, rhs: Self) -> Self {
		self + rhs * Self::MINUS_ONE
	}
}

impl Mul for Scalar {
	type Output = Self;

	#[inline]
	fn mul(self, rhs: Self) -> Self {
		Self(self.0.mul_mod(rhs.0, MODULUS))
	}
}

impl<'a> Add<&'a Self> for Scalar {
	type Output = Self;

	fn add(self, rhs: &'a Self) -> Self {
		self + *rhs
	}
}

impl<'a> Sub<&'a Self> for Scalar {
	type Output = Self;

	fn sub(self, rhs: &'a Self) -> Self {
		self - *rhs
	}
}

impl<'a> Mul<&'a Self> for Scalar {
	type Output = Self;

	fn mul(self, rhs: &'a Self) -> Self {
		self * *rhs
	}
}

impl AddAssign for Scalar {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl SubAssign for Scalar {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl MulAssign for Scalar {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl Sum for Scalar {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl<'a> Sum<&'a Self> for Scalar {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl Product for Scalar {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl<'a> Product<&'a Self> for Scalar {
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}
