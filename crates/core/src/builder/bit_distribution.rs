// Copyright 2025 Irreducible Inc.

use alloy_primitives::U256;
use sqlproof_field::Scalar;
use sqlproof_utils::ensure;

use crate::VerificationError;

/// Index of the sign bit in the 256-bit two's complement word.
pub const SIGN_BIT: usize = 255;

/// Bits below the sign bit that must mirror it, which bounds magnitudes by `2^252`.
const GUARD_BITS: std::ops::Range<usize> = 252..255;

/// The role of a single bit across all rows of a decomposed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitKind {
	/// Varies independently; backed by its own committed bit column.
	Free,
	/// Equal to the sign bit in every row.
	FollowsSign,
	/// The same value in every row.
	Constant(bool),
}

/// Prover hint describing which bits of the two's complement words of a column vary.
///
/// For bits below the sign bit, `vary_mask` and `leading_bit_mask` together encode the
/// [`BitKind`]: `(1, 0)` free, `(1, 1)` follows the sign, `(0, b)` constant `b`. The sign bit
/// itself is either varying `(1, 0)` or constant `(0, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitDistribution {
	pub vary_mask: U256,
	pub leading_bit_mask: U256,
}

impl BitDistribution {
	pub const fn new(vary_mask: U256, leading_bit_mask: U256) -> Self {
		Self {
			vary_mask,
			leading_bit_mask,
		}
	}

	/// Computes the distribution of a column of signed values.
	pub fn from_scalars(values: &[Scalar]) -> Self {
		if values.is_empty() {
			return Self::default();
		}
		let words = values.iter().map(|value| value.to_twos_complement());
		let (or, and, agrees_with_sign) =
			words.fold((U256::ZERO, U256::MAX, U256::MAX), |(or, and, agrees), word| {
				let sign_extension = if word.bit(SIGN_BIT) {
					U256::MAX
				} else {
					U256::ZERO
				};
				(or | word, and & word, agrees & !(word ^ sign_extension))
			});
		let varying = or & !and;
		let sign_mask = U256::from(1u64) << SIGN_BIT;

		if varying.bit(SIGN_BIT) {
			let follows = agrees_with_sign & varying & !sign_mask;
			Self::new(varying, follows | and)
		} else {
			Self::new(varying, and)
		}
	}

	pub fn sign_varies(&self) -> bool {
		self.vary_mask.bit(SIGN_BIT)
	}

	/// The sign bit of every row when it does not vary.
	pub fn constant_sign(&self) -> bool {
		self.leading_bit_mask.bit(SIGN_BIT)
	}

	/// Role of bit `index`, which must be below [`SIGN_BIT`].
	pub fn bit_kind(&self, index: usize) -> BitKind {
		debug_assert!(index < SIGN_BIT);
		match (self.vary_mask.bit(index), self.leading_bit_mask.bit(index)) {
			(true, false) => BitKind::Free,
			(true, true) => BitKind::FollowsSign,
			(false, lead) => BitKind::Constant(lead),
		}
	}

	/// Indices of the free bits below the sign bit, ascending.
	pub fn free_bits(&self) -> impl Iterator<Item = usize> + '_ {
		(0..SIGN_BIT).filter(|&index| self.bit_kind(index) == BitKind::Free)
	}

	/// Number of committed bit columns: one per free bit, plus the sign when it varies.
	pub fn num_committed_bits(&self) -> usize {
		self.free_bits().count() + usize::from(self.sign_varies())
	}

	/// Checks that the hint is well formed and describes values of magnitude below `2^252`.
	pub fn validate(&self) -> Result<(), VerificationError> {
		let sign_varies = self.sign_varies();
		ensure!(!(sign_varies && self.constant_sign()), VerificationError::InvalidVaryingBits);
		for index in 0..SIGN_BIT {
			let kind = self.bit_kind(index);
			ensure!(
				sign_varies || kind != BitKind::FollowsSign,
				VerificationError::InvalidVaryingBits
			);
			if GUARD_BITS.contains(&index) {
				let expected = if sign_varies {
					BitKind::FollowsSign
				} else {
					BitKind::Constant(self.constant_sign())
				};
				ensure!(kind == expected, VerificationError::InvalidVaryingBits);
			}
		}
		Ok(())
	}
}
