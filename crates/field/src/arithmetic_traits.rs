// Copyright 2025 Irreducible Inc.

/// Squaring, which the booleanity checks `b - b^2 = 0` use throughout the verifier.
pub trait Square {
	fn square(self) -> Self;
}

/// Total inversion: zero maps to zero, every other element to its multiplicative inverse.
///
/// This is the shape of the `diff_star` hint of the equality gadget, where rows with equal
/// operands carry a zero instead of an inverse.
pub trait InvertOrZero {
	fn invert_or_zero(self) -> Self;
}
