// Copyright 2025 Irreducible Inc.

//! Prime field arithmetic for the query verifier.
//!
//! All proof material is expressed over the scalar field of the BN254 curve. The [`Scalar`] type
//! wraps a 256-bit word that is kept canonically reduced below [`MODULUS`], so equality of
//! elements is equality of words.

pub mod arithmetic_traits;
pub mod error;
mod scalar;

pub use arithmetic_traits::*;
pub use error::*;
pub use scalar::*;
