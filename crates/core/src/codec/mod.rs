// Copyright 2025 Irreducible Inc.

//! Positional decoding of plans, literals, result sets and parameters.
//!
//! Every decoder takes a [`Cursor`] by value and returns the advanced cursor together with the
//! decoded value. Values are canonicalized to field elements on the way in: signed integers are
//! sign-extended, 32-byte words are reduced and variable-length payloads are hashed with
//! [`hash_bytes`].

mod cursor;
mod data_type;
mod entry;

pub use cursor::*;
pub use data_type::*;
pub use entry::*;
