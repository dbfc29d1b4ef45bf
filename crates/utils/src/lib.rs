// Copyright 2025 Irreducible Inc.

pub mod env;
pub mod error_utils;
pub mod logging;

// Re-exported for the `bail!` macro expansion in downstream crates.
#[doc(hidden)]
pub use tracing;
