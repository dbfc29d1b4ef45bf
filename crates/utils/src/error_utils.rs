// Copyright 2025 Irreducible Inc.

/// Returns early with the given error, converted with `Into`.
///
/// Every rejection is reported as a `debug` event carrying the error's `Display` form. With the
/// `bail_panic` feature the macro panics instead, which gives a backtrace to the exact check that
/// failed.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {{
		let err = $err;
		$crate::tracing::debug!(error = %err, "check failed");
		return Err(err.into());
	}};
}

/// Bails with `$err` unless `$cond` holds.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}
