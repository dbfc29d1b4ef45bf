// Copyright 2025 Irreducible Inc.

/// Environment flag that turns on the strict queue-drain check of the verifier.
pub const STRICT_QUEUE_DRAIN_FLAG: &str = "SQLPROOF_STRICT_QUEUE_DRAIN";

/// Whether the environment variable `flag` is set to a truthy value (`1`, `on`, `true`, `yes`,
/// lower or upper case). Unset or unreadable variables count as false.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	std::env::var(flag).is_ok_and(|value| {
		matches!(value.as_str(), "1" | "on" | "ON" | "true" | "TRUE" | "yes" | "YES")
	})
}
