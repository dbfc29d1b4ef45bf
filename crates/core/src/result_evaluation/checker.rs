// Copyright 2025 Irreducible Inc.

use itertools::Itertools;
use sqlproof_field::Scalar;
use sqlproof_math::compute_evaluation_vector;
use sqlproof_utils::ensure;
use tracing::{debug, instrument};

use crate::{
	codec::{read_data_type, read_entry, Cursor},
	Error,
};

/// Verifies that every column of the encoded `result` evaluates, at `evaluation_point`, to its
/// claimed evaluation.
///
/// The result holds one named column per claimed evaluation, all with the same number of rows.
/// Column `i` must be named `expected_names[i]`. For each column the weighted sum of its rows
/// against the Lagrange basis of the point, minus the claim, must vanish.
#[instrument(skip_all, name = "verify_result_evaluations", level = "debug")]
pub fn verify_result_evaluations(
	result: &[u8],
	expected_names: &[&str],
	evaluation_point: &[Scalar],
	claimed_evaluations: &[Scalar],
) -> Result<(), Error> {
	ensure!(
		expected_names.len() == claimed_evaluations.len(),
		Error::ResultColumnCountMismatch {
			expected: claimed_evaluations.len(),
			actual: expected_names.len(),
		}
	);

	let (mut cursor, column_count) = Cursor::new(result).read_usize()?;
	ensure!(
		column_count == claimed_evaluations.len(),
		Error::ResultColumnCountMismatch {
			expected: claimed_evaluations.len(),
			actual: column_count,
		}
	);

	let mut row_count = None;
	let mut weights = Vec::new();
	for (column, (name, claimed)) in expected_names
		.iter()
		.zip_eq(claimed_evaluations)
		.enumerate()
	{
		let (next, actual_name) = cursor.read_bytes()?;
		let (next, quote) = next.read_u8()?;
		ensure!(
			quote == 0 && actual_name == name.as_bytes(),
			Error::InvalidResultColumnName { column }
		);

		let (next, data_type) = read_data_type(next)?;
		let (mut next, rows) = next.read_usize()?;
		// every row takes at least its fixed width, or a length prefix
		let needed = rows.saturating_mul(data_type.fixed_width().unwrap_or(8));
		ensure!(
			needed <= next.remaining(),
			Error::NotEnoughBytes {
				offset: next.offset(),
				needed,
				remaining: next.remaining(),
			}
		);
		match row_count {
			None => {
				weights = compute_evaluation_vector(rows, evaluation_point)?;
				row_count = Some(rows);
			}
			Some(expected) => ensure!(
				rows == expected,
				Error::InconsistentResultColumnLengths {
					column,
					expected,
					actual: rows,
				}
			),
		}

		let mut accumulator = *claimed * Scalar::MINUS_ONE;
		for weight in &weights {
			let (after, value) = read_entry(next, data_type)?;
			accumulator += value * weight;
			next = after;
		}
		ensure!(accumulator.is_zero(), Error::IncorrectResult { column });
		cursor = next;
	}

	if !cursor.is_empty() {
		debug!(remaining = cursor.remaining(), "trailing bytes after the result set");
	}
	Ok(())
}
