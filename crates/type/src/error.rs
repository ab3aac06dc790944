// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::r#type::Type;

/// Errors surfaced by the columnar core. Every variant is unrecoverable at
/// the point of detection and propagates to the caller unchanged; the core
/// performs no retries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("column '{name}' not found")]
	ColumnNotFound { name: String },

	#[error("type mismatch on column '{column}': expected {expected}, found {found}")]
	TypeMismatch { column: String, expected: Type, found: Type },

	#[error("selections cover different universes: {left} rows vs {right} rows")]
	IncompatibleUniverse { left: usize, right: usize },

	#[error("invalid argument: {message}")]
	InvalidArgument { message: String },
}

impl Error {
	pub fn column_not_found(name: impl Into<String>) -> Self {
		Error::ColumnNotFound { name: name.into() }
	}

	pub fn type_mismatch(column: impl Into<String>, expected: Type, found: Type) -> Self {
		Error::TypeMismatch { column: column.into(), expected, found }
	}

	pub fn incompatible_universe(left: usize, right: usize) -> Self {
		Error::IncompatibleUniverse { left, right }
	}

	pub fn invalid_argument(message: impl Into<String>) -> Self {
		Error::InvalidArgument { message: message.into() }
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_carries_context() {
		let err = Error::type_mismatch("age", Type::Int8, Type::Utf8);
		let rendered = err.to_string();
		assert!(rendered.contains("age"));
		assert!(rendered.contains("Int8"));
		assert!(rendered.contains("Utf8"));
	}

	#[test]
	fn test_incompatible_universe_names_both_sizes() {
		let err = Error::incompatible_universe(5, 6);
		assert_eq!(err.to_string(), "selections cover different universes: 5 rows vs 6 rows");
	}
}
