// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The closed set of column types. Every column stores exactly one of
/// these; internal dispatch matches exhaustively so an unhandled type is a
/// compile error, not a runtime cast failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// An 8-byte signed integer.
	Int8,
	/// An 8-byte floating point.
	Float8,
	/// A UTF-8 encoded text value.
	Utf8,
	/// Dictionary-coded text: repeated values share a single interned code.
	Category,
	/// A date and time with millisecond precision in UTC.
	DateTime,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int8 | Type::Float8)
	}

	pub fn is_text(&self) -> bool {
		matches!(self, Type::Utf8 | Type::Category)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Int8 => f.write_str("Int8"),
			Type::Float8 => f.write_str("Float8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Category => f.write_str("Category"),
			Type::DateTime => f.write_str("DateTime"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_classification() {
		assert!(Type::Int8.is_number());
		assert!(Type::Float8.is_number());
		assert!(Type::Utf8.is_text());
		assert!(Type::Category.is_text());
		for t in [Type::Boolean, Type::DateTime] {
			assert!(!t.is_number());
			assert!(!t.is_text());
		}
	}
}
