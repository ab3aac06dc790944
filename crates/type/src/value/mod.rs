// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

mod datetime;
mod ordered_f64;
pub mod r#type;

pub use datetime::DateTime;
pub use ordered_f64::OrderedF64;
pub use r#type::Type;

/// A single cell value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A date and time value with millisecond precision in UTC
	DateTime(DateTime),
}

impl Value {
	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn datetime(v: DateTime) -> Self {
		Value::DateTime(v)
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	/// The column type this value naturally belongs to. `Undefined` carries
	/// no type of its own; callers that need one must consult the column.
	pub fn get_type(&self) -> Option<Type> {
		match self {
			Value::Undefined => None,
			Value::Boolean(_) => Some(Type::Boolean),
			Value::Int8(_) => Some(Type::Int8),
			Value::Float8(_) => Some(Type::Float8),
			Value::Utf8(_) => Some(Type::Utf8),
			Value::DateTime(_) => Some(Type::DateTime),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("Undefined"),
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Utf8(v) => f.write_str(v),
			Value::DateTime(v) => Display::fmt(v, f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_float8_rejects_nan_as_undefined() {
		assert_eq!(Value::float8(f64::NAN), Value::Undefined);
		assert_eq!(Value::float8(2.0), Value::Float8(OrderedF64::try_from(2.0).unwrap()));
	}

	#[test]
	fn test_get_type() {
		assert_eq!(Value::int8(1).get_type(), Some(Type::Int8));
		assert_eq!(Value::utf8("a").get_type(), Some(Type::Utf8));
		assert_eq!(Value::Undefined.get_type(), None);
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::Undefined.to_string(), "Undefined");
		assert_eq!(Value::int8(42).to_string(), "42");
		assert_eq!(Value::utf8("ana").to_string(), "ana");
	}

	#[test]
	fn test_serde_roundtrip() {
		let values = vec![
			Value::Undefined,
			Value::bool(true),
			Value::int8(7),
			Value::float8(1.5),
			Value::utf8("text"),
			Value::datetime(DateTime::from_millis(1_000)),
		];
		let json = serde_json::to_string(&values).unwrap();
		let recovered: Vec<Value> = serde_json::from_str(&json).unwrap();
		assert_eq!(recovered, values);
	}
}
