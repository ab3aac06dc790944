// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tabular_type::{BitVec, DateTime, Error, Result, Type, Value};

use crate::container::{
	BoolContainer, CategoryContainer, NumberContainer, TemporalContainer, Utf8Container,
};

/// The closed set of column storages. Internal code matches this enum
/// exhaustively, so handling a new column type is enforced at compile time;
/// `TypeMismatch` survives only at the boundary where callers supply
/// references and operands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Int8(NumberContainer<i64>),
	Float8(NumberContainer<f64>),
	Utf8(Utf8Container),
	Category(CategoryContainer),
	DateTime(TemporalContainer),
}

impl ColumnData {
	pub fn bool(data: Vec<bool>) -> Self {
		ColumnData::Bool(BoolContainer::from_vec(data))
	}

	pub fn bool_with_bitvec(data: Vec<bool>, bitvec: BitVec) -> Self {
		ColumnData::Bool(BoolContainer::new(data, bitvec))
	}

	pub fn int8(data: Vec<i64>) -> Self {
		ColumnData::Int8(NumberContainer::from_vec(data))
	}

	pub fn int8_with_bitvec(data: Vec<i64>, bitvec: BitVec) -> Self {
		ColumnData::Int8(NumberContainer::new(data, bitvec))
	}

	pub fn float8(data: Vec<f64>) -> Self {
		ColumnData::Float8(NumberContainer::from_vec(data))
	}

	pub fn float8_with_bitvec(data: Vec<f64>, bitvec: BitVec) -> Self {
		ColumnData::Float8(NumberContainer::new(data, bitvec))
	}

	pub fn utf8<S: Into<String>>(data: Vec<S>) -> Self {
		ColumnData::Utf8(Utf8Container::from_vec(data.into_iter().map(Into::into).collect()))
	}

	pub fn utf8_with_bitvec(data: Vec<String>, bitvec: BitVec) -> Self {
		ColumnData::Utf8(Utf8Container::new(data, bitvec))
	}

	pub fn category<S: Into<String>>(data: Vec<S>) -> Self {
		ColumnData::Category(CategoryContainer::from_vec(data.into_iter().map(Into::into).collect()))
	}

	pub fn datetime(data: Vec<DateTime>) -> Self {
		ColumnData::DateTime(TemporalContainer::from_vec(data))
	}

	pub fn datetime_with_bitvec(data: Vec<DateTime>, bitvec: BitVec) -> Self {
		ColumnData::DateTime(TemporalContainer::new(data, bitvec))
	}

	pub fn with_capacity(r#type: Type, capacity: usize) -> Self {
		match r#type {
			Type::Boolean => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity)),
			Type::Category => ColumnData::Category(CategoryContainer::with_capacity(capacity)),
			Type::DateTime => ColumnData::DateTime(TemporalContainer::with_capacity(capacity)),
		}
	}
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Int8(container) => container.get_type(),
			ColumnData::Float8(container) => container.get_type(),
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Category(_) => Type::Category,
			ColumnData::DateTime(_) => Type::DateTime,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(container) => container.len(),
			ColumnData::Int8(container) => container.len(),
			ColumnData::Float8(container) => container.len(),
			ColumnData::Utf8(container) => container.len(),
			ColumnData::Category(container) => container.len(),
			ColumnData::DateTime(container) => container.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool(container) => container.is_defined(index),
			ColumnData::Int8(container) => container.is_defined(index),
			ColumnData::Float8(container) => container.is_defined(index),
			ColumnData::Utf8(container) => container.is_defined(index),
			ColumnData::Category(container) => container.is_defined(index),
			ColumnData::DateTime(container) => container.is_defined(index),
		}
	}

	/// The definedness bit vector, one bit per row.
	pub fn bitvec(&self) -> &BitVec {
		match self {
			ColumnData::Bool(container) => container.bitvec(),
			ColumnData::Int8(container) => container.bitvec(),
			ColumnData::Float8(container) => container.bitvec(),
			ColumnData::Utf8(container) => container.bitvec(),
			ColumnData::Category(container) => container.bitvec(),
			ColumnData::DateTime(container) => container.bitvec(),
		}
	}

	/// Fetch the value at `index`; out-of-range indices read as undefined.
	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(container) => container.get_value(index),
			ColumnData::Int8(container) => container.get_value(index),
			ColumnData::Float8(container) => container.get_value(index),
			ColumnData::Utf8(container) => container.get_value(index),
			ColumnData::Category(container) => container.get_value(index),
			ColumnData::DateTime(container) => container.get_value(index),
		}
	}

	pub fn as_string(&self, index: usize) -> String {
		match self {
			ColumnData::Bool(container) => container.as_string(index),
			ColumnData::Int8(container) => container.as_string(index),
			ColumnData::Float8(container) => container.as_string(index),
			ColumnData::Utf8(container) => container.as_string(index),
			ColumnData::Category(container) => container.as_string(index),
			ColumnData::DateTime(container) => container.as_string(index),
		}
	}

	fn reject(&self, value: &Value) -> Error {
		let found = value.get_type();
		Error::invalid_argument(format!(
			"value of type {} cannot be stored in a {} column",
			found.map(|t| t.to_string()).unwrap_or_else(|| "Undefined".to_string()),
			self.get_type()
		))
	}

	/// Append a value; its type must match the column type. `Undefined`
	/// appends a missing row to any column.
	pub fn push_value(&mut self, value: Value) -> Result<()> {
		match (self, &value) {
			(data, Value::Undefined) => {
				data.push_undefined();
				Ok(())
			}
			(ColumnData::Bool(container), Value::Boolean(v)) => {
				container.push(*v);
				Ok(())
			}
			(ColumnData::Int8(container), Value::Int8(v)) => {
				container.push(*v);
				Ok(())
			}
			(ColumnData::Float8(container), Value::Float8(v)) => {
				container.push(v.value());
				Ok(())
			}
			(ColumnData::Utf8(container), Value::Utf8(v)) => {
				container.push(v.as_str());
				Ok(())
			}
			(ColumnData::Category(container), Value::Utf8(v)) => {
				container.push(v.as_str());
				Ok(())
			}
			(ColumnData::DateTime(container), Value::DateTime(v)) => {
				container.push(*v);
				Ok(())
			}
			(data, value) => Err(data.reject(value)),
		}
	}

	/// Overwrite the value at `index`; same typing rules as `push_value`.
	pub fn set_value(&mut self, index: usize, value: Value) -> Result<()> {
		if index >= self.len() {
			return Err(Error::invalid_argument(format!(
				"row index {} out of range for column of {} rows",
				index,
				self.len()
			)));
		}
		match (self, &value) {
			(data, Value::Undefined) => {
				data.set_undefined(index);
				Ok(())
			}
			(ColumnData::Bool(container), Value::Boolean(v)) => {
				container.set(index, *v);
				Ok(())
			}
			(ColumnData::Int8(container), Value::Int8(v)) => {
				container.set(index, *v);
				Ok(())
			}
			(ColumnData::Float8(container), Value::Float8(v)) => {
				container.set(index, v.value());
				Ok(())
			}
			(ColumnData::Utf8(container), Value::Utf8(v)) => {
				container.set(index, v.as_str());
				Ok(())
			}
			(ColumnData::Category(container), Value::Utf8(v)) => {
				container.set(index, v.as_str());
				Ok(())
			}
			(ColumnData::DateTime(container), Value::DateTime(v)) => {
				container.set(index, *v);
				Ok(())
			}
			(data, value) => Err(data.reject(value)),
		}
	}

	pub fn push_undefined(&mut self) {
		match self {
			ColumnData::Bool(container) => container.push_undefined(),
			ColumnData::Int8(container) => container.push_undefined(),
			ColumnData::Float8(container) => container.push_undefined(),
			ColumnData::Utf8(container) => container.push_undefined(),
			ColumnData::Category(container) => container.push_undefined(),
			ColumnData::DateTime(container) => container.push_undefined(),
		}
	}

	pub fn set_undefined(&mut self, index: usize) {
		match self {
			ColumnData::Bool(container) => container.set_undefined(index),
			ColumnData::Int8(container) => container.set_undefined(index),
			ColumnData::Float8(container) => container.set_undefined(index),
			ColumnData::Utf8(container) => container.set_undefined(index),
			ColumnData::Category(container) => container.set_undefined(index),
			ColumnData::DateTime(container) => container.set_undefined(index),
		}
	}

	/// Keep only the rows whose bit is set in `mask`.
	pub fn filter(&mut self, mask: &BitVec) {
		match self {
			ColumnData::Bool(container) => container.filter(mask),
			ColumnData::Int8(container) => container.filter(mask),
			ColumnData::Float8(container) => container.filter(mask),
			ColumnData::Utf8(container) => container.filter(mask),
			ColumnData::Category(container) => container.filter(mask),
			ColumnData::DateTime(container) => container.filter(mask),
		}
	}
}
