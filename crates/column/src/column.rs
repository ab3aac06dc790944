// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tabular_type::{Result, Type, Value};

use crate::data::ColumnData;

/// A named, typed, ordered container of values spanning all rows of a table.
/// Index `r` resolves to the same logical row across every column of the
/// owning table; the size is fixed for the lifetime of a scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self { name: name.into(), data }
	}

	/// Create an empty column of the given type. `capacity` is a hint for
	/// the expected row count.
	pub fn with_capacity(name: impl Into<String>, r#type: Type, capacity: usize) -> Self {
		Self { name: name.into(), data: ColumnData::with_capacity(r#type, capacity) }
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn size(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Fetch the value at `index`; out-of-range indices read as undefined.
	pub fn get(&self, index: usize) -> Value {
		self.data.get_value(index)
	}

	/// Overwrite the value at `index`. The value's type must match the
	/// column type; `Undefined` clears the slot.
	pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
		self.data.set_value(index, value)
	}

	/// Append a value, growing the column by one row.
	pub fn push(&mut self, value: Value) -> Result<()> {
		self.data.push_value(value)
	}

	pub fn is_defined(&self, index: usize) -> bool {
		self.data.is_defined(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_with_capacity_factory() {
		let mut column = Column::with_capacity("age", Type::Int8, 8);
		assert_eq!(column.size(), 0);
		assert_eq!(column.get_type(), Type::Int8);
		column.push(Value::int8(30)).unwrap();
		column.push(Value::Undefined).unwrap();
		assert_eq!(column.size(), 2);
		assert_eq!(column.get(0), Value::int8(30));
		assert!(!column.is_defined(1));
	}

	#[test]
	fn test_set() {
		let mut column = Column::new("flag", ColumnData::bool(vec![true, false]));
		column.set(1, Value::bool(true)).unwrap();
		assert_eq!(column.get(1), Value::bool(true));
		assert!(column.set(1, Value::int8(1)).is_err());
	}
}
