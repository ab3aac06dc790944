// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabular_column::ColumnData;
use tabular_type::{DateTime, Value};

use crate::table::Table;

/// A borrowed view of one cell. Numeric and temporal values are copied,
/// text stays borrowed from the column.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueRef<'a> {
	Undefined,
	Bool(bool),
	Int8(i64),
	Float8(f64),
	Text(&'a str),
	DateTime(DateTime),
}

impl ValueRef<'_> {
	pub fn as_value(&self) -> Value {
		match self {
			ValueRef::Undefined => Value::Undefined,
			ValueRef::Bool(v) => Value::Boolean(*v),
			ValueRef::Int8(v) => Value::Int8(*v),
			ValueRef::Float8(v) => Value::float8(*v),
			ValueRef::Text(v) => Value::utf8(*v),
			ValueRef::DateTime(v) => Value::DateTime(*v),
		}
	}
}

/// One row of a table, cells in column order with by-name access.
pub struct RowRef<'t> {
	values: Vec<ValueRef<'t>>,
	table: &'t Table,
}

impl<'t> RowRef<'t> {
	pub fn values(&self) -> &[ValueRef<'t>] {
		&self.values
	}

	pub fn get(&self, name: &str) -> Option<&ValueRef<'t>> {
		let position = self.table.position_of(name)?;
		self.values.get(position)
	}
}

pub struct TableIter<'t> {
	table: &'t Table,
	row_index: usize,
	row_total: usize,
}

impl<'t> TableIter<'t> {
	pub(crate) fn new(table: &'t Table) -> Self {
		Self { table, row_index: 0, row_total: table.row_count() }
	}
}

impl<'t> Iterator for TableIter<'t> {
	type Item = RowRef<'t>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.row_index >= self.row_total {
			return None;
		}
		let i = self.row_index;
		self.row_index += 1;

		let values = self
			.table
			.columns()
			.iter()
			.map(|column| match &column.data {
				ColumnData::Bool(container) => match container.get(i) {
					Some(v) => ValueRef::Bool(v),
					None => ValueRef::Undefined,
				},
				ColumnData::Int8(container) => match container.get(i) {
					Some(v) => ValueRef::Int8(v),
					None => ValueRef::Undefined,
				},
				ColumnData::Float8(container) => match container.get(i) {
					Some(v) => ValueRef::Float8(v),
					None => ValueRef::Undefined,
				},
				ColumnData::Utf8(container) => match container.get(i) {
					Some(v) => ValueRef::Text(v),
					None => ValueRef::Undefined,
				},
				ColumnData::Category(container) => match container.get(i) {
					Some(v) => ValueRef::Text(v),
					None => ValueRef::Undefined,
				},
				ColumnData::DateTime(container) => match container.get(i) {
					Some(v) => ValueRef::DateTime(v),
					None => ValueRef::Undefined,
				},
			})
			.collect();

		Some(RowRef { values, table: self.table })
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.row_total - self.row_index;
		(remaining, Some(remaining))
	}
}

#[cfg(test)]
mod tests {
	use tabular_column::Column;

	use super::*;

	#[test]
	fn test_iterates_rows_in_order() {
		let table = Table::new(vec![
			Column::new("n", ColumnData::int8(vec![1, 2])),
			Column::new("s", ColumnData::utf8(vec!["a", "b"])),
		])
		.unwrap();

		let rows: Vec<Vec<Value>> = table
			.iter()
			.map(|row| row.values().iter().map(|v| v.as_value()).collect())
			.collect();
		assert_eq!(rows, vec![
			vec![Value::int8(1), Value::utf8("a")],
			vec![Value::int8(2), Value::utf8("b")],
		]);
	}

	#[test]
	fn test_by_name_access_and_undefined() {
		let mut flag = Column::with_capacity("flag", tabular_type::Type::Boolean, 1);
		flag.push(Value::Undefined).unwrap();
		let table = Table::new(vec![flag]).unwrap();

		let row = table.iter().next().unwrap();
		assert_eq!(row.get("flag"), Some(&ValueRef::Undefined));
		assert_eq!(row.get("missing"), None);
	}
}
