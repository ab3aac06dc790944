// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashMap,
	fmt::{self, Display, Formatter},
};

use tabular_column::{Column, Selection};
use tabular_type::{Error, Result};
use tracing::instrument;

use crate::iterator::TableIter;

/// The aggregation point: a set of named columns of equal length. Column
/// names are unique and case-sensitive; index `r` addresses the same
/// logical row in every column.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
	columns: Vec<Column>,
	index: HashMap<String, usize>,
}

impl Table {
	pub fn new(columns: Vec<Column>) -> Result<Self> {
		let row_count = columns.first().map_or(0, |column| column.size());
		let mut index = HashMap::with_capacity(columns.len());
		for (position, column) in columns.iter().enumerate() {
			if column.size() != row_count {
				return Err(Error::invalid_argument(format!(
					"column '{}' has {} rows, expected {}",
					column.name,
					column.size(),
					row_count
				)));
			}
			if index.insert(column.name.clone(), position).is_some() {
				return Err(Error::invalid_argument(format!(
					"duplicate column name '{}'",
					column.name
				)));
			}
		}
		Ok(Self { columns, index })
	}

	pub fn empty() -> Self {
		Self { columns: Vec::new(), index: HashMap::new() }
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |column| column.size())
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn column_names(&self) -> impl Iterator<Item = &str> {
		self.columns.iter().map(|column| column.name.as_str())
	}

	pub(crate) fn position_of(&self, name: &str) -> Option<usize> {
		self.index.get(name).copied()
	}

	/// Look up a column by name.
	pub fn column(&self, name: &str) -> Result<&Column> {
		self.index
			.get(name)
			.map(|&position| &self.columns[position])
			.ok_or_else(|| Error::column_not_found(name))
	}

	pub fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
		match self.index.get(name) {
			Some(&position) => Ok(&mut self.columns[position]),
			None => Err(Error::column_not_found(name)),
		}
	}

	/// Attach a column. Its length must match the table's row count unless
	/// the table has no columns yet.
	pub fn add_column(&mut self, column: Column) -> Result<()> {
		if self.index.contains_key(&column.name) {
			return Err(Error::invalid_argument(format!(
				"duplicate column name '{}'",
				column.name
			)));
		}
		if !self.columns.is_empty() && column.size() != self.row_count() {
			return Err(Error::invalid_argument(format!(
				"column '{}' has {} rows, expected {}",
				column.name,
				column.size(),
				self.row_count()
			)));
		}
		self.index.insert(column.name.clone(), self.columns.len());
		self.columns.push(column);
		Ok(())
	}

	/// Materialize a new table containing only the selected rows, column
	/// order and types preserved.
	#[instrument(name = "table::select", level = "trace", skip(self, selection))]
	pub fn select(&self, selection: &Selection) -> Result<Table> {
		if selection.universe() != self.row_count() {
			return Err(Error::incompatible_universe(self.row_count(), selection.universe()));
		}
		let mask = selection.mask();
		let columns = self
			.columns
			.iter()
			.map(|column| {
				let mut sliced = column.clone();
				sliced.data.filter(mask);
				sliced
			})
			.collect();
		tracing::debug!(rows = selection.size(), of = self.row_count(), "sliced table");
		Ok(Self { columns, index: self.index.clone() })
	}

	pub fn iter(&self) -> TableIter<'_> {
		TableIter::new(self)
	}
}

impl Display for Table {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut widths: Vec<usize> = self.columns.iter().map(|c| c.name.len()).collect();
		let mut cells: Vec<Vec<String>> = Vec::with_capacity(self.row_count());
		for row in 0..self.row_count() {
			let rendered: Vec<String> =
				self.columns.iter().map(|c| c.data.as_string(row)).collect();
			for (width, cell) in widths.iter_mut().zip(&rendered) {
				*width = (*width).max(cell.len());
			}
			cells.push(rendered);
		}

		for (position, column) in self.columns.iter().enumerate() {
			if position > 0 {
				f.write_str("  ")?;
			}
			write!(f, "{:width$}", column.name, width = widths[position])?;
		}
		writeln!(f)?;
		for rendered in cells {
			for (position, cell) in rendered.iter().enumerate() {
				if position > 0 {
					f.write_str("  ")?;
				}
				write!(f, "{:width$}", cell, width = widths[position])?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use tabular_column::ColumnData;
	use tabular_type::Value;

	use super::*;

	fn people() -> Table {
		let mut age = Column::with_capacity("Age", tabular_type::Type::Int8, 5);
		for value in [Value::int8(10), Value::int8(25), Value::int8(40), Value::Undefined, Value::int8(17)] {
			age.push(value).unwrap();
		}
		let name = Column::new("Name", ColumnData::utf8(vec!["ann", "bo", "cyd", "dee", "eli"]));
		Table::new(vec![age, name]).unwrap()
	}

	#[test]
	fn test_column_lookup() {
		let table = people();
		assert_eq!(table.column("Age").unwrap().name, "Age");
		assert_eq!(table.column("age").unwrap_err(), Error::column_not_found("age"));
	}

	#[test]
	fn test_rejects_duplicate_names_and_ragged_columns() {
		let a = Column::new("x", ColumnData::int8(vec![1]));
		let b = Column::new("x", ColumnData::int8(vec![2]));
		assert!(Table::new(vec![a.clone(), b]).is_err());

		let short = Column::new("y", ColumnData::int8(vec![]));
		assert!(Table::new(vec![a, short]).is_err());
	}

	#[test]
	fn test_select_slices_all_columns() {
		let table = people();
		let selection = Selection::from_slice(5, &[1, 2]).unwrap();
		let sliced = table.select(&selection).unwrap();
		assert_eq!(sliced.row_count(), 2);
		assert_eq!(sliced.column("Age").unwrap().get(0), Value::int8(25));
		assert_eq!(sliced.column("Name").unwrap().get(1), Value::utf8("cyd"));
		// column order and types preserved
		assert_eq!(
			sliced.column_names().collect::<Vec<_>>(),
			table.column_names().collect::<Vec<_>>()
		);
	}

	#[test]
	fn test_select_full_round_trips_sizes() {
		let table = people();
		let full = Selection::full(table.row_count());
		let sliced = table.select(&full).unwrap();
		for name in ["Age", "Name"] {
			assert_eq!(sliced.column(name).unwrap().size(), table.column(name).unwrap().size());
		}
	}

	#[test]
	fn test_select_requires_matching_universe() {
		let table = people();
		let selection = Selection::empty(4);
		assert_eq!(table.select(&selection).unwrap_err(), Error::incompatible_universe(5, 4));
	}

	#[test]
	fn test_column_mut_writes_in_place() {
		let mut table = people();
		table.column_mut("Age").unwrap().set(3, Value::int8(33)).unwrap();
		assert_eq!(table.column("Age").unwrap().get(3), Value::int8(33));
		assert_eq!(table.column_mut("age").unwrap_err(), Error::column_not_found("age"));
	}

	#[test]
	fn test_add_column() {
		let mut table = people();
		let flag = Column::new("Adult", ColumnData::bool(vec![false, true, true, false, false]));
		table.add_column(flag).unwrap();
		assert_eq!(table.column_count(), 3);

		let ragged = Column::new("Oops", ColumnData::int8(vec![1]));
		assert!(table.add_column(ragged).is_err());
		let duplicate = Column::new("Age", ColumnData::int8(vec![0; 5]));
		assert!(table.add_column(duplicate).is_err());
	}

	#[test]
	fn test_display_renders_undefined() {
		let table = people();
		let rendered = table.to_string();
		assert!(rendered.contains("Age"));
		assert!(rendered.contains("Undefined"));
	}
}
