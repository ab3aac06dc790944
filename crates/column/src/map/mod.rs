// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Column-to-column mapping operations. Each takes one or two source
//! columns and produces a new column whose name is derived from the
//! source name(s) plus an operation tag, e.g. `"Name[ucase]"`.
//!
//! Missing handling is uniform across every operation: a missing input row
//! produces a missing output row; the per-row function never observes a
//! sentinel value.

mod pair;
mod pattern;
mod text;

use tabular_type::{Error, Result, Type, Value};

use crate::{column::Column, data::ColumnData};

/// Read-only text view over a Utf8 or Category column, so per-row logic is
/// written once for both representations.
pub(crate) enum TextCol<'a> {
	Utf8(&'a crate::container::Utf8Container),
	Category(&'a crate::container::CategoryContainer),
}

impl<'a> TextCol<'a> {
	pub(crate) fn from_column(column: &'a Column) -> Result<Self> {
		match &column.data {
			ColumnData::Utf8(container) => Ok(TextCol::Utf8(container)),
			ColumnData::Category(container) => Ok(TextCol::Category(container)),
			other => Err(Error::type_mismatch(&column.name, Type::Utf8, other.get_type())),
		}
	}

	pub(crate) fn len(&self) -> usize {
		match self {
			TextCol::Utf8(container) => container.len(),
			TextCol::Category(container) => container.len(),
		}
	}

	pub(crate) fn get(&self, index: usize) -> Option<&'a str> {
		match self {
			TextCol::Utf8(container) => container.get(index),
			TextCol::Category(container) => container.get(index),
		}
	}
}

impl Column {
	pub(crate) fn derived_name(&self, tag: &str) -> String {
		format!("{}[{}]", self.name, tag)
	}

	pub(crate) fn pair_name(&self, other: &Column, tag: &str) -> String {
		format!("{}{}[{}]", self.name, other.name, tag)
	}

	/// Direct indexed pass: apply a fallible per-row text transform,
	/// preserving the source's text representation (Utf8 stays Utf8,
	/// Category stays Category).
	pub(crate) fn map_text(&self, tag: &str, f: impl Fn(&str) -> Result<String>) -> Result<Column> {
		let source = TextCol::from_column(self)?;
		let mut out = ColumnData::with_capacity(self.get_type(), self.size());
		for index in 0..source.len() {
			match source.get(index) {
				Some(value) => out.push_value(Value::utf8(f(value)?))?,
				None => out.push_undefined(),
			}
		}
		Ok(Column::new(self.derived_name(tag), out))
	}

	/// Direct indexed pass over two equal-length text columns, producing a
	/// Utf8 column. A missing value on either side yields a missing output
	/// row.
	pub(crate) fn map_text_pair(
		&self,
		other: &Column,
		tag: &str,
		f: impl Fn(&str, &str) -> String,
	) -> Result<Column> {
		let left = TextCol::from_column(self)?;
		let right = TextCol::from_column(other)?;
		if left.len() != right.len() {
			return Err(Error::invalid_argument(format!(
				"columns '{}' and '{}' differ in length: {} vs {}",
				self.name,
				other.name,
				left.len(),
				right.len()
			)));
		}
		let mut out = ColumnData::with_capacity(Type::Utf8, left.len());
		for index in 0..left.len() {
			match (left.get(index), right.get(index)) {
				(Some(a), Some(b)) => out.push_value(Value::utf8(f(a, b)))?,
				_ => out.push_undefined(),
			}
		}
		Ok(Column::new(self.pair_name(other, tag), out))
	}
}
