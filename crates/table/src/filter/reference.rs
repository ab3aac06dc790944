// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabular_column::Column;
use tabular_type::{Result, Value};

use crate::{filter::Filter, table::Table};

/// A late-bound pointer to a column. The name is resolved against whatever
/// table a filter is applied to, at application time, so one filter tree
/// can be reused against any structurally compatible table.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnReference {
	name: String,
}

/// Shorthand for [`ColumnReference::new`].
pub fn column(name: impl Into<String>) -> ColumnReference {
	ColumnReference::new(name)
}

impl ColumnReference {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub(crate) fn resolve<'t>(&self, table: &'t Table) -> Result<&'t Column> {
		table.column(&self.name)
	}
}

/// Fluent leaf-filter constructors.
impl ColumnReference {
	pub fn is_greater_than(self, value: Value) -> Filter {
		Filter::GreaterThan { column: self, value }
	}

	pub fn is_greater_than_or_equal(self, value: Value) -> Filter {
		Filter::GreaterThanOrEqual { column: self, value }
	}

	pub fn is_less_than(self, value: Value) -> Filter {
		Filter::LessThan { column: self, value }
	}

	pub fn is_less_than_or_equal(self, value: Value) -> Filter {
		Filter::LessThanOrEqual { column: self, value }
	}

	pub fn is_equal_to(self, value: Value) -> Filter {
		Filter::EqualTo { column: self, value }
	}

	pub fn is_not_equal_to(self, value: Value) -> Filter {
		Filter::NotEqualTo { column: self, value }
	}

	pub fn is_between(self, lower: Value, upper: Value) -> Filter {
		Filter::Between { column: self, lower, upper }
	}

	pub fn contains_text(self, pattern: impl Into<String>) -> Filter {
		Filter::TextContains { column: self, pattern: pattern.into() }
	}

	pub fn is_missing(self) -> Filter {
		Filter::IsMissing { column: self }
	}

	pub fn is_not_missing(self) -> Filter {
		Filter::IsNotMissing { column: self }
	}
}
