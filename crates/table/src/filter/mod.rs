// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Declarative row predicates. A [`Filter`] is a tree of comparisons and
//! boolean combinators that, applied to a [`Table`], yields the
//! [`Selection`] of row positions satisfying it. Leaves delegate to the
//! vectorized column comparisons, so a filter never inspects rows one by
//! one itself.

mod reference;

pub use reference::{ColumnReference, column};

use tabular_column::Selection;
use tabular_type::{Result, Value};
use tracing::instrument;

use crate::table::Table;

#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
	GreaterThan { column: ColumnReference, value: Value },
	GreaterThanOrEqual { column: ColumnReference, value: Value },
	LessThan { column: ColumnReference, value: Value },
	LessThanOrEqual { column: ColumnReference, value: Value },
	EqualTo { column: ColumnReference, value: Value },
	NotEqualTo { column: ColumnReference, value: Value },
	Between { column: ColumnReference, lower: Value, upper: Value },
	TextContains { column: ColumnReference, pattern: String },
	IsMissing { column: ColumnReference },
	IsNotMissing { column: ColumnReference },
	And(Vec<Filter>),
	Or(Vec<Filter>),
	Not(Box<Filter>),
}

impl Filter {
	/// Evaluates the tree against `table`. The result always shares the
	/// table's row universe, so it composes with selections obtained from
	/// other filters over the same table.
	#[instrument(name = "filter::apply", level = "trace", skip(self, table))]
	pub fn apply(&self, table: &Table) -> Result<Selection> {
		match self {
			Filter::GreaterThan { column, value } => {
				column.resolve(table)?.is_greater_than(value)
			}
			Filter::GreaterThanOrEqual { column, value } => {
				column.resolve(table)?.is_greater_than_or_equal(value)
			}
			Filter::LessThan { column, value } => {
				column.resolve(table)?.is_less_than(value)
			}
			Filter::LessThanOrEqual { column, value } => {
				column.resolve(table)?.is_less_than_or_equal(value)
			}
			Filter::EqualTo { column, value } => {
				column.resolve(table)?.is_equal_to(value)
			}
			Filter::NotEqualTo { column, value } => {
				column.resolve(table)?.is_not_equal_to(value)
			}
			Filter::Between { column, lower, upper } => {
				column.resolve(table)?.is_between(lower, upper)
			}
			Filter::TextContains { column, pattern } => {
				column.resolve(table)?.matches_text(pattern)
			}
			Filter::IsMissing { column } => column.resolve(table)?.is_missing(),
			Filter::IsNotMissing { column } => {
				column.resolve(table)?.is_not_missing()
			}
			Filter::And(children) => {
				let mut result = Selection::full(table.row_count());
				for child in children {
					result = result.and(&child.apply(table)?)?;
				}
				Ok(result)
			}
			Filter::Or(children) => {
				let mut result = Selection::empty(table.row_count());
				for child in children {
					result = result.or(&child.apply(table)?)?;
				}
				Ok(result)
			}
			Filter::Not(child) => Ok(child.apply(table)?.not()),
		}
	}

	/// Conjunction. Flattens nested `And` nodes to keep the tree shallow.
	pub fn and(self, other: Filter) -> Filter {
		match (self, other) {
			(Filter::And(mut left), Filter::And(right)) => {
				left.extend(right);
				Filter::And(left)
			}
			(Filter::And(mut left), right) => {
				left.push(right);
				Filter::And(left)
			}
			(left, Filter::And(mut right)) => {
				right.insert(0, left);
				Filter::And(right)
			}
			(left, right) => Filter::And(vec![left, right]),
		}
	}

	/// Disjunction. Flattens nested `Or` nodes.
	pub fn or(self, other: Filter) -> Filter {
		match (self, other) {
			(Filter::Or(mut left), Filter::Or(right)) => {
				left.extend(right);
				Filter::Or(left)
			}
			(Filter::Or(mut left), right) => {
				left.push(right);
				Filter::Or(left)
			}
			(left, Filter::Or(mut right)) => {
				right.insert(0, left);
				Filter::Or(right)
			}
			(left, right) => Filter::Or(vec![left, right]),
		}
	}

	#[allow(clippy::should_implement_trait)]
	pub fn not(self) -> Filter {
		match self {
			// Double negation cancels out.
			Filter::Not(inner) => *inner,
			other => Filter::Not(Box::new(other)),
		}
	}
}
