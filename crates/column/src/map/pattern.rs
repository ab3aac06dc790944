// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabular_type::{Error, Result, Type, Value};

use crate::{column::Column, data::ColumnData, map::text::compile};

/// Cursor-scan operations: traversals whose per-row result is optional or
/// that need a full sequential pass rather than indexed access.
impl Column {
	/// Count, per row, the total non-overlapping occurrences of every term.
	/// Missing rows propagate as missing counts.
	///
	/// An empty term list and an empty-string term are both rejected: the
	/// former has no defined meaning, the latter would otherwise report
	/// every position of every row.
	pub fn count_occurrences(&self, terms: &[&str]) -> Result<Column> {
		if terms.is_empty() {
			return Err(Error::invalid_argument("occurrence terms must not be empty"));
		}
		if let Some(empty) = terms.iter().position(|t| t.is_empty()) {
			return Err(Error::invalid_argument(format!(
				"occurrence term at position {} is an empty string",
				empty
			)));
		}

		let mut out = ColumnData::with_capacity(Type::Int8, self.size());
		let mut scan = self.data.text_scan()?;
		while let Some(row) = scan.next() {
			match row {
				Some(value) => {
					let count: usize = terms.iter().map(|term| value.matches(term).count()).sum();
					out.push_value(Value::int8(count as i64))?;
				}
				None => out.push_undefined(),
			}
		}

		tracing::debug!(column = %self.name, terms = terms.len(), rows = self.size(), "counted occurrences");
		Ok(Column::new(self.derived_name("count"), out))
	}

	/// Collect the first match of `pattern` for every row that has one.
	/// Rows without a match (and missing rows) contribute nothing, so the
	/// result may be shorter than the source.
	pub fn extract_first_match(&self, pattern: &str) -> Result<Column> {
		let regex = compile(pattern)?;

		let mut out = ColumnData::with_capacity(Type::Category, self.size());
		let mut scan = self.data.text_scan()?;
		while let Some(row) = scan.next() {
			if let Some(value) = row {
				if let Some(found) = regex.find(value) {
					out.push_value(Value::utf8(found.as_str()))?;
				}
			}
		}

		tracing::debug!(column = %self.name, matched = out.len(), rows = self.size(), "extracted first matches");
		Ok(Column::new(self.derived_name("match"), out))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_count_occurrences() {
		let column = Column::new("log", ColumnData::utf8(vec!["aab", "banana", "xyz"]));
		let counts = column.count_occurrences(&["a"]).unwrap();
		assert_eq!(counts.name, "log[count]");
		assert_eq!(counts.get_type(), Type::Int8);
		assert_eq!(counts.get(0), Value::int8(2));
		assert_eq!(counts.get(1), Value::int8(3));
		assert_eq!(counts.get(2), Value::int8(0));
	}

	#[test]
	fn test_count_occurrences_multiple_terms() {
		let column = Column::new("log", ColumnData::utf8(vec!["error: warn warn"]));
		let counts = column.count_occurrences(&["error", "warn"]).unwrap();
		assert_eq!(counts.get(0), Value::int8(3));
	}

	#[test]
	fn test_count_occurrences_is_non_overlapping() {
		let column = Column::new("v", ColumnData::utf8(vec!["aaaa"]));
		let counts = column.count_occurrences(&["aa"]).unwrap();
		assert_eq!(counts.get(0), Value::int8(2));
	}

	#[test]
	fn test_count_occurrences_rejects_empty_inputs() {
		let column = Column::new("v", ColumnData::utf8(vec!["abc"]));
		// an empty term list must not silently count every row
		assert!(matches!(column.count_occurrences(&[]).unwrap_err(), Error::InvalidArgument { .. }));
		// an empty-string term must be rejected, not loop or return size()
		assert!(matches!(
			column.count_occurrences(&["a", ""]).unwrap_err(),
			Error::InvalidArgument { .. }
		));
	}

	#[test]
	fn test_count_occurrences_propagates_missing() {
		let mut column = Column::with_capacity("v", Type::Utf8, 2);
		column.push(Value::utf8("aa")).unwrap();
		column.push(Value::Undefined).unwrap();
		let counts = column.count_occurrences(&["a"]).unwrap();
		assert_eq!(counts.size(), 2);
		assert_eq!(counts.get(1), Value::Undefined);
	}

	#[test]
	fn test_extract_first_match_keeps_only_matching_rows() {
		let mut column = Column::with_capacity("v", Type::Utf8, 4);
		column.push(Value::utf8("order 17")).unwrap();
		column.push(Value::utf8("no digits here")).unwrap();
		column.push(Value::Undefined).unwrap();
		column.push(Value::utf8("batch 304 of 5")).unwrap();

		let matches = column.extract_first_match(r"\d+").unwrap();
		assert_eq!(matches.name, "v[match]");
		assert_eq!(matches.get_type(), Type::Category);
		assert_eq!(matches.size(), 2);
		assert_eq!(matches.get(0), Value::utf8("17"));
		assert_eq!(matches.get(1), Value::utf8("304"));
	}

	#[test]
	fn test_extract_with_empty_pattern_terminates() {
		let column = Column::new("v", ColumnData::utf8(vec!["ab"]));
		let matches = column.extract_first_match("").unwrap();
		assert_eq!(matches.size(), 1);
		assert_eq!(matches.get(0), Value::utf8(""));
	}

	#[test]
	fn test_invalid_pattern() {
		let column = Column::new("v", ColumnData::utf8(vec!["ab"]));
		assert!(matches!(
			column.extract_first_match("(unclosed").unwrap_err(),
			Error::InvalidArgument { .. }
		));
	}

	#[test]
	fn test_scan_ops_require_text_columns() {
		let column = Column::new("n", ColumnData::int8(vec![1]));
		assert!(column.count_occurrences(&["a"]).is_err());
		assert!(column.extract_first_match("a").is_err());
	}
}
