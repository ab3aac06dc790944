// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tabular_type::{Error, Result, Type, Value};

use crate::{column::Column, data::ColumnData, selection::Selection};

/// Vectorized comparison primitives. Each scans the column once and yields
/// the selection of rows whose value satisfies the comparison.
///
/// Missing rows never satisfy an ordering, equality or containment
/// comparison; only `is_missing` selects them.
impl Column {
	pub fn is_greater_than(&self, value: &Value) -> Result<Selection> {
		self.ordering_compare(value, |ord| ord == Ordering::Greater)
	}

	pub fn is_greater_than_or_equal(&self, value: &Value) -> Result<Selection> {
		self.ordering_compare(value, |ord| ord != Ordering::Less)
	}

	pub fn is_less_than(&self, value: &Value) -> Result<Selection> {
		self.ordering_compare(value, |ord| ord == Ordering::Less)
	}

	pub fn is_less_than_or_equal(&self, value: &Value) -> Result<Selection> {
		self.ordering_compare(value, |ord| ord != Ordering::Greater)
	}

	pub fn is_equal_to(&self, value: &Value) -> Result<Selection> {
		self.equality_compare(value, false)
	}

	pub fn is_not_equal_to(&self, value: &Value) -> Result<Selection> {
		self.equality_compare(value, true)
	}

	/// Rows whose value lies in `[lower, upper]`, bounds inclusive.
	pub fn is_between(&self, lower: &Value, upper: &Value) -> Result<Selection> {
		let at_least = self.is_greater_than_or_equal(lower)?;
		let at_most = self.is_less_than_or_equal(upper)?;
		at_least.and(&at_most)
	}

	/// Rows whose text contains `pattern` as a substring. Defined for text
	/// columns only.
	pub fn matches_text(&self, pattern: &str) -> Result<Selection> {
		let mask = match &self.data {
			ColumnData::Utf8(container) => container.compare(|s| s.contains(pattern)),
			ColumnData::Category(container) => container.compare(|s| s.contains(pattern)),
			_ => {
				return Err(Error::type_mismatch(&self.name, Type::Utf8, self.get_type()));
			}
		};
		Ok(Selection::from_mask(mask))
	}

	/// Rows holding no value. The complement of the definedness bit vector.
	pub fn is_missing(&self) -> Result<Selection> {
		Ok(Selection::from_mask(self.data.bitvec().not()))
	}

	pub fn is_not_missing(&self) -> Result<Selection> {
		Ok(Selection::from_mask(self.data.bitvec().clone()))
	}

	fn ordering_compare(&self, value: &Value, keep: impl Fn(Ordering) -> bool) -> Result<Selection> {
		let mask = match (&self.data, value) {
			(ColumnData::Int8(container), Value::Int8(v)) => container.compare(|x| keep(x.cmp(v))),
			(ColumnData::Float8(container), Value::Float8(v)) => {
				let operand = v.value();
				container.compare(|x| keep(x.total_cmp(&operand)))
			}
			(ColumnData::DateTime(container), Value::DateTime(v)) => {
				container.compare(|x| keep(x.cmp(v)))
			}
			(ColumnData::Utf8(_) | ColumnData::Category(_), Value::Utf8(_))
			| (ColumnData::Bool(_), Value::Boolean(_)) => {
				return Err(Error::invalid_argument(format!(
					"ordering comparison is not defined for {} column '{}'",
					self.get_type(),
					self.name
				)));
			}
			(_, operand) => return Err(self.operand_mismatch(operand)),
		};
		Ok(Selection::from_mask(mask))
	}

	fn equality_compare(&self, value: &Value, negate: bool) -> Result<Selection> {
		let mask = match (&self.data, value) {
			(ColumnData::Bool(container), Value::Boolean(v)) => {
				let mut keep = tabular_type::BitVec::with_capacity(container.len());
				for i in 0..container.len() {
					keep.push(container.get(i).is_some_and(|x| (x == *v) != negate));
				}
				keep
			}
			(ColumnData::Int8(container), Value::Int8(v)) => {
				container.compare(|x| (x == *v) != negate)
			}
			(ColumnData::Float8(container), Value::Float8(v)) => {
				let operand = v.value();
				container.compare(|x| (x == operand) != negate)
			}
			(ColumnData::Utf8(container), Value::Utf8(v)) => {
				container.compare(|s| (s == v.as_str()) != negate)
			}
			(ColumnData::Category(container), Value::Utf8(v)) => {
				container.compare(|s| (s == v.as_str()) != negate)
			}
			(ColumnData::DateTime(container), Value::DateTime(v)) => {
				container.compare(|x| (x == *v) != negate)
			}
			(_, operand) => return Err(self.operand_mismatch(operand)),
		};
		Ok(Selection::from_mask(mask))
	}

	/// `expected` is the column type the comparison operand calls for,
	/// `found` the actual column type. Mixed numeric widths are an error,
	/// never a silent widening.
	fn operand_mismatch(&self, operand: &Value) -> Error {
		match operand.get_type() {
			Some(expected) => Error::type_mismatch(&self.name, expected, self.get_type()),
			None => Error::invalid_argument(format!(
				"comparison operand for column '{}' must not be undefined; use is_missing instead",
				self.name
			)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn age_column() -> Column {
		let mut column = Column::with_capacity("Age", Type::Int8, 5);
		for value in [Value::int8(10), Value::int8(25), Value::int8(40), Value::Undefined, Value::int8(17)] {
			column.push(value).unwrap();
		}
		column
	}

	#[test]
	fn test_greater_than_excludes_missing() {
		// Age = [10, 25, 40, null, 17]; "Age > 18" selects {1, 2}
		let selection = age_column().is_greater_than(&Value::int8(18)).unwrap();
		assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 2]);
		assert_eq!(selection.universe(), 5);
	}

	#[test]
	fn test_less_than_and_bounds() {
		let column = age_column();
		assert_eq!(column.is_less_than(&Value::int8(17)).unwrap().iter().collect::<Vec<_>>(), vec![0]);
		assert_eq!(
			column.is_less_than_or_equal(&Value::int8(17)).unwrap().iter().collect::<Vec<_>>(),
			vec![0, 4]
		);
		assert_eq!(
			column.is_greater_than_or_equal(&Value::int8(25)).unwrap().iter().collect::<Vec<_>>(),
			vec![1, 2]
		);
	}

	#[test]
	fn test_between_is_inclusive() {
		let selection = age_column().is_between(&Value::int8(17), &Value::int8(25)).unwrap();
		assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 4]);
	}

	#[test]
	fn test_equality_on_text() {
		let column = Column::new("Name", ColumnData::utf8(vec!["ana", "Bob", "ana"]));
		assert_eq!(
			column.is_equal_to(&Value::utf8("ana")).unwrap().iter().collect::<Vec<_>>(),
			vec![0, 2]
		);
		assert_eq!(
			column.is_not_equal_to(&Value::utf8("ana")).unwrap().iter().collect::<Vec<_>>(),
			vec![1]
		);
	}

	#[test]
	fn test_not_equal_excludes_missing() {
		let mut column = Column::with_capacity("Name", Type::Utf8, 2);
		column.push(Value::utf8("ana")).unwrap();
		column.push(Value::Undefined).unwrap();
		let selection = column.is_not_equal_to(&Value::utf8("zoe")).unwrap();
		assert_eq!(selection.iter().collect::<Vec<_>>(), vec![0]);
	}

	#[test]
	fn test_mixed_numeric_types_are_rejected() {
		let column = age_column();
		let err = column.is_greater_than(&Value::float8(18.0)).unwrap_err();
		assert_eq!(err, Error::type_mismatch("Age", Type::Float8, Type::Int8));
	}

	#[test]
	fn test_numeric_filter_on_text_column() {
		let column = Column::new("Name", ColumnData::utf8(vec!["ana"]));
		let err = column.is_greater_than(&Value::int8(1)).unwrap_err();
		assert_eq!(err, Error::type_mismatch("Name", Type::Int8, Type::Utf8));
	}

	#[test]
	fn test_ordering_on_text_is_invalid() {
		let column = Column::new("Name", ColumnData::utf8(vec!["ana"]));
		assert!(matches!(
			column.is_greater_than(&Value::utf8("a")).unwrap_err(),
			Error::InvalidArgument { .. }
		));
	}

	#[test]
	fn test_undefined_operand_is_rejected() {
		let err = age_column().is_equal_to(&Value::Undefined).unwrap_err();
		assert!(matches!(err, Error::InvalidArgument { .. }));
	}

	#[test]
	fn test_missing_filters() {
		let column = age_column();
		assert_eq!(column.is_missing().unwrap().iter().collect::<Vec<_>>(), vec![3]);
		assert_eq!(
			column.is_not_missing().unwrap().iter().collect::<Vec<_>>(),
			vec![0, 1, 2, 4]
		);
	}

	#[test]
	fn test_matches_text() {
		let column = Column::new("City", ColumnData::category(vec!["Lisbon", "London", "Porto"]));
		let selection = column.matches_text("Lo").unwrap();
		assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1]);
	}

	#[test]
	fn test_datetime_ordering() {
		use tabular_type::DateTime;
		let column = Column::new(
			"When",
			ColumnData::datetime(vec![DateTime::from_millis(10), DateTime::from_millis(30)]),
		);
		let selection = column.is_greater_than(&Value::datetime(DateTime::from_millis(20))).unwrap();
		assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1]);
	}
}
