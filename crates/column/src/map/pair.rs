// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabular_type::{Error, Result, Type, Value};

use crate::{column::Column, data::ColumnData, map::TextCol};

/// Pairwise text operations over two equal-length columns.
impl Column {
	/// The longest common leading characters of each row pair.
	pub fn common_prefix(&self, other: &Column) -> Result<Column> {
		self.map_text_pair(other, "prefix", |a, b| {
			a.chars()
				.zip(b.chars())
				.take_while(|(x, y)| x == y)
				.map(|(x, _)| x)
				.collect()
		})
	}

	/// The longest common trailing characters of each row pair.
	pub fn common_suffix(&self, other: &Column) -> Result<Column> {
		self.map_text_pair(other, "suffix", |a, b| {
			let suffix: String = a
				.chars()
				.rev()
				.zip(b.chars().rev())
				.take_while(|(x, y)| x == y)
				.map(|(x, _)| x)
				.collect();
			suffix.chars().rev().collect()
		})
	}

	/// Concatenate each row pair around `delimiter`. An empty delimiter is
	/// permitted and yields plain concatenation.
	pub fn join(&self, other: &Column, delimiter: &str) -> Result<Column> {
		self.map_text_pair(other, "join", move |a, b| {
			let mut joined = String::with_capacity(a.len() + delimiter.len() + b.len());
			joined.push_str(a);
			joined.push_str(delimiter);
			joined.push_str(b);
			joined
		})
	}

	/// The Levenshtein edit distance between each row pair, as an Int8
	/// column.
	pub fn distance(&self, other: &Column) -> Result<Column> {
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
		let mut out = ColumnData::with_capacity(Type::Int8, left.len());
		for index in 0..left.len() {
			match (left.get(index), right.get(index)) {
				(Some(a), Some(b)) => out.push_value(Value::int8(levenshtein(a, b) as i64))?,
				_ => out.push_undefined(),
			}
		}
		Ok(Column::new(self.pair_name(other, "distance"), out))
	}
}

/// Classic two-row dynamic program over characters.
fn levenshtein(a: &str, b: &str) -> usize {
	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();
	if a.is_empty() {
		return b.len();
	}
	if b.is_empty() {
		return a.len();
	}

	let mut previous: Vec<usize> = (0..=b.len()).collect();
	let mut current = vec![0usize; b.len() + 1];

	for (i, &ca) in a.iter().enumerate() {
		current[0] = i + 1;
		for (j, &cb) in b.iter().enumerate() {
			let substitution = previous[j] + usize::from(ca != cb);
			current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
		}
		std::mem::swap(&mut previous, &mut current);
	}
	previous[b.len()]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text(name: &str, values: Vec<&str>) -> Column {
		Column::new(name, ColumnData::utf8(values))
	}

	#[test]
	fn test_common_prefix_and_suffix() {
		let a = text("a", vec!["flowchart", "testing"]);
		let b = text("b", vec!["flowers", "nesting"]);

		let prefix = a.common_prefix(&b).unwrap();
		assert_eq!(prefix.name, "ab[prefix]");
		assert_eq!(prefix.get(0), Value::utf8("flow"));
		assert_eq!(prefix.get(1), Value::utf8(""));

		let suffix = a.common_suffix(&b).unwrap();
		assert_eq!(suffix.get(0), Value::utf8(""));
		assert_eq!(suffix.get(1), Value::utf8("esting"));
	}

	#[test]
	fn test_join() {
		let a = text("first", vec!["ada"]);
		let b = text("last", vec!["lovelace"]);
		assert_eq!(a.join(&b, " ").unwrap().get(0), Value::utf8("ada lovelace"));
		// empty delimiter: plain concatenation
		assert_eq!(a.join(&b, "").unwrap().get(0), Value::utf8("adalovelace"));
		assert_eq!(a.join(&b, "-").unwrap().name, "firstlast[join]");
	}

	#[test]
	fn test_join_propagates_missing_on_either_side() {
		let mut a = Column::with_capacity("a", Type::Utf8, 2);
		a.push(Value::utf8("x")).unwrap();
		a.push(Value::Undefined).unwrap();
		let b = text("b", vec!["1", "2"]);
		let joined = a.join(&b, ",").unwrap();
		assert_eq!(joined.get(0), Value::utf8("x,1"));
		assert_eq!(joined.get(1), Value::Undefined);
	}

	#[test]
	fn test_distance() {
		let a = text("a", vec!["kitten", "same", ""]);
		let b = text("b", vec!["sitting", "same", "abc"]);
		let distances = a.distance(&b).unwrap();
		assert_eq!(distances.get_type(), Type::Int8);
		assert_eq!(distances.name, "ab[distance]");
		assert_eq!(distances.get(0), Value::int8(3));
		assert_eq!(distances.get(1), Value::int8(0));
		assert_eq!(distances.get(2), Value::int8(3));
	}

	#[test]
	fn test_distance_rejects_non_text() {
		let a = text("a", vec!["x"]);
		let b = Column::new("b", ColumnData::int8(vec![1]));
		assert!(matches!(a.distance(&b).unwrap_err(), Error::TypeMismatch { .. }));
	}

	#[test]
	fn test_levenshtein_unicode() {
		assert_eq!(levenshtein("über", "uber"), 1);
		assert_eq!(levenshtein("", ""), 0);
	}
}
