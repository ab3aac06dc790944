// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tabular_type::{BitVec, Value};

/// Plain text column storage: one owned string per row plus a definedness
/// bit vector. Undefined slots hold an empty string and are never read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	data: Vec<String>,
	bitvec: BitVec,
}

impl Deref for Utf8Container {
	type Target = [String];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl Utf8Container {
	pub fn new(data: Vec<String>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self { data, bitvec }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self { data: Vec::with_capacity(capacity), bitvec: BitVec::with_capacity(capacity) }
	}

	pub fn from_vec(data: Vec<String>) -> Self {
		let len = data.len();
		Self { data, bitvec: BitVec::repeat(len, true) }
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: impl Into<String>) {
		self.data.push(value.into());
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(String::new());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if self.is_defined(index) { Some(self.data[index].as_str()) } else { None }
	}

	pub fn set(&mut self, index: usize, value: impl Into<String>) {
		self.data[index] = value.into();
		self.bitvec.set(index, true);
	}

	pub fn set_undefined(&mut self, index: usize) {
		self.data[index] = String::new();
		self.bitvec.set(index, false);
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.count_ones() == self.len()
	}

	pub fn get_value(&self, index: usize) -> Value {
		if self.is_defined(index) { Value::Utf8(self.data[index].clone()) } else { Value::Undefined }
	}

	pub fn as_string(&self, index: usize) -> String {
		if self.is_defined(index) { self.data[index].clone() } else { "Undefined".to_string() }
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		self.data
			.iter()
			.zip(self.bitvec.iter())
			.map(|(v, defined)| if defined { Some(v.as_str()) } else { None })
	}

	pub fn extend(&mut self, other: &Self) {
		for value in other.iter() {
			match value {
				Some(v) => self.push(v),
				None => self.push_undefined(),
			}
		}
	}

	/// Keep only the rows whose bit is set in `mask`.
	pub fn filter(&mut self, mask: &BitVec) {
		let mut new_data = Vec::with_capacity(mask.count_ones());
		let mut new_bitvec = BitVec::with_capacity(mask.count_ones());
		for (i, keep) in mask.iter().enumerate() {
			if keep && i < self.len() {
				new_data.push(std::mem::take(&mut self.data[i]));
				new_bitvec.push(self.bitvec.get(i));
			}
		}
		self.data = new_data;
		self.bitvec = new_bitvec;
	}

	/// The bit vector of rows that are defined and satisfy `predicate`.
	pub fn compare(&self, predicate: impl Fn(&str) -> bool) -> BitVec {
		let mut keep = BitVec::with_capacity(self.len());
		for i in 0..self.len() {
			keep.push(self.bitvec.get(i) && predicate(&self.data[i]));
		}
		keep
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let mut container = Utf8Container::with_capacity(3);
		container.push("ana");
		container.push_undefined();
		container.push("Bob");
		assert_eq!(container.get(0), Some("ana"));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), Some("Bob"));
	}

	#[test]
	fn test_get_value() {
		let container = Utf8Container::from_vec(vec!["x".to_string()]);
		assert_eq!(container.get_value(0), Value::utf8("x"));
		assert_eq!(container.get_value(9), Value::Undefined);
	}

	#[test]
	fn test_compare_skips_undefined() {
		let mut container = Utf8Container::with_capacity(3);
		container.push("apple");
		container.push_undefined();
		container.push("apricot");
		let keep = container.compare(|s| s.starts_with("ap"));
		let collected: Vec<bool> = keep.iter().collect();
		assert_eq!(collected, vec![true, false, true]);
	}

	#[test]
	fn test_filter() {
		let mut container = Utf8Container::from_vec(vec!["a".into(), "b".into(), "c".into()]);
		container.filter(&BitVec::from_slice(&[true, false, true]));
		assert_eq!(container.len(), 2);
		assert_eq!(container.get(0), Some("a"));
		assert_eq!(container.get(1), Some("c"));
	}
}
