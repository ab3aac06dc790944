// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tabular_type::{BitVec, DateTime, Value};

/// Date/time column storage: a dense vector of instants and a definedness
/// bit vector. Undefined slots hold the epoch and are never read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporalContainer {
	data: Vec<DateTime>,
	bitvec: BitVec,
}

impl TemporalContainer {
	pub fn new(data: Vec<DateTime>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self { data, bitvec }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self { data: Vec::with_capacity(capacity), bitvec: BitVec::with_capacity(capacity) }
	}

	pub fn from_vec(data: Vec<DateTime>) -> Self {
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

	pub fn push(&mut self, value: DateTime) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(DateTime::default());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<DateTime> {
		if self.is_defined(index) { Some(self.data[index]) } else { None }
	}

	pub fn set(&mut self, index: usize, value: DateTime) {
		self.data[index] = value;
		self.bitvec.set(index, true);
	}

	pub fn set_undefined(&mut self, index: usize) {
		self.data[index] = DateTime::default();
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
		if self.is_defined(index) { Value::DateTime(self.data[index]) } else { Value::Undefined }
	}

	pub fn as_string(&self, index: usize) -> String {
		if self.is_defined(index) { self.data[index].to_string() } else { "Undefined".to_string() }
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<DateTime>> + '_ {
		self.data
			.iter()
			.zip(self.bitvec.iter())
			.map(|(v, defined)| if defined { Some(*v) } else { None })
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
				new_data.push(self.data[i]);
				new_bitvec.push(self.bitvec.get(i));
			}
		}
		self.data = new_data;
		self.bitvec = new_bitvec;
	}

	/// The bit vector of rows that are defined and satisfy `predicate`.
	pub fn compare(&self, predicate: impl Fn(DateTime) -> bool) -> BitVec {
		let mut keep = BitVec::with_capacity(self.len());
		for i in 0..self.len() {
			keep.push(self.bitvec.get(i) && predicate(self.data[i]));
		}
		keep
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dt(millis: i64) -> DateTime {
		DateTime::from_millis(millis)
	}

	#[test]
	fn test_push_and_get() {
		let mut container = TemporalContainer::with_capacity(2);
		container.push(dt(1_000));
		container.push_undefined();
		assert_eq!(container.get(0), Some(dt(1_000)));
		assert_eq!(container.get(1), None);
	}

	#[test]
	fn test_compare_skips_undefined() {
		let mut container = TemporalContainer::with_capacity(3);
		container.push(dt(100));
		container.push_undefined();
		container.push(dt(300));
		let keep = container.compare(|v| v > dt(150));
		let collected: Vec<bool> = keep.iter().collect();
		assert_eq!(collected, vec![false, false, true]);
	}

	#[test]
	fn test_filter() {
		let mut container = TemporalContainer::from_vec(vec![dt(1), dt(2), dt(3)]);
		container.filter(&BitVec::from_slice(&[true, false, true]));
		assert_eq!(container.len(), 2);
		assert_eq!(container.get(1), Some(dt(3)));
	}
}
