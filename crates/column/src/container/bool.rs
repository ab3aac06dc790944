// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tabular_type::{BitVec, Value};

/// Boolean column storage: one bit vector for the values, one for
/// definedness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new(data: Vec<bool>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self { data: BitVec::from_slice(&data), bitvec }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self { data: BitVec::with_capacity(capacity), bitvec: BitVec::with_capacity(capacity) }
	}

	pub fn from_vec(data: Vec<bool>) -> Self {
		let len = data.len();
		Self { data: BitVec::from_slice(&data), bitvec: BitVec::repeat(len, true) }
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(false);
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if self.is_defined(index) { Some(self.data.get(index)) } else { None }
	}

	pub fn set(&mut self, index: usize, value: bool) {
		self.data.set(index, value);
		self.bitvec.set(index, true);
	}

	pub fn set_undefined(&mut self, index: usize) {
		self.data.set(index, false);
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
		if self.is_defined(index) { Value::Boolean(self.data.get(index)) } else { Value::Undefined }
	}

	pub fn as_string(&self, index: usize) -> String {
		if self.is_defined(index) { self.data.get(index).to_string() } else { "Undefined".to_string() }
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(v, defined)| if defined { Some(v) } else { None })
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
		let mut new_data = BitVec::with_capacity(mask.count_ones());
		let mut new_bitvec = BitVec::with_capacity(mask.count_ones());
		for (i, keep) in mask.iter().enumerate() {
			if keep && i < self.len() {
				new_data.push(self.data.get(i));
				new_bitvec.push(self.bitvec.get(i));
			}
		}
		self.data = new_data;
		self.bitvec = new_bitvec;
	}
}

impl Default for BoolContainer {
	fn default() -> Self {
		Self::with_capacity(0)
	}
}
