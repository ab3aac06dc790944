// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{fmt::Debug, ops::Deref};

use serde::{Deserialize, Serialize};
use tabular_type::{BitVec, Type, Value};

/// A numeric element type a `NumberContainer` can hold.
pub trait Number: Copy + Default + Debug + PartialOrd {
	fn value_type() -> Type;
	fn to_value(self) -> Value;
}

impl Number for i64 {
	fn value_type() -> Type {
		Type::Int8
	}

	fn to_value(self) -> Value {
		Value::Int8(self)
	}
}

impl Number for f64 {
	fn value_type() -> Type {
		Type::Float8
	}

	fn to_value(self) -> Value {
		Value::float8(self)
	}
}

/// Numeric column storage: a dense value vector and a definedness bit
/// vector. Undefined slots hold the default value and are never read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T: Number> {
	data: Vec<T>,
	bitvec: BitVec,
}

impl<T: Number> Deref for NumberContainer<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl<T: Number> NumberContainer<T> {
	pub fn new(data: Vec<T>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self { data, bitvec }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self { data: Vec::with_capacity(capacity), bitvec: BitVec::with_capacity(capacity) }
	}

	pub fn from_vec(data: Vec<T>) -> Self {
		let len = data.len();
		Self { data, bitvec: BitVec::repeat(len, true) }
	}

	/// The column type of the stored element.
	pub fn get_type(&self) -> Type {
		T::value_type()
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(T::default());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<T> {
		if self.is_defined(index) { Some(self.data[index]) } else { None }
	}

	pub fn set(&mut self, index: usize, value: T) {
		self.data[index] = value;
		self.bitvec.set(index, true);
	}

	pub fn set_undefined(&mut self, index: usize) {
		self.data[index] = T::default();
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
		if self.is_defined(index) { self.data[index].to_value() } else { Value::Undefined }
	}

	pub fn as_string(&self, index: usize) -> String {
		if self.is_defined(index) { format!("{:?}", self.data[index]) } else { "Undefined".to_string() }
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
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
	/// This is the one vectorized scan every ordering filter reduces to.
	pub fn compare(&self, predicate: impl Fn(T) -> bool) -> BitVec {
		let mut keep = BitVec::with_capacity(self.len());
		for i in 0..self.len() {
			keep.push(self.bitvec.get(i) && predicate(self.data[i]));
		}
		keep
	}
}

impl<T: Number> Default for NumberContainer<T> {
	fn default() -> Self {
		Self::with_capacity(0)
	}
}
