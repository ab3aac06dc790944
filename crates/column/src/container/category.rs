// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashMap,
	fmt::{self, Debug},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tabular_type::{BitVec, Value};

/// Dictionary-coded text column storage. Every distinct string is interned
/// once in `dictionary`; rows store a u32 code into it. Undefined slots hold
/// code 0 and are never read.
#[derive(Clone, Default)]
pub struct CategoryContainer {
	codes: Vec<u32>,
	bitvec: BitVec,
	dictionary: Vec<String>,
	lookup: HashMap<String, u32>,
}

impl Debug for CategoryContainer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CategoryContainer")
			.field("codes", &self.codes)
			.field("bitvec", &self.bitvec)
			.field("dictionary", &self.dictionary)
			.finish()
	}
}

impl PartialEq for CategoryContainer {
	fn eq(&self, other: &Self) -> bool {
		// The lookup map is derived state; codes/dictionary carry identity.
		self.codes == other.codes && self.bitvec == other.bitvec && self.dictionary == other.dictionary
	}
}

impl Serialize for CategoryContainer {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		#[derive(Serialize)]
		struct Helper<'a> {
			codes: &'a Vec<u32>,
			bitvec: &'a BitVec,
			dictionary: &'a Vec<String>,
		}
		Helper { codes: &self.codes, bitvec: &self.bitvec, dictionary: &self.dictionary }
			.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for CategoryContainer {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		struct Helper {
			codes: Vec<u32>,
			bitvec: BitVec,
			dictionary: Vec<String>,
		}
		let h = Helper::deserialize(deserializer)?;
		let lookup = h
			.dictionary
			.iter()
			.enumerate()
			.map(|(code, text)| (text.clone(), code as u32))
			.collect();
		Ok(CategoryContainer { codes: h.codes, bitvec: h.bitvec, dictionary: h.dictionary, lookup })
	}
}

impl CategoryContainer {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			codes: Vec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
			dictionary: Vec::new(),
			lookup: HashMap::new(),
		}
	}

	pub fn from_vec(data: Vec<String>) -> Self {
		let mut container = Self::with_capacity(data.len());
		for value in data {
			container.push(value);
		}
		container
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.codes.len(), self.bitvec.len());
		self.codes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.codes.is_empty()
	}

	/// Number of distinct defined values seen so far.
	pub fn dictionary_size(&self) -> usize {
		self.dictionary.len()
	}

	fn intern(&mut self, value: &str) -> u32 {
		if let Some(&code) = self.lookup.get(value) {
			return code;
		}
		let code = self.dictionary.len() as u32;
		self.dictionary.push(value.to_string());
		self.lookup.insert(value.to_string(), code);
		code
	}

	pub fn push(&mut self, value: impl AsRef<str>) {
		let code = self.intern(value.as_ref());
		self.codes.push(code);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.codes.push(0);
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if self.is_defined(index) {
			Some(self.dictionary[self.codes[index] as usize].as_str())
		} else {
			None
		}
	}

	pub fn code(&self, index: usize) -> Option<u32> {
		if self.is_defined(index) { Some(self.codes[index]) } else { None }
	}

	pub fn set(&mut self, index: usize, value: impl AsRef<str>) {
		let code = self.intern(value.as_ref());
		self.codes[index] = code;
		self.bitvec.set(index, true);
	}

	pub fn set_undefined(&mut self, index: usize) {
		self.codes[index] = 0;
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
		match self.get(index) {
			Some(text) => Value::utf8(text),
			None => Value::Undefined,
		}
	}

	pub fn as_string(&self, index: usize) -> String {
		match self.get(index) {
			Some(text) => text.to_string(),
			None => "Undefined".to_string(),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		(0..self.len()).map(|i| self.get(i))
	}

	pub fn extend(&mut self, other: &Self) {
		for value in other.iter() {
			match value {
				Some(v) => {
					let code = self.intern(v);
					self.codes.push(code);
					self.bitvec.push(true);
				}
				None => self.push_undefined(),
			}
		}
	}

	/// Keep only the rows whose bit is set in `mask`. The dictionary is
	/// retained as-is; stale entries cost memory, not correctness.
	pub fn filter(&mut self, mask: &BitVec) {
		let mut new_codes = Vec::with_capacity(mask.count_ones());
		let mut new_bitvec = BitVec::with_capacity(mask.count_ones());
		for (i, keep) in mask.iter().enumerate() {
			if keep && i < self.len() {
				new_codes.push(self.codes[i]);
				new_bitvec.push(self.bitvec.get(i));
			}
		}
		self.codes = new_codes;
		self.bitvec = new_bitvec;
	}

	/// The bit vector of rows that are defined and satisfy `predicate`.
	/// Evaluates the predicate once per dictionary entry, not once per row.
	pub fn compare(&self, predicate: impl Fn(&str) -> bool) -> BitVec {
		let verdicts: Vec<bool> = self.dictionary.iter().map(|text| predicate(text)).collect();
		let mut keep = BitVec::with_capacity(self.len());
		for i in 0..self.len() {
			keep.push(self.bitvec.get(i) && verdicts[self.codes[i] as usize]);
		}
		keep
	}
}
