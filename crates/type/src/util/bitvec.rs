// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

const WORD_BITS: usize = 64;

/// A fixed-width bit vector backed by 64-bit words.
///
/// Invariant: bits at positions `len..` of the last word are always zero, so
/// word-level boolean combination and popcount need no per-bit masking.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVec {
	words: Vec<u64>,
	len: usize,
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BitVec").field("len", &self.len).field("ones", &self.count_ones()).finish()
	}
}

fn words_for(len: usize) -> usize {
	len.div_ceil(WORD_BITS)
}

impl BitVec {
	pub fn new(len: usize, value: bool) -> Self {
		let mut bv = Self { words: vec![if value { u64::MAX } else { 0 }; words_for(len)], len };
		bv.mask_tail();
		bv
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		Self::new(len, value)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self { words: Vec::with_capacity(words_for(capacity)), len: 0 }
	}

	pub fn from_slice(bits: &[bool]) -> Self {
		let mut bv = Self::with_capacity(bits.len());
		for &bit in bits {
			bv.push(bit);
		}
		bv
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.words.capacity() * WORD_BITS
	}

	pub fn get(&self, index: usize) -> bool {
		assert!(index < self.len, "bit index {} out of range for BitVec of length {}", index, self.len);
		self.words[index / WORD_BITS] >> (index % WORD_BITS) & 1 == 1
	}

	pub fn set(&mut self, index: usize, value: bool) {
		assert!(index < self.len, "bit index {} out of range for BitVec of length {}", index, self.len);
		let word = &mut self.words[index / WORD_BITS];
		let mask = 1u64 << (index % WORD_BITS);
		if value {
			*word |= mask;
		} else {
			*word &= !mask;
		}
	}

	pub fn push(&mut self, value: bool) {
		if self.len % WORD_BITS == 0 {
			self.words.push(0);
		}
		self.len += 1;
		if value {
			let index = self.len - 1;
			self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
		}
	}

	pub fn clear(&mut self) {
		self.words.clear();
		self.len = 0;
	}

	pub fn count_ones(&self) -> usize {
		self.words.iter().map(|w| w.count_ones() as usize).sum()
	}

	/// Set every bit in `[start, end)`.
	pub fn set_range(&mut self, start: usize, end: usize) {
		assert!(start <= end && end <= self.len);
		for index in start..end {
			self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
		}
	}

	/// Word-level intersection. Both operands must have the same length.
	pub fn and(&self, other: &Self) -> Self {
		assert_eq!(self.len, other.len);
		Self {
			words: self.words.iter().zip(&other.words).map(|(a, b)| a & b).collect(),
			len: self.len,
		}
	}

	/// Word-level union. Both operands must have the same length.
	pub fn or(&self, other: &Self) -> Self {
		assert_eq!(self.len, other.len);
		Self {
			words: self.words.iter().zip(&other.words).map(|(a, b)| a | b).collect(),
			len: self.len,
		}
	}

	/// Word-level difference: bits set in `self` and not in `other`.
	pub fn and_not(&self, other: &Self) -> Self {
		assert_eq!(self.len, other.len);
		Self {
			words: self.words.iter().zip(&other.words).map(|(a, b)| a & !b).collect(),
			len: self.len,
		}
	}

	/// Word-level complement over the vector's own length.
	pub fn not(&self) -> Self {
		let mut result = Self { words: self.words.iter().map(|w| !w).collect(), len: self.len };
		result.mask_tail();
		result
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter { bitvec: self, index: 0 }
	}

	/// Iterate the indices of set bits in ascending order.
	pub fn iter_ones(&self) -> SetBitIter<'_> {
		SetBitIter { words: &self.words, word_index: 0, current: self.words.first().copied().unwrap_or(0) }
	}

	fn mask_tail(&mut self) {
		let tail = self.len % WORD_BITS;
		if tail != 0 {
			if let Some(last) = self.words.last_mut() {
				*last &= (1u64 << tail) - 1;
			}
		} else if self.len == 0 {
			self.words.clear();
		}
	}
}

pub struct BitVecIter<'a> {
	bitvec: &'a BitVec,
	index: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<Self::Item> {
		if self.index >= self.bitvec.len {
			return None;
		}
		let bit = self.bitvec.get(self.index);
		self.index += 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.bitvec.len - self.index;
		(remaining, Some(remaining))
	}
}

/// Ascending iterator over the indices of set bits, one word at a time.
pub struct SetBitIter<'a> {
	words: &'a [u64],
	word_index: usize,
	current: u64,
}

impl Iterator for SetBitIter<'_> {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		while self.current == 0 {
			self.word_index += 1;
			if self.word_index >= self.words.len() {
				return None;
			}
			self.current = self.words[self.word_index];
		}
		let bit = self.current.trailing_zeros() as usize;
		self.current &= self.current - 1;
		Some(self.word_index * WORD_BITS + bit)
	}
}
