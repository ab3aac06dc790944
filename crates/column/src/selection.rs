// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};
use tabular_type::{BitVec, Error, Result, util::SetBitIter};

/// A set of row indices over a fixed universe `[0, universe)`, backed by a
/// bit vector. This is the output contract of every filter: memory stays
/// `universe / 8` bytes regardless of selectivity, membership is O(1) and
/// boolean combination is word-parallel.
///
/// All combinators have value semantics: operands are never mutated and the
/// result never aliases either input.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
	bits: BitVec,
}

impl Debug for Selection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Selection")
			.field("universe", &self.universe())
			.field("size", &self.size())
			.finish()
	}
}

impl Selection {
	pub fn empty(universe: usize) -> Self {
		Self { bits: BitVec::new(universe, false) }
	}

	pub fn full(universe: usize) -> Self {
		Self { bits: BitVec::new(universe, true) }
	}

	/// Wrap a row mask produced by a vectorized column comparison.
	pub fn from_mask(bits: BitVec) -> Self {
		Self { bits }
	}

	pub fn from_slice(universe: usize, indices: &[usize]) -> Result<Self> {
		let mut selection = Self::empty(universe);
		for &index in indices {
			selection.add(index)?;
		}
		Ok(selection)
	}

	/// Number of rows in the universe this selection ranges over.
	pub fn universe(&self) -> usize {
		self.bits.len()
	}

	/// Number of selected rows.
	pub fn size(&self) -> usize {
		self.bits.count_ones()
	}

	pub fn is_empty(&self) -> bool {
		self.size() == 0
	}

	pub fn contains(&self, index: usize) -> bool {
		index < self.universe() && self.bits.get(index)
	}

	/// Insert a row index; a no-op when already present.
	pub fn add(&mut self, index: usize) -> Result<()> {
		if index >= self.universe() {
			return Err(Error::invalid_argument(format!(
				"row index {} out of range for universe of {} rows",
				index,
				self.universe()
			)));
		}
		self.bits.set(index, true);
		Ok(())
	}

	/// Insert every row index in `[start, end)`.
	pub fn add_range(&mut self, start: usize, end: usize) -> Result<()> {
		if start > end || end > self.universe() {
			return Err(Error::invalid_argument(format!(
				"range {}..{} out of range for universe of {} rows",
				start,
				end,
				self.universe()
			)));
		}
		self.bits.set_range(start, end);
		Ok(())
	}

	fn check_universe(&self, other: &Self) -> Result<()> {
		if self.universe() != other.universe() {
			return Err(Error::incompatible_universe(self.universe(), other.universe()));
		}
		Ok(())
	}

	/// Rows selected by both.
	pub fn and(&self, other: &Self) -> Result<Self> {
		self.check_universe(other)?;
		Ok(Self { bits: self.bits.and(&other.bits) })
	}

	/// Rows selected by either.
	pub fn or(&self, other: &Self) -> Result<Self> {
		self.check_universe(other)?;
		Ok(Self { bits: self.bits.or(&other.bits) })
	}

	/// Rows selected by `self` but not by `other`.
	pub fn and_not(&self, other: &Self) -> Result<Self> {
		self.check_universe(other)?;
		Ok(Self { bits: self.bits.and_not(&other.bits) })
	}

	/// Complement over the universe.
	pub fn not(&self) -> Self {
		Self { bits: self.bits.not() }
	}

	/// The underlying row mask, one bit per row of the universe.
	pub fn mask(&self) -> &BitVec {
		&self.bits
	}

	/// Iterate selected row indices in ascending order. A fresh call always
	/// restarts at the smallest selected index.
	pub fn iter(&self) -> SelectionIter<'_> {
		SelectionIter { inner: self.bits.iter_ones() }
	}
}

pub struct SelectionIter<'a> {
	inner: SetBitIter<'a>,
}

impl Iterator for SelectionIter<'_> {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
}

impl<'a> IntoIterator for &'a Selection {
	type Item = usize;
	type IntoIter = SelectionIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
