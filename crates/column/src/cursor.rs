// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabular_type::{Error, Result};

use crate::{
	container::{CategoryContainer, Utf8Container},
	data::ColumnData,
};

enum TextScanSource<'a> {
	Utf8(&'a Utf8Container),
	Category(&'a CategoryContainer),
}

/// A caller-owned, forward-only cursor over a text column.
///
/// The scan position lives in the cursor, not in the column, so two
/// independent scans of the same column can coexist and a leaked scan can
/// never poison the next consumer. `reset` returns the cursor to the start;
/// a subsequent pass revisits every row exactly once, in original order.
pub struct TextScan<'a> {
	source: TextScanSource<'a>,
	position: usize,
}

impl<'a> TextScan<'a> {
	fn len(&self) -> usize {
		match &self.source {
			TextScanSource::Utf8(container) => container.len(),
			TextScanSource::Category(container) => container.len(),
		}
	}

	pub fn has_next(&self) -> bool {
		self.position < self.len()
	}

	/// Advance one row. The outer `Option` signals exhaustion; the inner
	/// one is the row's definedness (`None` for a missing row).
	#[allow(clippy::should_implement_trait)]
	pub fn next(&mut self) -> Option<Option<&'a str>> {
		if !self.has_next() {
			return None;
		}
		let row = self.position;
		self.position += 1;
		let value = match &self.source {
			TextScanSource::Utf8(container) => container.get(row),
			TextScanSource::Category(container) => container.get(row),
		};
		Some(value)
	}

	pub fn reset(&mut self) {
		self.position = 0;
	}
}

impl ColumnData {
	/// Begin a sequential scan over a text column.
	pub fn text_scan(&self) -> Result<TextScan<'_>> {
		let source = match self {
			ColumnData::Utf8(container) => TextScanSource::Utf8(container),
			ColumnData::Category(container) => TextScanSource::Category(container),
			other => {
				return Err(Error::invalid_argument(format!(
					"sequential text scan is not supported for {} columns",
					other.get_type()
				)));
			}
		};
		Ok(TextScan { source, position: 0 })
	}

	pub fn supports_text_scan(&self) -> bool {
		self.get_type().is_text()
	}
}
