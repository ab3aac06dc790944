// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use regex::Regex;
use tabular_type::{Error, Result};

use crate::column::Column;

/// Per-row text transforms. All are direct indexed passes: defined for
/// every row, type-preserving, missing rows propagate.
impl Column {
	pub fn upper_case(&self) -> Result<Column> {
		self.map_text("ucase", |s| Ok(s.to_uppercase()))
	}

	pub fn lower_case(&self) -> Result<Column> {
		self.map_text("lcase", |s| Ok(s.to_lowercase()))
	}

	pub fn trim(&self) -> Result<Column> {
		self.map_text("trim", |s| Ok(s.trim().to_string()))
	}

	/// The characters in `[start, end)` of every value. Bounds beyond a
	/// value's length are an error, never a silent clamp: a clamp here
	/// would mask wrong row-length assumptions upstream.
	pub fn substring(&self, start: usize, end: usize) -> Result<Column> {
		if start > end {
			return Err(Error::invalid_argument(format!(
				"substring start {} is beyond end {}",
				start, end
			)));
		}
		self.map_text("sub", |s| {
			let length = s.chars().count();
			if end > length {
				return Err(Error::invalid_argument(format!(
					"substring end {} is beyond value length {}",
					end, length
				)));
			}
			Ok(s.chars().skip(start).take(end - start).collect())
		})
	}

	/// The characters from `start` to the end of every value.
	pub fn substring_from(&self, start: usize) -> Result<Column> {
		self.map_text("sub", |s| {
			let length = s.chars().count();
			if start > length {
				return Err(Error::invalid_argument(format!(
					"substring start {} is beyond value length {}",
					start, length
				)));
			}
			Ok(s.chars().skip(start).collect())
		})
	}

	/// Ellipsis-truncate values longer than `max_width` characters.
	pub fn abbreviate(&self, max_width: usize) -> Result<Column> {
		if max_width < 4 {
			return Err(Error::invalid_argument(format!(
				"abbreviation width must be at least 4, got {}",
				max_width
			)));
		}
		self.map_text("abbr", |s| {
			if s.chars().count() <= max_width {
				Ok(s.to_string())
			} else {
				let mut truncated: String = s.chars().take(max_width - 3).collect();
				truncated.push_str("...");
				Ok(truncated)
			}
		})
	}

	/// Left-pad values shorter than `min_length` characters with `pad_char`.
	pub fn pad_start(&self, min_length: usize, pad_char: char) -> Result<Column> {
		self.map_text("pad", move |s| {
			let length = s.chars().count();
			let mut padded = String::new();
			for _ in length..min_length {
				padded.push(pad_char);
			}
			padded.push_str(s);
			Ok(padded)
		})
	}

	/// Right-pad values shorter than `min_length` characters with `pad_char`.
	pub fn pad_end(&self, min_length: usize, pad_char: char) -> Result<Column> {
		self.map_text("pad", move |s| {
			let length = s.chars().count();
			let mut padded = s.to_string();
			for _ in length..min_length {
				padded.push(pad_char);
			}
			Ok(padded)
		})
	}

	/// Replace every match of `pattern` with `replacement`.
	pub fn replace_all(&self, pattern: &str, replacement: &str) -> Result<Column> {
		let regex = compile(pattern)?;
		self.map_text("repl", move |s| Ok(regex.replace_all(s, replacement).into_owned()))
	}

	/// Replace the first match of `pattern` with `replacement`.
	pub fn replace_first(&self, pattern: &str, replacement: &str) -> Result<Column> {
		let regex = compile(pattern)?;
		self.map_text("repl", move |s| Ok(regex.replace(s, replacement).into_owned()))
	}
}

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|err| Error::invalid_argument(format!("invalid pattern: {}", err)))
}
