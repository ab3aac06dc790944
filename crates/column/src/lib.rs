// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod column;
mod compare;
pub mod container;
pub mod cursor;
pub mod data;
pub mod map;
pub mod selection;

pub use column::Column;
pub use container::{
	BoolContainer, CategoryContainer, Number, NumberContainer, TemporalContainer, Utf8Container,
};
pub use cursor::TextScan;
pub use data::ColumnData;
pub use selection::{Selection, SelectionIter};
