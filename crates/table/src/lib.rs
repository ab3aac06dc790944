// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod filter;
pub mod iterator;
pub mod table;

pub use filter::{ColumnReference, Filter, column};
pub use iterator::{RowRef, TableIter, ValueRef};
pub use table::Table;
