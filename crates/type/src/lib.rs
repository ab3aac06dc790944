// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod util;
pub mod value;

pub use error::{Error, Result};
pub use util::{BitVec, BitVecIter, SetBitIter};
pub use value::{DateTime, OrderedF64, Type, Value};
