// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod bool;
mod category;
mod number;
mod temporal;
mod utf8;

pub use bool::BoolContainer;
pub use category::CategoryContainer;
pub use number::{Number, NumberContainer};
pub use temporal::TemporalContainer;
pub use utf8::Utf8Container;
