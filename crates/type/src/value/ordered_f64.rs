// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A totally ordered f64. NaN is rejected at construction, which makes
/// `Eq`/`Ord`/`Hash` sound and lets float values participate in comparisons
/// and dictionary keys without special cases.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn value(&self) -> f64 {
		self.0
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = f64;

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		if value.is_nan() { Err(value) } else { Ok(Self(value)) }
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Serialize for OrderedF64 {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_f64(self.0)
	}
}

impl<'de> Deserialize<'de> for OrderedF64 {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = f64::deserialize(deserializer)?;
		OrderedF64::try_from(raw).map_err(|_| de::Error::custom("NaN is not an ordered float"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rejects_nan() {
		assert!(OrderedF64::try_from(f64::NAN).is_err());
		assert!(OrderedF64::try_from(1.5).is_ok());
	}

	#[test]
	fn test_total_order() {
		let a = OrderedF64::try_from(-1.0).unwrap();
		let b = OrderedF64::try_from(0.0).unwrap();
		let c = OrderedF64::try_from(42.5).unwrap();
		assert!(a < b && b < c);
		assert_eq!(b.cmp(&b), Ordering::Equal);
	}

	#[test]
	fn test_serde_roundtrip() {
		let v = OrderedF64::try_from(3.25).unwrap();
		let json = serde_json::to_string(&v).unwrap();
		assert_eq!(json, "3.25");
		let recovered: OrderedF64 = serde_json::from_str(&json).unwrap();
		assert_eq!(recovered, v);
	}
}
