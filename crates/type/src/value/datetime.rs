// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// A date and time value with millisecond precision, always interpreted in
/// UTC.
///
/// Internally stored as milliseconds since Unix epoch (1970-01-01T00:00:00Z);
/// negative values represent instants before 1970.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateTime {
	millis_since_epoch: i64,
}

// Calendar utilities
impl DateTime {
	#[inline]
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	/// Convert year/month/day to days since Unix epoch. Returns `None` for
	/// an invalid calendar date.
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i64> {
		if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}
		// Civil-from-days inverse (Howard Hinnant's algorithm).
		let y = i64::from(year) - i64::from(month <= 2);
		let era = if y >= 0 { y } else { y - 399 } / 400;
		let yoe = y - era * 400;
		let mp = (i64::from(month) + 9) % 12;
		let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
		Some(era * 146_097 + doe - 719_468)
	}

	fn days_since_epoch_to_ymd(days: i64) -> (i32, u32, u32) {
		let z = days + 719_468;
		let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
		let doe = z - era * 146_097;
		let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
		let mp = (5 * doy + 2) / 153;
		let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
		let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
		let year = (y + i64::from(month <= 2)) as i32;
		(year, month, day)
	}
}

impl DateTime {
	pub fn from_millis(millis_since_epoch: i64) -> Self {
		Self { millis_since_epoch }
	}

	pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 {
			return None;
		}
		let days = Self::ymd_to_days_since_epoch(year, month, day)?;
		let millis = days * MILLIS_PER_DAY
			+ i64::from(hour) * MILLIS_PER_HOUR
			+ i64::from(minute) * MILLIS_PER_MINUTE
			+ i64::from(second) * MILLIS_PER_SECOND;
		Some(Self { millis_since_epoch: millis })
	}

	pub fn millis(&self) -> i64 {
		self.millis_since_epoch
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let days = self.millis_since_epoch.div_euclid(MILLIS_PER_DAY);
		let of_day = self.millis_since_epoch.rem_euclid(MILLIS_PER_DAY);
		let (year, month, day) = Self::days_since_epoch_to_ymd(days);
		let hour = of_day / MILLIS_PER_HOUR;
		let minute = of_day % MILLIS_PER_HOUR / MILLIS_PER_MINUTE;
		let second = of_day % MILLIS_PER_MINUTE / MILLIS_PER_SECOND;
		let milli = of_day % MILLIS_PER_SECOND;
		write!(
			f,
			"{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
			year, month, day, hour, minute, second, milli
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_epoch() {
		let dt = DateTime::from_millis(0);
		assert_eq!(dt.to_string(), "1970-01-01T00:00:00.000Z");
	}

	#[test]
	fn test_from_ymd_hms_roundtrips_through_display() {
		let dt = DateTime::from_ymd_hms(2024, 2, 29, 13, 45, 9).unwrap();
		assert_eq!(dt.to_string(), "2024-02-29T13:45:09.000Z");
	}

	#[test]
	fn test_rejects_invalid_dates() {
		assert!(DateTime::from_ymd_hms(2023, 2, 29, 0, 0, 0).is_none());
		assert!(DateTime::from_ymd_hms(2023, 13, 1, 0, 0, 0).is_none());
		assert!(DateTime::from_ymd_hms(2023, 6, 1, 24, 0, 0).is_none());
	}

	#[test]
	fn test_before_epoch() {
		let dt = DateTime::from_ymd_hms(1969, 12, 31, 23, 59, 59).unwrap();
		assert!(dt.millis() < 0);
		assert_eq!(dt.to_string(), "1969-12-31T23:59:59.000Z");
	}

	#[test]
	fn test_ordering_follows_instants() {
		let earlier = DateTime::from_ymd_hms(2020, 1, 1, 0, 0, 0).unwrap();
		let later = DateTime::from_ymd_hms(2020, 1, 1, 0, 0, 1).unwrap();
		assert!(earlier < later);
	}

	#[test]
	fn test_serde_roundtrip() {
		let dt = DateTime::from_ymd_hms(2025, 8, 29, 10, 30, 0).unwrap();
		let json = serde_json::to_string(&dt).unwrap();
		let recovered: DateTime = serde_json::from_str(&json).unwrap();
		assert_eq!(recovered, dt);
	}
}
