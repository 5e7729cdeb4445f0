// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use super::{
	NANOS_PER_SECOND,
	calendar::{Civil, MAX_YEAR, MIN_YEAR},
	fraction_digits,
	timestamp::Timestamp,
};

/// A wall clock date and time without zone, between 1753-01-01 and the end
/// of 9999.
///
/// The fraction is kept in nanoseconds; the literal carries at most seven
/// fraction digits, so a fraction with a sub-100ns remainder is left out of
/// the literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(Timestamp);

impl DateTime {
	pub fn new(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32, nanos: u32) -> Option<Self> {
		let civil = Civil {
			year,
			month,
			day,
			hour,
			minute,
			second,
		};
		Self::from_civil(civil, nanos)
	}

	pub(crate) fn from_civil(civil: Civil, nanos: u32) -> Option<Self> {
		if !(MIN_YEAR..=MAX_YEAR).contains(&civil.year) || nanos >= NANOS_PER_SECOND || !civil.is_valid() {
			return None;
		}
		Timestamp::from_epoch(civil.to_epoch_seconds(), nanos).map(Self)
	}

	/// The wall clock showing `timestamp` read as UTC
	pub(crate) fn from_timestamp(timestamp: Timestamp) -> Option<Self> {
		Self::from_civil(timestamp.civil(), timestamp.nanos())
	}

	pub fn year(&self) -> i64 {
		self.0.year()
	}

	pub fn month(&self) -> u32 {
		self.0.month()
	}

	pub fn day(&self) -> u32 {
		self.0.day()
	}

	pub fn hour(&self) -> u32 {
		self.0.hour()
	}

	pub fn minute(&self) -> u32 {
		self.0.minute()
	}

	pub fn second(&self) -> u32 {
		self.0.second()
	}

	pub fn nanos(&self) -> u32 {
		self.0.nanos()
	}

	/// The wall clock read as if it were UTC
	pub fn as_timestamp(&self) -> Timestamp {
		self.0
	}

	pub(crate) fn civil(&self) -> Civil {
		self.0.civil()
	}

	/// `datetime'YYYY-MM-DDTHH:MM[:SS[.fffffff]]'`, seconds only when they
	/// or the fraction are non-zero
	pub fn to_literal(&self) -> String {
		let c = self.civil();
		let mut result =
			format!("datetime'{:04}-{:02}-{:02}T{:02}:{:02}", c.year, c.month, c.day, c.hour, c.minute);

		let nanos = self.nanos();
		let with_fraction = nanos != 0 && nanos % 100 == 0;
		if with_fraction || c.second != 0 {
			result.push_str(&format!(":{:02}", c.second));
			if with_fraction {
				result.push_str(&format!(".{:07}", nanos / 100));
			}
		}

		result.push('\'');
		result
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let c = self.civil();
		write!(f, "{:04}-{:02}-{:02} {:02}:{:02}:{:02}", c.year, c.month, c.day, c.hour, c.minute, c.second)?;
		if self.nanos() != 0 {
			write!(f, ".{}", fraction_digits(self.nanos()))?;
		}
		Ok(())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_new() {
		let value = DateTime::new(2024, 2, 29, 13, 5, 9, 0).unwrap();
		assert_eq!((value.year(), value.month(), value.day()), (2024, 2, 29));
		assert_eq!((value.hour(), value.minute(), value.second()), (13, 5, 9));
	}

	#[test]
	fn test_new_rejects_invalid() {
		assert!(DateTime::new(2023, 2, 29, 0, 0, 0, 0).is_none());
		assert!(DateTime::new(2024, 4, 31, 0, 0, 0, 0).is_none());
		assert!(DateTime::new(2024, 1, 1, 24, 0, 0, 0).is_none());
		assert!(DateTime::new(2024, 1, 1, 0, 0, 0, 1_000_000_000).is_none());
		assert!(DateTime::new(1752, 12, 31, 23, 59, 59, 0).is_none());
		assert!(DateTime::new(1753, 1, 1, 0, 0, 0, 0).is_some());
	}

	#[test]
	fn test_new_year_upper_bound() {
		let last = DateTime::new(9999, 12, 31, 23, 59, 59, 999_999_900).unwrap();
		assert_eq!(last.to_literal(), "datetime'9999-12-31T23:59:59.9999999'");
		assert!(DateTime::new(10000, 1, 1, 0, 0, 0, 0).is_none());
		assert!(DateTime::new(12345, 1, 1, 0, 0, 0, 0).is_none());
		assert!(DateTime::new(i64::MAX, 1, 1, 0, 0, 0, 0).is_none());
	}

	#[test]
	fn test_from_timestamp() {
		let value = DateTime::from_timestamp(Timestamp::from_epoch(1_710_513_045, 0).unwrap()).unwrap();
		assert_eq!(value.to_literal(), "datetime'2024-03-15T14:30:45'");
		assert!(DateTime::from_timestamp(Timestamp::from_epoch(i64::MAX, 0).unwrap()).is_none());
		assert!(DateTime::from_timestamp(Timestamp::from_epoch(-10_000_000_000, 0).unwrap()).is_none());
	}

	#[test]
	fn test_literal_omits_zero_seconds() {
		let value = DateTime::new(2024, 1, 1, 10, 0, 0, 0).unwrap();
		assert_eq!(value.to_literal(), "datetime'2024-01-01T10:00'");
		let value = DateTime::new(2024, 1, 1, 10, 0, 7, 0).unwrap();
		assert_eq!(value.to_literal(), "datetime'2024-01-01T10:00:07'");
	}

	#[test]
	fn test_literal_fraction() {
		let value = DateTime::new(2024, 1, 1, 10, 0, 0, 500_000_000).unwrap();
		assert_eq!(value.to_literal(), "datetime'2024-01-01T10:00:00.5000000'");
		let value = DateTime::new(2024, 1, 1, 10, 0, 0, 123_456_700).unwrap();
		assert_eq!(value.to_literal(), "datetime'2024-01-01T10:00:00.1234567'");
	}

	#[test]
	fn test_literal_drops_unrepresentable_fraction() {
		let value = DateTime::new(2024, 1, 1, 10, 0, 0, 123_456_789).unwrap();
		assert_eq!(value.to_literal(), "datetime'2024-01-01T10:00'");
		let value = DateTime::new(2024, 1, 1, 10, 0, 3, 50).unwrap();
		assert_eq!(value.to_literal(), "datetime'2024-01-01T10:00:03'");
	}

	#[test]
	fn test_display() {
		let value = DateTime::new(2024, 3, 15, 14, 30, 45, 100_000_000).unwrap();
		assert_eq!(value.to_string(), "2024-03-15 14:30:45.1");
		let value = DateTime::new(2024, 3, 15, 14, 30, 0, 0).unwrap();
		assert_eq!(value.to_string(), "2024-03-15 14:30:00");
	}
}
