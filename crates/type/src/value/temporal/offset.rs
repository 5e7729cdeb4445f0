// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use super::{calendar::Civil, datetime::DateTime, fraction_digits, timestamp::Timestamp};

/// Signed distance of a local wall clock from UTC, at most 23:59 either way
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtcOffset {
	minutes: i16,
}

impl UtcOffset {
	pub const UTC: UtcOffset = UtcOffset {
		minutes: 0,
	};

	pub fn new(negative: bool, hours: u8, minutes: u8) -> Option<Self> {
		if hours > 23 || minutes > 59 {
			return None;
		}
		let total = hours as i16 * 60 + minutes as i16;
		Some(Self {
			minutes: if negative {
				-total
			} else {
				total
			},
		})
	}

	pub fn total_minutes(&self) -> i16 {
		self.minutes
	}

	pub fn is_utc(&self) -> bool {
		self.minutes == 0
	}

	fn seconds(&self) -> i64 {
		self.minutes as i64 * 60
	}
}

/// `+HH:MM` or `-HH:MM`
impl Display for UtcOffset {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let sign = if self.minutes < 0 {
			'-'
		} else {
			'+'
		};
		let abs = self.minutes.unsigned_abs();
		write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
	}
}

/// An instant together with the offset it was written in. The instant is
/// held in UTC; the offset only decides how the wall clock is shown. The wall
/// clock in that offset is always a valid [`DateTime`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateTimeOffset {
	utc: Timestamp,
	local: DateTime,
	offset: UtcOffset,
}

impl DateTimeOffset {
	/// The instant at which the wall clock in `offset` reads `local`
	pub fn new(local: DateTime, offset: UtcOffset) -> Self {
		Self {
			utc: local.as_timestamp().saturating_add_seconds(-offset.seconds()),
			local,
			offset,
		}
	}

	/// `utc` shown in `offset`, `None` when that wall clock falls outside
	/// the years a [`DateTime`] covers
	pub fn from_utc(utc: Timestamp, offset: UtcOffset) -> Option<Self> {
		let local = DateTime::from_timestamp(utc.checked_add_seconds(offset.seconds())?)?;
		Some(Self {
			utc,
			local,
			offset,
		})
	}

	/// Same instant, shown in another offset
	pub fn with_offset(&self, offset: UtcOffset) -> Option<Self> {
		Self::from_utc(self.utc, offset)
	}

	pub fn utc(&self) -> Timestamp {
		self.utc
	}

	pub fn offset(&self) -> UtcOffset {
		self.offset
	}

	/// Wall clock reading in the stored offset
	pub fn local(&self) -> DateTime {
		self.local
	}

	fn write_wall_clock(&self, f: &mut Formatter<'_>, separator: char) -> std::fmt::Result {
		let local = self.local;
		let c: Civil = local.civil();
		write!(
			f,
			"{:04}-{:02}-{:02}{}{:02}:{:02}:{:02}",
			c.year, c.month, c.day, separator, c.hour, c.minute, c.second
		)?;
		if local.nanos() != 0 {
			write!(f, ".{}", fraction_digits(local.nanos()))?;
		}
		Ok(())
	}

	/// `datetimeoffset'YYYY-MM-DDTHH:MM:SS[.f](Z|±HH:MM)'`
	pub fn to_literal(&self) -> String {
		format!("datetimeoffset'{}'", LiteralForm(self))
	}
}

struct LiteralForm<'a>(&'a DateTimeOffset);

impl Display for LiteralForm<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		self.0.write_wall_clock(f, 'T')?;
		if self.0.offset.is_utc() {
			f.write_str("Z")
		} else {
			write!(f, "{}", self.0.offset)
		}
	}
}

impl Display for DateTimeOffset {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		self.write_wall_clock(f, ' ')?;
		write!(f, " {}", self.offset)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	fn local(hour: u32) -> DateTime {
		DateTime::new(2024, 1, 1, hour, 0, 0, 0).unwrap()
	}

	#[test]
	fn test_offset_bounds() {
		assert!(UtcOffset::new(false, 23, 59).is_some());
		assert!(UtcOffset::new(false, 24, 0).is_none());
		assert!(UtcOffset::new(true, 0, 60).is_none());
		assert_eq!(UtcOffset::new(true, 0, 0), Some(UtcOffset::UTC));
	}

	#[test]
	fn test_offset_display() {
		assert_eq!(UtcOffset::new(false, 2, 0).unwrap().to_string(), "+02:00");
		assert_eq!(UtcOffset::new(true, 5, 30).unwrap().to_string(), "-05:30");
		assert_eq!(UtcOffset::UTC.to_string(), "+00:00");
	}

	#[test]
	fn test_stored_as_utc() {
		let value = DateTimeOffset::new(local(0), UtcOffset::new(false, 2, 0).unwrap());
		assert_eq!(value.utc().to_string(), "2023-12-31T22:00:00Z");
		assert_eq!(value.to_literal(), "datetimeoffset'2024-01-01T00:00:00+02:00'");
	}

	#[test]
	fn test_negative_offset() {
		let value = DateTimeOffset::new(local(20), UtcOffset::new(true, 5, 30).unwrap());
		assert_eq!(value.utc().to_string(), "2024-01-02T01:30:00Z");
		assert_eq!(value.to_literal(), "datetimeoffset'2024-01-01T20:00:00-05:30'");
	}

	#[test]
	fn test_with_offset_keeps_instant() {
		let value = DateTimeOffset::new(local(12), UtcOffset::new(false, 2, 0).unwrap());
		let moved = value.with_offset(UtcOffset::UTC).unwrap();
		assert_eq!(moved.utc(), value.utc());
		assert_eq!(moved.local().hour(), 10);
		assert_eq!(moved.to_literal(), "datetimeoffset'2024-01-01T10:00:00Z'");
		assert_ne!(moved, value);
	}

	#[test]
	fn test_display() {
		let value = DateTimeOffset::new(
			DateTime::new(2024, 3, 15, 14, 30, 45, 500_000_000).unwrap(),
			UtcOffset::new(true, 8, 0).unwrap(),
		);
		assert_eq!(value.to_string(), "2024-03-15 14:30:45.5 -08:00");
		assert_eq!(value.to_literal(), "datetimeoffset'2024-03-15T14:30:45.5-08:00'");
	}

	#[test]
	fn test_from_utc() {
		let utc = Timestamp::from_epoch(1_704_067_200, 0).unwrap();
		let value = DateTimeOffset::from_utc(utc, UtcOffset::new(true, 5, 0).unwrap()).unwrap();
		assert_eq!(value.to_literal(), "datetimeoffset'2023-12-31T19:00:00-05:00'");
		assert_eq!(value, DateTimeOffset::new(DateTime::new(2023, 12, 31, 19, 0, 0, 0).unwrap(), value.offset()));
	}

	#[test]
	fn test_from_utc_out_of_range() {
		let before = Timestamp::from_epoch(-10_000_000_000, 0).unwrap();
		assert!(DateTimeOffset::from_utc(before, UtcOffset::UTC).is_none());

		let far = Timestamp::from_epoch(i64::MAX, 0).unwrap();
		assert!(DateTimeOffset::from_utc(far, UtcOffset::new(false, 1, 0).unwrap()).is_none());
	}

	#[test]
	fn test_with_offset_past_last_year() {
		let local = DateTime::new(9999, 12, 31, 23, 0, 0, 0).unwrap();
		let value = DateTimeOffset::new(local, UtcOffset::UTC);
		assert!(value.with_offset(UtcOffset::new(false, 2, 0).unwrap()).is_none());
		assert!(value.with_offset(UtcOffset::new(true, 2, 0).unwrap()).is_some());
	}
}
