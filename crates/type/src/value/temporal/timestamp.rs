// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use super::{NANOS_PER_SECOND, calendar::Civil, fraction_digits};

/// An instant as seconds and nanoseconds since 1970-01-01T00:00:00Z
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
	seconds: i64,
	nanos: u32,
}

impl Timestamp {
	pub const UNIX_EPOCH: Timestamp = Timestamp {
		seconds: 0,
		nanos: 0,
	};

	pub fn from_epoch(seconds: i64, nanos: u32) -> Option<Self> {
		(nanos < NANOS_PER_SECOND).then_some(Self {
			seconds,
			nanos,
		})
	}

	pub fn epoch_seconds(&self) -> i64 {
		self.seconds
	}

	pub fn nanos(&self) -> u32 {
		self.nanos
	}

	pub fn year(&self) -> i64 {
		self.civil().year
	}

	pub fn month(&self) -> u32 {
		self.civil().month
	}

	pub fn day(&self) -> u32 {
		self.civil().day
	}

	pub fn hour(&self) -> u32 {
		self.civil().hour
	}

	pub fn minute(&self) -> u32 {
		self.civil().minute
	}

	pub fn second(&self) -> u32 {
		self.civil().second
	}

	pub(crate) fn civil(&self) -> Civil {
		Civil::from_epoch_seconds(self.seconds)
	}

	/// Exact for every wall clock in the literal year range
	pub(crate) fn saturating_add_seconds(&self, seconds: i64) -> Self {
		Self {
			seconds: self.seconds.saturating_add(seconds),
			nanos: self.nanos,
		}
	}

	pub(crate) fn checked_add_seconds(&self, seconds: i64) -> Option<Self> {
		Some(Self {
			seconds: self.seconds.checked_add(seconds)?,
			nanos: self.nanos,
		})
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let c = self.civil();
		write!(f, "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}", c.year, c.month, c.day, c.hour, c.minute, c.second)?;
		if self.nanos != 0 {
			write!(f, ".{}", fraction_digits(self.nanos))?;
		}
		f.write_str("Z")
	}
}
