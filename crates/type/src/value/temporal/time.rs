// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use super::{NANOS_PER_SECOND, fraction_digits};

/// A time of day as a duration from midnight, up to and including 24:00
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
	hours: u8,
	minutes: u8,
	seconds: u8,
	nanos: u32,
}

impl Time {
	pub const MIDNIGHT: Time = Time {
		hours: 0,
		minutes: 0,
		seconds: 0,
		nanos: 0,
	};

	/// Hours up to 24, minutes and seconds below 60; at 24 hours everything
	/// else must be zero
	pub fn new(hours: u8, minutes: u8, seconds: u8, nanos: u32) -> Option<Self> {
		let valid = hours <= 24
			&& minutes < 60
			&& seconds < 60
			&& nanos < NANOS_PER_SECOND
			&& (hours < 24 || (minutes == 0 && seconds == 0 && nanos == 0));
		valid.then_some(Self {
			hours,
			minutes,
			seconds,
			nanos,
		})
	}

	pub fn hours(&self) -> u8 {
		self.hours
	}

	pub fn minutes(&self) -> u8 {
		self.minutes
	}

	pub fn seconds(&self) -> u8 {
		self.seconds
	}

	pub fn nanos(&self) -> u32 {
		self.nanos
	}

	pub fn is_zero(&self) -> bool {
		*self == Self::MIDNIGHT
	}

	/// `time'PT[hH][mM][s[.f]S]'` leaving out zero components; all zero
	/// gives the empty string
	pub fn to_literal(&self) -> String {
		if self.is_zero() {
			return String::new();
		}

		let mut result = String::from("time'PT");
		if self.hours != 0 {
			result.push_str(&format!("{}H", self.hours));
		}
		if self.minutes != 0 {
			result.push_str(&format!("{}M", self.minutes));
		}
		if self.seconds != 0 || self.nanos != 0 {
			result.push_str(&self.seconds.to_string());
			if self.nanos != 0 {
				result.push('.');
				result.push_str(&fraction_digits(self.nanos));
			}
			result.push('S');
		}
		result.push('\'');
		result
	}
}

impl Display for Time {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)?;
		if self.nanos != 0 {
			write!(f, ".{}", fraction_digits(self.nanos))?;
		}
		Ok(())
	}
}
