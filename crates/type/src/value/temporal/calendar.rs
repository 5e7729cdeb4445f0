// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Proleptic Gregorian calendar arithmetic on seconds since 1970-01-01.
//!
//! Conversions into seconds normalize out-of-range fields the way a calendar
//! engine does (day 32 of January is February 1st), so a date is valid when
//! converting it back reproduces every field.

pub const MIN_YEAR: i64 = 1753;
/// Last year a four-digit literal can carry
pub const MAX_YEAR: i64 = 9999;

const SECONDS_PER_DAY: i64 = 86_400;

/// Days since 1970-01-01 for a proleptic Gregorian date. `month` and `day`
/// may lie outside their usual ranges and are carried over.
pub fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
	let year = year + (month - 1).div_euclid(12);
	let month = (month - 1).rem_euclid(12) + 1;

	// Algorithm based on Howard Hinnant's date algorithms
	// Convert month from [1,12] to [0,11] where Mar=0
	let (y, m) = if month <= 2 {
		(year - 1, month + 9)
	} else {
		(year, month - 3)
	};

	let era = y.div_euclid(400);
	let yoe = y - era * 400; // [0, 399]
	let doy = (153 * m + 2) / 5; // [0, 365], first of the month
	let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
	era * 146097 + doe - 719468 + (day - 1)
}

/// Year, month and day of a count of days since 1970-01-01
pub fn civil_from_days(days: i64) -> (i64, u32, u32) {
	let days_since_ce = days + 719468;

	let era = days_since_ce.div_euclid(146097);
	let doe = days_since_ce - era * 146097; // [0, 146096]
	let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
	let y = yoe + era * 400;
	let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
	let mp = (5 * doy + 2) / 153; // [0, 11]
	let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
	let m = if mp < 10 {
		mp + 3
	} else {
		mp - 9
	}; // [1, 12]
	let year = if m <= 2 {
		y + 1
	} else {
		y
	};

	(year, m as u32, d as u32)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	Year,
	Month,
	Day,
	Hour,
	Minute,
	Second,
}

/// Broken-down wall clock fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Civil {
	pub year: i64,
	pub month: u32,
	pub day: u32,
	pub hour: u32,
	pub minute: u32,
	pub second: u32,
}

impl Civil {
	pub fn from_epoch_seconds(seconds: i64) -> Self {
		let days = seconds.div_euclid(SECONDS_PER_DAY);
		let of_day = seconds.rem_euclid(SECONDS_PER_DAY);
		let (year, month, day) = civil_from_days(days);
		Self {
			year,
			month,
			day,
			hour: (of_day / 3600) as u32,
			minute: (of_day % 3600 / 60) as u32,
			second: (of_day % 60) as u32,
		}
	}

	/// Seconds since 1970-01-01T00:00:00, carrying over out-of-range fields
	pub fn to_epoch_seconds(&self) -> i64 {
		days_from_civil(self.year, self.month as i64, self.day as i64) * SECONDS_PER_DAY
			+ self.hour as i64 * 3600
			+ self.minute as i64 * 60
			+ self.second as i64
	}

	/// The most specific field the calendar had to carry over, `None` when
	/// the fields name an existing instant
	pub fn normalized_field(&self) -> Option<Field> {
		let normalized = Self::from_epoch_seconds(self.to_epoch_seconds());
		[
			(Field::Second, self.second == normalized.second),
			(Field::Minute, self.minute == normalized.minute),
			(Field::Hour, self.hour == normalized.hour),
			(Field::Day, self.day == normalized.day),
			(Field::Month, self.month == normalized.month),
			(Field::Year, self.year == normalized.year),
		]
		.into_iter()
		.find(|(_, same)| !same)
		.map(|(field, _)| field)
	}

	pub fn is_valid(&self) -> bool {
		self.normalized_field().is_none()
	}
}
