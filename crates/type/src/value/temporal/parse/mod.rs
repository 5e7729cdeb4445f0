// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod datetime;
mod offset;
mod time;

pub use datetime::parse_datetime;
pub use offset::parse_datetime_offset;
pub use time::parse_time;

use super::calendar::{Civil, Field, MIN_YEAR};
use crate::{
	Result,
	error::{SemanticKind, TypeError},
	fragment::Fragment,
	util::Scanner,
	value::Type,
};

/// Wall clock fields as written, `YYYY-MM-DDTHH:MM[:SS[.f]]`
struct WallClock<'a> {
	/// Byte offset of the year within the literal
	start: usize,
	civil: Civil,
	has_seconds: bool,
	fraction: Option<&'a str>,
}

fn number(digits: &str) -> u32 {
	digits.bytes().fold(0, |acc, b| acc * 10 + (b - b'0') as u32)
}

/// Scans the wall clock starting at the scanner's position. The fraction
/// is any run of digits; callers restrict its length.
fn scan_wall_clock<'a>(scanner: &mut Scanner<'a>) -> Option<WallClock<'a>> {
	let start = scanner.position();

	let year = scanner.digits_exact(4)?;
	scanner.eat("-").then_some(())?;
	let month = scanner.digits_exact(2)?;
	scanner.eat("-").then_some(())?;
	let day = scanner.digits_exact(2)?;
	scanner.eat("T").then_some(())?;
	let hour = scanner.digits_exact(2)?;
	scanner.eat(":").then_some(())?;
	let minute = scanner.digits_exact(2)?;

	let mut second = "0";
	let mut has_seconds = false;
	let mut fraction = None;
	if scanner.eat(":") {
		second = scanner.digits_exact(2)?;
		has_seconds = true;
		if scanner.eat(".") {
			let digits = scanner.digits();
			if digits.is_empty() {
				return None;
			}
			fraction = Some(digits);
		}
	}

	Some(WallClock {
		start,
		civil: Civil {
			year: number(year) as i64,
			month: number(month),
			day: number(day),
			hour: number(hour),
			minute: number(minute),
			second: number(second),
		},
		has_seconds,
		fraction,
	})
}

/// Year at or after 1753 and every field unchanged by the calendar
fn validate_wall_clock(ty: Type, literal: &str, clock: &WallClock<'_>) -> Result<()> {
	let fragment = Fragment::literal(literal);

	if clock.civil.year < MIN_YEAR {
		return Err(TypeError::semantic(
			ty,
			SemanticKind::YearBeforeMinimum,
			format!("year {} is before {}", clock.civil.year, MIN_YEAR),
			fragment.sub_fragment(clock.start, 4),
		)
		.into());
	}

	if let Some(field) = clock.civil.normalized_field() {
		let (offset, name) = match field {
			Field::Year => (0, "year"),
			Field::Month => (5, "month"),
			Field::Day => (8, "day"),
			Field::Hour => (11, "hour"),
			Field::Minute => (14, "minute"),
			Field::Second => (17, "second"),
		};
		let len = if field == Field::Year {
			4
		} else {
			2
		};
		let sub = fragment.sub_fragment(clock.start + offset, len);
		return Err(TypeError::semantic(
			ty,
			SemanticKind::InvalidCalendarDate,
			format!("invalid {} '{}' for {:04}-{:02}", name, sub.text(), clock.civil.year, clock.civil.month),
			sub,
		)
		.into());
	}

	Ok(())
}
