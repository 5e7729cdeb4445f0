// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{scan_wall_clock, validate_wall_clock};
use crate::{
	Result,
	error::TypeError,
	util::Scanner,
	value::{
		Type,
		temporal::{DateTime, nanos_from_digits},
	},
};

/// `datetime'YYYY-MM-DDTHH:MM[:SS[.d{1,7}]]'`
pub fn parse_datetime(literal: &str) -> Result<DateTime> {
	let grammar = || crate::Error::from(TypeError::grammar(Type::DateTime, literal));

	let mut scanner = Scanner::new(literal);
	if !scanner.eat("datetime'") {
		return Err(grammar());
	}
	let clock = scan_wall_clock(&mut scanner).ok_or_else(grammar)?;
	if clock.fraction.is_some_and(|digits| digits.len() > 7) || !scanner.eat("'") || !scanner.is_done() {
		return Err(grammar());
	}

	validate_wall_clock(Type::DateTime, literal, &clock)?;

	let nanos = clock.fraction.map(nanos_from_digits).unwrap_or(0);
	DateTime::from_civil(clock.civil, nanos).ok_or_else(grammar)
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::error::{GRAMMAR_MISMATCH, INVALID_CALENDAR_DATE, YEAR_BEFORE_MINIMUM};

	#[test]
	fn test_parse_minutes_only() {
		let value = parse_datetime("datetime'2024-01-01T10:00'").unwrap();
		assert_eq!(value.hour(), 10);
		assert_eq!(value.to_literal(), "datetime'2024-01-01T10:00'");
	}

	#[test]
	fn test_zero_seconds_dropped() {
		let value = parse_datetime("datetime'2024-01-01T10:00:00'").unwrap();
		assert_eq!(value.to_literal(), "datetime'2024-01-01T10:00'");
	}

	#[test]
	fn test_fraction_padded_to_seven_digits() {
		let value = parse_datetime("datetime'2024-01-01T10:00:00.5'").unwrap();
		assert_eq!(value.nanos(), 500_000_000);
		assert_eq!(value.to_literal(), "datetime'2024-01-01T10:00:00.5000000'");

		let literal = "datetime'2024-03-15T14:30:45.1234567'";
		assert_eq!(parse_datetime(literal).unwrap().to_literal(), literal);
	}

	#[test]
	fn test_leap_day() {
		assert!(parse_datetime("datetime'2024-02-29T00:00'").is_ok());
		assert!(parse_datetime("datetime'2000-02-29T00:00'").is_ok());
	}

	#[test]
	fn test_invalid_calendar_date() {
		let err = parse_datetime("datetime'2024-02-30T00:00'").unwrap_err();
		assert_eq!(err.0.code, INVALID_CALENDAR_DATE);
		assert_eq!(err.0.fragment.text(), "30");
		assert_eq!(err.0.fragment.column(), 17);

		for literal in [
			"datetime'2023-02-29T00:00'",
			"datetime'2024-04-31T00:00'",
			"datetime'2024-13-01T00:00'",
			"datetime'2024-00-10T00:00'",
			"datetime'2024-01-00T00:00'",
			"datetime'2024-01-01T24:00'",
			"datetime'2024-01-01T23:60'",
			"datetime'2024-01-01T23:59:60'",
		] {
			assert_eq!(parse_datetime(literal).unwrap_err().0.code, INVALID_CALENDAR_DATE, "{literal}");
		}
	}

	#[test]
	fn test_invalid_hour_fragment() {
		let err = parse_datetime("datetime'2024-01-01T25:00'").unwrap_err();
		assert_eq!(err.0.fragment.text(), "25");
		assert_eq!(err.0.fragment.column(), 20);
	}

	#[test]
	fn test_year_before_minimum() {
		let err = parse_datetime("datetime'1752-12-31T23:59'").unwrap_err();
		assert_eq!(err.0.code, YEAR_BEFORE_MINIMUM);
		assert_eq!(err.0.fragment.text(), "1752");
		assert!(parse_datetime("datetime'1753-01-01T00:00'").is_ok());
	}

	#[test]
	fn test_grammar_mismatch() {
		for literal in [
			"2024-01-01T10:00",
			"datetime'2024-01-01'",
			"datetime'2024-01-01T10:00:00.12345678'",
			"datetime'2024-01-01T10:00Z'",
			"datetime'2024-01-01T10:00:00+02:00'",
			"datetime'24-01-01T10:00'",
			"datetime'2024-01-01T10:00",
			"datetime\"2024-01-01T10:00\"",
			"DATETIME'2024-01-01T10:00'",
			"datetime'2024-01-01T10:00'x",
		] {
			assert_eq!(parse_datetime(literal).unwrap_err().0.code, GRAMMAR_MISMATCH, "{literal}");
		}
	}
}
