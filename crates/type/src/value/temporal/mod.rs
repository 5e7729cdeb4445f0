// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub(crate) mod calendar;
mod datetime;
mod offset;
mod parse;
mod time;
mod timestamp;

pub use datetime::DateTime;
pub use offset::{DateTimeOffset, UtcOffset};
pub use parse::{parse_datetime, parse_datetime_offset, parse_time};
pub use time::Time;
pub use timestamp::Timestamp;

pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Nanoseconds of a fraction given by its digits after the decimal point;
/// digits beyond the ninth are dropped
pub(crate) fn nanos_from_digits(digits: &str) -> u32 {
	digits.bytes().chain(std::iter::repeat(b'0')).take(9).fold(0, |acc, b| acc * 10 + (b - b'0') as u32)
}

/// Significant fraction digits of `nanos`, without trailing zeros
pub(crate) fn fraction_digits(nanos: u32) -> String {
	let digits = format!("{:09}", nanos);
	digits.trim_end_matches('0').to_string()
}
