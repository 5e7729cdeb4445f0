// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{number, scan_wall_clock, validate_wall_clock};
use crate::{
	Result,
	error::{SemanticKind, TypeError},
	fragment::Fragment,
	util::Scanner,
	value::{
		Type,
		temporal::{DateTime, DateTimeOffset, UtcOffset, nanos_from_digits},
	},
};

/// `datetimeoffset'YYYY-MM-DDTHH:MM:SS[.d+](Z|[+-]HH:MM)'`
///
/// The wall clock is validated as written and then moved to UTC.
pub fn parse_datetime_offset(literal: &str) -> Result<DateTimeOffset> {
	let grammar = || crate::Error::from(TypeError::grammar(Type::DateTimeOffset, literal));

	let mut scanner = Scanner::new(literal);
	if !scanner.eat("datetimeoffset'") {
		return Err(grammar());
	}
	let clock = scan_wall_clock(&mut scanner).ok_or_else(grammar)?;
	if !clock.has_seconds {
		return Err(grammar());
	}

	let offset_start = scanner.position();
	let offset = if scanner.eat("Z") {
		None
	} else {
		let sign = scanner.eat_one_of(b"+-").ok_or_else(grammar)?;
		let hours = scanner.digits_exact(2).ok_or_else(grammar)?;
		if !scanner.eat(":") {
			return Err(grammar());
		}
		let minutes = scanner.digits_exact(2).ok_or_else(grammar)?;
		Some((sign == b'-', number(hours), number(minutes)))
	};
	if !scanner.eat("'") || !scanner.is_done() {
		return Err(grammar());
	}

	validate_wall_clock(Type::DateTimeOffset, literal, &clock)?;

	let offset = match offset {
		None => UtcOffset::UTC,
		Some((negative, hours, minutes)) => {
			UtcOffset::new(negative, hours as u8, minutes as u8).ok_or_else(|| {
				crate::Error::from(TypeError::semantic(
					Type::DateTimeOffset,
					SemanticKind::InvalidOffset,
					format!("offset {:02}:{:02} is outside -23:59 to +23:59", hours, minutes),
					Fragment::literal(literal).sub_fragment(offset_start, 6),
				))
			})?
		}
	};

	let nanos = clock.fraction.map(nanos_from_digits).unwrap_or(0);
	let local = DateTime::from_civil(clock.civil, nanos).ok_or_else(grammar)?;
	Ok(DateTimeOffset::new(local, offset))
}
