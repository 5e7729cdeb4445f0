// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	Result,
	error::{SemanticKind, TypeError},
	fragment::Fragment,
	util::{Scanner, scan::is_canonical_unsigned},
	value::{
		Type,
		temporal::{Time, nanos_from_digits},
	},
};

/// Digits of one component and their byte offset in the literal
#[derive(Clone, Copy)]
struct Component<'a> {
	digits: &'a str,
	start: usize,
}

/// `time'P[0Y][0M][0W][0D]T[nH][nM][(0|[1-9]\d*)(\.\d+)?S]'` with at least one
/// of the hour, minute and second components present
pub fn parse_time(literal: &str) -> Result<Time> {
	let grammar = || crate::Error::from(TypeError::grammar(Type::Time, literal));

	let mut scanner = Scanner::new(literal);
	if !scanner.eat("time'P") {
		return Err(grammar());
	}
	for designator in ["0Y", "0M", "0W", "0D"] {
		scanner.eat(designator);
	}
	if !scanner.eat("T") {
		return Err(grammar());
	}

	let mut hours = None;
	let mut minutes = None;
	let mut seconds = None;
	let mut fraction = "";
	// 0 nothing yet, 1 after H, 2 after M, 3 after S
	let mut stage = 0;

	while !scanner.eat("'") {
		let start = scanner.position();
		let digits = scanner.digits();
		if digits.is_empty() || stage == 3 {
			return Err(grammar());
		}
		let component = Component {
			digits,
			start,
		};

		if stage < 1 && scanner.eat("H") {
			hours = Some(component);
			stage = 1;
		} else if stage < 2 && scanner.eat("M") {
			minutes = Some(component);
			stage = 2;
		} else {
			if !is_canonical_unsigned(digits) {
				return Err(grammar());
			}
			if scanner.eat(".") {
				fraction = scanner.digits();
				if fraction.is_empty() {
					return Err(grammar());
				}
			}
			if !scanner.eat("S") {
				return Err(grammar());
			}
			seconds = Some(component);
			stage = 3;
		}
	}

	if stage == 0 || !scanner.is_done() {
		return Err(grammar());
	}

	let fragment = Fragment::literal(literal);
	let invalid = |component: Component<'_>, message: String| -> crate::Error {
		TypeError::semantic(
			Type::Time,
			SemanticKind::InvalidTime,
			message,
			fragment.sub_fragment(component.start, component.digits.len()),
		)
		.into()
	};
	// digit runs too long for u64 are out of range all the same
	let value = |component: Option<Component<'_>>| -> u64 {
		component.map_or(0, |c| c.digits.parse::<u64>().unwrap_or(u64::MAX))
	};

	let h = value(hours);
	let m = value(minutes);
	let s = value(seconds);
	let nanos = nanos_from_digits(fraction);

	if let Some(component) = hours.filter(|_| h > 24) {
		return Err(invalid(component, format!("hours '{}' exceed 24", component.digits)));
	}
	if let Some(component) = minutes.filter(|_| m >= 60 || (h == 24 && m != 0)) {
		return Err(invalid(component, format!("minutes '{}' are not valid at {} hours", component.digits, h)));
	}
	if let Some(component) = seconds.filter(|_| s >= 60 || (h == 24 && (s != 0 || nanos != 0))) {
		return Err(invalid(component, format!("seconds '{}' are not valid at {} hours", component.digits, h)));
	}

	Time::new(h as u8, m as u8, s as u8, nanos).ok_or_else(grammar)
}
