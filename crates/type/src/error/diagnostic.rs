// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, IntoDiagnostic, SemanticKind, TypeError};
use crate::value::Type;

pub const UNRECOGNIZED: &str = "LITERAL_000";
pub const GRAMMAR_MISMATCH: &str = "LITERAL_001";
pub const OUT_OF_RANGE: &str = "LITERAL_002";
pub const NON_FINITE: &str = "LITERAL_003";
pub const YEAR_BEFORE_MINIMUM: &str = "LITERAL_004";
pub const INVALID_CALENDAR_DATE: &str = "LITERAL_005";
pub const INVALID_TIME: &str = "LITERAL_006";
pub const INVALID_OFFSET: &str = "LITERAL_007";
pub const PRECISION_EXCEEDED: &str = "LITERAL_008";

fn literal_example(ty: Type) -> &'static str {
	match ty {
		Type::Null => "null",
		Type::Binary => "X'1a2b'",
		Type::Boolean => "true",
		Type::Byte => "255",
		Type::DateTime => "datetime'2024-03-15T14:30:45.1234567'",
		Type::Decimal => "12.34m",
		Type::Double => "1.5E+10d",
		Type::Single => "2.5f",
		Type::Guid => "guid'3f2504e0-4f89-11d3-9a0c-0305e82c3301'",
		Type::Int16 => "-32768",
		Type::Int32 => "2147483647",
		Type::Int64 => "9223372036854775807L",
		Type::SByte => "-128",
		Type::String => "'it''s'",
		Type::Time => "time'PT13H20M15.5S'",
		Type::DateTimeOffset => "datetimeoffset'2024-03-15T14:30:45+02:00'",
	}
}

fn literal_shape(ty: Type) -> &'static str {
	match ty {
		Type::Null => "null",
		Type::Binary => "binary'<hex>' or X'<hex>' with an even number of hex digits",
		Type::Boolean => "true or false",
		Type::Byte => "decimal digits without leading zeros",
		Type::DateTime => "datetime'YYYY-MM-DDTHH:MM[:SS[.fffffff]]'",
		Type::Decimal => "[+-]digits[.digits] followed by m or M",
		Type::Double => "[+-]digits[.digits][E(+|-)digits] followed by d",
		Type::Single => "[+-]digits[.digits] followed by f",
		Type::Guid => "guid'XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX'",
		Type::Int16 | Type::Int32 | Type::SByte => "[+-]digits without leading zeros",
		Type::Int64 => "[+-]digits without leading zeros followed by L",
		Type::String => "'text' with embedded quotes doubled",
		Type::Time => "time'PT[nH][nM][n[.n]S]'",
		Type::DateTimeOffset => "datetimeoffset'YYYY-MM-DDTHH:MM:SS[.f](Z|(+|-)HH:MM)'",
	}
}

fn semantic_code(kind: SemanticKind) -> &'static str {
	match kind {
		SemanticKind::OutOfRange => OUT_OF_RANGE,
		SemanticKind::NonFinite => NON_FINITE,
		SemanticKind::YearBeforeMinimum => YEAR_BEFORE_MINIMUM,
		SemanticKind::InvalidCalendarDate => INVALID_CALENDAR_DATE,
		SemanticKind::InvalidTime => INVALID_TIME,
		SemanticKind::InvalidOffset => INVALID_OFFSET,
		SemanticKind::PrecisionExceeded => PRECISION_EXCEEDED,
	}
}

fn range_note(ty: Type) -> Option<String> {
	let range = match ty {
		Type::Byte => "0 to 255",
		Type::SByte => "-128 to 127",
		Type::Int16 => "-32768 to 32767",
		Type::Int32 => "-2147483648 to 2147483647",
		Type::Int64 => "-9223372036854775808 to 9223372036854775807",
		_ => return None,
	};
	Some(format!("{} accepts {}", ty, range))
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TypeError::GrammarMismatch {
				ty,
				fragment,
			} => Diagnostic {
				code: GRAMMAR_MISMATCH.to_string(),
				message: format!("literal does not match the {} grammar", ty),
				label: Some(format!("'{}' is not a {} literal", fragment.text(), ty)),
				help: Some(format!("use the form {} (e.g., {})", literal_shape(ty), literal_example(ty))),
				notes: vec![],
				fragment,
				cause: None,
			},

			TypeError::SemanticInvalid {
				ty,
				kind,
				message,
				fragment,
			} => {
				let (help, notes) = match kind {
					SemanticKind::OutOfRange => (
						format!("use a value that fits {}", ty),
						range_note(ty).into_iter().collect(),
					),
					SemanticKind::NonFinite => (
						"use a magnitude the floating point type can represent".to_string(),
						vec![format!("{} literals overflowing to infinity are rejected", ty)],
					),
					SemanticKind::YearBeforeMinimum => (
						"use a year of 1753 or later".to_string(),
						vec!["the EDM calendar starts at 1753-01-01".to_string()],
					),
					SemanticKind::InvalidCalendarDate => (
						"ensure the date and time exist in the calendar (e.g., no February 30)"
							.to_string(),
						vec![
							"check the month has the given number of days".to_string(),
							"consider leap years for February 29".to_string(),
							"hours must be 00-23, minutes and seconds 00-59".to_string(),
						],
					),
					SemanticKind::InvalidTime => (
						"ensure hours are 0-24 and minutes and seconds are 0-59".to_string(),
						vec!["24H is only valid with zero minutes and seconds".to_string()],
					),
					SemanticKind::InvalidOffset => (
						"use an offset between -23:59 and +23:59".to_string(),
						vec!["offset minutes must be 00-59".to_string()],
					),
					SemanticKind::PrecisionExceeded => (
						"reduce the number of significant digits".to_string(),
						vec!["the configured decimal precision limits significant digits".to_string()],
					),
				};

				Diagnostic {
					code: semantic_code(kind).to_string(),
					message,
					label: Some(format!("{} in {} literal", kind, ty)),
					help: Some(help),
					notes,
					fragment,
					cause: None,
				}
			}

			TypeError::Unrecognized {
				fragment,
				cause,
			} => Diagnostic {
				code: UNRECOGNIZED.to_string(),
				message: "literal does not match any EDM primitive type".to_string(),
				label: Some(format!("'{}' is not a recognized literal", fragment.text())),
				help: Some("check the type prefix, quoting and suffix letter of the literal".to_string()),
				notes: vec!["examples: 42, 12.34m, 1.5E+10d, 2.5f, 7L, 'text', guid'...', datetime'...'"
					.to_string()],
				fragment,
				cause,
			},
		}
	}
}
