// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use crate::{
	Result,
	error::{SemanticKind, TypeError},
	fragment::Fragment,
	util::scan::{is_canonical_unsigned, split_sign},
	value::Type,
};

/// Checks `[+-]?([1-9]\d*|0)` (or the unsigned form) and returns the text
/// handed to the integer parser
fn integer_body(literal: &str, ty: Type, signed: bool, max_digits: Option<usize>) -> Result<&str> {
	let (_, digits) = if signed {
		split_sign(literal)
	} else {
		(false, literal)
	};

	let too_long = max_digits.is_some_and(|max| digits.len() > max);
	if !is_canonical_unsigned(digits) || too_long {
		return Err(TypeError::grammar(ty, literal).into());
	}
	Ok(literal)
}

fn parse_in_range<T: FromStr>(literal: &str, body: &str, ty: Type) -> Result<T> {
	body.parse::<T>().map_err(|_| {
		TypeError::semantic(
			ty,
			SemanticKind::OutOfRange,
			format!("'{}' is out of range for {}", body, ty),
			Fragment::literal(literal).sub_fragment(0, body.len()),
		)
		.into()
	})
}

/// `([1-9]\d{0,2}|0)`, at most 255
pub fn parse_byte(literal: &str) -> Result<u8> {
	let body = integer_body(literal, Type::Byte, false, Some(3))?;
	parse_in_range(literal, body, Type::Byte)
}

/// `[+-]?([1-9]\d{0,2}|0)`, between -128 and 127
pub fn parse_sbyte(literal: &str) -> Result<i8> {
	let body = integer_body(literal, Type::SByte, true, Some(3))?;
	parse_in_range(literal, body, Type::SByte)
}

pub fn parse_int16(literal: &str) -> Result<i16> {
	let body = integer_body(literal, Type::Int16, true, None)?;
	parse_in_range(literal, body, Type::Int16)
}

pub fn parse_int32(literal: &str) -> Result<i32> {
	let body = integer_body(literal, Type::Int32, true, None)?;
	parse_in_range(literal, body, Type::Int32)
}

/// Same digits as Int32 followed by a mandatory `L`. The suffix is only
/// required on input; the canonical output is the bare number.
pub fn parse_int64(literal: &str) -> Result<i64> {
	let Some(number) = literal.strip_suffix('L') else {
		return Err(TypeError::grammar(Type::Int64, literal).into());
	};
	let body = integer_body(number, Type::Int64, true, None)
		.map_err(|_| crate::Error::from(TypeError::grammar(Type::Int64, literal)))?;
	parse_in_range(literal, body, Type::Int64)
}
