// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Classifies arbitrary literal text.
//!
//! The grammars of the sixteen types are kept apart by their decoration
//! (quotes, prefixes, suffix letters), except for the bare integers, where
//! the first type in [`Type::ALL`] whose range fits wins. A literal that
//! matches a grammar but fails its range or calendar check does not stop
//! the search.

use tracing::{debug, instrument, trace};

use crate::{
	Result,
	config::CodecConfig,
	error::TypeError,
	fragment::Fragment,
	value::{
		Type, Value,
		blob::parse_binary,
		boolean::{parse_boolean, parse_null},
		decimal::parse_decimal_with_precision,
		guid::parse_guid,
		number::{parse_byte, parse_double, parse_int16, parse_int32, parse_int64, parse_sbyte, parse_single},
		temporal::{parse_datetime, parse_datetime_offset, parse_time},
		text::parse_string,
	},
};

/// Runs the recognizer of a single type
pub(crate) fn recognize(ty: Type, literal: &str, config: &CodecConfig) -> Result<Value> {
	Ok(match ty {
		Type::Null => parse_null(literal).map(|_| Value::Null)?,
		Type::Binary => Value::binary(parse_binary(literal)?),
		Type::Boolean => Value::boolean(parse_boolean(literal)?),
		Type::Byte => Value::Byte(parse_byte(literal)?),
		Type::DateTime => Value::datetime(parse_datetime(literal)?),
		Type::Decimal => Value::Decimal(parse_decimal_with_precision(literal, config.decimal_precision)?),
		Type::Double => Value::Double(parse_double(literal)?),
		Type::Single => Value::Single(parse_single(literal)?),
		Type::Guid => Value::guid(parse_guid(literal)?),
		Type::Int16 => Value::Int16(parse_int16(literal)?),
		Type::Int32 => Value::Int32(parse_int32(literal)?),
		Type::Int64 => Value::Int64(parse_int64(literal)?),
		Type::SByte => Value::SByte(parse_sbyte(literal)?),
		Type::String => Value::string(parse_string(literal)?),
		Type::Time => Value::Time(parse_time(literal)?),
		Type::DateTimeOffset => Value::datetime_offset(parse_datetime_offset(literal)?),
	})
}

/// Tries every type in [`Type::ALL`] order
pub(crate) fn dispatch(literal: &str, config: &CodecConfig) -> Result<Value> {
	let mut rejection = None;

	for ty in Type::ALL {
		match recognize(ty, literal, config) {
			Ok(value) => {
				trace!(literal, ty = %ty, "literal recognized");
				return Ok(value);
			}
			Err(err) if err.is_grammar_mismatch() => {}
			Err(err) => {
				trace!(literal, ty = %ty, code = err.code(), "literal rejected");
				rejection.get_or_insert(err);
			}
		}
	}

	debug!(literal, "literal not recognized");
	Err(TypeError::Unrecognized {
		fragment: Fragment::literal(literal),
		cause: rejection.map(|err| Box::new(err.diagnostic())),
	}
	.into())
}

/// Parses any literal, trying the types in [`Type::ALL`] order
#[instrument(name = "literal::parse_value", level = "trace", skip_all)]
pub fn parse_value(literal: &str) -> Result<Value> {
	dispatch(literal, &CodecConfig::default())
}

/// Like [`parse_value`], `None` when no type recognizes the literal
pub fn try_parse(literal: &str) -> Option<Value> {
	parse_value(literal).ok()
}

/// Parses `literal` as a value of `ty`, without trying other types
#[instrument(name = "literal::parse_as", level = "trace", skip_all, fields(ty = %ty))]
pub fn parse_as(ty: Type, literal: &str) -> Result<Value> {
	recognize(ty, literal, &CodecConfig::default())
}

pub fn format_value(value: &Value) -> String {
	value.to_literal()
}

pub fn render_value(value: &Value) -> String {
	value.to_string()
}
