// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

pub mod blob;
pub mod boolean;
pub mod decimal;
pub mod guid;
pub mod number;
pub mod temporal;
pub mod text;
mod r#type;

pub use blob::Blob;
pub use decimal::Decimal;
pub use guid::Guid;
pub use number::{Double, Single};
pub use r#type::{GetType, Type};
pub use temporal::{DateTime, DateTimeOffset, Time, Timestamp, UtcOffset};

/// An EDM primitive value.
///
/// Variants whose type allows a missing payload hold an `Option`; `None`
/// is an undefined value of that type, which is not the same as `Null`.
///
/// Serialized as its type tag and literal text, the text being none for an
/// undefined value, so that every value reads back as the same variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "ValueRepr", try_from = "ValueRepr")]
pub enum Value {
	/// The null literal
	Null,
	/// A byte sequence
	Binary(Option<Blob>),
	/// true or false
	Boolean(Option<bool>),
	/// An unsigned 8-bit integer
	Byte(u8),
	/// A calendar date and time of day without offset
	DateTime(Option<DateTime>),
	/// A decimal keeping the digits as written
	Decimal(Decimal),
	/// An 8-byte floating point
	Double(Double),
	/// A 4-byte floating point
	Single(Single),
	/// A hyphenated hex identifier
	Guid(Option<Guid>),
	/// A 2-byte signed integer
	Int16(i16),
	/// A 4-byte signed integer
	Int32(i32),
	/// An 8-byte signed integer
	Int64(i64),
	/// A 1-byte signed integer
	SByte(i8),
	/// Text
	String(Option<String>),
	/// A time of day
	Time(Time),
	/// A UTC instant with the offset it was written in
	DateTimeOffset(Option<DateTimeOffset>),
}

impl Value {
	pub fn null() -> Self {
		Value::Null
	}

	pub fn binary(v: impl Into<Blob>) -> Self {
		Value::Binary(Some(v.into()))
	}

	pub fn boolean(v: impl Into<bool>) -> Self {
		Value::Boolean(Some(v.into()))
	}

	pub fn byte(v: impl Into<u8>) -> Self {
		Value::Byte(v.into())
	}

	pub fn datetime(v: impl Into<DateTime>) -> Self {
		Value::DateTime(Some(v.into()))
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Value::Decimal(v.into())
	}

	/// `None` for NaN and infinities
	pub fn double(v: impl Into<f64>) -> Option<Self> {
		Double::new(v.into()).map(Value::Double)
	}

	/// `None` for NaN and infinities
	pub fn single(v: impl Into<f32>) -> Option<Self> {
		Single::new(v.into()).map(Value::Single)
	}

	pub fn guid(v: impl Into<Guid>) -> Self {
		Value::Guid(Some(v.into()))
	}

	pub fn int16(v: impl Into<i16>) -> Self {
		Value::Int16(v.into())
	}

	pub fn int32(v: impl Into<i32>) -> Self {
		Value::Int32(v.into())
	}

	pub fn int64(v: impl Into<i64>) -> Self {
		Value::Int64(v.into())
	}

	pub fn sbyte(v: impl Into<i8>) -> Self {
		Value::SByte(v.into())
	}

	pub fn string(v: impl Into<String>) -> Self {
		Value::String(Some(v.into()))
	}

	pub fn time(v: impl Into<Time>) -> Self {
		Value::Time(v.into())
	}

	pub fn datetime_offset(v: impl Into<DateTimeOffset>) -> Self {
		Value::DateTimeOffset(Some(v.into()))
	}

	/// The value without payload, for the types that have one
	pub fn undefined(ty: Type) -> Option<Self> {
		match ty {
			Type::Binary => Some(Value::Binary(None)),
			Type::Boolean => Some(Value::Boolean(None)),
			Type::DateTime => Some(Value::DateTime(None)),
			Type::Guid => Some(Value::Guid(None)),
			Type::String => Some(Value::String(None)),
			Type::DateTimeOffset => Some(Value::DateTimeOffset(None)),
			_ => None,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(
			self,
			Value::Binary(None)
				| Value::Boolean(None)
				| Value::DateTime(None)
				| Value::Guid(None)
				| Value::String(None)
				| Value::DateTimeOffset(None)
		)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Null => Type::Null,
			Value::Binary(_) => Type::Binary,
			Value::Boolean(_) => Type::Boolean,
			Value::Byte(_) => Type::Byte,
			Value::DateTime(_) => Type::DateTime,
			Value::Decimal(_) => Type::Decimal,
			Value::Double(_) => Type::Double,
			Value::Single(_) => Type::Single,
			Value::Guid(_) => Type::Guid,
			Value::Int16(_) => Type::Int16,
			Value::Int32(_) => Type::Int32,
			Value::Int64(_) => Type::Int64,
			Value::SByte(_) => Type::SByte,
			Value::String(_) => Type::String,
			Value::Time(_) => Type::Time,
			Value::DateTimeOffset(_) => Type::DateTimeOffset,
		}
	}

	/// The canonical literal. Undefined values and a zero `Time` give the
	/// empty string.
	pub fn to_literal(&self) -> String {
		match self {
			Value::Null => "null".to_string(),
			Value::Binary(v) => v.as_ref().map(Blob::to_literal).unwrap_or_default(),
			Value::Boolean(v) => v.map(|b| b.to_string()).unwrap_or_default(),
			Value::Byte(v) => v.to_string(),
			Value::DateTime(v) => v.as_ref().map(DateTime::to_literal).unwrap_or_default(),
			Value::Decimal(v) => v.to_literal(),
			Value::Double(v) => v.to_literal(),
			Value::Single(v) => v.to_literal(),
			Value::Guid(v) => v.as_ref().map(Guid::to_literal).unwrap_or_default(),
			Value::Int16(v) => v.to_string(),
			Value::Int32(v) => v.to_string(),
			Value::Int64(v) => v.to_string(),
			Value::SByte(v) => v.to_string(),
			Value::String(v) => v.as_deref().map(text::string_literal).unwrap_or_default(),
			Value::Time(v) => v.to_literal(),
			Value::DateTimeOffset(v) => v.as_ref().map(DateTimeOffset::to_literal).unwrap_or_default(),
		}
	}

	/// Reads back what [`Value::to_literal`] wrote for a value of type `ty`.
	/// The empty string stands for the undefined value or a zero `Time`, and
	/// an Int64 may come without its `L`.
	pub fn from_literal(ty: Type, literal: &str) -> crate::Result<Self> {
		if literal.is_empty() {
			if ty == Type::Time {
				return Ok(Value::Time(Time::MIDNIGHT));
			}
			if let Some(value) = Value::undefined(ty) {
				return Ok(value);
			}
		}
		if ty == Type::Int64 && !literal.ends_with('L') {
			return crate::literal::parse_as(ty, &format!("{}L", literal));
		}
		crate::literal::parse_as(ty, literal)
	}

	/// Any literal, `None` when no type recognizes it
	pub fn parse(literal: &str) -> Option<Self> {
		crate::literal::try_parse(literal)
	}
}

/// The human readable form; undefined values show as `undefined`
impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.is_undefined() {
			return f.write_str("undefined");
		}
		match self {
			Value::Null => f.write_str("null"),
			Value::Binary(Some(v)) => Display::fmt(v, f),
			Value::Boolean(Some(v)) => Display::fmt(v, f),
			Value::Byte(v) => Display::fmt(v, f),
			Value::DateTime(Some(v)) => Display::fmt(v, f),
			Value::Decimal(v) => Display::fmt(v, f),
			Value::Double(v) => Display::fmt(v, f),
			Value::Single(v) => Display::fmt(v, f),
			Value::Guid(Some(v)) => Display::fmt(v, f),
			Value::Int16(v) => Display::fmt(v, f),
			Value::Int32(v) => Display::fmt(v, f),
			Value::Int64(v) => Display::fmt(v, f),
			Value::SByte(v) => Display::fmt(v, f),
			Value::String(Some(v)) => f.write_str(v),
			Value::Time(v) => Display::fmt(v, f),
			Value::DateTimeOffset(Some(v)) => Display::fmt(v, f),
			_ => f.write_str("undefined"),
		}
	}
}

#[derive(Serialize, Deserialize)]
struct ValueRepr {
	#[serde(rename = "type")]
	ty: Type,
	value: Option<String>,
}

impl From<Value> for ValueRepr {
	fn from(value: Value) -> Self {
		Self {
			ty: value.get_type(),
			value: (!value.is_undefined()).then(|| value.to_literal()),
		}
	}
}

impl TryFrom<ValueRepr> for Value {
	type Error = crate::Error;

	fn try_from(repr: ValueRepr) -> crate::Result<Self> {
		match repr.value {
			Some(literal) => Value::from_literal(repr.ty, &literal),
			None => Value::undefined(repr.ty).ok_or_else(|| TypeError::grammar(repr.ty, "").into()),
		}
	}
}
