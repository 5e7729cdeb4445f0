// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// An EDM primitive type tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// The null literal, carries no payload
	Null,
	/// A byte sequence
	Binary,
	/// true or false
	Boolean,
	/// An unsigned 8-bit integer
	Byte,
	/// A calendar date and time of day without offset
	DateTime,
	/// A decimal number whose digit strings are kept verbatim
	Decimal,
	/// An 8-byte floating point
	Double,
	/// A 4-byte floating point
	Single,
	/// A 128-bit identifier in hyphenated hex form
	Guid,
	/// A 2-byte signed integer
	Int16,
	/// A 4-byte signed integer
	Int32,
	/// An 8-byte signed integer
	Int64,
	/// A 1-byte signed integer
	SByte,
	/// Text
	String,
	/// A time of day expressed as a duration
	Time,
	/// A UTC instant plus the offset it was written in
	DateTimeOffset,
}

impl Type {
	/// All tags, in the order the literal dispatcher tries them
	pub const ALL: [Type; 16] = [
		Type::Null,
		Type::Binary,
		Type::Boolean,
		Type::Byte,
		Type::DateTime,
		Type::Decimal,
		Type::Double,
		Type::Single,
		Type::Guid,
		Type::Int16,
		Type::Int32,
		Type::Int64,
		Type::SByte,
		Type::String,
		Type::Time,
		Type::DateTimeOffset,
	];

	pub fn to_u8(&self) -> u8 {
		*self as u8
	}

	pub fn from_u8(value: u8) -> Option<Self> {
		Self::ALL.get(value as usize).copied()
	}

	pub fn name(&self) -> &'static str {
		match self {
			Type::Null => "Null",
			Type::Binary => "Binary",
			Type::Boolean => "Boolean",
			Type::Byte => "Byte",
			Type::DateTime => "DateTime",
			Type::Decimal => "Decimal",
			Type::Double => "Double",
			Type::Single => "Single",
			Type::Guid => "Guid",
			Type::Int16 => "Int16",
			Type::Int32 => "Int32",
			Type::Int64 => "Int64",
			Type::SByte => "SByte",
			Type::String => "String",
			Type::Time => "Time",
			Type::DateTimeOffset => "DateTimeOffset",
		}
	}

	/// Whether values of this type may carry no payload at all
	pub fn supports_undefined(&self) -> bool {
		matches!(
			self,
			Type::Binary | Type::Boolean | Type::DateTime | Type::Guid | Type::String | Type::DateTimeOffset
		)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Byte | Type::SByte | Type::Int16 | Type::Int32 | Type::Int64)
	}

	pub fn is_number(&self) -> bool {
		self.is_integer() || matches!(self, Type::Decimal | Type::Double | Type::Single)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::DateTime | Type::Time | Type::DateTimeOffset)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Edm.{}", self.name())
	}
}

impl FromStr for Type {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.strip_prefix("Edm.").unwrap_or(s);
		Self::ALL.into_iter().find(|ty| ty.name() == name).ok_or_else(|| format!("unknown EDM type: {}", s))
	}
}
