// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Type;
use crate::value::{Blob, DateTime, DateTimeOffset, Decimal, Double, Guid, Single, Time};

pub trait GetType {
	fn get_type() -> Type;
}

impl GetType for bool {
	fn get_type() -> Type {
		Type::Boolean
	}
}

impl GetType for u8 {
	fn get_type() -> Type {
		Type::Byte
	}
}

impl GetType for i8 {
	fn get_type() -> Type {
		Type::SByte
	}
}

impl GetType for i16 {
	fn get_type() -> Type {
		Type::Int16
	}
}

impl GetType for i32 {
	fn get_type() -> Type {
		Type::Int32
	}
}

impl GetType for i64 {
	fn get_type() -> Type {
		Type::Int64
	}
}

impl GetType for f32 {
	fn get_type() -> Type {
		Type::Single
	}
}

impl GetType for Single {
	fn get_type() -> Type {
		Type::Single
	}
}

impl GetType for f64 {
	fn get_type() -> Type {
		Type::Double
	}
}

impl GetType for Double {
	fn get_type() -> Type {
		Type::Double
	}
}

impl GetType for String {
	fn get_type() -> Type {
		Type::String
	}
}

impl GetType for Blob {
	fn get_type() -> Type {
		Type::Binary
	}
}

impl GetType for Decimal {
	fn get_type() -> Type {
		Type::Decimal
	}
}

impl GetType for Guid {
	fn get_type() -> Type {
		Type::Guid
	}
}

impl GetType for DateTime {
	fn get_type() -> Type {
		Type::DateTime
	}
}

impl GetType for Time {
	fn get_type() -> Type {
		Type::Time
	}
}

impl GetType for DateTimeOffset {
	fn get_type() -> Type {
		Type::DateTimeOffset
	}
}
