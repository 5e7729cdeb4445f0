// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use edm_type::{GetType, Type, Value};
use serde::{Deserialize, Serialize};

use crate::{EntityError, Result};

/// A typed slot of an entity, optionally part of its key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PropertyRepr", try_from = "PropertyRepr")]
pub struct Property {
	key: bool,
	ty: Type,
	value: Option<Value>,
}

/// A non-key `Null` property holding the null value
impl Default for Property {
	fn default() -> Self {
		Self {
			key: false,
			ty: Type::Null,
			value: Some(Value::Null),
		}
	}
}

impl Property {
	/// An empty property of type `ty`
	pub fn new(ty: Type) -> Self {
		Self {
			key: false,
			ty,
			value: None,
		}
	}

	/// An empty key property of type `ty`
	pub fn key(ty: Type) -> Self {
		Self {
			key: true,
			ty,
			value: None,
		}
	}

	/// An empty property of the type Rust type `T` maps to
	pub fn of<T: GetType>() -> Self {
		Self::new(T::get_type())
	}

	/// A property typed after `value`
	pub fn with_value(value: Value) -> Self {
		Self {
			key: false,
			ty: value.get_type(),
			value: Some(value),
		}
	}

	pub fn try_new(key: bool, ty: Type, value: Option<Value>) -> Result<Self> {
		if let Some(value) = &value {
			check_type(ty, value)?;
		}
		Ok(Self {
			key,
			ty,
			value,
		})
	}

	/// A property of type `ty` holding the value of `literal`
	pub fn parse(ty: Type, literal: &str) -> Result<Self> {
		let value = edm_type::parse_as(ty, literal)?;
		Ok(Self::with_value(value))
	}

	/// Marks the property as part of the entity key
	pub fn as_key(mut self) -> Self {
		self.key = true;
		self
	}

	pub fn is_key(&self) -> bool {
		self.key
	}

	pub fn ty(&self) -> Type {
		self.ty
	}

	pub fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	pub fn into_value(self) -> Option<Value> {
		self.value
	}

	/// The literal of the held value, `None` when the property is empty
	pub fn literal(&self) -> Option<String> {
		self.value.as_ref().map(Value::to_literal)
	}

	pub(crate) fn replace_value(&mut self, value: Value) -> Result<Option<Value>> {
		check_type(self.ty, &value)?;
		Ok(self.value.replace(value))
	}
}

fn check_type(expected: Type, value: &Value) -> Result<()> {
	let actual = value.get_type();
	if actual != expected {
		return Err(EntityError::TypeMismatch {
			expected,
			actual,
		});
	}
	Ok(())
}

/// Wire form of a property: the value as literal text
#[derive(Serialize, Deserialize)]
struct PropertyRepr {
	#[serde(default)]
	key: bool,
	#[serde(rename = "type")]
	ty: Type,
	#[serde(default)]
	value: Option<String>,
}

impl From<Property> for PropertyRepr {
	fn from(property: Property) -> Self {
		Self {
			key: property.key,
			ty: property.ty,
			value: property.literal(),
		}
	}
}

impl TryFrom<PropertyRepr> for Property {
	type Error = EntityError;

	fn try_from(repr: PropertyRepr) -> Result<Self> {
		let value = match repr.value {
			Some(text) => Some(Value::from_literal(repr.ty, &text)?),
			None => None,
		};
		Property::try_new(repr.key, repr.ty, value)
	}
}
