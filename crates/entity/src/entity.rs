// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use edm_type::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{EntityError, Property, Result};

/// Properties by name, in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity {
	properties: IndexMap<String, Property>,
}

impl Entity {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces the property `name`. A replaced property keeps its
	/// position and is returned.
	pub fn insert(&mut self, name: impl Into<String>, property: Property) -> Option<Property> {
		let name = name.into();
		let previous = self.properties.insert(name.clone(), property);
		if previous.is_some() {
			trace!(name = %name, "property replaced");
		}
		previous
	}

	/// Puts `value` into the existing property `name`, returning the value it
	/// held. The value must have the property's declared type.
	pub fn set_value(&mut self, name: &str, value: Value) -> Result<Option<Value>> {
		let property = self.properties.get_mut(name).ok_or_else(|| EntityError::UnknownProperty {
			name: name.to_string(),
		})?;
		let previous = property.replace_value(value)?;
		trace!(name, "property value set");
		Ok(previous)
	}

	pub fn get(&self, name: &str) -> Option<&Property> {
		self.properties.get(name)
	}

	/// The value held by property `name`
	pub fn value(&self, name: &str) -> Option<&Value> {
		self.get(name).and_then(Property::value)
	}

	/// Removes the property `name`; the others keep their order
	pub fn remove(&mut self, name: &str) -> Option<Property> {
		self.properties.shift_remove(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.properties.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.properties.len()
	}

	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> {
		self.properties.iter().map(|(name, property)| (name.as_str(), property))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.properties.keys().map(String::as_str)
	}

	/// Names of the key properties, in order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.iter().filter(|(_, property)| property.is_key()).map(|(name, _)| name)
	}
}

/// Equal when both hold the same properties in the same order
impl PartialEq for Entity {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}

impl<S: Into<String>> FromIterator<(S, Property)> for Entity {
	fn from_iter<I: IntoIterator<Item = (S, Property)>>(iter: I) -> Self {
		let mut entity = Entity::new();
		for (name, property) in iter {
			entity.insert(name, property);
		}
		entity
	}
}

#[cfg(test)]
pub mod tests {
	use edm_type::Type;

	use super::*;

	fn person() -> Entity {
		[
			("Id", Property::key(Type::Guid)),
			("Name", Property::new(Type::String)),
			("Age", Property::new(Type::Byte)),
		]
		.into_iter()
		.collect()
	}

	#[test]
	fn test_new_is_empty() {
		let entity = Entity::new();
		assert!(entity.is_empty());
		assert_eq!(entity.len(), 0);
	}

	#[test]
	fn test_insertion_order() {
		let entity = person();
		assert_eq!(entity.names().collect::<Vec<_>>(), vec!["Id", "Name", "Age"]);
		assert_eq!(entity.keys().collect::<Vec<_>>(), vec!["Id"]);
	}

	#[test]
	fn test_insert_replaces_in_place() {
		let mut entity = person();
		let previous = entity.insert("Name", Property::with_value(Value::string("Ada")));
		assert_eq!(previous, Some(Property::new(Type::String)));
		assert_eq!(entity.names().collect::<Vec<_>>(), vec!["Id", "Name", "Age"]);
		assert_eq!(entity.value("Name"), Some(&Value::string("Ada")));
	}

	#[test]
	fn test_set_value() {
		let mut entity = person();
		assert_eq!(entity.set_value("Age", Value::byte(36u8)).unwrap(), None);
		assert_eq!(entity.set_value("Age", Value::byte(37u8)).unwrap(), Some(Value::byte(36u8)));
		assert_eq!(entity.value("Age"), Some(&Value::byte(37u8)));
	}

	#[test]
	fn test_set_value_no_coercion() {
		let mut entity = person();
		let err = entity.set_value("Age", Value::int16(36i16)).unwrap_err();
		assert_eq!(
			err,
			EntityError::TypeMismatch {
				expected: Type::Byte,
				actual: Type::Int16,
			}
		);
		assert_eq!(entity.value("Age"), None);
	}

	#[test]
	fn test_set_value_unknown() {
		let mut entity = person();
		let err = entity.set_value("Email", Value::string("x")).unwrap_err();
		assert_eq!(
			err,
			EntityError::UnknownProperty {
				name: "Email".to_string(),
			}
		);
	}

	#[test]
	fn test_equality_follows_order() {
		let reordered: Entity = [
			("Name", Property::new(Type::String)),
			("Id", Property::key(Type::Guid)),
			("Age", Property::new(Type::Byte)),
		]
		.into_iter()
		.collect();
		assert_ne!(reordered, person());
		assert_eq!(person(), person());

		let mut shorter = person();
		shorter.remove("Age");
		assert_ne!(shorter, person());
	}

	#[test]
	fn test_remove_keeps_order() {
		let mut entity = person();
		assert!(entity.remove("Name").is_some());
		assert!(!entity.contains("Name"));
		assert_eq!(entity.names().collect::<Vec<_>>(), vec!["Id", "Age"]);
		assert!(entity.remove("Name").is_none());
	}

	#[test]
	fn test_serde_keeps_order() {
		let mut entity = person();
		entity.set_value("Age", Value::byte(36u8)).unwrap();
		let json = serde_json::to_string(&entity).unwrap();
		assert!(json.starts_with(r#"{"Id":{"key":true,"type":"Guid","value":null},"Name":"#));
		assert!(json.ends_with(r#""Age":{"key":false,"type":"Byte","value":"36"}}"#));
		let back = serde_json::from_str::<Entity>(&json).unwrap();
		assert_eq!(back.names().collect::<Vec<_>>(), vec!["Id", "Name", "Age"]);
		assert_eq!(back, entity);
	}
}
