// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Records of named EDM values.
//!
//! An [`Entity`] maps property names to [`Property`] entries in insertion
//! order. A property declares its type up front and only ever holds a value
//! of exactly that type; nothing is converted between types.

mod entity;
mod error;
mod property;

pub use entity::Entity;
pub use error::EntityError;
pub use property::Property;

pub type Result<T> = std::result::Result<T, EntityError>;
