// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use edm_type::Type;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntityError {
	#[error("property of type {expected} cannot hold a value of type {actual}")]
	TypeMismatch {
		expected: Type,
		actual: Type,
	},

	#[error("no property named '{name}'")]
	UnknownProperty {
		name: String,
	},

	#[error(transparent)]
	Literal(#[from] edm_type::Error),
}
