// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Result, error::TypeError, value::Type};

pub fn parse_boolean(literal: &str) -> Result<bool> {
	match literal {
		"true" => Ok(true),
		"false" => Ok(false),
		_ => Err(TypeError::grammar(Type::Boolean, literal).into()),
	}
}

pub fn parse_null(literal: &str) -> Result<()> {
	if literal == "null" {
		Ok(())
	} else {
		Err(TypeError::grammar(Type::Null, literal).into())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_parse_boolean() {
		assert_eq!(parse_boolean("true").unwrap(), true);
		assert_eq!(parse_boolean("false").unwrap(), false);
	}

	#[test]
	fn test_parse_boolean_exact_match_only() {
		assert!(parse_boolean("True").is_err());
		assert!(parse_boolean("1").is_err());
		assert!(parse_boolean(" true").is_err());
		assert!(parse_boolean("truefalse").is_err());
	}

	#[test]
	fn test_parse_null() {
		assert!(parse_null("null").is_ok());
		assert!(parse_null("NULL").is_err());
		assert!(parse_null("null ").is_err());
		assert!(parse_null("").is_err());
	}
}
