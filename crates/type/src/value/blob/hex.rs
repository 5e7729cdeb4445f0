// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Blob;
use crate::{
	Result,
	error::TypeError,
	util::{Scanner, hex},
	value::Type,
};

/// Parses `binary'<hex>'` or `X'<hex>'`; hex digits may be in either case
pub fn parse_binary(literal: &str) -> Result<Blob> {
	let mut scanner = Scanner::new(literal);
	if !scanner.eat("binary'") && !scanner.eat("X'") {
		return Err(TypeError::grammar(Type::Binary, literal).into());
	}

	let digits = scanner.take_while(|b| b.is_ascii_hexdigit());
	if !scanner.eat("'") || !scanner.is_done() {
		return Err(TypeError::grammar(Type::Binary, literal).into());
	}

	match hex::decode(digits) {
		Some(bytes) => Ok(Blob::new(bytes)),
		None => Err(TypeError::grammar(Type::Binary, literal).into()),
	}
}

impl Blob {
	/// Always emitted with the `X` prefix and lowercase digits
	pub fn to_literal(&self) -> String {
		format!("X'{}'", hex::encode(self.as_bytes()))
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::error::GRAMMAR_MISMATCH;

	#[test]
	fn test_parse_binary_prefix() {
		let blob = parse_binary("binary'48656c6c6f'").unwrap();
		assert_eq!(blob.as_bytes(), b"Hello");
	}

	#[test]
	fn test_parse_x_prefix() {
		let blob = parse_binary("X'48656C6C6F'").unwrap();
		assert_eq!(blob.as_bytes(), b"Hello");
	}

	#[test]
	fn test_prefixes_agree() {
		assert_eq!(parse_binary("binary'1A2B'").unwrap(), parse_binary("X'1a2b'").unwrap());
	}

	#[test]
	fn test_parse_empty() {
		let blob = parse_binary("X''").unwrap();
		assert!(blob.is_empty());
		assert_eq!(blob.to_literal(), "X''");
	}

	#[test]
	fn test_to_literal_lowercase() {
		let blob = parse_binary("binary'1A2B'").unwrap();
		assert_eq!(blob.to_literal(), "X'1a2b'");
		assert_eq!(blob.to_string(), "1a2b");
	}

	#[test]
	fn test_odd_length_rejected() {
		let err = parse_binary("X'1a2'").unwrap_err();
		assert_eq!(err.0.code, GRAMMAR_MISMATCH);
	}

	#[test]
	fn test_invalid_rejected() {
		assert!(parse_binary("X'zz'").is_err());
		assert!(parse_binary("x'1a'").is_err());
		assert!(parse_binary("Binary'1a'").is_err());
		assert!(parse_binary("X'1a").is_err());
		assert!(parse_binary("X'1a''").is_err());
		assert!(parse_binary("'1a'").is_err());
	}

	#[test]
	fn test_roundtrip() {
		let original = b"Hello, World! \x00\x01\x02\xFF";
		let blob = Blob::new(original.to_vec());
		let parsed = parse_binary(&blob.to_literal()).unwrap();
		assert_eq!(parsed.as_bytes(), original);
	}
}
