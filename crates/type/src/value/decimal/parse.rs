// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	Result,
	error::{SemanticKind, TypeError},
	fragment::Fragment,
	util::{Scanner, scan::split_sign},
	value::{Type, decimal::Decimal},
};

/// `[+-]?\d+(\.\d+)?[mM]`, digits kept as written
pub fn parse_decimal(literal: &str) -> Result<Decimal> {
	parse_decimal_with_precision(literal, None)
}

/// Like [`parse_decimal`], rejecting literals with more than `precision`
/// significant digits
pub fn parse_decimal_with_precision(literal: &str, precision: Option<u32>) -> Result<Decimal> {
	let grammar = || crate::Error::from(TypeError::grammar(Type::Decimal, literal));

	let number = literal.strip_suffix(['m', 'M']).ok_or_else(grammar)?;
	let (negative, unsigned) = split_sign(number);

	let mut scanner = Scanner::new(unsigned);
	let integer = scanner.digits();
	let fraction = if scanner.eat(".") {
		scanner.digits()
	} else if scanner.is_done() {
		""
	} else {
		return Err(grammar());
	};
	if integer.is_empty() || !scanner.is_done() || (unsigned.contains('.') && fraction.is_empty()) {
		return Err(grammar());
	}

	let decimal = Decimal::new(negative, integer, fraction).ok_or_else(grammar)?;

	if let Some(max) = precision {
		if decimal.precision() > max as usize {
			return Err(TypeError::semantic(
				Type::Decimal,
				SemanticKind::PrecisionExceeded,
				format!("{} significant digits exceed the precision of {}", decimal.precision(), max),
				Fragment::literal(literal).sub_fragment(0, number.len()),
			)
			.into());
		}
	}

	Ok(decimal)
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::error::{GRAMMAR_MISMATCH, PRECISION_EXCEEDED};

	#[test]
	fn test_keeps_padding() {
		assert_eq!(parse_decimal("007.50m").unwrap().to_literal(), "007.50m");
		assert_eq!(parse_decimal("0.0M").unwrap().to_literal(), "0.0m");
	}

	#[test]
	fn test_sign() {
		let value = parse_decimal("-12.34m").unwrap();
		assert!(value.is_negative());
		assert_eq!(value.to_literal(), "-12.34m");

		let value = parse_decimal("+5m").unwrap();
		assert!(!value.is_negative());
		assert_eq!(value.to_literal(), "5m");
	}

	#[test]
	fn test_grammar_mismatch() {
		for literal in ["12.34", "12.m", ".5m", "m", "-m", "1.2.3m", "1e5m", "12.34mm", " 1m", "++1m"] {
			let err = parse_decimal(literal).unwrap_err();
			assert_eq!(err.0.code, GRAMMAR_MISMATCH, "{literal}");
		}
	}

	#[test]
	fn test_unbounded_by_default() {
		let literal = format!("{}.{}m", "9".repeat(60), "1".repeat(40));
		assert_eq!(parse_decimal(&literal).unwrap().to_literal(), literal);
	}

	#[test]
	fn test_precision_limit() {
		assert!(parse_decimal_with_precision("123.45m", Some(5)).is_ok());
		assert!(parse_decimal_with_precision("0000123.4500m", Some(5)).is_ok());

		let err = parse_decimal_with_precision("-123.456m", Some(5)).unwrap_err();
		assert_eq!(err.0.code, PRECISION_EXCEEDED);
		assert_eq!(err.0.fragment.text(), "-123.456");
	}
}
