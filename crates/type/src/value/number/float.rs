// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use crate::{
	Result,
	config::FloatNotation,
	error::{SemanticKind, TypeError},
	fragment::Fragment,
	util::{Scanner, scan::is_canonical_unsigned},
	value::Type,
};

/// An 8-byte floating point, always finite
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Double(f64);

impl Double {
	pub fn new(value: f64) -> Option<Self> {
		value.is_finite().then_some(Self(value))
	}

	pub fn value(&self) -> f64 {
		self.0
	}

	pub fn to_literal(&self) -> String {
		self.to_literal_with(FloatNotation::Shortest)
	}

	pub fn to_literal_with(&self, notation: FloatNotation) -> String {
		let (negative, digits, exponent) = decompose(&format!("{:e}", self.0));
		format!("{}d", layout(negative, &digits, exponent, notation, 'E'))
	}
}

impl Display for Double {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (negative, digits, exponent) = decompose(&format!("{:e}", self.0));
		f.write_str(&layout(negative, &digits, exponent, FloatNotation::Shortest, 'e'))
	}
}

/// A 4-byte floating point, always finite
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Single(f32);

impl Single {
	pub fn new(value: f32) -> Option<Self> {
		value.is_finite().then_some(Self(value))
	}

	pub fn value(&self) -> f32 {
		self.0
	}

	/// Single literals have no exponent form, so the output is always
	/// fixed-point
	pub fn to_literal(&self) -> String {
		format!("{}f", self)
	}
}

impl Display for Single {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (negative, digits, exponent) = decompose(&format!("{:e}", self.0));
		f.write_str(&layout(negative, &digits, exponent, FloatNotation::Fixed, 'e'))
	}
}

/// Splits Rust's shortest round-trip scientific rendering (`-1.25e-7`) into
/// sign, significant digits and the exponent of the first digit
fn decompose(scientific: &str) -> (bool, String, i32) {
	let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific, "0"));
	let (negative, mantissa) = match mantissa.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, mantissa),
	};
	let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
	(negative, digits, exponent.parse().unwrap_or(0))
}

/// Places the decimal point the way ECMAScript's Number#toString does; with
/// `Fixed` the exponent form is never used.
fn layout(negative: bool, digits: &str, exponent: i32, notation: FloatNotation, marker: char) -> String {
	if digits.bytes().all(|b| b == b'0') {
		return "0".to_string();
	}

	let k = digits.len() as i32;
	let n = exponent + 1;
	let fixed = matches!(notation, FloatNotation::Fixed);

	let body = if k <= n && (fixed || n <= 21) {
		format!("{}{}", digits, "0".repeat((n - k) as usize))
	} else if 0 < n && (fixed || n <= 21) {
		format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
	} else if n <= 0 && (fixed || n > -6) {
		format!("0.{}{}", "0".repeat((-n) as usize), digits)
	} else {
		let sign = if n - 1 < 0 {
			'-'
		} else {
			'+'
		};
		let (first, rest) = digits.split_at(1);
		if rest.is_empty() {
			format!("{}{}{}{}", first, marker, sign, (n - 1).abs())
		} else {
			format!("{}.{}{}{}{}", first, rest, marker, sign, (n - 1).abs())
		}
	};

	if negative {
		format!("-{}", body)
	} else {
		body
	}
}

/// `[+-]?([1-9]\d*|0)(\.\d+)?`, leaving the scanner after the mantissa
fn scan_mantissa(scanner: &mut Scanner<'_>) -> bool {
	scanner.eat_one_of(b"+-");
	if !is_canonical_unsigned(scanner.digits()) {
		return false;
	}
	if scanner.eat(".") && scanner.digits().is_empty() {
		return false;
	}
	true
}

/// `[+-]?([1-9]\d*|0)(\.\d+)?(E[+-]\d+)?d`
pub fn parse_double(literal: &str) -> Result<Double> {
	let mut scanner = Scanner::new(literal);
	let mut valid = scan_mantissa(&mut scanner);
	if valid && scanner.eat("E") {
		valid = scanner.eat_one_of(b"+-").is_some() && !scanner.digits().is_empty();
	}
	let number_len = scanner.position();
	if !valid || !scanner.eat("d") || !scanner.is_done() {
		return Err(TypeError::grammar(Type::Double, literal).into());
	}

	let number = &literal[..number_len];
	let value = number.parse::<f64>().map_err(|_| crate::Error::from(TypeError::grammar(Type::Double, literal)))?;
	Double::new(value).ok_or_else(|| non_finite(Type::Double, literal, number))
}

/// `[+-]?([1-9]\d*|0)(\.\d+)?f`
pub fn parse_single(literal: &str) -> Result<Single> {
	let mut scanner = Scanner::new(literal);
	let valid = scan_mantissa(&mut scanner);
	let number_len = scanner.position();
	if !valid || !scanner.eat("f") || !scanner.is_done() {
		return Err(TypeError::grammar(Type::Single, literal).into());
	}

	let number = &literal[..number_len];
	let value = number.parse::<f32>().map_err(|_| crate::Error::from(TypeError::grammar(Type::Single, literal)))?;
	Single::new(value).ok_or_else(|| non_finite(Type::Single, literal, number))
}

fn non_finite(ty: Type, literal: &str, number: &str) -> crate::Error {
	TypeError::semantic(
		ty,
		SemanticKind::NonFinite,
		format!("'{}' overflows {}", number, ty),
		Fragment::literal(literal).sub_fragment(0, number.len()),
	)
	.into()
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::error::{GRAMMAR_MISMATCH, NON_FINITE};

	#[test]
	fn test_parse_double() {
		assert_eq!(parse_double("1.5d").unwrap().value(), 1.5);
		assert_eq!(parse_double("-0.25d").unwrap().value(), -0.25);
		assert_eq!(parse_double("+3d").unwrap().value(), 3.0);
		assert_eq!(parse_double("1.5E+10d").unwrap().value(), 1.5e10);
		assert_eq!(parse_double("2E-3d").unwrap().value(), 0.002);
	}

	#[test]
	fn test_parse_double_grammar() {
		for literal in ["1.5", "1.5D", "01.5d", "1.d", ".5d", "1e+5d", "1E5d", "1E+d", "d", "1.5dd"] {
			let err = parse_double(literal).unwrap_err();
			assert_eq!(err.0.code, GRAMMAR_MISMATCH, "{literal}");
		}
	}

	#[test]
	fn test_parse_double_overflow() {
		let err = parse_double("1E+400d").unwrap_err();
		assert_eq!(err.0.code, NON_FINITE);
		assert_eq!(err.0.fragment.text(), "1E+400");
	}

	#[test]
	fn test_double_literal_shortest() {
		let literal = |v: f64| Double::new(v).unwrap().to_literal();
		assert_eq!(literal(1.5), "1.5d");
		assert_eq!(literal(-0.25), "-0.25d");
		assert_eq!(literal(100.0), "100d");
		assert_eq!(literal(0.0), "0d");
		assert_eq!(literal(1.5e10), "15000000000d");
		assert_eq!(literal(1e21), "1E+21d");
		assert_eq!(literal(1.25e300), "1.25E+300d");
		assert_eq!(literal(0.000001), "0.000001d");
		assert_eq!(literal(1e-7), "1E-7d");
		assert_eq!(literal(-2.5e-10), "-2.5E-10d");
	}

	#[test]
	fn test_double_literal_fixed() {
		let literal = |v: f64| Double::new(v).unwrap().to_literal_with(FloatNotation::Fixed);
		assert_eq!(literal(1e21), "1000000000000000000000d");
		assert_eq!(literal(1e-7), "0.0000001d");
	}

	#[test]
	fn test_double_literal_reparses() {
		for literal in ["1.25E+300d", "1E-7d", "123.456d", "-9.875E-200d"] {
			let value = parse_double(literal).unwrap();
			assert_eq!(value.to_literal(), literal);
		}
	}

	#[test]
	fn test_double_display() {
		assert_eq!(Double::new(1e21).unwrap().to_string(), "1e+21");
		assert_eq!(Double::new(2.5).unwrap().to_string(), "2.5");
	}

	#[test]
	fn test_double_rejects_non_finite() {
		assert!(Double::new(f64::NAN).is_none());
		assert!(Double::new(f64::INFINITY).is_none());
	}

	#[test]
	fn test_parse_single() {
		assert_eq!(parse_single("2.5f").unwrap().value(), 2.5);
		assert_eq!(parse_single("-0.1f").unwrap().to_literal(), "-0.1f");
		assert_eq!(parse_single("0f").unwrap().value(), 0.0);
	}

	#[test]
	fn test_parse_single_grammar() {
		for literal in ["2.5", "2.5F", "1E+5f", "02f", "2.f"] {
			let err = parse_single(literal).unwrap_err();
			assert_eq!(err.0.code, GRAMMAR_MISMATCH, "{literal}");
		}
	}

	#[test]
	fn test_parse_single_overflow() {
		let literal = format!("4{}f", "0".repeat(40));
		assert_eq!(parse_single(&literal).unwrap_err().0.code, NON_FINITE);
	}

	#[test]
	fn test_single_literal_never_scientific() {
		let large = Single::new(1e30).unwrap();
		assert_eq!(large.to_literal(), format!("1{}f", "0".repeat(30)));
		let small = Single::new(1.5e-8).unwrap();
		assert_eq!(small.to_literal(), "0.000000015f");
		assert!(parse_single(&large.to_literal()).is_ok());
		assert!(parse_single(&small.to_literal()).is_ok());
	}
}
