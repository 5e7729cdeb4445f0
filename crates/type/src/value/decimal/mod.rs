// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use bigdecimal::BigDecimal;

mod parse;

pub use parse::{parse_decimal, parse_decimal_with_precision};

/// A decimal kept as digit strings, so that leading zeros of the integer part
/// and trailing zeros of the fraction survive a round trip. `007.50m` and
/// `7.5m` are numerically equal but different values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
	negative: bool,
	integer: String,
	fraction: String,
}

impl Decimal {
	/// Builds a decimal from its digit strings; the integer part must
	/// contain at least one digit, the fraction may be empty
	pub fn new(negative: bool, integer: impl Into<String>, fraction: impl Into<String>) -> Option<Self> {
		let integer = integer.into();
		let fraction = fraction.into();
		if integer.is_empty() || !all_digits(&integer) || !all_digits(&fraction) {
			return None;
		}
		Some(Self {
			negative,
			integer,
			fraction,
		})
	}

	/// Builds a decimal with explicit digit counts: the integer part is cut
	/// or left-padded with zeros to `integer_len`, the fraction cut or
	/// right-padded to `fraction_len`
	pub fn padded(
		negative: bool,
		integer: &str,
		fraction: &str,
		integer_len: usize,
		fraction_len: usize,
	) -> Option<Self> {
		if integer_len == 0 {
			return None;
		}
		let integer = integer.get(..integer_len).unwrap_or(integer);
		let fraction = fraction.get(..fraction_len).unwrap_or(fraction);
		Self::new(
			negative,
			format!("{:0>width$}", integer, width = integer_len),
			format!("{:0<width$}", fraction, width = fraction_len),
		)
	}

	pub fn is_negative(&self) -> bool {
		self.negative
	}

	pub fn integer_digits(&self) -> &str {
		&self.integer
	}

	pub fn fraction_digits(&self) -> &str {
		&self.fraction
	}

	/// Number of significant digits, ignoring leading and trailing zeros
	pub fn precision(&self) -> usize {
		let digits = format!("{}{}", self.integer, self.fraction);
		digits.trim_start_matches('0').trim_end_matches('0').len().max(1)
	}

	/// Canonical literal, e.g. `-007.50m`; a `+` sign is not kept
	pub fn to_literal(&self) -> String {
		format!("{}m", self)
	}

	pub fn to_big_decimal(&self) -> BigDecimal {
		let text = if self.fraction.is_empty() {
			format!("{}{}", self.sign(), self.integer)
		} else {
			format!("{}{}.{}", self.sign(), self.integer, self.fraction)
		};
		// digit strings are validated on construction
		BigDecimal::from_str(&text).unwrap_or_default()
	}

	/// Compares the numbers, ignoring padding and the sign of zero
	pub fn numeric_eq(&self, other: &Decimal) -> bool {
		self.to_big_decimal() == other.to_big_decimal()
	}

	fn sign(&self) -> &'static str {
		if self.negative {
			"-"
		} else {
			""
		}
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.sign())?;
		f.write_str(&self.integer)?;
		if !self.fraction.is_empty() {
			write!(f, ".{}", self.fraction)?;
		}
		Ok(())
	}
}

fn all_digits(text: &str) -> bool {
	text.bytes().all(|b| b.is_ascii_digit())
}
