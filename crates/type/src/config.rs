// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{Result, literal, value::{Type, Value}};

/// How a Double literal places its decimal point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatNotation {
	/// Shortest round-trip digits; exponent form below 1e-6 and from 1e21
	#[default]
	Shortest,
	/// Never use the exponent form
	Fixed,
}

/// Knobs of the literal codec. The default accepts decimals of any size
/// and writes doubles in their shortest form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
	/// Maximum number of significant digits of a Decimal literal
	pub decimal_precision: Option<u32>,
	pub double_notation: FloatNotation,
}

impl CodecConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn decimal_precision(mut self, precision: u32) -> Self {
		self.decimal_precision = Some(precision);
		self
	}

	pub fn double_notation(mut self, notation: FloatNotation) -> Self {
		self.double_notation = notation;
		self
	}
}

/// Parses and formats literals under a fixed [`CodecConfig`]
#[derive(Debug, Clone, Default)]
pub struct Codec {
	config: CodecConfig,
}

impl Codec {
	pub fn new(config: CodecConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &CodecConfig {
		&self.config
	}

	/// Tries every type in dispatch order
	pub fn parse(&self, literal: &str) -> Result<Value> {
		literal::dispatch(literal, &self.config)
	}

	/// Parses `literal` as a value of `ty` only
	pub fn parse_as(&self, ty: Type, literal: &str) -> Result<Value> {
		literal::recognize(ty, literal, &self.config)
	}

	pub fn format(&self, value: &Value) -> String {
		match value {
			Value::Double(v) => v.to_literal_with(self.config.double_notation),
			v => v.to_literal(),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::error::{PRECISION_EXCEEDED, UNRECOGNIZED};

	#[test]
	fn test_default() {
		let config = CodecConfig::default();
		assert_eq!(config.decimal_precision, None);
		assert_eq!(config.double_notation, FloatNotation::Shortest);
	}

	#[test]
	fn test_builder() {
		let config = CodecConfig::new().decimal_precision(10).double_notation(FloatNotation::Fixed);
		assert_eq!(config.decimal_precision, Some(10));
		assert_eq!(config.double_notation, FloatNotation::Fixed);
	}

	#[test]
	fn test_deserialize_partial() {
		let config: CodecConfig = serde_json::from_str(r#"{"double_notation":"fixed"}"#).unwrap();
		assert_eq!(config.decimal_precision, None);
		assert_eq!(config.double_notation, FloatNotation::Fixed);

		let config: CodecConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, CodecConfig::default());
	}

	#[test]
	fn test_codec_fixed_doubles() {
		let codec = Codec::new(CodecConfig::new().double_notation(FloatNotation::Fixed));
		let value = codec.parse("1E+21d").unwrap();
		assert_eq!(codec.format(&value), "1000000000000000000000d");
		assert_eq!(Codec::default().format(&value), "1E+21d");
	}

	#[test]
	fn test_codec_decimal_precision() {
		let codec = Codec::new(CodecConfig::new().decimal_precision(4));
		assert!(codec.parse("12.34m").is_ok());

		let err = codec.parse("12.345m").unwrap_err();
		assert_eq!(err.0.code, UNRECOGNIZED);
		assert_eq!(err.0.cause.map(|c| c.code), Some(PRECISION_EXCEEDED.to_string()));

		let err = codec.parse_as(Type::Decimal, "12.345m").unwrap_err();
		assert_eq!(err.0.code, PRECISION_EXCEEDED);
	}
}
