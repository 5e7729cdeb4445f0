// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Result, error::TypeError, value::Type};

/// `'...'` where a quote inside the text is written as `''`
pub fn parse_string(literal: &str) -> Result<String> {
	let grammar = || crate::Error::from(TypeError::grammar(Type::String, literal));

	let body = literal
		.strip_prefix('\'')
		.and_then(|rest| rest.strip_suffix('\''))
		.filter(|_| literal.len() >= 2)
		.ok_or_else(grammar)?;

	let mut result = String::with_capacity(body.len());
	let mut chars = body.chars();
	while let Some(c) = chars.next() {
		if c == '\'' {
			// a lone quote would have ended the literal
			if chars.next() != Some('\'') {
				return Err(grammar());
			}
		}
		result.push(c);
	}
	Ok(result)
}

pub fn string_literal(text: &str) -> String {
	format!("'{}'", text.replace('\'', "''"))
}
