// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Byte cursor over a literal. Grammar tokens are ASCII, so every position
/// the scanner stops at is a char boundary as long as only ASCII predicates
/// are used to advance.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
	input: &'a str,
	pos: usize,
}

impl<'a> Scanner<'a> {
	pub fn new(input: &'a str) -> Self {
		Self {
			input,
			pos: 0,
		}
	}

	pub fn position(&self) -> usize {
		self.pos
	}

	pub fn is_done(&self) -> bool {
		self.pos >= self.input.len()
	}

	pub fn rest(&self) -> &'a str {
		&self.input[self.pos..]
	}

	pub fn peek(&self) -> Option<u8> {
		self.input.as_bytes().get(self.pos).copied()
	}

	/// Consumes `token` if the input continues with it
	pub fn eat(&mut self, token: &str) -> bool {
		if self.rest().starts_with(token) {
			self.pos += token.len();
			true
		} else {
			false
		}
	}

	/// Consumes one byte out of `set`
	pub fn eat_one_of(&mut self, set: &[u8]) -> Option<u8> {
		let byte = self.peek().filter(|b| set.contains(b))?;
		self.pos += 1;
		Some(byte)
	}

	pub fn take_while(&mut self, predicate: impl Fn(u8) -> bool) -> &'a str {
		let start = self.pos;
		while self.peek().is_some_and(&predicate) {
			self.pos += 1;
		}
		&self.input[start..self.pos]
	}

	/// Zero or more ASCII digits
	pub fn digits(&mut self) -> &'a str {
		self.take_while(|b| b.is_ascii_digit())
	}

	/// Exactly `count` ASCII digits; nothing is consumed on failure
	pub fn digits_exact(&mut self, count: usize) -> Option<&'a str> {
		self.exact(count, |b| b.is_ascii_digit())
	}

	/// Exactly `count` hex digits; nothing is consumed on failure
	pub fn hex_exact(&mut self, count: usize) -> Option<&'a str> {
		self.exact(count, |b| b.is_ascii_hexdigit())
	}

	fn exact(&mut self, count: usize, predicate: impl Fn(u8) -> bool) -> Option<&'a str> {
		let end = self.pos + count;
		let candidate = self.input.as_bytes().get(self.pos..end)?;
		if !candidate.iter().all(|b| predicate(*b)) {
			return None;
		}
		let start = self.pos;
		self.pos = end;
		Some(&self.input[start..end])
	}
}

/// Unsigned decimal without superfluous leading zeros (`0` or `[1-9]\d*`)
pub fn is_canonical_unsigned(digits: &str) -> bool {
	match digits.as_bytes() {
		[] => false,
		[b'0'] => true,
		[first, rest @ ..] => (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit),
	}
}

/// Splits an optional leading sign off a numeric literal body
pub fn split_sign(text: &str) -> (bool, &str) {
	match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	}
}
