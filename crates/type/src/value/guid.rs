// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use uuid::Uuid;

use crate::{Result, error::TypeError, util::Scanner, value::Type};

const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// A hyphenated 8-4-4-4-12 hex identifier. The text is kept as written, so
/// upper case input stays upper case on output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid(String);

impl Guid {
	/// Accepts the bare 36 character form
	pub fn parse(text: &str) -> Option<Self> {
		let mut scanner = Scanner::new(text);
		for (i, len) in GROUPS.iter().enumerate() {
			if i > 0 && !scanner.eat("-") {
				return None;
			}
			scanner.hex_exact(*len)?;
		}
		scanner.is_done().then(|| Self(text.to_string()))
	}

	pub fn from_uuid(uuid: Uuid) -> Self {
		Self(uuid.hyphenated().to_string())
	}

	pub fn to_uuid(&self) -> Uuid {
		// the text is validated hex in 8-4-4-4-12 groups
		Uuid::parse_str(&self.0).unwrap_or_default()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn to_literal(&self) -> String {
		format!("guid'{}'", self.0)
	}
}

impl Display for Guid {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<Uuid> for Guid {
	fn from(uuid: Uuid) -> Self {
		Self::from_uuid(uuid)
	}
}

/// `guid'XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX'`
pub fn parse_guid(literal: &str) -> Result<Guid> {
	literal.strip_prefix("guid'")
		.and_then(|rest| rest.strip_suffix('\''))
		.and_then(Guid::parse)
		.ok_or_else(|| TypeError::grammar(Type::Guid, literal).into())
}
