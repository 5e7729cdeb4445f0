// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Locates a piece of literal text for error reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
	/// No fragment information available
	#[default]
	None,

	/// Text taken from a literal, `column` being its byte offset in that
	/// literal
	Literal {
		text: String,
		column: usize,
	},
}

impl Fragment {
	/// Fragment spanning a whole literal
	pub fn literal(text: impl Into<String>) -> Self {
		Self::Literal {
			text: text.into(),
			column: 0,
		}
	}

	pub fn testing(text: impl Into<String>) -> Self {
		Self::literal(text)
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Literal {
				text,
				..
			} => text,
		}
	}

	pub fn column(&self) -> usize {
		match self {
			Fragment::None => 0,
			Fragment::Literal {
				column,
				..
			} => *column,
		}
	}

	/// Get a sub-fragment starting at the given offset with the given
	/// length
	pub fn sub_fragment(&self, offset: usize, length: usize) -> Fragment {
		match self {
			Fragment::None => Fragment::None,
			Fragment::Literal {
				text,
				column,
			} => {
				let end = std::cmp::min(offset + length, text.len());
				let sub_text = text.get(offset..end).unwrap_or("");
				Fragment::Literal {
					text: sub_text.to_string(),
					column: column + offset,
				}
			}
		}
	}
}
