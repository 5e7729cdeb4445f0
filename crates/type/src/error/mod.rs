// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{fragment::Fragment, value::Type};

mod diagnostic;
mod render;

pub use diagnostic::{
	GRAMMAR_MISMATCH, INVALID_CALENDAR_DATE, INVALID_OFFSET, INVALID_TIME, NON_FINITE, OUT_OF_RANGE,
	PRECISION_EXCEEDED, UNRECOGNIZED, YEAR_BEFORE_MINIMUM,
};
pub use render::DefaultRenderer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn code(&self) -> &str {
		&self.0.code
	}

	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	/// The literal did not have the structural shape of the attempted type
	pub fn is_grammar_mismatch(&self) -> bool {
		self.0.code == GRAMMAR_MISMATCH
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&DefaultRenderer::render_string(&self.0))
	}
}

impl std::error::Error for Error {}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Why a structurally well-formed literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticKind {
	OutOfRange,
	NonFinite,
	YearBeforeMinimum,
	InvalidCalendarDate,
	InvalidTime,
	InvalidOffset,
	PrecisionExceeded,
}

impl Display for SemanticKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			SemanticKind::OutOfRange => f.write_str("value out of range"),
			SemanticKind::NonFinite => f.write_str("value is not finite"),
			SemanticKind::YearBeforeMinimum => f.write_str("year before 1753"),
			SemanticKind::InvalidCalendarDate => f.write_str("invalid calendar date"),
			SemanticKind::InvalidTime => f.write_str("invalid time of day"),
			SemanticKind::InvalidOffset => f.write_str("invalid UTC offset"),
			SemanticKind::PrecisionExceeded => f.write_str("precision exceeded"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("literal does not match the {ty} grammar")]
	GrammarMismatch {
		ty: Type,
		fragment: Fragment,
	},

	#[error("{message}")]
	SemanticInvalid {
		ty: Type,
		kind: SemanticKind,
		message: String,
		fragment: Fragment,
	},

	#[error("literal does not match any EDM primitive type")]
	Unrecognized {
		fragment: Fragment,
		cause: Option<Box<Diagnostic>>,
	},
}

impl TypeError {
	pub(crate) fn grammar(ty: Type, literal: &str) -> Self {
		TypeError::GrammarMismatch {
			ty,
			fragment: Fragment::literal(literal),
		}
	}

	pub(crate) fn semantic(ty: Type, kind: SemanticKind, message: impl Into<String>, fragment: Fragment) -> Self {
		TypeError::SemanticInvalid {
			ty,
			kind,
			message: message.into(),
			fragment,
		}
	}
}
