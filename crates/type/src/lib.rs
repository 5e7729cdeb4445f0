// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! EDM primitive values and their OData literal form.
//!
//! Every value is built either by parsing a literal (see [`literal`]) or
//! through a validating constructor, so a [`Value`] always holds data its
//! type's grammar accepts.

pub mod config;
pub mod error;
pub mod fragment;
pub mod literal;
pub(crate) mod util;
pub mod value;

pub use config::{Codec, CodecConfig, FloatNotation};
pub use error::{Diagnostic, Error, IntoDiagnostic, SemanticKind, TypeError};
pub use fragment::Fragment;
pub use literal::{format_value, parse_as, parse_value, render_value, try_parse};
pub use value::{
	Blob, DateTime, DateTimeOffset, Decimal, Double, GetType, Guid, Single, Time, Timestamp, Type, UtcOffset,
	Value,
};

pub type Result<T> = std::result::Result<T, Error>;
