// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod float;
mod integer;

pub use float::{Double, Single, parse_double, parse_single};
pub use integer::{parse_byte, parse_int16, parse_int32, parse_int64, parse_sbyte};
