// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod hex;
pub mod scan;

pub use scan::Scanner;
