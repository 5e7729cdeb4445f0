// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

const LOWER: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hex encoding, two digits per byte
pub fn encode(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		out.push(LOWER[(byte >> 4) as usize] as char);
		out.push(LOWER[(byte & 0x0f) as usize] as char);
	}
	out
}

fn nibble(digit: u8) -> Option<u8> {
	match digit {
		b'0'..=b'9' => Some(digit - b'0'),
		b'a'..=b'f' => Some(digit - b'a' + 10),
		b'A'..=b'F' => Some(digit - b'A' + 10),
		_ => None,
	}
}

/// Decodes an even-length hex string in either case
pub fn decode(hex: &str) -> Option<Vec<u8>> {
	let digits = hex.as_bytes();
	if digits.len() % 2 != 0 {
		return None;
	}
	digits.chunks_exact(2).map(|pair| Some(nibble(pair[0])? << 4 | nibble(pair[1])?)).collect()
}
