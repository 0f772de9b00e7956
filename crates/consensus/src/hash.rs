//! 256-bit digest type and hex helpers.
//!
//! Digests are stored in internal (little-endian) byte order and displayed
//! reversed, the way block explorers print them.

use std::fmt::Write;

pub type Hash256 = [u8; 32];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    InvalidLength,
    InvalidHex,
}

impl std::fmt::Display for HexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexError::InvalidLength => write!(f, "hex string has invalid length"),
            HexError::InvalidHex => write!(f, "invalid hex string"),
        }
    }
}

impl std::error::Error for HexError {}

fn strip_hex_prefix(input: &str) -> &str {
    let hex = input.trim();
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

/// Parses a display-order hex digest, left-padding short input with zeros.
pub fn hash256_from_hex(input: &str) -> Result<Hash256, HexError> {
    let hex = strip_hex_prefix(input);
    if hex.is_empty() || hex.len() > 64 {
        return Err(HexError::InvalidLength);
    }

    let mut padded = String::with_capacity(64);
    for _ in 0..(64 - hex.len()) {
        padded.push('0');
    }
    padded.push_str(hex);

    let mut bytes = [0u8; 32];
    for (i, byte_out) in bytes.iter_mut().enumerate() {
        let start = i * 2;
        *byte_out = u8::from_str_radix(&padded[start..start + 2], 16)
            .map_err(|_| HexError::InvalidHex)?;
    }
    bytes.reverse();

    Ok(bytes)
}

pub fn hash256_to_hex(hash: &Hash256) -> String {
    let mut out = String::with_capacity(64);
    for byte in hash.iter().rev() {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Decodes raw hex bytes in the order written.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, HexError> {
    let hex = strip_hex_prefix(input);
    if hex.len() % 2 == 1 {
        return Err(HexError::InvalidLength);
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for i in (0..hex.len()).step_by(2) {
        let pair = hex.get(i..i + 2).ok_or(HexError::InvalidHex)?;
        let byte = u8::from_str_radix(pair, 16).map_err(|_| HexError::InvalidHex)?;
        bytes.push(byte);
    }
    Ok(bytes)
}

pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}
