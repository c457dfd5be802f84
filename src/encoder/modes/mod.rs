//! QR code data mode encoders
//!
//! This module contains payload packers for the four QR data modes:
//! - Numeric: digits (0-9), three per 10 bits
//! - Alphanumeric: upper-case letters, digits and nine symbols
//! - Byte: 8-bit data (Latin-1, UTF-8, binary, etc.)
//! - Kanji: Shift-JIS double-byte characters

/// Alphanumeric mode (0010): 0-9, A-Z, space, $%*+-./:
pub mod alphanumeric;
/// Byte mode (0100) and text-to-byte conversion
pub mod byte;
/// Kanji mode (1000) for Shift-JIS double-byte data
pub mod kanji;
/// Numeric mode (0001)
pub mod numeric;

pub use alphanumeric::AlphanumericEncoder;
pub use byte::{ByteEncoder, TextEncoding};
pub use kanji::{KanjiEncoder, KanjiTable};
pub use numeric::NumericEncoder;
