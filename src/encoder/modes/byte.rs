use std::fmt;
use std::str::FromStr;

use crate::encoder::bit_buffer::BitBuffer;
use crate::error::{EncodeError, Result};

/// How text is turned into bytes for byte mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// Low byte of each UTF-16 code unit
    #[default]
    Latin1,
    /// Full UTF-8
    Utf8,
}

impl TextEncoding {
    /// Convert text to bytes
    pub fn to_bytes(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Latin1 => text.encode_utf16().map(|unit| unit as u8).collect(),
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" | "default" => Ok(TextEncoding::Latin1),
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            _ => Err(EncodeError::UnsupportedTextEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Latin1 => f.write_str("latin1"),
            TextEncoding::Utf8 => f.write_str("utf-8"),
        }
    }
}

/// Encode byte mode data (8 bits per byte)
pub struct ByteEncoder;

impl ByteEncoder {
    /// Pack each byte into 8 bits
    pub fn encode(bytes: &[u8]) -> BitBuffer {
        let mut buffer = BitBuffer::new();
        for &byte in bytes {
            buffer.append_bits(byte as u32, 8);
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_encode() {
        let buffer = ByteEncoder::encode(b"HI");
        assert_eq!(buffer.len(), 16);
        assert_eq!(buffer.as_bytes(), &[0x48, 0x49]);
    }

    #[test]
    fn test_latin1_takes_low_byte() {
        assert_eq!(TextEncoding::Latin1.to_bytes("aé"), vec![0x61, 0xE9]);
        // U+53CB keeps only 0xCB
        assert_eq!(TextEncoding::Latin1.to_bytes("友"), vec![0xCB]);
    }

    #[test]
    fn test_utf8() {
        assert_eq!(TextEncoding::Utf8.to_bytes("é"), vec![0xC3, 0xA9]);
        assert_eq!(TextEncoding::Utf8.to_bytes("😀").len(), 4);
    }

    #[test]
    fn test_parse() {
        assert_eq!("UTF-8".parse::<TextEncoding>(), Ok(TextEncoding::Utf8));
        assert_eq!("latin1".parse::<TextEncoding>(), Ok(TextEncoding::Latin1));
        assert_eq!(
            "SJIS".parse::<TextEncoding>(),
            Err(EncodeError::UnsupportedTextEncoding("SJIS".to_string()))
        );
    }
}
