use super::bit_buffer::BitBuffer;
use super::modes::{
    AlphanumericEncoder, ByteEncoder, KanjiEncoder, KanjiTable, NumericEncoder, TextEncoding,
};
use super::tables;
use crate::error::{EncodeError, Result};
use crate::models::{Mode, Version};

/// Caller data handed to the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    /// Text, converted to bytes per mode (text encoding or Shift-JIS table)
    Text(&'a str),
    /// Raw bytes; Kanji mode reads them as Shift-JIS directly
    Bytes(&'a [u8]),
}

impl Payload<'_> {
    /// Characters as seen by numeric and alphanumeric packing
    fn chars(&self) -> Vec<char> {
        match self {
            Payload::Text(text) => text.chars().collect(),
            Payload::Bytes(bytes) => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(text: &'a str) -> Self {
        Payload::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Payload<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Payload::Bytes(bytes)
    }
}

/// One packed data segment: mode, character count and payload bits (no header)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    char_count: usize,
    bits: BitBuffer,
}

impl Segment {
    /// Pack `payload` in `mode`. Kanji text needs a Shift-JIS table.
    pub fn encode(
        mode: Mode,
        payload: Payload<'_>,
        text_encoding: TextEncoding,
        kanji_table: Option<&KanjiTable>,
    ) -> Result<Self> {
        match mode {
            Mode::Numeric => {
                let chars = payload.chars();
                Ok(Self::new(mode, chars.len(), NumericEncoder::encode(&chars)?))
            }
            Mode::Alphanumeric => {
                let chars = payload.chars();
                Ok(Self::new(
                    mode,
                    chars.len(),
                    AlphanumericEncoder::encode(&chars)?,
                ))
            }
            Mode::Byte => {
                let bytes = match payload {
                    Payload::Text(text) => text_encoding.to_bytes(text),
                    Payload::Bytes(bytes) => bytes.to_vec(),
                };
                Ok(Self::new(mode, bytes.len(), ByteEncoder::encode(&bytes)))
            }
            Mode::Kanji => {
                let bytes = match payload {
                    Payload::Text(text) => kanji_table
                        .ok_or_else(|| EncodeError::UnsupportedTextEncoding("SJIS".to_string()))?
                        .to_shift_jis(text),
                    Payload::Bytes(bytes) => bytes.to_vec(),
                };
                let bits = KanjiEncoder::encode(&bytes)?;
                Ok(Self::new(mode, KanjiEncoder::char_count(&bytes), bits))
            }
        }
    }

    fn new(mode: Mode, char_count: usize, bits: BitBuffer) -> Self {
        Self {
            mode,
            char_count,
            bits,
        }
    }

    /// Mode the payload was packed in
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Value written into the character count field
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Packed payload bits, without mode indicator or length field
    pub fn payload(&self) -> &BitBuffer {
        &self.bits
    }

    /// Whether the character count fits the length field at `version`
    pub fn count_fits(&self, version: Version) -> bool {
        let width = tables::length_bits(self.mode, version) as u32;
        (self.char_count as u64) < (1u64 << width)
    }

    /// Header (indicator + length field) plus payload, in bits
    pub fn total_bits(&self, version: Version) -> usize {
        4 + tables::length_bits(self.mode, version) as usize + self.bits.len()
    }

    /// Append mode indicator, character count and payload to `buffer`
    pub fn write_to(&self, buffer: &mut BitBuffer, version: Version) {
        buffer.append_bits(self.mode.indicator(), 4);
        buffer.append_bits(
            self.char_count as u32,
            tables::length_bits(self.mode, version),
        );
        buffer.append_buffer(&self.bits);
    }
}
