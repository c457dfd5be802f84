use std::collections::HashMap;

use crate::encoder::bit_buffer::BitBuffer;
use crate::error::{EncodeError, Result};
use crate::models::Mode;

/// Character used for text the table cannot map
const UNKNOWN_CHAR: u8 = b'?';

/// Sanity probe every usable table must satisfy
const PROBE_CHAR: char = '\u{53CB}';
const PROBE_CODE: u16 = 0x9746;

/// Unicode to Shift-JIS conversion table
#[derive(Debug, Clone)]
pub struct KanjiTable {
    map: HashMap<char, u16>,
}

impl KanjiTable {
    /// Build a table from (character, Shift-JIS code) pairs.
    ///
    /// Fails with `UnsupportedTextEncoding` unless the table maps U+53CB to 0x9746.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, u16)>,
    {
        let table = Self {
            map: pairs.into_iter().collect(),
        };
        if table.map.get(&PROBE_CHAR) != Some(&PROBE_CODE) {
            return Err(EncodeError::UnsupportedTextEncoding("SJIS".to_string()));
        }
        Ok(table)
    }

    /// Convert text to Shift-JIS bytes. ASCII passes through, unmapped characters become `?`.
    pub fn to_shift_jis(&self, text: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(text.len() * 2);
        for c in text.chars() {
            if (c as u32) < 0x80 {
                bytes.push(c as u8);
                continue;
            }
            match self.map.get(&c) {
                Some(&code) if code <= 0xFF => bytes.push(code as u8),
                Some(&code) => {
                    bytes.push((code >> 8) as u8);
                    bytes.push(code as u8);
                }
                None => bytes.push(UNKNOWN_CHAR),
            }
        }
        bytes
    }
}

/// Encode Kanji data: one 13-bit value per byte pair
pub struct KanjiEncoder;

impl KanjiEncoder {
    /// Character count for `bytes` (byte pairs)
    pub fn char_count(bytes: &[u8]) -> usize {
        bytes.len() / 2
    }

    /// Pack each Shift-JIS double byte into 13 bits
    pub fn encode(bytes: &[u8]) -> Result<BitBuffer> {
        let mut buffer = BitBuffer::new();
        let mut pairs = bytes.chunks_exact(2);
        for (index, pair) in pairs.by_ref().enumerate() {
            let code = ((pair[0] as u32) << 8) | pair[1] as u32;
            let shifted = match code {
                0x8140..=0x9FFC => code - 0x8140,
                0xE040..=0xEBBF => code - 0xC140,
                _ => {
                    return Err(EncodeError::InvalidCharacter {
                        mode: Mode::Kanji,
                        position: index * 2,
                        value: code,
                    });
                }
            };
            buffer.append_bits((shifted >> 8) * 0xC0 + (shifted & 0xFF), 13);
        }
        if let [odd] = pairs.remainder() {
            return Err(EncodeError::InvalidCharacter {
                mode: Mode::Kanji,
                position: bytes.len() - 1,
                value: *odd as u32,
            });
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> KanjiTable {
        KanjiTable::from_pairs([('\u{53CB}', 0x9746), ('\u{70B9}', 0x935F), ('\u{FF71}', 0xB1)])
            .unwrap()
    }

    #[test]
    fn test_table_requires_probe() {
        assert_eq!(
            KanjiTable::from_pairs([('\u{70B9}', 0x935F)]).unwrap_err(),
            EncodeError::UnsupportedTextEncoding("SJIS".to_string())
        );
    }

    #[test]
    fn test_to_shift_jis() {
        let table = sample_table();
        assert_eq!(table.to_shift_jis("\u{53CB}"), vec![0x97, 0x46]);
        assert_eq!(table.to_shift_jis("A\u{FF71}"), vec![b'A', 0xB1]);
        assert_eq!(table.to_shift_jis("\u{00E9}"), vec![b'?']);
    }

    #[test]
    fn test_kanji_encode() {
        // 0x935F -> 0x121F -> 0x12 * 0xC0 + 0x1F = 0xD9F
        // 0xE4AA -> 0x236A -> 0x23 * 0xC0 + 0x6A = 0x1AAA
        let buffer = KanjiEncoder::encode(&[0x93, 0x5F, 0xE4, 0xAA]).unwrap();
        assert_eq!(buffer.len(), 26);
        let value = |start: usize| {
            (start..start + 13).fold(0u32, |acc, i| (acc << 1) | buffer.get(i) as u32)
        };
        assert_eq!(value(0), 0x0D9F);
        assert_eq!(value(13), 0x1AAA);
        assert_eq!(KanjiEncoder::char_count(&[0x93, 0x5F, 0xE4, 0xAA]), 2);
    }

    #[test]
    fn test_rejects_out_of_range_and_odd_bytes() {
        assert_eq!(
            KanjiEncoder::encode(&[0x41, 0x42]).unwrap_err(),
            EncodeError::InvalidCharacter {
                mode: Mode::Kanji,
                position: 0,
                value: 0x4142,
            }
        );
        assert_eq!(
            KanjiEncoder::encode(&[0x93, 0x5F, 0x93]).unwrap_err(),
            EncodeError::InvalidCharacter {
                mode: Mode::Kanji,
                position: 2,
                value: 0x93,
            }
        );
    }
}
