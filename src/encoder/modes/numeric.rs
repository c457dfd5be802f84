use crate::encoder::bit_buffer::BitBuffer;
use crate::error::{EncodeError, Result};
use crate::models::Mode;

/// Encode numeric data
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
pub struct NumericEncoder;

impl NumericEncoder {
    /// Pack digit triples into 10 bits, pairs into 7 and a single digit into 4
    pub fn encode(chars: &[char]) -> Result<BitBuffer> {
        let mut buffer = BitBuffer::new();
        for (group_index, group) in chars.chunks(3).enumerate() {
            let mut value = 0u32;
            for (offset, &c) in group.iter().enumerate() {
                let digit = c.to_digit(10).ok_or(EncodeError::InvalidCharacter {
                    mode: Mode::Numeric,
                    position: group_index * 3 + offset,
                    value: c as u32,
                })?;
                value = value * 10 + digit;
            }
            let bits = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            buffer.append_bits(value, bits);
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_numeric_encode() {
        // 012 -> 0000001100, 345 -> 0101011001, 67 -> 1000011
        let buffer = NumericEncoder::encode(&chars("01234567")).unwrap();
        assert_eq!(buffer.len(), 27);
        let bits: String = (0..buffer.len())
            .map(|i| if buffer.get(i) { '1' } else { '0' })
            .collect();
        assert_eq!(bits, "000000110001010110011000011");
    }

    #[test]
    fn test_single_leftover_digit() {
        let buffer = NumericEncoder::encode(&chars("1234")).unwrap();
        assert_eq!(buffer.len(), 14);
        assert_eq!(buffer.len(), Mode::Numeric.payload_bits(4));
    }

    #[test]
    fn test_rejects_non_digit() {
        assert_eq!(
            NumericEncoder::encode(&chars("12a4")).unwrap_err(),
            EncodeError::InvalidCharacter {
                mode: Mode::Numeric,
                position: 2,
                value: 'a' as u32,
            }
        );
        // Non-ASCII digits are not numeric-mode digits
        assert!(NumericEncoder::encode(&chars("١")).is_err());
    }

    #[test]
    fn test_empty() {
        assert!(NumericEncoder::encode(&[]).unwrap().is_empty());
    }
}
