use crate::encoder::bit_buffer::BitBuffer;
use crate::error::{EncodeError, Result};
use crate::models::Mode;

const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Encode alphanumeric data
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Index of `c` in the 45-symbol set
    pub fn code(c: char) -> Option<u32> {
        ALPHANUMERIC_TABLE
            .iter()
            .position(|&entry| entry == c)
            .map(|index| index as u32)
    }

    /// Pack pairs into 11 bits and a trailing single into 6
    pub fn encode(chars: &[char]) -> Result<BitBuffer> {
        let codes = chars
            .iter()
            .enumerate()
            .map(|(position, &c)| {
                Self::code(c).ok_or(EncodeError::InvalidCharacter {
                    mode: Mode::Alphanumeric,
                    position,
                    value: c as u32,
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        let mut buffer = BitBuffer::new();
        for pair in codes.chunks(2) {
            match pair {
                [first, second] => buffer.append_bits(first * 45 + second, 11),
                [single] => buffer.append_bits(*single, 6),
                _ => {}
            }
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
    fn test_codes() {
        assert_eq!(AlphanumericEncoder::code('0'), Some(0));
        assert_eq!(AlphanumericEncoder::code('A'), Some(10));
        assert_eq!(AlphanumericEncoder::code(' '), Some(36));
        assert_eq!(AlphanumericEncoder::code(':'), Some(44));
        assert_eq!(AlphanumericEncoder::code('a'), None);
    }

    #[test]
    fn test_alphanumeric_encode() {
        // "AC-42": (10*45+12)=462, (41*45+4)=1849, 2
        let buffer = AlphanumericEncoder::encode(&chars("AC-42")).unwrap();
        let bits: String = (0..buffer.len())
            .map(|i| if buffer.get(i) { '1' } else { '0' })
            .collect();
        assert_eq!(bits, "0011100111011100111001000010");
    }

    #[test]
    fn test_hello_world_length() {
        let buffer = AlphanumericEncoder::encode(&chars("HELLO WORLD")).unwrap();
        assert_eq!(buffer.len(), 61);
        // First pair "HE" = 17*45 + 14 = 779
        assert_eq!(&buffer.as_bytes()[..1], &[(779u32 >> 3) as u8]);
    }

    #[test]
    fn test_rejects_lowercase() {
        assert_eq!(
            AlphanumericEncoder::encode(&chars("Hello")).unwrap_err(),
            EncodeError::InvalidCharacter {
                mode: Mode::Alphanumeric,
                position: 1,
                value: 'e' as u32,
            }
        );
    }
}
