use crate::models::{ECLevel, MaskPattern, Version};

/// Format information generator x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// Version information generator x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;
/// XOR applied to format information so it is never all light
const FORMAT_MASK: u32 = 0x5412;

/// BCH encoder for format and version information words
pub struct BchEncoder;

impl BchEncoder {
    /// 15-bit format word: level and mask (5 bits), 10 parity bits, then masked
    pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
        let data = ((ec_level.format_bits() as u32) << 3) | mask.id() as u32;
        let word = (data << 10) | Self::remainder(data << 10, FORMAT_GENERATOR);
        (word ^ FORMAT_MASK) as u16
    }

    /// 18-bit version word: version number (6 bits) and 12 parity bits
    pub fn version_bits(version: Version) -> u32 {
        let data = version.number() as u32;
        (data << 12) | Self::remainder(data << 12, VERSION_GENERATOR)
    }

    /// Remainder of `value` divided by `generator` over GF(2)
    fn remainder(mut value: u32, generator: u32) -> u32 {
        let generator_degree = Self::degree(generator);
        while value != 0 && Self::degree(value) >= generator_degree {
            value ^= generator << (Self::degree(value) - generator_degree);
        }
        value
    }

    fn degree(value: u32) -> u32 {
        31 - value.leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bits() {
        assert_eq!(
            BchEncoder::format_bits(ECLevel::M, MaskPattern::Pattern0),
            0x5412
        );
        assert_eq!(
            BchEncoder::format_bits(ECLevel::L, MaskPattern::Pattern0),
            0x77C4
        );
        // H with mask 7 from the reference table: 000100000111011
        assert_eq!(
            BchEncoder::format_bits(ECLevel::H, MaskPattern::Pattern7),
            0b000100000111011
        );
    }

    #[test]
    fn test_format_bits_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for level in ECLevel::ALL {
            for mask in MaskPattern::ALL {
                assert!(seen.insert(BchEncoder::format_bits(level, mask)));
            }
        }
        assert_eq!(seen.len(), 32);
    }

    #[test]
    fn test_version_bits() {
        assert_eq!(BchEncoder::version_bits(Version::new(7).unwrap()), 0x07C94);
        assert_eq!(BchEncoder::version_bits(Version::new(8).unwrap()), 0x085BC);
        assert_eq!(BchEncoder::version_bits(Version::MAX), 0x28C69);
    }
}
