use super::{LINEAR_PRESCALE_RATIO_Y, LINEAR_QUIET_ZONE_Y, Symbology, pattern_bits};
use crate::error::{EncodeError, Result};

/// Right-hand (R) code per digit; left codes derive from it
const DIGIT_PATTERNS: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100", "1001110", "1010000", "1000100",
    "1001000", "1110100",
];

/// EAN-13 left-half parity per leading digit (O = odd, E = even)
const PARITY_PATTERNS: [&str; 10] = [
    "OOOOOO", "OOEOEE", "OOEEOE", "OOEEEO", "OEOOEE", "OEEOOE", "OEEEOO", "OEOEOE", "OEOEEO",
    "OEEOEO",
];

const SIDE_GUARD: &str = "101";
const MIDDLE_GUARD: &str = "01010";
const QUIET_ZONE: usize = 11;

#[derive(Debug, Clone, Copy)]
enum DigitCode {
    LeftOdd,
    LeftEven,
    Right,
}

fn digit_bits(digit: u8, code: DigitCode) -> Vec<bool> {
    let right = pattern_bits(DIGIT_PATTERNS[digit as usize]);
    match code {
        DigitCode::Right => right.collect(),
        DigitCode::LeftOdd => right.map(|dark| !dark).collect(),
        DigitCode::LeftEven => {
            let mut bits: Vec<bool> = right.collect();
            bits.reverse();
            bits
        }
    }
}

/// Parse the leading `count` digits of `data`; anything after them is ignored
fn leading_digits(data: &str, count: usize, symbology: &'static str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = data
        .chars()
        .take(count)
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| EncodeError::InvalidSymbolData {
                    symbology,
                    reason: format!("{c:?} is not a digit"),
                })
        })
        .collect::<Result<_>>()?;
    if digits.len() < count {
        return Err(EncodeError::InvalidSymbolData {
            symbology,
            reason: format!("needs {count} digits, got {}", digits.len()),
        });
    }
    Ok(digits)
}

/// Check digit: weights 3, 1, 3, ... from the rightmost digit
pub fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(index, &d)| d as u32 * if index.is_multiple_of(2) { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

fn assemble(left: &[(u8, DigitCode)], right: &[u8]) -> Vec<bool> {
    let mut bars: Vec<bool> = pattern_bits(SIDE_GUARD).collect();
    for &(digit, code) in left {
        bars.extend(digit_bits(digit, code));
    }
    bars.extend(pattern_bits(MIDDLE_GUARD));
    for &digit in right {
        bars.extend(digit_bits(digit, DigitCode::Right));
    }
    bars.extend(pattern_bits(SIDE_GUARD));
    bars
}

/// An EAN-13 symbol; the check digit is always recomputed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ean13 {
    digits: [u8; 13],
}

impl Ean13 {
    /// Takes the first 12 digits of `data` and appends the check digit
    pub fn new(data: &str) -> Result<Self> {
        let leading = leading_digits(data, 12, "EAN-13")?;
        let mut digits = [0u8; 13];
        digits[..12].copy_from_slice(&leading);
        digits[12] = check_digit(&leading);
        Ok(Self { digits })
    }

    /// All 13 digits, check digit last
    pub fn digits(&self) -> &[u8; 13] {
        &self.digits
    }

    /// Guards and digits as a single row of 95 modules
    pub fn pattern(&self) -> Vec<bool> {
        let parity = PARITY_PATTERNS[self.digits[0] as usize];
        let left: Vec<(u8, DigitCode)> = self.digits[1..7]
            .iter()
            .zip(parity.bytes())
            .map(|(&digit, p)| {
                let code = if p == b'E' {
                    DigitCode::LeftEven
                } else {
                    DigitCode::LeftOdd
                };
                (digit, code)
            })
            .collect();
        assemble(&left, &self.digits[7..])
    }
}

/// An EAN-8 symbol; the check digit is always recomputed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ean8 {
    digits: [u8; 8],
}

impl Ean8 {
    /// Takes the first 7 digits of `data` and appends the check digit
    pub fn new(data: &str) -> Result<Self> {
        let leading = leading_digits(data, 7, "EAN-8")?;
        let mut digits = [0u8; 8];
        digits[..7].copy_from_slice(&leading);
        digits[7] = check_digit(&leading);
        Ok(Self { digits })
    }

    /// All 8 digits, check digit last
    pub fn digits(&self) -> &[u8; 8] {
        &self.digits
    }

    /// Guards and digits as a single row of 67 modules
    pub fn pattern(&self) -> Vec<bool> {
        let left: Vec<(u8, DigitCode)> = self.digits[..4]
            .iter()
            .map(|&digit| (digit, DigitCode::LeftOdd))
            .collect();
        assemble(&left, &self.digits[4..])
    }
}

macro_rules! linear_symbology {
    ($type:ty) => {
        impl Symbology for $type {
            fn row_patterns(&self) -> Vec<Vec<bool>> {
                vec![self.pattern()]
            }

            fn quiet_zone_x(&self) -> usize {
                QUIET_ZONE
            }

            fn quiet_zone_y(&self) -> usize {
                LINEAR_QUIET_ZONE_Y
            }

            fn prescale_ratio_y(&self) -> Option<f64> {
                Some(LINEAR_PRESCALE_RATIO_Y)
            }
        }
    };
}

linear_symbology!(Ean13);
linear_symbology!(Ean8);
