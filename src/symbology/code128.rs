use super::{LINEAR_PRESCALE_RATIO_Y, LINEAR_QUIET_ZONE_Y, Symbology, pattern_bits};
use crate::error::{EncodeError, Result};

/// Bar patterns by symbol id; the stop symbol (106) is two modules longer
const SYMBOL_PATTERNS: [&str; 107] = [
    "11011001100", "11001101100", "11001100110", "10010011000",
    "10010001100", "10001001100", "10011001000", "10011000100",
    "10001100100", "11001001000", "11001000100", "11000100100",
    "10110011100", "10011011100", "10011001110", "10111001100",
    "10011101100", "10011100110", "11001110010", "11001011100",
    "11001001110", "11011100100", "11001110100", "11101101110",
    "11101001100", "11100101100", "11100100110", "11101100100",
    "11100110100", "11100110010", "11011011000", "11011000110",
    "11000110110", "10100011000", "10001011000", "10001000110",
    "10110001000", "10001101000", "10001100010", "11010001000",
    "11000101000", "11000100010", "10110111000", "10110001110",
    "10001101110", "10111011000", "10111000110", "10001110110",
    "11101110110", "11010001110", "11000101110", "11011101000",
    "11011100010", "11011101110", "11101011000", "11101000110",
    "11100010110", "11101101000", "11101100010", "11100011010",
    "11101111010", "11001000010", "11110001010", "10100110000",
    "10100001100", "10010110000", "10010000110", "10000101100",
    "10000100110", "10110010000", "10110000100", "10011010000",
    "10011000010", "10000110100", "10000110010", "11000010010",
    "11001010000", "11110111010", "11000010100", "10001111010",
    "10100111100", "10010111100", "10010011110", "10111100100",
    "10011110100", "10011110010", "11110100100", "11110010100",
    "11110010010", "11011011110", "11011110110", "11110110110",
    "10101111000", "10100011110", "10001011110", "10111101000",
    "10111100010", "11110101000", "11110100010", "10111011110",
    "10111101110", "11101011110", "11110101110", "11010000100",
    "11010010000", "11010011100", "1100011101011",
];

const START_B: usize = 104;
const STOP: usize = 106;
const CHECK_MODULUS: usize = 103;
const QUIET_ZONE: usize = 10;

/// A Code 128B symbol: start B, data, modulo-103 check symbol, stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128 {
    symbol_ids: Vec<usize>,
}

impl Code128 {
    /// Map `data` to symbols; every character must be printable ASCII
    pub fn new(data: &str) -> Result<Self> {
        let mut symbol_ids = Vec::with_capacity(data.len() + 3);
        symbol_ids.push(START_B);
        for (position, c) in data.chars().enumerate() {
            if !(' '..='~').contains(&c) {
                return Err(EncodeError::InvalidSymbolData {
                    symbology: "Code 128",
                    reason: format!("character {c:?} at position {position} is not in set B"),
                });
            }
            symbol_ids.push(c as usize - ' ' as usize);
        }
        symbol_ids.push(Self::check_symbol(&symbol_ids));
        symbol_ids.push(STOP);
        Ok(Self { symbol_ids })
    }

    /// Weighted modulo-103 sum; the start symbol and the first data symbol both weigh 1
    pub fn check_symbol(symbol_ids: &[usize]) -> usize {
        symbol_ids
            .iter()
            .enumerate()
            .map(|(index, &id)| id * index.max(1))
            .sum::<usize>()
            % CHECK_MODULUS
    }

    /// Symbol ids: start, data, check, stop
    pub fn symbol_ids(&self) -> &[usize] {
        &self.symbol_ids
    }

    /// The single row of bars
    pub fn pattern(&self) -> Vec<bool> {
        self.symbol_ids
            .iter()
            .flat_map(|&id| pattern_bits(SYMBOL_PATTERNS[id]))
            .collect()
    }
}

impl Symbology for Code128 {
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
