use super::{LINEAR_PRESCALE_RATIO_Y, LINEAR_QUIET_ZONE_Y, Symbology, pattern_bits};
use crate::error::{EncodeError, Result};

const CHARACTERS: &str = "1234567890ABCDEFGHIJKLMNOPQRSTUVWXYZ-. *$/+%";

const SYMBOL_PATTERNS: [&str; 44] = [
    "110100101011", "101100101011", "110110010101", "101001101011",
    "110100110101", "101100110101", "101001011011", "110100101101",
    "101100101101", "101001101101", "110101001011", "101101001011",
    "110110100101", "101011001011", "110101100101", "101101100101",
    "101010011011", "110101001101", "101101001101", "101011001101",
    "110101010011", "101101010011", "110110101001", "101011010011",
    "110101101001", "101101101001", "101010110011", "110101011001",
    "101101011001", "101011011001", "110010101011", "100110101011",
    "110011010101", "100101101011", "110010110101", "100110110101",
    "100101011011", "110010101101", "100110101101", "100101101101",
    "100100100101", "100100101001", "100101001001", "101001001001",
];

/// Start/stop character wrapped around the data
const DELIMITER: char = '*';
const QUIET_ZONE: usize = 10;

/// A Code 39 symbol: data framed by `*` delimiters, symbols separated by one light module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code39 {
    symbol_ids: Vec<usize>,
}

impl Code39 {
    /// Map `data` to symbols; fails on characters outside the Code 39 set
    pub fn new(data: &str) -> Result<Self> {
        let framed = std::iter::once(DELIMITER)
            .chain(data.chars())
            .chain(std::iter::once(DELIMITER));
        let symbol_ids = framed
            .enumerate()
            .map(|(index, c)| {
                CHARACTERS.find(c).ok_or_else(|| EncodeError::InvalidSymbolData {
                    symbology: "Code 39",
                    reason: format!(
                        "character {c:?} at position {} is not encodable",
                        index.saturating_sub(1)
                    ),
                })
            })
            .collect::<Result<Vec<usize>>>()?;
        Ok(Self { symbol_ids })
    }

    /// Symbol ids, delimiters included
    pub fn symbol_ids(&self) -> &[usize] {
        &self.symbol_ids
    }

    /// The single row of bars
    pub fn pattern(&self) -> Vec<bool> {
        let mut bars = Vec::with_capacity(self.symbol_ids.len() * 13);
        for (i, &id) in self.symbol_ids.iter().enumerate() {
            if i > 0 {
                bars.push(false);
            }
            bars.extend(pattern_bits(SYMBOL_PATTERNS[id]));
        }
        bars
    }
}

impl Symbology for Code39 {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbology::row_strings;

    #[test]
    fn test_framing() {
        let code = Code39::new("A1").unwrap();
        // '*' = 39, 'A' = 10, '1' = 0
        assert_eq!(code.symbol_ids(), &[39, 10, 0, 39]);
    }

    #[test]
    fn test_pattern() {
        let code = Code39::new("").unwrap();
        assert_eq!(
            row_strings(&code.row_patterns()),
            vec!["100101101101".to_string() + "0" + "100101101101"]
        );
        let code = Code39::new("CODE39").unwrap();
        // 8 symbols of 12 modules plus 7 separators
        assert_eq!(code.pattern().len(), 8 * 12 + 7);
    }

    #[test]
    fn test_rejects_lowercase() {
        assert!(matches!(
            Code39::new("abc"),
            Err(EncodeError::InvalidSymbolData { symbology: "Code 39", .. })
        ));
    }

    #[test]
    fn test_layout_defaults() {
        let code = Code39::new("X").unwrap();
        assert_eq!(code.quiet_zone_x(), 10);
        assert_eq!(code.quiet_zone_y(), 0);
        assert_eq!(code.prescale_ratio_y(), Some(0.15));
    }
}
