//! Row-pattern view of symbols
//!
//! Every symbology reduces to equal-length rows of modules (`true` = dark),
//! which is all a renderer needs besides the layout in [`layout`].
//! - QR codes: one row per matrix row
//! - Code 39, Code 128B, EAN-8, EAN-13: a single row of bars

/// Code 128, character set B (printable ASCII)
pub mod code128;
/// Code 39 (full symbol set without extended ASCII)
pub mod code39;
/// EAN-13 and EAN-8
pub mod ean;
pub mod layout;

pub use code39::Code39;
pub use code128::Code128;
pub use ean::{Ean8, Ean13};
pub use layout::{Layout, LayoutOptions, Run};

use crate::models::QrCode;

/// A barcode that can be drawn from its row patterns
pub trait Symbology {
    /// Equal-length rows of modules, top to bottom; `true` = dark
    fn row_patterns(&self) -> Vec<Vec<bool>>;

    /// Default horizontal quiet zone in modules
    fn quiet_zone_x(&self) -> usize;

    /// Default vertical quiet zone in modules
    fn quiet_zone_y(&self) -> usize;

    /// Default horizontal prescale as a fraction of the unscaled height
    fn prescale_ratio_x(&self) -> Option<f64> {
        None
    }

    /// Default vertical prescale as a fraction of the unscaled width
    fn prescale_ratio_y(&self) -> Option<f64> {
        None
    }
}

/// Quiet zone around QR symbols
const QR_QUIET_ZONE: usize = 4;

/// Quiet zone above and below linear symbols
pub(crate) const LINEAR_QUIET_ZONE_Y: usize = 0;
/// Bar height of linear symbols relative to their width
pub(crate) const LINEAR_PRESCALE_RATIO_Y: f64 = 0.15;

impl Symbology for QrCode {
    fn row_patterns(&self) -> Vec<Vec<bool>> {
        (0..self.size()).map(|row| self.modules.row(row)).collect()
    }

    fn quiet_zone_x(&self) -> usize {
        QR_QUIET_ZONE
    }

    fn quiet_zone_y(&self) -> usize {
        QR_QUIET_ZONE
    }
}

/// Expand a `'0'`/`'1'` pattern string into modules
pub(crate) fn pattern_bits(pattern: &str) -> impl Iterator<Item = bool> + '_ {
    pattern.bytes().map(|b| b == b'1')
}

/// Render row patterns as `'0'`/`'1'` strings
pub fn row_strings(rows: &[Vec<bool>]) -> Vec<String> {
    rows.iter()
        .map(|row| row.iter().map(|&dark| if dark { '1' } else { '0' }).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ECLevel, EncodeOptions, encode_with};

    #[test]
    fn test_qr_row_patterns() {
        let options = EncodeOptions::new().with_ec_level(ECLevel::Q);
        let qr = encode_with("HELLO WORLD", &options).unwrap();
        let rows = qr.row_patterns();
        assert_eq!(rows.len(), 21);
        assert!(rows.iter().all(|row| row.len() == 21));
        assert!(row_strings(&rows)[0].starts_with("11111110"));
        assert_eq!(qr.quiet_zone_x(), 4);
        assert_eq!(qr.prescale_ratio_y(), None);
    }

    #[test]
    fn test_pattern_bits() {
        let bits: Vec<bool> = pattern_bits("1001").collect();
        assert_eq!(bits, vec![true, false, false, true]);
    }
}
