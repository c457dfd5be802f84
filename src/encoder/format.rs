use super::bch::BchEncoder;
use crate::models::{ECLevel, MaskPattern, ModuleGrid};

/// Format information placement and read-back
pub struct FormatInfo;

impl FormatInfo {
    /// Write both copies of the 15-bit format word and the fixed dark module.
    /// In test mode every one of these cells is written light.
    pub fn place(grid: &mut ModuleGrid, ec_level: ECLevel, mask: MaskPattern, test: bool) {
        let size = grid.size();
        let bits = BchEncoder::format_bits(ec_level, mask);

        for i in 0..15 {
            let dark = !test && (bits >> i) & 1 == 1;

            // Vertical strip along column 8
            let row = match i {
                0..6 => i,
                6..8 => i + 1,
                _ => size - 15 + i,
            };
            grid.set(row, 8, dark);

            // Horizontal strip along row 8
            let col = match i {
                0..8 => size - i - 1,
                8 => 15 - i,
                _ => 14 - i,
            };
            grid.set(8, col, dark);
        }

        grid.set(size - 8, 8, !test);
    }

    /// Read back both copies of the format word: the one around the top-left finder,
    /// then the one split between the top-right and bottom-left finders
    pub fn read(grid: &ModuleGrid) -> [u16; 2] {
        let size = grid.size();
        let mut primary = 0u16;
        let mut secondary = 0u16;
        for i in 0..15 {
            let (first, second) = match i {
                0..6 => (grid.is_dark(i, 8), grid.is_dark(8, size - i - 1)),
                6..8 => (grid.is_dark(i + 1, 8), grid.is_dark(8, size - i - 1)),
                8 => (grid.is_dark(8, 7), grid.is_dark(size - 7, 8)),
                _ => (grid.is_dark(8, 14 - i), grid.is_dark(size - 15 + i, 8)),
            };
            primary |= (first as u16) << i;
            secondary |= (second as u16) << i;
        }
        [primary, secondary]
    }
}
