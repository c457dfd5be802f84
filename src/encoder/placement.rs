use crate::models::{MaskPattern, ModuleGrid};

/// Zigzag placement of the codeword stream into data modules
pub struct DataPlacer;

impl DataPlacer {
    /// Fill every unset cell with codeword bits (MSB first), XORed with `mask`.
    ///
    /// Column pairs are walked right to left from the bottom-right corner, alternating
    /// upward and downward, skipping the vertical timing column. Cells past the end of
    /// `codewords` receive a zero bit before masking.
    pub fn place(grid: &mut ModuleGrid, codewords: &[u8], mask: MaskPattern) {
        let size = grid.size() as isize;
        let mut upward = true;
        let mut bit_index = 0usize;
        let mut col = size - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
            }
            for step in 0..size {
                let row = if upward { size - 1 - step } else { step };
                for c in 0..2 {
                    let (r, x) = (row as usize, (col - c) as usize);
                    if grid.is_set(r, x) {
                        continue;
                    }
                    let bit = codewords
                        .get(bit_index / 8)
                        .is_some_and(|byte| (byte >> (7 - bit_index % 8)) & 1 == 1);
                    grid.set(r, x, bit ^ mask.is_masked(r, x));
                    bit_index += 1;
                }
            }
            upward = !upward;
            col -= 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_patterns::FunctionPatterns;
    use crate::models::Version;

    #[test]
    fn test_fills_every_cell() {
        let version = Version::new(3).unwrap();
        let mut grid = ModuleGrid::new(version.size());
        FunctionPatterns::place_all(&mut grid, version);
        DataPlacer::place(&mut grid, &[0xFF; 10], MaskPattern::Pattern1);
        assert!(grid.into_matrix().is_ok());
    }

    #[test]
    fn test_first_bits_start_bottom_right() {
        let mut grid = ModuleGrid::new(21);
        // Mask 1 inverts even rows; row 20 is even
        DataPlacer::place(&mut grid, &[0b1000_0000], MaskPattern::Pattern1);
        assert!(!grid.is_dark(20, 20));
        assert!(grid.is_dark(20, 19));
        assert!(!grid.is_dark(19, 20));
        assert!(!grid.is_dark(19, 19));
    }

    #[test]
    fn test_zigzag_turns_at_top() {
        let mut grid = ModuleGrid::new(21);
        // Columns 20/19 take bits 0-41 upward; column 18/17 starts at row 0 going down,
        // so bit 44 lands at (1, 18)
        let data = [0, 0, 0, 0, 0, 0b0000_1000];
        DataPlacer::place(&mut grid, &data, MaskPattern::Pattern2);
        // Mask 2 inverts column 18 but not column 17
        assert!(grid.is_dark(0, 18));
        assert!(!grid.is_dark(0, 17));
        assert!(!grid.is_dark(1, 18));
        assert!(!grid.is_dark(1, 17));
        assert!(grid.is_dark(2, 18));
    }

    #[test]
    fn test_skips_set_cells() {
        let mut grid = ModuleGrid::new(21);
        grid.set(20, 20, true);
        DataPlacer::place(&mut grid, &[0b0100_0000], MaskPattern::Pattern2);
        // (20, 20) untouched; first bit goes to (20, 19), second to (19, 20)
        assert!(grid.is_dark(20, 20));
        assert!(!grid.is_dark(20, 19));
        assert!(grid.is_dark(19, 20));
    }
}
