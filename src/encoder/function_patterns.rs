use super::tables;
use crate::models::{ModuleGrid, Version};

/// Finder, alignment and timing pattern placement
pub struct FunctionPatterns;

impl FunctionPatterns {
    /// Place every fixed structural pattern for `version`
    pub fn place_all(grid: &mut ModuleGrid, version: Version) {
        let size = grid.size();
        Self::place_finder(grid, 0, 0);
        Self::place_finder(grid, size - 7, 0);
        Self::place_finder(grid, 0, size - 7);
        Self::place_alignment(grid, version);
        Self::place_timing(grid);
    }

    /// 7x7 finder with top-left corner at (row, col) and its light separator where in bounds
    pub fn place_finder(grid: &mut ModuleGrid, row: usize, col: usize) {
        let size = grid.size() as isize;
        for r in -1..=7isize {
            for c in -1..=7isize {
                let (y, x) = (row as isize + r, col as isize + c);
                if y < 0 || y >= size || x < 0 || x >= size {
                    continue;
                }
                let ring = ((0..=6).contains(&r) && (c == 0 || c == 6))
                    || ((0..=6).contains(&c) && (r == 0 || r == 6));
                let center = (2..=4).contains(&r) && (2..=4).contains(&c);
                grid.set(y as usize, x as usize, ring || center);
            }
        }
    }

    /// 5x5 alignment patterns at every table coordinate pair whose center is still free
    pub fn place_alignment(grid: &mut ModuleGrid, version: Version) {
        let positions = tables::alignment_positions(version);
        for &row in positions {
            for &col in positions {
                if grid.is_set(row, col) {
                    continue;
                }
                for r in -2..=2isize {
                    for c in -2..=2isize {
                        let dark = r.abs() == 2 || c.abs() == 2 || (r == 0 && c == 0);
                        grid.set(
                            (row as isize + r) as usize,
                            (col as isize + c) as usize,
                            dark,
                        );
                    }
                }
            }
        }
    }

    /// Alternating timing strips on row 6 and column 6
    pub fn place_timing(grid: &mut ModuleGrid) {
        let size = grid.size();
        for i in 8..size - 8 {
            if !grid.is_set(i, 6) {
                grid.set(i, 6, i.is_multiple_of(2));
            }
            if !grid.is_set(6, i) {
                grid.set(6, i, i.is_multiple_of(2));
            }
        }
    }
}
