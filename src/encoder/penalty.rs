use crate::models::ModuleGrid;

/// Rule (a) base penalty for a run of five
const RUN_PENALTY: u32 = 3;
/// Rule (b) penalty per 2x2 block
const BLOCK_PENALTY: u32 = 3;
/// Rule (c) penalty per finder-like window
const FINDER_PENALTY: u32 = 40;
/// Rule (d) penalty per 5% step away from half dark
const BALANCE_PENALTY: u32 = 10;

/// Dark, light, dark, dark, dark, light, dark
const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];

/// Sum of all four penalty rules
pub fn score(grid: &ModuleGrid) -> u32 {
    run_penalty(grid) + block_penalty(grid) + finder_penalty(grid) + balance_penalty(grid)
}

/// Every row and column run of five or more same-colored modules
pub fn run_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut total = 0;
    for i in 0..size {
        total += line_runs(size, |j| grid.is_dark(i, j));
        total += line_runs(size, |j| grid.is_dark(j, i));
    }
    total
}

fn line_runs(size: usize, dark_at: impl Fn(usize) -> bool) -> u32 {
    let mut total = 0;
    let mut run = 0u32;
    let mut previous = None;
    for j in 0..size {
        let dark = dark_at(j);
        if previous == Some(dark) {
            run += 1;
        } else {
            if run >= 5 {
                total += RUN_PENALTY + run - 5;
            }
            run = 1;
            previous = Some(dark);
        }
    }
    if run >= 5 {
        total += RUN_PENALTY + run - 5;
    }
    total
}

/// Every 2x2 block of one color (overlapping blocks count separately)
pub fn block_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut total = 0;
    for row in 0..size.saturating_sub(1) {
        for col in 0..size.saturating_sub(1) {
            let dark = grid.is_dark(row, col);
            if grid.is_dark(row, col + 1) == dark
                && grid.is_dark(row + 1, col) == dark
                && grid.is_dark(row + 1, col + 1) == dark
            {
                total += BLOCK_PENALTY;
            }
        }
    }
    total
}

/// Every 1:1:3:1:1 finder-like window in rows and columns
pub fn finder_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut total = 0;
    for i in 0..size {
        for start in 0..size.saturating_sub(6) {
            if (0..7).all(|k| grid.is_dark(i, start + k) == FINDER_LIKE[k]) {
                total += FINDER_PENALTY;
            }
            if (0..7).all(|k| grid.is_dark(start + k, i) == FINDER_LIKE[k]) {
                total += FINDER_PENALTY;
            }
        }
    }
    total
}

/// floor(|100 * dark / total - 50| / 5) * 10, in integer arithmetic
pub fn balance_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let total = size * size;
    if total == 0 {
        return 0;
    }
    let dark = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .filter(|&(row, col)| grid.is_dark(row, col))
        .count();
    let steps = (100 * dark).abs_diff(50 * total) / (5 * total);
    steps as u32 * BALANCE_PENALTY
}
