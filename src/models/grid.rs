use super::BitMatrix;
use crate::error::{EncodeError, Result};

/// Cell state while a symbol is under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet written by any construction pass
    #[default]
    Unset,
    /// Light module
    Light,
    /// Dark module
    Dark,
}

impl Module {
    /// Module for a boolean color (true = dark)
    pub fn from_dark(dark: bool) -> Self {
        if dark { Module::Dark } else { Module::Light }
    }

    /// Whether a construction pass has claimed this cell
    pub fn is_set(self) -> bool {
        self != Module::Unset
    }
}

/// Square arena of three-state modules indexed by (row, col)
#[derive(Debug, Clone)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<Module>,
}

impl ModuleGrid {
    /// Create an all-unset grid with `size` modules per side
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Module::Unset; size * size],
        }
    }

    /// Modules per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col); panics when out of range
    pub fn get(&self, row: usize, col: usize) -> Module {
        self.cells[row * self.size + col]
    }

    /// Whether the cell at (row, col) is already written
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_set()
    }

    /// Write a color at (row, col); panics when out of range
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        self.cells[row * self.size + col] = Module::from_dark(dark);
    }

    /// Dark test used by penalty scoring; unset cells count as light
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Module::Dark
    }

    /// Collapse into a two-state matrix, failing on the first unset cell
    pub fn into_matrix(self) -> Result<BitMatrix> {
        let mut matrix = BitMatrix::new(self.size);
        for (index, module) in self.cells.iter().enumerate() {
            let (row, col) = (index / self.size, index % self.size);
            match module {
                Module::Unset => return Err(EncodeError::IncompleteMatrix { row, col }),
                Module::Dark => matrix.set(row, col, true),
                Module::Light => {}
            }
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unset() {
        let grid = ModuleGrid::new(21);
        assert_eq!(grid.size(), 21);
        assert!(!grid.is_set(0, 0));
        assert!(!grid.is_set(20, 20));
    }

    #[test]
    fn test_into_matrix_rejects_unset_cells() {
        let mut grid = ModuleGrid::new(2);
        grid.set(0, 0, true);
        grid.set(0, 1, false);
        grid.set(1, 0, false);
        assert_eq!(
            grid.clone().into_matrix(),
            Err(EncodeError::IncompleteMatrix { row: 1, col: 1 })
        );

        grid.set(1, 1, true);
        let matrix = grid.into_matrix().unwrap();
        assert!(matrix.get(0, 0));
        assert!(!matrix.get(0, 1));
        assert!(matrix.get(1, 1));
        assert_eq!(matrix.count_dark(), 2);
    }
}
