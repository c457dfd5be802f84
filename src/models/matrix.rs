/// Compact square bit matrix holding a finished symbol (true = dark module)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-light matrix with `size` modules per side
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Modules per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (row, col); out-of-range cells read as light
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let index = row * self.size + col;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set module at (row, col); out-of-range writes are ignored
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if row >= self.size || col >= self.size {
            return;
        }
        let index = row * self.size + col;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if dark {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// One row as a vector of module colors
    pub fn row(&self, row: usize) -> Vec<bool> {
        (0..self.size).map(|col| self.get(row, col)).collect()
    }
}
