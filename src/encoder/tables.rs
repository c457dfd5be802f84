use crate::models::{ECLevel, Mode, Version};

/// One Reed-Solomon block shape: total codewords and how many of them carry data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsBlock {
    /// Codewords in the block, data and EC
    pub total: usize,
    /// Data codewords in the block
    pub data: usize,
}

impl RsBlock {
    /// Error correction codewords in this block
    pub fn ec(&self) -> usize {
        self.total - self.data
    }
}

// Tables from the QR Code specification (Model 2) via Nayuki QR Code generator.
// Index: [ec_level][version]; column 0 is unused.
const ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Alignment pattern center coordinates, index = version - 1
const ALIGNMENT_POSITIONS: [&[usize]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// Length field widths per mode, indexed by version range (1-9, 10-26, 27-40)
const LENGTH_BITS: [[u8; 3]; 4] = [
    [10, 12, 14], // Numeric
    [9, 11, 13],  // Alphanumeric
    [8, 16, 16],  // Byte
    [8, 10, 12],  // Kanji
];

/// Number of modules available for data and EC codewords (includes remainder bits)
pub fn raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Total codewords (data + EC) in the symbol
pub fn raw_codewords(version: Version) -> usize {
    raw_data_modules(version) / 8
}

/// Block shapes for (version, level): short blocks first, then blocks one data codeword longer
pub fn rs_blocks(version: Version, ec_level: ECLevel) -> Vec<RsBlock> {
    let v = version.number() as usize;
    let idx = ec_level.ordinal();
    let ecc = ECC_CODEWORDS_PER_BLOCK[idx][v] as usize;
    let num_blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize;
    let raw = raw_codewords(version);
    let num_short = num_blocks - raw % num_blocks;
    let short_total = raw / num_blocks;

    (0..num_blocks)
        .map(|i| {
            let total = if i < num_short {
                short_total
            } else {
                short_total + 1
            };
            RsBlock {
                total,
                data: total - ecc,
            }
        })
        .collect()
}

/// Data codewords available for (version, level)
pub fn data_codewords(version: Version, ec_level: ECLevel) -> usize {
    rs_blocks(version, ec_level).iter().map(|b| b.data).sum()
}

/// Width of the character count field for `mode` at `version`
pub fn length_bits(mode: Mode, version: Version) -> u8 {
    let range = (version.number() as usize + 7) / 17;
    let row = match mode {
        Mode::Numeric => 0,
        Mode::Alphanumeric => 1,
        Mode::Byte => 2,
        Mode::Kanji => 3,
    };
    LENGTH_BITS[row][range]
}

/// Alignment pattern center coordinates (shared by rows and columns)
pub fn alignment_positions(version: Version) -> &'static [usize] {
    ALIGNMENT_POSITIONS[version.number() as usize - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_version1_blocks() {
        assert_eq!(
            rs_blocks(v(1), ECLevel::L),
            vec![RsBlock { total: 26, data: 19 }]
        );
        assert_eq!(data_codewords(v(1), ECLevel::M), 16);
        assert_eq!(data_codewords(v(1), ECLevel::Q), 13);
        assert_eq!(
            rs_blocks(v(1), ECLevel::H),
            vec![RsBlock { total: 26, data: 9 }]
        );
    }

    #[test]
    fn test_two_block_shapes() {
        let blocks = rs_blocks(v(5), ECLevel::Q);
        assert_eq!(
            blocks,
            vec![
                RsBlock { total: 33, data: 15 },
                RsBlock { total: 33, data: 15 },
                RsBlock { total: 34, data: 16 },
                RsBlock { total: 34, data: 16 },
            ]
        );
        assert!(blocks.iter().all(|b| b.ec() == 18));
    }

    /// Run-length view of block shapes: (count, total, data) per distinct shape
    fn shape_groups(blocks: &[RsBlock]) -> Vec<[usize; 3]> {
        let mut groups: Vec<[usize; 3]> = Vec::new();
        for block in blocks {
            match groups.last_mut() {
                Some(last) if last[1] == block.total && last[2] == block.data => last[0] += 1,
                _ => groups.push([1, block.total, block.data]),
            }
        }
        groups
    }

    #[test]
    fn test_block_shapes_match_reference_rows() {
        let cases = [
            (7, ECLevel::L, vec![[2, 98, 78]]),
            (10, ECLevel::Q, vec![[6, 43, 19], [2, 44, 20]]),
            (27, ECLevel::M, vec![[22, 73, 45], [3, 74, 46]]),
            (40, ECLevel::H, vec![[20, 45, 15], [61, 46, 16]]),
        ];
        for (number, level, expected) in cases {
            assert_eq!(
                shape_groups(&rs_blocks(v(number), level)),
                expected,
                "version {} level {}",
                number,
                level
            );
        }
    }

    #[test]
    fn test_blocks_cover_every_codeword() {
        for version in Version::all() {
            for level in ECLevel::ALL {
                let blocks = rs_blocks(version, level);
                let total: usize = blocks.iter().map(|b| b.total).sum();
                assert_eq!(total, raw_codewords(version));
                // Every block of one (version, level) shares the EC length
                assert!(blocks.iter().all(|b| b.ec() == blocks[0].ec()));
            }
        }
    }

    #[test]
    fn test_largest_capacity() {
        assert_eq!(raw_codewords(v(40)), 3706);
        assert_eq!(data_codewords(v(40), ECLevel::L), 2956);
        assert_eq!(data_codewords(v(40), ECLevel::H), 1276);
    }

    #[test]
    fn test_length_bits() {
        assert_eq!(length_bits(Mode::Numeric, v(9)), 10);
        assert_eq!(length_bits(Mode::Numeric, v(10)), 12);
        assert_eq!(length_bits(Mode::Alphanumeric, v(26)), 11);
        assert_eq!(length_bits(Mode::Alphanumeric, v(27)), 13);
        assert_eq!(length_bits(Mode::Byte, v(1)), 8);
        assert_eq!(length_bits(Mode::Byte, v(40)), 16);
        assert_eq!(length_bits(Mode::Kanji, v(40)), 12);
    }

    #[test]
    fn test_alignment_positions() {
        assert!(alignment_positions(v(1)).is_empty());
        assert_eq!(alignment_positions(v(2)), &[6, 18]);
        assert_eq!(alignment_positions(v(7)), &[6, 22, 38]);
        assert_eq!(alignment_positions(v(40)).len(), 7);
        for version in Version::all() {
            if let Some(&last) = alignment_positions(version).last() {
                assert_eq!(last, version.size() - 7);
            }
        }
    }
}
