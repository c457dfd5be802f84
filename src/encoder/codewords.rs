use super::bit_buffer::BitBuffer;
use super::reed_solomon::ReedSolomonEncoder;
use super::segment::Segment;
use super::tables::{self, RsBlock};
use crate::error::{EncodeError, Result};
use crate::models::{ECLevel, Version};

/// Alternating pad codewords
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Build the padded data codeword sequence for one segment
pub fn data_codewords(segment: &Segment, version: Version, ec_level: ECLevel) -> Result<Vec<u8>> {
    let capacity_bits = tables::data_codewords(version, ec_level) * 8;
    let mut buffer = BitBuffer::new();
    segment.write_to(&mut buffer, version);

    if buffer.len() > capacity_bits || !segment.count_fits(version) {
        return Err(EncodeError::CapacityExceeded {
            mode: segment.mode(),
            required_bits: buffer.len(),
            capacity_bits,
            version,
        });
    }

    if buffer.len() + 4 <= capacity_bits {
        buffer.append_bits(0, 4);
    }
    while !buffer.len().is_multiple_of(8) {
        buffer.append_bit(false);
    }

    let mut codewords = buffer.into_bytes();
    let target = capacity_bits / 8;
    let missing = target.saturating_sub(codewords.len());
    codewords.extend(PAD_BYTES.iter().cycle().take(missing));
    Ok(codewords)
}

/// Split data into blocks, append EC codewords and interleave everything
pub fn interleave_with_ec(data: &[u8], blocks: &[RsBlock]) -> Vec<u8> {
    // Every block of a version shares one EC length
    let rs = ReedSolomonEncoder::new(blocks.first().map_or(0, RsBlock::ec));
    let mut data_blocks = Vec::with_capacity(blocks.len());
    let mut ec_blocks = Vec::with_capacity(blocks.len());
    let mut offset = 0;

    for block in blocks {
        let chunk = &data[offset..offset + block.data];
        offset += block.data;
        ec_blocks.push(rs.compute_ec(chunk));
        data_blocks.push(chunk.to_vec());
    }

    let mut result = interleave(&data_blocks);
    result.extend(interleave(&ec_blocks));
    result
}

/// Column-major merge: index 0 of every block, then index 1, skipping exhausted blocks
pub fn interleave(blocks: &[Vec<u8>]) -> Vec<u8> {
    let longest = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let mut result = Vec::with_capacity(blocks.iter().map(Vec::len).sum());
    for i in 0..longest {
        for block in blocks {
            if let Some(&byte) = block.get(i) {
                result.push(byte);
            }
        }
    }
    result
}

/// Full codeword stream (data then EC) for a segment at (version, level)
pub fn build(segment: &Segment, version: Version, ec_level: ECLevel) -> Result<Vec<u8>> {
    let data = data_codewords(segment, version, ec_level)?;
    Ok(interleave_with_ec(
        &data,
        &tables::rs_blocks(version, ec_level),
    ))
}
