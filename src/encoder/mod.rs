//! QR code symbol encoding
//!
//! Leaf modules first: field arithmetic and Reed-Solomon, bitstream packing,
//! capacity tables, then matrix construction and the orchestrating encoder.

/// BCH coding for format and version information
pub mod bch;
/// MSB-first bit buffer for the data bitstream
pub mod bit_buffer;
/// Codeword assembly: terminator, padding, RS blocks and interleaving
pub mod codewords;
/// Environment overrides for option defaults
pub(crate) mod config;
/// Format information placement
pub mod format;
/// Finder, alignment and timing pattern placement
pub mod function_patterns;
/// GF(256) arithmetic
pub mod gf256;
pub mod modes;
/// Mask penalty scoring
pub mod penalty;
/// Zigzag placement of the codeword stream into data modules
pub mod placement;
/// Polynomials over GF(256)
pub mod polynomial;
/// Mode, version and mask selection around matrix construction
pub mod qr_encoder;
/// Reed-Solomon error correction codewords
pub mod reed_solomon;
/// Data segments: mode, character count and packed payload
pub mod segment;
/// Block, alignment and length-field tables
pub mod tables;
/// Version information placement (versions 7 and up)
pub mod version;

pub use bit_buffer::BitBuffer;
pub use modes::{KanjiTable, TextEncoding};
pub use qr_encoder::QrEncoder;
pub use segment::{Payload, Segment};
