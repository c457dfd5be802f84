//! rust_qr_encode - QR code symbol encoder
//!
//! A pure Rust QR code (Model 2) encoder: GF(256) Reed-Solomon coding,
//! numeric/alphanumeric/byte/Kanji segment packing, automatic version and
//! mask selection. Also carries the row-pattern form of a few linear
//! symbologies (Code 39, Code 128B, EAN-8/13) and the layout geometry a
//! renderer needs.
//!
//! ```
//! use rust_qr_encode::{ECLevel, EncodeOptions, Mode, encode_with};
//!
//! let options = EncodeOptions::new().with_ec_level(ECLevel::Q);
//! let qr = encode_with("HELLO WORLD", &options).unwrap();
//! assert_eq!(qr.mode, Mode::Alphanumeric);
//! assert_eq!(qr.size(), 21);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (Reed-Solomon, data modes, matrix construction)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QrCode, BitMatrix, Version, etc.)
pub mod models;
/// Row patterns for QR and linear symbologies, plus layout geometry
pub mod symbology;

use rayon::prelude::*;

pub use encoder::{KanjiTable, Payload, TextEncoding};
pub use error::{EncodeError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, Mode, QrCode, Version};
pub use symbology::{Code39, Code128, Ean8, Ean13, Layout, LayoutOptions, Symbology};

use encoder::QrEncoder;
use encoder::config;

/// Options for a single encode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Fixed version, or `None` to pick the smallest that fits
    pub version: Option<Version>,
    /// Fixed mode, or `None` to fall back Numeric, Alphanumeric, Byte, Kanji
    pub mode: Option<Mode>,
    /// Fixed mask, or `None` to pick the lowest-penalty one
    pub mask: Option<MaskPattern>,
    /// How byte mode turns text into bytes
    pub text_encoding: TextEncoding,
}

impl EncodeOptions {
    /// Level L, Latin-1 text, everything else automatic
    pub fn new() -> Self {
        Self {
            ec_level: ECLevel::L,
            version: None,
            mode: None,
            mask: None,
            text_encoding: TextEncoding::Latin1,
        }
    }

    /// Like [`EncodeOptions::new`], but level and text encoding may be overridden by
    /// `QR_EC_LEVEL` and `QR_TEXT_ENCODING`. Results then depend on the process environment.
    pub fn from_env() -> Self {
        Self {
            ec_level: config::default_ec_level(),
            text_encoding: config::default_text_encoding(),
            ..Self::new()
        }
    }

    /// Set the error correction level
    pub fn with_ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Fix the symbol version
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Fix the symbol version by number; 0 means automatic
    pub fn with_version_number(mut self, number: u8) -> Result<Self> {
        self.version = match number {
            0 => None,
            n => Some(Version::new(n)?),
        };
        Ok(self)
    }

    /// Restrict encoding to one mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Skip mask trials and use `mask`
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set the byte-mode text encoding
    pub fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.text_encoding = text_encoding;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode text with default options
pub fn encode(text: &str) -> Result<QrCode> {
    encode_with(text, &EncodeOptions::default())
}

/// Encode text or bytes with explicit options
pub fn encode_with<'a>(payload: impl Into<Payload<'a>>, options: &EncodeOptions) -> Result<QrCode> {
    QrEncoder::encode(payload.into(), options, None)
}

/// Encoder with fixed options and an optional Shift-JIS table for Kanji text
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
    kanji_table: Option<KanjiTable>,
}

impl Encoder {
    /// Create an encoder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with the given options
    pub fn with_options(options: EncodeOptions) -> Self {
        Self {
            options,
            kanji_table: None,
        }
    }

    /// Enable Kanji mode for text payloads
    pub fn with_kanji_table(mut self, table: KanjiTable) -> Self {
        self.kanji_table = Some(table);
        self
    }

    /// Options used for every call
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode text
    pub fn encode(&self, text: &str) -> Result<QrCode> {
        self.encode_payload(Payload::Text(text))
    }

    /// Encode raw bytes
    pub fn encode_bytes(&self, bytes: &[u8]) -> Result<QrCode> {
        self.encode_payload(Payload::Bytes(bytes))
    }

    /// Encode any payload
    pub fn encode_payload(&self, payload: Payload<'_>) -> Result<QrCode> {
        QrEncoder::encode(payload, &self.options, self.kanji_table.as_ref())
    }

    /// Encode independent texts in parallel, preserving input order
    pub fn encode_batch(&self, texts: &[&str]) -> Vec<Result<QrCode>> {
        texts.par_iter().map(|text| self.encode(text)).collect()
    }
}
