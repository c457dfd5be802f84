//! Error types for symbol encoding

use thiserror::Error;

use crate::models::{Mode, Version};

/// Errors that can occur while encoding a symbol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Payload contains a character the mode cannot pack
    #[error("{mode} mode cannot encode value {value:#x} at position {position}")]
    InvalidCharacter {
        /// Mode that rejected the character
        mode: Mode,
        /// Character index in the payload
        position: usize,
        /// Offending code point or byte
        value: u32,
    },

    /// Packed data does not fit the symbol
    #[error(
        "{mode} data needs {required_bits} bits but version {version} holds {capacity_bits}"
    )]
    CapacityExceeded {
        /// Mode of the segment
        mode: Mode,
        /// Header plus payload bits
        required_bits: usize,
        /// Data bits available at `version`
        capacity_bits: usize,
        /// Largest version tried
        version: Version,
    },

    /// Unknown mode name
    #[error("Unknown mode name: {0:?}")]
    InvalidModeName(String),

    /// Unknown error correction level name
    #[error("Unknown error correction level: {0:?}")]
    InvalidEcLevel(String),

    /// Version number outside 1..=40
    #[error("Version {0} is outside 1..=40")]
    InvalidVersion(u8),

    /// Mask id outside 0..=7
    #[error("Mask pattern {0} is outside 0..=7")]
    InvalidMask(u8),

    /// Module query outside the symbol
    #[error("Module ({row}, {col}) is outside a {size}x{size} symbol")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Modules per side
        size: usize,
    },

    /// Text conversion is unavailable or unknown
    #[error("Unsupported text encoding: {0}")]
    UnsupportedTextEncoding(String),

    /// Every candidate mode failed at every allowed version
    #[error("Unable to encode data")]
    UnableToEncode,

    /// A construction pass left a module unwritten
    #[error("Module ({row}, {col}) was never written")]
    IncompleteMatrix {
        /// Row of the first unset module
        row: usize,
        /// Column of the first unset module
        col: usize,
    },

    /// Data rejected by a linear symbology
    #[error("Invalid {symbology} data: {reason}")]
    InvalidSymbolData {
        /// Symbology name, e.g. `"EAN-13"`
        symbology: &'static str,
        /// What was wrong with the data
        reason: String,
    },
}

impl EncodeError {
    /// Whether automatic selection may move on to the next mode or version
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EncodeError::InvalidCharacter { .. } | EncodeError::CapacityExceeded { .. }
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        let invalid = EncodeError::InvalidCharacter {
            mode: Mode::Numeric,
            position: 0,
            value: 'a' as u32,
        };
        assert!(invalid.is_recoverable());
        assert!(!EncodeError::InvalidModeName("x".into()).is_recoverable());
        assert!(!EncodeError::UnsupportedTextEncoding("SJIS".into()).is_recoverable());
        assert!(!EncodeError::OutOfBounds { row: 0, col: 30, size: 21 }.is_recoverable());
    }

    #[test]
    fn test_messages() {
        assert_eq!(EncodeError::UnableToEncode.to_string(), "Unable to encode data");
        let err = EncodeError::CapacityExceeded {
            mode: Mode::Byte,
            required_bits: 100,
            capacity_bits: 72,
            version: Version::MIN,
        };
        assert_eq!(
            err.to_string(),
            "Byte data needs 100 bits but version 1 holds 72"
        );
    }
}
