use std::str::FromStr;
use std::sync::OnceLock;

use super::modes::TextEncoding;
use crate::models::ECLevel;

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// Error correction level for `EncodeOptions::from_env` (`QR_EC_LEVEL`)
pub(crate) fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| parse_env("QR_EC_LEVEL", ECLevel::L))
}

static DEFAULT_TEXT_ENCODING: OnceLock<TextEncoding> = OnceLock::new();

/// Byte-mode text conversion for `EncodeOptions::from_env` (`QR_TEXT_ENCODING`)
pub(crate) fn default_text_encoding() -> TextEncoding {
    *DEFAULT_TEXT_ENCODING.get_or_init(|| parse_env("QR_TEXT_ENCODING", TextEncoding::Latin1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back() {
        assert_eq!(
            parse_env("QR_TEST_UNSET_VARIABLE_FOR_CONFIG", ECLevel::Q),
            ECLevel::Q
        );
    }
}
