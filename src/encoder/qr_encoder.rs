use log::{debug, trace};

use super::codewords;
use super::format::FormatInfo;
use super::function_patterns::FunctionPatterns;
use super::modes::KanjiTable;
use super::penalty;
use super::placement::DataPlacer;
use super::segment::{Payload, Segment};
use super::tables;
use super::version::VersionInfo;
use crate::EncodeOptions;
use crate::error::{EncodeError, Result};
use crate::models::{ECLevel, MaskPattern, Mode, ModuleGrid, QrCode, Version};

/// Main QR encoder: mode fallback, version selection, codewords, matrix and mask choice
pub struct QrEncoder;

impl QrEncoder {
    /// Encode `payload`, trying modes in priority order unless `options` fixes one.
    ///
    /// In automatic mode an unsupported character or a capacity overflow moves on to
    /// the next mode; exhausting every mode yields `UnableToEncode`. Text payloads skip
    /// the Kanji candidate when no Shift-JIS table is available.
    pub fn encode(
        payload: Payload<'_>,
        options: &EncodeOptions,
        kanji_table: Option<&KanjiTable>,
    ) -> Result<QrCode> {
        if let Some(mode) = options.mode {
            return Self::encode_with_mode(mode, payload, options, kanji_table);
        }

        for mode in Mode::PRIORITY {
            if mode == Mode::Kanji
                && kanji_table.is_none()
                && matches!(payload, Payload::Text(_))
            {
                debug!("Skipping Kanji mode: no Shift-JIS table");
                continue;
            }
            match Self::encode_with_mode(mode, payload, options, kanji_table) {
                Ok(qr) => return Ok(qr),
                Err(err) if err.is_recoverable() => {
                    debug!("{} mode rejected: {}", mode, err);
                }
                Err(err) => return Err(err),
            }
        }
        Err(EncodeError::UnableToEncode)
    }

    /// Encode with a single mode; errors propagate unchanged
    pub fn encode_with_mode(
        mode: Mode,
        payload: Payload<'_>,
        options: &EncodeOptions,
        kanji_table: Option<&KanjiTable>,
    ) -> Result<QrCode> {
        let segment = Segment::encode(mode, payload, options.text_encoding, kanji_table)?;
        let version = match options.version {
            Some(version) => Self::check_version(&segment, version, options.ec_level)?,
            None => Self::select_version(&segment, options.ec_level)?,
        };
        debug!(
            "{} mode, {} characters: version {} at level {}",
            mode,
            segment.char_count(),
            version,
            options.ec_level
        );

        let stream = codewords::build(&segment, version, options.ec_level)?;
        let mask = match options.mask {
            Some(mask) => mask,
            None => Self::select_mask(version, options.ec_level, &stream),
        };

        let grid = Self::build_matrix(version, options.ec_level, mask, &stream, false);
        Ok(QrCode {
            version,
            error_correction: options.ec_level,
            mode,
            mask_pattern: mask,
            modules: grid.into_matrix()?,
        })
    }

    /// Smallest version whose capacity holds headers, payload, terminator and byte alignment
    pub fn select_version(segment: &Segment, ec_level: ECLevel) -> Result<Version> {
        for version in Version::all() {
            let capacity_bits = tables::data_codewords(version, ec_level) * 8;
            let needed = (segment.total_bits(version) + 4).next_multiple_of(8);
            if segment.count_fits(version) && needed <= capacity_bits {
                return Ok(version);
            }
        }
        Err(EncodeError::CapacityExceeded {
            mode: segment.mode(),
            required_bits: segment.total_bits(Version::MAX),
            capacity_bits: tables::data_codewords(Version::MAX, ec_level) * 8,
            version: Version::MAX,
        })
    }

    /// Accept an explicit version when headers plus payload fit its capacity
    pub fn check_version(segment: &Segment, version: Version, ec_level: ECLevel) -> Result<Version> {
        let capacity_bits = tables::data_codewords(version, ec_level) * 8;
        let required_bits = segment.total_bits(version);
        if segment.count_fits(version) && required_bits <= capacity_bits {
            Ok(version)
        } else {
            Err(EncodeError::CapacityExceeded {
                mode: segment.mode(),
                required_bits,
                capacity_bits,
                version,
            })
        }
    }

    /// Trial every mask in test mode and keep the first lowest penalty
    pub fn select_mask(version: Version, ec_level: ECLevel, stream: &[u8]) -> MaskPattern {
        let mut best = MaskPattern::Pattern0;
        let mut best_score = u32::MAX;
        for mask in MaskPattern::ALL {
            let grid = Self::build_matrix(version, ec_level, mask, stream, true);
            let score = penalty::score(&grid);
            trace!("Mask {} penalty {}", mask.id(), score);
            if score < best_score {
                best_score = score;
                best = mask;
            }
        }
        debug!("Selected mask {} (penalty {})", best.id(), best_score);
        best
    }

    /// Lay out function patterns, format and version information, then the data stream
    pub fn build_matrix(
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
        stream: &[u8],
        test: bool,
    ) -> ModuleGrid {
        let mut grid = ModuleGrid::new(version.size());
        FunctionPatterns::place_all(&mut grid, version);
        FormatInfo::place(&mut grid, ec_level, mask, test);
        VersionInfo::place(&mut grid, version, test);
        DataPlacer::place(&mut grid, stream, mask);
        grid
    }
}
