use super::bch::BchEncoder;
use crate::models::{ModuleGrid, Version};

/// Smallest version that carries version information
const MIN_VERSION_WITH_INFO: u8 = 7;

/// Version information placement (versions 7 and up)
pub struct VersionInfo;

impl VersionInfo {
    /// Whether `version` carries version information
    pub fn is_present(version: Version) -> bool {
        version.number() >= MIN_VERSION_WITH_INFO
    }

    /// Write both 6x3 copies of the 18-bit version word; light in test mode
    pub fn place(grid: &mut ModuleGrid, version: Version, test: bool) {
        if !Self::is_present(version) {
            return;
        }
        let size = grid.size();
        let bits = BchEncoder::version_bits(version);
        for i in 0..18 {
            let dark = !test && (bits >> i) & 1 == 1;
            let (a, b) = (i / 3, i % 3 + size - 11);
            grid.set(a, b, dark);
            grid.set(b, a, dark);
        }
    }
}
