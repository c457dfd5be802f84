/// Three-state module grid used while a symbol is built
pub mod grid;
/// Packed bit matrix of a finished symbol
pub mod matrix;
/// Version, level, mode, mask and the encoded symbol
pub mod qr_code;

pub use grid::{Module, ModuleGrid};
pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, Mode, QrCode, Version};
