//! Manual error taxonomy, matching the corpus's convention of a plain
//! enum with a hand-written `Display`/`Error` impl rather than a derive
//! macro.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    UnsupportedCartridge(u8),
    UnsupportedRomSize(u8),
    InvalidImage { expected_min: usize, got: usize },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UnsupportedCartridge(kind) => {
                write!(f, "unsupported cartridge type byte 0x{kind:02X}")
            }
            CoreError::UnsupportedRomSize(size) => {
                write!(f, "unsupported ROM size byte 0x{size:02X}")
            }
            CoreError::InvalidImage { expected_min, got } => write!(
                f,
                "invalid image: expected at least {expected_min} bytes, got {got}"
            ),
        }
    }
}

impl std::error::Error for CoreError {}
