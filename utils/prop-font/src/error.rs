use alloc::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("invalid magic, expected {expected:?} found {found:?}")]
    InvalidMagic { expected: [u8; 4], found: [u8; 4] },
    #[error("unsupported font file version {0}")]
    UnsupportedVersion(u32),
    #[error("font data ends at offset {offset}, needed {needed} more bytes")]
    UnexpectedEof { offset: usize, needed: usize },
    #[error("out of memory")]
    OutOfMemory,
    #[error("glyph {index} holds {actual} bytes of pixel data, expected {expected}")]
    GlyphDataSize {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{0} printable ranges do not fit in a font file")]
    TooManyRanges(usize),
    #[error("{0} glyphs do not fit in a font file")]
    TooManyGlyphs(usize),
}

impl From<TryReserveError> for FontError {
    fn from(_value: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

pub type Result<T> = core::result::Result<T, FontError>;
