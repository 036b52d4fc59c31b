// Proportional bitmap fonts
//
// A font is a table of 1 bit per pixel glyphs sharing one height, plus an
// optional table of printable ranges mapping character codes onto glyphs.
// See `codec` for the on-disk layout.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::unreachable,
    clippy::indexing_slicing,
    clippy::cast_possible_truncation
)]

extern crate alloc;

pub mod builtin;
mod codec;
mod error;
mod glyph;
mod range;

use alloc::vec::Vec;

pub use codec::{FILE_VERSION, MAGIC};
pub use error::{FontError, Result};
pub use glyph::{Glyph, row_bit};
pub use range::{BLANK_GLYPH, PrintableRange, lookup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// height of every glyph in pixels
    height: u16,
    /// pixels to advance for the blank glyph
    space_width: u16,
    /// drawing base line, measured down from the top of a glyph
    baseline: u16,
    ranges: Vec<PrintableRange>,
    glyphs: Vec<Glyph>,
}

impl Font {
    /// Builds a font from already decoded parts.
    ///
    /// Every glyph must hold exactly `pitch * height` bytes of pixel data and
    /// both tables must be small enough to be counted by a u16.
    pub fn new(
        height: u16,
        space_width: u16,
        baseline: u16,
        ranges: Vec<PrintableRange>,
        glyphs: Vec<Glyph>,
    ) -> Result<Self> {
        if ranges.len() > u16::MAX as usize {
            return Err(FontError::TooManyRanges(ranges.len()));
        }
        if glyphs.len() > u16::MAX as usize {
            return Err(FontError::TooManyGlyphs(glyphs.len()));
        }
        for (index, glyph) in glyphs.iter().enumerate() {
            let expected = glyph.pitch() as usize * height as usize;
            if glyph.data().len() != expected {
                return Err(FontError::GlyphDataSize {
                    index,
                    expected,
                    actual: glyph.data().len(),
                });
            }
        }

        Ok(Self {
            height,
            space_width,
            baseline,
            ranges,
            glyphs,
        })
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn space_width(&self) -> u16 {
        self.space_width
    }

    pub fn baseline(&self) -> u16 {
        self.baseline
    }

    pub fn ranges(&self) -> &[PrintableRange] {
        &self.ranges
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Returns the glyph index for a character code. Codes that are not
    /// printable map to [`BLANK_GLYPH`].
    pub fn char_index(&self, code: u16) -> u16 {
        lookup(&self.ranges, code)
    }

    pub fn glyph(&self, index: u16) -> Option<&Glyph> {
        self.glyphs.get(index as usize)
    }

    pub fn glyph_for(&self, code: u16) -> Option<&Glyph> {
        self.glyph(self.char_index(code))
    }

    /// Stored width of the glyph for `code`, 0 if the index has no glyph.
    pub fn char_width(&self, code: u16) -> u16 {
        self.glyph_for(code).map_or(0, Glyph::width)
    }

    /// Sums the stored glyph widths of `text`.
    ///
    /// The blank glyph is counted with its own stored width, not with
    /// `space_width`, so this can disagree with the distance the blitter
    /// advances over blanks.
    pub fn pixel_width(&self, text: &[u8]) -> u32 {
        text_codes(text)
            .map(|code| u32::from(self.char_width(code)))
            .sum()
    }
}

/// Character codes of a byte string, stopping at the first NUL.
pub fn text_codes(text: &[u8]) -> impl Iterator<Item = u16> + '_ {
    text.iter()
        .take_while(|&&ch| ch != 0)
        .map(|&ch| u16::from(ch))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::vec;

    /// Four glyphs of height 2: blank (width 3), 'a' (width 5), 'b' (width 7)
    /// and a 12 pixel wide 'W'. Codes below 'a' and above 'b' other than 'W'
    /// are blank.
    pub(crate) fn test_font() -> Font {
        Font::new(
            2,
            4,
            1,
            vec![
                PrintableRange::blank(b'W' as u16),
                PrintableRange::printable(b'W' as u16 + 1, b'W' as u16 - 3),
                PrintableRange::blank(b'a' as u16),
                PrintableRange::printable(b'c' as u16, b'a' as u16 - 1),
            ],
            vec![
                Glyph::new(3, 1, vec![0x00, 0x00]),
                Glyph::new(5, 1, vec![0b1_0001, 0b0_1110]),
                Glyph::new(7, 1, vec![0b111_1111, 0b100_0001]),
                Glyph::new(12, 2, vec![0x01, 0x08, 0xff, 0x0f]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_char_index() {
        let font = test_font();
        assert_eq!(0, font.char_index(b' ' as u16));
        assert_eq!(1, font.char_index(b'a' as u16));
        assert_eq!(2, font.char_index(b'b' as u16));
        assert_eq!(3, font.char_index(b'W' as u16));
        assert_eq!(0, font.char_index(b'c' as u16));
        assert_eq!(0, font.char_index(b'V' as u16));
    }

    #[test]
    fn test_dense_font_indexes_by_code() {
        let font = Font::new(1, 2, 1, vec![], vec![Glyph::blank(8, 1); 4]).unwrap();
        for code in 0..u16::MAX {
            assert_eq!(code, font.char_index(code));
        }
        assert!(font.glyph_for(3).is_some());
        assert!(font.glyph_for(4).is_none());
        assert_eq!(0, font.char_width(4));
    }

    #[test]
    fn test_pixel_width() {
        let font = test_font();
        assert_eq!(0, font.pixel_width(b""));
        assert_eq!(5, font.pixel_width(b"a"));
        assert_eq!(5 + 7 + 12, font.pixel_width(b"abW"));
        // the blank glyph counts its stored width, not the space width
        assert_eq!(5 + 3 + 7, font.pixel_width(b"a b"));
        // stops at the first NUL
        assert_eq!(5, font.pixel_width(b"a\0bbb"));
    }

    #[test]
    fn test_glyph_data_size_checked() {
        let err = Font::new(3, 1, 1, vec![], vec![Glyph::new(8, 1, vec![0, 0])]).unwrap_err();
        assert_eq!(
            FontError::GlyphDataSize {
                index: 0,
                expected: 3,
                actual: 2
            },
            err
        );
    }

    #[test]
    fn test_too_many_ranges() {
        let ranges = vec![PrintableRange::blank(0); u16::MAX as usize + 1];
        let err = Font::new(1, 1, 1, ranges, vec![]).unwrap_err();
        assert_eq!(FontError::TooManyRanges(u16::MAX as usize + 1), err);
    }
}
