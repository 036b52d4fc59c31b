//! The 8x14 console font compiled into the engine, covering the printable
//! ASCII codes 32 to 127.

use alloc::vec::Vec;

use crate::{Font, Glyph, PrintableRange, Result};

pub const HEIGHT: u16 = 14;
pub const WIDTH: u16 = 8;
pub const BASELINE: u16 = 11;
pub const FIRST_CODE: u16 = 32;
pub const GLYPH_COUNT: u16 = 96;

/// One byte per row, bit 0 is the leftmost pixel. Entry 0 is the space.
#[rustfmt::skip]
const GLYPH_ROWS: [[u8; HEIGHT as usize]; GLYPH_COUNT as usize] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x18, 0x3c, 0x3c, 0x3c, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x6c, 0x6c, 0xfe, 0x6c, 0x6c, 0x6c, 0xfe, 0x6c, 0x6c, 0x00, 0x00, 0x00],
    [0x18, 0x18, 0x3c, 0x66, 0x06, 0x0c, 0x18, 0x30, 0x60, 0x66, 0x3c, 0x18, 0x18, 0x00],
    [0x00, 0x0e, 0x1b, 0x5b, 0x6e, 0x30, 0x18, 0x0c, 0x76, 0xda, 0xd8, 0x70, 0x00, 0x00],
    [0x00, 0x00, 0x1c, 0x36, 0x36, 0x1c, 0x06, 0xf6, 0x66, 0x66, 0xdc, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x30, 0x18, 0x18, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x18, 0x18, 0x30, 0x00],
    [0x00, 0x00, 0x0c, 0x18, 0x18, 0x30, 0x30, 0x30, 0x30, 0x30, 0x18, 0x18, 0x0c, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x6c, 0x38, 0xfe, 0x38, 0x6c, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x7e, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0x38, 0x30, 0x18, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0x38, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x60, 0x60, 0x30, 0x30, 0x18, 0x18, 0x0c, 0x0c, 0x06, 0x06, 0x00, 0x00],
    [0x00, 0x00, 0x78, 0xcc, 0xec, 0xec, 0xcc, 0xdc, 0xdc, 0xcc, 0x78, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x30, 0x38, 0x3e, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x66, 0x66, 0x60, 0x30, 0x18, 0x0c, 0x06, 0x7e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x66, 0x66, 0x60, 0x38, 0x60, 0x66, 0x66, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x0c, 0x0c, 0x6c, 0x6c, 0x6c, 0x66, 0xfe, 0x60, 0x60, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x7e, 0x06, 0x06, 0x06, 0x3e, 0x60, 0x60, 0x30, 0x1e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x38, 0x18, 0x0c, 0x3e, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x7e, 0x60, 0x30, 0x30, 0x18, 0x18, 0x0c, 0x0c, 0x0c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x66, 0x66, 0x6e, 0x3c, 0x76, 0x66, 0x66, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x66, 0x66, 0x66, 0x66, 0x7c, 0x30, 0x18, 0x1c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x38, 0x38, 0x00, 0x00, 0x00, 0x38, 0x38, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x38, 0x38, 0x00, 0x00, 0x00, 0x38, 0x38, 0x30, 0x18, 0x00],
    [0x00, 0x00, 0x60, 0x30, 0x18, 0x0c, 0x06, 0x0c, 0x18, 0x30, 0x60, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x7e, 0x00, 0x7e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x06, 0x0c, 0x18, 0x30, 0x60, 0x30, 0x18, 0x0c, 0x06, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x66, 0x66, 0x30, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x7e, 0xc3, 0xc3, 0xf3, 0xdb, 0xdb, 0xf3, 0x03, 0xfe, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x18, 0x3c, 0x66, 0x66, 0x66, 0x7e, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3e, 0x66, 0x66, 0x66, 0x3e, 0x66, 0x66, 0x66, 0x3e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x66, 0x66, 0x06, 0x06, 0x06, 0x66, 0x66, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x1e, 0x36, 0x66, 0x66, 0x66, 0x66, 0x66, 0x36, 0x1e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x7e, 0x06, 0x06, 0x06, 0x3e, 0x06, 0x06, 0x06, 0x7e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x7e, 0x06, 0x06, 0x06, 0x3e, 0x06, 0x06, 0x06, 0x06, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x66, 0x66, 0x06, 0x06, 0x76, 0x66, 0x66, 0x7c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x7e, 0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x66, 0x66, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x66, 0x66, 0x36, 0x36, 0x1e, 0x36, 0x36, 0x66, 0x66, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x7e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0xc6, 0xc6, 0xee, 0xd6, 0xd6, 0xd6, 0xc6, 0xc6, 0xc6, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0xc6, 0xc6, 0xce, 0xde, 0xf6, 0xe6, 0xc6, 0xc6, 0xc6, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3e, 0x66, 0x66, 0x66, 0x3e, 0x06, 0x06, 0x06, 0x06, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x30, 0x60, 0x00],
    [0x00, 0x00, 0x3e, 0x66, 0x66, 0x66, 0x3e, 0x36, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x66, 0x06, 0x0c, 0x18, 0x30, 0x60, 0x66, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x7e, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x18, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0xc6, 0xc6, 0xc6, 0xd6, 0xd6, 0xd6, 0x6c, 0x6c, 0x6c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x66, 0x66, 0x2c, 0x18, 0x18, 0x34, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x7e, 0x60, 0x60, 0x30, 0x18, 0x0c, 0x06, 0x06, 0x7e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x3c],
    [0x00, 0x00, 0x06, 0x06, 0x0c, 0x0c, 0x18, 0x18, 0x30, 0x30, 0x60, 0x60, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3c],
    [0x18, 0x3c, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff],
    [0x1c, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x3c, 0x60, 0x60, 0x7c, 0x66, 0x66, 0x7c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x06, 0x06, 0x3e, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x3c, 0x66, 0x06, 0x06, 0x06, 0x66, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x60, 0x60, 0x7c, 0x66, 0x66, 0x66, 0x66, 0x66, 0x7c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x3c, 0x66, 0x66, 0x7e, 0x06, 0x06, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x78, 0x0c, 0x0c, 0x0c, 0x7e, 0x0c, 0x0c, 0x0c, 0x0c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x7c, 0x66, 0x66, 0x66, 0x66, 0x66, 0x7c, 0x60, 0x60, 0x3e],
    [0x00, 0x00, 0x06, 0x06, 0x3e, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00],
    [0x00, 0x18, 0x18, 0x00, 0x1e, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7e, 0x00, 0x00, 0x00],
    [0x00, 0x30, 0x30, 0x00, 0x3c, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x1e],
    [0x00, 0x00, 0x06, 0x06, 0x66, 0x66, 0x36, 0x1e, 0x36, 0x66, 0x66, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x1e, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x7e, 0xd6, 0xd6, 0xd6, 0xd6, 0xd6, 0xc6, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x3e, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x3c, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x3e, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3e, 0x06, 0x06, 0x06],
    [0x00, 0x00, 0x00, 0x00, 0x7c, 0x66, 0x66, 0x66, 0x66, 0x66, 0x7c, 0x60, 0x60, 0x60],
    [0x00, 0x00, 0x00, 0x00, 0x66, 0x76, 0x0e, 0x06, 0x06, 0x06, 0x06, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x7c, 0x06, 0x06, 0x3c, 0x60, 0x60, 0x3e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x0c, 0x0c, 0x7e, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x78, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x7c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x18, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0xc6, 0xd6, 0xd6, 0xd6, 0xd6, 0x6c, 0x6c, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x3c, 0x18, 0x3c, 0x66, 0x66, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x30, 0x18, 0x0f],
    [0x00, 0x00, 0x00, 0x00, 0x7e, 0x60, 0x30, 0x18, 0x0c, 0x06, 0x7e, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x30, 0x18, 0x18, 0x18, 0x0c, 0x06, 0x0c, 0x18, 0x18, 0x18, 0x30, 0x00],
    [0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18],
    [0x00, 0x00, 0x0c, 0x18, 0x18, 0x18, 0x30, 0x60, 0x30, 0x18, 0x18, 0x18, 0x0c, 0x00],
    [0x00, 0x00, 0x8e, 0xdb, 0x71, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18],
];

/// Builds the compiled-in font. Codes below 32 draw as blanks.
pub fn default_font() -> Result<Font> {
    let mut glyphs = Vec::new();
    glyphs.try_reserve_exact(GLYPH_COUNT as usize)?;
    for rows in &GLYPH_ROWS {
        let mut data = Vec::new();
        data.try_reserve_exact(rows.len())?;
        data.extend_from_slice(rows);
        glyphs.push(Glyph::new(WIDTH, 1, data));
    }

    Font::new(
        HEIGHT,
        WIDTH,
        BASELINE,
        alloc::vec![
            PrintableRange::blank(FIRST_CODE),
            PrintableRange::printable(FIRST_CODE + GLYPH_COUNT, FIRST_CODE),
        ],
        glyphs,
    )
}
