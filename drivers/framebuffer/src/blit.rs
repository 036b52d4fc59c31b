use common::{FrameBufferInfo, PixelFormat};
use prop_font::{Glyph, row_bit};

/// What occupies one character slot on a line.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Cell<'a> {
    Glyph(&'a Glyph),
    /// advances the pen without drawing
    Blank(u16),
}

impl Cell<'_> {
    fn advance(&self) -> i64 {
        match self {
            Cell::Glyph(glyph) => i64::from(glyph.width()),
            Cell::Blank(width) => i64::from(*width),
        }
    }
}

type PutPixel = fn(&mut [u8], u32);

#[allow(clippy::cast_possible_truncation)]
fn put_pixel8(pixel_buffer: &mut [u8], value: u32) {
    if let Some(p) = pixel_buffer.first_mut() {
        *p = value as u8;
    }
}

#[allow(clippy::cast_possible_truncation)]
fn put_pixel16(pixel_buffer: &mut [u8], value: u32) {
    if let Some(p) = pixel_buffer.get_mut(..2) {
        p.copy_from_slice(&(value as u16).to_ne_bytes());
    }
}

/// Pixel formats text can be drawn into.
pub(crate) fn pixel_writer(pixel_format: PixelFormat) -> Option<PutPixel> {
    match pixel_format {
        PixelFormat::Indexed8 => Some(put_pixel8 as PutPixel),
        PixelFormat::Rgb565 => Some(put_pixel16 as PutPixel),
        PixelFormat::Rgb888 | PixelFormat::Rgbx8888 => None,
    }
}

/// Draws `rows` scanlines of a line of cells with its top left corner at
/// (`x`, `y`). Set bits are written with `color`, clear bits leave the surface
/// alone. Pixels falling outside the surface are skipped.
pub(crate) fn blit_cells<'a, I>(
    buffer: &mut [u8],
    info: &FrameBufferInfo,
    put_pixel: PutPixel,
    color: u32,
    (x, y): (i64, i64),
    rows: usize,
    cells: I,
) where
    I: Iterator<Item = Cell<'a>> + Clone,
{
    for py in 0..rows {
        let Ok(dest_y) = usize::try_from(y + py as i64) else {
            continue;
        };
        if dest_y >= info.height {
            continue;
        }

        let mut pen_x = x;
        for cell in cells.clone() {
            if let Cell::Glyph(glyph) = cell
                && let Some(row) = glyph.row(py)
            {
                for px in 0..glyph.width() as usize {
                    let Ok(dest_x) = usize::try_from(pen_x + px as i64) else {
                        continue;
                    };
                    if dest_x >= info.width || !row_bit(row, px) {
                        continue;
                    }
                    let byte_offset = info.byte_offset(dest_x, dest_y);
                    if let Some(pixel_buffer) = buffer.get_mut(byte_offset..) {
                        put_pixel(pixel_buffer, color);
                    }
                }
            }
            pen_x += cell.advance();
        }
    }
}
