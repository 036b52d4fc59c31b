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

mod blit;
mod clip;
mod color;
mod frame_buffer;
mod renderer;
mod surface;

pub use clip::{ClippedText, clip_text};
pub use color::{ColorResolver, Palette, XTERM_PALETTE, unresolve};
pub use frame_buffer::{FrameBuffer, Rect, get_pixel_raw, set_pixel_raw};
pub use renderer::{RenderError, TEXT_BUFFER_SIZE, TextRenderer};
pub use surface::{Surface, SurfaceError, SurfaceLock};

#[cfg(test)]
pub(crate) mod tests {
    use alloc::vec;
    use prop_font::{Font, Glyph, PrintableRange};

    /// Two pixel high font with a fully set blank glyph, so drawing it by
    /// mistake shows up. 'a' is 2 wide, 'b' is 3 wide, the blank is stored as
    /// 5 wide and drawn as a 3 pixel space.
    pub(crate) fn test_font() -> Font {
        Font::new(
            2,
            3,
            1,
            vec![
                PrintableRange::blank(b'a' as u16),
                PrintableRange::printable(b'c' as u16, b'a' as u16 - 1),
            ],
            vec![
                Glyph::new(5, 1, vec![0xff, 0xff]),
                Glyph::new(2, 1, vec![0b01, 0b10]),
                Glyph::new(3, 1, vec![0b111, 0b101]),
            ],
        )
        .unwrap()
    }
}
