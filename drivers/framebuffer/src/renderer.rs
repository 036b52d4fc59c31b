use core::fmt::Write;

use common::{Color, PixelFormat};
use log::{error, trace};
use prop_font::{BLANK_GLYPH, Font, Glyph};
use thiserror::Error;

use crate::{
    blit::{Cell, blit_cells, pixel_writer},
    clip::clip_text,
    color::ColorResolver,
    surface::{Surface, SurfaceError, SurfaceLock},
};

/// Longest formatted line [`TextRenderer::draw_text_fmt`] accepts.
pub const TEXT_BUFFER_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("couldn't lock surface: {0}")]
    Lock(#[from] SurfaceError),
    #[error("{0} text output not implemented")]
    UnsupportedPixelFormat(PixelFormat),
    #[error("formatted text is longer than {TEXT_BUFFER_SIZE} bytes")]
    TextTooLong,
    #[error("glyph holds {actual} bytes of pixel data, {expected} needed")]
    GlyphTooShort { expected: usize, actual: usize },
}

/// The font and color used for drawing text.
///
/// Text is a byte string, one character code per byte, ending at the end of
/// the slice or at the first NUL.
#[derive(Debug, Clone)]
pub struct TextRenderer<'f> {
    font: &'f Font,
    /// value written to surface memory for set glyph bits
    color: u32,
}

impl<'f> TextRenderer<'f> {
    pub fn new(font: &'f Font) -> Self {
        Self { font, color: 0 }
    }

    pub fn set_font(&mut self, font: &'f Font) {
        self.font = font;
    }

    pub fn font(&self) -> &'f Font {
        self.font
    }

    pub fn set_color_rgb<R: ColorResolver + ?Sized>(&mut self, resolver: &R, color: Color) {
        self.color = resolver.resolve(color);
    }

    /// Sets the value poked into surface memory directly. It should come from
    /// the [`ColorResolver`] matching the surface.
    pub fn set_color_raw(&mut self, value: u32) {
        self.color = value;
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn char_index(&self, code: u16) -> u16 {
        self.font.char_index(code)
    }

    pub fn pixel_width(&self, text: &[u8]) -> u32 {
        self.font.pixel_width(text)
    }

    fn cell(&self, code: u16) -> Cell<'f> {
        let index = self.font.char_index(code);
        if index == BLANK_GLYPH {
            return Cell::Blank(self.font.space_width());
        }
        match self.font.glyph(index) {
            Some(glyph) => Cell::Glyph(glyph),
            None => Cell::Blank(0),
        }
    }

    /// Draws a line of text with its top left corner at (`x`, `y`).
    ///
    /// Lines that do not fit vertically are not drawn. Characters hanging off
    /// the left or right edge are dropped whole. Only 8 and 16-bit surfaces
    /// are supported.
    pub fn draw_text<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        text: &[u8],
    ) -> Result<(), RenderError> {
        let info = surface.info();
        let font = self.font;

        let max_y = i64::try_from(info.height).unwrap_or(i64::MAX) - i64::from(font.height());
        if y < 0 || i64::from(y) >= max_y {
            trace!("text at y {y} is off the surface");
            return Ok(());
        }

        let Some(clipped) = clip_text(font, x, info.width, text) else {
            trace!("text at x {x} is off the surface");
            return Ok(());
        };
        let text = text.get(clipped.range).unwrap_or_default();

        let mut lock = SurfaceLock::new(surface).inspect_err(|err| {
            error!("draw_text: couldn't lock surface: {err}");
        })?;
        let info = *lock.info();
        let Some(put_pixel) = pixel_writer(info.pixel_format) else {
            error!("{} text output not implemented", info.pixel_format);
            return Err(RenderError::UnsupportedPixelFormat(info.pixel_format));
        };

        let cells = text.iter().map(|&ch| self.cell(u16::from(ch)));
        blit_cells(
            lock.buffer_mut(),
            &info,
            put_pixel,
            self.color,
            (i64::from(clipped.x), i64::from(y)),
            font.height() as usize,
            cells,
        );
        Ok(())
    }

    /// Formats `args` and draws the result with [`TextRenderer::draw_text`].
    pub fn draw_text_fmt<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        args: core::fmt::Arguments,
    ) -> Result<(), RenderError> {
        let mut buffer: heapless::String<TEXT_BUFFER_SIZE> = heapless::String::new();
        buffer
            .write_fmt(args)
            .map_err(|_| RenderError::TextTooLong)?;
        self.draw_text(surface, x, y, buffer.as_bytes())
    }

    /// Draws a single glyph `height` rows tall, independent of the current
    /// font. Pixels off the surface are skipped.
    pub fn draw_glyph<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        glyph: &Glyph,
        height: u16,
    ) -> Result<(), RenderError> {
        let needed = glyph.pitch() as usize * height as usize;
        if glyph.data().len() < needed {
            error!(
                "draw_glyph: glyph holds {} bytes, {needed} needed",
                glyph.data().len()
            );
            return Err(RenderError::GlyphTooShort {
                expected: needed,
                actual: glyph.data().len(),
            });
        }

        let info = surface.info();
        let (x, y) = (i64::from(x), i64::from(y));
        let width = i64::try_from(info.width).unwrap_or(i64::MAX);
        let surface_height = i64::try_from(info.height).unwrap_or(i64::MAX);
        if x + i64::from(glyph.width()) < 0 || x >= width {
            return Ok(());
        }
        if y + i64::from(height) < 0 || y >= surface_height {
            return Ok(());
        }

        let mut lock = SurfaceLock::new(surface).inspect_err(|err| {
            error!("draw_glyph: couldn't lock surface: {err}");
        })?;
        let info = *lock.info();
        let Some(put_pixel) = pixel_writer(info.pixel_format) else {
            error!("{} text output not implemented", info.pixel_format);
            return Err(RenderError::UnsupportedPixelFormat(info.pixel_format));
        };

        blit_cells(
            lock.buffer_mut(),
            &info,
            put_pixel,
            self.color,
            (x, y),
            height as usize,
            core::iter::once(Cell::Glyph(glyph)),
        );
        Ok(())
    }
}

/// Draws formatted text with a [`TextRenderer`].
///
/// ```ignore
/// draw_text!(renderer, &mut surface, 10, 20, "score {}", score)?;
/// ```
#[macro_export]
macro_rules! draw_text {
    ($renderer:expr, $surface:expr, $x:expr, $y:expr, $($arg:tt)*) => {
        $renderer.draw_text_fmt($surface, $x, $y, format_args!($($arg)*))
    };
}
