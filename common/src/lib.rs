#![cfg_attr(not(test), no_std)]

use core::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }

    pub const fn white() -> Color {
        Color::rgb(255, 255, 255)
    }

    pub const fn black() -> Color {
        Color::rgb(0, 0, 0)
    }
}

/// Layout of a single pixel in a frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// one byte palette index per pixel
    Indexed8,
    /// 5 bits red, 6 bits green, 5 bits blue packed into a u16
    Rgb565,
    /// 3 bytes per pixel, red first
    Rgb888,
    /// 4 bytes per pixel, red first, last byte unused
    Rgbx8888,
}

impl PixelFormat {
    pub const fn bits_per_pixel(&self) -> u8 {
        match self {
            PixelFormat::Indexed8 => 8,
            PixelFormat::Rgb565 => 16,
            PixelFormat::Rgb888 => 24,
            PixelFormat::Rgbx8888 => 32,
        }
    }

    pub const fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel() as usize / 8
    }

    pub fn from_bits_per_pixel(bits: u8) -> Option<PixelFormat> {
        match bits {
            8 => Some(PixelFormat::Indexed8),
            16 => Some(PixelFormat::Rgb565),
            24 => Some(PixelFormat::Rgb888),
            32 => Some(PixelFormat::Rgbx8888),
            _ => None,
        }
    }
}

impl Display for PixelFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-bit", self.bits_per_pixel())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameBufferInfo {
    /// visible width in pixels
    pub width: usize,
    /// visible height in pixels
    pub height: usize,
    /// number of pixels between the start of one line and the start of the next
    pub stride: usize,
    pub bytes_per_pixel: usize,
    pub pixel_format: PixelFormat,
}

impl FrameBufferInfo {
    pub fn new(width: usize, height: usize, pixel_format: PixelFormat) -> Self {
        Self {
            width,
            height,
            stride: width,
            bytes_per_pixel: pixel_format.bytes_per_pixel(),
            pixel_format,
        }
    }

    /// Byte offset of the first byte of pixel (x, y).
    pub fn byte_offset(&self, x: usize, y: usize) -> usize {
        // use stride to calculate pixel offset of target line
        let line_offset = y * self.stride;
        // convert to byte offset
        (line_offset + x) * self.bytes_per_pixel
    }

    /// Total bytes needed to back a buffer with this layout.
    pub fn buffer_len(&self) -> usize {
        self.stride * self.height * self.bytes_per_pixel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_format_bits() {
        for bits in [8, 16, 24, 32] {
            let format = PixelFormat::from_bits_per_pixel(bits).unwrap();
            assert_eq!(bits, format.bits_per_pixel());
            assert_eq!(bits as usize / 8, format.bytes_per_pixel());
        }
        assert_eq!(None, PixelFormat::from_bits_per_pixel(15));
    }

    #[test]
    fn test_byte_offset() {
        let mut info = FrameBufferInfo::new(10, 4, PixelFormat::Rgb565);
        assert_eq!(0, info.byte_offset(0, 0));
        assert_eq!(2 * 10 * 2 + 3 * 2, info.byte_offset(3, 2));
        assert_eq!(80, info.buffer_len());

        info.stride = 16;
        assert_eq!(16 * 2, info.byte_offset(0, 1));
        assert_eq!(128, info.buffer_len());
    }
}
