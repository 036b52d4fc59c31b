use alloc::{vec, vec::Vec};
use common::{FrameBufferInfo, PixelFormat};

use crate::surface::{Surface, SurfaceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// A surface backed by ordinary memory.
pub struct FrameBuffer {
    info: FrameBufferInfo,
    buffer: Vec<u8>,
    locked: bool,
    lock_count: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, pixel_format: PixelFormat) -> Self {
        Self::with_info(FrameBufferInfo::new(width, height, pixel_format))
    }

    pub fn with_info(info: FrameBufferInfo) -> Self {
        Self {
            info,
            buffer: vec![0; info.buffer_len()],
            locked: false,
            lock_count: 0,
        }
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Number of times the surface has been successfully locked.
    pub fn lock_count(&self) -> usize {
        self.lock_count
    }

    pub fn get_width(&self) -> usize {
        self.info.width
    }

    pub fn get_height(&self) -> usize {
        self.info.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.info.width || y >= self.info.height {
            return None;
        }
        let byte_offset = self.info.byte_offset(x, y);
        let pixel_buffer = self.buffer.get(byte_offset..)?;
        get_pixel_raw(pixel_buffer, self.info.pixel_format)
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, value: u32) {
        if x >= self.info.width || y >= self.info.height {
            return;
        }
        let byte_offset = self.info.byte_offset(x, y);
        if let Some(pixel_buffer) = self.buffer.get_mut(byte_offset..) {
            set_pixel_raw(pixel_buffer, self.info.pixel_format, value);
        }
    }

    pub fn clear(&mut self, value: u32) {
        let rect = Rect {
            x: 0,
            y: 0,
            width: self.info.width,
            height: self.info.height,
        };
        self.draw_rect(rect, value);
    }

    pub fn draw_rect(&mut self, rect: Rect, value: u32) {
        for y in rect.y..(rect.y + rect.height).min(self.info.height) {
            for x in rect.x..(rect.x + rect.width).min(self.info.width) {
                self.set_pixel(x, y, value);
            }
        }
    }
}

impl Surface for FrameBuffer {
    fn info(&self) -> FrameBufferInfo {
        self.info
    }

    fn lock(&mut self) -> Result<(), SurfaceError> {
        if self.locked {
            return Err(SurfaceError::AlreadyLocked);
        }
        self.locked = true;
        self.lock_count += 1;
        Ok(())
    }

    fn unlock(&mut self) -> Result<(), SurfaceError> {
        if !self.locked {
            return Err(SurfaceError::NotLocked);
        }
        self.locked = false;
        Ok(())
    }

    fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}

/// Writes one pixel value at the start of `pixel_buffer`. 16-bit values are
/// stored in native byte order, 24 and 32-bit values little endian so the red
/// channel comes first.
#[allow(clippy::cast_possible_truncation)]
pub fn set_pixel_raw(pixel_buffer: &mut [u8], pixel_format: PixelFormat, value: u32) {
    match pixel_format {
        PixelFormat::Indexed8 => {
            if let Some(p) = pixel_buffer.first_mut() {
                *p = value as u8;
            }
        }
        PixelFormat::Rgb565 => {
            if let Some(p) = pixel_buffer.get_mut(..2) {
                p.copy_from_slice(&(value as u16).to_ne_bytes());
            }
        }
        PixelFormat::Rgb888 => {
            if let Some(p) = pixel_buffer.get_mut(..3) {
                let [r, g, b, _] = value.to_le_bytes();
                p.copy_from_slice(&[r, g, b]);
            }
        }
        PixelFormat::Rgbx8888 => {
            if let Some(p) = pixel_buffer.get_mut(..4) {
                p.copy_from_slice(&value.to_le_bytes());
            }
        }
    }
}

pub fn get_pixel_raw(pixel_buffer: &[u8], pixel_format: PixelFormat) -> Option<u32> {
    match pixel_format {
        PixelFormat::Indexed8 => pixel_buffer.first().map(|&p| u32::from(p)),
        PixelFormat::Rgb565 => {
            let p = pixel_buffer.get(..2)?.try_into().ok()?;
            Some(u32::from(u16::from_ne_bytes(p)))
        }
        PixelFormat::Rgb888 => {
            let [r, g, b]: [u8; 3] = pixel_buffer.get(..3)?.try_into().ok()?;
            Some(u32::from_le_bytes([r, g, b, 0]))
        }
        PixelFormat::Rgbx8888 => {
            let p = pixel_buffer.get(..4)?.try_into().ok()?;
            Some(u32::from_le_bytes(p))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(PixelFormat::Indexed8, 0xab)]
    #[test_case(PixelFormat::Rgb565, 0xf81f)]
    #[test_case(PixelFormat::Rgb888, 0x30201)]
    #[test_case(PixelFormat::Rgbx8888, 0x4030201)]
    fn test_set_pixel(format: PixelFormat, value: u32) {
        let mut fb = FrameBuffer::new(4, 3, format);
        fb.set_pixel(2, 1, value);
        assert_eq!(Some(value), fb.pixel(2, 1));
        assert_eq!(Some(0), fb.pixel(1, 1));
        assert_eq!(Some(0), fb.pixel(3, 1));
        assert_eq!(None, fb.pixel(4, 1));
    }

    #[test]
    fn test_stride_padding_untouched() {
        let mut info = FrameBufferInfo::new(3, 2, PixelFormat::Indexed8);
        info.stride = 4;
        let mut fb = FrameBuffer::with_info(info);
        fb.clear(7);
        assert_eq!(&[7, 7, 7, 0, 7, 7, 7, 0], fb.buffer());
    }

    #[test]
    fn test_draw_rect_clipped() {
        let mut fb = FrameBuffer::new(4, 4, PixelFormat::Indexed8);
        fb.draw_rect(
            Rect {
                x: 2,
                y: 3,
                width: 10,
                height: 10,
            },
            1,
        );
        let set: Vec<_> = (0..16)
            .filter(|i| fb.pixel(i % 4, i / 4) == Some(1))
            .collect();
        assert_eq!(vec![14, 15], set);
    }

    #[test]
    fn test_lock_state() {
        let mut fb = FrameBuffer::new(1, 1, PixelFormat::Indexed8);
        assert_eq!(Err(SurfaceError::NotLocked), fb.unlock());
        fb.lock().unwrap();
        assert!(fb.is_locked());
        assert_eq!(Err(SurfaceError::AlreadyLocked), fb.lock());
        fb.unlock().unwrap();
        assert!(!fb.is_locked());
        assert_eq!(1, fb.lock_count());
    }
}
