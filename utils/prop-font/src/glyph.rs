use alloc::vec::Vec;
use bit_field::BitField;

/// One character of a font: a packed 1 bit per pixel bitmap.
///
/// Rows are `pitch` bytes long. Within a byte, bit 0 is the leftmost pixel
/// and a set bit is drawn in the foreground color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// width of the glyph in pixels
    width: u16,
    /// number of bytes per row
    pitch: u16,
    data: Vec<u8>,
}

impl Glyph {
    pub fn new(width: u16, pitch: u16, data: Vec<u8>) -> Self {
        Self { width, pitch, data }
    }

    /// An all-clear glyph of the given size.
    pub fn blank(width: u16, height: u16) -> Self {
        let pitch = width.div_ceil(8);
        Self::new(width, pitch, alloc::vec![0; pitch as usize * height as usize])
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn pitch(&self) -> u16 {
        self.pitch
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Packed bytes of row `y`, `None` past the end of the pixel data.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let pitch = self.pitch as usize;
        let start = y.checked_mul(pitch)?;
        let end = start.checked_add(pitch)?;
        self.data.get(start..end)
    }

    /// Returns true if pixel `x` of row `y` is set. Pixels beyond the row's
    /// bytes read as clear.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.row(y).is_some_and(|row| row_bit(row, x))
    }
}

/// Reads pixel `x` out of one packed row.
pub fn row_bit(row: &[u8], x: usize) -> bool {
    row.get(x / 8).is_some_and(|byte| byte.get_bit(x % 8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_bit_zero_is_leftmost() {
        let glyph = Glyph::new(8, 1, vec![0b0000_0001, 0b1000_0000]);
        assert!(glyph.is_set(0, 0));
        assert!(!glyph.is_set(1, 0));
        assert!(!glyph.is_set(0, 1));
        assert!(glyph.is_set(7, 1));
    }

    #[test]
    fn test_wide_glyph_rows() {
        // 10 pixels wide needs two bytes per row
        let glyph = Glyph::new(10, 2, vec![0x00, 0b10, 0xff, 0x00]);
        assert_eq!(Some(&[0x00u8, 0b10][..]), glyph.row(0));
        assert!(glyph.is_set(9, 0));
        assert!(!glyph.is_set(8, 0));
        assert!(glyph.is_set(7, 1));
        assert!(!glyph.is_set(8, 1));
        assert_eq!(None, glyph.row(2));
        assert!(!glyph.is_set(0, 2));
    }

    #[test]
    fn test_blank() {
        let glyph = Glyph::blank(12, 3);
        assert_eq!(2, glyph.pitch());
        assert_eq!(&[0; 6], glyph.data());
        assert!(!glyph.is_set(11, 2));
    }

    #[test]
    fn test_zero_pitch() {
        let glyph = Glyph::new(0, 0, vec![]);
        assert_eq!(Some(&[][..]), glyph.row(0));
        assert!(!glyph.is_set(0, 0));
    }

    #[test]
    fn test_row_far_past_the_end() {
        let glyph = Glyph::new(16, 2, vec![0xff; 4]);
        // start fits in a usize, start + pitch does not
        let y = usize::MAX / 2;
        assert_eq!(None, glyph.row(y));
        assert!(!glyph.is_set(0, y));
        assert_eq!(None, glyph.row(usize::MAX));
    }
}
