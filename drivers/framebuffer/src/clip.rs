use core::ops::Range;

use prop_font::{Font, text_codes};

/// The part of a line of text that starts on the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippedText {
    /// x position of the first kept character, never negative
    pub x: i32,
    /// kept characters as an index range into the original text
    pub range: Range<usize>,
}

/// Clips a line of text horizontally against a surface `surface_width` pixels
/// wide.
///
/// Returns `None` if the text lies entirely off the surface. Leading
/// characters are dropped until the pen position is no longer negative, so a
/// character cut by the left edge is skipped whole. Trailing characters are
/// dropped from the first one whose right edge reaches `surface_width`.
pub fn clip_text(font: &Font, x: i32, surface_width: usize, text: &[u8]) -> Option<ClippedText> {
    let len = text_codes(text).count();
    let text = text.get(..len)?;
    let char_width = |ch: u8| i64::from(font.char_width(u16::from(ch)));

    let surface_width = i64::try_from(surface_width).unwrap_or(i64::MAX);
    let mut x = i64::from(x);
    if x < -i64::from(font.pixel_width(text)) || x >= surface_width {
        return None;
    }

    let mut start = 0;
    while x < 0 {
        x += char_width(*text.get(start)?);
        start += 1;
    }

    let mut end = start;
    let mut end_x = x;
    for &ch in text.get(start..)? {
        end_x += char_width(ch);
        if end_x >= surface_width {
            break;
        }
        end += 1;
    }

    Some(ClippedText {
        x: i32::try_from(x).ok()?,
        range: start..end,
    })
}
