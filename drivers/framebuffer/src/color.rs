use common::{Color, PixelFormat};

/// Turns an RGB color into the value written to surface memory.
pub trait ColorResolver {
    fn resolve(&self, color: Color) -> u32;
}

/// 256 entry palette for 8-bit surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; 256],
}

const SYSTEM_COLORS: [Color; 16] = [
    Color::rgb(0, 0, 0),
    Color::rgb(205, 0, 0),
    Color::rgb(0, 205, 0),
    Color::rgb(205, 205, 0),
    Color::rgb(0, 0, 238),
    Color::rgb(205, 0, 205),
    Color::rgb(0, 205, 205),
    Color::rgb(229, 229, 229),
    Color::rgb(127, 127, 127),
    Color::rgb(255, 0, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(255, 255, 0),
    Color::rgb(92, 92, 255),
    Color::rgb(255, 0, 255),
    Color::rgb(0, 255, 255),
    Color::rgb(255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

pub static XTERM_PALETTE: Palette = Palette::xterm();

impl Palette {
    /// The xterm 256 color palette: 16 system colors, a 6x6x6 color cube and
    /// a 24 step gray ramp.
    #[allow(clippy::indexing_slicing, clippy::cast_possible_truncation)]
    pub const fn xterm() -> Self {
        let mut colors = [Color::black(); 256];
        let mut i = 0;
        while i < 16 {
            colors[i] = SYSTEM_COLORS[i];
            i += 1;
        }
        while i < 232 {
            let cube = i - 16;
            colors[i] = Color::rgb(
                CUBE_LEVELS[cube / 36],
                CUBE_LEVELS[(cube / 6) % 6],
                CUBE_LEVELS[cube % 6],
            );
            i += 1;
        }
        while i < 256 {
            let level = 8 + 10 * (i - 232) as u8;
            colors[i] = Color::rgb(level, level, level);
            i += 1;
        }
        Self { colors }
    }

    pub fn color(&self, index: u8) -> Color {
        self.colors
            .get(usize::from(index))
            .copied()
            .unwrap_or(Color::black())
    }

    /// Index of the closest entry, the lowest index on ties.
    pub fn nearest(&self, color: Color) -> u8 {
        let distance = |other: &Color| {
            let dr = i32::from(color.red) - i32::from(other.red);
            let dg = i32::from(color.green) - i32::from(other.green);
            let db = i32::from(color.blue) - i32::from(other.blue);
            dr * dr + dg * dg + db * db
        };

        let mut best = 0;
        let mut best_distance = i32::MAX;
        for (index, entry) in self.colors.iter().enumerate() {
            let d = distance(entry);
            if d < best_distance {
                best = index;
                best_distance = d;
                if d == 0 {
                    break;
                }
            }
        }
        u8::try_from(best).unwrap_or(u8::MAX)
    }
}

impl ColorResolver for Palette {
    fn resolve(&self, color: Color) -> u32 {
        u32::from(self.nearest(color))
    }
}

/// Direct color formats pack the channels, 8-bit surfaces use the xterm
/// palette. For 24 and 32 bit formats the low byte holds red.
impl ColorResolver for PixelFormat {
    fn resolve(&self, color: Color) -> u32 {
        let (r, g, b) = (
            u32::from(color.red),
            u32::from(color.green),
            u32::from(color.blue),
        );
        match self {
            PixelFormat::Indexed8 => XTERM_PALETTE.resolve(color),
            PixelFormat::Rgb565 => ((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3),
            PixelFormat::Rgb888 | PixelFormat::Rgbx8888 => r | (g << 8) | (b << 16),
        }
    }
}

/// Expands a value written for `format` back into a color.
#[allow(clippy::cast_possible_truncation)]
pub fn unresolve(format: PixelFormat, value: u32) -> Color {
    match format {
        PixelFormat::Indexed8 => XTERM_PALETTE.color(value as u8),
        PixelFormat::Rgb565 => {
            let r = (value >> 11) & 0x1f;
            let g = (value >> 5) & 0x3f;
            let b = value & 0x1f;
            Color::rgb(
                ((r << 3) | (r >> 2)) as u8,
                ((g << 2) | (g >> 4)) as u8,
                ((b << 3) | (b >> 2)) as u8,
            )
        }
        PixelFormat::Rgb888 | PixelFormat::Rgbx8888 => {
            Color::rgb(value as u8, (value >> 8) as u8, (value >> 16) as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_xterm_palette() {
        let palette = Palette::xterm();
        assert_eq!(Color::rgb(205, 0, 0), palette.color(1));
        assert_eq!(Color::rgb(0, 0, 95), palette.color(17));
        assert_eq!(Color::rgb(0, 95, 0), palette.color(22));
        assert_eq!(Color::rgb(255, 255, 255), palette.color(231));
        assert_eq!(Color::rgb(8, 8, 8), palette.color(232));
        assert_eq!(Color::rgb(238, 238, 238), palette.color(255));
    }

    #[test_case(Color::rgb(0, 0, 0), 0 ; "black is the first entry")]
    #[test_case(Color::rgb(205, 0, 0), 1 ; "exact system color")]
    #[test_case(Color::rgb(255, 255, 255), 15 ; "white")]
    #[test_case(Color::rgb(0, 0, 100), 17 ; "close to a cube entry")]
    #[test_case(Color::rgb(127, 127, 127), 8 ; "system gray")]
    #[test_case(Color::rgb(120, 120, 120), 243 ; "gray ramp")]
    fn test_nearest(color: Color, expected: u8) {
        assert_eq!(expected, XTERM_PALETTE.nearest(color));
        assert_eq!(u32::from(expected), XTERM_PALETTE.resolve(color));
    }

    #[test]
    fn test_rgb565() {
        assert_eq!(0xf800, PixelFormat::Rgb565.resolve(Color::rgb(255, 0, 0)));
        assert_eq!(0x07e0, PixelFormat::Rgb565.resolve(Color::rgb(0, 255, 0)));
        assert_eq!(0x001f, PixelFormat::Rgb565.resolve(Color::rgb(0, 0, 255)));
        assert_eq!(0xffff, PixelFormat::Rgb565.resolve(Color::white()));
        assert_eq!(Color::white(), unresolve(PixelFormat::Rgb565, 0xffff));
        assert_eq!(Color::rgb(255, 0, 0), unresolve(PixelFormat::Rgb565, 0xf800));
    }

    #[test]
    fn test_direct_color() {
        let color = Color::rgb(1, 2, 3);
        let value = PixelFormat::Rgbx8888.resolve(color);
        assert_eq!(0x030201, value);
        assert_eq!(color, unresolve(PixelFormat::Rgb888, value));
    }
}
