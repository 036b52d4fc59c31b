/// Maps a block of character codes onto glyph indices.
///
/// A range covers every code below `end` that was not claimed by an earlier
/// range in the table, so tables are expected to be sorted by `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintableRange {
    /// first code past the end of this range
    pub end: u16,
    /// if false every code in this range maps to the blank glyph
    pub printable: bool,
    /// subtracted from a code to get its glyph index
    pub offset: u16,
}

impl PrintableRange {
    pub const fn printable(end: u16, offset: u16) -> Self {
        Self {
            end,
            printable: true,
            offset,
        }
    }

    pub const fn blank(end: u16) -> Self {
        Self {
            end,
            printable: false,
            offset: 0,
        }
    }
}

/// Glyph index of the blank glyph. Drawing it only advances the cursor.
pub const BLANK_GLYPH: u16 = 0;

/// Resolves `code` against a range table.
///
/// An empty table means the glyphs are indexed directly by code. Otherwise the
/// first range whose `end` is above `code` decides, and codes past every range
/// resolve to the blank glyph.
pub fn lookup(ranges: &[PrintableRange], code: u16) -> u16 {
    if ranges.is_empty() {
        return code;
    }

    match ranges.iter().find(|range| code < range.end) {
        Some(range) if range.printable => code.wrapping_sub(range.offset),
        _ => BLANK_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const ASCII: [PrintableRange; 3] = [
        PrintableRange::blank(32),
        PrintableRange::printable(127, 32),
        PrintableRange::blank(256),
    ];

    #[test_case(0, 0 ; "control code")]
    #[test_case(31, 0 ; "last control code")]
    #[test_case(32, 0 ; "space")]
    #[test_case(b'A' as u16, 33 ; "capital a")]
    #[test_case(126, 94 ; "tilde")]
    #[test_case(127, 0 ; "delete")]
    #[test_case(255, 0 ; "high half")]
    #[test_case(256, 0 ; "past every range")]
    #[test_case(u16::MAX, 0 ; "max code")]
    fn test_ascii_table(code: u16, expected: u16) {
        assert_eq!(expected, lookup(&ASCII, code));
    }

    #[test]
    fn test_empty_table_is_identity() {
        for code in [0, 1, 31, 32, 200, 1000, u16::MAX] {
            assert_eq!(code, lookup(&[], code));
        }
    }

    #[test]
    fn test_unsorted_table_first_match_wins() {
        // the second range is never reached for codes below 100 even though
        // it is the tighter fit
        let ranges = [
            PrintableRange::printable(100, 10),
            PrintableRange::blank(50),
            PrintableRange::printable(200, 20),
        ];
        assert_eq!(30, lookup(&ranges, 40));
        assert_eq!(89, lookup(&ranges, 99));
        assert_eq!(130, lookup(&ranges, 150));
    }

    #[test]
    fn test_offset_above_code_wraps() {
        let ranges = [PrintableRange::printable(10, 20)];
        assert_eq!(5u16.wrapping_sub(20), lookup(&ranges, 5));
    }
}
