// Font file layout, all fields little endian:
//
//   header   "font", version: u32, height: u16, space_width: u16,
//            baseline: u16, range_count: u16, glyph_count: u16
//   ranges   range_count x { end: u16, printable: u16, offset: u16 }
//   glyphs   glyph_count x { width: u16, pitch: u16 } followed by
//            pitch * height bytes of packed rows
//
// Glyph records start at arbitrary byte offsets, so every field is read
// through unaligned little endian wrappers.

use core::mem::size_of;

use alloc::vec::Vec;
use log::{debug, error};
use zerocopy::{
    FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned,
    byteorder::little_endian::{U16, U32},
};

use crate::{Font, FontError, Glyph, PrintableRange, Result};

pub const MAGIC: [u8; 4] = *b"font";
pub const FILE_VERSION: u32 = 1;

#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Unaligned, KnownLayout, Immutable)]
struct FontFileHeader {
    /// Always "font"
    magic: [u8; 4],
    version: U32,
    /// height of every glyph in pixels
    height: U16,
    /// pixels to leave for a blank
    space_width: U16,
    baseline: U16,
    range_count: U16,
    glyph_count: U16,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Unaligned, KnownLayout, Immutable)]
struct RangeRecord {
    end: U16,
    /// 0 or 1
    printable: U16,
    offset: U16,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Unaligned, KnownLayout, Immutable)]
struct GlyphRecord {
    /// pixel width of the glyph
    width: U16,
    /// bytes per row of glyph data
    pitch: U16,
}

const HEADER_SIZE: usize = size_of::<FontFileHeader>();
const RANGE_SIZE: usize = size_of::<RangeRecord>();
const GLYPH_RECORD_SIZE: usize = size_of::<GlyphRecord>();

impl From<&PrintableRange> for RangeRecord {
    fn from(value: &PrintableRange) -> Self {
        Self {
            end: U16::new(value.end),
            printable: U16::new(u16::from(value.printable)),
            offset: U16::new(value.offset),
        }
    }
}

impl From<RangeRecord> for PrintableRange {
    fn from(value: RangeRecord) -> Self {
        Self {
            end: value.end.get(),
            printable: value.printable.get() != 0,
            offset: value.offset.get(),
        }
    }
}

/// Bounds checked reads over a font file.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read<T: FromBytes>(&mut self) -> Result<T> {
        let rest = self.data.get(self.pos..).unwrap_or_default();
        let (value, _) = T::read_from_prefix(rest).map_err(|_| FontError::UnexpectedEof {
            offset: self.pos,
            needed: size_of::<T>() - rest.len(),
        })?;
        self.pos += size_of::<T>();
        Ok(value)
    }

    fn bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let rest = self.data.get(self.pos..).unwrap_or_default();
        let bytes = rest.get(..len).ok_or(FontError::UnexpectedEof {
            offset: self.pos,
            needed: len - rest.len(),
        })?;
        self.pos += len;
        Ok(bytes)
    }
}

/// Owns the parts of a font while it is being loaded. Dropping the builder
/// releases everything allocated so far.
struct FontBuilder {
    height: u16,
    space_width: u16,
    baseline: u16,
    ranges: Vec<PrintableRange>,
    glyphs: Vec<Glyph>,
}

impl FontBuilder {
    fn new(header: &FontFileHeader) -> Result<Self> {
        let mut ranges = Vec::new();
        ranges.try_reserve_exact(header.range_count.get() as usize)?;
        let mut glyphs = Vec::new();
        glyphs.try_reserve_exact(header.glyph_count.get() as usize)?;

        Ok(Self {
            height: header.height.get(),
            space_width: header.space_width.get(),
            baseline: header.baseline.get(),
            ranges,
            glyphs,
        })
    }

    fn push_glyph(&mut self, record: GlyphRecord, pixels: &[u8]) -> Result<()> {
        let mut data = Vec::new();
        data.try_reserve_exact(pixels.len())?;
        data.extend_from_slice(pixels);
        self.glyphs
            .push(Glyph::new(record.width.get(), record.pitch.get(), data));
        Ok(())
    }

    fn finish(self) -> Result<Font> {
        Font::new(
            self.height,
            self.space_width,
            self.baseline,
            self.ranges,
            self.glyphs,
        )
    }
}

fn glyph_data_len(glyph: &Glyph, height: u16) -> usize {
    glyph.pitch() as usize * height as usize
}

impl Font {
    /// Exact size in bytes of the encoded font.
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE
            + RANGE_SIZE * self.ranges.len()
            + self
                .glyphs
                .iter()
                .map(|glyph| GLYPH_RECORD_SIZE + glyph_data_len(glyph, self.height))
                .sum::<usize>()
    }

    /// Encodes the font into the font file layout.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let range_count = u16::try_from(self.ranges.len())
            .map_err(|_| FontError::TooManyRanges(self.ranges.len()))?;
        let glyph_count = u16::try_from(self.glyphs.len())
            .map_err(|_| FontError::TooManyGlyphs(self.glyphs.len()))?;

        let size = self.encoded_len();
        let mut buffer = Vec::new();
        if let Err(err) = buffer.try_reserve_exact(size) {
            error!("failed to allocate {size} bytes for font file");
            return Err(err.into());
        }

        let header = FontFileHeader {
            magic: MAGIC,
            version: U32::new(FILE_VERSION),
            height: U16::new(self.height),
            space_width: U16::new(self.space_width),
            baseline: U16::new(self.baseline),
            range_count: U16::new(range_count),
            glyph_count: U16::new(glyph_count),
        };
        buffer.extend_from_slice(header.as_bytes());

        for range in &self.ranges {
            buffer.extend_from_slice(RangeRecord::from(range).as_bytes());
        }

        for glyph in &self.glyphs {
            let record = GlyphRecord {
                width: U16::new(glyph.width()),
                pitch: U16::new(glyph.pitch()),
            };
            buffer.extend_from_slice(record.as_bytes());
            buffer.extend_from_slice(glyph.data());
        }

        debug_assert_eq!(size, buffer.len(), "incorrect font file size");
        Ok(buffer)
    }

    /// Decodes a font file.
    ///
    /// The magic and version are checked before anything is allocated. Any
    /// later failure drops the partly built font.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(data);
        let header: FontFileHeader = reader.read()?;

        if header.magic != MAGIC {
            error!("incorrect font file type {:?}", header.magic);
            return Err(FontError::InvalidMagic {
                expected: MAGIC,
                found: header.magic,
            });
        }
        if header.version.get() != FILE_VERSION {
            error!("incorrect font file version {}", header.version.get());
            return Err(FontError::UnsupportedVersion(header.version.get()));
        }

        let mut builder = FontBuilder::new(&header).inspect_err(|_| {
            error!("out of memory loading font");
        })?;

        for _ in 0..header.range_count.get() {
            let record: RangeRecord = reader.read()?;
            builder.ranges.push(record.into());
        }

        for index in 0..header.glyph_count.get() {
            let record: GlyphRecord = reader.read()?;
            let len = record.pitch.get() as usize * builder.height as usize;
            let pixels = reader.bytes(len)?;
            builder.push_glyph(record, pixels).inspect_err(|_| {
                error!("out of memory loading glyph {index}");
            })?;
        }

        if reader.pos != data.len() {
            debug!(
                "ignoring {} bytes after the last glyph",
                data.len() - reader.pos
            );
        }

        let font = builder.finish()?;
        debug!(
            "loaded font: height {}, {} ranges, {} glyphs",
            font.height,
            font.ranges.len(),
            font.glyphs.len()
        );
        Ok(font)
    }
}
