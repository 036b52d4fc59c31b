use std::{fs, path::PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use common::{Color, PixelFormat};
use framebuffer::{FrameBuffer, TextRenderer, unresolve};
use log::{LevelFilter, info};
use prop_font::{FILE_VERSION, Font, builtin::default_font};
use simple_logger::SimpleLogger;
use zune_core::{bit_depth::BitDepth, colorspace::ColorSpace, options::EncoderOptions};
use zune_ppm::PPMEncoder;

/// Inspect, export and render proportional bitmap fonts.
#[derive(Parser, Debug)]
#[command(name = "propfont", version)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the metrics and range table of a font file.
    Info { file: PathBuf },
    /// Write the built-in 8x14 font to a file.
    ExportBuiltin { out: PathBuf },
    /// Draw a line of text and print it, or save it as a PPM image.
    Render {
        /// Font file, the built-in font if omitted.
        #[arg(long)]
        font: Option<PathBuf>,
        /// Surface depth in bits per pixel, 8 or 16.
        #[arg(long, default_value_t = 8)]
        depth: u8,
        /// Text color as R,G,B.
        #[arg(long, default_value = "255,255,255", value_parser = parse_color)]
        color: Color,
        /// Surface width, the width of the text if omitted.
        #[arg(long)]
        width: Option<usize>,
        /// Write a PPM image here instead of printing.
        #[arg(long)]
        ppm: Option<PathBuf>,
        text: String,
    },
}

fn parse_color(s: &str) -> Result<Color> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid color component in {s:?}"))?;
    match parts.as_slice() {
        [red, green, blue] => Ok(Color::rgb(*red, *green, *blue)),
        _ => bail!("expected R,G,B, got {s:?}"),
    }
}

fn load_font(path: &PathBuf) -> Result<Font> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Font::parse(&data).with_context(|| format!("loading font {}", path.display()))
}

fn cmd_info(file: PathBuf) -> Result<()> {
    let font = load_font(&file)?;
    println!("{}", file.display());
    println!("  version:     {FILE_VERSION}");
    println!("  height:      {}", font.height());
    println!("  space width: {}", font.space_width());
    println!("  baseline:    {}", font.baseline());
    println!("  glyphs:      {}", font.glyphs().len());
    println!("  ranges:      {}", font.ranges().len());
    for range in font.ranges() {
        if range.printable {
            println!("    < {:5}  printable, offset {}", range.end, range.offset);
        } else {
            println!("    < {:5}  blank", range.end);
        }
    }
    for (index, glyph) in font.glyphs().iter().enumerate() {
        println!(
            "  glyph {index:5}: width {:3}, pitch {}",
            glyph.width(),
            glyph.pitch()
        );
    }
    Ok(())
}

fn cmd_export_builtin(out: PathBuf) -> Result<()> {
    let font = default_font()?;
    let bytes = font.to_bytes()?;
    fs::write(&out, &bytes).with_context(|| format!("writing {}", out.display()))?;
    info!("wrote {} bytes to {}", bytes.len(), out.display());
    Ok(())
}

fn cmd_render(
    font: Option<PathBuf>,
    depth: u8,
    color: Color,
    width: Option<usize>,
    ppm: Option<PathBuf>,
    text: String,
) -> Result<()> {
    let font = match font {
        Some(path) => load_font(&path)?,
        None => default_font()?,
    };
    let pixel_format = PixelFormat::from_bits_per_pixel(depth)
        .ok_or_else(|| anyhow!("unsupported depth {depth}"))?;

    let fb = render_text(&font, pixel_format, color, width, &text)?;
    match ppm {
        Some(path) => write_ppm(&fb, pixel_format, &path),
        None => {
            for line in ascii_art(&fb) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// Draws `text` at the top left of a new frame buffer, sized to fit it unless
/// `width` is given.
fn render_text(
    font: &Font,
    pixel_format: PixelFormat,
    color: Color,
    width: Option<usize>,
    text: &str,
) -> Result<FrameBuffer> {
    // one spare row below the text, drawing needs it
    let width = width.unwrap_or(font.pixel_width(text.as_bytes()) as usize + 1);
    let height = usize::from(font.height()) + 1;
    let mut fb = FrameBuffer::new(width, height, pixel_format);

    let mut renderer = TextRenderer::new(font);
    renderer.set_color_rgb(&pixel_format, color);
    renderer.draw_text(&mut fb, 0, 0, text.as_bytes())?;
    Ok(fb)
}

fn ascii_art(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.get_height())
        .map(|y| {
            (0..fb.get_width())
                .map(|x| match fb.pixel(x, y) {
                    Some(0) | None => '.',
                    Some(_) => '#',
                })
                .collect()
        })
        .collect()
}

fn write_ppm(fb: &FrameBuffer, pixel_format: PixelFormat, path: &PathBuf) -> Result<()> {
    let (width, height) = (fb.get_width(), fb.get_height());
    let mut rgb = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let c = unresolve(pixel_format, fb.pixel(x, y).unwrap_or(0));
            rgb.extend_from_slice(&[c.red, c.green, c.blue]);
        }
    }

    let options = EncoderOptions::new(width, height, ColorSpace::RGB, BitDepth::Eight);
    let encoded = PPMEncoder::new(&rgb, options)
        .encode()
        .map_err(|e| anyhow!("encoding ppm: {e:?}"))?;
    fs::write(path, encoded).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {width}x{height} image to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).env().init()?;

    match cli.cmd {
        Cmd::Info { file } => cmd_info(file),
        Cmd::ExportBuiltin { out } => cmd_export_builtin(out),
        Cmd::Render {
            font,
            depth,
            color,
            width,
            ppm,
            text,
        } => cmd_render(font, depth, color, width, ppm, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use test_case::test_case;

    #[test_case("255,0,10", Color::rgb(255, 0, 10))]
    #[test_case(" 1, 2 ,3 ", Color::rgb(1, 2, 3))]
    fn test_parse_color(s: &str, expected: Color) {
        assert_eq!(expected, parse_color(s).unwrap());
    }

    #[test_case("1,2" ; "too few")]
    #[test_case("1,2,3,4" ; "too many")]
    #[test_case("256,0,0" ; "out of range")]
    fn test_parse_color_invalid(s: &str) {
        assert!(parse_color(s).is_err());
    }

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_builtin_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("builtin.font");
        cmd_export_builtin(path.clone()).unwrap();
        assert_eq!(default_font().unwrap(), load_font(&path).unwrap());
        cmd_info(path).unwrap();
    }

    #[test]
    fn test_info_rejects_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-font");
        fs::write(&path, b"PSF2 and then some more bytes").unwrap();
        assert!(cmd_info(path.clone()).is_err());
        assert!(cmd_info(dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_render_letter() {
        let font = default_font().unwrap();
        let fb = render_text(&font, PixelFormat::Indexed8, Color::white(), None, "A").unwrap();
        assert_eq!(
            vec![
                ".........",
                ".........",
                "...##....",
                "..####...",
                ".##..##..",
                ".##..##..",
                ".##..##..",
                ".######..",
                ".##..##..",
                ".##..##..",
                ".##..##..",
                ".........",
                ".........",
                ".........",
                ".........",
            ],
            ascii_art(&fb)
        );
        // white is xterm color 15
        assert_eq!(Some(15), fb.pixel(3, 2));
    }

    #[test]
    fn test_render_unsupported_depth() {
        let font = default_font().unwrap();
        assert!(render_text(&font, PixelFormat::Rgb888, Color::white(), None, "A").is_err());
        assert!(cmd_render(None, 12, Color::white(), None, None, "A".into()).is_err());
    }

    #[test]
    fn test_write_ppm() {
        let font = default_font().unwrap();
        let red = Color::rgb(255, 0, 0);
        let fb = render_text(&font, PixelFormat::Rgb565, red, None, "A").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ppm");
        write_ppm(&fb, PixelFormat::Rgb565, &path).unwrap();

        let data = fs::read(&path).unwrap();
        assert!(data.starts_with(b"P6"));
        let pixels = 9 * 15 * 3;
        assert!(data.len() > pixels);
        let rgb = &data[data.len() - pixels..];
        let at = |x: usize, y: usize| &rgb[(y * 9 + x) * 3..(y * 9 + x) * 3 + 3];
        assert_eq!(&[255, 0, 0], at(1, 4));
        assert_eq!(&[0, 0, 0], at(0, 4));
        assert_eq!(&[0, 0, 0], at(8, 14));
    }
}
