/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Measures and draws words.
//!
//! A word's size is the bounding box of its inked pixels, and drawing a word at a position puts
//! the top-left corner of that same box there. This keeps what is drawn in agreement with what
//! placement checks against.


use super::canvas::{Canvas, Point, Rgb, Size};
use fontdue::{
    layout::{CoordinateSystem, GlyphPosition, GlyphRasterConfig, Layout, LayoutSettings, TextStyle},
    Font,
    FontSettings,
};
use std::{
    collections::HashMap,
    fs,
    io::Error as IoError,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// A specialized [`Result`](std::result::Result) type for font-loading operations.
pub type FontResult<T> = Result<T, FontError>;

/// The error type for [FontRenderer].
#[derive(ThisError, Debug)]
pub enum FontError {
    #[error("could not read font \"{}\"", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("could not parse font: {reason}")]
    UnparsableFont {
        reason: &'static str,
    },
    #[error("font size must be a positive number")]
    InvalidSize,
}

/// Something that can measure words and draw them onto a canvas.
pub trait TextRenderer {
    /// The size of the inked area of `text`.
    fn measure(&self, text: &str) -> Size;
    /// Draws `text` so that the top-left corner of its inked area lands on `position`.
    fn draw(&mut self, canvas: &mut Canvas, text: &str, position: Point, color: Rgb);
}

struct GlyphBitmap {
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

/// Renders text with a single TrueType or OpenType font at a fixed pixel size.
pub struct FontRenderer {
    font: Font,
    size: f32,
    glyph_cache: HashMap<GlyphRasterConfig, GlyphBitmap>,
}

impl FontRenderer {

    /// Loads a font file.
    pub fn open(path: &Path, size: f32) -> FontResult<Self> {

        let bytes = fs::read(path).map_err(|source|
            FontError::IoError { path: path.to_path_buf(), source }
        )?;

        Self::from_bytes(bytes, size)
    }

    pub fn from_bytes(bytes: Vec<u8>, size: f32) -> FontResult<Self> {

        if !(size > 0.0) || !size.is_finite() {
            return Err(FontError::InvalidSize)
        }

        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|reason| FontError::UnparsableFont { reason })?;

        Ok(Self {
            font,
            size,
            glyph_cache: HashMap::new(),
        })
    }

    /// Lays out `text` at the origin, returning its visible glyphs along with the top-left
    /// corner and size of their combined bounding box.
    fn layout(&self, text: &str) -> (Vec<GlyphPosition>, (f32, f32), Size) {

        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);

        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.font], &TextStyle::new(text, self.size, 0));

        let glyphs = layout.glyphs()
            .iter()
            .filter(|glyph| glyph.width > 0 && glyph.height > 0)
            .cloned()
            .collect::<Vec<GlyphPosition>>();

        if glyphs.is_empty() {
            return (glyphs, (0.0, 0.0), Size::default())
        }

        let mut min = (f32::MAX, f32::MAX);
        let mut max = (f32::MIN, f32::MIN);

        for glyph in glyphs.iter() {
            min.0 = min.0.min(glyph.x);
            min.1 = min.1.min(glyph.y);
            max.0 = max.0.max(glyph.x + glyph.width as f32);
            max.1 = max.1.max(glyph.y + glyph.height as f32);
        }

        let size = Size::new(
            (max.0 - min.0).ceil() as u32,
            (max.1 - min.1).ceil() as u32,
        );

        (glyphs, min, size)
    }
}

impl TextRenderer for FontRenderer {

    fn measure(&self, text: &str) -> Size {
        self.layout(text).2
    }

    fn draw(&mut self, canvas: &mut Canvas, text: &str, position: Point, color: Rgb) {

        let (glyphs, origin, _) = self.layout(text);

        for glyph in glyphs {

            let font = &self.font;
            let bitmap = self.glyph_cache.entry(glyph.key).or_insert_with(|| {
                let (metrics, coverage) = font.rasterize_config(glyph.key);
                GlyphBitmap {
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                }
            });
            let left = position.x + (glyph.x - origin.0).round() as i32;
            let top = position.y + (glyph.y - origin.1).round() as i32;

            for row in 0..bitmap.height {
                for col in 0..bitmap.width {
                    canvas.blend(
                        left + col as i32,
                        top + row as i32,
                        color,
                        bitmap.coverage[row * bitmap.width + col],
                    );
                }
            }
        }
    }
}
