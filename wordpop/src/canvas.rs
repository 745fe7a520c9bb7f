/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Provides the raster that each frame is composited onto, along with the basic geometry used
//! to describe things on it.

#[cfg(test)]
mod tests;

use serde::Deserialize;
use std::{
    fmt,
    str::FromStr,
};

/// A pixel coordinate. The origin is the top-left corner of the canvas.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A pixel extent.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The point at the center of an area of this size, rounded toward the origin.
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {

    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Determines whether or not two rectangles share any area. Rectangles that only touch
    /// along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {

        let (ax, ay) = (self.origin.x as i64, self.origin.y as i64);
        let (bx, by) = (other.origin.x as i64, other.origin.y as i64);

        ax < bx + other.size.width as i64
            && ax + self.size.width as i64 > bx
            && ay < by + other.size.height as i64
            && ay + self.size.height as i64 > by
    }

    /// Determines whether or not this rectangle lies entirely within an area of `size` that
    /// starts at the origin.
    pub fn within(&self, size: Size) -> bool {
        self.origin.x >= 0
            && self.origin.y >= 0
            && self.origin.x as i64 + self.size.width as i64 <= size.width as i64
            && self.origin.y as i64 + self.size.height as i64 <= size.height as i64
    }
}

/// A gamma-encoded RGB color.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(from = "[u8; 3]")]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {

    pub const BLACK: Rgb = Rgb { red: 0, green: 0, blue: 0 };
    pub const WHITE: Rgb = Rgb { red: 255, green: 255, blue: 255 };

    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl Default for Rgb {
    fn default() -> Self { Self::WHITE }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

/// Parses `RRGGBB` or `#RRGGBB` hex notation.
impl FromStr for Rgb {

    type Err = ParseRgbError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {

        let hex = value.strip_prefix('#').unwrap_or(value);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseRgbError)
        }

        let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16)
            .map_err(|_| ParseRgbError);

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseRgbError;

impl fmt::Display for ParseRgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color must be six hex digits, optionally preceded by #")
    }
}

impl std::error::Error for ParseRgbError {}

/// An RGB24 raster with rows stored top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    size: Size,
    pixels: Vec<u8>,
}

impl Canvas {

    /// Creates an all-black canvas.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![0; size.width as usize * size.height as usize * 3],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The raw RGB24 bytes of this canvas.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        let index = self.index(x, y)?;
        Some(Rgb::new(self.pixels[index], self.pixels[index + 1], self.pixels[index + 2]))
    }

    /// Blends `color` over the pixel at `(x, y)` with `coverage` as its alpha. Coordinates
    /// outside of the canvas are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb, coverage: u8) {

        if coverage == 0 {
            return
        }

        let index = match self.index(x, y) {
            Some(index) => index,
            None => return,
        };
        let alpha = coverage as u16;
        let inv_alpha = 255 - alpha;

        for (offset, src) in [color.red, color.green, color.blue].iter().enumerate() {
            let dst = self.pixels[index + offset] as u16;
            self.pixels[index + offset] = ((*src as u16 * alpha + dst * inv_alpha + 127) / 255) as u8;
        }
    }

    /// Fills a rectangle with a solid color, clipped to the canvas.
    pub fn fill(&mut self, rect: Rect, color: Rgb) {
        for row in 0..rect.size.height as i32 {
            for col in 0..rect.size.width as i32 {
                self.blend(rect.origin.x + col, rect.origin.y + row, color, 255);
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            None
        } else {
            Some((y as usize * self.size.width as usize + x as usize) * 3)
        }
    }
}
