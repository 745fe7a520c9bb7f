/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: CC0-1.0
 */

//! Deterministic stand-ins for randomness and fonts.

use super::{
    canvas::{Canvas, Point, Rect, Rgb, Size},
    placement::OffsetSource,
    text::TextRenderer,
};

/// Replays a fixed list of values, cycling once it runs out. Each value is clamped into the
/// requested range.
pub struct ScriptedOffsets {
    values: Vec<i32>,
    next: usize,
    pub draws: usize,
}

impl ScriptedOffsets {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, next: 0, draws: 0 }
    }
}

impl OffsetSource for ScriptedOffsets {

    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {

        let value = self.values.get(self.next).copied().unwrap_or(low);

        self.next = (self.next + 1) % self.values.len().max(1);
        self.draws += 1;

        if high <= low { low } else { value.clamp(low, high) }
    }
}

/// Treats every character as a solid block of the same size.
pub struct BlockText {
    pub advance: u32,
    pub line_height: u32,
}

impl Default for BlockText {
    fn default() -> Self {
        Self { advance: 10, line_height: 20 }
    }
}

impl TextRenderer for BlockText {

    fn measure(&self, text: &str) -> Size {
        Size::new(text.chars().count() as u32 * self.advance, self.line_height)
    }

    fn draw(&mut self, canvas: &mut Canvas, text: &str, position: Point, color: Rgb) {
        canvas.fill(Rect::new(position, self.measure(text)), color);
    }
}
