/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Tracks which words are on screen.
//!
//! Words are kept in the order they appeared. Nothing expires with time; the only way out is a
//! collapse, which happens as soon as a newly appended word pushes the window past its limit.
//! At that point everything but the newest word is dropped, and the newest word is moved to
//! the center of the screen to start the next window.

#[cfg(test)]
mod tests;

use super::canvas::{Point, Rect, Rgb, Size};

/// The default number of words that may be on screen at once.
pub const MAX_VISIBLE: usize = 7;

/// A word as placed on screen.
#[derive(Clone, Debug, Hash, PartialEq)]
pub struct WordBox {
    pub word: String,
    /// The top-left corner of the word's inked area.
    pub position: Point,
    pub size: Size,
    pub color: Rgb,
}

impl WordBox {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// What happened to the window when a word was pushed onto it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Admission {
    /// The word was added alongside those already showing.
    Appended,
    /// The window overflowed and now holds only the new word, moved to the screen's center.
    Collapsed,
}

/// The ordered set of words currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleWindow {
    boxes: Vec<WordBox>,
    max_visible: usize,
}

impl Default for VisibleWindow {
    fn default() -> Self { Self::new(MAX_VISIBLE) }
}

impl VisibleWindow {

    /// Creates an empty window. A limit of zero is treated as one.
    pub fn new(max_visible: usize) -> Self {
        Self {
            boxes: Vec::with_capacity(max_visible.max(1)),
            max_visible: max_visible.max(1),
        }
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn boxes(&self) -> &[WordBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The most recently shown word.
    pub fn last(&self) -> Option<&WordBox> {
        self.boxes.last()
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.boxes.iter().map(WordBox::rect).collect()
    }

    /// Appends a word, collapsing the window if that puts it over its limit.
    pub fn push(&mut self, mut word_box: WordBox, canvas: Size) -> Admission {

        if self.boxes.len() < self.max_visible {
            self.boxes.push(word_box);
            return Admission::Appended
        }

        word_box.position = canvas.center();
        self.boxes.clear();
        self.boxes.push(word_box);

        Admission::Collapsed
    }
}
