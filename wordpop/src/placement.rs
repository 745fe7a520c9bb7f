/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Chooses where newly appearing words go.
//!
//! # Overview
//!
//! Each word after the first is placed just to the right of the previous one, jittered by a
//! random offset on both axes and clamped so that it stays clear of the screen border. A
//! candidate spot that collides with any word already on screen is thrown away and a new one is
//! drawn, up to a fixed number of attempts.
//!
//! Should every attempt collide, the word is placed directly to the right of the previous one
//! without any further checks. This is reported as [`Placement::Degraded`] so that callers can
//! tell it apart from a checked placement; words placed this way may overlap others or run off
//! the screen.
//!
//! The very first word of a window has nothing to be placed against, so it lands anywhere
//! within a wider border.


use super::canvas::{Point, Rect, Size};
use rand::Rng;

/// A source of random offsets.
pub trait OffsetSource {
    /// Returns an integer within `low..=high`. Implementations return `low` if the range is
    /// empty.
    fn next_in_range(&mut self, low: i32, high: i32) -> i32;
}

impl<R: Rng> OffsetSource for R {

    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            low
        } else {
            self.gen_range(low..=high)
        }
    }
}

/// The outcome of placing a word.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Placement {
    /// The word was placed clear of every other word and within the screen margin.
    Accepted(Point),
    /// Every attempt collided, so the word was placed beside its anchor without any checks.
    Degraded(Point),
}

impl Placement {

    pub fn point(&self) -> Point {
        match self {
            Placement::Accepted(point) | Placement::Degraded(point) => *point,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Placement::Degraded(_))
    }
}

/// The knobs governing placement.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PlacementRules {
    /// Minimum distance from the screen border for every word but the first.
    pub margin: u32,
    /// Minimum distance from the screen border for the first word of a window.
    pub first_word_margin: u32,
    /// Inclusive bounds of the random offset applied to both axes.
    pub offset_range: (i32, i32),
    pub max_attempts: u32,
    /// Horizontal gap between the anchor word and a degraded placement.
    pub fallback_gap: u32,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            margin: 50,
            first_word_margin: 90,
            offset_range: (-40, 40),
            max_attempts: 100,
            fallback_gap: 10,
        }
    }
}

impl PlacementRules {

    /// Places a word of `size` next to the word at `anchor`, avoiding all of `existing`.
    pub fn place<O: OffsetSource + ?Sized>(
        &self,
        offsets: &mut O,
        anchor: Point,
        size: Size,
        canvas: Size,
        existing: &[Rect],
    ) -> Placement {

        let (low, high) = self.offset_range;
        let base_x = anchor.x as i64 + size.width as i64;
        let base_y = anchor.y as i64;

        for _ in 0..self.max_attempts {

            let offset_x = offsets.next_in_range(low, high) as i64;
            let offset_y = offsets.next_in_range(low, high) as i64;
            let candidate = Rect::new(
                Point::new(
                    clamp_axis(base_x + offset_x, size.width, canvas.width, self.margin),
                    clamp_axis(base_y + offset_y, size.height, canvas.height, self.margin),
                ),
                size,
            );

            if !existing.iter().any(|rect| candidate.overlaps(rect)) {
                return Placement::Accepted(candidate.origin)
            }
        }

        Placement::Degraded(Point::new(
            saturate(base_x + self.fallback_gap as i64),
            anchor.y,
        ))
    }

    /// Picks a spot for the first word of a window. The word lands anywhere that keeps it
    /// `first_word_margin` away from every border. Should the word be too large for that, it is
    /// pinned to the margin instead.
    pub fn first_position<O: OffsetSource + ?Sized>(
        &self,
        offsets: &mut O,
        size: Size,
        canvas: Size,
    ) -> Point {

        let margin = self.first_word_margin as i64;
        let x_high = canvas.width as i64 - size.width as i64 - margin;
        let y_high = canvas.height as i64 - size.height as i64 - margin;

        Point::new(
            offsets.next_in_range(saturate(margin), saturate(x_high)),
            offsets.next_in_range(saturate(margin), saturate(y_high)),
        )
    }
}

/// Clamps a position along one axis to `[margin, extent - size - margin]`. The lower bound wins
/// when the two cross.
fn clamp_axis(position: i64, size: u32, extent: u32, margin: u32) -> i32 {

    let margin = margin as i64;
    let high = extent as i64 - size as i64 - margin;

    saturate(margin.max(position.min(high)))
}

fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
