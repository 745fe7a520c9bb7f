/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Renders timed subtitle cues as a word-by-word overlay.
//!
//! # Overview
//!
//! Each cue is sliced into equal time spans, one per word. At every video frame, the
//! [schedule] module determines which word is active. When that word differs from the one most
//! recently shown, the [placement] module picks a spot for it near the previous word that does
//! not collide with anything else on screen, and the [window] module appends it to the set of
//! visible words. Once that set grows past its limit, it collapses down to the newest word
//! alone, parked at the center of the screen.
//!
//! The [render] module threads that state from frame to frame, composites the visible words
//! onto a [canvas] with a [text] renderer and hands each raster to an [encode] sink.

pub mod canvas;
pub mod config;
pub mod cue;
pub mod encode;
pub mod logging;
pub mod placement;
pub mod render;
pub mod schedule;
pub mod text;
pub mod window;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod tests;

/// Formats a number of seconds as an SRT timestamp (`HH:MM:SS,mmm`).
pub fn seconds_to_timestamp(seconds: f64) -> String {

    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let ms = total_ms % 1_000;
    let s = (total_ms / 1_000) % 60;
    let m = (total_ms / 60_000) % 60;
    let h = total_ms / 3_600_000;

    format!("{:02}:{:02}:{:02},{:03}", h, m, s, ms)
}
