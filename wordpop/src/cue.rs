/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Loads timed subtitle cues.
//!
//! # Overview
//!
//! A cue is the unit of timing within an SRT file. It defines a span of time along with the
//! text to be shown during that span. Cues are read once, in file order, and never change
//! afterward.
//!
//! An SRT block looks like this:
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:03,500
//! first line of text
//! second line of text
//! ```
//!
//! All text lines of a block are joined with single spaces, as only the individual words matter
//! from here on.


mod cueread;

pub use cueread::*;

/// Represents a single timed subtitle cue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cue {
    /// The one-based position of this cue among those read from its source.
    pub number: usize,
    /// The time, in seconds, at which this cue becomes active.
    pub start: f64,
    /// The time, in seconds, at which this cue stops being active. This is never less than
    /// `start`.
    pub end: f64,
    /// The text of the cue with any line breaks collapsed into spaces.
    pub text: String,
}

impl Cue {

    /// Splits the text of this cue into its whitespace-delimited words.
    pub fn words(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Determines whether or not `time` falls within this cue, inclusive of both ends.
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}
