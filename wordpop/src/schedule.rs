/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Determines which word is active at any given moment.
//!
//! # Overview
//!
//! Every word within a cue gets an equal share of the cue's duration, regardless of its length.
//! For a cue of `n` words running from `start` to `end`, word `i` is active from
//! `start + i * d` up to `start + (i + 1) * d`, where `d = (end - start) / n`.
//!
//! The active cue for a timestamp is the first cue, in order, whose span contains it. Both ends
//! of that span are inclusive, so a timestamp landing exactly on `end` still selects the cue,
//! but it selects no word within it.

#[cfg(test)]
mod tests;

use super::cue::Cue;
use serde::Deserialize;
use std::{
    fmt,
    str::FromStr,
};

/// Identifies one word of one cue.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Slot {
    /// The zero-based index of the cue.
    pub cue: usize,
    /// The zero-based index of the word within its cue.
    pub word: usize,
}

/// The word that is active at a given moment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ActiveWord<'a> {
    pub slot: Slot,
    pub text: &'a str,
}

/// The timing of a single word within its cue.
#[derive(Clone, Debug, PartialEq)]
pub struct WordSlot {
    pub index: usize,
    pub text: String,
    pub start: f64,
    pub end: f64,
}

/// Decides what counts as a new word.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NewWordRule {
    /// A word is new when its text differs from the most recently shown word. The same word
    /// repeated back to back, even across cues, is only shown once.
    #[default]
    Text,
    /// A word is new when it occupies a different slot than the most recently shown word.
    /// Repeated words are each shown.
    Slot,
}

impl NewWordRule {

    /// Determines whether or not `candidate` is a new appearance, given the text and slot of the
    /// most recently shown word.
    pub fn is_new(
        &self,
        candidate: &ActiveWord<'_>,
        last_text: Option<&str>,
        last_slot: Option<Slot>,
    ) -> bool {
        match self {
            NewWordRule::Text => last_text != Some(candidate.text),
            NewWordRule::Slot => last_slot != Some(candidate.slot),
        }
    }
}

impl FromStr for NewWordRule {

    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(NewWordRule::Text),
            "slot" => Ok(NewWordRule::Slot),
            _ => Err(format!("unrecognized new word rule \"{}\"", value)),
        }
    }
}

impl fmt::Display for NewWordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NewWordRule::Text => "text",
            NewWordRule::Slot => "slot",
        })
    }
}

/// The timestamp, in seconds, of a frame.
pub fn frame_time(frame: u64, fps: u32) -> f64 {
    frame as f64 / fps as f64
}

/// The number of frames needed to cover every cue, which is `ceil(max(end) * fps)`.
pub fn frame_count(cues: &[Cue], fps: u32) -> u64 {
    cues.iter()
        .map(|cue| cue.end)
        .fold(None, |max: Option<f64>, end| Some(max.map_or(end, |max| max.max(end))))
        .map_or(0, |max_end| (max_end * fps as f64).ceil().max(0.0) as u64)
}

/// Finds the first cue that contains `time`.
pub fn find_cue(cues: &[Cue], time: f64) -> Option<(usize, &Cue)> {
    cues.iter().enumerate().find(|(_, cue)| cue.contains(time))
}

/// Computes which word of `cue` is active at `time`, if any.
///
/// Cues with no words or no duration never have an active word, and neither does the instant
/// at which a cue ends.
pub fn word_index(cue: &Cue, word_count: usize, time: f64) -> Option<usize> {

    let duration = cue.duration();

    if word_count == 0 || !(duration > 0.0) || time < cue.start {
        return None
    }

    let word_duration = duration / word_count as f64;
    let index = ((time - cue.start) / word_duration).floor() as usize;

    if index < word_count {
        Some(index)
    } else {
        None
    }
}

/// Determines the active word at `time`.
pub fn active_word(cues: &[Cue], time: f64) -> Option<ActiveWord<'_>> {

    let (cue_index, cue) = find_cue(cues, time)?;
    let words = cue.words();
    let index = word_index(cue, words.len(), time)?;

    Some(ActiveWord {
        slot: Slot { cue: cue_index, word: index },
        text: words[index],
    })
}

/// Lays out the timing of every word in `cue`.
pub fn word_slots(cue: &Cue) -> Vec<WordSlot> {

    let words = cue.words();

    if words.is_empty() {
        return vec![]
    }

    let word_duration = cue.duration() / words.len() as f64;

    words.iter().enumerate().map(|(index, text)|
        WordSlot {
            index,
            text: text.to_string(),
            start: cue.start + index as f64 * word_duration,
            end: cue.start + (index + 1) as f64 * word_duration,
        }
    ).collect()
}
