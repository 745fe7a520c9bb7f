/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

use super::Cue;
use std::io::{Error as IoError, Read};
use thiserror::Error as ThisError;

/// A specialized [`Result`](std::result::Result) type for cue-reading operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// The error type for [ReadCuesExt].
///
/// Any of these is fatal. Nothing is rendered from a source that fails to load.
#[derive(ThisError, Debug)]
pub enum ReadError {
    /// The cues could not be read because of an underlying I/O error. Text that is not valid
    /// UTF-8 also lands here.
    #[error("cue IO error")]
    IoError {
        #[from]
        source: IoError,
    },
    /// The second line of a block does not contain the `-->` separator.
    #[error("cue {number} has no timing separator")]
    MissingTimingSeparator {
        number: usize,
    },
    /// A timestamp is not in `HH:MM:SS,mmm` form.
    #[error("cue {number} has unrecognized timestamp \"{value}\"")]
    UnrecognizedTimestamp {
        number: usize,
        value: String,
    },
    /// The cue ends before it starts.
    #[error("cue {number} ends before it starts")]
    EndBeforeStart {
        number: usize,
    },
}

/// Allows reading SRT cues from a source.
pub trait ReadCuesExt {
    /// Reads every cue from a source, in order.
    fn read_cues(&mut self) -> ReadResult<Vec<Cue>>;
}

impl<T: Read> ReadCuesExt for T {

    fn read_cues(&mut self) -> ReadResult<Vec<Cue>> {

        let mut content = String::new();

        self.read_to_string(&mut content)?;

        parse_cues(&content)
    }
}

/// Parses the full text of an SRT file into cues.
///
/// Blocks are separated by blank lines. Blocks with fewer than three lines carry no text and
/// are skipped.
pub fn parse_cues(content: &str) -> ReadResult<Vec<Cue>> {

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut cues = Vec::<Cue>::new();
    let mut block = Vec::<&str>::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if let Some(cue) = parse_block(&block, cues.len() + 1)? {
                cues.push(cue);
            }
            block.clear();
        } else {
            block.push(line);
        }
    }

    if let Some(cue) = parse_block(&block, cues.len() + 1)? {
        cues.push(cue);
    }

    Ok(cues)
}

fn parse_block(lines: &[&str], number: usize) -> ReadResult<Option<Cue>> {

    if lines.len() < 3 {
        return Ok(None)
    }

    let (start_str, end_str) = match lines[1].split_once("-->") {
        Some(times) => times,
        None => return Err(ReadError::MissingTimingSeparator { number }),
    };
    // Anything after the end timestamp is positioning data.
    let end_str = end_str.split_whitespace().next().unwrap_or("");
    let start = parse_timestamp(start_str.trim()).ok_or_else(||
        ReadError::UnrecognizedTimestamp { number, value: start_str.trim().to_string() }
    )?;
    let end = parse_timestamp(end_str).ok_or_else(||
        ReadError::UnrecognizedTimestamp { number, value: end_str.to_string() }
    )?;

    if end < start {
        return Err(ReadError::EndBeforeStart { number })
    }

    let text = lines[2..].iter()
        .map(|line| line.trim())
        .collect::<Vec<&str>>()
        .join(" ");

    Ok(Some(Cue { number, start, end, text }))
}

/// Parses an `HH:MM:SS,mmm` timestamp into seconds.
///
/// A `.` is accepted in place of the `,`, and the fractional part may have any number of
/// digits.
pub fn parse_timestamp(value: &str) -> Option<f64> {

    let mut parts = value.split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    let seconds = parts.next()?;

    if parts.next().is_some() {
        return None
    }

    let (whole, fraction) = seconds.split_once(|c: char| c == ',' || c == '.')?;

    if !all_digits(hours) || !all_digits(minutes) || !all_digits(whole) || !all_digits(fraction) {
        return None
    }

    let hours = hours.parse::<u64>().ok()?;
    let minutes = minutes.parse::<u64>().ok()?;
    let whole = whole.parse::<u64>().ok()?;

    if minutes > 59 || whole > 59 {
        return None
    }

    let fraction = format!("0.{}", fraction).parse::<f64>().ok()?;

    Some((hours * 3_600 + minutes * 60 + whole) as f64 + fraction)
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
