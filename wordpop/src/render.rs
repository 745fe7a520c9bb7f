/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Turns cues into frames.
//!
//! # Overview
//!
//! Rendering is a fold over frame numbers. The only thing carried from one frame to the next is
//! a [RenderState], which holds the words on screen along with the slot of the last word that
//! appeared. For each frame, [Renderer::step] works out whether a new word appears and, if so,
//! places it and pushes it onto the window. [Renderer::compose] then draws whatever the window
//! holds onto a fresh canvas.
//!
//! Frames with no active word leave the state untouched, so whatever was on screen stays there.


use super::{
    canvas::{Canvas, Point, Size},
    config::{ConfigError, RenderConfig},
    cue::{Cue, ReadError as CueReadError},
    encode::{EncodeError, WriteFrameExt},
    placement::{OffsetSource, Placement, PlacementRules},
    schedule::{active_word, frame_count, frame_time, Slot},
    text::{FontError, TextRenderer},
    window::{Admission, VisibleWindow, WordBox},
};
use std::io::Write;
use thiserror::Error as ThisError;
use tracing::{debug, info, warn};

/// A specialized [`Result`](std::result::Result) type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// The error type for a full render, from loading inputs through encoding.
#[derive(ThisError, Debug)]
pub enum RenderError {
    #[error("could not load configuration")]
    ConfigError {
        #[from]
        source: ConfigError,
    },
    #[error("could not read cues")]
    CueError {
        #[from]
        source: CueReadError,
    },
    #[error("could not load font")]
    FontError {
        #[from]
        source: FontError,
    },
    #[error("could not encode frames")]
    EncodeError {
        #[from]
        source: EncodeError,
    },
}

/// How a new word got its position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PlacementKind {
    /// The window was empty, so the word was placed anywhere within the wide margin.
    First,
    /// The word was placed clear of every other word.
    Accepted,
    /// Every placement attempt collided.
    Degraded,
}

/// Describes a word appearing on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct WordEvent {
    pub frame: u64,
    pub slot: Slot,
    pub word: String,
    pub size: Size,
    /// Where placement put the word. If the window collapsed, the word is actually shown at the
    /// center of the screen instead.
    pub position: Point,
    pub placement: PlacementKind,
    pub admission: Admission,
}

/// Everything carried from one frame to the next.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub window: VisibleWindow,
    /// The slot of the most recently appearing word.
    pub last_slot: Option<Slot>,
}

impl RenderState {
    pub fn new(max_visible: usize) -> Self {
        Self {
            window: VisibleWindow::new(max_visible),
            last_slot: None,
        }
    }
}

/// Totals for a finished render.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RenderSummary {
    pub frames: u64,
    pub words: u64,
    pub collapses: u64,
    pub degraded: u64,
}

/// Renders a set of cues with a given text renderer and source of randomness.
pub struct Renderer<'a, T, O> {
    cues: &'a [Cue],
    config: &'a RenderConfig,
    rules: PlacementRules,
    text: T,
    offsets: O,
}

impl<'a, T: TextRenderer, O: OffsetSource> Renderer<'a, T, O> {

    pub fn new(cues: &'a [Cue], config: &'a RenderConfig, text: T, offsets: O) -> Self {
        Self {
            cues,
            config,
            rules: config.placement_rules(),
            text,
            offsets,
        }
    }

    /// The number of frames needed to cover every cue.
    pub fn frame_count(&self) -> u64 {
        frame_count(self.cues, self.config.fps)
    }

    pub fn initial_state(&self) -> RenderState {
        RenderState::new(self.config.max_visible_words)
    }

    /// Advances `state` to `frame`, reporting any word that appears.
    pub fn step(&mut self, mut state: RenderState, frame: u64) -> (RenderState, Option<WordEvent>) {

        let word = match active_word(self.cues, frame_time(frame, self.config.fps)) {
            Some(word) => word,
            None => return (state, None),
        };
        let last_text = state.window.last().map(|last| last.word.as_str());

        if !self.config.new_word_rule.is_new(&word, last_text, state.last_slot) {
            return (state, None)
        }

        let canvas = self.config.canvas_size();
        let size = self.text.measure(word.text);
        let (position, placement) = match state.window.last() {
            Some(anchor) => {
                match self.rules.place(
                    &mut self.offsets, anchor.position, size, canvas, &state.window.rects(),
                ) {
                    Placement::Accepted(point) => (point, PlacementKind::Accepted),
                    Placement::Degraded(point) => {
                        warn!(
                            frame,
                            word = word.text,
                            attempts = self.rules.max_attempts,
                            "no clear spot found; placing word without checks"
                        );
                        (point, PlacementKind::Degraded)
                    }
                }
            }
            None => {
                (self.rules.first_position(&mut self.offsets, size, canvas), PlacementKind::First)
            }
        };
        let admission = state.window.push(
            WordBox {
                word: word.text.to_string(),
                position,
                size,
                color: self.config.text_color,
            },
            canvas,
        );

        state.last_slot = Some(word.slot);

        debug!(
            frame,
            word = word.text,
            x = position.x,
            y = position.y,
            width = size.width,
            height = size.height,
            placement = ?placement,
            "new word"
        );

        if admission == Admission::Collapsed {
            debug!(frame, word = word.text, "window collapsed");
        }

        let event = WordEvent {
            frame,
            slot: word.slot,
            word: word.text.to_string(),
            size,
            position,
            placement,
            admission,
        };

        (state, Some(event))
    }

    /// Draws every visible word onto a blank canvas.
    pub fn compose(&mut self, state: &RenderState) -> Canvas {

        let mut canvas = Canvas::new(self.config.canvas_size());

        for word_box in state.window.boxes() {
            self.text.draw(&mut canvas, &word_box.word, word_box.position, word_box.color);
        }

        canvas
    }

    /// Advances `state` to `frame` and draws the result.
    pub fn render_frame(&mut self, state: RenderState, frame: u64) -> (RenderState, Canvas) {

        let (state, _) = self.step(state, frame);
        let canvas = self.compose(&state);

        (state, canvas)
    }

    /// Renders every frame, in order, to `output`.
    pub fn render_to<W: Write>(&mut self, output: &mut W) -> RenderResult<RenderSummary> {

        let total = self.frame_count();
        let fps = self.config.fps as u64;
        let mut state = self.initial_state();
        let mut summary = RenderSummary::default();

        info!(frames = total, cues = self.cues.len(), "rendering");

        for frame in 0..total {

            let (next, event) = self.step(state, frame);

            state = next;

            if let Some(event) = event {
                summary.words += 1;
                if event.admission == Admission::Collapsed {
                    summary.collapses += 1;
                }
                if event.placement == PlacementKind::Degraded {
                    summary.degraded += 1;
                }
            }

            output.write_frame(&self.compose(&state))?;
            summary.frames += 1;

            if frame % fps == 0 {
                info!("Processing: {:.1}%", frame as f64 / total as f64 * 100.0);
            }
        }

        output.flush().map_err(EncodeError::from)?;

        info!(
            frames = summary.frames,
            words = summary.words,
            collapses = summary.collapses,
            degraded = summary.degraded,
            "rendering complete"
        );

        Ok(summary)
    }
}
