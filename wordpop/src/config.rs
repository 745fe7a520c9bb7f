/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Holds every setting that shapes a render.
//!
//! Settings can be loaded from a TOML file, where any key that is left out keeps its default:
//!
//! ```toml
//! canvas_width = 1920
//! canvas_height = 1080
//! fps = 24
//! font_path = "fonts/Garamond-Italic.ttf"
//! text_color = [255, 220, 120]
//! new_word_rule = "slot"
//! seed = 42
//! ```


use super::{
    canvas::{Rgb, Size},
    placement::PlacementRules,
    schedule::NewWordRule,
    window::MAX_VISIBLE,
};
use serde::Deserialize;
use std::{
    fs,
    io::Error as IoError,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// A specialized [`Result`](std::result::Result) type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// The error type for [RenderConfig].
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("could not read config \"{}\"", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("could not parse config")]
    ParseToml {
        #[from]
        source: toml::de::Error,
    },
    #[error("config value \"{field}\" {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
    #[error("no font was given")]
    MissingFontPath,
}

/// Every setting that shapes a render.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub fps: u32,
    pub font_path: Option<PathBuf>,
    /// The font size in pixels.
    pub font_size: f32,
    pub text_color: Rgb,
    pub max_visible_words: usize,
    pub placement_margin: u32,
    pub first_word_margin: u32,
    pub placement_random_offset_range: [i32; 2],
    pub max_placement_attempts: u32,
    pub fallback_gap: u32,
    pub new_word_rule: NewWordRule,
    /// Seeds placement randomness. Runs without a seed are not reproducible.
    pub seed: Option<u64>,
    /// The ffmpeg executable to encode with.
    pub ffmpeg: PathBuf,
    /// The ffmpeg video codec to encode with.
    pub codec: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let rules = PlacementRules::default();
        Self {
            canvas_width: 1280,
            canvas_height: 720,
            fps: 30,
            font_path: None,
            font_size: 40.0,
            text_color: Rgb::WHITE,
            max_visible_words: MAX_VISIBLE,
            placement_margin: rules.margin,
            first_word_margin: rules.first_word_margin,
            placement_random_offset_range: [rules.offset_range.0, rules.offset_range.1],
            max_placement_attempts: rules.max_attempts,
            fallback_gap: rules.fallback_gap,
            new_word_rule: NewWordRule::default(),
            seed: None,
            ffmpeg: PathBuf::from("ffmpeg"),
            codec: "libx264".to_string(),
        }
    }
}

impl RenderConfig {

    /// Loads and validates a TOML config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {

        let content = fs::read_to_string(path).map_err(|source|
            ConfigError::ReadConfig { path: path.to_path_buf(), source }
        )?;

        Self::from_toml_str(&content)
    }

    /// Parses and validates TOML config text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {

        let config = toml::from_str::<RenderConfig>(content)?;

        config.validate()?;

        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> ConfigResult<()> {

        let invalid = |field, reason| Err(ConfigError::InvalidValue { field, reason });

        if self.canvas_width == 0 {
            return invalid("canvas_width", "must be greater than zero")
        }
        if self.canvas_height == 0 {
            return invalid("canvas_height", "must be greater than zero")
        }
        if self.canvas_width % 2 != 0 || self.canvas_height % 2 != 0 {
            return invalid("canvas_width", "and canvas_height must both be even")
        }
        if self.fps == 0 {
            return invalid("fps", "must be greater than zero")
        }
        if !(self.font_size > 0.0) || !self.font_size.is_finite() {
            return invalid("font_size", "must be a positive number")
        }
        if self.max_visible_words == 0 {
            return invalid("max_visible_words", "must be greater than zero")
        }
        if self.placement_random_offset_range[0] > self.placement_random_offset_range[1] {
            return invalid("placement_random_offset_range", "must be ordered low to high")
        }
        if self.max_placement_attempts == 0 {
            return invalid("max_placement_attempts", "must be greater than zero")
        }
        if self.codec.trim().is_empty() {
            return invalid("codec", "must not be empty")
        }

        Ok(())
    }

    /// The font to render with, which must have been given somewhere.
    pub fn font_path(&self) -> ConfigResult<&Path> {
        self.font_path.as_deref().ok_or(ConfigError::MissingFontPath)
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    pub fn placement_rules(&self) -> PlacementRules {
        PlacementRules {
            margin: self.placement_margin,
            first_word_margin: self.first_word_margin,
            offset_range: (
                self.placement_random_offset_range[0],
                self.placement_random_offset_range[1],
            ),
            max_attempts: self.max_placement_attempts,
            fallback_gap: self.fallback_gap,
        }
    }
}
