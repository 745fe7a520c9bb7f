/*
 * Copyright 2021 William Swartzendruber
 *
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * SPDX-License-Identifier: MPL-2.0
 */

use wordpop::{
    canvas::Rgb,
    config::RenderConfig,
    cue::{Cue, ReadCuesExt, ReadError},
    encode::{EncoderSettings, FfmpegEncoder},
    logging::init_logging,
    render::{RenderResult, Renderer},
    schedule::NewWordRule,
    text::FontRenderer,
};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    error::Error,
    fs::File,
    io::{stdin, BufReader, BufWriter, Read},
    path::{Path, PathBuf},
    process::exit,
    str::FromStr,
};
use clap::{
    app_from_crate, crate_authors, crate_description, crate_name, crate_version, Arg, ArgMatches,
};
use tracing::{info, warn};

fn main() {

    let matches = app_from_crate!()
        .arg(Arg::with_name("config")
            .long("config")
            .short("c")
            .value_name("FILE")
            .help("TOML file to read settings from; flags override it")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("font")
            .long("font")
            .short("f")
            .value_name("FONT-FILE")
            .help("TrueType or OpenType font to draw words with")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("font-size")
            .long("font-size")
            .short("s")
            .value_name("PIXELS")
            .help("Font size in pixels [default: 40]")
            .takes_value(true)
            .required(false)
            .validator(|value| {
                match value.parse::<f32>() {
                    Ok(size) if size.is_normal() && size.is_sign_positive() => Ok(()),
                    _ => Err("must be a positive number".to_string()),
                }
            })
        )
        .arg(Arg::with_name("width")
            .long("width")
            .value_name("PIXELS")
            .help("Width of the video [default: 1280]")
            .takes_value(true)
            .required(false)
            .validator(even_dimension)
        )
        .arg(Arg::with_name("height")
            .long("height")
            .value_name("PIXELS")
            .help("Height of the video [default: 720]")
            .takes_value(true)
            .required(false)
            .validator(even_dimension)
        )
        .arg(Arg::with_name("fps")
            .long("fps")
            .short("r")
            .value_name("RATE")
            .help("Frames per second [default: 30]")
            .takes_value(true)
            .required(false)
            .validator(positive_integer)
        )
        .arg(Arg::with_name("color")
            .long("color")
            .value_name("RRGGBB")
            .help("Text color as a hex triplet [default: #ffffff]")
            .takes_value(true)
            .required(false)
            .validator(|value| {
                if value.parse::<Rgb>().is_ok() {
                    Ok(())
                } else {
                    Err("must be a hex color such as #ffcc00".to_string())
                }
            })
        )
        .arg(Arg::with_name("max-words")
            .long("max-words")
            .short("m")
            .value_name("COUNT")
            .help("Words shown at once before the screen is cleared [default: 7]")
            .takes_value(true)
            .required(false)
            .validator(positive_integer)
        )
        .arg(Arg::with_name("seed")
            .long("seed")
            .value_name("SEED")
            .help("Seeds word placement so that renders are reproducible")
            .takes_value(true)
            .required(false)
            .validator(|value| {
                if value.parse::<u64>().is_ok() {
                    Ok(())
                } else {
                    Err("must be an unsigned integer".to_string())
                }
            })
        )
        .arg(Arg::with_name("new-word-rule")
            .long("new-word-rule")
            .value_name("RULE")
            .help("What makes a word new: a change in text, or a change in slot [default: text]")
            .takes_value(true)
            .required(false)
            .possible_values(&["text", "slot"])
        )
        .arg(Arg::with_name("ffmpeg")
            .long("ffmpeg")
            .value_name("PROGRAM")
            .help("The ffmpeg executable to encode with [default: ffmpeg]")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("codec")
            .long("codec")
            .value_name("CODEC")
            .help("The ffmpeg video codec to encode with [default: libx264]")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("verbose")
            .long("verbose")
            .short("v")
            .help("Logs every word as it appears")
        )
        .arg(Arg::with_name("input")
            .index(1)
            .value_name("INPUT-FILE")
            .help("Input SRT file; use - for STDIN")
            .required(true)
        )
        .arg(Arg::with_name("output")
            .index(2)
            .value_name("OUTPUT-FILE")
            .help("Output video file")
            .required(true)
        )
        .after_help("This utility renders SRT subtitles as a video in which words pop onto the \
            screen one at a time, each placed near the word before it. Once the screen holds \
            too many words, it is cleared and the newest word moves to the center.\n\n\
            ffmpeg must be installed to encode the video.\n\n\
            Copyright © 2021 William Swartzendruber\n\
            Licensed under the Mozilla Public License 2.0")
        .get_matches();

    init_logging(matches.is_present("verbose"));

    if let Err(err) = run(&matches) {
        report(&err);
        exit(1);
    }
}

fn run(matches: &ArgMatches) -> RenderResult<()> {

    let mut config = match matches.value_of("config") {
        Some(path) => RenderConfig::load(Path::new(path))?,
        None => RenderConfig::default(),
    };

    apply_overrides(&mut config, matches);
    config.validate()?;

    let input_value = matches.value_of("input").unwrap_or("-");
    let cues = read_cues(input_value)?;

    if cues.is_empty() {
        warn!(input = input_value, "no cues found; the video will be empty");
    }

    let font = FontRenderer::open(config.font_path()?, config.font_size)?;
    let offsets = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let settings = EncoderSettings {
        program: config.ffmpeg.clone(),
        codec: config.codec.clone(),
        output: PathBuf::from(matches.value_of_os("output").unwrap_or_default()),
        size: config.canvas_size(),
        fps: config.fps,
    };

    info!(
        cues = cues.len(),
        width = settings.size.width,
        height = settings.size.height,
        fps = settings.fps,
        output = %settings.output.display(),
        "starting render"
    );

    let mut encoder = FfmpegEncoder::spawn(&settings)?;
    let mut renderer = Renderer::new(&cues, &config, font, offsets);
    let summary = {
        let mut output = BufWriter::new(&mut encoder);
        renderer.render_to(&mut output)?
    };

    encoder.finish()?;

    eprintln!(
        "Rendered {} frames, {} words, {} collapses, {} degraded placements.",
        summary.frames,
        summary.words,
        summary.collapses,
        summary.degraded,
    );

    Ok(())
}

fn apply_overrides(config: &mut RenderConfig, matches: &ArgMatches) {

    if let Some(font) = matches.value_of_os("font") {
        config.font_path = Some(PathBuf::from(font));
    }
    if let Some(font_size) = parsed(matches, "font-size") {
        config.font_size = font_size;
    }
    if let Some(width) = parsed(matches, "width") {
        config.canvas_width = width;
    }
    if let Some(height) = parsed(matches, "height") {
        config.canvas_height = height;
    }
    if let Some(fps) = parsed(matches, "fps") {
        config.fps = fps;
    }
    if let Some(color) = parsed::<Rgb>(matches, "color") {
        config.text_color = color;
    }
    if let Some(max_words) = parsed(matches, "max-words") {
        config.max_visible_words = max_words;
    }
    if let Some(seed) = parsed(matches, "seed") {
        config.seed = Some(seed);
    }
    if let Some(rule) = parsed::<NewWordRule>(matches, "new-word-rule") {
        config.new_word_rule = rule;
    }
    if let Some(ffmpeg) = matches.value_of_os("ffmpeg") {
        config.ffmpeg = PathBuf::from(ffmpeg);
    }
    if let Some(codec) = matches.value_of("codec") {
        config.codec = codec.to_string();
    }
}

fn read_cues(input_value: &str) -> RenderResult<Vec<Cue>> {

    let (mut stdin_read, mut file_read);
    let mut input = BufReader::<&mut dyn Read>::new(
        if input_value == "-" {
            stdin_read = stdin();
            &mut stdin_read
        } else {
            file_read = File::open(input_value).map_err(ReadError::from)?;
            &mut file_read
        }
    );

    Ok(input.read_cues()?)
}

/// Values reaching here have already passed their validators.
fn parsed<T: FromStr>(matches: &ArgMatches, name: &str) -> Option<T> {
    matches.value_of(name).and_then(|value| value.parse::<T>().ok())
}

fn positive_integer(value: String) -> Result<(), String> {
    match value.parse::<u32>() {
        Ok(number) if number > 0 => Ok(()),
        _ => Err("must be a positive integer".to_string()),
    }
}

fn even_dimension(value: String) -> Result<(), String> {
    match value.parse::<u32>() {
        Ok(number) if number > 0 && number % 2 == 0 => Ok(()),
        _ => Err("must be a positive, even integer".to_string()),
    }
}

fn report(err: &dyn Error) {

    eprintln!("Error: {}", err);

    let mut source = err.source();

    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
