/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2021 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

use wordpop::{
    seconds_to_timestamp,
    cue::ReadCuesExt,
    logging::init_logging,
    schedule::{frame_count, word_slots},
};
use std::{
    error::Error,
    fs::File,
    io::{stdin, BufReader, Read},
    process::exit,
};
use clap::{app_from_crate, crate_authors, crate_description, crate_name, crate_version, Arg};
use tracing::debug;

fn main() {

    let matches = app_from_crate!()
        .arg(Arg::with_name("fps")
            .long("fps")
            .short("r")
            .value_name("RATE")
            .help("Also reports how many frames a render at this rate would take")
            .takes_value(true)
            .required(false)
            .validator(|value| {
                match value.parse::<u32>() {
                    Ok(fps) if fps > 0 => Ok(()),
                    _ => Err("must be a positive integer".to_string()),
                }
            })
        )
        .arg(Arg::with_name("verbose")
            .long("verbose")
            .short("v")
            .help("Logs parsing details")
        )
        .arg(Arg::with_name("input")
            .index(1)
            .value_name("INPUT-FILE")
            .help("Input SRT file; use - for STDIN")
            .required(true)
        )
        .after_help("This utility will dump SRT cues along with the time slice given to each \
            of their words.\n\n\
            Copyright © 2021 William Swartzendruber\n\
            Licensed under the Mozilla Public License 2.0")
        .get_matches();

    init_logging(matches.is_present("verbose"));

    let input_value = matches.value_of("input").unwrap_or("-");
    let fps = matches.value_of("fps").and_then(|value| value.parse::<u32>().ok());
    let (mut stdin_read, mut file_read);
    let mut input = BufReader::<&mut dyn Read>::new(
        if input_value == "-" {
            stdin_read = stdin();
            &mut stdin_read
        } else {
            match File::open(input_value) {
                Ok(file) => {
                    file_read = file;
                    &mut file_read
                }
                Err(err) => {
                    eprintln!("Could not open input file: {}", err);
                    exit(1);
                }
            }
        }
    );

    eprintln!("Reading SRT cues...");

    let cues = match input.read_cues() {
        Ok(cues) => cues,
        Err(err) => {
            eprintln!("Could not read cues: {}", err);
            if let Some(source) = err.source() {
                eprintln!("  caused by: {}", source);
            }
            exit(1);
        }
    };

    debug!(cues = cues.len(), "parsed input");

    for cue in cues.iter() {

        println!(
            "cue({}) {} --> {}",
            cue.number,
            seconds_to_timestamp(cue.start),
            seconds_to_timestamp(cue.end),
        );
        println!("  text = {}", cue.text);

        let slots = word_slots(cue);

        if slots.is_empty() {
            println!("  (no words)");
        }

        for slot in slots.iter() {
            println!(
                "  word({}) {} --> {} = {}",
                slot.index,
                seconds_to_timestamp(slot.start),
                seconds_to_timestamp(slot.end),
                slot.text,
            );
        }
    }

    eprintln!("Cues read: {}", cues.len());

    if let Some(fps) = fps {
        eprintln!("Frames at {} fps: {}", fps, frame_count(&cues, fps));
    }
}
