/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: OSL-3.0
 */

//! Writes rendered frames out.
//!
//! # Overview
//!
//! Frames are written as raw RGB24, one after another with no framing in between, which is
//! what ffmpeg expects from `-f rawvideo -pix_fmt rgb24`. [WriteFrameExt] does this for any
//! sink, and [FfmpegEncoder] is a sink that feeds an ffmpeg child process.

#[cfg(test)]
mod tests;

use super::canvas::{Canvas, Size};
use std::{
    ffi::OsString,
    io::{Error as IoError, ErrorKind, Write},
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, ExitStatus, Stdio},
};
use thiserror::Error as ThisError;
use tracing::debug;

/// A specialized [`Result`](std::result::Result) type for frame-writing operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// The error type for [WriteFrameExt] and [FfmpegEncoder].
#[derive(ThisError, Debug)]
pub enum EncodeError {
    /// A frame could not be written because of an underlying I/O error.
    #[error("frame IO error")]
    IoError {
        #[from]
        source: IoError,
    },
    /// The ffmpeg executable could not be found.
    #[error("\"{}\" was not found; install ffmpeg or point to it explicitly", program.display())]
    EncoderNotFound {
        program: PathBuf,
    },
    /// The ffmpeg executable was found but could not be started.
    #[error("could not start \"{}\"", program.display())]
    EncoderSpawn {
        program: PathBuf,
        #[source]
        source: IoError,
    },
    /// The encoder exited unsuccessfully.
    #[error("encoder failed with {status}")]
    EncoderFailed {
        status: ExitStatus,
    },
}

/// Allows writing frames to a sink.
pub trait WriteFrameExt {
    /// Writes the next frame to a sink.
    fn write_frame(&mut self, canvas: &Canvas) -> EncodeResult<()>;
}

impl<T: Write> WriteFrameExt for T {

    fn write_frame(&mut self, canvas: &Canvas) -> EncodeResult<()> {

        self.write_all(canvas.as_bytes())?;

        Ok(())
    }
}

/// Describes the video file to produce.
#[derive(Clone, Debug, PartialEq)]
pub struct EncoderSettings {
    pub program: PathBuf,
    pub codec: String,
    pub output: PathBuf,
    pub size: Size,
    pub fps: u32,
}

impl EncoderSettings {

    /// The arguments passed to ffmpeg.
    pub fn args(&self) -> Vec<OsString> {

        let mut args = [
            "-hide_banner",
            "-loglevel", "error",
            "-y",
            "-f", "rawvideo",
            "-pix_fmt", "rgb24",
        ].iter().map(OsString::from).collect::<Vec<OsString>>();

        args.push("-s:v".into());
        args.push(format!("{}x{}", self.size.width, self.size.height).into());
        args.push("-r".into());
        args.push(self.fps.to_string().into());
        args.push("-i".into());
        args.push("-".into());
        args.push("-an".into());
        args.push("-c:v".into());
        args.push(self.codec.as_str().into());
        args.push("-pix_fmt".into());
        args.push("yuv420p".into());
        args.push(self.output.as_os_str().to_os_string());

        args
    }
}

/// Feeds frames to an ffmpeg child process.
///
/// Dropping an encoder without calling [finish](FfmpegEncoder::finish) closes its input, but
/// does not wait for ffmpeg to exit.
pub struct FfmpegEncoder {
    child: Child,
    stdin: ChildStdin,
}

impl FfmpegEncoder {

    /// Starts ffmpeg.
    pub fn spawn(settings: &EncoderSettings) -> EncodeResult<Self> {

        debug!(program = %settings.program.display(), args = ?settings.args(), "spawning encoder");

        let mut child = Command::new(&settings.program)
            .args(settings.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| spawn_error(&settings.program, source))?;
        let stdin = match child.stdin.take() {
            Some(stdin) => stdin,
            None => {
                let _ = child.kill();
                return Err(EncodeError::IoError {
                    source: IoError::new(ErrorKind::BrokenPipe, "encoder input is not available"),
                })
            }
        };

        Ok(Self { child, stdin })
    }

    /// Closes ffmpeg's input and waits for it to finish writing the file.
    pub fn finish(mut self) -> EncodeResult<()> {

        self.stdin.flush()?;
        drop(self.stdin);

        let status = self.child.wait()?;

        if status.success() {
            Ok(())
        } else {
            Err(EncodeError::EncoderFailed { status })
        }
    }
}

impl Write for FfmpegEncoder {

    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdin.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdin.flush()
    }
}

fn spawn_error(program: &Path, source: IoError) -> EncodeError {
    if source.kind() == ErrorKind::NotFound {
        EncodeError::EncoderNotFound { program: program.to_path_buf() }
    } else {
        EncodeError::EncoderSpawn { program: program.to_path_buf(), source }
    }
}
