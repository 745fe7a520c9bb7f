/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::{
    *,
    super::canvas::{Point, Rect, Rgb},
};

fn settings(program: &str) -> EncoderSettings {
    EncoderSettings {
        program: PathBuf::from(program),
        codec: "libx264".to_string(),
        output: PathBuf::from("out.mp4"),
        size: Size::new(1280, 720),
        fps: 30,
    }
}

#[test]
fn test_write_frames_back_to_back() {

    let mut buffer = Vec::<u8>::new();
    let mut canvas = Canvas::new(Size::new(4, 2));

    buffer.write_frame(&canvas).unwrap();
    canvas.fill(Rect::new(Point::new(0, 0), Size::new(1, 1)), Rgb::new(1, 2, 3));
    buffer.write_frame(&canvas).unwrap();

    assert_eq!(buffer.len(), 2 * 4 * 2 * 3);
    assert!(buffer[..24].iter().all(|&b| b == 0));
    assert_eq!(&buffer[24..27], &[1, 2, 3]);
}

#[test]
fn test_args() {

    let args = settings("ffmpeg").args();
    let args = args.iter().map(|arg| arg.to_string_lossy().into_owned()).collect::<Vec<String>>();

    assert_eq!(args, vec![
        "-hide_banner", "-loglevel", "error", "-y",
        "-f", "rawvideo", "-pix_fmt", "rgb24",
        "-s:v", "1280x720", "-r", "30",
        "-i", "-", "-an",
        "-c:v", "libx264", "-pix_fmt", "yuv420p",
        "out.mp4",
    ]);
}

#[test]
fn test_spawn_missing_encoder() {
    match FfmpegEncoder::spawn(&settings("/nonexistent/wordpop/ffmpeg")) {
        Err(EncodeError::EncoderNotFound { program }) => {
            assert_eq!(program, PathBuf::from("/nonexistent/wordpop/ffmpeg"))
        }
        Err(err) => panic!("unexpected error: {}", err),
        Ok(_) => panic!("encoder should not have started"),
    }
}

#[cfg(unix)]
#[test]
fn test_finish_reports_failure() {

    // cat rejects the ffmpeg arguments and exits unsuccessfully.
    let encoder = FfmpegEncoder::spawn(&settings("cat")).unwrap();

    assert!(matches!(encoder.finish(), Err(EncodeError::EncoderFailed { .. })));
}
