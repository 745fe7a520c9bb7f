/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;

#[test]
fn test_new_canvas_is_black() {

    let canvas = Canvas::new(Size::new(4, 3));

    assert_eq!(canvas.as_bytes().len(), 4 * 3 * 3);
    assert!(canvas.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_blend_full_and_partial() {

    let mut canvas = Canvas::new(Size::new(2, 2));

    canvas.blend(0, 0, Rgb::WHITE, 255);
    canvas.blend(1, 1, Rgb::new(200, 100, 0), 128);

    assert_eq!(canvas.pixel(0, 0), Some(Rgb::WHITE));
    assert_eq!(canvas.pixel(1, 1), Some(Rgb::new(100, 50, 0)));
    assert_eq!(canvas.pixel(1, 0), Some(Rgb::BLACK));
}

#[test]
fn test_blend_outside_is_ignored() {

    let mut canvas = Canvas::new(Size::new(2, 2));

    canvas.blend(-1, 0, Rgb::WHITE, 255);
    canvas.blend(0, 2, Rgb::WHITE, 255);

    assert!(canvas.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(canvas.pixel(2, 0), None);
}

#[test]
fn test_fill_clips() {

    let mut canvas = Canvas::new(Size::new(3, 3));

    canvas.fill(Rect::new(Point::new(1, 1), Size::new(5, 5)), Rgb::WHITE);

    assert_eq!(canvas.pixel(0, 0), Some(Rgb::BLACK));
    assert_eq!(canvas.pixel(1, 1), Some(Rgb::WHITE));
    assert_eq!(canvas.pixel(2, 2), Some(Rgb::WHITE));
}

#[test]
fn test_overlap_rules() {

    let a = Rect::new(Point::new(10, 10), Size::new(10, 10));

    assert!(a.overlaps(&Rect::new(Point::new(15, 15), Size::new(10, 10))));
    assert!(a.overlaps(&Rect::new(Point::new(0, 0), Size::new(100, 100))));
    assert!(!a.overlaps(&Rect::new(Point::new(20, 10), Size::new(10, 10))));
    assert!(!a.overlaps(&Rect::new(Point::new(10, 20), Size::new(10, 10))));
    assert!(!a.overlaps(&Rect::new(Point::new(30, 30), Size::new(1, 1))));
}

#[test]
fn test_within() {

    let canvas = Size::new(100, 50);

    assert!(Rect::new(Point::new(0, 0), Size::new(100, 50)).within(canvas));
    assert!(!Rect::new(Point::new(1, 0), Size::new(100, 50)).within(canvas));
    assert!(!Rect::new(Point::new(-1, 0), Size::new(10, 10)).within(canvas));
}

#[test]
fn test_center() {
    assert_eq!(Size::new(1280, 720).center(), Point::new(640, 360));
    assert_eq!(Size::new(5, 3).center(), Point::new(2, 1));
}

#[test]
fn test_rgb_parse() {
    assert_eq!("#ff8000".parse::<Rgb>(), Ok(Rgb::new(255, 128, 0)));
    assert_eq!("00FF10".parse::<Rgb>(), Ok(Rgb::new(0, 255, 16)));
    assert_eq!("fff".parse::<Rgb>(), Err(ParseRgbError));
    assert_eq!("gg0000".parse::<Rgb>(), Err(ParseRgbError));
    assert_eq!(Rgb::new(255, 128, 0).to_string(), "#ff8000");
}
