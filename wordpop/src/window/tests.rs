/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;
use rand::{thread_rng, Rng};

const CANVAS: Size = Size { width: 1280, height: 720 };

fn word_box(word: &str, x: i32, y: i32) -> WordBox {
    WordBox {
        word: word.to_string(),
        position: Point::new(x, y),
        size: Size::new(word.len() as u32 * 10, 20),
        color: Rgb::WHITE,
    }
}

#[test]
fn test_push_appends_in_order() {

    let mut window = VisibleWindow::default();

    assert!(window.is_empty());
    assert_eq!(window.push(word_box("one", 100, 100), CANVAS), Admission::Appended);
    assert_eq!(window.push(word_box("two", 200, 100), CANVAS), Admission::Appended);
    assert_eq!(window.len(), 2);
    assert_eq!(window.last().map(|b| b.word.as_str()), Some("two"));
    assert_eq!(window.rects()[0], Rect::new(Point::new(100, 100), Size::new(30, 20)));
}

#[test]
fn test_eighth_word_collapses_to_center() {

    let mut window = VisibleWindow::default();

    for i in 0..7 {
        assert_eq!(
            window.push(word_box(&format!("w{}", i), 60 + i * 100, 300), CANVAS),
            Admission::Appended,
        );
    }

    assert_eq!(window.len(), 7);

    let eighth = word_box("eighth", 900, 500);

    assert_eq!(window.push(eighth.clone(), CANVAS), Admission::Collapsed);
    assert_eq!(window.boxes(), &[WordBox { position: Point::new(640, 360), ..eighth }]);
}

#[test]
fn test_length_stays_bounded() {

    let mut rng = thread_rng();
    let mut window = VisibleWindow::default();

    for pushed in 1..=1_000 {

        let admission = window.push(
            word_box("w", rng.gen_range(0..1_280), rng.gen_range(0..720)),
            CANVAS,
        );

        // Every eighth push after the first overflows the window.
        if pushed > 1 && (pushed - 1) % 7 == 0 {
            assert_eq!(admission, Admission::Collapsed);
            assert_eq!(window.len(), 1);
            assert_eq!(window.last().map(|b| b.position), Some(CANVAS.center()));
        } else {
            assert_eq!(admission, Admission::Appended);
        }

        assert!(window.len() >= 1 && window.len() <= MAX_VISIBLE);
    }
}

#[test]
fn test_custom_limit() {

    let mut window = VisibleWindow::new(2);

    window.push(word_box("a", 100, 100), CANVAS);
    window.push(word_box("b", 200, 100), CANVAS);

    assert_eq!(window.push(word_box("c", 300, 100), CANVAS), Admission::Collapsed);
    assert_eq!(window.len(), 1);
    assert_eq!(VisibleWindow::new(0).max_visible(), 1);
}
