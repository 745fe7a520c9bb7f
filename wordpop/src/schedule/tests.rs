/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;
use rand::{thread_rng, Rng};

fn cue(start: f64, end: f64, text: &str) -> Cue {
    Cue { number: 1, start, end, text: text.to_string() }
}

#[test]
fn test_hello_world_frames() {

    let cues = vec![cue(0.0, 2.0, "hello world")];

    assert_eq!(frame_count(&cues, 30), 60);

    for frame in 0..30 {
        let word = active_word(&cues, frame_time(frame, 30)).unwrap();
        assert_eq!(word.text, "hello");
        assert_eq!(word.slot, Slot { cue: 0, word: 0 });
    }

    for frame in 30..60 {
        let word = active_word(&cues, frame_time(frame, 30)).unwrap();
        assert_eq!(word.text, "world");
        assert_eq!(word.slot, Slot { cue: 0, word: 1 });
    }

    // The cue still matches at its end, but no word does.
    assert!(find_cue(&cues, frame_time(60, 30)).is_some());
    assert_eq!(active_word(&cues, frame_time(60, 30)), None);
}

#[test]
fn test_word_index_bounds_random_cues() {

    let mut rng = thread_rng();

    for _ in 0..1_000 {

        let start = rng.gen_range(0.0..1_000.0);
        let end = start + rng.gen_range(0.1..30.0);
        let count = rng.gen_range(1..20);
        let text = (0..count).map(|i| format!("w{}", i)).collect::<Vec<String>>().join(" ");
        let cue = cue(start, end, &text);
        let word_duration = (end - start) / count as f64;

        assert_eq!(word_index(&cue, count, start), Some(0));
        assert_eq!(
            word_index(&cue, count, end - word_duration / 1_000.0),
            Some(count - 1),
        );
    }
}

#[test]
fn test_gap_between_cues() {

    let cues = vec![cue(0.0, 1.0, "a"), cue(2.0, 3.0, "b")];

    assert_eq!(active_word(&cues, 1.5), None);
    assert_eq!(active_word(&cues, 2.5).map(|w| w.text), Some("b"));
    assert_eq!(active_word(&cues, 2.5).map(|w| w.slot.cue), Some(1));
}

#[test]
fn test_first_matching_cue_wins() {

    // The first cue ends exactly where the second begins.
    let cues = vec![cue(0.0, 1.0, "first"), cue(1.0, 2.0, "second")];

    assert_eq!(find_cue(&cues, 1.0).map(|(i, _)| i), Some(0));
    assert_eq!(active_word(&cues, 1.0), None);
    assert_eq!(active_word(&cues, 1.01).map(|w| w.text), Some("second"));
}

#[test]
fn test_empty_and_instant_cues() {

    let cues = vec![cue(0.0, 1.0, "   "), cue(2.0, 2.0, "instant")];

    assert_eq!(active_word(&cues, 0.5), None);
    assert_eq!(active_word(&cues, 2.0), None);
    assert!(word_slots(&cues[0]).is_empty());
}

#[test]
fn test_frame_count() {

    assert_eq!(frame_count(&[], 30), 0);
    assert_eq!(frame_count(&[cue(0.0, 1.5, "x"), cue(0.0, 0.5, "y")], 24), 36);
    assert_eq!(frame_count(&[cue(0.0, 0.01, "x")], 30), 1);
}

#[test]
fn test_word_slots() {

    let slots = word_slots(&cue(1.0, 4.0, "one two three"));

    assert_eq!(slots, vec![
        WordSlot { index: 0, text: "one".to_string(), start: 1.0, end: 2.0 },
        WordSlot { index: 1, text: "two".to_string(), start: 2.0, end: 3.0 },
        WordSlot { index: 2, text: "three".to_string(), start: 3.0, end: 4.0 },
    ]);
}

#[test]
fn test_new_word_rule_text() {

    let word = ActiveWord { slot: Slot { cue: 1, word: 0 }, text: "again" };
    let previous = Some(Slot { cue: 0, word: 3 });

    assert!(NewWordRule::Text.is_new(&word, None, None));
    assert!(NewWordRule::Text.is_new(&word, Some("other"), previous));
    assert!(!NewWordRule::Text.is_new(&word, Some("again"), previous));
}

#[test]
fn test_new_word_rule_slot() {

    let word = ActiveWord { slot: Slot { cue: 1, word: 0 }, text: "again" };

    assert!(NewWordRule::Slot.is_new(&word, Some("again"), Some(Slot { cue: 0, word: 3 })));
    assert!(!NewWordRule::Slot.is_new(&word, Some("again"), Some(Slot { cue: 1, word: 0 })));
}

#[test]
fn test_new_word_rule_parse() {
    assert_eq!("text".parse::<NewWordRule>(), Ok(NewWordRule::Text));
    assert_eq!("slot".parse::<NewWordRule>(), Ok(NewWordRule::Slot));
    assert!("index".parse::<NewWordRule>().is_err());
    assert_eq!(NewWordRule::default(), NewWordRule::Text);
}
