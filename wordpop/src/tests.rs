/*
 * SPDX-FileCopyrightText: 2021 William Swartzendruber <wswartzendruber@gmail.com>
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;

#[test]
fn test_seconds_to_timestamp_zero() {
    assert_eq!(seconds_to_timestamp(0.0), "00:00:00,000");
}

#[test]
fn test_seconds_to_timestamp_mixed() {
    assert_eq!(seconds_to_timestamp(3_723.456), "01:02:03,456");
}

#[test]
fn test_seconds_to_timestamp_rounds_to_milliseconds() {
    assert_eq!(seconds_to_timestamp(1.9996), "00:00:02,000");
}
