// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The literal end-to-end `print` scenarios from spec.md §8, run against a
//! buffer initialized `(6, z_near=1, max_depth=1024)` unless noted.

use span_buffer::{Buffer, PushOutcome};

fn print_line(buffer: &Buffer) -> String {
    let mut out = String::new();
    buffer.print(&mut out).unwrap();
    out
}

#[test]
fn single_span_left_half() {
    let mut buffer = Buffer::init(6, 1.0, 1024).unwrap();
    buffer.push(0.0, 3.0, 1.0, 1.0, b'A').unwrap();
    assert_eq!(print_line(&buffer), "AAA___\n");
}

#[test]
fn non_overlapping_abutment() {
    let mut buffer = Buffer::init(6, 1.0, 1024).unwrap();
    buffer.push(0.0, 3.0, 1.0, 1.0, b'A').unwrap();
    buffer.push(3.0, 6.0, 1.0, 1.0, b'B').unwrap();
    assert_eq!(print_line(&buffer), "AAABBB\n");
}

#[test]
fn closer_in_front_occludes_middle() {
    let mut buffer = Buffer::init(6, 1.0, 1024).unwrap();
    buffer.push(0.0, 6.0, 0.5, 0.5, b'A').unwrap();
    buffer.push(2.0, 4.0, 1.0, 1.0, b'B').unwrap();
    assert_eq!(print_line(&buffer), "AABBAA\n");
}

#[test]
fn newcomer_fully_behind_is_discarded() {
    let mut buffer = Buffer::init(6, 1.0, 1024).unwrap();
    buffer.push(0.0, 6.0, 1.0, 1.0, b'A').unwrap();
    let outcome = buffer.push(2.0, 4.0, 0.5, 0.5, b'B').unwrap();
    assert_eq!(outcome, PushOutcome::FullyOccluded);
    assert_eq!(print_line(&buffer), "AAAAAA\n");
}

#[test]
fn interpenetration_splits_at_the_crossover() {
    let mut buffer = Buffer::init(6, 1.0, 1024).unwrap();
    buffer.push(0.0, 6.0, 2.0, 0.5, b'A').unwrap();
    buffer.push(0.0, 6.0, 0.5, 2.0, b'B').unwrap();
    assert_eq!(print_line(&buffer), "AAABBB\n");
}

#[test]
fn bisection_splits_the_parent_into_three_pieces() {
    let mut buffer = Buffer::init(8, 1.0, 1024).unwrap();
    buffer.push(0.0, 8.0, 0.5, 0.5, b'A').unwrap();
    buffer.push(3.0, 5.0, 1.0, 1.0, b'B').unwrap();
    assert_eq!(print_line(&buffer), "AAABBAAA\n");
}

#[test]
fn duplicate_push_is_idempotent_up_to_the_outcome() {
    let mut buffer = Buffer::init(6, 1.0, 1024).unwrap();
    buffer.push(1.0, 4.0, 1.0, 1.0, b'A').unwrap();
    let first = print_line(&buffer);
    let outcome = buffer.push(1.0, 4.0, 1.0, 1.0, b'A').unwrap();
    assert_eq!(outcome, PushOutcome::FullyOccluded);
    assert_eq!(print_line(&buffer), first);
}

/// Parses one `"[id] [x0, x1)"` dump line (ignoring leading indentation)
/// back into `(x0, x1, id)`.
fn parse_dump_line(line: &str) -> (f32, f32, String) {
    let line = line.trim_start();
    let id = line[1..].split(']').next().unwrap().to_string();
    let rest = &line[line.find("] [").unwrap() + 3..line.len() - 1];
    let (x0, x1) = rest.split_once(", ").unwrap();
    (x0.parse().unwrap(), x1.parse().unwrap(), id)
}

#[test]
fn dump_then_reparse_round_trips_the_visible_set() {
    let mut buffer = Buffer::init(8, 1.0, 1024).unwrap();
    buffer.push(0.0, 8.0, 0.5, 0.5, b'A').unwrap();
    buffer.push(3.0, 5.0, 1.0, 1.0, b'B').unwrap();

    let mut dump = String::new();
    buffer.dump(&mut dump).unwrap();

    let mut reparsed: Vec<(f32, f32, String)> = dump.lines().map(parse_dump_line).collect();
    reparsed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    let expected = vec![
        (0.0, 3.0, "A".to_string()),
        (3.0, 5.0, "B".to_string()),
        (5.0, 8.0, "A".to_string()),
    ];
    assert_eq!(reparsed, expected);
}
