// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks the handful of representative `push`/`print`/`dump` scenarios for
//! `span_buffer`: a plain abutment, an occluding middle span, a fully
//! occluded push, interpenetration, and a bisecting insert.
//!
//! Run:
//! - `cargo run -p span_buffer_demos --example scanline_scenarios`

use span_buffer::{Buffer, PushOutcome};

fn run(label: &str, buffer: &mut Buffer, pushes: &[(f32, f32, f32, f32, u8)]) {
    println!("\n== {label} ==");
    for &(x0, x1, w0, w1, id) in pushes {
        let outcome = buffer.push(x0, x1, w0, w1, id).unwrap();
        let id = id as char;
        match outcome {
            PushOutcome::Inserted => println!("push({x0}, {x1}, {w0}, {w1}, '{id}') -> inserted"),
            PushOutcome::FullyOccluded => {
                println!("push({x0}, {x1}, {w0}, {w1}, '{id}') -> fully_occluded")
            }
        }
    }
    print!("print: ");
    let mut line = String::new();
    buffer.print(&mut line).unwrap();
    print!("{line}");
    println!("dump:");
    let mut tree = String::new();
    buffer.dump(&mut tree).unwrap();
    print!("{tree}");
}

fn main() {
    run(
        "non-overlapping abutment",
        &mut Buffer::init(6, 1.0, 1024).unwrap(),
        &[(0.0, 3.0, 1.0, 1.0, b'A'), (3.0, 6.0, 1.0, 1.0, b'B')],
    );

    run(
        "closer span occludes the middle",
        &mut Buffer::init(6, 1.0, 1024).unwrap(),
        &[(0.0, 6.0, 0.5, 0.5, b'A'), (2.0, 4.0, 1.0, 1.0, b'B')],
    );

    run(
        "newcomer fully behind is discarded",
        &mut Buffer::init(6, 1.0, 1024).unwrap(),
        &[(0.0, 6.0, 1.0, 1.0, b'A'), (2.0, 4.0, 0.5, 0.5, b'B')],
    );

    run(
        "interpenetrating spans split at the crossover",
        &mut Buffer::init(6, 1.0, 1024).unwrap(),
        &[(0.0, 6.0, 2.0, 0.5, b'A'), (0.0, 6.0, 0.5, 2.0, b'B')],
    );

    run(
        "a narrower, closer span bisects its parent",
        &mut Buffer::init(8, 1.0, 1024).unwrap(),
        &[(0.0, 8.0, 0.5, 0.5, b'A'), (3.0, 5.0, 1.0, 1.0, b'B')],
    );
}
