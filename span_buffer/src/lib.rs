// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span Buffer: a self-balancing, scanline-ordered span tree for single-row
//! hidden-surface removal.
//!
//! Span Buffer maintains the set of currently visible, opaque, non-overlapping
//! screen-space spans on one horizontal scanline. Candidate spans can be
//! pushed in any order; each push clips the newcomer against geometry already
//! in front of it while simultaneously clipping away whatever the newcomer
//! occludes, including the degenerate case of two spans crossing in depth
//! along their x-extent (interpenetration), which is resolved by bisecting at
//! the crossover point.
//!
//! ## Where this fits
//!
//! This crate implements exactly the per-scanline span tree. It does not
//! drive a rasterizer, own a window, or know about more than one row: feeding
//! it a sequence of candidate spans for a row and reading back the resolved
//! visible set is the entire contract.
//!
//! ## API overview
//!
//! - [`Buffer`]: owns the span tree plus the three configuration values fixed
//!   at construction ([`Buffer::init`]).
//! - [`Buffer::push`]: the only mutating operation. Returns a [`PushOutcome`]
//!   or a [`PushError`].
//! - [`Buffer::print`]: ASCII-rasterizes the current scanline.
//! - [`Buffer::dump`]: writes an indented debug tree.
//! - [`Buffer`]'s [`Drop`] impl tears down the tree; no separate destroy call
//!   is needed, but [`Buffer::destroy`] is provided for callers translating
//!   from an explicit-lifetime API.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arbiter;
mod balance;
mod buffer;
mod engine;
mod error;
mod geom;
mod mutator;
mod span;

pub use buffer::Buffer;
pub use error::{InvalidInput, PushError, PushOutcome};
