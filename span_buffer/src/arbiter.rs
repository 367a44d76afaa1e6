// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility arbiter: given a newcomer's current sub-segment and a parent
//! span it overlaps in x, decides who is in front over which sub-range and
//! applies the resulting mutation to `parent` directly.
//!
//! This collapses the spec's "arbiter emits a directive, mutator applies it"
//! split into a single call: the arbiter already borrows `parent` mutably to
//! read its endpoints, so handing the same borrow to [`crate::mutator`]'s
//! narrow functions in place, rather than constructing an intermediate
//! directive value, is the natural shape for an owned-tree Rust port.
//!
//! Callers are expected to have already clipped `seg` to `parent`'s x-range
//! (`[parent.x0, parent.x1]`) and to separately queue whatever portion of the
//! newcomer falls outside that range — [`crate::engine`] does both, since
//! those portions are disjoint from `parent` by construction and need no
//! arbitration at all.

use alloc::boxed::Box;
use core::cmp::Ordering;

use crate::geom::{depth_at, intersect_segments, leftness, quantize_depth, screen_to_view, view_to_screen, Intersection};
use crate::mutator::{bisect, overwrite, trim_left, trim_right};
use crate::span::Span;

/// A sub-segment of the newcomer being pushed: `[x, x1)` with reciprocal
/// depths at those two endpoints, interpolated from the original push.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Segment {
    pub x: f32,
    pub x1: f32,
    pub w_at_x: f32,
    pub w1: f32,
}

/// Outcome of [`resolve`].
pub(crate) enum Resolution {
    /// `parent` was mutated. Carries a further sub-segment still needing a
    /// home when the crossing left a sliver of the newcomer that the
    /// mutation didn't absorb (the L2/R2/R3/R4/R6 continuations).
    Mutated(Option<Segment>),
    /// `parent` was left untouched: it was in front over the entire overlap
    /// and the newcomer contributes nothing here.
    Discarded,
}

/// Resolves the overlap between `seg` and `parent`. `seg` must already be
/// clipped to `[parent.x0, parent.x1]`.
pub(crate) fn resolve(parent: &mut Box<Span>, seg: Segment, id: u8, size: u32, z_near: f32) -> Resolution {
    debug_assert!(seg.x >= parent.x0 && seg.x1 <= parent.x1 && seg.x < seg.x1);

    let left_start = seg.x <= parent.x0;

    let a = screen_to_view(seg.x, seg.w_at_x, size, z_near);
    let b = screen_to_view(seg.x1, seg.w1, size, z_near);
    let c = screen_to_view(parent.x0, parent.w0, size, z_near);
    let d = screen_to_view(parent.x1, parent.w1, size, z_near);

    match intersect_segments(a, b, c, d) {
        Intersection::Intersecting { t } => {
            let point = a + (b - a) * t;
            let (ix, iw) = view_to_screen(point, size, z_near);
            resolve_intersecting(parent, seg, id, left_start, ix, iw)
        }
        Intersection::Parallel | Intersection::Degenerate | Intersection::NotIntersecting => {
            resolve_non_intersecting(parent, seg, id, left_start, c, b, d)
        }
    }
}

/// The "who wins after the crossing" family (L1/L2 ≡ R1/R2 when newcomer
/// wins; L3/R3/R4 when parent wins). `ix`/`iw` are the screen-space crossing
/// point and its shared depth.
fn resolve_intersecting(parent: &mut Box<Span>, seg: Segment, id: u8, left_start: bool, ix: f32, iw: f32) -> Resolution {
    let newcomer_at_x1 = depth_at(seg.x, seg.x1, seg.w_at_x, seg.w1, seg.x1);
    let parent_at_x1 = depth_at(parent.x0, parent.x1, parent.w0, parent.w1, seg.x1);
    let newcomer_wins_after_crossing = quantize_depth(newcomer_at_x1) >= quantize_depth(parent_at_x1);

    if newcomer_wins_after_crossing {
        // L1/L2/R1/R2: old parent survives up to `ix`, newcomer from `ix` on.
        if seg.x1 < parent.x1 {
            // L1/R1 bisect.
            let mid_w0 = depth_at(seg.x, seg.x1, seg.w_at_x, seg.w1, ix);
            bisect(parent, ix, seg.x1, mid_w0, seg.w1, id);
            Resolution::Mutated(None)
        } else {
            // L2/R2 occlude-right: parent keeps [old_x0, ix); the sliver
            // [ix, old_x1) still needs a home for the newcomer.
            trim_right(parent, ix);
            Resolution::Mutated(Some(Segment { x: ix, x1: seg.x1, w_at_x: iw, w1: seg.w1 }))
        }
    } else if left_start {
        // L3/R4 occlude-left: parent keeps [ix, old_x1); no sliver to
        // preserve since the newcomer starts at or before parent.x0.
        trim_left(parent, ix);
        Resolution::Mutated(Some(Segment { x: seg.x, x1: ix, w_at_x: seg.w_at_x, w1: iw }))
    } else {
        // R3 bisect-from-middle: parent keeps its [old_x0, seg.x) sliver and
        // its [ix, old_x1) tail; the newcomer wins the [seg.x, ix) middle.
        let mid_w1 = depth_at(seg.x, seg.x1, seg.w_at_x, seg.w1, ix);
        bisect(parent, seg.x, ix, seg.w_at_x, mid_w1, id);
        if ix < seg.x1 {
            Resolution::Mutated(Some(Segment { x: ix, x1: seg.x1, w_at_x: iw, w1: seg.w1 }))
        } else {
            Resolution::Mutated(None)
        }
    }
}

/// No crossing within the overlap, so front-ness is constant across it.
/// Depth is compared once at the overlap's near edge, quantized per the
/// spec's load-bearing micro-unit discipline, with `leftness` breaking exact
/// ties.
fn resolve_non_intersecting(
    parent: &mut Box<Span>,
    seg: Segment,
    id: u8,
    left_start: bool,
    c: kurbo::Point,
    b: kurbo::Point,
    d: kurbo::Point,
) -> Resolution {
    let newcomer_at_ref = seg.w_at_x;
    let parent_at_ref = depth_at(parent.x0, parent.x1, parent.w0, parent.w1, seg.x);

    let newcomer_front = match quantize_depth(newcomer_at_ref).cmp(&quantize_depth(parent_at_ref)) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => leftness(c, b, d) > 0.0,
    };

    if !newcomer_front {
        // No named case: parent wins outright, newcomer's overlap with this
        // node is simply discarded.
        return Resolution::Discarded;
    }

    let has_sliver = !left_start && seg.x > parent.x0;

    if has_sliver {
        if seg.x1 < parent.x1 {
            // R5 bisect (no crossing, but a genuine three-way split).
            bisect(parent, seg.x, seg.x1, seg.w_at_x, seg.w1, id);
            Resolution::Mutated(None)
        } else {
            // R6 occlude-right: parent keeps its [old_x0, seg.x) sliver.
            trim_right(parent, seg.x);
            Resolution::Mutated(None)
        }
    } else if seg.x1 < parent.x1 {
        // L4/R7: newcomer starts at or before parent's own start, so no
        // sliver survives on the left; parent just loses its own left end.
        trim_left(parent, seg.x1);
        Resolution::Mutated(None)
    } else {
        // L5/R8: newcomer covers the parent's entire remaining range.
        let w0 = depth_at(seg.x, seg.x1, seg.w_at_x, seg.w1, parent.x0);
        let w1 = depth_at(seg.x, seg.x1, seg.w_at_x, seg.w1, parent.x1);
        overwrite(parent, w0, w1, id);
        Resolution::Mutated(None)
    }
}
