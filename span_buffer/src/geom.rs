// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry kernel: screen/view-space lifting, segment intersection, and the
//! float comparisons the arbiter builds its case analysis on.

use kurbo::{Point, Vec2};

/// Parametric intersection tolerance. Endpoints landing inside `[0, EPSILON]`
/// or `[1 - EPSILON, 1]` are treated as non-intersecting so that coincident
/// endpoints fall through to the leftness tiebreak instead of spawning a
/// vanishingly small bisection. Widening or narrowing this constant changes
/// which near-degenerate overlaps bisect; it is not a precision knob.
pub(crate) const EPSILON: f64 = 1e-6;

/// Scale factor for the integer-quantized depth tiebreak (`floor(w * SCALE)`).
pub(crate) const DEPTH_SCALE: f64 = 1e6;

/// `a + (b - a) * p / t`, the shared linear interpolation used to recover a
/// `w` value at an intermediate `x`.
pub(crate) fn lerp(a: f32, b: f32, p: f32, t: f32) -> f32 {
    a + (b - a) * p / t
}

/// Lifts a screen-space endpoint `(x, w)` into a view-space point, using the
/// buffer's half-width and `z_near`. `w` is reciprocal view-space depth, so
/// `z_view = 1 / w`.
pub(crate) fn screen_to_view(x: f32, w: f32, size: u32, z_near: f32) -> Point {
    let half_width = size as f64 / 2.0;
    let z_view = 1.0 / w as f64;
    let x_view = (x as f64 - half_width) * z_view / z_near as f64;
    Point::new(x_view, z_view)
}

/// Inverse of [`screen_to_view`]: projects a view-space point back to its
/// screen-space endpoint `(x, w)`. Used to recover the screen x at which two
/// lifted segments cross.
pub(crate) fn view_to_screen(p: Point, size: u32, z_near: f32) -> (f32, f32) {
    let half_width = size as f64 / 2.0;
    let z_view = p.y;
    let x = half_width + p.x * z_near as f64 / z_view;
    (x as f32, (1.0 / z_view) as f32)
}

/// Outcome of [`intersect_segments`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Intersection {
    /// The segments cross at an interior point.
    Intersecting {
        /// Parametric position along `a -> b`, in `(EPSILON, 1 - EPSILON)`.
        t: f64,
    },
    /// The segments are parallel and disjoint (nonzero numerator, zero
    /// denominator).
    Parallel,
    /// The segments are collinear and overlapping (zero numerator and
    /// denominator).
    Degenerate,
    /// No crossing inside the open parametric interval.
    NotIntersecting,
}

/// Intersects view-space segment `a -> b` against `c -> d`, returning the
/// parametric position along `a -> b` when the crossing falls strictly
/// inside `(EPSILON, 1 - EPSILON)` on both segments.
pub(crate) fn intersect_segments(a: Point, b: Point, c: Point, d: Point) -> Intersection {
    let r = b - a;
    let s = d - c;
    let denom = r.cross(s);
    let numer = (c - a).cross(r);

    if denom == 0.0 {
        return if numer == 0.0 {
            Intersection::Degenerate
        } else {
            Intersection::Parallel
        };
    }

    let t = (c - a).cross(s) / denom;
    let q = numer / denom;

    if t > EPSILON && t < 1.0 - EPSILON && q > EPSILON && q < 1.0 - EPSILON {
        Intersection::Intersecting { t }
    } else {
        Intersection::NotIntersecting
    }
}

/// Sign of the 2-D cross product of `(p1 - origin)` and `(p2 - origin)`.
/// Positive means `p1` is "left of" `p2` from `origin`'s perspective, which
/// the arbiter reads as "the span anchored at `p1` is in front".
pub(crate) fn leftness(origin: Point, p1: Point, p2: Point) -> f64 {
    Vec2::cross(p1 - origin, p2 - origin)
}

/// True when `a` and `b` differ by less than `1e-6`, compared via the
/// absolute-value bit-pattern trick described in the spec: clearing the sign
/// bit of the raw difference and reinterpreting it as a float is equivalent
/// to, but faster than, `(a - b).abs()` on most targets that matter here.
/// Used sparingly — most depth comparisons go through the integer-quantized
/// path in `arbiter`, not this predicate.
pub(crate) fn almost_equal(a: f32, b: f32) -> bool {
    let diff = (a - b).to_bits() & 0x7fff_ffff;
    f32::from_bits(diff) < 1e-6
}

/// Quantizes a reciprocal depth to integer micro-units for deterministic
/// comparison, per the spec's load-bearing `floor(w * 1e6)` rule.
pub(crate) fn quantize_depth(w: f32) -> i64 {
    (w as f64 * DEPTH_SCALE).floor() as i64
}

/// Reciprocal depth of the segment `(x0, w0) -> (x1, w1)` at `x`, clamped to
/// the segment's own endpoints when `x` lands exactly on one of them (avoids
/// a spurious division on zero-width reference calls).
pub(crate) fn depth_at(x0: f32, x1: f32, w0: f32, w1: f32, x: f32) -> f32 {
    if x == x0 {
        w0
    } else if x == x1 {
        w1
    } else {
        lerp(w0, w1, x - x0, x1 - x0)
    }
}
