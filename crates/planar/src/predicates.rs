//! Scalar predicates on one or two vectors.
//!
//! Sign conventions
//! - `cross(v, w) > 0` iff `w` is counter-clockwise from `v`.
//! - `orient(a, b, c) > 0` iff `a → b → c` is a left turn; `0` iff collinear;
//!   `< 0` iff a right turn. Every higher-level predicate in this crate
//!   (proper intersection, ray crossing, convexity) relies on this.
//! - `perp` rotates by +90° (counter-clockwise).

use num_traits::Float;

use crate::point::{Coord, Pt};

#[inline]
pub fn dot<T: Coord>(v: Pt<T>, w: Pt<T>) -> T {
    v.x * w.x + v.y * w.y
}

#[inline]
pub fn cross<T: Coord>(v: Pt<T>, w: Pt<T>) -> T {
    v.x * w.y - v.y * w.x
}

/// `cross(b - a, c - a)`: positive for a left turn, zero when collinear.
#[inline]
pub fn orient<T: Coord>(a: Pt<T>, b: Pt<T>, c: Pt<T>) -> T {
    cross(b - a, c - a)
}

/// Rotation by 90° counter-clockwise: `(-y, x)`.
#[inline]
pub fn perp<T: Coord>(p: Pt<T>) -> Pt<T> {
    Pt::new(-p.y, p.x)
}

/// `p + v`.
#[inline]
pub fn translate<T: Coord>(v: Pt<T>, p: Pt<T>) -> Pt<T> {
    p + v
}

/// Counter-clockwise rotation of `p` by `a` radians around the origin.
#[inline]
pub fn rot<T: Coord + Float>(p: Pt<T>, a: T) -> Pt<T> {
    let (s, c) = a.sin_cos();
    Pt::new(p.x * c - p.y * s, p.x * s + p.y * c)
}

/// Unsigned angle between `v` and `w`, in `[0, π]`.
///
/// Pre: neither vector is zero.
#[inline]
pub fn angle<T: Coord + Float>(v: Pt<T>, w: Pt<T>) -> T {
    let cos = dot(v, w) / v.abs() / w.abs();
    // clamp absorbs rounding overshoot past ±1
    cos.max(-T::one()).min(T::one()).acos()
}
