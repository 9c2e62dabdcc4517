//! Angular (polar) ordering without trigonometry.
//!
//! The comparator keys are `(half(v), cross sign, sq(v))`. `half` is `false`
//! for the lower half-plane plus the positive x-axis and `true` for the upper
//! half-plane plus the negative x-axis; `false` sorts first. The resulting
//! sweep is counter-clockwise over angles `(-π, π]`, and vectors with the
//! same direction are ordered by increasing length.

use std::cmp::Ordering;

use crate::point::{Coord, Pt};
use crate::predicates::cross;

/// Half-plane class of a non-zero vector: `true` iff `y > 0`, or `y == 0`
/// and `x < 0`.
///
/// # Panics
/// On the zero vector, whose angle is undefined.
#[inline]
pub fn half<T: Coord>(p: Pt<T>) -> bool {
    assert!(!p.is_zero(), "half: the angle of the zero vector is undefined");
    p.y > T::zero() || (p.y == T::zero() && p.x < T::zero())
}

/// Polar comparator around the origin.
pub fn polar_cmp<T: Coord>(v: Pt<T>, w: Pt<T>) -> Ordering {
    half(v).cmp(&half(w)).then_with(|| {
        let c = cross(v, w);
        if c > T::zero() {
            Ordering::Less
        } else if c < T::zero() {
            Ordering::Greater
        } else {
            v.sq().partial_cmp(&w.sq()).unwrap_or(Ordering::Equal)
        }
    })
}

/// Sort vectors by angle around the origin (see module docs for the sweep).
///
/// Pre: no vector is zero.
pub fn polar_sort<T: Coord>(v: &mut [Pt<T>]) {
    v.sort_by(|&a, &b| polar_cmp(a, b));
}

/// Sort points by angle around `o`; equivalent to translating the plane so
/// that `o` sits at the origin.
///
/// Pre: no point equals `o`.
pub fn polar_sort_around<T: Coord>(v: &mut [Pt<T>], o: Pt<T>) {
    v.sort_by(|&a, &b| polar_cmp(a - o, b - o));
}
