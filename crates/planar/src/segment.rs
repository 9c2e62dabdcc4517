//! Closed/open segment queries built on `orient` and `Line`.
//!
//! Proper intersection is transversal only: segments that merely touch,
//! share an endpoint, or overlap collinearly are not reported. Callers that
//! need the inclusive test combine `crosses_properly` with `on_segment`.

use num_traits::Float;

use crate::line::Line;
use crate::point::{Coord, Pt};
use crate::predicates::{dot, orient};

/// True iff `p` lies in the closed disk with diameter `[a, b]`.
#[inline]
pub fn in_disk<T: Coord>(a: Pt<T>, b: Pt<T>, p: Pt<T>) -> bool {
    dot(a - p, b - p) <= T::zero()
}

/// True iff `p` lies on the closed segment `[a, b]`.
#[inline]
pub fn on_segment<T: Coord>(a: Pt<T>, b: Pt<T>, p: Pt<T>) -> bool {
    orient(a, b, p) == T::zero() && in_disk(a, b, p)
}

#[inline]
fn opposite<T: Coord>(s: T, t: T) -> bool {
    let z = T::zero();
    (s > z && t < z) || (s < z && t > z)
}

/// True iff open segments `ab` and `cd` cross transversally.
///
/// Compares signs instead of multiplying, so integer inputs cannot overflow
/// beyond what `orient` itself does.
pub fn crosses_properly<T: Coord>(a: Pt<T>, b: Pt<T>, c: Pt<T>, d: Pt<T>) -> bool {
    opposite(orient(c, d, a), orient(c, d, b)) && opposite(orient(a, b, c), orient(a, b, d))
}

/// Crossing point of open segments `ab` and `cd`, if they cross properly.
pub fn proper_inter<T: Coord + Float>(a: Pt<T>, b: Pt<T>, c: Pt<T>, d: Pt<T>) -> Option<Pt<T>> {
    let oa = orient(c, d, a);
    let ob = orient(c, d, b);
    let oc = orient(a, b, c);
    let od = orient(a, b, d);
    if opposite(oa, ob) && opposite(oc, od) {
        Some((a * ob - b * oa) / (ob - oa))
    } else {
        None
    }
}

/// Distance from `p` to the closed segment `[a, b]`.
pub fn seg_point<T: Coord + Float>(a: Pt<T>, b: Pt<T>, p: Pt<T>) -> T {
    if a != b {
        let l = Line::through(a, b);
        if l.cmp_proj(a, p) && l.cmp_proj(p, b) {
            return l.dist(p);
        }
    }
    (p - a).abs().min((p - b).abs())
}

/// Distance between closed segments `[a, b]` and `[c, d]`.
pub fn seg_seg<T: Coord + Float>(a: Pt<T>, b: Pt<T>, c: Pt<T>, d: Pt<T>) -> T {
    if crosses_properly(a, b, c, d) {
        return T::zero();
    }
    seg_point(a, b, c)
        .min(seg_point(a, b, d))
        .min(seg_point(c, d, a))
        .min(seg_point(c, d, b))
}
