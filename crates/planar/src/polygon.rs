//! Polygon algorithms over implicitly closed vertex slices.
//!
//! A polygon is any `&[Pt<T>]`; index `n` wraps to `0`. Area, orientation and
//! containment assume at least 3 vertices forming a simple polygon.

use std::cmp::Ordering;

use num_traits::Float;

use crate::point::{Coord, Pt};
use crate::predicates::{cross, orient};
use crate::segment::on_segment;

/// Iterator over the closed edge loop `(p[i], p[i+1 mod n])`.
fn edges<T: Copy>(p: &[Pt<T>]) -> impl Iterator<Item = (Pt<T>, Pt<T>)> + '_ {
    let n = p.len();
    (0..n).map(move |i| (p[i], p[(i + 1) % n]))
}

/// Twice the signed area (shoelace sum). Exact for integer coordinates;
/// positive for counter-clockwise vertex order.
pub fn signed_area2<T: Coord>(p: &[Pt<T>]) -> T {
    edges(p).fold(T::zero(), |acc, (a, b)| acc + cross(a, b))
}

/// Signed area; positive for counter-clockwise, negative for clockwise.
pub fn signed_area<T: Coord + Float>(p: &[Pt<T>]) -> T {
    signed_area2(p) / (T::one() + T::one())
}

/// Unsigned area.
pub fn area<T: Coord + Float>(p: &[Pt<T>]) -> T {
    Float::abs(signed_area(p))
}

/// True iff `p` is at or above the horizontal through `a`.
#[inline]
pub fn above<T: Coord>(a: Pt<T>, p: Pt<T>) -> bool {
    p.y >= a.y
}

/// True iff segment `[p, q]` crosses the ray from `a` towards `+x`.
///
/// `above` is inclusive and the endpoints are compared with XOR, so a vertex
/// exactly at the ray's height counts as "above". That makes each shared
/// vertex count once over the whole edge loop.
#[inline]
pub fn crosses_ray<T: Coord>(a: Pt<T>, p: Pt<T>, q: Pt<T>) -> bool {
    let o = orient(a, p, q);
    match (above(a, p), above(a, q)) {
        (false, true) => o > T::zero(),
        (true, false) => o < T::zero(),
        _ => false,
    }
}

/// Even-odd point-in-polygon test.
///
/// A point exactly on an edge yields `!strict`.
pub fn in_polygon<T: Coord>(p: &[Pt<T>], a: Pt<T>, strict: bool) -> bool {
    let mut crossings = 0usize;
    for (s, t) in edges(p) {
        if on_segment(s, t, a) {
            return !strict;
        }
        if crosses_ray(a, s, t) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// True iff no two consecutive turns have strictly opposite orientation.
///
/// Collinear triples are accepted, so a polygon with straight vertices is
/// still convex.
pub fn is_convex<T: Coord>(p: &[Pt<T>]) -> bool {
    let n = p.len();
    let mut has_pos = false;
    let mut has_neg = false;
    for i in 0..n {
        let o = orient(p[i], p[(i + 1) % n], p[(i + 2) % n]);
        if o > T::zero() {
            has_pos = true;
        }
        if o < T::zero() {
            has_neg = true;
        }
    }
    !(has_pos && has_neg)
}

/// Andrew's monotone chain convex hull (counter-clockwise, collinear points
/// dropped). Inputs with fewer than two distinct points come back
/// deduplicated.
pub fn convex_hull<T: Coord>(points: &[Pt<T>]) -> Vec<Pt<T>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup();
    if pts.len() < 2 {
        return pts;
    }
    // lower chain left to right, then upper chain back, in one buffer; the
    // upper pass never pops below the rightmost point
    let mut hull: Vec<Pt<T>> = Vec::with_capacity(pts.len() + 1);
    for &p in &pts {
        push_left_turn(&mut hull, p, 0);
    }
    let floor = hull.len() - 1;
    for &p in pts.iter().rev().skip(1) {
        push_left_turn(&mut hull, p, floor);
    }
    // the leftmost point closes the loop twice
    hull.pop();
    hull
}

fn push_left_turn<T: Coord>(chain: &mut Vec<Pt<T>>, p: Pt<T>, floor: usize) {
    while let [.., a, b] = &chain[floor..] {
        if orient(*a, *b, p) > T::zero() {
            break;
        }
        chain.pop();
    }
    chain.push(p);
}
