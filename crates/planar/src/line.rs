//! Directed lines in implicit form `{ p : cross(v, p) = c }`.
//!
//! - `v` is the direction; `side(p) > 0` means `p` lies to the left of `v`.
//! - `side`, `cmp_proj`, `translate`, `perp_through` stay exact for integer
//!   coordinates. Distances, shifts, projections and intersections need
//!   `Float`.
//! - A line built from two equal points has `v = 0` and is degenerate;
//!   passing one to anything that divides by `|v|` is a caller error.

use num_traits::Float;

use crate::point::{Coord, Pt};
use crate::predicates::{cross, dot, perp};

/// Line with direction `v` and offset `c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<T> {
    pub v: Pt<T>,
    pub c: T,
}

impl<T: Coord> Line<T> {
    /// From direction vector and offset.
    #[inline]
    pub fn new(v: Pt<T>, c: T) -> Self {
        Self { v, c }
    }

    /// From the equation `a·x + b·y = c`.
    #[inline]
    pub fn from_equation(a: T, b: T, c: T) -> Self {
        Self::new(Pt::new(b, -a), c)
    }

    /// Line through `p` then `q` (direction `q - p`).
    #[inline]
    pub fn through(p: Pt<T>, q: Pt<T>) -> Self {
        let v = q - p;
        Self::new(v, cross(v, p))
    }

    /// Signed side value `cross(v, p) - c`; zero iff `p` is on the line.
    #[inline]
    pub fn side(&self, p: Pt<T>) -> T {
        cross(self.v, p) - self.c
    }

    /// Line through `p` perpendicular to this one (direction `perp(v)`).
    #[inline]
    pub fn perp_through(&self, p: Pt<T>) -> Self {
        Self::through(p, p + perp(self.v))
    }

    /// True iff `p` projects strictly before `q` along `v`.
    #[inline]
    pub fn cmp_proj(&self, p: Pt<T>, q: Pt<T>) -> bool {
        dot(self.v, p) < dot(self.v, q)
    }

    /// Line shifted by vector `t`.
    #[inline]
    pub fn translate(&self, t: Pt<T>) -> Self {
        Self::new(self.v, self.c + cross(self.v, t))
    }
}

impl<T: Coord + Float> Line<T> {
    /// Perpendicular distance from `p`.
    #[inline]
    pub fn dist(&self, p: Pt<T>) -> T {
        Float::abs(self.side(p)) / self.v.abs()
    }

    /// Parallel line moved `d` to the left of `v`.
    #[inline]
    pub fn shift_left(&self, d: T) -> Self {
        Self::new(self.v, self.c + d * self.v.abs())
    }

    /// Orthogonal projection of `p` onto the line.
    #[inline]
    pub fn proj(&self, p: Pt<T>) -> Pt<T> {
        p - perp(self.v) * self.side(p) / self.v.sq()
    }

    /// Mirror image of `p` across the line.
    #[inline]
    pub fn refl(&self, p: Pt<T>) -> Pt<T> {
        let two = T::one() + T::one();
        p - perp(self.v) * two * self.side(p) / self.v.sq()
    }
}

/// Unique intersection point of two lines, or `None` when their directions
/// are parallel (coincident lines included).
pub fn intersect<T: Coord + Float>(l1: &Line<T>, l2: &Line<T>) -> Option<Pt<T>> {
    let d = cross(l1.v, l2.v);
    if d == T::zero() {
        return None;
    }
    Some((l2.v * l1.c - l1.v * l2.c) / d)
}
