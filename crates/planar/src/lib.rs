//! Planar computational-geometry primitives.
//!
//! A point/vector type, directed lines, and the classic predicates built on
//! them: orientation, polar sort, line intersection, segment distance,
//! point-in-polygon, polygon area and convexity.
//!
//! Conventions shared by every module
//! - `orient(a, b, c) > 0` ⇔ left turn (counter-clockwise); signed areas are
//!   positive for counter-clockwise polygons.
//! - Equality is exact; nothing in this crate uses an epsilon.
//! - Ring operations are generic over [`Coord`] and stay exact for integers.
//!   Division, norms, angles and intersection points need `num_traits::Float`.
//! - Preconditions are contracts: expected degenerate outcomes are `None`
//!   (parallel lines, non-transversal segments); the zero vector passed to
//!   [`half`] panics.

pub mod line;
pub mod ordering;
pub mod point;
pub mod polygon;
pub mod predicates;
pub mod rand;
pub mod segment;

pub use line::{intersect, Line};
pub use ordering::{half, polar_cmp, polar_sort, polar_sort_around};
pub use point::{Coord, Pt};
pub use polygon::{
    above, area, convex_hull, crosses_ray, in_polygon, is_convex, signed_area, signed_area2,
};
pub use predicates::{angle, cross, dot, orient, perp, rot, translate};
pub use segment::{crosses_properly, in_disk, on_segment, proper_inter, seg_point, seg_seg};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::line::{intersect, Line};
    pub use crate::ordering::{half, polar_sort, polar_sort_around};
    pub use crate::point::{Coord, Pt};
    pub use crate::polygon::{area, convex_hull, in_polygon, is_convex, signed_area};
    pub use crate::predicates::{cross, dot, orient, perp};
    pub use crate::segment::{on_segment, proper_inter, seg_point, seg_seg};
}

#[cfg(test)]
mod tests;
