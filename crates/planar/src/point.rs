//! 2D point/vector value type.
//!
//! Purpose
//! - One `Copy` type `Pt<T>` serves as both point and vector; arithmetic is
//!   component-wise and never mutates its operands.
//! - `T` is any `Coord` (integers or floats). Division, norms and everything
//!   else that needs real arithmetic is gated on `num_traits::Float`.
//!
//! Equality is exact coordinate equality. No epsilon is used anywhere in this
//! crate; callers needing tolerance must wrap it.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::{Point2, Scalar, Vector2};
use num_traits::{Float, Num};

/// Coordinate type: supports `+ - *`, negation and comparison.
///
/// Blanket-implemented; `i32`, `i64`, `f32`, `f64` all qualify.
pub trait Coord: Copy + PartialOrd + Num + Neg<Output = Self> + fmt::Debug {}

impl<T> Coord for T where T: Copy + PartialOrd + Num + Neg<Output = T> + fmt::Debug {}

/// Point (or free vector) `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pt<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pt<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Coord> Pt<T> {
    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    /// Squared Euclidean norm; exact for integer coordinates.
    #[inline]
    pub fn sq(self) -> T {
        self.x * self.x + self.y * self.y
    }
}

impl<T: Coord + Float> Pt<T> {
    /// Euclidean norm `sqrt(sq)`.
    #[inline]
    pub fn abs(self) -> T {
        self.sq().sqrt()
    }
}

impl<T: Coord> Add for Pt<T> {
    type Output = Pt<T>;
    #[inline]
    fn add(self, rhs: Pt<T>) -> Self::Output {
        Pt::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Coord> Sub for Pt<T> {
    type Output = Pt<T>;
    #[inline]
    fn sub(self, rhs: Pt<T>) -> Self::Output {
        Pt::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Coord> Mul<T> for Pt<T> {
    type Output = Pt<T>;
    #[inline]
    fn mul(self, d: T) -> Self::Output {
        Pt::new(self.x * d, self.y * d)
    }
}

/// Scalar division; only meaningful for floating-point coordinates.
impl<T: Coord + Float> Div<T> for Pt<T> {
    type Output = Pt<T>;
    #[inline]
    fn div(self, d: T) -> Self::Output {
        Pt::new(self.x / d, self.y / d)
    }
}

impl<T: Coord> Neg for Pt<T> {
    type Output = Pt<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Pt::new(-self.x, -self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Pt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Scalar> From<Vector2<T>> for Pt<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Pt::new(v.x.clone(), v.y.clone())
    }
}

impl<T: Scalar> From<Pt<T>> for Vector2<T> {
    #[inline]
    fn from(p: Pt<T>) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl<T: Scalar> From<Point2<T>> for Pt<T> {
    #[inline]
    fn from(p: Point2<T>) -> Self {
        Pt::new(p.x.clone(), p.y.clone())
    }
}

impl<T: Scalar> From<Pt<T>> for Point2<T> {
    #[inline]
    fn from(p: Pt<T>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl<T> From<(T, T)> for Pt<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Pt::new(x, y)
    }
}

impl<T> From<[T; 2]> for Pt<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Pt::new(x, y)
    }
}
