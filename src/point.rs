//! Generic immutable 2D point.
//!
//! [`Point`] is parameterized over any [`Scalar`]: a `Copy` numeric type with
//! addition, subtraction, multiplication and equality. Both integer and float
//! coordinates support the arithmetic here (`scale`, `translate`, [`add`],
//! [`subtract`]). Distance needs a square root, so it is only available when
//! the scalar is a [`Float`].
//!
//! Overflow follows the scalar's own arithmetic: primitive integers panic in
//! debug builds and wrap in release builds.

use std::ops::{Add, Sub};

use num_traits::{Float, Num};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base capability set for point coordinates.
///
/// Blanket-implemented for every `Copy` type implementing [`Num`], which covers
/// all primitive integers and floats.
pub trait Scalar: Copy + PartialEq + Num {}

impl<T: Copy + PartialEq + Num> Scalar for T {}

/// A 2D point with coordinates of type `T`.
///
/// Points are values: every operation returns a new point and leaves the
/// receiver untouched. Equality is component-wise.
///
/// # Example
/// ```
/// use knn2d::Point;
///
/// let p = Point::new(1.0, 1.0).scale(2.0, 3.0).translate(1.0, -1.0);
/// assert_eq!(p, Point::new(3.0, 2.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T: Scalar> Point<T> {
    /// Creates a point at `(x, y)`.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Returns `(x * sx, y * sy)`.
    #[inline]
    #[must_use]
    pub fn scale(self, sx: T, sy: T) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Returns `(x + dx, y + dy)`.
    #[inline]
    #[must_use]
    pub fn translate(self, dx: T, dy: T) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl<T: Float> Point<T> {
    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`: `sqrt(dx² + dy²)`.
    ///
    /// Never negative; NaN only when a coordinate is non-finite.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }
}

/// Component-wise sum of two points.
///
/// ```
/// use knn2d::{point, Point};
///
/// assert_eq!(point::add(Point::new(1, 2), Point::new(3, 4)), Point::new(4, 6));
/// ```
#[inline]
pub fn add<T: Scalar>(a: Point<T>, b: Point<T>) -> Point<T> {
    Point::new(a.x + b.x, a.y + b.y)
}

/// Component-wise difference `a - b`.
#[inline]
pub fn subtract<T: Scalar>(a: Point<T>, b: Point<T>) -> Point<T> {
    Point::new(a.x - b.x, a.y - b.y)
}

impl<T: Scalar> Add for Point<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        add(self, rhs)
    }
}

impl<T: Scalar> Sub for Point<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        subtract(self, rhs)
    }
}

impl<T: Scalar> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<Point<T>> for (T, T) {
    #[inline]
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}
