use num_traits::Signed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate type that the predicates can be evaluated over.
///
/// The predicate formulas only require ring arithmetic with signs and an
/// ordering against zero, so both `f64` (fast path) and
/// [BigRational](num_rational::BigRational) (exact path) qualify. `Copy` is
/// deliberately not required - arbitrary precision scalars are `Clone` only.
pub trait Scalar: Signed + Clone + PartialOrd + core::fmt::Debug {}

impl<T> Scalar for T where T: Signed + Clone + PartialOrd + core::fmt::Debug {}

/// A point in the Euclidean plane.
///
/// Points are pure values: they never mutate after construction and are
/// freely copied or cloned. The same type carries both representations used
/// by the predicates - `Point2<f64>` on the fast path and
/// `Point2<BigRational>` on the exact path.
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2<S> {
    /// The point's x coordinate
    pub x: S,
    /// The point's y coordinate
    pub y: S,
}

impl<S> Point2<S> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Point2 { x, y }
    }
}

impl<S: Scalar> Point2<S> {
    /// Returns the difference vector `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        Point2::new(
            self.x.clone() - other.x.clone(),
            self.y.clone() - other.y.clone(),
        )
    }

    /// Returns the dot product of `self` and `other`.
    pub fn dot(&self, other: &Self) -> S {
        self.x.clone() * other.x.clone() + self.y.clone() * other.y.clone()
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// This is the determinant of the 2x2 matrix with `self` and `other` as
    /// rows: the signed area of the parallelogram spanned by the two vectors.
    pub fn cross(&self, other: &Self) -> S {
        self.x.clone() * other.y.clone() - self.y.clone() * other.x.clone()
    }

    /// Returns the squared length of this point interpreted as a vector.
    pub fn length2(&self) -> S {
        self.x.clone() * self.x.clone() + self.y.clone() * self.y.clone()
    }

    /// Returns this point rotated by 90 degrees counterclockwise around the
    /// origin: `(x, y)` becomes `(-y, x)`.
    pub fn rotated_90(&self) -> Self {
        Point2::new(-self.y.clone(), self.x.clone())
    }
}

impl<S: Scalar> From<Point2<S>> for [S; 2] {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        [point.x, point.y]
    }
}

impl<S: Scalar> From<Point2<S>> for (S, S) {
    #[inline]
    fn from(point: Point2<S>) -> (S, S) {
        (point.x, point.y)
    }
}

impl<S: Scalar> From<[S; 2]> for Point2<S> {
    #[inline]
    fn from(source: [S; 2]) -> Self {
        let [x, y] = source;
        Self::new(x, y)
    }
}

impl<S: Scalar> From<(S, S)> for Point2<S> {
    #[inline]
    fn from(source: (S, S)) -> Self {
        Self::new(source.0, source.1)
    }
}

/// The determinant of the 2x2 matrix `[[a, b], [c, d]]`, i.e. `a*d - b*c`.
pub fn det2<S: Scalar>(a: S, b: S, c: S, d: S) -> S {
    a * d - b * c
}
