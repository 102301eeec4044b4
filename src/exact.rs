//! The exact side of the predicate pipeline: a generic evaluator that writes
//! each determinant formula out once, in full, over any [Scalar], plus the
//! lossless lift from `f64` coordinates into exact rational coordinates.
//!
//! When fed `Point2<BigRational>` points the evaluators are free of rounding
//! at every step and act as the ground truth for the filtered predicates.
//! They can also be called directly with other scalar types, e.g. with plain
//! `f64` points whose coordinates are known to be small integers.

use num_rational::BigRational;

use crate::diagnostics;
use crate::point::{Point2, Scalar};
use crate::sign::Sign;

/// Lifts a double precision point into exact rational coordinates.
///
/// Every finite IEEE 754 double represents an exact rational number, so this
/// conversion is lossless: the rational point denotes bit for bit the same
/// location as the input.
///
/// # Panics
/// Panics if a coordinate is NaN or infinite. Non-finite coordinates have no
/// rational value; callers must guarantee finiteness.
pub fn to_exact(point: &Point2<f64>) -> Point2<BigRational> {
    Point2::new(lift_coordinate(point.x), lift_coordinate(point.y))
}

fn lift_coordinate(coordinate: f64) -> BigRational {
    match BigRational::from_float(coordinate) {
        Some(exact) => exact,
        None => panic!("cannot lift non-finite coordinate {coordinate} to an exact rational"),
    }
}

/// Evaluates the orientation of `p`, `q`, `r` directly in the scalar domain
/// of the input points: the sign of `cross(q - p, r - p)`.
///
/// `Positive` means the three points make a counterclockwise turn, `Negative`
/// a clockwise turn and `Zero` that they are collinear. With exact rational
/// points the result is mathematically exact.
pub fn orient2d_generic<S: Scalar>(p: &Point2<S>, q: &Point2<S>, r: &Point2<S>) -> Sign {
    diagnostics::record_exact_evaluation();
    let qp = q.sub(p);
    let rp = r.sub(p);
    Sign::of(&qp.cross(&rp))
}

/// Evaluates the incircle test directly in the scalar domain of the input
/// points.
///
/// With `a`, `b`, `c` in counterclockwise order, returns `Positive` if `p`
/// lies strictly inside their circumcircle, `Negative` if strictly outside
/// and `Zero` if all four points are cocircular. The formula is the standard
/// 3x3 expansion of the incircle determinant after translating `p` into the
/// origin. With exact rational points the result is mathematically exact.
pub fn incircle_generic<S: Scalar>(
    a: &Point2<S>,
    b: &Point2<S>,
    c: &Point2<S>,
    p: &Point2<S>,
) -> Sign {
    diagnostics::record_exact_evaluation();
    let a = a.sub(p);
    let b = b.sub(p);
    let c = c.sub(p);
    let det = a.length2() * b.cross(&c) + b.length2() * c.cross(&a) + c.length2() * a.cross(&b);
    Sign::of(&det)
}
