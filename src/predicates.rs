//! Filtered geometric predicates over double precision plane points.
//!
//! Each predicate first evaluates its determinant in plain `f64` arithmetic
//! and derives a semi-static error bound from the magnitudes of the inputs.
//! If the determinant clears the bound, its sign is certified and returned
//! directly. Otherwise the inputs are lifted to exact rational coordinates
//! and the formula is re-evaluated by the generic exact evaluator, which is
//! free of rounding error. The fast path can therefore never disagree with
//! the exact ground truth - an uncertifiable result is simply escalated.
//!
//! All predicates require finite coordinates and abort otherwise; use
//! [validate_point](crate::validate_point) to pre-check untrusted input.

use num_rational::BigRational;
use num_traits::Zero;

use crate::exact::{incircle_generic, orient2d_generic, to_exact};
use crate::point::{det2, Point2};
use crate::sign::Sign;

// Bound constants for the semi-static filters, derived from the unit
// round-off of f64 and the worst-case error propagation through each
// determinant formula. Outside the guard thresholds the bound expression
// itself could underflow or overflow and is no longer reliable.
const ORIENT_UNDERFLOW_GUARD: f64 = 1.0e-146;
const ORIENT_OVERFLOW_GUARD: f64 = 1.0e153;
const ORIENT_ERROR_FACTOR: f64 = 8.8872057372592798e-16;

const INCIRCLE_UNDERFLOW_GUARD: f64 = 1.0e-73;
const INCIRCLE_OVERFLOW_GUARD: f64 = 1.0e76;
const INCIRCLE_ERROR_FACTOR: f64 = 8.8878565762001373e-15;

/// Returns the orientation of the three given points: `Positive` if `p`,
/// `q`, `r` make a counterclockwise turn, `Negative` for a clockwise turn
/// and `Zero` if they are collinear.
///
/// The returned sign is always mathematically correct, even if the points
/// are nearly or exactly collinear - uncertain floating point results fall
/// back to an exact evaluation internally.
///
/// # Panics
/// Panics if any coordinate is NaN or infinite.
///
/// # Example
/// ```
/// use exactpred::{orient2d, Sign};
///
/// assert_eq!(orient2d((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)), Sign::Positive);
/// assert_eq!(orient2d((0.0, 0.0), (1.0, 0.0), (2.0, 0.0)), Sign::Zero);
/// ```
pub fn orient2d(
    p: impl Into<Point2<f64>>,
    q: impl Into<Point2<f64>>,
    r: impl Into<Point2<f64>>,
) -> Sign {
    let (p, q, r) = (p.into(), q.into(), r.into());
    assert_finite(&p);
    assert_finite(&q);
    assert_finite(&r);

    let qp = q.sub(&p);
    let rp = r.sub(&p);
    match certify_orientation(&qp, &rp) {
        Some(sign) => sign,
        None => orient2d_generic(&to_exact(&p), &to_exact(&q), &to_exact(&r)),
    }
}

/// The filter stage of [orient2d]. Returns `None` if the floating point
/// determinant cannot be certified and the exact path must decide.
fn certify_orientation(qp: &Point2<f64>, rp: &Point2<f64>) -> Option<Sign> {
    let det = qp.cross(rp);

    let mut maxx = qp.x.abs().max(rp.x.abs());
    let mut maxy = qp.y.abs().max(rp.y.abs());
    if maxx > maxy {
        core::mem::swap(&mut maxx, &mut maxy);
    }

    if maxx < ORIENT_UNDERFLOW_GUARD {
        if maxx == 0.0 {
            // Both difference vectors vanish along one axis; the points are
            // exactly collinear.
            return Some(Sign::Zero);
        }
    } else if maxy < ORIENT_OVERFLOW_GUARD {
        let eps = ORIENT_ERROR_FACTOR * maxx * maxy;
        if det > eps {
            return Some(Sign::Positive);
        }
        if det < -eps {
            return Some(Sign::Negative);
        }
    }
    None
}

/// Returns the position of `t` relative to the circumcircle of the triangle
/// `p`, `q`, `r`: `Positive` if `t` lies strictly inside, `Negative` if
/// strictly outside and `Zero` if the four points are cocircular.
///
/// `p`, `q`, `r` are assumed to be in counterclockwise order. Passing them
/// in clockwise order reverses all signs - a property of the underlying
/// determinant, not a detected special case. If any two of the four points
/// coincide, or `p`, `q`, `r` are collinear, the determinant degenerates
/// consistently (two equal points always yield `Zero`).
///
/// The returned sign is always mathematically correct; uncertain floating
/// point results fall back to an exact evaluation internally.
///
/// # Panics
/// Panics if any coordinate is NaN or infinite.
///
/// # Example
/// ```
/// use exactpred::{incircle, Sign};
///
/// let (p, q, r) = ((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
/// assert_eq!(incircle(p, q, r, (0.1, 0.1)), Sign::Positive);
/// assert_eq!(incircle(p, q, r, (10.0, 10.0)), Sign::Negative);
/// ```
pub fn incircle(
    p: impl Into<Point2<f64>>,
    q: impl Into<Point2<f64>>,
    r: impl Into<Point2<f64>>,
    t: impl Into<Point2<f64>>,
) -> Sign {
    let (p, q, r, t) = (p.into(), q.into(), r.into(), t.into());
    assert_finite(&p);
    assert_finite(&q);
    assert_finite(&r);
    assert_finite(&t);

    let qp = q.sub(&p);
    let rp = r.sub(&p);
    let tp = t.sub(&p);
    let tq = t.sub(&q);
    let rq = r.sub(&q);
    match certify_incircle(&qp, &rp, &tp, &tq, &rq) {
        Some(sign) => sign,
        None => incircle_generic(&to_exact(&p), &to_exact(&q), &to_exact(&r), &to_exact(&t)),
    }
}

/// The filter stage of [incircle], evaluating the classical 4x4 incircle
/// determinant reduced to a 2x2 determinant over cross and dot products of
/// the five difference vectors.
fn certify_incircle(
    qp: &Point2<f64>,
    rp: &Point2<f64>,
    tp: &Point2<f64>,
    tq: &Point2<f64>,
    rq: &Point2<f64>,
) -> Option<Sign> {
    let det = det2(qp.cross(tp), tp.dot(tq), qp.cross(rp), rp.dot(rq));

    let mut maxx = qp
        .x
        .abs()
        .max(rp.x.abs())
        .max(tp.x.abs())
        .max(tq.x.abs())
        .max(rq.x.abs());
    let mut maxy = qp
        .y
        .abs()
        .max(rp.y.abs())
        .max(tp.y.abs())
        .max(tq.y.abs())
        .max(rq.y.abs());
    if maxx > maxy {
        core::mem::swap(&mut maxx, &mut maxy);
    }

    if maxx < INCIRCLE_UNDERFLOW_GUARD {
        if maxx == 0.0 {
            return Some(Sign::Zero);
        }
    } else if maxy < INCIRCLE_OVERFLOW_GUARD {
        let eps = INCIRCLE_ERROR_FACTOR * maxx * maxy * maxy * maxy;
        if det > eps {
            return Some(Sign::Positive);
        }
        if det < -eps {
            return Some(Sign::Negative);
        }
    }
    None
}

/// Classifies the angle at `p` in the corner `q`, `p`, `r`: `Positive` if
/// the angle is acute, `Negative` if it is obtuse and `Zero` for a right
/// angle.
///
/// This is the sign of the dot product of `q - p` and `r - p`, obtained by
/// rotating the second leg by 90 degrees and delegating to [orient2d]. The
/// predicate thereby inherits the orientation filter's correctness
/// guarantees without a separate error analysis. Points whose span exceeds
/// the f64 range (so that a difference vector overflows) are evaluated
/// entirely in the exact domain.
///
/// # Panics
/// Panics if any coordinate is NaN or infinite.
pub fn acute_angle(
    p: impl Into<Point2<f64>>,
    q: impl Into<Point2<f64>>,
    r: impl Into<Point2<f64>>,
) -> Sign {
    let (p, q, r) = (p.into(), q.into(), r.into());
    assert_finite(&p);
    assert_finite(&q);
    assert_finite(&r);

    let pq = q.sub(&p);
    let pr = r.sub(&p).rotated_90();
    if is_finite(&pq) && is_finite(&pr) {
        orient2d(Point2::new(0.0, 0.0), pq, pr)
    } else {
        // The difference vectors only exist in the exact domain.
        let (p, q, r) = (to_exact(&p), to_exact(&q), to_exact(&r));
        let origin = Point2::new(BigRational::zero(), BigRational::zero());
        orient2d_generic(&origin, &q.sub(&p), &r.sub(&p).rotated_90())
    }
}

fn is_finite(point: &Point2<f64>) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

fn assert_finite(point: &Point2<f64>) {
    assert!(
        is_finite(point),
        "predicate input must be finite, got {:?}",
        point
    );
}
