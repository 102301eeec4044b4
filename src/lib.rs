//! # exactpred
//!
//! Arithmetically filtered, exact geometric predicates for points in the
//! Euclidean plane:
//!
//! * [orient2d] - on which side of the line through two points does a third
//!   point lie?
//! * [incircle] - does a point lie inside, outside or on the circumcircle of
//!   a triangle?
//! * [acute_angle] - is the angle formed at a corner acute, obtuse or right?
//!
//! Each predicate returns a [Sign] that is *always* mathematically correct,
//! no matter how close the input is to a degenerate configuration. A fast
//! `f64` evaluation is tried first; a semi-static error bound computed from
//! the input magnitudes decides whether its sign can be trusted. If not, the
//! coordinates are lifted losslessly into arbitrary precision rationals (see
//! [to_exact]) and the formula is re-evaluated without rounding error by the
//! generic evaluators [orient2d_generic] and [incircle_generic], which can
//! also be called directly with already-exact coordinates.
//!
//! Correct signs matter because algorithms built on these predicates -
//! triangulations, convex hulls, mesh generation - make topological
//! decisions from them; a single wrong sign can corrupt the whole structure.
//!
//! All predicates require finite coordinates and abort on NaN or infinite
//! input; [validate_point] offers a non-panicking pre-check. How often the
//! exact path triggers can be observed through the [diagnostics] module.
//!
//! # Features
//! * `serde`: Serialization of [Point2] and [Sign] with serde.

#![warn(missing_docs)]

mod exact;
mod point;
mod predicates;
mod sign;
mod validation;

pub mod diagnostics;

pub use exact::{incircle_generic, orient2d_generic, to_exact};
pub use point::{det2, Point2, Scalar};
pub use predicates::{acute_angle, incircle, orient2d};
pub use sign::Sign;
pub use validation::{validate_coordinate, validate_point, CoordinateError};
