use crate::point::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sign of an exactly evaluated determinant.
///
/// This is the terminal result type of every predicate in this crate: a
/// predicate decides a geometric relationship without producing a numeric
/// measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub enum Sign {
    /// The determinant is smaller than zero.
    Negative,
    /// The determinant is exactly zero.
    Zero,
    /// The determinant is greater than zero.
    Positive,
}

impl Sign {
    /// Classifies the sign of a value.
    ///
    /// Works identically for `f64` and exact rational scalars - the only
    /// capabilities used are ordering and comparison against zero.
    pub fn of<S: Scalar>(value: &S) -> Sign {
        let zero = S::zero();
        if *value > zero {
            Sign::Positive
        } else if *value < zero {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Returns the opposite sign. `Zero` is its own opposite.
    pub fn reversed(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    /// Returns `true` if the sign is `Positive`.
    #[inline]
    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }

    /// Returns `true` if the sign is `Negative`.
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    /// Returns `true` if the sign is `Zero`.
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }
}

impl core::ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        self.reversed()
    }
}

impl From<Sign> for i32 {
    fn from(sign: Sign) -> i32 {
        match sign {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}
