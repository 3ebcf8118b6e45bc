//! Epsilon-tolerant real numbers.
//!
//! - `Scalar`: an `f64` whose comparisons go through `sign()` of the difference.
//! - `EPS`: the one tolerance shared by every predicate in the crate.
//!
//! Arithmetic is plain IEEE arithmetic on the wrapped value. Division by a
//! zero-valued `Scalar` is not guarded here; callers that divide must check
//! their divisor first (see `predicates::find_lines_intersection`).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Tolerance for every sign test.
pub const EPS: f64 = 1e-9;

/// Real number with epsilon-banded comparisons.
///
/// Equality is not transitive: `a == b` and `b == c` does not imply `a == c`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scalar(f64);

impl Scalar {
    pub const ZERO: Scalar = Scalar(0.0);
    pub const ONE: Scalar = Scalar(1.0);

    #[inline]
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    /// Raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// `-1` below `-EPS`, `1` above `EPS`, `0` in between (and for NaN).
    #[inline]
    pub fn sign(self) -> i32 {
        if self.0 < -EPS {
            -1
        } else if self.0 > EPS {
            1
        } else {
            0
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Tolerant minimum; keeps `self` unless `other` is strictly smaller.
    #[inline]
    pub fn min(self, other: Scalar) -> Scalar {
        if other < self {
            other
        } else {
            self
        }
    }
}

/// Square root of the wrapped value.
#[inline]
pub fn sqrt(x: Scalar) -> Scalar {
    Scalar(x.0.sqrt())
}

/// Absolute value, with the tolerant `>= 0` test deciding the branch.
#[inline]
pub fn abs(x: Scalar) -> Scalar {
    if x >= Scalar::ZERO {
        x
    } else {
        -x
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(val: f64) -> Self {
        Self(val)
    }
}

impl From<Scalar> for f64 {
    #[inline]
    fn from(s: Scalar) -> Self {
        s.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Scalar {
    type Output = Scalar;
    #[inline]
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Scalar;
    #[inline]
    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Scalar;
    #[inline]
    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

impl Div for Scalar {
    type Output = Scalar;
    #[inline]
    fn div(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 / rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    #[inline]
    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl PartialEq for Scalar {
    #[inline]
    fn eq(&self, other: &Scalar) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Scalar) -> Option<Ordering> {
        let diff = *self - *other;
        if diff.0.is_nan() {
            return None;
        }
        Some(diff.sign().cmp(&0))
    }
}

impl PartialEq<f64> for Scalar {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        *self == Scalar(*other)
    }
}

impl PartialOrd<f64> for Scalar {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.partial_cmp(&Scalar(*other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sign_bands() {
        assert_eq!(Scalar::new(1e-10).sign(), 0);
        assert_eq!(Scalar::new(-1e-10).sign(), 0);
        assert_eq!(Scalar::new(1e-8).sign(), 1);
        assert_eq!(Scalar::new(-1e-8).sign(), -1);
        assert_eq!(Scalar::new(f64::NAN).sign(), 0);
    }

    #[test]
    fn comparisons_absorb_noise() {
        let a = Scalar::new(0.1) + Scalar::new(0.2);
        assert!(a == 0.3);
        assert!(a <= Scalar::new(0.3));
        assert!(a >= Scalar::new(0.3));
        assert!(!(a < Scalar::new(0.3)));
        assert!(Scalar::new(1.0) != Scalar::new(1.0 + 1e-6));
        assert!(Scalar::new(1.0) < Scalar::new(1.0 + 1e-6));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Scalar::new(f64::NAN);
        assert!(nan.partial_cmp(&Scalar::ONE).is_none());
        assert!(nan != Scalar::ONE);
        assert!(!(nan < Scalar::ONE) && !(nan > Scalar::ONE));
    }

    #[test]
    fn abs_sqrt_min() {
        assert_eq!(abs(Scalar::new(-2.5)).value(), 2.5);
        assert_eq!(abs(Scalar::new(2.5)).value(), 2.5);
        assert!((sqrt(Scalar::new(9.0)).value() - 3.0).abs() < 1e-12);
        assert_eq!(Scalar::new(2.0).min(Scalar::new(1.0)).value(), 1.0);
        // Within tolerance the receiver wins.
        assert_eq!(Scalar::new(1.0).min(Scalar::new(1.0 - 1e-12)).value(), 1.0);
    }

    proptest! {
        #[test]
        fn sign_is_a_trichotomy(x in -1e-6f64..1e-6) {
            let s = Scalar::new(x).sign();
            let below = x < -EPS;
            let inside = x.abs() <= EPS;
            let above = x > EPS;
            prop_assert_eq!([below, inside, above].iter().filter(|b| **b).count(), 1);
            prop_assert_eq!(s == -1, below);
            prop_assert_eq!(s == 0, inside);
            prop_assert_eq!(s == 1, above);
        }
    }
}
