//! 2D points and displacements over `Scalar`.
//!
//! Positions and displacements share one type. All operations return new
//! values; nothing mutates in place.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::{Rotation2, Vector2};

use crate::scalar::{sqrt, Scalar};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: Scalar,
    pub y: Scalar,
}

impl Vector {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Scalar::new(x),
            y: Scalar::new(y),
        }
    }

    #[inline]
    pub fn from_scalars(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vector) -> Scalar {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product; positive when `other` is
    /// counterclockwise from `self`.
    #[inline]
    pub fn cross(self, other: Vector) -> Scalar {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn scale(self, k: Scalar) -> Vector {
        Vector::from_scalars(self.x * k, self.y * k)
    }

    /// Euclidean norm.
    #[inline]
    pub fn len(self) -> Scalar {
        sqrt(self.dot(self))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_na(self) -> Vector2<f64> {
        Vector2::new(self.x.value(), self.y.value())
    }
}

/// Dot product of `u` and `v`.
#[inline]
pub fn dot_prod(u: Vector, v: Vector) -> Scalar {
    u.dot(v)
}

/// 2D scalar cross product of `u` and `v`.
#[inline]
pub fn cross_prod(u: Vector, v: Vector) -> Scalar {
    u.cross(v)
}

/// `v` rotated counterclockwise by `angle` radians.
pub fn rotated(v: Vector, angle: f64) -> Vector {
    (Rotation2::new(angle) * v.to_na()).into()
}

/// Angle between `u` and `v` in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos`; round-off can push it
/// slightly outside. Zero-length inputs yield NaN.
pub fn unoriented_angle(u: Vector, v: Vector) -> f64 {
    let cos = (u.dot(v) / (u.len() * v.len())).value();
    cos.clamp(-1.0, 1.0).acos()
}

impl From<Vector2<f64>> for Vector {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl From<Vector> for (f64, f64) {
    #[inline]
    fn from(v: Vector) -> Self {
        (v.x.value(), v.y.value())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::from_scalars(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::from_scalars(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::from_scalars(-self.x, -self.y)
    }
}

impl Mul<Scalar> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, k: Scalar) -> Vector {
        self.scale(k)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, k: f64) -> Vector {
        self.scale(Scalar::new(k))
    }
}

impl Div<Scalar> for Vector {
    type Output = Vector;
    #[inline]
    fn div(self, k: Scalar) -> Vector {
        Vector::from_scalars(self.x / k, self.y / k)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn div(self, k: f64) -> Vector {
        self / Scalar::new(k)
    }
}
