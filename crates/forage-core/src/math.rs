use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lengths at or below this are treated as "no direction".
const NORMALIZE_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or [`Vec2::ZERO`] when the length is zero or not
    /// finite. Never produces NaN.
    pub fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len.is_finite() && len > NORMALIZE_EPSILON {
            self / len
        } else {
            Self::ZERO
        }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Clamp to `[0, 1]`. NaN maps to `0`.
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp01(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_degenerate_lengths() {
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
        assert_eq!(Vec2::new(f32::NAN, 1.0).normalize_or_zero(), Vec2::ZERO);
        assert_eq!(
            Vec2::new(f32::INFINITY, 0.0).normalize_or_zero(),
            Vec2::ZERO
        );

        let n = Vec2::new(3.0, 4.0).normalize_or_zero();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn lerp_clamps_its_parameter() {
        assert_eq!(lerp(5.0, 1.0, 0.0), 5.0);
        assert_eq!(lerp(5.0, 1.0, 1.0), 1.0);
        assert_eq!(lerp(5.0, 1.0, 2.0), 1.0);
        assert_eq!(lerp(5.0, 1.0, 0.5), 3.0);
        assert_eq!(lerp(5.0, 1.0, f32::NAN), 5.0);
    }
}
