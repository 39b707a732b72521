// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! All dimensions use `f32` in content units (points). [`Vec2`] is used for
//! positions, sizes, scroll offsets and velocities alike; [`Rect`] is an
//! axis-aligned rectangle given by position and size.
//!
//! Scroll offsets follow the usual convention: a larger `y` offset means the
//! content has moved further up, revealing content below.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector
///
/// Usually used as either a coordinate or a difference of coordinates, but
/// may have some other uses.
///
/// Vectors are partially ordered and support component-wise comparison via
/// methods like `lhs.lt(rhs)`. The `PartialOrd` trait is not implemented since
/// it implements `lhs ≤ rhs` as `lhs < rhs || lhs == rhs` which is wrong for
/// vectors (consider for `lhs = (0, 1), rhs = (1, 0)`).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2(pub f32, pub f32);

impl Vec2 {
    /// Zero
    pub const ZERO: Vec2 = Vec2::splat(0.0);

    /// Constructs a new instance with each element initialized to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Vec2(value, value)
    }

    /// Construct with only a vertical component
    #[inline]
    pub const fn vertical(y: f32) -> Self {
        Vec2(0.0, y)
    }

    /// Take the maximum of absolute values of components
    #[inline]
    pub fn max_abs_comp(self) -> f32 {
        self.0.abs().max(self.1.abs())
    }

    /// Return the minimum, componentwise
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn min(self, other: Self) -> Self {
        Vec2(self.0.min(other.0), self.1.min(other.1))
    }

    /// Return the maximum, componentwise
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn max(self, other: Self) -> Self {
        Vec2(self.0.max(other.0), self.1.max(other.1))
    }

    /// Restrict a value to the specified interval, componentwise
    ///
    /// Unlike [`f32::clamp`] this does not panic when `min > max` on some
    /// axis; in that case the result on that axis is `min`.
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Take the absolute value of each component
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn abs(self) -> Self {
        Vec2(self.0.abs(), self.1.abs())
    }

    /// For each component, return `±1` with the same sign as `self`.
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn sign(self) -> Self {
        Vec2(1f32.copysign(self.0), 1f32.copysign(self.1))
    }

    /// Replace the vertical component
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn with_y(self, y: f32) -> Self {
        Vec2(self.0, y)
    }

    /// True when for all components, `lhs <= rhs`
    #[inline]
    pub fn le(self, rhs: Self) -> bool {
        self.0 <= rhs.0 && self.1 <= rhs.1
    }

    /// True when both components are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Vec2(-self.0, -self.1)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Vec2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vec2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Vec2(self.0 * rhs, self.1 * rhs)
    }
}

impl Mul for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Vec2(self.0 * rhs.0, self.1 * rhs.1)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Vec2(self.0 / rhs, self.1 / rhs)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Vec2(x, y)
    }
}

/// An axis-aligned rectangular region
///
/// The region is defined by a point `pos` and an extent `size`, allowing easy
/// translations. It is empty unless `size` is positive on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// The empty rect (all fields zero)
    pub const ZERO: Self = Self::new(Vec2::ZERO, Vec2::ZERO);

    /// Construct from a [`Vec2`] position and size
    #[inline]
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Rect { pos, size }
    }

    /// Get the second point (pos + size)
    #[inline]
    pub fn pos2(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.1 + self.size.1
    }

    /// True when the rect has no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.size.0 > 0.0 && self.size.1 > 0.0)
    }

    /// Check whether the given coordinate is contained within this rect
    ///
    /// The left and top edges are inclusive, the right and bottom exclusive.
    #[inline]
    pub fn contains(&self, c: Vec2) -> bool {
        self.pos.le(c) && c.0 < self.pos.0 + self.size.0 && c.1 < self.pos.1 + self.size.1
    }

    /// Move by `d`
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn translate(self, d: Vec2) -> Self {
        Rect::new(self.pos + d, self.size)
    }
}
