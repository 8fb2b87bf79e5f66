//! Spatial predicates and small value types for canvas geometry.
//!
//! Everything here is pure: hit-testing, box overlap and rectangle
//! normalization operate on plain `Vec2`/`Rect` values in canvas pixels.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// A 2D point or vector in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vec2::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle described by its origin (top-left) and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Build a rectangle with non-negative size from two arbitrary corners.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let (origin, size) = min_max(a, b);
        Self { origin, size }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        point_in_box(p, self.origin, self.size)
    }

    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        boxes_overlap(self.origin, self.size, other.origin, other.size)
    }
}

/// Returns true if `p` lies strictly inside the box.
///
/// Points exactly on an edge are never contained, so two nodes sharing an
/// edge cannot both claim a click on it.
#[inline]
pub fn point_in_box(p: Vec2, origin: Vec2, size: Vec2) -> bool {
    p.x > origin.x && p.x < origin.x + size.x && p.y > origin.y && p.y < origin.y + size.y
}

/// Standard AABB overlap test. Symmetric in its two boxes.
#[inline]
pub fn boxes_overlap(a_origin: Vec2, a_size: Vec2, b_origin: Vec2, b_size: Vec2) -> bool {
    a_origin.x < b_origin.x + b_size.x
        && a_origin.x + a_size.x > b_origin.x
        && a_origin.y < b_origin.y + b_size.y
        && a_origin.y + a_size.y > b_origin.y
}

/// Normalize two drag corners into `(origin, size)` with non-negative size.
pub fn min_max(p0: Vec2, p1: Vec2) -> (Vec2, Vec2) {
    let origin = p0.min(p1);
    let size = p0.max(p1) - origin;
    (origin, size)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// A single cubic bezier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
}

impl CubicBezier {
    /// Evaluate the curve at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        self.start * a + self.control1 * b + self.control2 * c + self.end * d
    }
}
