//! Minimal 2D/3D geometry types shared by the world and chunk crates.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    #[error("rectangle extent must be non-negative, got {width}x{height}")]
    NegativeExtent { width: i32, height: i32 },
}

/// A plain 2D coordinate pair with no world affinity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point<T = i32> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy + Into<f64>> Point<T> {
    /// Euclidean distance between two points.
    #[inline]
    pub fn dist(self, other: Point<T>) -> f64 {
        let dx = other.x.into() - self.x.into();
        let dy = other.y.into() - self.y.into();
        (dx * dx + dy * dy).sqrt()
    }
}

impl<T: Add<Output = T>> Add for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn add(self, rhs: Point<T>) -> Point<T> {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: AddAssign> AddAssign for Point<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Point<T>) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Sub<Output = T>> Sub for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn sub(self, rhs: Point<T>) -> Point<T> {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: SubAssign> SubAssign for Point<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Point<T>) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from(value: (T, T)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(value: Point<T>) -> Self {
        (value.x, value.y)
    }
}

/// Axis-aligned integer rectangle with half-open containment.
///
/// Only constructible through [`Rectangle::new`], so `width` and `height` are
/// always non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeomError> {
        if width < 0 || height < 0 {
            return Err(GeomError::NegativeExtent { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn origin(&self) -> Point<i32> {
        Point::new(self.x, self.y)
    }

    /// True iff `x <= p.x < x + width` and `y <= p.y < y + height`.
    #[inline]
    pub fn contains(&self, p: Point<i32>) -> bool {
        // i64 so that origins near i32::MAX do not wrap
        let (px, py) = (i64::from(p.x), i64::from(p.y));
        let (x0, y0) = (i64::from(self.x), i64::from(self.y));
        px >= x0
            && px < x0 + i64::from(self.width)
            && py >= y0
            && py < y0 + i64::from(self.height)
    }
}

/// Render-space vector; `y` is up.
///
/// `f64` components represent every `i32` tile coordinate exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
