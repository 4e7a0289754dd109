//! Data models shared across DrapeKit crates.
//!
//! Identifiers, points in the two coordinate spaces the engine works with, and
//! the object transform that gestures produce.
//!
//! Screen space is the host input system's coordinate space (pointer events).
//! Surface space is the coordinate space of the container the garments are
//! laid out in; its origin is the container's top-left corner on screen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hard lower bound for [`Transform::scale`].
pub const MIN_SCALE: f64 = 0.1;

/// Opaque, stable identifier of a transformable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj#{}", self.0)
    }
}

impl From<u64> for ObjectId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Identifier of one physical contact (finger, pen or mouse).
///
/// Unique among the currently active contacts only; hosts may reuse ids once
/// a contact has been released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub i64);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ptr#{}", self.0)
    }
}

impl From<i64> for PointerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    /// Creates a new screen point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &ScreenPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle in radians of the vector from `self` to `other`, in `(-π, π]`.
    ///
    /// Screen Y grows downwards, so a positive angle is a clockwise turn on
    /// screen.
    pub fn angle_to(&self, other: &ScreenPoint) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A point in surface (container-local) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    /// Creates a new surface point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position, scale and rotation of an object on the surface.
///
/// `x`/`y` locate the object's center in surface space. `rotation` is in
/// degrees and is deliberately left unnormalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
}

impl Transform {
    /// Creates a transform from its four components.
    pub fn new(x: f64, y: f64, scale: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            scale,
            rotation,
        }
    }

    /// Untransformed object centered at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0, 0.0)
    }

    /// Center of the object in surface space.
    pub fn center(&self) -> SurfacePoint {
        SurfacePoint::new(self.x, self.y)
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Returns a copy with the scale replaced, clamped to `min_scale`.
    pub fn with_scale_floor(&self, scale: f64, min_scale: f64) -> Self {
        Self {
            scale: scale.max(min_scale),
            ..*self
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos=({:.2}, {:.2}) scale={:.3} rot={:.2}°",
            self.x, self.y, self.scale, self.rotation
        )
    }
}
