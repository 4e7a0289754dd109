//! Container geometry and coordinate conversion.
//!
//! Handles conversion between screen coordinates (pointer events) and surface
//! coordinates (garment positions). The surface is the container the base
//! photograph is shown in; its top-left corner sits at `origin` on screen and
//! both spaces share orientation and unit, so conversion is a pure offset.

use std::fmt;

use drapekit_core::{ScreenPoint, SurfacePoint};
use serde::{Deserialize, Serialize};

/// Screen placement and size of the layout surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    origin: ScreenPoint,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport whose top-left corner is at `origin` on screen.
    pub fn new(origin: ScreenPoint, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Creates a viewport anchored at the screen origin.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self::new(ScreenPoint::default(), width, height)
    }

    /// Screen position of the surface's top-left corner.
    pub fn origin(&self) -> ScreenPoint {
        self.origin
    }

    /// Moves the surface on screen (typically after a layout change).
    pub fn set_origin(&mut self, origin: ScreenPoint) {
        self.origin = origin;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the surface dimensions (typically called when the container resizes).
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Converts a surface point to screen space.
    pub fn surface_to_screen(&self, point: SurfacePoint) -> ScreenPoint {
        surface_to_screen(self.origin, point)
    }

    /// Converts a screen point to surface space.
    pub fn screen_to_surface(&self, point: ScreenPoint) -> SurfacePoint {
        screen_to_surface(self.origin, point)
    }

    /// Whether a screen point falls inside the surface bounds.
    pub fn contains_screen_point(&self, point: ScreenPoint) -> bool {
        let local = self.screen_to_surface(point);
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.width && local.y <= self.height
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Origin: {} | Size: {:.0}x{:.0}",
            self.origin, self.width, self.height
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::with_size(800.0, 600.0)
    }
}

/// Converts a surface point to screen space given the surface origin.
///
/// ```text
/// screen = origin + surface
/// ```
pub fn surface_to_screen(origin: ScreenPoint, point: SurfacePoint) -> ScreenPoint {
    ScreenPoint::new(origin.x + point.x, origin.y + point.y)
}

/// Converts a screen point to surface space given the surface origin.
pub fn screen_to_surface(origin: ScreenPoint, point: ScreenPoint) -> SurfacePoint {
    SurfacePoint::new(point.x - origin.x, point.y - origin.y)
}
