//! Recorded pointer sessions.
//!
//! A session is a JSON document holding the surface geometry, the garments at
//! the start, and the pointer events in arrival order. Replaying it drives a
//! [`Canvas`] exactly as the live host would. The surface geometry is optional;
//! without it the caller's surface is used.
//!
//! ```json
//! {
//!   "viewport": { "origin": { "x": 0, "y": 0 }, "width": 400, "height": 600 },
//!   "garments": [ { "id": 1, "name": "jacket", "transform": { "x": 150, "y": 150, "scale": 1, "rotation": 0 } } ],
//!   "events": [
//!     { "type": "down", "pointer_id": 1, "x": 200, "y": 200, "target": "body", "object_id": 1 },
//!     { "type": "move", "pointer_id": 1, "x": 220, "y": 230 },
//!     { "type": "up", "pointer_id": 1 }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use drapekit_core::{ObjectId, PointerId, ScreenPoint};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::canvas::Canvas;
use crate::gesture::GestureConfig;
use crate::model::{Garment, TargetKind};
use crate::viewport::Viewport;

/// One input event from the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        pointer_id: PointerId,
        x: f64,
        y: f64,
        target: TargetKind,
        object_id: ObjectId,
    },
    Move {
        pointer_id: PointerId,
        x: f64,
        y: f64,
    },
    Up {
        pointer_id: PointerId,
    },
    Cancel {
        pointer_id: PointerId,
    },
    /// Pointer down on empty background.
    Background,
}

impl PointerEvent {
    pub fn position(&self) -> Option<ScreenPoint> {
        match *self {
            PointerEvent::Down { x, y, .. } | PointerEvent::Move { x, y, .. } => {
                Some(ScreenPoint::new(x, y))
            }
            _ => None,
        }
    }
}

/// A recorded pointer session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    pub garments: Vec<Garment>,
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse pointer session")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?;
        Self::from_json(&content)
    }

    /// The recorded surface, or `fallback` when the session has none.
    pub fn viewport_or(&self, fallback: Viewport) -> Viewport {
        self.viewport.unwrap_or(fallback)
    }

    /// Builds a canvas holding the session's garments, before any event.
    pub fn to_canvas(&self, fallback: Viewport, config: GestureConfig) -> Canvas {
        let mut canvas = Canvas::with_config(self.viewport_or(fallback), config);
        for garment in &self.garments {
            canvas.add_garment(garment.clone());
        }
        canvas
    }

    /// Replays every event onto a fresh canvas.
    pub fn replay(&self, fallback: Viewport, config: GestureConfig) -> Canvas {
        let mut canvas = self.to_canvas(fallback, config);
        for event in &self.events {
            canvas.dispatch(event);
        }
        canvas
    }
}
