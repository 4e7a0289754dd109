//! Event type definitions for the event bus.
//!
//! This module defines all application events organized by category.
//! Events are designed to be cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{ObjectId, Transform};

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Object manipulation on the canvas
    Canvas(CanvasEvent),
    /// Stacking order changes
    Layers(LayerEvent),
    /// Settings and configuration
    Settings(SettingsEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Canvas(_) => EventCategory::Canvas,
            AppEvent::Layers(_) => EventCategory::Layers,
            AppEvent::Settings(_) => EventCategory::Settings,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Canvas(e) => e.description(),
            AppEvent::Layers(e) => e.description(),
            AppEvent::Settings(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Object manipulation events.
    Canvas,
    /// Stacking order events.
    Layers,
    /// Settings and configuration events.
    Settings,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Canvas => write!(f, "Canvas"),
            EventCategory::Layers => write!(f, "Layers"),
            EventCategory::Settings => write!(f, "Settings"),
        }
    }
}

/// Canvas manipulation events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// A gesture produced a new transform for an object.
    TransformChanged {
        /// Object that was manipulated.
        id: ObjectId,
        /// Full replacement transform.
        transform: Transform,
    },
    /// The selection changed.
    SelectionChanged {
        /// Newly selected object, `None` when cleared.
        id: Option<ObjectId>,
    },
    /// A gesture was classified and started.
    GestureStarted {
        /// Target object.
        id: ObjectId,
        /// Gesture kind label (`drag`, `handle`, `pinch`).
        kind: String,
    },
    /// The active gesture ended.
    GestureEnded {
        /// Target object of the gesture that ended.
        id: ObjectId,
    },
    /// An object was added to the canvas.
    GarmentAdded {
        /// New object.
        id: ObjectId,
    },
    /// An object was removed from the canvas.
    GarmentRemoved {
        /// Removed object.
        id: ObjectId,
    },
}

impl CanvasEvent {
    /// Short description for logging
    pub fn description(&self) -> String {
        match self {
            CanvasEvent::TransformChanged { id, transform } => {
                format!("{} -> {}", id, transform)
            }
            CanvasEvent::SelectionChanged { id: Some(id) } => format!("Selected {}", id),
            CanvasEvent::SelectionChanged { id: None } => "Selection cleared".to_string(),
            CanvasEvent::GestureStarted { id, kind } => format!("{} gesture on {}", kind, id),
            CanvasEvent::GestureEnded { id } => format!("Gesture on {} ended", id),
            CanvasEvent::GarmentAdded { id } => format!("Added {}", id),
            CanvasEvent::GarmentRemoved { id } => format!("Removed {}", id),
        }
    }
}

/// Stacking order events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayerEvent {
    /// All objects were renumbered.
    Reordered {
        /// Object ids from bottom to top.
        order: Vec<ObjectId>,
    },
}

impl LayerEvent {
    /// Short description for logging
    pub fn description(&self) -> String {
        match self {
            LayerEvent::Reordered { order } => format!("Reordered {} layers", order.len()),
        }
    }
}

/// Settings events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingsEvent {
    /// Configuration was loaded from disk.
    Loaded {
        /// Source file.
        path: PathBuf,
    },
    /// Built-in defaults are in use.
    DefaultsApplied,
}

impl SettingsEvent {
    /// Short description for logging
    pub fn description(&self) -> String {
        match self {
            SettingsEvent::Loaded { path } => format!("Settings loaded from {}", path.display()),
            SettingsEvent::DefaultsApplied => "Default settings applied".to_string(),
        }
    }
}
