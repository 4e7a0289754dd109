//! # DrapeKit Core
//!
//! Core types and utilities for DrapeKit.
//! Provides the identifiers, points and transforms shared by the gesture
//! engine and its collaborators, the unified error type and the event bus.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod types;

pub use data::{ObjectId, PointerId, ScreenPoint, SurfacePoint, Transform, MIN_SCALE};

pub use error::{Error, GestureError, LayoutError, Result};

pub use event_bus::{
    AppEvent, CanvasEvent, EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter,
    LayerEvent, SettingsEvent, SubscriptionId,
};

pub use types::{shared, thread_safe, Shared, ThreadSafe};
