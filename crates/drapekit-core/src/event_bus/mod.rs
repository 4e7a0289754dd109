//! # Event Bus Module
//!
//! Decoupled notification of canvas activity (transform changes, selection,
//! gesture lifecycle), layer reordering and settings changes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drapekit_core::event_bus::{AppEvent, CanvasEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Canvas]),
//!     |event| {
//!         if let AppEvent::Canvas(CanvasEvent::TransformChanged { id, transform }) = event {
//!             println!("{id} moved to {transform}");
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
