//! # DrapeKit Designer
//!
//! Placement of garment images over a photo of a person. Garments are dragged,
//! rotated and scaled with one or two pointers, stacked with layer commands,
//! and finally exported as a layout plus instruction text for an
//! image-generation request.
//!
//! ## Core Components
//!
//! - **Gesture engine**: pointer registry, single gesture slot, classification
//!   into drag, handle rotate/scale and pinch rotate/scale
//! - **Resolver**: pure transform math from a gesture snapshot and the current
//!   pointer positions
//! - **Canvas**: garment store, surface geometry and event publishing
//! - **Layers**: forward/backward/front/back moves with dense renumbering
//! - **Layout / Prompt**: export payload and its textual instruction
//! - **Script**: recorded pointer sessions for replay
//!
//! ## Architecture
//!
//! ```text
//! Canvas
//!   ├── GarmentStore (transforms, stacking keys)
//!   ├── Viewport (surface origin and size)
//!   └── GestureEngine
//!         ├── PointerRegistry
//!         ├── SelectionManager
//!         └── GestureSnapshot ──> resolver ──> on_transform_change
//!
//! Layout ──> PromptBuilder
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use drapekit_core::{ObjectId, PointerId, ScreenPoint};
//! use drapekit_designer::{Canvas, Garment, TargetKind};
//!
//! let mut canvas = Canvas::new();
//! canvas.add_garment(Garment::new(ObjectId(1), "jacket", 150.0, 150.0));
//!
//! canvas.pointer_down(PointerId(1), ScreenPoint::new(200.0, 200.0), TargetKind::Body, ObjectId(1));
//! canvas.pointer_move(PointerId(1), ScreenPoint::new(220.0, 230.0));
//! canvas.pointer_up(PointerId(1));
//!
//! let jacket = canvas.garment(ObjectId(1)).unwrap();
//! assert_eq!((jacket.transform.x, jacket.transform.y), (170.0, 180.0));
//! ```

pub mod canvas;
pub mod engine;
pub mod garment_store;
pub mod gesture;
pub mod layers;
pub mod layout;
pub mod model;
pub mod pointer_registry;
pub mod prompt;
pub mod resolver;
pub mod script;
pub mod selection_manager;
pub mod viewport;

pub use canvas::{Canvas, SharedCanvas};
pub use engine::{GestureEngine, GestureHost};
pub use garment_store::GarmentStore;
pub use gesture::{Baseline, Gesture, GestureConfig, GestureKind, GestureSnapshot};
pub use layers::LayerMove;
pub use layout::{ContainerSize, Layout, LayoutEntry};
pub use model::{Garment, TargetKind, WearMode};
pub use pointer_registry::{PointerRegistry, PointerSample};
pub use prompt::PromptBuilder;
pub use resolver::Resolution;
pub use script::{PointerEvent, Session};
pub use selection_manager::SelectionManager;
pub use viewport::Viewport;
