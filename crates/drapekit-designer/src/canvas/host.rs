//! Bridges the gesture engine to the canvas' garment store and event bus.

use drapekit_core::{AppEvent, CanvasEvent, EventBus, ObjectId, ScreenPoint, Transform};

use crate::engine::GestureHost;
use crate::garment_store::GarmentStore;
use crate::gesture::GestureKind;
use crate::viewport::Viewport;

/// Borrowed view of the canvas handed to the engine for one event.
pub(crate) struct CanvasHost<'a> {
    pub(crate) store: &'a mut GarmentStore,
    pub(crate) viewport: &'a Viewport,
    pub(crate) bus: Option<&'a EventBus>,
}

impl CanvasHost<'_> {
    fn publish(&self, event: CanvasEvent) {
        if let Some(bus) = self.bus {
            // nobody listening is fine
            let _ = bus.publish(AppEvent::Canvas(event));
        }
    }
}

impl GestureHost for CanvasHost<'_> {
    fn object_transform(&self, id: ObjectId) -> Option<Transform> {
        self.store.get(id).map(|g| g.transform)
    }

    fn container_origin(&self) -> ScreenPoint {
        self.viewport.origin()
    }

    fn on_transform_change(&mut self, id: ObjectId, transform: Transform) {
        if self.store.set_transform(id, transform) {
            self.publish(CanvasEvent::TransformChanged { id, transform });
        }
    }

    fn on_selection_change(&mut self, id: Option<ObjectId>) {
        self.publish(CanvasEvent::SelectionChanged { id });
    }

    fn on_gesture_start(&mut self, id: ObjectId, kind: GestureKind) {
        self.publish(CanvasEvent::GestureStarted {
            id,
            kind: kind.to_string(),
        });
    }

    fn on_gesture_end(&mut self, id: ObjectId) {
        self.publish(CanvasEvent::GestureEnded { id });
    }
}
