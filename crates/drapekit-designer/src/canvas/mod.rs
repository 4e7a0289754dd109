//! Canvas holding the garments and routing pointer input to the gesture engine.

mod host;

use std::sync::Arc;

use drapekit_core::{
    AppEvent, CanvasEvent, EventBus, LayerEvent, LayoutError, ObjectId, PointerId, ScreenPoint,
    ThreadSafe, Transform,
};

use crate::engine::GestureEngine;
use crate::garment_store::GarmentStore;
use crate::gesture::{GestureConfig, GestureSnapshot};
use crate::layers::{self, LayerMove};
use crate::layout::Layout;
use crate::model::{Garment, TargetKind};
use crate::script::PointerEvent;
use crate::viewport::Viewport;
use host::CanvasHost;

/// A canvas shared between input threads. All pointer handling goes through
/// the one lock.
///
/// Event bus handlers run synchronously while that lock is held, and the lock
/// is not reentrant: a handler must not lock the same canvas. Consumers that
/// need to read the canvas in response to an event should use
/// [`EventBus::receiver`] and lock it from their own thread or task.
pub type SharedCanvas = ThreadSafe<Canvas>;

/// Canvas state: garments, surface geometry and the gesture engine.
#[derive(Debug, Clone)]
pub struct Canvas {
    store: GarmentStore,
    viewport: Viewport,
    engine: GestureEngine,
    bus: Option<Arc<EventBus>>,
}

impl Canvas {
    /// Creates an empty canvas with the default surface.
    pub fn new() -> Self {
        Self::with_config(Viewport::default(), GestureConfig::default())
    }

    /// Creates an empty canvas over `viewport`.
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self::with_config(viewport, GestureConfig::default())
    }

    pub fn with_config(viewport: Viewport, config: GestureConfig) -> Self {
        Self {
            store: GarmentStore::new(),
            viewport,
            engine: GestureEngine::with_config(config),
            bus: None,
        }
    }

    /// Publishes canvas and layer events to `bus` from now on.
    ///
    /// Handlers subscribed on `bus` are called inline from canvas methods, so
    /// they must not call back into this canvas. See [`SharedCanvas`].
    pub fn attach_event_bus(&mut self, bus: Arc<EventBus>) {
        self.bus = Some(bus);
    }

    fn split(&mut self) -> (&mut GestureEngine, CanvasHost<'_>) {
        let Canvas {
            store,
            viewport,
            engine,
            bus,
        } = self;
        (
            engine,
            CanvasHost {
                store,
                viewport,
                bus: bus.as_deref(),
            },
        )
    }

    fn publish(&self, event: AppEvent) {
        if let Some(bus) = &self.bus {
            let _ = bus.publish(event);
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn active_gesture(&self) -> Option<&GestureSnapshot> {
        self.engine.active_gesture()
    }

    /// Adds a garment, replacing any garment with the same id.
    pub fn add_garment(&mut self, garment: Garment) -> ObjectId {
        let id = garment.id;
        self.store.insert(garment);
        self.publish(AppEvent::Canvas(CanvasEvent::GarmentAdded { id }));
        id
    }

    /// Adds a garment on top of the stack with a generated id.
    pub fn add(&mut self, name: &str, x: f64, y: f64) -> ObjectId {
        let id = self.store.generate_id();
        let garment = Garment::new(id, name, x, y).with_z_index(self.store.next_z_index());
        self.add_garment(garment)
    }

    /// Removes a garment, ending any gesture on it and deselecting it.
    pub fn remove_garment(&mut self, id: ObjectId) -> Option<Garment> {
        {
            let (engine, mut host) = self.split();
            engine.forget_object(&mut host, id);
        }
        let removed = self.store.remove(id)?;
        self.publish(AppEvent::Canvas(CanvasEvent::GarmentRemoved { id }));
        Some(removed)
    }

    pub fn garment(&self, id: ObjectId) -> Option<&Garment> {
        self.store.get(id)
    }

    pub fn garments(&self) -> impl Iterator<Item = &Garment> {
        self.store.iter()
    }

    /// Garments from bottom to top.
    pub fn garments_by_z(&self) -> Vec<&Garment> {
        self.store.by_z()
    }

    pub fn garment_count(&self) -> usize {
        self.store.len()
    }

    pub fn selected_id(&self) -> Option<ObjectId> {
        self.engine.selected_id()
    }

    /// Selects a garment without starting a gesture.
    pub fn select(&mut self, id: ObjectId) {
        if self.store.get(id).is_none() {
            return;
        }
        let (engine, mut host) = self.split();
        engine.select(&mut host, id);
    }

    /// Routes a pointer-down on a garment to the engine.
    pub fn pointer_down(
        &mut self,
        pointer_id: PointerId,
        position: ScreenPoint,
        target: TargetKind,
        target_id: ObjectId,
    ) -> bool {
        let (engine, mut host) = self.split();
        engine.pointer_down(&mut host, pointer_id, position, target, target_id)
    }

    pub fn pointer_move(&mut self, pointer_id: PointerId, position: ScreenPoint) -> Option<Transform> {
        let (engine, mut host) = self.split();
        engine.pointer_move(&mut host, pointer_id, position)
    }

    pub fn pointer_up(&mut self, pointer_id: PointerId) {
        let (engine, mut host) = self.split();
        engine.pointer_up(&mut host, pointer_id);
    }

    pub fn pointer_cancel(&mut self, pointer_id: PointerId) {
        let (engine, mut host) = self.split();
        engine.pointer_cancel(&mut host, pointer_id);
    }

    pub fn background_down(&mut self) {
        let (engine, mut host) = self.split();
        engine.background_down(&mut host);
    }

    /// Routes a recorded event. Returns the transform a move emitted.
    pub fn dispatch(&mut self, event: &PointerEvent) -> Option<Transform> {
        match *event {
            PointerEvent::Down {
                pointer_id,
                x,
                y,
                target,
                object_id,
            } => {
                self.pointer_down(pointer_id, ScreenPoint::new(x, y), target, object_id);
                None
            }
            PointerEvent::Move { pointer_id, x, y } => {
                self.pointer_move(pointer_id, ScreenPoint::new(x, y))
            }
            PointerEvent::Up { pointer_id } => {
                self.pointer_up(pointer_id);
                None
            }
            PointerEvent::Cancel { pointer_id } => {
                self.pointer_cancel(pointer_id);
                None
            }
            PointerEvent::Background => {
                self.background_down();
                None
            }
        }
    }

    /// Moves the selected garment in the stack and renumbers all garments.
    ///
    /// Returns ids bottom to top, or `None` when nothing is selected.
    pub fn reorder_selected(&mut self, movement: LayerMove) -> Option<Vec<ObjectId>> {
        let id = self.engine.selected_id()?;
        let order = layers::reorder(self.store.as_mut_slice(), id, movement);
        tracing::debug!("{:?} {} -> {} layers", movement, id, order.len());
        self.publish(AppEvent::Layers(LayerEvent::Reordered {
            order: order.clone(),
        }));
        Some(order)
    }

    pub fn bring_forward(&mut self) -> Option<Vec<ObjectId>> {
        self.reorder_selected(LayerMove::Forward)
    }

    pub fn send_backward(&mut self) -> Option<Vec<ObjectId>> {
        self.reorder_selected(LayerMove::Backward)
    }

    pub fn bring_to_front(&mut self) -> Option<Vec<ObjectId>> {
        self.reorder_selected(LayerMove::ToFront)
    }

    pub fn send_to_back(&mut self) -> Option<Vec<ObjectId>> {
        self.reorder_selected(LayerMove::ToBack)
    }

    /// Exports the current garments for the generation request.
    pub fn layout(&self) -> Result<Layout, LayoutError> {
        Layout::from_garments(self.store.iter(), &self.viewport)
    }

    /// Removes every garment and forgets all pointers and the selection.
    pub fn clear(&mut self) {
        let ids: Vec<ObjectId> = self.store.iter().map(|g| g.id).collect();
        {
            let (engine, mut host) = self.split();
            engine.reset(&mut host);
        }
        for id in ids {
            self.remove_garment(id);
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
