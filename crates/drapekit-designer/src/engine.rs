//! Multi-pointer gesture engine.
//!
//! Turns pointer down/move/up/cancel events into drag, handle rotate/scale and
//! pinch rotate/scale transforms for a single selected garment.
//!
//! ## Lifecycle
//!
//! ```text
//! pointer_down  -> register pointer, look up target, classify, snapshot
//! pointer_move  -> update pointer, resolve against the snapshot, emit
//! pointer_up    -> forget pointer, drop the snapshot
//! pointer_cancel   (same as pointer_up)
//! ```
//!
//! Lifting any tracked pointer ends the gesture even if others remain down.
//! A fresh pointer-down is needed to start a correctly baselined gesture.

use drapekit_core::{ObjectId, PointerId, ScreenPoint, Transform};
use tracing::{debug, trace};

use crate::gesture::{GestureConfig, GestureKind, GestureSnapshot};
use crate::model::TargetKind;
use crate::pointer_registry::{PointerRegistry, PointerSample};
use crate::resolver;
use crate::selection_manager::SelectionManager;
use crate::viewport::surface_to_screen;

/// The collaborator that owns the garments.
///
/// The engine reads a transform once at gesture start and otherwise only
/// proposes replacements through [`GestureHost::on_transform_change`].
pub trait GestureHost {
    /// Current transform of `id`, or `None` if the object no longer exists.
    fn object_transform(&self, id: ObjectId) -> Option<Transform>;

    /// Screen position of the layout surface's top-left corner.
    fn container_origin(&self) -> ScreenPoint;

    /// A gesture produced a full replacement transform for `id`.
    fn on_transform_change(&mut self, id: ObjectId, transform: Transform);

    /// The selection changed.
    fn on_selection_change(&mut self, id: Option<ObjectId>);

    fn on_gesture_start(&mut self, _id: ObjectId, _kind: GestureKind) {}

    fn on_gesture_end(&mut self, _id: ObjectId) {}
}

/// Pointer registry, selection and the single gesture slot.
#[derive(Debug, Clone, Default)]
pub struct GestureEngine {
    config: GestureConfig,
    pointers: PointerRegistry,
    selection: SelectionManager,
    active: Option<GestureSnapshot>,
}

impl GestureEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn pointers(&self) -> &PointerRegistry {
        &self.pointers
    }

    pub fn active_gesture(&self) -> Option<&GestureSnapshot> {
        self.active.as_ref()
    }

    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selection.selected_id()
    }

    /// A pointer went down on a garment's body or handle.
    ///
    /// Returns `true` when the engine claimed the pointer; the host should
    /// then route this pointer's remaining events here exclusively. Returns
    /// `false` if the target no longer exists, in which case nothing changed.
    pub fn pointer_down<H: GestureHost + ?Sized>(
        &mut self,
        host: &mut H,
        pointer_id: PointerId,
        position: ScreenPoint,
        target: TargetKind,
        target_id: ObjectId,
    ) -> bool {
        self.pointers.record(pointer_id, position);

        let Some(origin_transform) = host.object_transform(target_id) else {
            debug!("pointer {} down on missing {}, ignoring", pointer_id, target_id);
            self.pointers.remove(pointer_id);
            return false;
        };

        let sample = PointerSample::new(pointer_id, position);
        let snapshot = match target {
            TargetKind::Handle => {
                let pivot = surface_to_screen(host.container_origin(), origin_transform.center());
                GestureSnapshot::handle(target_id, origin_transform, sample, pivot)
            }
            TargetKind::Body => match self.pointers.snapshot().as_slice() {
                [first, second] => {
                    GestureSnapshot::pinch(target_id, origin_transform, *first, *second)
                }
                _ => GestureSnapshot::drag(target_id, origin_transform, sample),
            },
        };

        if let Some(previous) = self.active.take() {
            host.on_gesture_end(previous.target_id());
        }

        if self.selection.select(target_id) {
            host.on_selection_change(Some(target_id));
        }

        debug!(
            "{} gesture on {} from {} pointer(s), origin {}",
            snapshot.kind(),
            target_id,
            snapshot.origin_pointers().len(),
            origin_transform
        );
        host.on_gesture_start(target_id, snapshot.kind());
        self.active = Some(snapshot);
        true
    }

    /// A tracked pointer moved. Returns the emitted transform, if any.
    pub fn pointer_move<H: GestureHost + ?Sized>(
        &mut self,
        host: &mut H,
        pointer_id: PointerId,
        position: ScreenPoint,
    ) -> Option<Transform> {
        if !self.pointers.contains(pointer_id) {
            return None;
        }
        self.pointers.record(pointer_id, position);

        let snapshot = self.active.as_mut()?;
        let Some(resolution) = resolver::resolve(snapshot, &self.pointers, &self.config) else {
            trace!(
                "{} gesture on {} is missing a pointer, skipping tick",
                snapshot.kind(),
                snapshot.target_id()
            );
            return None;
        };

        snapshot.set_angle_delta(resolution.angle_delta);
        let target_id = snapshot.target_id();
        trace!("{} -> {}", target_id, resolution.transform);
        host.on_transform_change(target_id, resolution.transform);
        Some(resolution.transform)
    }

    /// A tracked pointer was released. Ends the active gesture.
    pub fn pointer_up<H: GestureHost + ?Sized>(&mut self, host: &mut H, pointer_id: PointerId) {
        if self.pointers.remove(pointer_id).is_none() {
            return;
        }
        self.end_gesture(host);
    }

    /// The host revoked a pointer. Handled exactly like [`Self::pointer_up`].
    pub fn pointer_cancel<H: GestureHost + ?Sized>(&mut self, host: &mut H, pointer_id: PointerId) {
        self.pointer_up(host, pointer_id);
    }

    /// A pointer went down on the background. Clears the selection.
    pub fn background_down<H: GestureHost + ?Sized>(&mut self, host: &mut H) {
        if self.selection.clear() {
            host.on_selection_change(None);
        }
    }

    /// Selects `id` without starting a gesture.
    pub fn select<H: GestureHost + ?Sized>(&mut self, host: &mut H, id: ObjectId) {
        if self.selection.select(id) {
            host.on_selection_change(Some(id));
        }
    }

    /// Drops every reference to `id`: ends a gesture targeting it and clears
    /// it from the selection. Used when the object is removed.
    pub fn forget_object<H: GestureHost + ?Sized>(&mut self, host: &mut H, id: ObjectId) {
        if self.active.as_ref().is_some_and(|s| s.target_id() == id) {
            self.end_gesture(host);
        }
        if self.selection.deselect(id) {
            host.on_selection_change(None);
        }
    }

    /// Ends the active gesture, if any, keeping tracked pointers.
    pub fn end_gesture<H: GestureHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(snapshot) = self.active.take() {
            debug!("{} gesture on {} ended", snapshot.kind(), snapshot.target_id());
            host.on_gesture_end(snapshot.target_id());
        }
    }

    /// Forgets all pointers and the active gesture. Selection is kept.
    pub fn reset<H: GestureHost + ?Sized>(&mut self, host: &mut H) {
        self.pointers.clear();
        self.end_gesture(host);
    }
}
