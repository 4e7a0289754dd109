//! Active pointer tracking.

use drapekit_core::{PointerId, ScreenPoint};
use serde::{Deserialize, Serialize};

/// A pointer id paired with a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub pointer_id: PointerId,
    pub position: ScreenPoint,
}

impl PointerSample {
    pub fn new(pointer_id: PointerId, position: ScreenPoint) -> Self {
        Self {
            pointer_id,
            position,
        }
    }
}

/// Last known screen position of every pointer currently in contact.
///
/// Iteration order is the order in which pointers first went down; updating a
/// pointer's position does not move it.
#[derive(Debug, Clone, Default)]
pub struct PointerRegistry {
    entries: Vec<PointerSample>,
}

impl PointerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pointer or updates its position.
    pub fn record(&mut self, pointer_id: PointerId, position: ScreenPoint) {
        match self.entries.iter_mut().find(|e| e.pointer_id == pointer_id) {
            Some(entry) => entry.position = position,
            None => self.entries.push(PointerSample::new(pointer_id, position)),
        }
    }

    /// Forgets a pointer. Returns its last position if it was tracked.
    pub fn remove(&mut self, pointer_id: PointerId) -> Option<ScreenPoint> {
        let index = self
            .entries
            .iter()
            .position(|e| e.pointer_id == pointer_id)?;
        Some(self.entries.remove(index).position)
    }

    pub fn get(&self, pointer_id: PointerId) -> Option<ScreenPoint> {
        self.entries
            .iter()
            .find(|e| e.pointer_id == pointer_id)
            .map(|e| e.position)
    }

    pub fn contains(&self, pointer_id: PointerId) -> bool {
        self.get(pointer_id).is_some()
    }

    /// Copy of all active pointers in first-contact order.
    pub fn snapshot(&self) -> Vec<PointerSample> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
