//! Storage for the garments shown on the canvas.

use drapekit_core::{ObjectId, Transform};

use crate::model::Garment;

/// Garments in insertion order, addressed by id.
#[derive(Debug, Clone, Default)]
pub struct GarmentStore {
    garments: Vec<Garment>,
    next_id: u64,
}

impl GarmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates an id not used by any garment inserted so far.
    pub fn generate_id(&mut self) -> ObjectId {
        self.next_id += 1;
        ObjectId(self.next_id)
    }

    /// Inserts a garment, replacing any existing garment with the same id.
    pub fn insert(&mut self, garment: Garment) {
        self.next_id = self.next_id.max(garment.id.0);
        match self.garments.iter_mut().find(|g| g.id == garment.id) {
            Some(existing) => *existing = garment,
            None => self.garments.push(garment),
        }
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<Garment> {
        let index = self.garments.iter().position(|g| g.id == id)?;
        Some(self.garments.remove(index))
    }

    pub fn get(&self, id: ObjectId) -> Option<&Garment> {
        self.garments.iter().find(|g| g.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Garment> {
        self.garments.iter_mut().find(|g| g.id == id)
    }

    /// Replaces the transform of `id`. Returns `false` if it does not exist.
    pub fn set_transform(&mut self, id: ObjectId, transform: Transform) -> bool {
        match self.get_mut(id) {
            Some(garment) => {
                garment.transform = transform;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Garment> {
        self.garments.iter()
    }

    /// Garments from bottom to top. Ties keep insertion order.
    pub fn by_z(&self) -> Vec<&Garment> {
        let mut sorted: Vec<&Garment> = self.garments.iter().collect();
        sorted.sort_by_key(|g| g.z_index);
        sorted
    }

    /// Mutable access for stacking operations.
    pub fn as_mut_slice(&mut self) -> &mut [Garment] {
        &mut self.garments
    }

    /// Stacking key one above the current top.
    pub fn next_z_index(&self) -> i64 {
        self.garments
            .iter()
            .map(|g| g.z_index + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.garments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }

    pub fn clear(&mut self) {
        self.garments.clear();
    }
}
