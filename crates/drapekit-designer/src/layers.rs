//! Stacking order operations.
//!
//! Every operation sorts the garments by `z_index` (ties keep slice order),
//! optionally moves the target, then renumbers densely from 0 so keys never
//! grow without bound. Running the same operation on an already dense stack
//! where the target cannot move further only renumbers.

use drapekit_core::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::Garment;

/// Where to move the target in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerMove {
    /// One position up.
    Forward,
    /// One position down.
    Backward,
    /// To the top.
    ToFront,
    /// To the bottom.
    ToBack,
}

/// Moves `target` and renumbers. Returns ids from bottom to top.
///
/// An id not present in `garments` only renumbers.
pub fn reorder(garments: &mut [Garment], target: ObjectId, movement: LayerMove) -> Vec<ObjectId> {
    let mut order = stacking_order(garments);

    if let Some(pos) = order.iter().position(|&i| garments[i].id == target) {
        let last = order.len() - 1;
        match movement {
            LayerMove::Forward if pos < last => order.swap(pos, pos + 1),
            LayerMove::Backward if pos > 0 => order.swap(pos, pos - 1),
            LayerMove::ToFront => {
                let index = order.remove(pos);
                order.push(index);
            }
            LayerMove::ToBack => {
                let index = order.remove(pos);
                order.insert(0, index);
            }
            _ => {}
        }
    }

    renumber(garments, &order)
}

/// Renumbers to `0..N-1` without moving anything. Returns ids bottom to top.
pub fn normalize(garments: &mut [Garment]) -> Vec<ObjectId> {
    let order = stacking_order(garments);
    renumber(garments, &order)
}

fn stacking_order(garments: &[Garment]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..garments.len()).collect();
    order.sort_by_key(|&i| garments[i].z_index);
    order
}

fn renumber(garments: &mut [Garment], order: &[usize]) -> Vec<ObjectId> {
    order
        .iter()
        .enumerate()
        .map(|(z, &i)| {
            garments[i].z_index = z as i64;
            garments[i].id
        })
        .collect()
}
