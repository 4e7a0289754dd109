//! Garments and pointer targets.

use drapekit_core::{ObjectId, Transform};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a garment is meant to end up on the person in the base photograph.
///
/// Only the prompt builder reads this; the gesture engine never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WearMode {
    /// Put on in place of what is already worn there.
    #[default]
    Worn,
    /// Layered over what is already worn.
    Layered,
    /// Carried or attached, not worn on the body.
    Accessory,
}

impl fmt::Display for WearMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Worn => write!(f, "worn"),
            Self::Layered => write!(f, "layered"),
            Self::Accessory => write!(f, "accessory"),
        }
    }
}

/// Part of an object a pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// The object's image.
    Body,
    /// The rotate/scale handle shown on the selected object.
    Handle,
}

/// An overlay image placed on the base photograph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    pub transform: Transform,
    #[serde(default)]
    pub z_index: i64,
    #[serde(default)]
    pub wear_mode: WearMode,
    /// Width in surface units at scale 1.0.
    #[serde(default = "default_base_size")]
    pub base_width: f64,
    /// Height in surface units at scale 1.0.
    #[serde(default = "default_base_size")]
    pub base_height: f64,
}

fn default_base_size() -> f64 {
    100.0
}

impl Garment {
    /// Creates a garment centered at `(x, y)` with default size and no rotation.
    pub fn new(id: ObjectId, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id,
            name: name.into(),
            transform: Transform::at(x, y),
            z_index: 0,
            wear_mode: WearMode::default(),
            base_width: default_base_size(),
            base_height: default_base_size(),
        }
    }

    pub fn with_z_index(mut self, z_index: i64) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_wear_mode(mut self, wear_mode: WearMode) -> Self {
        self.wear_mode = wear_mode;
        self
    }

    pub fn with_base_size(mut self, width: f64, height: f64) -> Self {
        self.base_width = width;
        self.base_height = height;
        self
    }

    /// Size on the surface at the current scale.
    pub fn scaled_size(&self) -> (f64, f64) {
        (
            self.base_width * self.transform.scale,
            self.base_height * self.transform.scale,
        )
    }
}
