//! Layout export for the image-generation request.
//!
//! The exported document is what the downstream generation call consumes: the
//! final garment list ordered bottom to top, with the container size the
//! positions are relative to.

use chrono::{DateTime, Utc};
use drapekit_core::{LayoutError, ObjectId};
use serde::{Deserialize, Serialize};

use crate::model::{Garment, WearMode};
use crate::viewport::Viewport;

/// Layout document format version
const LAYOUT_FORMAT_VERSION: &str = "1.0";

/// One garment in the exported layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub id: ObjectId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub wear_mode: WearMode,
}

impl From<&Garment> for LayoutEntry {
    fn from(garment: &Garment) -> Self {
        Self {
            id: garment.id,
            name: garment.name.clone(),
            x: garment.transform.x,
            y: garment.transform.y,
            scale: garment.transform.scale,
            rotation: garment.transform.rotation,
            wear_mode: garment.wear_mode,
        }
    }
}

/// Size of the surface positions are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

/// Complete exported layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub container: ContainerSize,
    /// Bottom to top.
    pub garments: Vec<LayoutEntry>,
}

impl Layout {
    /// Builds a layout from garments in any order; entries are sorted by
    /// stacking key.
    pub fn from_garments<'a, I>(garments: I, viewport: &Viewport) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = &'a Garment>,
    {
        let (width, height) = (viewport.width(), viewport.height());
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(LayoutError::InvalidContainer { width, height });
        }

        let mut sorted: Vec<&Garment> = garments.into_iter().collect();
        sorted.sort_by_key(|g| g.z_index);

        Ok(Self {
            version: LAYOUT_FORMAT_VERSION.to_string(),
            generated_at: Utc::now(),
            container: ContainerSize { width, height },
            garments: sorted.into_iter().map(LayoutEntry::from).collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }

    /// Pretty-printed JSON payload.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
