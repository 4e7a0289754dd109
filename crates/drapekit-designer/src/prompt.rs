//! Instruction text for the image-generation request.

use drapekit_core::LayoutError;

use crate::layout::{Layout, LayoutEntry};
use crate::model::WearMode;
use crate::resolver::normalize_degrees;

const DEFAULT_PREAMBLE: &str = "Edit the base photograph so the person wears the garments \
shown in the reference images, placed as described below. Keep the person's pose, face, \
body shape and the background unchanged. Positions are the garment centers as a percentage \
of the photo width and height from the top-left corner; later items sit on top of earlier ones.";

/// Builds the textual instruction that accompanies the layout payload.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    preamble: String,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
        }
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    pub fn build(&self, layout: &Layout) -> Result<String, LayoutError> {
        if layout.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut lines = vec![self.preamble.clone(), String::new()];
        for (index, entry) in layout.garments.iter().enumerate() {
            lines.push(describe(index + 1, entry, layout));
        }
        Ok(lines.join("\n"))
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(position: usize, entry: &LayoutEntry, layout: &Layout) -> String {
    let left = entry.x / layout.container.width * 100.0;
    let top = entry.y / layout.container.height * 100.0;
    let name = if entry.name.is_empty() {
        format!("garment {}", entry.id.0)
    } else {
        entry.name.clone()
    };

    format!(
        "{}. {}: {}, centered at {:.0}% from left and {:.0}% from top, scaled {:.2}x, {}.",
        position,
        name,
        wear_phrase(entry.wear_mode),
        left,
        top,
        entry.scale,
        rotation_phrase(entry.rotation)
    )
}

fn wear_phrase(mode: WearMode) -> &'static str {
    match mode {
        WearMode::Worn => "worn in place of the current clothing there",
        WearMode::Layered => "layered over the current clothing",
        WearMode::Accessory => "carried or attached as an accessory",
    }
}

fn rotation_phrase(rotation: f64) -> String {
    let degrees = normalize_degrees(rotation);
    if degrees.abs() < 0.5 {
        "upright".to_string()
    } else if degrees > 0.0 {
        format!("rotated {:.0}° clockwise", degrees)
    } else {
        format!("rotated {:.0}° counter-clockwise", -degrees)
    }
}
