//! Gesture classification state.
//!
//! At most one gesture is live at a time. It is stored as a single
//! [`GestureSnapshot`] whose [`Gesture`] variant carries exactly the baseline
//! data its kind needs, so a drag structurally has no distance/angle and a
//! pinch always has two origin pointers.

use std::fmt;

use drapekit_core::{GestureError, ObjectId, ScreenPoint, Transform, MIN_SCALE};
use serde::{Deserialize, Serialize};

use crate::pointer_registry::PointerSample;

/// Gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    /// One pointer on the body translates the object.
    Drag,
    /// One pointer on the handle rotates and scales around the object center.
    HandleTransform,
    /// Two pointers on the body rotate and scale in place.
    Pinch,
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drag => write!(f, "drag"),
            Self::HandleTransform => write!(f, "handle"),
            Self::Pinch => write!(f, "pinch"),
        }
    }
}

/// Engine tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    min_scale: f64,
}

impl GestureConfig {
    /// Creates a config. `min_scale` may raise the scale floor but never lower
    /// it below [`MIN_SCALE`].
    pub fn new(min_scale: f64) -> Result<Self, GestureError> {
        if !min_scale.is_finite() || min_scale < MIN_SCALE {
            return Err(GestureError::InvalidMinScale {
                value: min_scale,
                floor: MIN_SCALE,
            });
        }
        Ok(Self { min_scale })
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
        }
    }
}

/// Reference distance and angle between two screen points.
///
/// `angle` is in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub distance: f64,
    pub angle: f64,
}

impl Baseline {
    /// Distance and angle of the vector `from -> to`.
    pub fn between(from: ScreenPoint, to: ScreenPoint) -> Self {
        Self {
            distance: from.distance_to(&to),
            angle: from.angle_to(&to),
        }
    }
}

/// Kind-specific origin data of a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Drag {
        origin: PointerSample,
    },
    HandleTransform {
        handle: PointerSample,
        /// Object center on screen at gesture start.
        pivot: ScreenPoint,
        baseline: Baseline,
    },
    Pinch {
        first: PointerSample,
        second: PointerSample,
        baseline: Baseline,
    },
}

impl Gesture {
    pub fn kind(&self) -> GestureKind {
        match self {
            Gesture::Drag { .. } => GestureKind::Drag,
            Gesture::HandleTransform { .. } => GestureKind::HandleTransform,
            Gesture::Pinch { .. } => GestureKind::Pinch,
        }
    }

    pub fn baseline(&self) -> Option<Baseline> {
        match self {
            Gesture::Drag { .. } => None,
            Gesture::HandleTransform { baseline, .. } | Gesture::Pinch { baseline, .. } => {
                Some(*baseline)
            }
        }
    }
}

/// The live gesture: what is being manipulated and the frozen state it
/// started from.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSnapshot {
    target_id: ObjectId,
    origin_transform: Transform,
    gesture: Gesture,
    /// Unwrapped rotation (radians) of the last resolved move.
    angle_delta: f64,
}

impl GestureSnapshot {
    /// Single-pointer drag of the object body.
    pub fn drag(target_id: ObjectId, origin_transform: Transform, origin: PointerSample) -> Self {
        Self::with_gesture(target_id, origin_transform, Gesture::Drag { origin })
    }

    /// Rotate/scale via the handle, pivoting on the object center `pivot`.
    pub fn handle(
        target_id: ObjectId,
        origin_transform: Transform,
        handle: PointerSample,
        pivot: ScreenPoint,
    ) -> Self {
        let baseline = Baseline::between(pivot, handle.position);
        Self::with_gesture(
            target_id,
            origin_transform,
            Gesture::HandleTransform {
                handle,
                pivot,
                baseline,
            },
        )
    }

    /// Two-pointer pinch. The baseline runs from `first` to `second`; moves
    /// are measured in the same direction.
    pub fn pinch(
        target_id: ObjectId,
        origin_transform: Transform,
        first: PointerSample,
        second: PointerSample,
    ) -> Self {
        let baseline = Baseline::between(first.position, second.position);
        Self::with_gesture(
            target_id,
            origin_transform,
            Gesture::Pinch {
                first,
                second,
                baseline,
            },
        )
    }

    fn with_gesture(target_id: ObjectId, origin_transform: Transform, gesture: Gesture) -> Self {
        Self {
            target_id,
            origin_transform,
            gesture,
            angle_delta: 0.0,
        }
    }

    pub fn target_id(&self) -> ObjectId {
        self.target_id
    }

    pub fn kind(&self) -> GestureKind {
        self.gesture.kind()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Transform of the target when the gesture started.
    pub fn origin_transform(&self) -> Transform {
        self.origin_transform
    }

    /// Pointers the gesture was classified from, in baseline order.
    pub fn origin_pointers(&self) -> Vec<PointerSample> {
        match self.gesture {
            Gesture::Drag { origin } => vec![origin],
            Gesture::HandleTransform { handle, .. } => vec![handle],
            Gesture::Pinch { first, second, .. } => vec![first, second],
        }
    }

    pub fn origin_distance(&self) -> Option<f64> {
        self.gesture.baseline().map(|b| b.distance)
    }

    /// Baseline angle in radians.
    pub fn origin_angle(&self) -> Option<f64> {
        self.gesture.baseline().map(|b| b.angle)
    }

    /// Rotation of the last resolved move relative to the baseline, radians.
    pub fn angle_delta(&self) -> f64 {
        self.angle_delta
    }

    pub(crate) fn set_angle_delta(&mut self, angle_delta: f64) {
        self.angle_delta = angle_delta;
    }
}
