//! Transform resolution for pointer moves.
//!
//! Every function here is pure. Output is always derived from the gesture's
//! origin transform, never from the object's live transform, so re-resolving
//! the same pointer positions against the same snapshot gives the same result.
//!
//! ```text
//! drag:    pos   = origin.pos + (current - start)
//! rotate:  scale = max(min_scale, origin.scale * current.distance / origin.distance)
//!          rot   = origin.rot + degrees(current.angle - origin.angle)
//! ```

use std::f64::consts::TAU;

use drapekit_core::{ScreenPoint, Transform};

use crate::gesture::{Baseline, Gesture, GestureConfig, GestureSnapshot};
use crate::pointer_registry::PointerRegistry;

/// A resolved move: the transform to emit and the unwrapped rotation (radians)
/// it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub transform: Transform,
    pub angle_delta: f64,
}

/// Origin distance usable as a divisor. Zero, negative or non-finite
/// distances become 1.
pub fn safe_distance(distance: f64) -> f64 {
    if distance.is_finite() && distance > 0.0 {
        distance
    } else {
        1.0
    }
}

/// Shifts `raw` by whole turns onto the branch nearest `previous`.
///
/// `atan2` jumps by a full turn when a pointer crosses the negative X axis
/// relative to the pivot; unwrapping against the previous delta keeps the
/// rotation continuous across that seam.
pub fn unwrap_angle(raw: f64, previous: f64) -> f64 {
    let turns = ((raw - previous) / TAU).round();
    raw - turns * TAU
}

/// Drag: translate the origin transform by the pointer's displacement.
pub fn resolve_drag(origin: Transform, start: ScreenPoint, current: ScreenPoint) -> Transform {
    origin.translated(current.x - start.x, current.y - start.y)
}

/// Rotate/scale against a baseline. Position passes through unchanged.
pub fn resolve_rotate_scale(
    origin: Transform,
    baseline: Baseline,
    current: Baseline,
    previous_delta: f64,
    min_scale: f64,
) -> Resolution {
    let ratio = current.distance / safe_distance(baseline.distance);
    let angle_delta = unwrap_angle(current.angle - baseline.angle, previous_delta);

    let transform = Transform {
        rotation: origin.rotation + angle_delta.to_degrees(),
        ..origin
    }
    .with_scale_floor(origin.scale * ratio, min_scale);

    Resolution {
        transform,
        angle_delta,
    }
}

/// Resolves the live gesture against the current pointer positions.
///
/// Returns `None` when a pointer the gesture depends on is no longer active;
/// the caller skips the tick.
pub fn resolve(
    snapshot: &GestureSnapshot,
    pointers: &PointerRegistry,
    config: &GestureConfig,
) -> Option<Resolution> {
    let origin = snapshot.origin_transform();

    match *snapshot.gesture() {
        Gesture::Drag { origin: start } => {
            let current = pointers.get(start.pointer_id)?;
            Some(Resolution {
                transform: resolve_drag(origin, start.position, current),
                angle_delta: 0.0,
            })
        }
        Gesture::HandleTransform {
            handle,
            pivot,
            baseline,
        } => {
            let current = pointers.get(handle.pointer_id)?;
            Some(resolve_rotate_scale(
                origin,
                baseline,
                Baseline::between(pivot, current),
                snapshot.angle_delta(),
                config.min_scale(),
            ))
        }
        Gesture::Pinch {
            first,
            second,
            baseline,
        } => {
            let a = pointers.get(first.pointer_id)?;
            let b = pointers.get(second.pointer_id)?;
            Some(resolve_rotate_scale(
                origin,
                baseline,
                Baseline::between(a, b),
                snapshot.angle_delta(),
                config.min_scale(),
            ))
        }
    }
}

/// Rotation in degrees folded into `(-180, 180]`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(360.0);
    if folded > 180.0 {
        folded - 360.0
    } else {
        folded
    }
}
