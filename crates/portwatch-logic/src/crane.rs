//! Yard crane motion rules.
//!
//! A rail-mounted gantry shuttles between the near container row (z = 5)
//! and the far row (z = 55); its trolley roams across the block width.
//! Targets are picked on a slow random timer by the simulation core; these
//! functions only decide where to go and how far to move per frame.

use crate::bounded::FieldRange;

pub const GANTRY_NEAR_ROW_Z: f32 = 5.0;
pub const GANTRY_FAR_ROW_Z: f32 = 55.0;
pub const GANTRY_MIDPOINT_Z: f32 = 30.0;
pub const TROLLEY_RANGE: FieldRange = FieldRange::new(0.0, 13.5);
pub const TROLLEY_START_X: f32 = 7.5;

/// Fraction of remaining distance covered per second.
pub const GANTRY_RATE: f32 = 0.2;
pub const TROLLEY_RATE: f32 = 0.5;

/// Gantry target after a retarget: head for whichever row is farther.
pub fn next_gantry_target(current_z: f32) -> f32 {
    if current_z < GANTRY_MIDPOINT_Z {
        GANTRY_FAR_ROW_Z
    } else {
        GANTRY_NEAR_ROW_Z
    }
}

/// Move `current` toward `target` by `rate * dt` of the gap, never overshooting.
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let t = (rate * dt).clamp(0.0, 1.0);
    let next = current + (target - current) * t;
    next.clamp(current.min(target), current.max(target))
}
