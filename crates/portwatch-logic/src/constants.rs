//! Terminal constants — metric ranges, step sizes, yard geometry.
//!
//! Plain `f32` constants with no runtime dependency. Both the simulation
//! core and the harness read from here.

use crate::bounded::FieldRange;

pub mod ranges {
    use super::FieldRange;

    // Yard zones
    pub const UTILIZATION: FieldRange = FieldRange::new(0.0, 100.0);
    pub const WAITING_TIME: FieldRange = FieldRange::new(0.0, 40.0);
    pub const PLUG_STATUS: FieldRange = FieldRange::new(0.0, 100.0);
    pub const CRANE_POSITION: FieldRange = FieldRange::new(50.0, 450.0);
    // Vessel
    pub const SHIP_STATUS: FieldRange = FieldRange::new(0.0, 100.0);
    // Empty-container rows
    pub const CONTAINERS_TO_CLEAN: FieldRange = FieldRange::new(0.0, 60.0);
    pub const REPAIRING_CONTAINERS: FieldRange = FieldRange::new(0.0, 30.0);
}

/// Half-width `d` of the uniform `[-d, d]` random-walk delta per field.
pub mod steps {
    pub const UTILIZATION: f32 = 3.0;
    pub const WAITING_TIME: f32 = 2.0;
    pub const PLUG_STATUS: f32 = 3.0;
    pub const CRANE_POSITION: f32 = 20.0;
    pub const SHIP_STATUS: f32 = 3.0;
    pub const CONTAINERS_TO_CLEAN: f32 = 3.0;
    pub const REPAIRING_CONTAINERS: f32 = 2.0;
    pub const FORKLIFT_X: f32 = 15.0;
    /// Widest forklift step the empty-row panel is tuned for.
    pub const FORKLIFT_X_MAX: f32 = 25.0;
}

/// Panel refresh cadences, in seconds.
pub mod cadence {
    pub const ZONE_INTERVAL_SECS: f32 = 5.0;
    pub const EMPTY_BLOCK_INTERVAL_SECS: f32 = 3.0;
    pub const CRANE_RETARGET_MIN_SECS: f32 = 6.0;
    pub const CRANE_RETARGET_MAX_SECS: f32 = 10.0;
    pub const FRAME_INTERVAL_SECS: f32 = 0.25;
    /// Longest driver wake interval a config may ask for.
    pub const FRAME_INTERVAL_MAX_SECS: f32 = 5.0;
}

pub mod vessel {
    pub const MONITOR_POINT_COUNT: u32 = 3;
    pub const MONITOR_POINT_X: f32 = 80.0;
    pub const MONITOR_POINT_FIRST_Y: f32 = 150.0;
    pub const MONITOR_POINT_SPACING: f32 = 100.0;

    // Static cargo panel readings
    pub const CARGO_CAPACITY: f32 = 75.0;
    pub const LOADING_PROGRESS: f32 = 45.0;
    pub const ESTIMATED_TIME_MIN: f32 = 120.0;
}

pub mod empty_rows {
    pub const ROW_COUNT: usize = 6;
    pub const FIRST_MIN_X: f32 = 200.0;
    pub const ROW_STRIDE_X: f32 = 200.0;
    pub const BAND_WIDTH: f32 = 200.0;
    pub const FIRST_Y: f32 = -120.0;
    pub const ROW_STRIDE_Y: f32 = 60.0;

    /// Opening readings per row: (containers to clean, repairing).
    pub const INITIAL_COUNTS: [(f32, f32); ROW_COUNT] = [
        (41.0, 20.0),
        (25.0, 15.0),
        (35.0, 12.0),
        (28.0, 18.0),
        (15.0, 8.0),
        (22.0, 10.0),
    ];
}
