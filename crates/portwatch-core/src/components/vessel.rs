//! Vessel components: hull monitor points and the cargo panel.

use portwatch_logic::constants::{ranges, vessel};
use portwatch_logic::thresholds::{classify, Classification, MetricKind};
use serde::{Deserialize, Serialize};

use super::{Bounded, Vec2};

/// Status sensor fixed on the berthed ship's hull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipMonitorPoint {
    /// 1-based point number.
    pub id: u32,
    pub status: Bounded,
    pub position: Vec2,
}

impl ShipMonitorPoint {
    /// Point `id` (1-based) placed down the hull at the standard spacing.
    pub fn new(id: u32, status: f32) -> Self {
        let slot = id.saturating_sub(1) as f32;
        Self {
            id,
            status: Bounded::new(status, ranges::SHIP_STATUS),
            position: Vec2::new(
                vessel::MONITOR_POINT_X,
                vessel::MONITOR_POINT_FIRST_Y + slot * vessel::MONITOR_POINT_SPACING,
            ),
        }
    }

    pub fn classification(&self) -> Classification {
        classify(MetricKind::ShipStatus, self.status.value())
    }
}

/// Static readings shown when the ship is selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipCargoMetrics {
    /// Percent of cargo capacity in use.
    pub cargo_capacity: f32,
    pub loading_progress: f32,
    pub estimated_time_min: f32,
}

impl Default for ShipCargoMetrics {
    fn default() -> Self {
        Self {
            cargo_capacity: vessel::CARGO_CAPACITY,
            loading_progress: vessel::LOADING_PROGRESS,
            estimated_time_min: vessel::ESTIMATED_TIME_MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_points_spaced_down_hull() {
        let p1 = ShipMonitorPoint::new(1, 10.0);
        let p3 = ShipMonitorPoint::new(3, 10.0);
        assert_eq!(p1.position, Vec2::new(80.0, 150.0));
        assert_eq!(p3.position, Vec2::new(80.0, 350.0));
    }
}
