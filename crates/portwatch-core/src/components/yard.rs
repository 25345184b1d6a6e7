//! Yard zone components: block metrics and the zone's rail-mounted crane.

use portwatch_logic::constants::ranges;
use portwatch_logic::crane::{GANTRY_NEAR_ROW_Z, TROLLEY_RANGE, TROLLEY_START_X};
use portwatch_logic::layout::ZoneId;
use portwatch_logic::thresholds::{classify, Classification, MetricKind};
use serde::{Deserialize, Serialize};

use super::Bounded;

/// Live metrics for one lettered yard zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneMetric {
    pub id: ZoneId,
    /// Block utilization, percent.
    pub utilization: Bounded,
    /// Truck waiting time, minutes.
    pub waiting_time: Bounded,
    /// RF plug / SD connection status, percent.
    pub plug_status: Bounded,
    /// Crane marker position along the 2D block, panel units.
    pub crane_position: Bounded,
}

impl ZoneMetric {
    pub fn new(
        id: ZoneId,
        utilization: f32,
        waiting_time: f32,
        plug_status: f32,
        crane_position: f32,
    ) -> Self {
        Self {
            id,
            utilization: Bounded::new(utilization, ranges::UTILIZATION),
            waiting_time: Bounded::new(waiting_time, ranges::WAITING_TIME),
            plug_status: Bounded::new(plug_status, ranges::PLUG_STATUS),
            crane_position: Bounded::new(crane_position, ranges::CRANE_POSITION),
        }
    }

    pub fn utilization_status(&self) -> Classification {
        classify(MetricKind::Utilization, self.utilization.value())
    }

    pub fn waiting_time_status(&self) -> Classification {
        classify(MetricKind::WaitingTime, self.waiting_time.value())
    }

    pub fn plug_status_status(&self) -> Classification {
        classify(MetricKind::PlugStatus, self.plug_status.value())
    }
}

/// Gantry and trolley of a zone's yard crane in 3D scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraneGantry {
    pub zone: ZoneId,
    pub gantry_z: f32,
    pub target_z: f32,
    pub trolley_x: f32,
    pub target_x: f32,
    /// Seconds until the next retarget.
    pub retarget_in: f32,
}

impl CraneGantry {
    pub fn new(zone: ZoneId, retarget_in: f32) -> Self {
        Self {
            zone,
            gantry_z: GANTRY_NEAR_ROW_Z,
            target_z: GANTRY_NEAR_ROW_Z,
            trolley_x: TROLLEY_START_X,
            target_x: TROLLEY_RANGE.clamp(TROLLEY_START_X),
            retarget_in,
        }
    }
}
