//! Empty-container row components.

use portwatch_logic::constants::ranges;
use portwatch_logic::layout::EmptyRowLayout;
use portwatch_logic::thresholds::{classify, Classification, MetricKind};
use serde::{Deserialize, Serialize};

use super::{Bounded, FieldRange, Vec2};

/// Cleaning/repair backlog of one empty-container row and its forklift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyBlock {
    pub id: String,
    pub containers_to_clean: Bounded,
    pub repairing_containers: Bounded,
    /// Forklift x, bounded by the row's travel band.
    pub forklift_x: Bounded,
    /// Forklift y, fixed per row.
    pub forklift_y: f32,
}

impl EmptyBlock {
    pub fn new(
        id: impl Into<String>,
        containers_to_clean: f32,
        repairing_containers: f32,
        forklift_x: f32,
        band: FieldRange,
        forklift_y: f32,
    ) -> Self {
        Self {
            id: id.into(),
            containers_to_clean: Bounded::new(containers_to_clean, ranges::CONTAINERS_TO_CLEAN),
            repairing_containers: Bounded::new(
                repairing_containers,
                ranges::REPAIRING_CONTAINERS,
            ),
            forklift_x: Bounded::new(forklift_x, band),
            forklift_y,
        }
    }

    /// Row built from a layout slot, forklift parked at the band's west end.
    pub fn from_layout(layout: &EmptyRowLayout, to_clean: f32, repairing: f32) -> Self {
        Self::new(
            layout.id.clone(),
            to_clean,
            repairing,
            layout.band.min,
            layout.band,
            layout.y,
        )
    }

    pub fn forklift_position(&self) -> Vec2 {
        Vec2::new(self.forklift_x.value(), self.forklift_y)
    }

    pub fn cleaning_status(&self) -> Classification {
        classify(MetricKind::ContainersToClean, self.containers_to_clean.value())
    }

    pub fn repair_status(&self) -> Classification {
        classify(MetricKind::RepairingContainers, self.repairing_containers.value())
    }
}
