//! Simulation configuration.
//!
//! Defaults reproduce the live dashboard: zones and ship points refresh
//! every 5 s, empty rows every 3 s, cranes retarget every 6–10 s. All
//! fields are optional when deserializing.

use portwatch_logic::constants::{cadence, steps, vessel};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Random-walk half-widths per field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepSizes {
    pub utilization: f32,
    pub waiting_time: f32,
    pub plug_status: f32,
    pub crane_position: f32,
    pub ship_status: f32,
    pub containers_to_clean: f32,
    pub repairing_containers: f32,
    pub forklift_x: f32,
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            utilization: steps::UTILIZATION,
            waiting_time: steps::WAITING_TIME,
            plug_status: steps::PLUG_STATUS,
            crane_position: steps::CRANE_POSITION,
            ship_status: steps::SHIP_STATUS,
            containers_to_clean: steps::CONTAINERS_TO_CLEAN,
            repairing_containers: steps::REPAIRING_CONTAINERS,
            forklift_x: steps::FORKLIFT_X,
        }
    }
}

impl StepSizes {
    fn all(&self) -> [(&'static str, f32); 8] {
        [
            ("utilization", self.utilization),
            ("waiting_time", self.waiting_time),
            ("plug_status", self.plug_status),
            ("crane_position", self.crane_position),
            ("ship_status", self.ship_status),
            ("containers_to_clean", self.containers_to_clean),
            ("repairing_containers", self.repairing_containers),
            ("forklift_x", self.forklift_x),
        ]
    }
}

/// Configuration for store generation and the tick cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub zone_interval_secs: f32,
    pub empty_block_interval_secs: f32,
    pub crane_retarget_min_secs: f32,
    pub crane_retarget_max_secs: f32,
    /// How often a threaded driver wakes to advance the simulation.
    pub frame_interval_secs: f32,
    pub ship_point_count: u32,
    pub steps: StepSizes,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            zone_interval_secs: cadence::ZONE_INTERVAL_SECS,
            empty_block_interval_secs: cadence::EMPTY_BLOCK_INTERVAL_SECS,
            crane_retarget_min_secs: cadence::CRANE_RETARGET_MIN_SECS,
            crane_retarget_max_secs: cadence::CRANE_RETARGET_MAX_SECS,
            frame_interval_secs: cadence::FRAME_INTERVAL_SECS,
            ship_point_count: vessel::MONITOR_POINT_COUNT,
            steps: StepSizes::default(),
        }
    }
}

impl SimConfig {
    /// Default config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        let intervals = [
            ("zone_interval_secs", self.zone_interval_secs),
            ("empty_block_interval_secs", self.empty_block_interval_secs),
            ("crane_retarget_min_secs", self.crane_retarget_min_secs),
            ("frame_interval_secs", self.frame_interval_secs),
        ];
        for (name, value) in intervals {
            if !(value.is_finite() && value > 0.0) {
                return Err(StoreError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.frame_interval_secs > cadence::FRAME_INTERVAL_MAX_SECS {
            return Err(StoreError::InvalidConfig(format!(
                "frame_interval_secs {} exceeds {}",
                self.frame_interval_secs,
                cadence::FRAME_INTERVAL_MAX_SECS
            )));
        }
        if !(self.crane_retarget_max_secs.is_finite()
            && self.crane_retarget_max_secs >= self.crane_retarget_min_secs)
        {
            return Err(StoreError::InvalidConfig(format!(
                "crane_retarget_max_secs ({}) must be >= crane_retarget_min_secs ({})",
                self.crane_retarget_max_secs, self.crane_retarget_min_secs
            )));
        }
        for (name, step) in self.steps.all() {
            if !(step.is_finite() && step >= 0.0) {
                return Err(StoreError::InvalidConfig(format!(
                    "step size {} must be non-negative, got {}",
                    name, step
                )));
            }
        }
        if self.steps.forklift_x > steps::FORKLIFT_X_MAX {
            return Err(StoreError::InvalidConfig(format!(
                "forklift_x step {} exceeds {}",
                self.steps.forklift_x,
                steps::FORKLIFT_X_MAX
            )));
        }
        if self.ship_point_count == 0 {
            return Err(StoreError::InvalidConfig(
                "ship_point_count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = SimConfig {
            zone_interval_secs: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_frame_interval() {
        let config = SimConfig {
            frame_interval_secs: 1.0e30,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StoreError::InvalidConfig(_))
        ));
        let config = SimConfig {
            frame_interval_secs: cadence::FRAME_INTERVAL_MAX_SECS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_crane_window() {
        let config = SimConfig {
            crane_retarget_min_secs: 10.0,
            crane_retarget_max_secs: 6.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_step() {
        let mut config = SimConfig::default();
        config.steps.forklift_x = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_forklift_step_capped() {
        let mut config = SimConfig::default();
        config.steps.forklift_x = 25.0;
        assert!(config.validate().is_ok());
        config.steps.forklift_x = 40.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{ "seed": 7, "steps": { "forklift_x": 25.0 } }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.steps.forklift_x, 25.0);
        assert_eq!(config.steps.utilization, 3.0);
        assert_eq!(config.zone_interval_secs, 5.0);
    }
}
