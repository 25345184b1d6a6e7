//! Severity classification for terminal metrics.
//!
//! Each metric kind has two thresholds. A value strictly above
//! `critical_above` is critical, strictly above `warning_above` is a
//! warning, anything else is normal. A value sitting exactly on a
//! threshold belongs to the lower tier.
//!
//! | Kind | Critical | Warning | Normal |
//! |------|----------|---------|--------|
//! | Waiting time | > 30 | (20, 30] | ≤ 20 |
//! | Utilization / block utilization / ship status | > 75 | (70, 75] | ≤ 70 |
//! | Plug status (SD) | > 75 | (65, 75] | ≤ 65 |
//! | Containers to clean | > 40 | (20, 40] | ≤ 20 |
//! | Repairing containers | > 20 | (10, 20] | ≤ 10 |

use serde::{Deserialize, Serialize};

/// Which metric a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    WaitingTime,
    Utilization,
    BlockUtilization,
    /// RF plug / stacker-dolly connection status.
    PlugStatus,
    ShipStatus,
    ContainersToClean,
    RepairingContainers,
}

/// Severity tier, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Normal,
    Warning,
    Critical,
}

/// Upper-exclusive thresholds for one metric kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning_above: f32,
    pub critical_above: f32,
}

impl MetricKind {
    pub const ALL: [MetricKind; 7] = [
        MetricKind::WaitingTime,
        MetricKind::Utilization,
        MetricKind::BlockUtilization,
        MetricKind::PlugStatus,
        MetricKind::ShipStatus,
        MetricKind::ContainersToClean,
        MetricKind::RepairingContainers,
    ];

    pub fn thresholds(&self) -> Thresholds {
        let (warning_above, critical_above) = match self {
            MetricKind::WaitingTime => (20.0, 30.0),
            MetricKind::Utilization | MetricKind::BlockUtilization | MetricKind::ShipStatus => {
                (70.0, 75.0)
            }
            MetricKind::PlugStatus => (65.0, 75.0),
            MetricKind::ContainersToClean => (20.0, 40.0),
            MetricKind::RepairingContainers => (10.0, 20.0),
        };
        Thresholds {
            warning_above,
            critical_above,
        }
    }

    /// Short name used in legends.
    pub fn legend_prefix(&self) -> &'static str {
        match self {
            MetricKind::WaitingTime => "WT",
            MetricKind::Utilization | MetricKind::BlockUtilization => "BU",
            MetricKind::PlugStatus => "SD",
            MetricKind::ShipStatus => "Status",
            MetricKind::ContainersToClean => "Containers to clean",
            MetricKind::RepairingContainers => "Repairing",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::WaitingTime => "min",
            MetricKind::Utilization
            | MetricKind::BlockUtilization
            | MetricKind::PlugStatus
            | MetricKind::ShipStatus => "%",
            MetricKind::ContainersToClean | MetricKind::RepairingContainers => "",
        }
    }
}

impl Tier {
    /// Panel color for the tier.
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Critical => "#ef4444",
            Tier::Warning => "#f97316",
            Tier::Normal => "#22c55e",
        }
    }
}

/// Result of classifying a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tier: Tier,
    pub color: &'static str,
}

/// Classify `value` for `kind`. NaN compares false everywhere and lands in `Normal`.
pub fn classify(kind: MetricKind, value: f32) -> Classification {
    let tier = tier_for(kind, value);
    Classification {
        tier,
        color: tier.color(),
    }
}

pub fn tier_for(kind: MetricKind, value: f32) -> Tier {
    let t = kind.thresholds();
    if value > t.critical_above {
        Tier::Critical
    } else if value > t.warning_above {
        Tier::Warning
    } else {
        Tier::Normal
    }
}

/// Fill for a yard zone overlay in the 3D scene, keyed on block utilization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaFill {
    pub color: &'static str,
    pub opacity: f32,
}

pub fn area_fill(utilization: f32) -> AreaFill {
    match tier_for(MetricKind::BlockUtilization, utilization) {
        Tier::Critical => AreaFill {
            color: "#EF4444",
            opacity: 0.2,
        },
        Tier::Warning => AreaFill {
            color: "#F59E0B",
            opacity: 0.18,
        },
        Tier::Normal => AreaFill {
            color: "#10B981",
            opacity: 0.15,
        },
    }
}

/// One swatch of a panel legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub tier: Tier,
    pub color: &'static str,
    pub label: String,
}

/// Legend for `kind`, critical first.
pub fn legend(kind: MetricKind) -> [LegendEntry; 3] {
    let t = kind.thresholds();
    let p = kind.legend_prefix();
    let u = kind.unit();
    [
        LegendEntry {
            tier: Tier::Critical,
            color: Tier::Critical.color(),
            label: format!("{} > {}{}", p, t.critical_above, u),
        },
        LegendEntry {
            tier: Tier::Warning,
            color: Tier::Warning.color(),
            label: format!("{} {}~{}{}", p, t.warning_above, t.critical_above, u),
        },
        LegendEntry {
            tier: Tier::Normal,
            color: Tier::Normal.color(),
            label: format!("{} < {}{}", p, t.warning_above, u),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(kind: MetricKind, v: f32) -> Tier {
        classify(kind, v).tier
    }

    #[test]
    fn test_utilization_boundaries() {
        let k = MetricKind::Utilization;
        assert_eq!(tier(k, 70.0), Tier::Normal);
        assert_eq!(tier(k, 70.01), Tier::Warning);
        assert_eq!(tier(k, 75.0), Tier::Warning);
        assert_eq!(tier(k, 75.01), Tier::Critical);
        assert_eq!(tier(MetricKind::BlockUtilization, 75.01), Tier::Critical);
    }

    #[test]
    fn test_waiting_time_boundaries() {
        let k = MetricKind::WaitingTime;
        assert_eq!(tier(k, 20.0), Tier::Normal);
        assert_eq!(tier(k, 20.01), Tier::Warning);
        assert_eq!(tier(k, 30.0), Tier::Warning);
        assert_eq!(tier(k, 30.01), Tier::Critical);
    }

    #[test]
    fn test_plug_status_boundaries() {
        let k = MetricKind::PlugStatus;
        assert_eq!(tier(k, 65.0), Tier::Normal);
        assert_eq!(tier(k, 65.01), Tier::Warning);
        assert_eq!(tier(k, 75.0), Tier::Warning);
        assert_eq!(tier(k, 75.01), Tier::Critical);
    }

    #[test]
    fn test_empty_row_boundaries() {
        let k = MetricKind::ContainersToClean;
        assert_eq!(tier(k, 20.0), Tier::Normal);
        assert_eq!(tier(k, 20.01), Tier::Warning);
        assert_eq!(tier(k, 40.0), Tier::Warning);
        assert_eq!(tier(k, 40.01), Tier::Critical);

        let k = MetricKind::RepairingContainers;
        assert_eq!(tier(k, 10.0), Tier::Normal);
        assert_eq!(tier(k, 10.01), Tier::Warning);
        assert_eq!(tier(k, 20.0), Tier::Warning);
        assert_eq!(tier(k, 20.01), Tier::Critical);
    }

    #[test]
    fn test_colors_follow_tier() {
        assert_eq!(classify(MetricKind::WaitingTime, 35.0).color, "#ef4444");
        assert_eq!(classify(MetricKind::WaitingTime, 25.0).color, "#f97316");
        assert_eq!(classify(MetricKind::WaitingTime, 5.0).color, "#22c55e");
    }

    #[test]
    fn test_nan_is_normal() {
        for kind in MetricKind::ALL {
            assert_eq!(tier(kind, f32::NAN), Tier::Normal);
        }
    }

    #[test]
    fn test_area_fill() {
        assert_eq!(area_fill(80.0).color, "#EF4444");
        assert_eq!(area_fill(72.0).opacity, 0.18);
        assert_eq!(area_fill(70.0).color, "#10B981");
    }

    #[test]
    fn test_legend_labels() {
        let wt = legend(MetricKind::WaitingTime);
        assert_eq!(wt[0].label, "WT > 30min");
        assert_eq!(wt[1].label, "WT 20~30min");
        assert_eq!(wt[2].label, "WT < 20min");

        let bu = legend(MetricKind::BlockUtilization);
        assert_eq!(bu[0].label, "BU > 75%");
        assert_eq!(bu[1].label, "BU 70~75%");

        let clean = legend(MetricKind::ContainersToClean);
        assert_eq!(clean[0].label, "Containers to clean > 40");
        assert_eq!(clean[2].color, "#22c55e");
    }

    #[test]
    fn test_plug_status_legend() {
        let sd = legend(MetricKind::PlugStatus);
        let labels: Vec<&str> = sd.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["SD > 75%", "SD 65~75%", "SD < 65%"]);
        assert_eq!(sd[1].color, "#f97316");
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Critical > Tier::Warning);
        assert!(Tier::Warning > Tier::Normal);
    }
}
