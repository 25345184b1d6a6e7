//! Metric store - the in-memory record set the dashboard reads from.
//!
//! One writer (the simulator) mutates records in place; the presentation
//! layer reads through the accessors below. [`MetricStore::revision`]
//! increments on every tick or frame advance so readers can tell when to
//! re-render.

use portwatch_logic::layout::ZoneId;
use portwatch_logic::thresholds::{tier_for, MetricKind, Tier};
use portwatch_logic::trend::TrendCache;
use serde::Serialize;

use crate::components::{CraneGantry, EmptyBlock, ShipCargoMetrics, ShipMonitorPoint, ZoneMetric};
use crate::error::StoreError;

#[derive(Debug, Clone, Default)]
pub struct MetricStore {
    pub(crate) zones: Vec<ZoneMetric>,
    pub(crate) ship_points: Vec<ShipMonitorPoint>,
    pub(crate) empty_blocks: Vec<EmptyBlock>,
    pub(crate) cranes: Vec<CraneGantry>,
    ship_cargo: ShipCargoMetrics,
    trends: TrendCache,
    revision: u64,
}

/// Count of records per severity tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub normal: usize,
    pub warning: usize,
    pub critical: usize,
}

impl TierCounts {
    fn add(&mut self, tier: Tier) {
        match tier {
            Tier::Normal => self.normal += 1,
            Tier::Warning => self.warning += 1,
            Tier::Critical => self.critical += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.normal + self.warning + self.critical
    }
}

/// Terminal-wide figures for the dashboard stat cards
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TerminalSummary {
    pub zone_count: usize,
    pub average_utilization: f32,
    pub average_waiting_time: f32,
    /// Zones bucketed by block utilization.
    pub utilization_tiers: TierCounts,
    /// Zones bucketed by waiting time.
    pub waiting_time_tiers: TierCounts,
    pub critical_ship_points: usize,
    pub critical_cleaning_rows: usize,
    pub critical_repair_rows: usize,
}

impl MetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        zones: Vec<ZoneMetric>,
        ship_points: Vec<ShipMonitorPoint>,
        empty_blocks: Vec<EmptyBlock>,
        cranes: Vec<CraneGantry>,
    ) -> Self {
        Self {
            zones,
            ship_points,
            empty_blocks,
            cranes,
            ..Default::default()
        }
    }

    /// Look up a zone by its letter, e.g. `"C"`.
    pub fn get_zone_metric(&self, id: &str) -> Result<&ZoneMetric, StoreError> {
        let zone: ZoneId = id.parse()?;
        self.zone(zone).ok_or(StoreError::NotFound(zone))
    }

    pub fn zone(&self, id: ZoneId) -> Option<&ZoneMetric> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn all_zones(&self) -> &[ZoneMetric] {
        &self.zones
    }

    pub fn ship_points(&self) -> &[ShipMonitorPoint] {
        &self.ship_points
    }

    pub fn empty_blocks(&self) -> &[EmptyBlock] {
        &self.empty_blocks
    }

    pub fn empty_block(&self, id: &str) -> Option<&EmptyBlock> {
        self.empty_blocks.iter().find(|b| b.id == id)
    }

    pub fn cranes(&self) -> &[CraneGantry] {
        &self.cranes
    }

    pub fn crane(&self, zone: ZoneId) -> Option<&CraneGantry> {
        self.cranes.iter().find(|c| c.zone == zone)
    }

    pub fn ship_cargo(&self) -> &ShipCargoMetrics {
        &self.ship_cargo
    }

    /// 24-point trend for a zone, generated on first request and cached for
    /// the life of the store. Unknown or unloaded zones are errors.
    pub fn historical_trend(&mut self, id: &str) -> Result<&[f32], StoreError> {
        let zone: ZoneId = id.parse()?;
        if self.zone(zone).is_none() {
            return Err(StoreError::NotFound(zone));
        }
        Ok(self.trends.get_or_generate(zone))
    }

    pub fn cached_trend_count(&self) -> usize {
        self.trends.len()
    }

    /// Number of ticks and frame advances applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn summary(&self) -> TerminalSummary {
        let zone_count = self.zones.len();
        let mut summary = TerminalSummary {
            zone_count,
            ..Default::default()
        };

        if zone_count > 0 {
            let n = zone_count as f32;
            summary.average_utilization =
                self.zones.iter().map(|z| z.utilization.value()).sum::<f32>() / n;
            summary.average_waiting_time =
                self.zones.iter().map(|z| z.waiting_time.value()).sum::<f32>() / n;
        }

        for zone in &self.zones {
            summary
                .utilization_tiers
                .add(tier_for(MetricKind::BlockUtilization, zone.utilization.value()));
            summary
                .waiting_time_tiers
                .add(tier_for(MetricKind::WaitingTime, zone.waiting_time.value()));
        }

        summary.critical_ship_points = self
            .ship_points
            .iter()
            .filter(|p| p.classification().tier == Tier::Critical)
            .count();
        summary.critical_cleaning_rows = self
            .empty_blocks
            .iter()
            .filter(|b| b.cleaning_status().tier == Tier::Critical)
            .count();
        summary.critical_repair_rows = self
            .empty_blocks
            .iter()
            .filter(|b| b.repair_status().tier == Tier::Critical)
            .count();

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::generate_empty_blocks;

    fn two_zone_store() -> MetricStore {
        let a = ZoneId::from_letter('A').unwrap();
        let b = ZoneId::from_letter('B').unwrap();
        MetricStore::from_parts(
            vec![
                ZoneMetric::new(a, 80.0, 35.0, 60.0, 100.0),
                ZoneMetric::new(b, 60.0, 15.0, 45.0, 200.0),
            ],
            vec![ShipMonitorPoint::new(1, 90.0), ShipMonitorPoint::new(2, 10.0)],
            generate_empty_blocks(),
            Vec::new(),
        )
    }

    #[test]
    fn test_get_zone_metric() {
        let store = two_zone_store();
        assert_eq!(store.get_zone_metric("A").unwrap().utilization.value(), 80.0);
        assert_eq!(
            store.get_zone_metric("Z"),
            Err(StoreError::UnknownZone("Z".into()))
        );
        let c = ZoneId::from_letter('C').unwrap();
        assert_eq!(store.get_zone_metric("C"), Err(StoreError::NotFound(c)));
    }

    #[test]
    fn test_trend_cached_and_identical() {
        let mut store = two_zone_store();
        let first = store.historical_trend("B").unwrap().to_vec();
        let second = store.historical_trend("B").unwrap().to_vec();
        assert_eq!(first.len(), 24);
        let bits = |v: &[f32]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
        assert_eq!(store.cached_trend_count(), 1);
    }

    #[test]
    fn test_trend_for_missing_zone_is_not_fabricated() {
        let mut store = two_zone_store();
        assert!(matches!(
            store.historical_trend("E"),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.historical_trend("Q"),
            Err(StoreError::UnknownZone(_))
        ));
        assert_eq!(store.cached_trend_count(), 0);
    }

    #[test]
    fn test_summary() {
        let store = two_zone_store();
        let s = store.summary();
        assert_eq!(s.zone_count, 2);
        assert!((s.average_utilization - 70.0).abs() < 1e-4);
        assert!((s.average_waiting_time - 25.0).abs() < 1e-4);
        assert_eq!(s.utilization_tiers.critical, 1);
        assert_eq!(s.utilization_tiers.normal, 1);
        assert_eq!(s.waiting_time_tiers.critical, 1);
        assert_eq!(s.critical_ship_points, 1);
        // Row1 opens at 41 to clean
        assert_eq!(s.critical_cleaning_rows, 1);
        assert_eq!(s.critical_repair_rows, 0);
    }

    #[test]
    fn test_empty_store_summary() {
        let s = MetricStore::new().summary();
        assert_eq!(s.zone_count, 0);
        assert_eq!(s.average_utilization, 0.0);
        assert_eq!(s.utilization_tiers.total(), 0);
    }
}
