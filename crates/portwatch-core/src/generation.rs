//! Generation - seeds the metric store at startup

use log::debug;
use portwatch_logic::constants::empty_rows;
use portwatch_logic::layout::{empty_row_layouts, ZoneId};
use rand::Rng;

use crate::components::{CraneGantry, EmptyBlock, ShipMonitorPoint, ZoneMetric};
use crate::config::SimConfig;
use crate::store::MetricStore;
use crate::systems::uniform_in;

/// Whole-number seed in `[0, span)`, matching the dashboard's integer openings.
fn seed_value<R: Rng + ?Sized>(span: f32, rng: &mut R) -> f32 {
    (rng.gen::<f32>() * span).floor()
}

/// One record per zone A-J with random opening values.
pub fn generate_zones<R: Rng + ?Sized>(rng: &mut R) -> Vec<ZoneMetric> {
    ZoneId::ALL
        .iter()
        .map(|&id| {
            ZoneMetric::new(
                id,
                seed_value(100.0, rng),
                seed_value(40.0, rng),
                seed_value(100.0, rng),
                seed_value(400.0, rng) + 50.0,
            )
        })
        .collect()
}

pub fn generate_ship_points<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Vec<ShipMonitorPoint> {
    (1..=count)
        .map(|id| ShipMonitorPoint::new(id, seed_value(100.0, rng)))
        .collect()
}

/// The six empty rows with their fixed opening backlog.
pub fn generate_empty_blocks() -> Vec<EmptyBlock> {
    empty_row_layouts()
        .iter()
        .zip(empty_rows::INITIAL_COUNTS)
        .map(|(layout, (to_clean, repairing))| EmptyBlock::from_layout(layout, to_clean, repairing))
        .collect()
}

pub fn generate_cranes<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Vec<CraneGantry> {
    ZoneId::ALL
        .iter()
        .map(|&zone| {
            let first = uniform_in(
                config.crane_retarget_min_secs,
                config.crane_retarget_max_secs,
                rng,
            );
            CraneGantry::new(zone, first)
        })
        .collect()
}

/// Build a fully populated store.
pub fn generate_store<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> MetricStore {
    let zones = generate_zones(rng);
    let ship_points = generate_ship_points(config.ship_point_count, rng);
    let empty_blocks = generate_empty_blocks();
    let cranes = generate_cranes(config, rng);
    debug!(
        "Generated store: {} zones, {} ship points, {} empty rows",
        zones.len(),
        ship_points.len(),
        empty_blocks.len()
    );
    MetricStore::from_parts(zones, ship_points, empty_blocks, cranes)
}
