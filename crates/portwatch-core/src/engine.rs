//! Simulation engine - main entry point for driving the metric store

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimConfig;
use crate::error::StoreError;
use crate::generation::generate_store;
use crate::store::MetricStore;
use crate::systems::*;

/// Owns the random source and panel timers; applies passes to a store it
/// is handed. Split from the store so a threaded driver can keep the
/// simulator while the store sits behind a lock.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimConfig,
    rng: StdRng,
    /// Simulated seconds since start
    sim_time: f64,

    // Update timing
    last_zone_update: f64,
    last_empty_update: f64,
    zone_passes: u64,
    empty_passes: u64,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Result<Self, StoreError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            sim_time: 0.0,
            last_zone_update: 0.0,
            last_empty_update: 0.0,
            zone_passes: 0,
            empty_passes: 0,
        })
    }

    /// Seed a fresh store from this simulator's random source.
    pub fn generate(&mut self) -> MetricStore {
        generate_store(&self.config, &mut self.rng)
    }

    /// Advance by `delta_seconds`, running each panel when its interval has elapsed.
    pub fn advance(&mut self, store: &mut MetricStore, delta_seconds: f32) {
        if !(delta_seconds.is_finite() && delta_seconds > 0.0) {
            return;
        }
        self.sim_time += delta_seconds as f64;

        // Cranes animate every frame
        crane_system(
            &mut store.cranes,
            delta_seconds,
            self.config.crane_retarget_min_secs,
            self.config.crane_retarget_max_secs,
            &mut self.rng,
        );

        // Zones + ship points (default 5 s)
        let zone_interval = self.config.zone_interval_secs as f64;
        if self.sim_time - self.last_zone_update >= zone_interval {
            self.zone_pass(store);
            self.last_zone_update =
                next_deadline(self.last_zone_update, zone_interval, self.sim_time);
        }

        // Empty rows (default 3 s)
        let empty_interval = self.config.empty_block_interval_secs as f64;
        if self.sim_time - self.last_empty_update >= empty_interval {
            self.empty_pass(store);
            self.last_empty_update =
                next_deadline(self.last_empty_update, empty_interval, self.sim_time);
        }

        store.bump_revision();
        trace!("Advanced {:.3}s to t={:.3}s", delta_seconds, self.sim_time);
    }

    /// One random-walk pass over every panel, regardless of timers.
    pub fn tick(&mut self, store: &mut MetricStore) {
        self.zone_pass(store);
        self.empty_pass(store);
        store.bump_revision();
    }

    fn zone_pass(&mut self, store: &mut MetricStore) {
        zone_metrics_system(&mut store.zones, &self.config.steps, &mut self.rng);
        ship_points_system(&mut store.ship_points, &self.config.steps, &mut self.rng);
        self.zone_passes += 1;
        debug!("Zone pass {} at t={:.1}s", self.zone_passes, self.sim_time);
    }

    fn empty_pass(&mut self, store: &mut MetricStore) {
        empty_blocks_system(&mut store.empty_blocks, &self.config.steps, &mut self.rng);
        self.empty_passes += 1;
        debug!("Empty-row pass {} at t={:.1}s", self.empty_passes, self.sim_time);
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulated seconds since start
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn zone_passes(&self) -> u64 {
        self.zone_passes
    }

    pub fn empty_passes(&self) -> u64 {
        self.empty_passes
    }
}

/// Step a panel timer forward by one interval so late frames do not push
/// the schedule back. A timer more than one interval behind snaps to `now`
/// instead of replaying the missed passes.
fn next_deadline(last: f64, interval: f64, now: f64) -> f64 {
    let next = last + interval;
    if now - next >= interval {
        now
    } else {
        next
    }
}

/// Store plus simulator, for hosts that drive the clock themselves
/// (a render loop calling [`SimulationEngine::update`] each frame).
pub struct SimulationEngine {
    store: MetricStore,
    simulator: Simulator,
}

impl SimulationEngine {
    /// Generate a populated store from `config`.
    pub fn new(config: SimConfig) -> Result<Self, StoreError> {
        let mut simulator = Simulator::new(config)?;
        let store = simulator.generate();
        info!(
            "Simulation engine ready: {} zones, {} ship points, {} empty rows",
            store.all_zones().len(),
            store.ship_points().len(),
            store.empty_blocks().len()
        );
        Ok(Self { store, simulator })
    }

    /// Drive an existing store.
    pub fn with_store(store: MetricStore, config: SimConfig) -> Result<Self, StoreError> {
        Ok(Self {
            store,
            simulator: Simulator::new(config)?,
        })
    }

    /// Update the simulation by delta_seconds
    pub fn update(&mut self, delta_seconds: f32) {
        self.simulator.advance(&mut self.store, delta_seconds);
    }

    /// Force one random-walk pass over every panel
    pub fn tick(&mut self) {
        self.simulator.tick(&mut self.store);
    }

    pub fn store(&self) -> &MetricStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MetricStore {
        &mut self.store
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn historical_trend(&mut self, id: &str) -> Result<&[f32], StoreError> {
        self.store.historical_trend(id)
    }

    pub fn sim_time(&self) -> f64 {
        self.simulator.sim_time()
    }

    pub fn into_parts(self) -> (MetricStore, Simulator) {
        (self.store, self.simulator)
    }
}
