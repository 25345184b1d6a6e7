//! PortWatch Core - Container Terminal Metric Simulation
//!
//! Holds the live figures behind the terminal dashboard (yard zones A-J,
//! ship monitor points, empty-container rows, yard cranes) and keeps them
//! moving with a clamped random walk on per-panel timers.
//!
//! # Architecture
//!
//! - **Components**: plain records with range-carrying fields
//! - **Systems**: functions that perturb a slice of records for one pass
//! - **Store**: the record set plus read accessors and the trend cache
//! - **Engine / Driver**: host-driven `update(dt)` or a background thread
//!   with explicit `start`/`stop`
//!
//! # Example
//!
//! ```rust,no_run
//! use portwatch_core::prelude::*;
//!
//! let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
//!
//! loop {
//!     engine.update(1.0 / 60.0); // 60 FPS
//!     let zone_c = engine.store().get_zone_metric("C").unwrap();
//!     println!("C utilization {:.1}%", zone_c.utilization.value());
//! }
//! ```

pub mod components;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod generation;
pub mod store;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::{SimConfig, StepSizes};
    pub use crate::driver::{shared, SharedStore, SimulationDriver};
    pub use crate::engine::{SimulationEngine, Simulator};
    pub use crate::error::StoreError;
    pub use crate::store::{MetricStore, TerminalSummary, TierCounts};
}
