//! Pure monitoring logic for PortWatch.
//!
//! This crate contains the terminal-monitor rules that are independent of
//! any renderer, timer, or random source. Functions take plain data and
//! return results, so the same rules drive the simulation core, the
//! headless harness, and any dashboard front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`bounded`] | Range-clamped metric values (never wrap, never leave range) |
//! | [`constants`] | Field ranges, random-walk step sizes, yard geometry |
//! | [`crane`] | Gantry/trolley targeting and interpolation |
//! | [`layout`] | Zone ids A–J, lanes L1–L9, empty-container row bands |
//! | [`selection`] | Click-selection state per panel category |
//! | [`thresholds`] | Severity tiers, display colors, legends |
//! | [`trend`] | Synthetic 24-point zone trends and the per-session cache |

pub mod bounded;
pub mod constants;
pub mod crane;
pub mod layout;
pub mod selection;
pub mod thresholds;
pub mod trend;
