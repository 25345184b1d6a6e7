//! Errors surfaced by the metric store and simulation setup

use portwatch_logic::layout::{ParseZoneError, ZoneId};

/// Errors that can occur when reading the store or validating config
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Id is not one of the zone letters A-J
    UnknownZone(String),
    /// Valid zone id with no record in this store
    NotFound(ZoneId),
    /// Config rejected by [`SimConfig::validate`](crate::config::SimConfig::validate)
    InvalidConfig(String),
}

impl From<ParseZoneError> for StoreError {
    fn from(e: ParseZoneError) -> Self {
        StoreError::UnknownZone(e.0)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::UnknownZone(id) => write!(f, "Unknown zone id: '{}'", id),
            StoreError::NotFound(id) => write!(f, "Zone {} has no record", id),
            StoreError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
