//! Errors raised when caller input cannot be turned into a mission.

use thiserror::Error;

/// Everything that can go wrong before a mission starts.
///
/// Simulation and evaluation themselves never fail; these are raised while
/// resolving caller-supplied ids against the catalog.
#[derive(Debug, Error)]
pub enum MissionError {
    #[error("unknown destination '{0}' (expected moon, mars or exoplanet)")]
    InvalidDestination(String),
    #[error("rocket '{0}' not found in catalog")]
    RocketNotFound(String),
    #[error("habitat module '{0}' not found in catalog")]
    ModuleNotFound(String),
    #[error("select at least one habitat module before launching")]
    EmptySelection,
    #[error("rocket '{0}' has a negative cargo capacity")]
    NegativeCapacity(String),
    #[error("invalid catalog document: {0}")]
    Catalog(#[from] serde_json::Error),
}
