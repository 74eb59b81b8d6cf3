//! services/planner/src/error.rs
//!
//! Defines the primary error type for the planner service.

use crate::config::ConfigError;
use meal_planner_core::error::CoreError;
use meal_planner_core::ports::PortError;

/// The primary error type for the `planner` service.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents a decoding or merge failure reported by the core.
    #[error("Planner error: {0}")]
    Core(#[from] CoreError),

    /// Represents an error that propagated up from one of the store ports.
    #[error("Store error: {0}")]
    Port(#[from] PortError),

    /// Represents malformed JSON in a seed file or a request payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents a standard Input/Output error (e.g., reading the seed file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
