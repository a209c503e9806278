//! Error type shared by the simulation and settings layers

use thiserror::Error;

/// Errors surfaced by fallible surface operations
#[derive(Debug, Error)]
pub enum WaterError {
    /// Point count or viewport size cannot produce a valid surface
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Tunables JSON could not be parsed or produced
    #[error("settings json error: {0}")]
    Settings(#[from] serde_json::Error),
    /// Tunables file could not be read or written
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaterError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        WaterError::InvalidConfiguration(reason.into())
    }
}
