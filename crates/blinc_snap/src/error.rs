//! Snap error types

use thiserror::Error;

/// Snap configuration errors
#[derive(Error, Debug)]
pub enum SnapError {
    /// Edge value is not one of START, END, TOP or BOTTOM
    #[error("Invalid snap edge {0}. Use START | END | TOP | BOTTOM")]
    InvalidEdge(String),

    /// Both an absolute and a relative max scroll distance were configured
    #[error("max_scroll_distance and max_scroll_distance_fraction are mutually exclusive")]
    ConflictingMaxDistance,

    /// Relative max scroll distance must be a finite, non-negative fraction
    #[error("Invalid max scroll distance fraction: {0}")]
    InvalidMaxDistanceFraction(f32),

    /// Configuration file could not be parsed
    #[error("Failed to parse snap config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for snap operations
pub type Result<T> = std::result::Result<T, SnapError>;
