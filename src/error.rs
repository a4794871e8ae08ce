//! Error types
//!
//! Generation failures are invariant violations: they abort the run instead of
//! leaving a half-painted surface behind.

use thiserror::Error;

/// Failures raised while building a dungeon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid map dimensions {width}x{height}: both sides must be at least 1")]
    InvalidDimension { width: i32, height: i32 },

    #[error("invalid generator options: {0}")]
    InvalidOptions(String),

    #[error("degenerate room at ({x}, {y}) with size {width}x{height}")]
    DegenerateGeometry {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("write outside the tile surface at ({x}, {y})")]
    OutOfBounds { x: i32, y: i32 },
}

/// Failures raised while loading generator options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse options: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize options: {0}")]
    Serialize(#[from] ron::Error),
}
