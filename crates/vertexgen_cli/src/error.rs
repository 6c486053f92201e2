//! CLI error types.

use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// A command-line argument is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Geometry loading or validation failed.
    #[error("geometry error: {0}")]
    Geometry(#[from] vertexgen_geometry::GeometryError),

    /// Sampler configuration failed.
    #[error("configuration error: {0}")]
    Config(#[from] vertexgen_sampler::ConfigError),

    /// Seed registration failed.
    #[error("seed error: {0}")]
    Seed(#[from] vertexgen_sampler::SeedError),

    /// Vertex sampling failed.
    #[error("sampling error: {0}")]
    Sample(#[from] vertexgen_sampler::SampleError),

    /// CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
