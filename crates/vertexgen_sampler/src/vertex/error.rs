//! Error types for the vertex sampling kernel.
//!
//! Configuration problems surface as [`ConfigError`] from
//! [`configure`](crate::vertex::VertexSampler::configure); per-draw
//! problems surface as [`SampleError`] from
//! [`sample_vertex`](crate::vertex::VertexSampler::sample_vertex). Errors
//! are returned, never logged and swallowed.

use thiserror::Error;
use vertexgen_geometry::GeometryError;

/// Configuration error for the vertex sampler.
///
/// Raised while validating a [`SamplerConfig`](super::SamplerConfig) or
/// while binding it to a cell catalogue. A sampler that returns one of
/// these keeps whatever configuration it had before.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The catalogue returned no cells.
    #[error("active volume has no cells to sample")]
    EmptyCatalogue,

    /// Every cell has zero mass, so no cell can ever be selected.
    #[error("total active mass is not positive (sum = {total} kg)")]
    ZeroTotalMass {
        /// The mass sum that was computed.
        total: f64,
    },

    /// A cell carries a negative or non-finite mass.
    #[error("cell \"{label}\" has invalid active mass {mass} kg")]
    InvalidCellMass {
        /// Label of the offending cell.
        label: String,
        /// The offending mass.
        mass: f64,
    },

    /// More cells than the weighted selector supports.
    #[error("too many cells for the selector: {count}")]
    TooManyCells {
        /// Number of cells in the catalogue.
        count: usize,
    },

    /// Fixed-mode position has a non-finite component.
    #[error("fixed vertex position must be finite: [{x}, {y}, {z}]")]
    InvalidFixedPosition {
        /// X component.
        x: f64,
        /// Y component.
        y: f64,
        /// Z component.
        z: f64,
    },

    /// Box-mode corners are non-finite or inverted on an axis.
    #[error("sampling box is invalid on axis {axis}: min = {min}, max = {max}")]
    InvalidBox {
        /// Axis index (0 = x, 1 = y, 2 = z).
        axis: usize,
        /// Lower corner coordinate on the failing axis.
        min: f64,
        /// Upper corner coordinate on the failing axis.
        max: f64,
    },

    /// Box mode with `check_active` cannot ever accept a point.
    #[error("sampling box has no chance of hitting the active volume")]
    BoxOutsideActiveVolume,

    /// Central time is non-finite.
    #[error("t0 must be finite: {t0}")]
    InvalidT0 {
        /// The offending value.
        t0: f64,
    },

    /// Time spread is negative or non-finite.
    #[error("sigma_t must be finite and non-negative: {sigma_t}")]
    InvalidSigma {
        /// The offending value.
        sigma_t: f64,
    },

    /// The textual schema supplied a parameter its mode does not use.
    #[error("parameter \"{name}\" is not used in {mode} mode")]
    UnexpectedParameter {
        /// Schema field name.
        name: &'static str,
        /// Mode the schema selected.
        mode: &'static str,
    },

    /// The textual schema omitted a parameter its mode requires.
    #[error("parameter \"{name}\" is required in {mode} mode")]
    MissingParameter {
        /// Schema field name.
        name: &'static str,
        /// Mode the schema selected.
        mode: &'static str,
    },

    /// A cell in the catalogue failed geometric validation.
    #[error("invalid cell in catalogue")]
    Geometry(#[from] GeometryError),

    /// Reading a configuration file failed.
    #[error("failed to read configuration file {path}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// File extension is neither `.toml` nor `.json`.
    #[error("unsupported configuration format \"{extension}\": expected toml or json")]
    UnsupportedFormat {
        /// The extension that was found (may be empty).
        extension: String,
    },

    /// TOML parsing failed.
    #[error("failed to parse TOML configuration: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// JSON parsing failed.
    #[error("failed to parse JSON configuration: {0}")]
    ParseJson(#[from] serde_json::Error),
}

/// Per-draw sampling error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// `sample_vertex` was called before any successful `configure`.
    #[error("sampler is not configured")]
    NotConfigured,

    /// Box-mode rejection sampling gave up after the attempt budget.
    ///
    /// Configuration guarantees the box can hit the active volume, so this
    /// only occurs when the acceptance probability is vanishingly small.
    #[error("no active point found in the sampling box after {attempts} attempts")]
    RejectionBudgetExhausted {
        /// How many draws were rejected before giving up.
        attempts: u32,
    },
}
