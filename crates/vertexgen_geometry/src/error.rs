//! Geometry error types.
//!
//! Structured errors for cell validation and geometry file loading.

use thiserror::Error;

/// Geometry-related errors.
///
/// Covers construction of bounding boxes and cells, catalogue validation,
/// and loading geometry files from disk.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// Bounding box has min above max, or a non-finite coordinate, on an axis.
    #[error("invalid bounding box on axis {axis}: min = {min}, max = {max}")]
    InvalidBounds {
        /// Axis index (0 = x, 1 = y, 2 = z).
        axis: usize,
        /// Lower corner coordinate on the failing axis.
        min: f64,
        /// Upper corner coordinate on the failing axis.
        max: f64,
    },

    /// Active mass is negative or non-finite.
    #[error("invalid active mass: {mass} kg")]
    InvalidMass {
        /// The offending mass value.
        mass: f64,
    },

    /// A cell inside a catalogue failed validation.
    #[error("cell {index} (\"{label}\") is invalid")]
    InvalidCell {
        /// Position of the cell in the catalogue.
        index: usize,
        /// Cell label, empty if the file omitted one.
        label: String,
        /// The underlying validation failure.
        #[source]
        source: Box<GeometryError>,
    },

    /// Catalogue contains no cells at all.
    #[error("geometry model has no cells")]
    EmptyModel,

    /// File extension is neither `.toml` nor `.json`.
    #[error("unsupported geometry format \"{extension}\": expected toml or json")]
    UnsupportedFormat {
        /// The extension that was found (may be empty).
        extension: String,
    },

    /// Reading the geometry file failed.
    #[error("failed to read geometry file {path}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing failed.
    #[error("failed to parse TOML geometry: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// JSON parsing failed.
    #[error("failed to parse JSON geometry: {0}")]
    ParseJson(#[from] serde_json::Error),
}
