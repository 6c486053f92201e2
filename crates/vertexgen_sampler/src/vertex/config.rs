//! Vertex sampler configuration.
//!
//! Two layers live here. [`SamplerConfig`] is the validated, typed
//! configuration the kernel runs on, built either through
//! [`SamplerConfigBuilder`] or from a configuration file. [`SamplerSchema`]
//! is the textual form of that file: flat fields, mode selected by a
//! `type` tag, with mode-conditional parameters checked when the schema is
//! converted into a config.
//!
//! # File format
//!
//! ```toml
//! type = "box"
//! min_position = [10.0, -50.0, 0.0]
//! max_position = [200.0, 50.0, 400.0]
//! check_active = true
//! T0 = 5.0
//! SigmaT = 1.0
//! time_type = "uniform"
//! seed = 42
//! ```
//!
//! `T0` and `SigmaT` keep their historical capitalised spellings; every
//! other field is snake_case. Fields that the selected `type` does not use
//! are rejected rather than ignored.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Where vertices are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum VertexMode {
    /// Mass-weighted cell selection, then a uniform draw inside the
    /// selected cell. This is the default.
    #[default]
    Sampled,

    /// Every vertex at one configured point; the catalogue is ignored.
    Fixed {
        /// Vertex position in detector coordinates (cm).
        position: [f64; 3],
    },

    /// Uniform draw over a user-supplied box.
    Box {
        /// Lower corner of the sampling box (cm).
        min_position: [f64; 3],
        /// Upper corner of the sampling box (cm).
        max_position: [f64; 3],
        /// When true, draws falling outside every active cell are rejected
        /// and redrawn.
        check_active: bool,
    },
}

impl fmt::Display for VertexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sampled => write!(f, "sampled"),
            Self::Fixed { .. } => write!(f, "fixed"),
            Self::Box { .. } => write!(f, "box"),
        }
    }
}

/// How event times are drawn around `t0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    /// Uniform on the closed interval `[t0 - sigma_t, t0 + sigma_t]`.
    #[default]
    Uniform,

    /// Gaussian with mean `t0` and standard deviation `sigma_t`.
    Gaussian,
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Gaussian => write!(f, "gaussian"),
        }
    }
}

/// Validated vertex sampler configuration.
///
/// Immutable once built. Use [`SamplerConfig::builder`] in code, or parse a
/// [`SamplerSchema`] from a file and convert it.
///
/// The defaults describe the most common job: `sampled` placement, uniform
/// time law, `t0 = 0`, `sigma_t = 0` (every vertex exactly at time zero).
///
/// # Examples
///
/// ```rust
/// use vertexgen_sampler::vertex::{SamplerConfig, TimeMode, VertexMode};
///
/// let config = SamplerConfig::builder()
///     .mode(VertexMode::Fixed { position: [12.0, 0.0, 250.0] })
///     .time_mode(TimeMode::Gaussian)
///     .t0(5.0)
///     .sigma_t(1.5)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.t0(), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SamplerConfig {
    /// Placement mode.
    mode: VertexMode,
    /// Time law.
    time_mode: TimeMode,
    /// Central event time in seconds.
    t0: f64,
    /// Time spread in seconds (half-width or sigma, per the time law).
    sigma_t: f64,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the placement mode.
    #[inline]
    pub fn mode(&self) -> VertexMode {
        self.mode
    }

    /// Returns the time law.
    #[inline]
    pub fn time_mode(&self) -> TimeMode {
        self.time_mode
    }

    /// Returns the central event time in seconds.
    #[inline]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the time spread in seconds.
    #[inline]
    pub fn sigma_t(&self) -> f64 {
        self.sigma_t
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `t0` is non-finite, or `sigma_t` is negative or non-finite
    /// - a fixed position has a non-finite component
    /// - a sampling box has non-finite or inverted corners on an axis
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.t0.is_finite() {
            return Err(ConfigError::InvalidT0 { t0: self.t0 });
        }
        if !self.sigma_t.is_finite() || self.sigma_t < 0.0 {
            return Err(ConfigError::InvalidSigma {
                sigma_t: self.sigma_t,
            });
        }
        match self.mode {
            VertexMode::Sampled => Ok(()),
            VertexMode::Fixed { position } => {
                if position.iter().all(|c| c.is_finite()) {
                    Ok(())
                } else {
                    Err(ConfigError::InvalidFixedPosition {
                        x: position[0],
                        y: position[1],
                        z: position[2],
                    })
                }
            }
            VertexMode::Box {
                min_position,
                max_position,
                ..
            } => {
                for axis in 0..3 {
                    let (min, max) = (min_position[axis], max_position[axis]);
                    if !min.is_finite() || !max.is_finite() || min > max {
                        return Err(ConfigError::InvalidBox { axis, min, max });
                    }
                }
                Ok(())
            }
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            mode: VertexMode::default(),
            time_mode: TimeMode::default(),
            t0: 0.0,
            sigma_t: 0.0,
        }
    }
}

/// Builder for [`SamplerConfig`].
///
/// Every field has a default, so `SamplerConfig::builder().build()` is
/// already a valid configuration (sampled placement, all vertices at time
/// zero).
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    mode: VertexMode,
    time_mode: TimeMode,
    t0: f64,
    sigma_t: f64,
}

impl SamplerConfigBuilder {
    /// Sets the placement mode.
    #[inline]
    pub fn mode(mut self, mode: VertexMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the time law.
    #[inline]
    pub fn time_mode(mut self, time_mode: TimeMode) -> Self {
        self.time_mode = time_mode;
        self
    }

    /// Sets the central event time in seconds.
    #[inline]
    pub fn t0(mut self, t0: f64) -> Self {
        self.t0 = t0;
        self
    }

    /// Sets the time spread in seconds.
    ///
    /// Half-width of the interval for the uniform law, standard deviation
    /// for the gaussian one. Zero pins every vertex to exactly `t0`.
    #[inline]
    pub fn sigma_t(mut self, sigma_t: f64) -> Self {
        self.sigma_t = sigma_t;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`SamplerConfig::validate`].
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let config = SamplerConfig {
            mode: self.mode,
            time_mode: self.time_mode,
            t0: self.t0,
            sigma_t: self.sigma_t,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Placement mode tag as written in configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    /// Mass-weighted cell selection.
    #[default]
    Sampled,
    /// One configured point.
    Fixed,
    /// Uniform draw over a configured box.
    Box,
}

/// Textual sampler configuration, as read from a TOML or JSON file.
///
/// The schema is deliberately flat: one `type` tag plus optional fields.
/// Unknown fields fail parsing, and [`SamplerSchema::into_config`] rejects
/// fields that the selected mode does not use. The `seed` field is not
/// part of [`SamplerConfig`]; callers pass it to a
/// [`SeedRegistry`](crate::seed::SeedRegistry) when creating the engine.
///
/// # Examples
///
/// ```rust
/// use vertexgen_sampler::vertex::SamplerSchema;
///
/// let schema = SamplerSchema::from_toml_str(
///     r#"
///     type = "fixed"
///     position = [12.0, 0.0, 250.0]
///     T0 = 5.0
///     SigmaT = 1.0
///     "#,
/// )
/// .unwrap();
/// assert_eq!(schema.seed, None);
///
/// let config = schema.into_config().unwrap();
/// assert_eq!(config.t0(), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplerSchema {
    /// Placement mode tag; defaults to `sampled`.
    #[serde(rename = "type", default)]
    pub mode: VertexKind,

    /// Explicit engine seed. Absent means "derive one from the registry".
    #[serde(default)]
    pub seed: Option<u64>,

    /// Fixed vertex position in cm (fixed mode only).
    #[serde(default)]
    pub position: Option<[f64; 3]>,

    /// Lower corner of the sampling box in cm (box mode only).
    #[serde(default)]
    pub min_position: Option<[f64; 3]>,

    /// Upper corner of the sampling box in cm (box mode only).
    #[serde(default)]
    pub max_position: Option<[f64; 3]>,

    /// Reject box draws outside the active volume (box mode only,
    /// defaults to false).
    #[serde(default)]
    pub check_active: Option<bool>,

    /// Central event time in seconds; defaults to 0.
    #[serde(rename = "T0", default)]
    pub t0: f64,

    /// Time spread in seconds; defaults to 0.
    #[serde(rename = "SigmaT", default)]
    pub sigma_t: f64,

    /// Time law tag; defaults to `uniform`.
    #[serde(default)]
    pub time_type: TimeMode,
}

impl SamplerSchema {
    /// Parses a schema from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] for malformed documents, unknown
    /// fields or unknown tags.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses a schema from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseJson`] for malformed documents, unknown
    /// fields or unknown tags.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a schema from a `.toml` or `.json` file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read,
    /// [`ConfigError::UnsupportedFormat`] for other extensions, and the
    /// parse errors of the format-specific loaders.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());
        if !matches!(extension, Some("toml") | Some("json")) {
            return Err(ConfigError::UnsupportedFormat {
                extension: extension.unwrap_or("").to_string(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match extension {
            Some("toml") => Self::from_toml_str(&text),
            _ => Self::from_json_str(&text),
        }
    }

    /// Converts the schema into a validated [`SamplerConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParameter`] or
    /// [`ConfigError::UnexpectedParameter`] when fields do not match the
    /// selected mode, then the errors of [`SamplerConfig::validate`].
    pub fn into_config(self) -> Result<SamplerConfig, ConfigError> {
        let mode = match self.mode {
            VertexKind::Sampled => {
                forbid("position", self.position.is_some(), "sampled")?;
                forbid("min_position", self.min_position.is_some(), "sampled")?;
                forbid("max_position", self.max_position.is_some(), "sampled")?;
                forbid("check_active", self.check_active.is_some(), "sampled")?;
                VertexMode::Sampled
            }
            VertexKind::Fixed => {
                forbid("min_position", self.min_position.is_some(), "fixed")?;
                forbid("max_position", self.max_position.is_some(), "fixed")?;
                forbid("check_active", self.check_active.is_some(), "fixed")?;
                let position = self.position.ok_or(ConfigError::MissingParameter {
                    name: "position",
                    mode: "fixed",
                })?;
                VertexMode::Fixed { position }
            }
            VertexKind::Box => {
                forbid("position", self.position.is_some(), "box")?;
                let min_position = self.min_position.ok_or(ConfigError::MissingParameter {
                    name: "min_position",
                    mode: "box",
                })?;
                let max_position = self.max_position.ok_or(ConfigError::MissingParameter {
                    name: "max_position",
                    mode: "box",
                })?;
                VertexMode::Box {
                    min_position,
                    max_position,
                    check_active: self.check_active.unwrap_or(false),
                }
            }
        };

        SamplerConfig::builder()
            .mode(mode)
            .time_mode(self.time_type)
            .t0(self.t0)
            .sigma_t(self.sigma_t)
            .build()
    }
}

fn forbid(name: &'static str, present: bool, mode: &'static str) -> Result<(), ConfigError> {
    if present {
        Err(ConfigError::UnexpectedParameter { name, mode })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SamplerConfig::builder().build().unwrap();
        assert_eq!(config.mode(), VertexMode::Sampled);
        assert_eq!(config.time_mode(), TimeMode::Uniform);
        assert_eq!(config.t0(), 0.0);
        assert_eq!(config.sigma_t(), 0.0);
    }

    #[test]
    fn test_builder_full_chain() {
        let config = SamplerConfig::builder()
            .mode(VertexMode::Fixed {
                position: [1.0, 2.0, 3.0],
            })
            .time_mode(TimeMode::Gaussian)
            .t0(10.0)
            .sigma_t(2.0)
            .build()
            .unwrap();

        assert_eq!(
            config.mode(),
            VertexMode::Fixed {
                position: [1.0, 2.0, 3.0]
            }
        );
        assert_eq!(config.time_mode(), TimeMode::Gaussian);
    }

    #[test]
    fn test_non_finite_t0_rejected() {
        let result = SamplerConfig::builder().t0(f64::NAN).build();
        assert!(matches!(result, Err(ConfigError::InvalidT0 { .. })));
    }

    #[test]
    fn test_negative_sigma_rejected() {
        let result = SamplerConfig::builder().sigma_t(-1.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSigma { sigma_t }) if sigma_t == -1.0
        ));
    }

    #[test]
    fn test_non_finite_fixed_position_rejected() {
        let result = SamplerConfig::builder()
            .mode(VertexMode::Fixed {
                position: [0.0, f64::INFINITY, 0.0],
            })
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidFixedPosition { .. })
        ));
    }

    #[test]
    fn test_inverted_box_rejected() {
        let result = SamplerConfig::builder()
            .mode(VertexMode::Box {
                min_position: [0.0, 5.0, 0.0],
                max_position: [10.0, 1.0, 10.0],
                check_active: false,
            })
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBox { axis: 1, .. })
        ));
    }

    #[test]
    fn test_degenerate_box_axis_allowed() {
        let result = SamplerConfig::builder()
            .mode(VertexMode::Box {
                min_position: [0.0, 0.0, 5.0],
                max_position: [10.0, 10.0, 5.0],
                check_active: false,
            })
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(VertexMode::Sampled.to_string(), "sampled");
        assert_eq!(
            VertexMode::Fixed { position: [0.0; 3] }.to_string(),
            "fixed"
        );
        assert_eq!(TimeMode::Uniform.to_string(), "uniform");
        assert_eq!(TimeMode::Gaussian.to_string(), "gaussian");
    }

    #[test]
    fn test_schema_empty_document_is_all_defaults() {
        let schema = SamplerSchema::from_toml_str("").unwrap();
        assert_eq!(schema.mode, VertexKind::Sampled);
        assert_eq!(schema.seed, None);
        assert_eq!(schema.t0, 0.0);
        assert_eq!(schema.sigma_t, 0.0);
        assert_eq!(schema.time_type, TimeMode::Uniform);

        let config = schema.into_config().unwrap();
        assert_eq!(config.mode(), VertexMode::Sampled);
    }

    #[test]
    fn test_schema_capitalised_time_fields() {
        let schema = SamplerSchema::from_toml_str("T0 = 5.0\nSigmaT = 1.0").unwrap();
        assert_eq!(schema.t0, 5.0);
        assert_eq!(schema.sigma_t, 1.0);

        // The snake_case spellings are not aliases.
        assert!(SamplerSchema::from_toml_str("t0 = 5.0").is_err());
    }

    #[test]
    fn test_schema_fixed_mode() {
        let schema = SamplerSchema::from_toml_str(
            r#"
            type = "fixed"
            position = [1.0, 2.0, 3.0]
            "#,
        )
        .unwrap();
        let config = schema.into_config().unwrap();
        assert_eq!(
            config.mode(),
            VertexMode::Fixed {
                position: [1.0, 2.0, 3.0]
            }
        );
    }

    #[test]
    fn test_schema_fixed_mode_requires_position() {
        let schema = SamplerSchema::from_toml_str("type = \"fixed\"").unwrap();
        let result = schema.into_config();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter {
                name: "position",
                mode: "fixed"
            })
        ));
    }

    #[test]
    fn test_schema_sampled_mode_rejects_position() {
        let schema = SamplerSchema::from_toml_str("position = [0.0, 0.0, 0.0]").unwrap();
        let result = schema.into_config();
        assert!(matches!(
            result,
            Err(ConfigError::UnexpectedParameter {
                name: "position",
                mode: "sampled"
            })
        ));
    }

    #[test]
    fn test_schema_box_mode() {
        let schema = SamplerSchema::from_toml_str(
            r#"
            type = "box"
            min_position = [0.0, 0.0, 0.0]
            max_position = [10.0, 10.0, 10.0]
            "#,
        )
        .unwrap();
        let config = schema.into_config().unwrap();
        assert_eq!(
            config.mode(),
            VertexMode::Box {
                min_position: [0.0; 3],
                max_position: [10.0; 3],
                check_active: false,
            }
        );
    }

    #[test]
    fn test_schema_box_mode_requires_both_corners() {
        let schema = SamplerSchema::from_toml_str(
            "type = \"box\"\nmin_position = [0.0, 0.0, 0.0]",
        )
        .unwrap();
        let result = schema.into_config();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter {
                name: "max_position",
                mode: "box"
            })
        ));
    }

    #[test]
    fn test_schema_rejects_unknown_fields() {
        let result = SamplerSchema::from_toml_str("wobble = 3");
        assert!(matches!(result, Err(ConfigError::ParseToml(_))));
    }

    #[test]
    fn test_schema_rejects_unknown_mode_tag() {
        let result = SamplerSchema::from_toml_str("type = \"spherical\"");
        assert!(matches!(result, Err(ConfigError::ParseToml(_))));
    }

    #[test]
    fn test_schema_rejects_unknown_time_law() {
        let result = SamplerSchema::from_toml_str("time_type = \"exponential\"");
        assert!(matches!(result, Err(ConfigError::ParseToml(_))));
    }

    #[test]
    fn test_schema_from_json() {
        let schema = SamplerSchema::from_json_str(
            r#"{ "type": "box",
                 "min_position": [0.0, 0.0, 0.0],
                 "max_position": [1.0, 1.0, 1.0],
                 "check_active": true,
                 "seed": 7 }"#,
        )
        .unwrap();
        assert_eq!(schema.seed, Some(7));
        assert_eq!(schema.check_active, Some(true));
    }

    #[test]
    fn test_schema_from_path_rejects_unknown_extension() {
        let result = SamplerSchema::from_path("sampler.yaml");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedFormat { extension }) if extension == "yaml"
        ));
    }

    #[test]
    fn test_schema_gaussian_time_tag() {
        let schema = SamplerSchema::from_toml_str("time_type = \"gaussian\"").unwrap();
        assert_eq!(schema.time_type, TimeMode::Gaussian);

        let config = schema.into_config().unwrap();
        assert_eq!(config.time_mode(), TimeMode::Gaussian);
    }
}
