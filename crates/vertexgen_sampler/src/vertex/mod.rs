//! # Vertex Sampling Kernel
//!
//! This module is the heart of the crate. [`VertexSampler`] owns one seeded
//! engine and an optional configured state, and produces one
//! [`SampledVertex`] per call once configured.
//!
//! ## Overview
//!
//! A sampler moves through two states:
//!
//! 1. **Unconfigured** - it has an engine (seeded at construction) but no
//!    geometry or placement rules; sampling fails with
//!    [`SampleError::NotConfigured`].
//! 2. **Configured** - [`VertexSampler::configure`] validated a
//!    [`SamplerConfig`] against a cell catalogue and cached everything a
//!    draw needs: the weighted cell selector, the placement rules and the
//!    time law.
//!
//! Configuration may be repeated. A successful reconfigure replaces the
//! cached state wholesale; a failed one leaves the previous state fully
//! usable. Neither touches the engine, so the random stream continues
//! across reconfigurations.
//!
//! ## Module Structure
//!
//! - [`config`]: placement/time modes, the validated configuration and its
//!   builder, and the textual schema read from files
//! - [`select`]: mass-weighted cell selection
//! - [`error`]: configuration and sampling errors
//! - `position`, `time` (private): position draws and time laws

pub mod config;
pub mod error;
pub mod select;

mod position;
mod sampler;
mod time;

// Public re-exports
pub use config::{
    SamplerConfig, SamplerConfigBuilder, SamplerSchema, TimeMode, VertexKind, VertexMode,
};
pub use error::{ConfigError, SampleError};
pub use sampler::{SampledVertex, VertexSampler, MAX_REJECTION_ATTEMPTS};
pub use select::CellSelector;
