//! # vertexgen_sampler: Monte Carlo Vertex Sampling Kernel (Layer 2)
//!
//! ## Layer 2 Role
//!
//! vertexgen_sampler places event vertices inside the active volume
//! described by `vertexgen_geometry`:
//! - Seeded, reproducible random engine ([`rng::VertexRng`])
//! - Named per-instance seed assignment ([`seed::SeedRegistry`])
//! - The sampling kernel itself ([`vertex::VertexSampler`]): mass-weighted
//!   cell selection, uniform in-cell positions, fixed and box placement
//!   modes, uniform and gaussian event-time laws
//!
//! ## Reproducibility Contract
//!
//! Two samplers built with the same seed, the same catalogue and the same
//! configuration produce identical vertex sequences. Every draw goes
//! through the one engine a sampler owns, in a fixed order per vertex:
//! cell (when selecting), then x, y, z, then time. Reconfiguring a sampler
//! never touches the engine, so interleaved configuration changes do not
//! disturb the stream.
//!
//! ## Usage Example
//!
//! ```rust
//! use vertexgen_geometry::{BoundingBox, Cell, DetectorModel};
//! use vertexgen_sampler::vertex::{SamplerConfig, VertexSampler};
//!
//! let cell = Cell::new(
//!     "tpc00",
//!     BoundingBox::new([0.0; 3], [100.0; 3]).unwrap(),
//!     1000.0,
//! )
//! .unwrap();
//! let model = DetectorModel::new(vec![cell]).unwrap();
//!
//! let config = SamplerConfig::builder().t0(5.0).sigma_t(1.0).build().unwrap();
//! let mut sampler = VertexSampler::configured(42, &model, config).unwrap();
//!
//! let vertex = sampler.sample_vertex().unwrap();
//! assert!(model.contains(vertex.position));
//! assert!(vertex.time >= 4.0 && vertex.time <= 6.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Random engine wrapper with seed management
pub mod rng;

// Named seed assignment for co-operating sampler instances
pub mod seed;

// The vertex sampling kernel: configuration, selection, placement, timing
pub mod vertex;

// Re-export commonly used items for convenience
pub use rng::VertexRng;
pub use seed::{SeedError, SeedRegistry};
pub use vertex::{
    ConfigError, SampleError, SampledVertex, SamplerConfig, SamplerConfigBuilder, SamplerSchema,
    TimeMode, VertexMode, VertexSampler,
};
