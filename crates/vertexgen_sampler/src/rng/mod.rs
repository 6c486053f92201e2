//! # Random Engine Infrastructure
//!
//! This module provides the random engine used by every sampler instance.
//! There is no shared or global generator: each [`VertexSampler`] owns one
//! [`VertexRng`], and all of its draws (cell selection, positions, times)
//! come from that single engine in a fixed order.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a 64-bit seed fully determines the stream
//! - **Isolation**: engines are per-instance values, never process state
//! - **Static dispatch**: the wrapper holds a concrete `StdRng`, no
//!   `Box<dyn RngCore>` in the sampling path
//!
//! [`VertexSampler`]: crate::vertex::VertexSampler

mod engine;

// Public re-exports
pub use engine::VertexRng;
