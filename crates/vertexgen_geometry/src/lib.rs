//! # vertexgen_geometry: Active Volume Description for Vertex Sampling
//!
//! ## Layer 1 (Foundation) Role
//!
//! vertexgen_geometry is the bottom layer of the vertexgen workspace. It
//! describes the detector regions that vertices may be placed in:
//! - Axis-aligned bounding boxes in detector coordinates (`cell::BoundingBox`)
//! - Active cells, a box plus its active mass (`cell::Cell`)
//! - The [`CellCatalogue`](catalogue::CellCatalogue) trait, the seam between
//!   geometry providers and the sampling kernel
//! - A validated in-memory catalogue with TOML/JSON loading
//!   (`catalogue::DetectorModel`)
//!
//! Layer 1 knows nothing about random number generation; it only answers
//! "which cells exist, how big are they, and how much active mass do they
//! hold". The sampling kernel lives one layer up in `vertexgen_sampler`.
//!
//! ## Units
//!
//! Positions and box corners are in centimetres, masses in kilograms. The
//! crate never converts units; files are expected to already use these.
//!
//! ## Usage Example
//!
//! ```rust
//! use vertexgen_geometry::{BoundingBox, Cell, CellCatalogue, DetectorModel};
//!
//! let bounds = BoundingBox::new([0.0, -200.0, 0.0], [256.0, 200.0, 1036.0]).unwrap();
//! let cell = Cell::new("tpc00", bounds, 48_192.0).unwrap();
//! let model = DetectorModel::new(vec![cell]).unwrap();
//!
//! assert_eq!(model.list_cells().len(), 1);
//! assert!(model.contains([100.0, 0.0, 500.0]));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod catalogue;
pub mod cell;
pub mod error;

// Re-export commonly used items for convenience
pub use catalogue::{CellCatalogue, DetectorModel};
pub use cell::{BoundingBox, Cell};
pub use error::GeometryError;
