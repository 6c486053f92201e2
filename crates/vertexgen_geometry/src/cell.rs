//! Axis-aligned bounding boxes and active detector cells.
//!
//! A [`Cell`] is the unit of geometry the sampling kernel works with: an
//! axis-aligned box in detector coordinates together with the active mass
//! it contains. Boxes are closed on every face, so boundary points count
//! as inside.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Axis-aligned box in detector coordinates (centimetres).
///
/// Both corners are stored as `[x, y, z]`. A valid box has
/// `min[axis] <= max[axis]` with finite coordinates on every axis; a
/// zero-width axis is allowed and describes a plane or a line.
///
/// # Examples
///
/// ```rust
/// use vertexgen_geometry::BoundingBox;
///
/// let bounds = BoundingBox::new([0.0, 0.0, 0.0], [10.0, 20.0, 30.0]).unwrap();
/// assert_eq!(bounds.volume(), 6000.0);
/// assert!(bounds.contains([10.0, 0.0, 15.0]));
/// assert!(!bounds.contains([10.1, 0.0, 15.0]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Lower corner.
    min: [f64; 3],
    /// Upper corner.
    max: [f64; 3],
}

impl BoundingBox {
    /// Creates a bounding box from its lower and upper corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidBounds`] if any coordinate is
    /// non-finite or `min[axis] > max[axis]` on some axis.
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Result<Self, GeometryError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Returns the lower corner.
    #[inline]
    pub fn min(&self) -> [f64; 3] {
        self.min
    }

    /// Returns the upper corner.
    #[inline]
    pub fn max(&self) -> [f64; 3] {
        self.max
    }

    /// Returns the widths of the box along each axis.
    #[inline]
    pub fn widths(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Returns the volume in cubic centimetres.
    ///
    /// Zero for degenerate boxes.
    #[inline]
    pub fn volume(&self) -> f64 {
        let w = self.widths();
        w[0] * w[1] * w[2]
    }

    /// Returns true when the point lies inside the box.
    ///
    /// The box is closed: points on a face, edge or corner are inside.
    #[inline]
    pub fn contains(&self, point: [f64; 3]) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Returns true when the two boxes share at least one point.
    ///
    /// Touching faces count as intersecting. Use [`BoundingBox::volume`] on
    /// the result of [`BoundingBox::intersection`] to distinguish overlap
    /// from mere contact.
    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        (0..3).all(|axis| self.min[axis] <= other.max[axis] && other.min[axis] <= self.max[axis])
    }

    /// Returns the shared region of two boxes, or `None` when disjoint.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if !self.intersects(other) {
            return None;
        }
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for axis in 0..3 {
            min[axis] = self.min[axis].max(other.min[axis]);
            max[axis] = self.max[axis].min(other.max[axis]);
        }
        Some(BoundingBox { min, max })
    }

    /// Checks the box invariant.
    ///
    /// Deserialised boxes bypass [`BoundingBox::new`], so catalogue loaders
    /// call this before handing cells to callers.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidBounds`] naming the first failing axis.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for axis in 0..3 {
            let (min, max) = (self.min[axis], self.max[axis]);
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(GeometryError::InvalidBounds { axis, min, max });
            }
        }
        Ok(())
    }
}

/// An active detector cell: a bounding box plus the active mass inside it.
///
/// The mass is what drives cell selection during sampling; a cell with zero
/// mass is legal here and simply never selected. Masses are in kilograms.
///
/// # Examples
///
/// ```rust
/// use vertexgen_geometry::{BoundingBox, Cell};
///
/// let bounds = BoundingBox::new([0.0; 3], [100.0; 3]).unwrap();
/// let cell = Cell::new("tpc00", bounds, 1500.0).unwrap();
/// assert_eq!(cell.label(), "tpc00");
/// assert_eq!(cell.active_mass(), 1500.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Human-readable identifier, e.g. `"tpc00"`.
    label: String,
    /// Spatial extent of the cell.
    bounds: BoundingBox,
    /// Active mass in kilograms.
    active_mass: f64,
}

impl Cell {
    /// Creates a cell from a label, bounds and active mass.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMass`] if the mass is negative or
    /// non-finite. The bounds carry their own invariant from
    /// [`BoundingBox::new`].
    pub fn new(
        label: impl Into<String>,
        bounds: BoundingBox,
        active_mass: f64,
    ) -> Result<Self, GeometryError> {
        if !active_mass.is_finite() || active_mass < 0.0 {
            return Err(GeometryError::InvalidMass { mass: active_mass });
        }
        Ok(Self {
            label: label.into(),
            bounds,
            active_mass,
        })
    }

    /// Returns the cell label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the spatial extent of the cell.
    #[inline]
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Returns the active mass in kilograms.
    #[inline]
    pub fn active_mass(&self) -> f64 {
        self.active_mass
    }

    /// Checks the cell invariant (valid bounds, finite non-negative mass).
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.bounds.validate()?;
        if !self.active_mass.is_finite() || self.active_mass < 0.0 {
            return Err(GeometryError::InvalidMass {
                mass: self.active_mass,
            });
        }
        Ok(())
    }
}
