//! Mass-weighted cell selection.
//!
//! A [`CellSelector`] is a frozen discrete distribution over the cells of a
//! catalogue: cell `i` is chosen with probability `mass_i / total_mass`.
//! Cells with zero mass are legal catalogue entries but are never selected.
//! The cumulative weight table is built once at configuration time so that
//! per-vertex selection costs a single engine draw plus a binary search.

use rand::distributions::{WeightedError, WeightedIndex};

use vertexgen_geometry::Cell;

use crate::rng::VertexRng;

use super::error::ConfigError;

/// Discrete distribution over catalogue cells, weighted by active mass.
#[derive(Clone, Debug)]
pub struct CellSelector {
    weights: WeightedIndex<f64>,
}

impl CellSelector {
    /// Builds a selector from a slice of cells.
    ///
    /// The slice order is the index space of [`CellSelector::select`]:
    /// the returned index refers to the same slice.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyCatalogue`] if `cells` is empty
    /// - [`ConfigError::ZeroTotalMass`] if every mass is zero
    /// - [`ConfigError::InvalidCellMass`] if any mass is negative or
    ///   non-finite
    /// - [`ConfigError::TooManyCells`] if the catalogue exceeds the
    ///   selector's capacity
    pub fn from_cells(cells: &[Cell]) -> Result<Self, ConfigError> {
        // WeightedIndex rejects negative and NaN weights but accepts an
        // infinite one, which would silently absorb all probability.
        if let Some(cell) = cells.iter().find(|cell| !cell.active_mass().is_finite()) {
            return Err(ConfigError::InvalidCellMass {
                label: cell.label().to_string(),
                mass: cell.active_mass(),
            });
        }

        let total: f64 = cells.iter().map(Cell::active_mass).sum();
        let weights =
            WeightedIndex::new(cells.iter().map(Cell::active_mass)).map_err(|err| match err {
                WeightedError::NoItem => ConfigError::EmptyCatalogue,
                WeightedError::AllWeightsZero => ConfigError::ZeroTotalMass { total },
                WeightedError::InvalidWeight => cells
                    .iter()
                    .find(|cell| cell.active_mass() < 0.0)
                    .map(|cell| ConfigError::InvalidCellMass {
                        label: cell.label().to_string(),
                        mass: cell.active_mass(),
                    })
                    .unwrap_or(ConfigError::ZeroTotalMass { total }),
                WeightedError::TooMany => ConfigError::TooManyCells { count: cells.len() },
            })?;

        Ok(Self { weights })
    }

    /// Draws one cell index, consuming one engine draw.
    #[inline]
    pub fn select(&self, rng: &mut VertexRng) -> usize {
        rng.sample(&self.weights)
    }
}
