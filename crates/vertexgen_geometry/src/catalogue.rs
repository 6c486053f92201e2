//! Cell catalogues: the seam between geometry providers and the sampler.
//!
//! The sampling kernel never talks to a concrete geometry type; it asks a
//! [`CellCatalogue`] for a snapshot of the active cells and works on that.
//! [`DetectorModel`] is the standard implementation, an in-memory list of
//! validated cells loadable from TOML or JSON.
//!
//! # File format
//!
//! ```toml
//! name = "single_tpc_cryostat"
//!
//! [[cells]]
//! label = "tpc00"
//! bounds = { min = [0.0, -200.0, 0.0], max = [256.0, 200.0, 1036.0] }
//! active_mass = 48192.0
//! ```
//!
//! The `name` is optional. The JSON form mirrors the same structure under a
//! top-level `cells` array.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cell::{BoundingBox, Cell};
use crate::error::GeometryError;

/// Source of active detector cells.
///
/// Implementations return a snapshot: the sampler queries the catalogue once
/// per configuration and works on the returned cells, so later changes to
/// the underlying geometry never affect an already configured sampler.
pub trait CellCatalogue {
    /// Returns a snapshot of the active cells.
    fn list_cells(&self) -> Vec<Cell>;
}

/// Validated in-memory cell catalogue.
///
/// A `DetectorModel` always holds at least one cell, and every cell has
/// valid bounds and a finite, non-negative mass. Construct it with
/// [`DetectorModel::new`] or load it from a file.
///
/// # Examples
///
/// ```rust
/// use vertexgen_geometry::DetectorModel;
///
/// let toml = r#"
///     [[cells]]
///     label = "tpc00"
///     bounds = { min = [0.0, 0.0, 0.0], max = [10.0, 10.0, 10.0] }
///     active_mass = 1.0
/// "#;
/// let model = DetectorModel::from_toml_str(toml).unwrap();
/// assert_eq!(model.cells().len(), 1);
/// assert_eq!(model.total_active_mass(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorModel {
    /// Optional human-readable model name.
    #[serde(default)]
    name: Option<String>,
    /// The active cells, in file order.
    cells: Vec<Cell>,
}

impl DetectorModel {
    /// Creates an unnamed model from a list of cells.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyModel`] for an empty list and
    /// [`GeometryError::InvalidCell`] naming the first invalid cell.
    pub fn new(cells: Vec<Cell>) -> Result<Self, GeometryError> {
        let model = Self { name: None, cells };
        model.validate()?;
        Ok(model)
    }

    /// Attaches a name to the model.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Loads a model from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed TOML, otherwise the same
    /// validation errors as [`DetectorModel::new`].
    pub fn from_toml_str(text: &str) -> Result<Self, GeometryError> {
        let model: Self = toml::from_str(text)?;
        model.validate()?;
        Ok(model)
    }

    /// Loads a model from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed JSON, otherwise the same
    /// validation errors as [`DetectorModel::new`].
    pub fn from_json_str(text: &str) -> Result<Self, GeometryError> {
        let model: Self = serde_json::from_str(text)?;
        model.validate()?;
        Ok(model)
    }

    /// Loads a model from a `.toml` or `.json` file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Io`] when the file cannot be read,
    /// [`GeometryError::UnsupportedFormat`] for other extensions, and the
    /// parse/validation errors of the format-specific loaders.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GeometryError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());
        if !matches!(extension, Some("toml") | Some("json")) {
            return Err(GeometryError::UnsupportedFormat {
                extension: extension.unwrap_or("").to_string(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| GeometryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match extension {
            Some("toml") => Self::from_toml_str(&text),
            _ => Self::from_json_str(&text),
        }
    }

    /// Returns the model name, if one was given.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the cells in file order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the sum of all cell masses in kilograms.
    pub fn total_active_mass(&self) -> f64 {
        self.cells.iter().map(Cell::active_mass).sum()
    }

    /// Returns true when the point lies inside at least one cell.
    pub fn contains(&self, point: [f64; 3]) -> bool {
        self.cells.iter().any(|cell| cell.bounds().contains(point))
    }

    /// Returns the smallest box enclosing every cell, `None` when empty.
    pub fn envelope(&self) -> Option<BoundingBox> {
        let first = self.cells.first()?.bounds();
        let mut min = first.min();
        let mut max = first.max();
        for cell in &self.cells[1..] {
            for axis in 0..3 {
                min[axis] = min[axis].min(cell.bounds().min()[axis]);
                max[axis] = max[axis].max(cell.bounds().max()[axis]);
            }
        }
        BoundingBox::new(min, max).ok()
    }

    /// Checks the model invariant: non-empty, every cell valid.
    ///
    /// Loaders call this after deserialisation, which bypasses the
    /// validating constructors.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.cells.is_empty() {
            return Err(GeometryError::EmptyModel);
        }
        for (index, cell) in self.cells.iter().enumerate() {
            cell.validate().map_err(|source| GeometryError::InvalidCell {
                index,
                label: cell.label().to_string(),
                source: Box::new(source),
            })?;
        }
        Ok(())
    }
}

impl CellCatalogue for DetectorModel {
    fn list_cells(&self) -> Vec<Cell> {
        self.cells.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TWO_CELLS_TOML: &str = r#"
        name = "two_tpc_rig"

        [[cells]]
        label = "tpc00"
        bounds = { min = [0.0, -10.0, 0.0], max = [10.0, 10.0, 20.0] }
        active_mass = 1.0

        [[cells]]
        label = "tpc01"
        bounds = { min = [100.0, -10.0, 0.0], max = [110.0, 10.0, 20.0] }
        active_mass = 3.0
    "#;

    #[test]
    fn test_load_toml() {
        let model = DetectorModel::from_toml_str(TWO_CELLS_TOML).unwrap();
        assert_eq!(model.name(), Some("two_tpc_rig"));
        assert_eq!(model.cells().len(), 2);
        assert_eq!(model.cells()[0].label(), "tpc00");
        assert_eq!(model.cells()[1].bounds().min(), [100.0, -10.0, 0.0]);
        assert_relative_eq!(model.total_active_mass(), 4.0);
    }

    #[test]
    fn test_load_json_without_name() {
        let json = r#"{
            "cells": [
                {
                    "label": "tpc00",
                    "bounds": { "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 1.0] },
                    "active_mass": 2.5
                }
            ]
        }"#;
        let model = DetectorModel::from_json_str(json).unwrap();
        assert_eq!(model.name(), None);
        assert_eq!(model.cells().len(), 1);
        assert_eq!(model.total_active_mass(), 2.5);
    }

    #[test]
    fn test_with_name() {
        let model = DetectorModel::from_json_str(
            r#"{ "cells": [ { "label": "c", "bounds": { "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 1.0] }, "active_mass": 1.0 } ] }"#,
        )
        .unwrap()
        .with_name("bench_rig");
        assert_eq!(model.name(), Some("bench_rig"));
    }

    #[test]
    fn test_empty_model_rejected() {
        let result = DetectorModel::new(Vec::new());
        assert!(matches!(result, Err(GeometryError::EmptyModel)));

        let result = DetectorModel::from_toml_str("cells = []");
        assert!(matches!(result, Err(GeometryError::EmptyModel)));
    }

    #[test]
    fn test_invalid_cell_reports_index_and_label() {
        let toml = r#"
            [[cells]]
            label = "good"
            bounds = { min = [0.0, 0.0, 0.0], max = [1.0, 1.0, 1.0] }
            active_mass = 1.0

            [[cells]]
            label = "shrunk"
            bounds = { min = [5.0, 0.0, 0.0], max = [1.0, 1.0, 1.0] }
            active_mass = 1.0
        "#;
        let result = DetectorModel::from_toml_str(toml);
        match result {
            Err(GeometryError::InvalidCell { index, label, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(label, "shrunk");
            }
            other => panic!("expected InvalidCell, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_mass_rejected_on_load() {
        let toml = r#"
            [[cells]]
            label = "tpc00"
            bounds = { min = [0.0, 0.0, 0.0], max = [1.0, 1.0, 1.0] }
            active_mass = -4.0
        "#;
        let result = DetectorModel::from_toml_str(toml);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidCell { index: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = DetectorModel::from_toml_str("cells = [ {");
        assert!(matches!(result, Err(GeometryError::ParseToml(_))));
    }

    #[test]
    fn test_contains_checks_all_cells() {
        let model = DetectorModel::from_toml_str(TWO_CELLS_TOML).unwrap();
        assert!(model.contains([5.0, 0.0, 10.0]));
        assert!(model.contains([105.0, 0.0, 10.0]));
        assert!(!model.contains([50.0, 0.0, 10.0]));
    }

    #[test]
    fn test_envelope_spans_all_cells() {
        let model = DetectorModel::from_toml_str(TWO_CELLS_TOML).unwrap();
        let envelope = model.envelope().unwrap();
        assert_eq!(envelope.min(), [0.0, -10.0, 0.0]);
        assert_eq!(envelope.max(), [110.0, 10.0, 20.0]);
    }

    #[test]
    fn test_list_cells_is_a_snapshot() {
        let model = DetectorModel::from_toml_str(TWO_CELLS_TOML).unwrap();
        let mut snapshot = model.list_cells();
        snapshot.clear();
        assert_eq!(model.cells().len(), 2);
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        let result = DetectorModel::from_path("geometry.yaml");
        assert!(matches!(
            result,
            Err(GeometryError::UnsupportedFormat { extension }) if extension == "yaml"
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = DetectorModel::from_path("does_not_exist.toml");
        assert!(matches!(result, Err(GeometryError::Io { .. })));
    }
}
