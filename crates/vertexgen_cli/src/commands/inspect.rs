//! Inspect command implementation
//!
//! Summarises the cells of a detector model: bounds, volumes, active
//! masses and the share of vertices each cell would receive in sampled
//! mode.

use tracing::info;

use vertexgen_geometry::DetectorModel;

use crate::{CliError, Result};

/// Run the inspect command
pub fn run(geometry: &str, format: &str) -> Result<()> {
    info!("Inspecting detector model...");
    info!("  Geometry: {}", geometry);

    // Validate geometry file exists
    if !std::path::Path::new(geometry).exists() {
        return Err(CliError::FileNotFound(geometry.to_string()));
    }

    let model = DetectorModel::from_path(geometry)?;
    let total = model.total_active_mass();

    match format {
        "json" => {
            let cells: Vec<_> = model
                .cells()
                .iter()
                .map(|cell| {
                    serde_json::json!({
                        "label": cell.label(),
                        "min_cm": cell.bounds().min(),
                        "max_cm": cell.bounds().max(),
                        "volume_cm3": cell.bounds().volume(),
                        "active_mass_kg": cell.active_mass(),
                        "mass_share": mass_share(cell.active_mass(), total),
                    })
                })
                .collect();
            let report = serde_json::json!({
                "name": model.name(),
                "cells": cells,
                "total_active_mass_kg": total,
                "envelope": model.envelope(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record([
                "label", "x_min_cm", "y_min_cm", "z_min_cm", "x_max_cm", "y_max_cm", "z_max_cm",
                "volume_cm3", "active_mass_kg",
            ])?;
            for cell in model.cells() {
                let min = cell.bounds().min();
                let max = cell.bounds().max();
                writer.write_record([
                    cell.label().to_string(),
                    min[0].to_string(),
                    min[1].to_string(),
                    min[2].to_string(),
                    max[0].to_string(),
                    max[1].to_string(),
                    max[2].to_string(),
                    cell.bounds().volume().to_string(),
                    cell.active_mass().to_string(),
                ])?;
            }
            writer.flush()?;
        }
        "table" => {
            if let Some(name) = model.name() {
                println!("\nModel: {}", name);
            }
            println!("\n┌────────────┬──────────────┬──────────────┬──────────┐");
            println!("│ Cell       │ Volume (cm3) │ Mass (kg)    │ Share    │");
            println!("├────────────┼──────────────┼──────────────┼──────────┤");
            for cell in model.cells() {
                println!(
                    "│ {:<10} │ {:>12.2} │ {:>12.2} │ {:>6.1} % │",
                    cell.label(),
                    cell.bounds().volume(),
                    cell.active_mass(),
                    100.0 * mass_share(cell.active_mass(), total)
                );
            }
            println!("└────────────┴──────────────┴──────────────┴──────────┘");
            println!(
                "Total active mass: {:.2} kg across {} cells",
                total,
                model.cells().len()
            );
            if let Some(envelope) = model.envelope() {
                println!(
                    "Envelope: [{:.1}, {:.1}, {:.1}] to [{:.1}, {:.1}, {:.1}] cm",
                    envelope.min()[0],
                    envelope.min()[1],
                    envelope.min()[2],
                    envelope.max()[0],
                    envelope.max()[1],
                    envelope.max()[2]
                );
            }
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )));
        }
    }

    info!("Inspection complete");
    Ok(())
}

/// Fraction of the total active mass carried by one cell.
fn mass_share(mass: f64, total: f64) -> f64 {
    if total > 0.0 {
        mass / total
    } else {
        0.0
    }
}
