//! Sample command implementation
//!
//! Draws interaction vertices using the vertexgen_sampler kernel.

use tracing::info;

use vertexgen_geometry::DetectorModel;
use vertexgen_sampler::{SampledVertex, SamplerSchema, SeedRegistry, VertexSampler};

use crate::{CliError, Result};

/// Run the sample command
pub fn run(geometry: &str, config: &str, count: usize, seed: u64, format: &str) -> Result<()> {
    info!("Starting vertex generation...");
    info!("  Geometry: {}", geometry);
    info!("  Configuration: {}", config);
    info!("  Vertices: {}", count);
    info!("  Base seed: {}", seed);
    info!("  Output format: {}", format);

    // Validate input files exist
    if !std::path::Path::new(geometry).exists() {
        return Err(CliError::FileNotFound(geometry.to_string()));
    }
    if !std::path::Path::new(config).exists() {
        return Err(CliError::FileNotFound(config.to_string()));
    }

    let model = DetectorModel::from_path(geometry)?;
    let schema = SamplerSchema::from_path(config)?;

    let mut registry = SeedRegistry::new(seed);
    let engine_seed = registry.register("vertex", schema.seed)?;
    info!("  Engine seed: {}", engine_seed);

    let sampler_config = schema.into_config()?;
    let mut sampler = VertexSampler::configured(engine_seed, &model, sampler_config)?;

    let mut vertices = Vec::with_capacity(count);
    for _ in 0..count {
        vertices.push(sampler.sample_vertex()?);
    }

    write_output(&vertices, engine_seed, format)?;

    info!("Vertex generation complete");
    Ok(())
}

/// Write the drawn vertices in the requested format.
fn write_output(vertices: &[SampledVertex], seed: u64, format: &str) -> Result<()> {
    match format {
        "json" => {
            let report = serde_json::json!({
                "seed": seed,
                "count": vertices.len(),
                "vertices": vertices,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["x_cm", "y_cm", "z_cm", "t_s"])?;
            for vertex in vertices {
                writer.write_record([
                    vertex.x().to_string(),
                    vertex.y().to_string(),
                    vertex.z().to_string(),
                    vertex.time.to_string(),
                ])?;
            }
            writer.flush()?;
        }
        "table" => {
            println!("\n┌────────────┬────────────┬────────────┬────────────┐");
            println!("│ x (cm)     │ y (cm)     │ z (cm)     │ t (s)      │");
            println!("├────────────┼────────────┼────────────┼────────────┤");
            for vertex in vertices {
                println!(
                    "│ {:>10.3} │ {:>10.3} │ {:>10.3} │ {:>10.3} │",
                    vertex.x(),
                    vertex.y(),
                    vertex.z(),
                    vertex.time
                );
            }
            println!("└────────────┴────────────┴────────────┴────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )));
        }
    }
    Ok(())
}
