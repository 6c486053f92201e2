//! The vertex sampler facade.

use serde::Serialize;
use tracing::{debug, trace};

use vertexgen_geometry::{BoundingBox, Cell, CellCatalogue, GeometryError};

use crate::rng::VertexRng;

use super::config::{SamplerConfig, VertexMode};
use super::error::{ConfigError, SampleError};
use super::position;
use super::select::CellSelector;
use super::time::TimeLaw;

/// Attempt budget for active-volume rejection in box mode.
///
/// A region that passed the configure-time reachability check and still
/// exhausts this budget covers a vanishing fraction of active volume;
/// sampling reports it instead of spinning forever.
pub const MAX_REJECTION_ATTEMPTS: u32 = 10_000;

/// One sampled interaction vertex.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SampledVertex {
    /// Position in detector coordinates (cm).
    pub position: [f64; 3],
    /// Event time (s).
    pub time: f64,
}

impl SampledVertex {
    /// X component of the position (cm).
    #[inline]
    pub fn x(&self) -> f64 {
        self.position[0]
    }

    /// Y component of the position (cm).
    #[inline]
    pub fn y(&self) -> f64 {
        self.position[1]
    }

    /// Z component of the position (cm).
    #[inline]
    pub fn z(&self) -> f64 {
        self.position[2]
    }
}

/// Frozen placement rules, resolved against a catalogue snapshot.
enum Placement {
    /// Mass-weighted cell selection, then a uniform draw in the cell.
    Sampled {
        cells: Vec<Cell>,
        selector: CellSelector,
    },
    /// Every vertex at one point.
    Fixed { position: [f64; 3] },
    /// Uniform draw over a user box; `cells` is only populated when
    /// `check_active` is set.
    Box {
        region: BoundingBox,
        check_active: bool,
        cells: Vec<Cell>,
    },
}

/// Everything a configured sampler caches between draws.
struct Configured {
    placement: Placement,
    time_law: TimeLaw,
    config: SamplerConfig,
}

/// Reproducible interaction vertex generator.
///
/// A sampler owns one seeded engine for its whole lifetime and an optional
/// configured state. Construction seeds the engine; [`configure`] resolves
/// a [`SamplerConfig`] against a cell catalogue and caches the placement
/// and time distributions; [`sample_vertex`] then produces one vertex per
/// call.
///
/// Reconfiguring never reseeds: a successful [`configure`] replaces the
/// cached state and the random stream simply continues, while a failed one
/// leaves the previous state untouched and usable.
///
/// [`configure`]: VertexSampler::configure
/// [`sample_vertex`]: VertexSampler::sample_vertex
///
/// # Examples
///
/// ```rust
/// use vertexgen_geometry::{BoundingBox, Cell, DetectorModel};
/// use vertexgen_sampler::vertex::{SamplerConfig, VertexSampler};
///
/// let model = DetectorModel::new(vec![Cell::new(
///     "tpc00",
///     BoundingBox::new([0.0, -50.0, 0.0], [100.0, 50.0, 200.0]).unwrap(),
///     550.0,
/// )
/// .unwrap()])
/// .unwrap();
///
/// let config = SamplerConfig::builder().build().unwrap();
/// let mut sampler = VertexSampler::configured(42, &model, config).unwrap();
///
/// let vertex = sampler.sample_vertex().unwrap();
/// assert!(model.contains(vertex.position));
/// ```
pub struct VertexSampler {
    rng: VertexRng,
    state: Option<Configured>,
}

impl VertexSampler {
    /// Creates an unconfigured sampler with a freshly seeded engine.
    ///
    /// Any `u64` is a valid seed, including zero.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: VertexRng::from_seed(seed),
            state: None,
        }
    }

    /// Creates and configures a sampler in one step.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`VertexSampler::configure`].
    pub fn configured<C>(
        seed: u64,
        catalogue: &C,
        config: SamplerConfig,
    ) -> Result<Self, ConfigError>
    where
        C: CellCatalogue + ?Sized,
    {
        let mut sampler = Self::from_seed(seed);
        sampler.configure(catalogue, config)?;
        Ok(sampler)
    }

    /// Returns the seed the engine was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Returns true once a configuration has been accepted.
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.state.is_some()
    }

    /// Returns the active configuration, if any.
    #[inline]
    pub fn config(&self) -> Option<&SamplerConfig> {
        self.state.as_ref().map(|state| &state.config)
    }

    /// Resolves `config` against `catalogue` and caches the result.
    ///
    /// The catalogue is consulted only when the placement mode needs it:
    /// sampled mode always, box mode only with `check_active`, fixed mode
    /// never. The snapshot taken here is what sampling uses; later changes
    /// to the catalogue have no effect until the next reconfigure.
    ///
    /// The engine is never touched, so the random stream continues across
    /// reconfigurations, and on error the previous configured state (if
    /// any) remains active.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalogue snapshot is empty or carries
    /// an invalid cell, if no cell can ever be selected
    /// ([`ConfigError::ZeroTotalMass`]), or if a checked sampling box has
    /// no chance of hitting the active volume
    /// ([`ConfigError::BoxOutsideActiveVolume`]).
    pub fn configure<C>(&mut self, catalogue: &C, config: SamplerConfig) -> Result<(), ConfigError>
    where
        C: CellCatalogue + ?Sized,
    {
        let placement = match config.mode() {
            VertexMode::Sampled => {
                let cells = catalogue.list_cells();
                validate_snapshot(&cells)?;
                let selector = CellSelector::from_cells(&cells)?;
                Placement::Sampled { cells, selector }
            }
            VertexMode::Fixed { position } => Placement::Fixed { position },
            VertexMode::Box {
                min_position,
                max_position,
                check_active,
            } => {
                let region = BoundingBox::new(min_position, max_position)?;
                let cells = if check_active {
                    let cells = catalogue.list_cells();
                    if cells.is_empty() {
                        return Err(ConfigError::EmptyCatalogue);
                    }
                    validate_snapshot(&cells)?;
                    if !cells
                        .iter()
                        .any(|cell| position::reachable(&region, cell.bounds()))
                    {
                        return Err(ConfigError::BoxOutsideActiveVolume);
                    }
                    cells
                } else {
                    Vec::new()
                };
                Placement::Box {
                    region,
                    check_active,
                    cells,
                }
            }
        };

        let time_law = TimeLaw::new(config.time_mode(), config.t0(), config.sigma_t())?;

        let snapshot = match &placement {
            Placement::Sampled { cells, .. } | Placement::Box { cells, .. } => cells.len(),
            Placement::Fixed { .. } => 0,
        };
        debug!(
            seed = self.rng.seed(),
            mode = %config.mode(),
            cells = snapshot,
            time = %config.time_mode(),
            t0 = config.t0(),
            sigma_t = config.sigma_t(),
            "vertex sampler configured"
        );

        self.state = Some(Configured {
            placement,
            time_law,
            config,
        });
        Ok(())
    }

    /// Draws one vertex.
    ///
    /// Each call consumes engine draws in a fixed order (cell index, x, y,
    /// z, then time; fixed mode skips the position draws), so equal seeds
    /// and equal configurations give equal vertex streams.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::NotConfigured`] before the first successful
    /// [`VertexSampler::configure`], and
    /// [`SampleError::RejectionBudgetExhausted`] if a checked box fails to
    /// hit the active volume within [`MAX_REJECTION_ATTEMPTS`] attempts.
    pub fn sample_vertex(&mut self) -> Result<SampledVertex, SampleError> {
        let state = self.state.as_ref().ok_or(SampleError::NotConfigured)?;

        let position = match &state.placement {
            Placement::Sampled { cells, selector } => {
                let index = selector.select(&mut self.rng);
                trace!(cell = index, label = %cells[index].label(), "cell selected");
                position::draw_in_box(&mut self.rng, cells[index].bounds())
            }
            Placement::Fixed { position } => *position,
            Placement::Box {
                region,
                check_active,
                cells,
            } => {
                if *check_active {
                    position::draw_in_box_checked(&mut self.rng, region, cells)?
                } else {
                    position::draw_in_box(&mut self.rng, region)
                }
            }
        };
        let time = state.time_law.draw(&mut self.rng);

        trace!(
            x = position[0],
            y = position[1],
            z = position[2],
            t = time,
            "sampled vertex"
        );

        Ok(SampledVertex { position, time })
    }
}

/// Validates a catalogue snapshot cell by cell.
///
/// Catalogue implementations outside this crate are not obliged to
/// validate, and a cell with inverted bounds would panic the position
/// draw, so configuration re-checks the snapshot it is about to freeze.
fn validate_snapshot(cells: &[Cell]) -> Result<(), ConfigError> {
    for (index, cell) in cells.iter().enumerate() {
        cell.validate().map_err(|source| {
            ConfigError::Geometry(GeometryError::InvalidCell {
                index,
                label: cell.label().to_string(),
                source: Box::new(source),
            })
        })?;
    }
    Ok(())
}
