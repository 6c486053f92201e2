//! Uniform position draws inside axis-aligned boxes.
//!
//! Every placement mode that draws positions funnels through this module,
//! which pins down the engine draw order: one draw per axis, always x then
//! y then z. Degenerate axes (zero width) consume a draw like any other,
//! so the stream layout is independent of the box shape.

use vertexgen_geometry::{BoundingBox, Cell};

use crate::rng::VertexRng;

use super::error::SampleError;
use super::sampler::MAX_REJECTION_ATTEMPTS;

/// Draws a position uniformly inside `bounds`, endpoints included.
pub(super) fn draw_in_box(rng: &mut VertexRng, bounds: &BoundingBox) -> [f64; 3] {
    let min = bounds.min();
    let max = bounds.max();
    [
        rng.gen_uniform_in(min[0], max[0]),
        rng.gen_uniform_in(min[1], max[1]),
        rng.gen_uniform_in(min[2], max[2]),
    ]
}

/// Draws a position uniformly inside `bounds`, rejecting draws that fall
/// outside every cell.
///
/// Rejected draws still consume their three engine draws. The loop gives
/// up after [`MAX_REJECTION_ATTEMPTS`] rounds, which a configuration that
/// passed the reachability check should never approach in practice.
pub(super) fn draw_in_box_checked(
    rng: &mut VertexRng,
    bounds: &BoundingBox,
    cells: &[Cell],
) -> Result<[f64; 3], SampleError> {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let position = draw_in_box(rng, bounds);
        if cells.iter().any(|cell| cell.bounds().contains(position)) {
            return Ok(position);
        }
    }
    Err(SampleError::RejectionBudgetExhausted {
        attempts: MAX_REJECTION_ATTEMPTS,
    })
}

/// Reports whether a uniform draw over `region` has a non-zero chance of
/// landing inside `cell`.
///
/// This is stricter than geometric intersection. Cells are closed boxes,
/// so a region touching a cell face does intersect it, but the touching
/// set has zero width along the shared axis and a uniform draw hits it
/// with probability zero. The exception is an axis on which the region
/// itself is degenerate: there the draw returns the plane coordinate
/// exactly, so coinciding with the cell on that axis is enough.
pub(super) fn reachable(region: &BoundingBox, cell: &BoundingBox) -> bool {
    let (region_min, region_max) = (region.min(), region.max());
    let (cell_min, cell_max) = (cell.min(), cell.max());

    (0..3).all(|axis| {
        let lo = region_min[axis].max(cell_min[axis]);
        let hi = region_max[axis].min(cell_max[axis]);
        if lo > hi {
            return false;
        }
        // Zero-width overlap only counts when the region has zero width
        // on this axis too.
        lo < hi || region_min[axis] == region_max[axis]
    })
}
