//! Transition-cell extraction along one face of a coarse chunk.
//!
//! Each coarse cell touching the face gets one transition cell. Its nine
//! face points sit on the fine half-stride grid, so the seam meets a finer
//! neighbor exactly; the four coarse points repeat the face corners and sit
//! `transition_depth` coarse strides inside the chunk.
//!
//! ```text
//!            face plane
//!               │
//!   finer       │  6 ─ 7 ─ 8       B ───── C
//!   neighbor    │  │   │   │  ──►  │       │   coarse chunk
//!               │  3 ─ 4 ─ 5       │       │   interior
//!               │  │   │   │       │       │
//!               │  0 ─ 1 ─ 2       9 ───── A
//!               │   (depth 0)   (depth · stride)
//! ```
//!
//! At level 0 there is no finer neighbor and the seam is empty.

use glam::Vec3;

use super::{classify, emit_cell, is_degenerate};
use crate::constants::{
  lod_increment, MAX_TRANSITION_TRIANGLES, TRANSITION_BIT_ORDER, TRANSITION_COARSE_SOURCE,
  TRANSITION_CORNERS, TRANSITION_CORNER_OFFSETS,
};
use crate::density::DensityLattice;
use crate::error::Result;
use crate::extract::regular::cells_per_axis;
use crate::tables::transition_tables;
use crate::types::{ExtractConfig, Face, Mesh, MeshBuilder};

/// Build the seam for `face` of a chunk extracted at `lod`.
///
/// # Panics
/// If `lattice.size() != chunk_size`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "extract::seam"))]
pub fn extract_seam(
  lattice: &DensityLattice,
  chunk_size: usize,
  lod: usize,
  face: Face,
  config: &ExtractConfig,
) -> Result<Mesh> {
  assert_eq!(
    lattice.size(),
    chunk_size,
    "lattice has {} points per axis but the chunk expects {}",
    lattice.size(),
    chunk_size
  );

  let stride = lod_increment(lod);
  if stride < 2 {
    return Ok(Mesh::new());
  }

  let cells = cells_per_axis(chunk_size, stride);
  let mut builder = config.builder(cells * cells, MAX_TRANSITION_TRIANGLES);

  if let Err(err) = walk(lattice, stride, cells, face, config, &mut builder) {
    log::warn!("seam extraction for {:?} at lod {} aborted: {}", face, lod, err);
    return Err(err);
  }

  Ok(builder.finish())
}

fn walk(
  lattice: &DensityLattice,
  stride: usize,
  cells: usize,
  face: Face,
  config: &ExtractConfig,
  builder: &mut MeshBuilder,
) -> Result<()> {
  let frame = face.frame();
  let plane = if frame.far { cells * stride } else { 0 };
  let inset = face.inward() * (config.transition_depth * stride as f32);

  for v in 0..cells {
    for u in 0..cells {
      let mut anchor = [0usize; 3];
      anchor[frame.u] = u * stride;
      anchor[frame.v] = v * stride;
      anchor[frame.normal] = plane;
      extract_cell(lattice, anchor, stride, face, inset, config, builder)?;
    }
  }

  Ok(())
}

/// One transition cell with its face corner at `anchor` and the coarse side
/// offset by `inset`.
pub(crate) fn extract_cell(
  lattice: &DensityLattice,
  anchor: [usize; 3],
  stride: usize,
  face: Face,
  inset: Vec3,
  config: &ExtractConfig,
  builder: &mut MeshBuilder,
) -> Result<()> {
  let frame = face.frame();
  let half = stride / 2;

  let mut positions = [Vec3::ZERO; TRANSITION_CORNERS];
  let mut values = [0.0f32; TRANSITION_CORNERS];
  for (corner, offset) in TRANSITION_CORNER_OFFSETS.iter().take(9).enumerate() {
    let mut point = anchor;
    point[frame.u] += offset[0] * half;
    point[frame.v] += offset[1] * half;
    positions[corner] = Vec3::new(point[0] as f32, point[1] as f32, point[2] as f32);
    values[corner] = lattice.get(point[0], point[1], point[2]);
  }
  for (k, &source) in TRANSITION_COARSE_SOURCE.iter().enumerate() {
    positions[9 + k] = positions[source] + inset;
    values[9 + k] = values[source];
  }

  let case = classify(&values, &TRANSITION_BIT_ORDER, config.threshold);
  if is_degenerate(case, TRANSITION_BIT_ORDER.len()) {
    return Ok(());
  }

  let tables = transition_tables();
  emit_cell(
    builder,
    &positions,
    &values,
    tables.cell_class(case),
    tables.cell_data(case),
    tables.vertex_data(case),
    config,
  )
}

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;
