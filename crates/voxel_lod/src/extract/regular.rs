//! Regular-cell extraction over the stride grid of one chunk.
//!
//! Cells are visited X fastest, then Y, then Z, and triangles come out in
//! that order.
//!
//! With [`ExtractConfig::skip_boundary_cells`] a coarse chunk keeps its
//! stride grid only for the interior block. The boundary layer is meshed one
//! level finer, so it meets finer neighbors, and in-plane transition cells
//! on the six faces of the interior block close the gap between the two
//! resolutions:
//!
//! ```text
//!   0    s                E-s   E
//!   ┌────┬─────────────────┬────┐
//!   │fine│                 │fine│   fine    stride s/2 shell
//!   ├────╆━━━━━━━━━━━━━━━━━╅────┤   ┃       transition cells at depth 0
//!   │    ┃  coarse stride  ┃    │   coarse  stride s interior
//!   │    ┃  s interior     ┃    │
//!   ├────╄━━━━━━━━━━━━━━━━━╃────┤
//!   │fine│                 │fine│
//!   └────┴─────────────────┴────┘
//! ```

use glam::Vec3;

use super::{classify, emit_cell, transition};
use crate::constants::{
  lod_increment, CORNER_OFFSETS, MAX_REGULAR_TRIANGLES, MAX_TRANSITION_TRIANGLES,
};
use crate::density::DensityLattice;
use crate::edge_table::EDGE_TABLE;
use crate::error::Result;
use crate::tables::regular_tables;
use crate::types::{ExtractConfig, Face, Mesh, MeshBuilder};

const CORNER_ORDER: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Extract the isosurface of `lattice` at `lod`.
///
/// # Panics
/// If `lattice.size() != chunk_size`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "extract::regular"))]
pub fn extract(
  lattice: &DensityLattice,
  chunk_size: usize,
  lod: usize,
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
  let cells = cells_per_axis(chunk_size, stride);
  let shell = config.skip_boundary_cells && stride > 1;
  let mut builder = config.builder(worst_case_triangles(cells, shell), 1);

  if let Err(err) = walk(lattice, stride, cells, config, &mut builder) {
    log::warn!("regular extraction at lod {} aborted: {}", lod, err);
    return Err(err);
  }

  Ok(builder.finish())
}

/// Number of whole stride cells along one axis.
#[inline]
pub(crate) fn cells_per_axis(chunk_size: usize, stride: usize) -> usize {
  chunk_size.saturating_sub(1) / stride
}

/// Upper bound on emitted triangles for the walk.
fn worst_case_triangles(cells: usize, shell: bool) -> usize {
  if !shell {
    return cells * cells * cells * MAX_REGULAR_TRIANGLES;
  }
  let inner = cells.saturating_sub(2);
  let interior = inner * inner * inner;
  let fine = 8 * (cells * cells * cells - interior);
  (interior + fine) * MAX_REGULAR_TRIANGLES + 6 * inner * inner * MAX_TRANSITION_TRIANGLES
}

fn walk(
  lattice: &DensityLattice,
  stride: usize,
  cells: usize,
  config: &ExtractConfig,
  builder: &mut MeshBuilder,
) -> Result<()> {
  if config.skip_boundary_cells && stride > 1 {
    walk_interior(lattice, stride, cells, config, builder)?;
    walk_shell(lattice, stride, cells, config, builder)?;
    return stitch_shell(lattice, stride, cells, config, builder);
  }

  for z in 0..cells {
    for y in 0..cells {
      for x in 0..cells {
        extract_cell(lattice, [x * stride, y * stride, z * stride], stride, config, builder)?;
      }
    }
  }

  Ok(())
}

#[inline]
fn is_boundary_cell(cell: [usize; 3], cells: usize) -> bool {
  cell.iter().any(|&c| c == 0 || c + 1 == cells)
}

/// Coarse cells off the boundary layer.
fn walk_interior(
  lattice: &DensityLattice,
  stride: usize,
  cells: usize,
  config: &ExtractConfig,
  builder: &mut MeshBuilder,
) -> Result<()> {
  for z in 0..cells {
    for y in 0..cells {
      for x in 0..cells {
        if is_boundary_cell([x, y, z], cells) {
          continue;
        }
        extract_cell(lattice, [x * stride, y * stride, z * stride], stride, config, builder)?;
      }
    }
  }
  Ok(())
}

/// The boundary layer again at half the stride.
fn walk_shell(
  lattice: &DensityLattice,
  stride: usize,
  cells: usize,
  config: &ExtractConfig,
  builder: &mut MeshBuilder,
) -> Result<()> {
  let fine = stride / 2;
  for z in 0..cells * 2 {
    for y in 0..cells * 2 {
      for x in 0..cells * 2 {
        if !is_boundary_cell([x / 2, y / 2, z / 2], cells) {
          continue;
        }
        extract_cell(lattice, [x * fine, y * fine, z * fine], fine, config, builder)?;
      }
    }
  }
  Ok(())
}

/// Transition cells lying flat on each face of the interior block, fine
/// side toward the shell.
fn stitch_shell(
  lattice: &DensityLattice,
  stride: usize,
  cells: usize,
  config: &ExtractConfig,
  builder: &mut MeshBuilder,
) -> Result<()> {
  if cells < 3 {
    return Ok(());
  }

  let extent = cells * stride;
  for face in Face::ALL {
    let frame = face.frame();
    let plane = if frame.far { extent - stride } else { stride };
    for v in 1..cells - 1 {
      for u in 1..cells - 1 {
        let mut anchor = [0usize; 3];
        anchor[frame.u] = u * stride;
        anchor[frame.v] = v * stride;
        anchor[frame.normal] = plane;
        transition::extract_cell(lattice, anchor, stride, face, Vec3::ZERO, config, builder)?;
      }
    }
  }
  Ok(())
}

/// Run one cell through sampling, classification and emission.
pub(crate) fn extract_cell(
  lattice: &DensityLattice,
  anchor: [usize; 3],
  stride: usize,
  config: &ExtractConfig,
  builder: &mut MeshBuilder,
) -> Result<()> {
  let mut positions = [Vec3::ZERO; 8];
  let mut values = [0.0f32; 8];
  for (corner, offset) in CORNER_OFFSETS.iter().enumerate() {
    let x = anchor[0] + offset[0] * stride;
    let y = anchor[1] + offset[1] * stride;
    let z = anchor[2] + offset[2] * stride;
    positions[corner] = Vec3::new(x as f32, y as f32, z as f32);
    values[corner] = lattice.get(x, y, z);
  }

  let case = classify(&values, &CORNER_ORDER, config.threshold);
  // No crossing edges: all inside or all outside.
  if EDGE_TABLE[case as usize] == 0 {
    return Ok(());
  }

  let tables = regular_tables();
  let case = case as u8;
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
#[path = "regular_test.rs"]
mod regular_test;
