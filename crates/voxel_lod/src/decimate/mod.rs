//! Gap-refill decimation of an extracted mesh.
//!
//! Works on the mesh alone, without the density field:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  1. Adjacency    neighbor lists from shared triangles           │
//! │  2. Selection    every k-th interior vertex, no two touching    │
//! │  3. Reference    average face normal around each vertex         │
//! │  4. Refill       fan retriangulation, winding by signed angle   │
//! │  5. Compose      refill + untouched triangles, compact indices  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Refill is a bounded heuristic. Fans it cannot close within the pass
//! limit stay open and are reported in
//! [`DecimationReport::residual_holes`].

mod adjacency;
mod refill;
mod selection;

pub use adjacency::VertexAdjacency;
pub use refill::{reference_normals, refill, signed_angle, Refill};
pub use selection::{is_boundary, select, Selection};

use glam::Vec3;

use crate::types::Mesh;

/// Decimation settings.
#[derive(Clone, Debug, PartialEq)]
pub struct DecimateConfig {
  /// Every k-th interior vertex is a removal candidate (0 acts as 1).
  pub reduction_factor: usize,
  /// Never remove vertices on the chunk's outer extent.
  pub preserve_boundary: bool,
  /// Carry over triangles that touch no removed vertex.
  pub keep_untouched: bool,
  /// Refill passes per removed vertex.
  pub max_refill_passes: usize,
  /// Axis for the sign of the refill winding angle.
  pub up_axis: Vec3,
}

impl Default for DecimateConfig {
  fn default() -> Self {
    Self {
      reduction_factor: 2,
      preserve_boundary: true,
      keep_untouched: true,
      max_refill_passes: 4,
      up_axis: Vec3::Y,
    }
  }
}

impl DecimateConfig {
  pub fn new(reduction_factor: usize) -> Self {
    Self {
      reduction_factor,
      ..Self::default()
    }
  }

  pub fn with_preserve_boundary(mut self, preserve: bool) -> Self {
    self.preserve_boundary = preserve;
    self
  }

  pub fn with_keep_untouched(mut self, keep: bool) -> Self {
    self.keep_untouched = keep;
    self
  }

  pub fn with_max_refill_passes(mut self, passes: usize) -> Self {
    self.max_refill_passes = passes;
    self
  }

  pub fn with_up_axis(mut self, up: Vec3) -> Self {
    self.up_axis = up;
    self
  }
}

/// What a decimation did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecimationReport {
  pub input_triangles: usize,
  pub output_triangles: usize,
  pub removed_vertices: usize,
  pub refill_triangles: usize,
  /// Removed vertices whose neighborhood was not fully refilled.
  pub residual_holes: usize,
}

/// Reduced mesh plus its report.
#[derive(Clone, Debug, PartialEq)]
pub struct Decimation {
  pub mesh: Mesh,
  /// Removed vertices as indices into the input mesh.
  pub removed: Vec<u32>,
  pub report: DecimationReport,
}

/// Decimate `mesh`, a chunk spanning `0..=extent` lattice units.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "decimate"))]
pub fn decimate(mesh: &Mesh, extent: f32, config: &DecimateConfig) -> Decimation {
  let mut adjacency = VertexAdjacency::from_triangles(mesh.vertices.len(), &mesh.indices);
  let selection = select(
    &mesh.vertices,
    &adjacency,
    extent,
    config.reduction_factor,
    config.preserve_boundary,
  );
  let reference = reference_normals(&mesh.vertices, &mesh.indices);
  let filled = refill(
    &mesh.vertices,
    &selection,
    &mut adjacency,
    &reference,
    config.up_axis,
    config.max_refill_passes,
  );

  let mut triangles = filled.triangles.clone();
  if config.keep_untouched {
    triangles.extend(
      mesh
        .indices
        .chunks_exact(3)
        .filter(|tri| !tri.iter().any(|&v| selection.is_removed(v)))
        .map(|tri| [tri[0], tri[1], tri[2]]),
    );
  }

  let output = compact(&mesh.vertices, &selection, &triangles);

  let report = DecimationReport {
    input_triangles: mesh.triangle_count(),
    output_triangles: output.triangle_count(),
    removed_vertices: selection.removed.len(),
    refill_triangles: filled.triangles.len(),
    residual_holes: filled.residual_holes,
  };
  log::debug!(
    "decimated {} triangles to {} triangles, {} residual holes",
    report.input_triangles,
    report.output_triangles,
    report.residual_holes
  );

  Decimation {
    mesh: output,
    removed: selection.removed,
    report,
  }
}

/// Drop removed vertices and renumber triangle indices over the rest.
fn compact(vertices: &[Vec3], selection: &Selection, triangles: &[[u32; 3]]) -> Mesh {
  let mut remap = vec![u32::MAX; vertices.len()];
  let mut kept = Vec::with_capacity(vertices.len() - selection.removed.len());
  for (index, &position) in vertices.iter().enumerate() {
    if !selection.mask[index] {
      remap[index] = kept.len() as u32;
      kept.push(position);
    }
  }

  let indices = triangles
    .iter()
    .flat_map(|tri| tri.map(|v| remap[v as usize]))
    .collect();

  Mesh::from_buffers(kept, indices)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
