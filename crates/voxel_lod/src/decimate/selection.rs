//! Choosing which vertices to remove.
//!
//! ```text
//!   ● boundary (kept)   ○ interior kept   × removed
//!
//!   ● ● ● ● ●
//!   ● × ○ × ●      every k-th interior vertex is a candidate; a candidate
//!   ● ○ ○ ○ ●      touching an already removed vertex stays, so each
//!   ● × ○ × ●      hole is a single-vertex puncture
//!   ● ● ● ● ●
//! ```

use glam::Vec3;

use super::adjacency::VertexAdjacency;

/// Check whether `position` lies on the outer extent of a chunk spanning
/// `0..=extent`.
#[inline]
pub fn is_boundary(position: Vec3, extent: f32) -> bool {
  position.to_array().iter().any(|&c| c <= 0.0 || c >= extent)
}

/// Vertices picked for removal, in vertex order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
  /// Removed vertex indices, ascending.
  pub removed: Vec<u32>,
  /// `mask[v]` is true when vertex `v` is removed.
  pub mask: Vec<bool>,
}

impl Selection {
  #[inline]
  pub fn is_removed(&self, vertex: u32) -> bool {
    self.mask[vertex as usize]
  }
}

/// Pick every `reduction_factor`-th interior vertex that has no removed
/// neighbor.
///
/// With `preserve_boundary` unset every vertex counts as interior.
pub fn select(
  vertices: &[Vec3],
  adjacency: &VertexAdjacency,
  extent: f32,
  reduction_factor: usize,
  preserve_boundary: bool,
) -> Selection {
  let k = reduction_factor.max(1);
  let mut selection = Selection {
    removed: Vec::new(),
    mask: vec![false; vertices.len()],
  };

  let mut ordinal = 0usize;
  for (index, &position) in vertices.iter().enumerate() {
    if preserve_boundary && is_boundary(position, extent) {
      continue;
    }

    let candidate = ordinal % k == 0;
    ordinal += 1;
    if !candidate {
      continue;
    }

    let vertex = index as u32;
    let touches_removed = adjacency
      .neighbors(vertex)
      .iter()
      .any(|&n| selection.mask[n as usize]);
    if !touches_removed {
      selection.mask[index] = true;
      selection.removed.push(vertex);
    }
  }

  selection
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;
