//! Case and offset tables for regular and transition cells.
//!
//! Both table sets share one layout:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ case code ──► cell_class[case]   (bits 0-6 class, bit 7 inverted)       │
//! │          │                 │                                            │
//! │          │                 ▼                                            │
//! │          │         cell_data[class]  vertex count, triangle count,      │
//! │          │                           triangle indices                   │
//! │          ▼                                                              │
//! │   vertex_data[case]  one edge code per vertex: (c0 << 4) | c1           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cases related by a symmetry of the cell share a class. The vertex data of
//! each case lists the crossing edges in the order the class indices expect,
//! so a case only needs its own edge list plus the shared triangle list.
//! Reflections reverse triangle orientation, which the inverted bit records.
//!
//! Tables are derived once per process by contouring the cell polyhedron
//! (see [`contour`]) and are read-only afterwards.

mod contour;
pub mod regular;
pub mod transition;

pub use regular::{regular_tables, RegularTables};
pub use transition::{transition_tables, TransitionTables};

/// Bit 7 of a class byte: emit the class triangles with reversed winding.
pub const INVERTED_WINDING: u8 = 0x80;

/// Mask for the class index in a class byte.
pub const CLASS_MASK: u8 = 0x7F;

/// Pack two corner indices into an edge code, lower corner in the high
/// nibble.
#[inline(always)]
pub const fn edge_code(a: u8, b: u8) -> u8 {
  if a < b {
    (a << 4) | b
  } else {
    (b << 4) | a
  }
}

/// Unpack an edge code into its two corner indices.
#[inline(always)]
pub const fn edge_corners(code: u8) -> (usize, usize) {
  ((code >> 4) as usize, (code & 0x0F) as usize)
}

/// Triangulation shared by every case of one class.
///
/// `I` is the index capacity (three per triangle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellData<const I: usize> {
  vertex_count: u8,
  triangle_count: u8,
  indices: [u8; I],
}

impl<const I: usize> CellData<I> {
  pub(crate) fn from_triangles(vertex_count: usize, triangles: &[[u8; 3]]) -> Self {
    debug_assert!(triangles.len() * 3 <= I);
    let mut indices = [0u8; I];
    for (i, tri) in triangles.iter().enumerate() {
      indices[i * 3..i * 3 + 3].copy_from_slice(tri);
    }
    Self {
      vertex_count: vertex_count as u8,
      triangle_count: triangles.len() as u8,
      indices,
    }
  }

  #[inline]
  pub fn vertex_count(&self) -> usize {
    self.vertex_count as usize
  }

  #[inline]
  pub fn triangle_count(&self) -> usize {
    self.triangle_count as usize
  }

  /// Vertex indices, three per triangle.
  #[inline]
  pub fn indices(&self) -> &[u8] {
    &self.indices[..self.triangle_count() * 3]
  }
}

/// A corner permutation of the cell and whether it mirrors space.
pub(crate) struct Symmetry {
  pub map: Vec<u8>,
  pub reflects: bool,
}

/// Case-indexed tables produced by [`build_case_tables`].
pub(crate) struct FoldedTables<const V: usize, const I: usize> {
  pub cell_class: Vec<u8>,
  pub cell_data: Vec<CellData<I>>,
  pub vertex_data: Vec<[u8; V]>,
}

/// Fold every case onto a canonical class.
///
/// `bit_order[i]` is the corner read for case bit `i`. `outside_mask` expands
/// a case code into a per-corner mask covering every corner of the
/// polyhedron. `symmetries` must start with the identity.
pub(crate) fn build_case_tables<const V: usize, const I: usize>(
  poly: &contour::Polyhedron,
  bit_order: &[usize],
  outside_mask: impl Fn(u32) -> u32,
  symmetries: &[Symmetry],
) -> FoldedTables<V, I> {
  let case_count = 1usize << bit_order.len();
  let mut assigned = vec![false; case_count];
  let mut cell_class = vec![0u8; case_count];
  let mut vertex_data = vec![[0u8; V]; case_count];
  let mut cell_data = Vec::new();

  // corner -> case bit
  let mut bit_of_corner = vec![usize::MAX; 16];
  for (bit, &corner) in bit_order.iter().enumerate() {
    bit_of_corner[corner] = bit;
  }

  for case in 0..case_count {
    if assigned[case] {
      continue;
    }

    let class = cell_data.len() as u8;
    let geometry = contour::triangulate(poly, outside_mask(case as u32));
    cell_data.push(CellData::<I>::from_triangles(
      geometry.edges.len(),
      &geometry.triangles,
    ));

    for symmetry in symmetries {
      let mut image = 0usize;
      for (bit, &corner) in bit_order.iter().enumerate() {
        if (case >> bit) & 1 == 1 {
          image |= 1 << bit_of_corner[symmetry.map[corner] as usize];
        }
      }
      if assigned[image] {
        continue;
      }

      assigned[image] = true;
      cell_class[image] = class | if symmetry.reflects { INVERTED_WINDING } else { 0 };
      for (slot, &(a, b)) in vertex_data[image].iter_mut().zip(geometry.edges.iter()) {
        *slot = edge_code(symmetry.map[a as usize], symmetry.map[b as usize]);
      }
    }
  }

  FoldedTables {
    cell_class,
    cell_data,
    vertex_data,
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
