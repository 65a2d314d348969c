//! Transition cell tables: 512 cases of the 13-point seam cell.
//!
//! The cell is a slab over one coarse cell face. Its full-resolution face
//! is split into four sub-squares; the coarse side is a single square and
//! four pentagons close the sides:
//!
//! ```text
//!   full face (depth 0)           coarse face (depth 1)
//!
//!   6────7────8                   B─────────C
//!   │    │    │                   │         │
//!   3────4────5                   │         │
//!   │    │    │                   │         │
//!   0────1────2                   9─────────A
//!
//!   side pentagons: 0-1-2-A-9, 2-5-8-C-A, 8-7-6-B-C, 6-3-0-9-B
//! ```
//!
//! Case bits read the face corners in [`TRANSITION_BIT_ORDER`]; corners 9-C
//! take the values of 0, 2, 6 and 8. Cases are folded under the 8
//! symmetries of the square face.

use once_cell::sync::Lazy;

use super::contour::Polyhedron;
use super::{build_case_tables, CellData, Symmetry, CLASS_MASK};
use crate::constants::{
  MAX_TRANSITION_TRIANGLES, MAX_TRANSITION_VERTICES, TRANSITION_BIT_ORDER, TRANSITION_COARSE_SOURCE,
};

/// Triangulation of one transition class.
pub type TransitionCellData = CellData<{ MAX_TRANSITION_TRIANGLES * 3 }>;

/// Cell faces, counter-clockwise as seen from outside the slab.
pub(super) const TRANSITION_FACES: [&[u8]; 9] = [
  &[0, 3, 4, 1],
  &[1, 4, 5, 2],
  &[3, 6, 7, 4],
  &[4, 7, 8, 5],
  &[9, 10, 12, 11],
  &[0, 1, 2, 10, 9],
  &[2, 5, 8, 12, 10],
  &[8, 7, 6, 11, 12],
  &[6, 3, 0, 9, 11],
];

pub(super) const TRANSITION_CELL: Polyhedron<'static> = Polyhedron {
  faces: &TRANSITION_FACES,
};

/// Transition cell tables indexed by 9-bit case code.
pub struct TransitionTables {
  cell_class: Vec<u8>,
  cell_data: Vec<TransitionCellData>,
  vertex_data: Vec<[u8; MAX_TRANSITION_VERTICES]>,
}

impl TransitionTables {
  /// Class byte for a case: class index in bits 0-6, inverted winding in
  /// bit 7.
  #[inline]
  pub fn cell_class(&self, case: u16) -> u8 {
    self.cell_class[case as usize]
  }

  #[inline]
  pub fn cell_data(&self, case: u16) -> &TransitionCellData {
    &self.cell_data[(self.cell_class(case) & CLASS_MASK) as usize]
  }

  /// Edge codes for a case, one per vertex.
  #[inline]
  pub fn vertex_data(&self, case: u16) -> &[u8] {
    let count = self.cell_data(case).vertex_count();
    &self.vertex_data[case as usize][..count]
  }

  /// Number of canonical classes.
  pub fn class_count(&self) -> usize {
    self.cell_data.len()
  }
}

/// Expand a case code into a 13-corner outside mask.
pub(super) fn outside_mask(case: u32) -> u32 {
  let mut mask = 0u32;
  for (bit, &corner) in TRANSITION_BIT_ORDER.iter().enumerate() {
    if (case >> bit) & 1 == 1 {
      mask |= 1 << corner;
    }
  }
  for (k, &source) in TRANSITION_COARSE_SOURCE.iter().enumerate() {
    if (mask >> source) & 1 == 1 {
      mask |= 1 << (9 + k);
    }
  }
  mask
}

/// The 8 symmetries of the 3×3 face, identity first.
fn face_symmetries() -> Vec<Symmetry> {
  type Transform = fn(usize, usize) -> (usize, usize);
  const TRANSFORMS: [(Transform, bool); 8] = [
    (|x, y| (x, y), false),
    (|x, y| (2 - y, x), false),
    (|x, y| (2 - x, 2 - y), false),
    (|x, y| (y, 2 - x), false),
    (|x, y| (2 - x, y), true),
    (|x, y| (x, 2 - y), true),
    (|x, y| (y, x), true),
    (|x, y| (2 - y, 2 - x), true),
  ];

  TRANSFORMS
    .iter()
    .map(|&(transform, reflects)| {
      let mut map = vec![0u8; 13];
      for corner in 0..9 {
        let (x, y) = transform(corner % 3, corner / 3);
        map[corner] = (x + 3 * y) as u8;
      }
      for (k, &source) in TRANSITION_COARSE_SOURCE.iter().enumerate() {
        let target = map[source] as usize;
        let slot = TRANSITION_COARSE_SOURCE
          .iter()
          .position(|&s| s == target)
          .unwrap_or(k);
        map[9 + k] = (9 + slot) as u8;
      }
      Symmetry { map, reflects }
    })
    .collect()
}

static TRANSITION_TABLES: Lazy<TransitionTables> = Lazy::new(|| {
  let folded =
    build_case_tables::<MAX_TRANSITION_VERTICES, { MAX_TRANSITION_TRIANGLES * 3 }>(
      &TRANSITION_CELL,
      &TRANSITION_BIT_ORDER,
      outside_mask,
      &face_symmetries(),
    );
  TransitionTables {
    cell_class: folded.cell_class,
    cell_data: folded.cell_data,
    vertex_data: folded.vertex_data,
  }
});

/// Shared transition cell tables, derived on first use.
pub fn transition_tables() -> &'static TransitionTables {
  &TRANSITION_TABLES
}

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;
