//! Regular cell tables: 256 cases of the 8-corner cube.
//!
//! Case bit `i` is corner `i` of the binary ZYX layout in
//! [`CORNER_OFFSETS`](crate::constants::CORNER_OFFSETS). Cases are folded
//! under the 48 symmetries of the cube (axis permutations combined with axis
//! flips).

use once_cell::sync::Lazy;

use super::contour::Polyhedron;
use super::{build_case_tables, CellData, Symmetry, CLASS_MASK};
use crate::constants::{MAX_REGULAR_TRIANGLES, MAX_REGULAR_VERTICES};

/// Triangulation of one regular class.
pub type RegularCellData = CellData<{ MAX_REGULAR_TRIANGLES * 3 }>;

/// Cube faces, counter-clockwise as seen from outside.
pub(super) const CUBE_FACES: [&[u8]; 6] = [
  &[0, 4, 6, 2], // -X
  &[1, 3, 7, 5], // +X
  &[0, 1, 5, 4], // -Y
  &[2, 6, 7, 3], // +Y
  &[0, 2, 3, 1], // -Z
  &[4, 5, 7, 6], // +Z
];

pub(super) const CUBE: Polyhedron<'static> = Polyhedron { faces: &CUBE_FACES };

const IDENTITY_ORDER: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Regular cell tables indexed by 8-bit case code.
pub struct RegularTables {
  cell_class: Vec<u8>,
  cell_data: Vec<RegularCellData>,
  vertex_data: Vec<[u8; MAX_REGULAR_VERTICES]>,
}

impl RegularTables {
  /// Class byte for a case: class index in bits 0-6, inverted winding in
  /// bit 7.
  #[inline]
  pub fn cell_class(&self, case: u8) -> u8 {
    self.cell_class[case as usize]
  }

  /// Shared triangulation for a case.
  #[inline]
  pub fn cell_data(&self, case: u8) -> &RegularCellData {
    &self.cell_data[(self.cell_class(case) & CLASS_MASK) as usize]
  }

  /// Edge codes for a case, one per vertex.
  #[inline]
  pub fn vertex_data(&self, case: u8) -> &[u8] {
    let count = self.cell_data(case).vertex_count();
    &self.vertex_data[case as usize][..count]
  }

  /// Number of canonical classes.
  pub fn class_count(&self) -> usize {
    self.cell_data.len()
  }
}

/// The 48 cube symmetries, identity first.
fn cube_symmetries() -> Vec<Symmetry> {
  const PERMUTATIONS: [([usize; 3], bool); 6] = [
    ([0, 1, 2], false),
    ([0, 2, 1], true),
    ([1, 0, 2], true),
    ([1, 2, 0], false),
    ([2, 0, 1], false),
    ([2, 1, 0], true),
  ];

  let mut symmetries = Vec::with_capacity(48);
  for (axes, odd) in PERMUTATIONS {
    for flips in 0u8..8 {
      let map = (0u8..8)
        .map(|corner| {
          let mut image = 0u8;
          for (axis, &target) in axes.iter().enumerate() {
            let bit = ((corner >> axis) ^ (flips >> axis)) & 1;
            image |= bit << target;
          }
          image
        })
        .collect();
      symmetries.push(Symmetry {
        map,
        reflects: odd ^ (flips.count_ones() % 2 == 1),
      });
    }
  }
  symmetries
}

static REGULAR_TABLES: Lazy<RegularTables> = Lazy::new(|| {
  let folded = build_case_tables::<MAX_REGULAR_VERTICES, { MAX_REGULAR_TRIANGLES * 3 }>(
    &CUBE,
    &IDENTITY_ORDER,
    |case| case,
    &cube_symmetries(),
  );
  RegularTables {
    cell_class: folded.cell_class,
    cell_data: folded.cell_data,
    vertex_data: folded.vertex_data,
  }
});

/// Shared regular cell tables, derived on first use.
pub fn regular_tables() -> &'static RegularTables {
  &REGULAR_TABLES
}

#[cfg(test)]
#[path = "regular_test.rs"]
mod regular_test;
