//! Lattice layout, LOD strides and cell corner offsets.
//!
//! # Density Lattice Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DENSITY LATTICE LAYOUT                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  N lattice points per axis, N - 1 cells per axis.                       │
//! │                                                                         │
//! │  Point index:   0     1     2    ...   N-2   N-1                        │
//! │                 │─────│─────│─ ─ ─ ─ ─ ─│─────│                         │
//! │                 └ cell 0                └ cell N-2                      │
//! │                                                                         │
//! │  index = x + N * (y + N * z)         (X fastest, Z slowest)             │
//! │                                                                         │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Stride grid at LOD l (stride s = LOD_TABLE[l]):                        │
//! │                                                                         │
//! │  anchors 0, s, 2s, ... with anchor + s <= N - 1                         │
//! │  extent  = s * floor((N - 1) / s)                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Regular Cell Corners
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! # Transition Cell Corners
//!
//! Offsets are in half-stride units in the face-local frame (u, v, depth).
//! Points 0-8 sample the shared face at the fine resolution, 9-C repeat the
//! values of 0, 2, 6 and 8 for the coarse side of the cell.
//!
//! ```text
//!   v                         back (coarse) face
//!   │  6────7────8              B─────────C
//!   │  │    │    │              │         │
//!   │  3────4────5              │         │
//!   │  │    │    │              │         │
//!   │  0────1────2              9─────────A
//!   └──────────── u
//! ```

/// Stride per LOD level. Level 0 is full resolution.
pub const LOD_TABLE: [usize; 5] = [1, 2, 4, 8, 16];

/// Surface threshold used when no other value is configured.
pub const DEFAULT_THRESHOLD: f32 = 0.0;

/// Most triangles a regular cell can emit.
pub const MAX_REGULAR_TRIANGLES: usize = 5;

/// Most vertices a regular cell can emit (one per cube edge).
pub const MAX_REGULAR_VERTICES: usize = 12;

/// Number of corners sampled by a transition cell.
pub const TRANSITION_CORNERS: usize = 13;

/// Most vertices a transition cell can emit (12 fine edges + 4 coarse).
pub const MAX_TRANSITION_VERTICES: usize = 16;

/// Upper bound on triangles per transition cell (one loop over all
/// vertices).
pub const MAX_TRANSITION_TRIANGLES: usize = MAX_TRANSITION_VERTICES - 2;

/// Map an LOD level to its lattice stride.
///
/// Levels past the end of [`LOD_TABLE`] clamp to the coarsest stride.
#[inline]
pub const fn lod_increment(lod: usize) -> usize {
  if lod < LOD_TABLE.len() {
    LOD_TABLE[lod]
  } else {
    LOD_TABLE[LOD_TABLE.len() - 1]
  }
}

/// Convert 3D lattice coordinates to a flat index for a lattice of `size`
/// points per axis.
#[inline(always)]
pub const fn lattice_index(x: usize, y: usize, z: usize, size: usize) -> usize {
  x + size * (y + size * z)
}

/// Convert a flat lattice index back to 3D coordinates.
#[inline(always)]
pub const fn lattice_coord(index: usize, size: usize) -> (usize, usize, usize) {
  let x = index % size;
  let y = (index / size) % size;
  let z = index / (size * size);
  (x, y, z)
}

/// Farthest lattice coordinate reached by the stride grid.
#[inline]
pub const fn stride_extent(size: usize, stride: usize) -> usize {
  if size == 0 {
    return 0;
  }
  stride * ((size - 1) / stride)
}

/// Regular cell corner offsets relative to the anchor, in stride units.
/// Corner `i` sits at `(i & 1, i >> 1 & 1, i >> 2 & 1)`.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
  [0, 0, 0],
  [1, 0, 0],
  [0, 1, 0],
  [1, 1, 0],
  [0, 0, 1],
  [1, 0, 1],
  [0, 1, 1],
  [1, 1, 1],
];

/// Transition cell corner offsets in half-stride units: (u, v, depth).
///
/// Depth 1 marks the coarse side; its physical distance from the face is
/// set by the extraction config.
pub const TRANSITION_CORNER_OFFSETS: [[usize; 3]; TRANSITION_CORNERS] = [
  [0, 0, 0], // 0
  [1, 0, 0], // 1
  [2, 0, 0], // 2
  [0, 1, 0], // 3
  [1, 1, 0], // 4
  [2, 1, 0], // 5
  [0, 2, 0], // 6
  [1, 2, 0], // 7
  [2, 2, 0], // 8
  [0, 0, 1], // 9  (copy of 0)
  [2, 0, 1], // A  (copy of 2)
  [0, 2, 1], // B  (copy of 6)
  [2, 2, 1], // C  (copy of 8)
];

/// Face corner whose value each coarse-side corner (9-C) repeats.
pub const TRANSITION_COARSE_SOURCE: [usize; 4] = [0, 2, 6, 8];

/// Face corner consulted for each case-code bit, lowest bit first.
///
/// The order walks the outer ring of the 3×3 face and ends at the center.
pub const TRANSITION_BIT_ORDER: [usize; 9] = [0, 1, 2, 5, 8, 7, 6, 3, 4];

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
