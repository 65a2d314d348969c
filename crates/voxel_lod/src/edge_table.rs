//! Cube edges and the per-case crossing mask.
//!
//! Corners use the binary ZYX layout of
//! [`CORNER_OFFSETS`](crate::constants::CORNER_OFFSETS): bit 0 is X, bit 1
//! is Y, bit 2 is Z. Edge `e` joins two corners differing in one bit,
//! lower corner first:
//!
//! ```text
//!       6 ───11──── 7
//!      ╱│          ╱│
//!     9 6        10 7
//!    ╱  │        ╱  │
//!   4 ───8───── 5   │        axis   edges
//!   │   2 ───5──│── 3        X      0  5  8 11
//!   2  ╱        4  ╱         Y      1  3  9 10
//!   │ 1         │ 3          Z      2  4  6  7
//!   │╱          │╱
//!   0 ───0───── 1
//! ```
//!
//! `EDGE_TABLE[case]` has bit `e` set when the two ends of edge `e` fall on
//! opposite sides of the surface. Only cases 0 and 255 map to 0.

/// Corner pairs per edge.
pub const EDGE_CORNERS: [[u8; 2]; 12] = [
  [0, 1],
  [0, 2],
  [0, 4],
  [1, 3],
  [1, 5],
  [2, 3],
  [2, 6],
  [3, 7],
  [4, 5],
  [4, 6],
  [5, 7],
  [6, 7],
];

/// Crossing-edge mask per 8-bit case code.
pub const EDGE_TABLE: [u16; 256] = crossing_masks();

const fn crossing_masks() -> [u16; 256] {
  let mut masks = [0u16; 256];
  let mut case = 0;
  while case < 256 {
    let mut e = 0;
    while e < 12 {
      let [a, b] = EDGE_CORNERS[e];
      if ((case >> a) ^ (case >> b)) & 1 == 1 {
        masks[case] |= 1 << e;
      }
      e += 1;
    }
    case += 1;
  }
  masks
}

/// Edge joining two corners, in either order.
#[cfg(test)]
pub(crate) const fn edge_between(a: u8, b: u8) -> Option<usize> {
  let (lo, hi) = if a < b { (a, b) } else { (b, a) };
  let mut e = 0;
  while e < 12 {
    if EDGE_CORNERS[e][0] == lo && EDGE_CORNERS[e][1] == hi {
      return Some(e);
    }
    e += 1;
  }
  None
}

/// Unit-cube position of a corner.
#[cfg(test)]
pub(crate) const fn corner_position(corner: u8) -> [f32; 3] {
  [
    (corner & 1) as f32,
    (corner >> 1 & 1) as f32,
    (corner >> 2 & 1) as f32,
  ]
}

#[cfg(test)]
#[path = "edge_table_test.rs"]
mod edge_table_test;
