//! Table-driven isosurface extraction for regular and transition cells.
//!
//! Both extractors drive every cell through the same stages:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    STAGE 1: Sampling                            │
//! │  Read corner values from the lattice (transition cells copy     │
//! │  four of them for the coarse side)                              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    STAGE 2: Classification                      │
//! │  Bit i set iff value[bit_order[i]] > threshold                  │
//! │  Case 0 or all ones: done, nothing emitted                      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    STAGE 3: Interpolation                       │
//! │  One vertex per edge code of the case                           │
//! │  smooth: t = (threshold - v0) / (v1 - v0)   flat: t = 0.5       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    STAGE 4: Emission                            │
//! │  Append vertices (shared unless flat shaded) and the class      │
//! │  triangles, reversed when the class byte has bit 7 set          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Edge endpoints are ordered by position before interpolating, so a
//! lattice edge produces the same bits whichever cell evaluates it. This is
//! what lets a seam reproduce its fine neighbor's boundary vertices.

pub mod regular;
pub mod transition;

pub use regular::extract;
pub use transition::extract_seam;

use glam::Vec3;
use smallvec::SmallVec;

use crate::error::Result;
use crate::tables::{edge_corners, CellData, INVERTED_WINDING};
use crate::types::{ExtractConfig, MeshBuilder};

/// Build a case code: bit `i` is set when the corner at `bit_order[i]` lies
/// strictly above `threshold`.
#[inline]
pub(crate) fn classify(values: &[f32], bit_order: &[usize], threshold: f32) -> u16 {
  let mut case = 0u16;
  for (bit, &corner) in bit_order.iter().enumerate() {
    if values[corner] > threshold {
      case |= 1 << bit;
    }
  }
  case
}

/// Check for an all-inside or all-outside case of `bits` bits.
#[inline]
pub(crate) fn is_degenerate(case: u16, bits: usize) -> bool {
  case == 0 || case == (1u16 << bits) - 1
}

/// Position where the surface crosses the edge `p0 → p1`.
///
/// Endpoints are taken in position order so the result does not depend on
/// which way the caller walked the edge.
#[inline]
pub fn interpolate(p0: Vec3, v0: f32, p1: Vec3, v1: f32, threshold: f32, smooth: bool) -> Vec3 {
  let (p0, v0, p1, v1) = if precedes(p1, p0) {
    (p1, v1, p0, v0)
  } else {
    (p0, v0, p1, v1)
  };

  if !smooth {
    return (p0 + p1) * 0.5;
  }

  let t = if v1 == v0 {
    threshold
  } else {
    (threshold - v0) / (v1 - v0)
  };
  p0 + (p1 - p0) * t
}

/// Z, then Y, then X ordering; the same order as lattice indices.
#[inline(always)]
fn precedes(a: Vec3, b: Vec3) -> bool {
  (a.z, a.y, a.x) < (b.z, b.y, b.x)
}

/// Interpolate the case's vertices and append its triangles.
pub(crate) fn emit_cell<const I: usize>(
  builder: &mut MeshBuilder,
  positions: &[Vec3],
  values: &[f32],
  class: u8,
  data: &CellData<I>,
  edge_codes: &[u8],
  config: &ExtractConfig,
) -> Result<()> {
  let vertices: SmallVec<[Vec3; 16]> = edge_codes
    .iter()
    .map(|&code| {
      let (a, b) = edge_corners(code);
      interpolate(
        positions[a],
        values[a],
        positions[b],
        values[b],
        config.threshold,
        config.smooth,
      )
    })
    .collect();

  let share = !config.flat_shaded;
  let inverted = class & INVERTED_WINDING != 0;

  for tri in data.indices().chunks_exact(3) {
    let order = if inverted {
      [tri[0], tri[2], tri[1]]
    } else {
      [tri[0], tri[1], tri[2]]
    };
    let mut triangle = [0u32; 3];
    for (slot, &local) in triangle.iter_mut().zip(order.iter()) {
      *slot = builder.push_vertex(vertices[local as usize], share)?;
    }
    builder.push_triangle(triangle)?;
  }

  Ok(())
}
