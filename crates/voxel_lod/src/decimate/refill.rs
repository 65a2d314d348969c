//! Closing the hole left by each removed vertex.
//!
//! The removed vertex's neighbors form a fan. Each pass walks the fan and,
//! for every neighbor not yet used as an apex, takes the first two of *its*
//! neighbors that are still open fan members and emits a triangle over
//! them. The new edge between those two is registered in the adjacency
//! graph, so later apexes can build on it:
//!
//! ```text
//!      1───2              1───2          1───2
//!     ╱ ╲ ╱ ╲            ╱│  ╱ ╲        ╱│ ╲ │╲
//!    0───×───3   ──►    0 │ ╱   3  ──► 0 │  ╲│ 3
//!     ╲ ╱ ╲ ╱            ╲│╱   ╱        ╲│   │╱
//!      5───4              5───4          5───4
//! ```
//!
//! Passes stop once two fan members remain open or the pass limit is hit.
//! A fan still open after the last pass is left as a hole and counted.

use glam::Vec3;
use smallvec::SmallVec;

use super::adjacency::VertexAdjacency;
use super::selection::Selection;

/// Replacement triangles for all removed vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Refill {
  pub triangles: Vec<[u32; 3]>,
  /// Removed vertices whose fan could not be closed.
  pub residual_holes: usize,
}

/// Average unit face normal of the triangles around each vertex.
///
/// Vertices outside every triangle get a zero normal.
pub fn reference_normals(vertices: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
  let mut sums = vec![Vec3::ZERO; vertices.len()];
  let mut counts = vec![0u32; vertices.len()];

  for tri in indices.chunks_exact(3) {
    let a = vertices[tri[0] as usize];
    let b = vertices[tri[1] as usize];
    let c = vertices[tri[2] as usize];
    let normal = (b - a).cross(c - a).normalize_or_zero();

    for (k, &v) in tri.iter().enumerate() {
      if tri[..k].contains(&v) {
        continue;
      }
      sums[v as usize] += normal;
      counts[v as usize] += 1;
    }
  }

  sums
    .into_iter()
    .zip(counts)
    .map(|(sum, count)| if count == 0 { Vec3::ZERO } else { sum / count as f32 })
    .collect()
}

/// Angle in degrees from `normal` to `reference`, negative when the turn
/// runs clockwise about `up`. Zero if either vector is zero.
pub fn signed_angle(normal: Vec3, reference: Vec3, up: Vec3) -> f32 {
  if normal.length_squared() == 0.0 || reference.length_squared() == 0.0 {
    return 0.0;
  }
  let angle = normal.angle_between(reference).to_degrees();
  let sign = if up.dot(normal.cross(reference)) < 0.0 { -1.0 } else { 1.0 };
  angle * sign
}

/// Fill the fan of every removed vertex.
///
/// At least one pass runs per removed vertex.
pub fn refill(
  vertices: &[Vec3],
  selection: &Selection,
  adjacency: &mut VertexAdjacency,
  reference: &[Vec3],
  up: Vec3,
  max_passes: usize,
) -> Refill {
  let mut out = Refill::default();

  for &removed in &selection.removed {
    let fan: SmallVec<[u32; 16]> = SmallVec::from_slice(adjacency.neighbors(removed));
    let mut closed: SmallVec<[u32; 16]> = SmallVec::new();
    let open = |closed: &SmallVec<[u32; 16]>| fan.len().saturating_sub(closed.len());

    let mut passes = 0;
    while open(&closed) > 2 {
      let mut tried: SmallVec<[u32; 16]> = SmallVec::new();

      for &apex in &fan {
        if closed.contains(&apex) || tried.contains(&apex) {
          continue;
        }
        if open(&closed) <= 2 {
          break;
        }

        let mut pair = [0u32; 2];
        let mut found = 0;
        for &n in adjacency.neighbors(apex) {
          if fan.contains(&n) && !closed.contains(&n) {
            pair[found] = n;
            found += 1;
            if found == 2 {
              break;
            }
          }
        }
        if found < 2
          || selection.is_removed(apex)
          || selection.is_removed(pair[0])
          || selection.is_removed(pair[1])
        {
          continue;
        }

        let [a, b] = pair;
        let origin = vertices[apex as usize];
        let normal = (vertices[a as usize] - origin)
          .cross(vertices[b as usize] - origin)
          .normalize_or_zero();
        let angle = signed_angle(normal, reference[removed as usize], up);

        out.triangles.push(if angle.abs() < 90.0 {
          [apex, a, b]
        } else {
          [apex, b, a]
        });
        adjacency.connect(a, b);
        tried.push(a);
        tried.push(b);
        closed.push(apex);
      }

      passes += 1;
      if passes >= max_passes {
        break;
      }
    }

    if open(&closed) > 2 {
      log::debug!(
        "vertex {} left open with {} of {} neighbors unfilled",
        removed,
        open(&closed),
        fan.len()
      );
      out.residual_holes += 1;
    }
  }

  out
}

#[cfg(test)]
#[path = "refill_test.rs"]
mod refill_test;
