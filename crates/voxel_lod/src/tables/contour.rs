//! Case triangulation for a convex cell polyhedron.
//!
//! Every face is walked counter-clockwise as seen from outside the cell.
//! A face edge whose endpoints disagree carries a crossing; walking from an
//! outside corner to an inside one is an *exit*, the reverse an *entry*.
//! Each exit is joined to the entry immediately before it, which keeps
//! outside corners on an ambiguous face apart:
//!
//! ```text
//!   3 ───────── 2        ● outside    ○ inside
//!   ○       ╲   ●
//!   │         ╲ │        exit 0→1 joins entry 3→0
//!   │╲          │        exit 2→3 joins entry 1→2
//!   │  ╲        │
//!   ●    ╲      ○
//!   0 ───────── 1
//! ```
//!
//! A crossing edge is an exit on one of its faces and an entry on the other,
//! so the face segments chain into closed loops. Each loop runs
//! counter-clockwise around an outside region and is fanned into triangles
//! whose normals face that region.

use smallvec::SmallVec;

/// A corner pair with the lower corner first.
pub(crate) type Edge = (u8, u8);

/// Cell polyhedron: faces as corner cycles, counter-clockwise from outside.
pub(crate) struct Polyhedron<'a> {
  pub faces: &'a [&'a [u8]],
}

/// Triangulation of one case: crossing edges and triangles over them.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct CaseGeometry {
  pub edges: SmallVec<[Edge; 16]>,
  pub triangles: SmallVec<[[u8; 3]; 16]>,
}

#[inline]
fn ordered(a: u8, b: u8) -> Edge {
  if a < b {
    (a, b)
  } else {
    (b, a)
  }
}

/// Crossing segments on one face, each running exit → entry.
fn face_segments(face: &[u8], outside: u32, segments: &mut Vec<(Edge, Edge)>) {
  let n = face.len();
  let mut crossings: SmallVec<[(Edge, bool); 8]> = SmallVec::new();

  for i in 0..n {
    let a = face[i];
    let b = face[(i + 1) % n];
    let out_a = (outside >> a) & 1 == 1;
    let out_b = (outside >> b) & 1 == 1;
    if out_a != out_b {
      crossings.push((ordered(a, b), out_a));
    }
  }

  let count = crossings.len();
  for (k, &(edge, is_exit)) in crossings.iter().enumerate() {
    if !is_exit {
      continue;
    }
    // Nearest entry walking backwards around the face.
    for step in 1..count {
      let (entry, entry_is_exit) = crossings[(k + count - step) % count];
      if !entry_is_exit {
        segments.push((edge, entry));
        break;
      }
    }
  }
}

/// Closed crossing loops for a corner classification.
///
/// `outside` has bit `c` set when corner `c` lies on the outside of the
/// surface.
pub(crate) fn contour_loops(poly: &Polyhedron, outside: u32) -> Vec<SmallVec<[Edge; 16]>> {
  let mut segments = Vec::new();
  for face in poly.faces {
    face_segments(face, outside, &mut segments);
  }

  let mut used = vec![false; segments.len()];
  let mut loops = Vec::new();

  for start in 0..segments.len() {
    if used[start] {
      continue;
    }

    let mut ring: SmallVec<[Edge; 16]> = SmallVec::new();
    let first = segments[start].0;
    let mut current = start;

    loop {
      used[current] = true;
      let (from, to) = segments[current];
      ring.push(from);
      if to == first {
        break;
      }
      match segments.iter().position(|&(f, _)| f == to) {
        Some(next) if !used[next] => current = next,
        _ => break,
      }
    }

    loops.push(ring);
  }

  loops
}

/// Triangulate a case: loops are fanned from their first vertex.
pub(crate) fn triangulate(poly: &Polyhedron, outside: u32) -> CaseGeometry {
  let mut geometry = CaseGeometry::default();

  for ring in contour_loops(poly, outside) {
    let base = geometry.edges.len() as u8;
    geometry.edges.extend(ring.iter().copied());
    for i in 1..ring.len().saturating_sub(1) {
      geometry
        .triangles
        .push([base, base + i as u8, base + i as u8 + 1]);
    }
  }

  geometry
}

#[cfg(test)]
#[path = "contour_test.rs"]
mod contour_test;
