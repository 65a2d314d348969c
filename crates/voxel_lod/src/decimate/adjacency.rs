//! Vertex adjacency built from shared triangle membership.

use smallvec::SmallVec;

/// Neighbor lists per vertex.
///
/// Each list keeps first-occurrence order: triangles are scanned in index
/// order and, within a triangle, the other two corners are added in their
/// stored order. Refill relies on this order, so it is part of the result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexAdjacency {
  neighbors: Vec<SmallVec<[u32; 8]>>,
}

impl VertexAdjacency {
  /// Build the graph for `vertex_count` vertices from a triangle list.
  pub fn from_triangles(vertex_count: usize, indices: &[u32]) -> Self {
    let mut adjacency = Self {
      neighbors: vec![SmallVec::new(); vertex_count],
    };

    for tri in indices.chunks_exact(3) {
      for (k, &vertex) in tri.iter().enumerate() {
        for (j, &other) in tri.iter().enumerate() {
          if j != k && other != vertex {
            adjacency.insert(vertex, other);
          }
        }
      }
    }

    adjacency
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.neighbors.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.neighbors.is_empty()
  }

  /// Neighbors of `vertex` in first-occurrence order.
  #[inline]
  pub fn neighbors(&self, vertex: u32) -> &[u32] {
    &self.neighbors[vertex as usize]
  }

  #[inline]
  pub fn contains(&self, a: u32, b: u32) -> bool {
    self.neighbors[a as usize].contains(&b)
  }

  /// Register an edge in both directions; existing entries are left in
  /// place.
  pub fn connect(&mut self, a: u32, b: u32) {
    self.insert(a, b);
    self.insert(b, a);
  }

  #[inline]
  fn insert(&mut self, from: u32, to: u32) {
    let list = &mut self.neighbors[from as usize];
    if !list.contains(&to) {
      list.push(to);
    }
  }
}

#[cfg(test)]
#[path = "adjacency_test.rs"]
mod adjacency_test;
