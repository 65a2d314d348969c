use super::*;

#[test]
fn test_neighbors_in_first_occurrence_order() {
  // Two triangles sharing the edge 1-2.
  let adjacency = VertexAdjacency::from_triangles(4, &[0, 1, 2, 2, 1, 3]);

  assert_eq!(adjacency.neighbors(0), &[1, 2]);
  assert_eq!(adjacency.neighbors(1), &[0, 2, 3]);
  assert_eq!(adjacency.neighbors(2), &[0, 1, 3]);
  assert_eq!(adjacency.neighbors(3), &[2, 1]);
}

#[test]
fn test_unreferenced_vertex_has_no_neighbors() {
  let adjacency = VertexAdjacency::from_triangles(5, &[0, 1, 2]);
  assert_eq!(adjacency.len(), 5);
  assert!(adjacency.neighbors(4).is_empty());
}

#[test]
fn test_connect_is_symmetric_and_idempotent() {
  let mut adjacency = VertexAdjacency::from_triangles(4, &[0, 1, 2]);
  assert!(!adjacency.contains(0, 3));

  adjacency.connect(0, 3);
  adjacency.connect(3, 0);
  assert!(adjacency.contains(0, 3));
  assert!(adjacency.contains(3, 0));
  assert_eq!(adjacency.neighbors(0), &[1, 2, 3]);
  assert_eq!(adjacency.neighbors(3), &[0]);
}

#[test]
fn test_degenerate_triangle_skips_self_loops() {
  let adjacency = VertexAdjacency::from_triangles(2, &[0, 0, 1]);
  assert_eq!(adjacency.neighbors(0), &[1]);
  assert_eq!(adjacency.neighbors(1), &[0]);
}
