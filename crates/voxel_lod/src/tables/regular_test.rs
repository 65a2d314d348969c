use glam::Vec3;

use super::*;
use crate::edge_table::{corner_position, edge_between, EDGE_TABLE};
use crate::tables::{edge_corners, INVERTED_WINDING};

/// Triangles of a case with every vertex at its edge midpoint.
fn midpoint_triangles(case: u8) -> Vec<[Vec3; 3]> {
  let tables = regular_tables();
  let points: Vec<Vec3> = tables
    .vertex_data(case)
    .iter()
    .map(|&code| {
      let (a, b) = edge_corners(code);
      (Vec3::from(corner_position(a as u8)) + Vec3::from(corner_position(b as u8))) * 0.5
    })
    .collect();

  let inverted = tables.cell_class(case) & INVERTED_WINDING != 0;
  tables
    .cell_data(case)
    .indices()
    .chunks(3)
    .map(|tri| {
      let (a, b, c) = (points[tri[0] as usize], points[tri[1] as usize], points[tri[2] as usize]);
      if inverted {
        [a, c, b]
      } else {
        [a, b, c]
      }
    })
    .collect()
}

fn summed_normal(triangles: &[[Vec3; 3]]) -> Vec3 {
  triangles
    .iter()
    .map(|[a, b, c]| (*b - *a).cross(*c - *a))
    .sum()
}

fn outside_direction(case: u8) -> Vec3 {
  let mut outside = Vec3::ZERO;
  let mut inside = Vec3::ZERO;
  let count = case.count_ones() as f32;
  for corner in 0..8u8 {
    let p = Vec3::from(corner_position(corner));
    if (case >> corner) & 1 == 1 {
      outside += p / count;
    } else {
      inside += p / (8.0 - count);
    }
  }
  outside - inside
}

#[test]
fn test_class_count() {
  // Vertex two-colourings of the cube up to rotation and reflection.
  assert_eq!(regular_tables().class_count(), 22);
}

#[test]
fn test_degenerate_cases_are_empty() {
  let tables = regular_tables();
  assert_eq!(tables.cell_data(0).vertex_count(), 0);
  assert_eq!(tables.cell_data(0).triangle_count(), 0);
  assert_eq!(tables.cell_data(255).vertex_count(), 0);
  assert_eq!(tables.cell_data(255).triangle_count(), 0);
}

#[test]
fn test_vertex_data_matches_edge_table() {
  let tables = regular_tables();
  for case in 0..=255u8 {
    let mut mask = 0u16;
    for &code in tables.vertex_data(case) {
      let (a, b) = edge_corners(code);
      assert_ne!(
        (case >> a) & 1,
        (case >> b) & 1,
        "Case {} edge {}-{} has no crossing",
        case,
        a,
        b
      );
      let edge = edge_between(a as u8, b as u8).expect("edge codes name cube edges");
      assert_eq!(mask & (1 << edge), 0, "Case {} repeats edge {}", case, edge);
      mask |= 1 << edge;
    }
    assert_eq!(mask, EDGE_TABLE[case as usize], "Case {} edge set", case);
  }
}

#[test]
fn test_triangle_budget() {
  let tables = regular_tables();
  for case in 0..=255u8 {
    let data = tables.cell_data(case);
    assert!(data.triangle_count() <= MAX_REGULAR_TRIANGLES, "Case {}", case);
    assert!(data.indices().iter().all(|&i| (i as usize) < data.vertex_count()));
  }
}

#[test]
fn test_single_corner_normals_face_outside() {
  for corner in 0..8 {
    let case = 1u8 << corner;
    let normal = summed_normal(&midpoint_triangles(case));
    assert!(
      normal.dot(outside_direction(case)) > 0.0,
      "Corner {} normal {:?}",
      corner,
      normal
    );

    let complement = !case;
    let normal = summed_normal(&midpoint_triangles(complement));
    assert!(
      normal.dot(outside_direction(complement)) > 0.0,
      "Complement of corner {} normal {:?}",
      corner,
      normal
    );
  }
}

#[test]
fn test_edge_pair_normals_face_outside() {
  for edge in crate::edge_table::EDGE_CORNERS {
    let case = (1u8 << edge[0]) | (1u8 << edge[1]);
    let normal = summed_normal(&midpoint_triangles(case));
    assert!(normal.dot(outside_direction(case)) > 0.0, "Edge {:?}", edge);
  }
}

#[test]
fn test_triangles_consistently_oriented() {
  // Within a case, a directed vertex pair is never used twice.
  let tables = regular_tables();
  for case in 0..=255u8 {
    let mut directed = Vec::new();
    for tri in tables.cell_data(case).indices().chunks(3) {
      for k in 0..3 {
        let pair = (tri[k], tri[(k + 1) % 3]);
        assert!(!directed.contains(&pair), "Case {} reuses {:?}", case, pair);
        directed.push(pair);
      }
    }
  }
}
