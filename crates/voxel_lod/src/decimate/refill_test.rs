use glam::Vec3;

use super::*;

/// `n × n` grid in the y = 1 plane, two triangles per quad facing +Y.
fn grid(n: usize) -> (Vec<Vec3>, Vec<u32>) {
  let mut vertices = Vec::new();
  for z in 0..n {
    for x in 0..n {
      vertices.push(Vec3::new(x as f32, 1.0, z as f32));
    }
  }
  let mut indices = Vec::new();
  let n = n as u32;
  for z in 0..n - 1 {
    for x in 0..n - 1 {
      let a = x + n * z;
      let b = a + 1;
      let c = a + n;
      let d = c + 1;
      indices.extend_from_slice(&[a, c, b, b, c, d]);
    }
  }
  (vertices, indices)
}

fn remove(vertex_count: usize, removed: &[u32]) -> Selection {
  let mut mask = vec![false; vertex_count];
  for &v in removed {
    mask[v as usize] = true;
  }
  Selection {
    removed: removed.to_vec(),
    mask,
  }
}

fn normal(vertices: &[Vec3], tri: [u32; 3]) -> Vec3 {
  let a = vertices[tri[0] as usize];
  (vertices[tri[1] as usize] - a).cross(vertices[tri[2] as usize] - a)
}

#[test]
fn test_reference_normals_average_faces() {
  let (vertices, indices) = grid(3);
  let normals = reference_normals(&vertices, &indices);
  for n in &normals {
    assert!((*n - Vec3::Y).length() < 1e-6, "normal {:?}", n);
  }

  let mut extra = vertices.clone();
  extra.push(Vec3::splat(9.0));
  assert_eq!(reference_normals(&extra, &indices)[9], Vec3::ZERO);
}

#[test]
fn test_signed_angle() {
  assert_eq!(signed_angle(Vec3::Y, Vec3::Y, Vec3::Y), 0.0);
  assert!((signed_angle(Vec3::Y, -Vec3::Y, Vec3::Y).abs() - 180.0).abs() < 1e-2);
  assert!((signed_angle(Vec3::X, Vec3::Z, Vec3::Y) + 90.0).abs() < 1e-2);
  assert!((signed_angle(Vec3::Z, Vec3::X, Vec3::Y) - 90.0).abs() < 1e-2);
  assert_eq!(signed_angle(Vec3::ZERO, Vec3::Y, Vec3::Y), 0.0);
}

#[test]
fn test_hexagon_fan_is_closed() {
  let (vertices, indices) = grid(3);
  let mut adjacency = VertexAdjacency::from_triangles(vertices.len(), &indices);
  let reference = reference_normals(&vertices, &indices);
  let selection = remove(vertices.len(), &[4]);

  let out = refill(&vertices, &selection, &mut adjacency, &reference, Vec3::Y, 4);

  assert_eq!(out.residual_holes, 0);
  assert_eq!(out.triangles.len(), 4, "a hexagon needs four triangles");
  let mut area = 0.0;
  for &tri in &out.triangles {
    assert!(!tri.contains(&4));
    let n = normal(&vertices, tri);
    assert!(n.y > 0.0, "triangle {:?} flipped", tri);
    area += n.length() * 0.5;
  }
  // The six triangles around the center covered area 3.
  assert!((area - 3.0).abs() < 1e-5, "refill area {}", area);
}

#[test]
fn test_winding_follows_reference() {
  let (vertices, mut indices) = grid(3);
  for tri in indices.chunks_exact_mut(3) {
    tri.swap(1, 2);
  }
  let mut adjacency = VertexAdjacency::from_triangles(vertices.len(), &indices);
  let reference = reference_normals(&vertices, &indices);
  let selection = remove(vertices.len(), &[4]);

  let out = refill(&vertices, &selection, &mut adjacency, &reference, Vec3::Y, 4);
  assert!(!out.triangles.is_empty());
  for &tri in &out.triangles {
    assert!(normal(&vertices, tri).y < 0.0);
  }
}

#[test]
fn test_refill_registers_new_edges() {
  let (vertices, indices) = grid(3);
  let mut adjacency = VertexAdjacency::from_triangles(vertices.len(), &indices);
  let reference = reference_normals(&vertices, &indices);
  assert!(!adjacency.contains(2, 3));

  refill(&vertices, &remove(9, &[4]), &mut adjacency, &reference, Vec3::Y, 4);
  assert!(adjacency.contains(2, 3));
  assert!(adjacency.contains(7, 2));
  assert!(adjacency.contains(3, 7));
}

#[test]
fn test_pass_limit_leaves_hole() {
  let (vertices, indices) = grid(3);
  let mut adjacency = VertexAdjacency::from_triangles(vertices.len(), &indices);
  let reference = reference_normals(&vertices, &indices);

  let out = refill(&vertices, &remove(9, &[4]), &mut adjacency, &reference, Vec3::Y, 1);
  assert_eq!(out.residual_holes, 1);
  assert_eq!(out.triangles.len(), 3);
}

#[test]
fn test_disconnected_fan_is_reported() {
  // Two triangles meeting only at vertex 0.
  let vertices = vec![
    Vec3::new(2.0, 2.0, 2.0),
    Vec3::new(3.0, 2.0, 2.0),
    Vec3::new(3.0, 2.0, 3.0),
    Vec3::new(1.0, 2.0, 2.0),
    Vec3::new(1.0, 2.0, 1.0),
  ];
  let indices = vec![0, 1, 2, 0, 3, 4];
  let mut adjacency = VertexAdjacency::from_triangles(vertices.len(), &indices);
  let reference = reference_normals(&vertices, &indices);

  let out = refill(&vertices, &remove(5, &[0]), &mut adjacency, &reference, Vec3::Y, 4);
  assert!(out.triangles.is_empty());
  assert_eq!(out.residual_holes, 1);
}
