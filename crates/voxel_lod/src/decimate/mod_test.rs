use std::collections::HashSet;

use glam::Vec3;

use super::*;

/// 9 × 9 grid in the y = 4 plane of a chunk spanning 0..=8.
fn flat_grid() -> Mesh {
  let n = 9u32;
  let mut vertices = Vec::new();
  for z in 0..n {
    for x in 0..n {
      vertices.push(Vec3::new(x as f32, 4.0, z as f32));
    }
  }
  let mut indices = Vec::new();
  for z in 0..n - 1 {
    for x in 0..n - 1 {
      let a = x + n * z;
      let b = a + 1;
      let c = a + n;
      let d = c + 1;
      indices.extend_from_slice(&[a, c, b, b, c, d]);
    }
  }
  Mesh::from_buffers(vertices, indices)
}

fn key(v: Vec3) -> [u32; 3] {
  v.to_array().map(f32::to_bits)
}

#[test]
fn test_grid_keeps_boundary_ring() {
  let mesh = flat_grid();
  let result = decimate(&mesh, 8.0, &DecimateConfig::new(2));

  let boundary: Vec<Vec3> = mesh
    .vertices
    .iter()
    .copied()
    .filter(|&v| is_boundary(v, 8.0))
    .collect();
  assert_eq!(boundary.len(), 32);

  let output: HashSet<[u32; 3]> = result.mesh.vertices.iter().map(|&v| key(v)).collect();
  for v in &boundary {
    assert!(output.contains(&key(*v)), "boundary vertex {:?} lost", v);
  }
}

#[test]
fn test_grid_drops_removed_vertices() {
  let mesh = flat_grid();
  let result = decimate(&mesh, 8.0, &DecimateConfig::new(2));

  assert_eq!(result.report.removed_vertices, 16);
  assert_eq!(result.mesh.vertices.len(), 81 - 16);

  let output: HashSet<[u32; 3]> = result.mesh.vertices.iter().map(|&v| key(v)).collect();
  for &r in &result.removed {
    let position = mesh.vertices[r as usize];
    assert!(!is_boundary(position, 8.0));
    assert!(!output.contains(&key(position)), "removed vertex {:?} survived", position);
  }
  for &i in &result.mesh.indices {
    assert!((i as usize) < result.mesh.vertices.len());
  }
}

#[test]
fn test_grid_refill_closes_every_hole() {
  let mesh = flat_grid();
  let result = decimate(&mesh, 8.0, &DecimateConfig::new(2));

  assert_eq!(result.report.residual_holes, 0);
  assert_eq!(result.report.refill_triangles, 16 * 4);
  assert_eq!(result.report.input_triangles, 128);
  // 96 triangles touched a removed vertex.
  assert_eq!(result.report.output_triangles, 32 + 64);

  let mut area = 0.0;
  for tri in result.mesh.triangles() {
    let n = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
    assert!(n.y > 0.0, "triangle {:?} faces down", tri);
    area += n.length() * 0.5;
  }
  assert!((area - 64.0).abs() < 1e-3, "surface area changed to {}", area);
}

#[test]
fn test_refill_only_without_untouched() {
  let mesh = flat_grid();
  let config = DecimateConfig::new(2).with_keep_untouched(false);
  let result = decimate(&mesh, 8.0, &config);
  assert_eq!(result.mesh.triangle_count(), result.report.refill_triangles);
}

#[test]
fn test_without_boundary_preservation_corners_go() {
  let mesh = flat_grid();
  let config = DecimateConfig::new(1).with_preserve_boundary(false);
  let result = decimate(&mesh, 8.0, &config);
  // Vertex 0 is the first candidate and has no removed neighbor.
  assert_eq!(result.removed.first(), Some(&0));
}

#[test]
fn test_empty_mesh() {
  let result = decimate(&Mesh::new(), 8.0, &DecimateConfig::default());
  assert!(result.mesh.is_empty());
  assert_eq!(result.report, DecimationReport::default());
}

#[test]
fn test_config_builder() {
  let config = DecimateConfig::new(3)
    .with_max_refill_passes(2)
    .with_up_axis(Vec3::Z)
    .with_keep_untouched(false)
    .with_preserve_boundary(false);
  assert_eq!(config.reduction_factor, 3);
  assert_eq!(config.max_refill_passes, 2);
  assert_eq!(config.up_axis, Vec3::Z);
  assert!(!config.keep_untouched);
  assert!(!config.preserve_boundary);
}
