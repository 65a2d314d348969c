use super::*;

#[test]
fn test_lod_table_starts_at_full_resolution() {
  assert_eq!(lod_increment(0), 1);
  for pair in LOD_TABLE.windows(2) {
    assert_eq!(pair[1], pair[0] * 2, "Each level should double the stride");
  }
}

#[test]
fn test_lod_increment_clamps() {
  assert_eq!(lod_increment(LOD_TABLE.len()), 16);
  assert_eq!(lod_increment(100), 16);
}

#[test]
fn test_lattice_index_roundtrip() {
  let size = 9;
  for z in 0..size {
    for y in 0..size {
      for x in 0..size {
        let idx = lattice_index(x, y, z, size);
        assert_eq!(
          lattice_coord(idx, size),
          (x, y, z),
          "Roundtrip failed for ({}, {}, {})",
          x,
          y,
          z
        );
      }
    }
  }
}

#[test]
fn test_lattice_index_x_fastest() {
  assert_eq!(lattice_index(1, 0, 0, 33), 1);
  assert_eq!(lattice_index(0, 1, 0, 33), 33);
  assert_eq!(lattice_index(0, 0, 1, 33), 33 * 33);
}

#[test]
fn test_stride_extent() {
  assert_eq!(stride_extent(33, 1), 32);
  assert_eq!(stride_extent(33, 4), 32);
  assert_eq!(stride_extent(8, 2), 6);
  assert_eq!(stride_extent(1, 1), 0);
}

#[test]
fn test_corner_offsets_match_binary_layout() {
  for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
    assert_eq!(*offset, [i & 1, (i >> 1) & 1, (i >> 2) & 1]);
  }
}

#[test]
fn test_transition_coarse_corners_mirror_face_corners() {
  for (k, &source) in TRANSITION_COARSE_SOURCE.iter().enumerate() {
    let coarse = TRANSITION_CORNER_OFFSETS[9 + k];
    let face = TRANSITION_CORNER_OFFSETS[source];
    assert_eq!(coarse[0], face[0]);
    assert_eq!(coarse[1], face[1]);
    assert_eq!(coarse[2], 1);
  }
}

#[test]
fn test_transition_bit_order_is_permutation() {
  let mut seen = [false; 9];
  for &corner in &TRANSITION_BIT_ORDER {
    assert!(!seen[corner], "Corner {} appears twice", corner);
    seen[corner] = true;
  }
  assert_eq!(TRANSITION_BIT_ORDER, [0, 1, 2, 5, 8, 7, 6, 3, 4]);
}
