use super::*;

#[test]
fn test_edge_code_orders_corners() {
  assert_eq!(edge_code(1, 3), 0x13);
  assert_eq!(edge_code(3, 1), 0x13);
  assert_eq!(edge_code(9, 12), 0x9C);
}

#[test]
fn test_edge_corners_unpacks() {
  assert_eq!(edge_corners(0x13), (1, 3));
  assert_eq!(edge_corners(edge_code(12, 10)), (10, 12));
}

#[test]
fn test_cell_data_slices_indices() {
  let data = CellData::<15>::from_triangles(4, &[[0, 1, 2], [0, 2, 3]]);
  assert_eq!(data.vertex_count(), 4);
  assert_eq!(data.triangle_count(), 2);
  assert_eq!(data.indices(), &[0, 1, 2, 0, 2, 3]);
}

#[test]
fn test_class_byte_layout() {
  assert_eq!(INVERTED_WINDING & CLASS_MASK, 0);
  assert_eq!(INVERTED_WINDING | CLASS_MASK, 0xFF);
}
