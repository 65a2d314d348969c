//! Core data types: output meshes, the capacity-bounded mesh builder,
//! chunk faces and extraction settings.

use glam::Vec3;

use crate::constants::DEFAULT_THRESHOLD;
use crate::error::{BufferKind, MeshError, Result};

/// Axis-aligned bounds of a mesh's vertices.
///
/// An empty box has `min > max` on every axis.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Grow to include `point`.
  #[inline]
  pub fn encapsulate(&mut self, point: Vec3) {
    self.min = Vec3::from_array(self.min).min(point).to_array();
    self.max = Vec3::from_array(self.max).max(point).to_array();
  }

  /// False until at least one point has been added.
  pub fn is_valid(&self) -> bool {
    (0..3).all(|axis| self.min[axis] <= self.max[axis])
  }

  /// Center and half extents, or `None` for an empty box.
  pub fn center_extents(&self) -> Option<(Vec3, Vec3)> {
    if !self.is_valid() {
      return None;
    }
    let min = Vec3::from_array(self.min);
    let max = Vec3::from_array(self.max);
    Some(((min + max) * 0.5, (max - min) * 0.5))
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Triangle mesh in chunk-local lattice coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
  /// Vertex positions.
  pub vertices: Vec<Vec3>,

  /// Three indices per triangle, counter-clockwise seen from outside.
  pub indices: Vec<u32>,

  /// Recomputed whenever the mesh is built from buffers.
  pub bounds: MinMaxAABB,
}

impl Mesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a mesh from raw buffers, computing bounds.
  pub fn from_buffers(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
    let mut bounds = MinMaxAABB::empty();
    for &v in &vertices {
      bounds.encapsulate(v);
    }
    Self {
      vertices,
      indices,
      bounds,
    }
  }

  /// Drop all geometry, keeping allocations.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Triangles as position triples.
  pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
    self.indices.chunks_exact(3).map(move |tri| {
      [
        self.vertices[tri[0] as usize],
        self.vertices[tri[1] as usize],
        self.vertices[tri[2] as usize],
      ]
    })
  }
}

/// Append-only mesh buffers with fixed capacity.
///
/// The vertex and index counts are the live cursors of one build. Every
/// append checks capacity first, so a failed build never writes past its
/// budget.
#[derive(Debug)]
pub struct MeshBuilder {
  vertices: Vec<Vec3>,
  indices: Vec<u32>,
  vertex_capacity: usize,
  index_capacity: usize,
}

impl MeshBuilder {
  pub fn with_capacity(vertex_capacity: usize, index_capacity: usize) -> Self {
    Self {
      vertices: Vec::with_capacity(vertex_capacity),
      indices: Vec::with_capacity(index_capacity),
      vertex_capacity,
      index_capacity,
    }
  }

  /// Number of valid vertices written so far.
  #[inline]
  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  /// Number of valid indices written so far.
  #[inline]
  pub fn index_count(&self) -> usize {
    self.indices.len()
  }

  pub fn vertex_capacity(&self) -> usize {
    self.vertex_capacity
  }

  pub fn index_capacity(&self) -> usize {
    self.index_capacity
  }

  /// Append a vertex, or reuse an earlier one with bit-identical position
  /// when `share` is set. The scan is linear and the first match wins.
  pub fn push_vertex(&mut self, position: Vec3, share: bool) -> Result<u32> {
    if share {
      let bits = position.to_array().map(f32::to_bits);
      if let Some(existing) = self
        .vertices
        .iter()
        .position(|v| v.to_array().map(f32::to_bits) == bits)
      {
        return Ok(existing as u32);
      }
    }

    if self.vertices.len() >= self.vertex_capacity {
      return Err(MeshError::CapacityExceeded {
        kind: BufferKind::Vertices,
        needed: self.vertices.len() + 1,
        capacity: self.vertex_capacity,
      });
    }

    self.vertices.push(position);
    Ok((self.vertices.len() - 1) as u32)
  }

  /// Append one triangle's indices.
  pub fn push_triangle(&mut self, triangle: [u32; 3]) -> Result<()> {
    if self.indices.len() + 3 > self.index_capacity {
      return Err(MeshError::CapacityExceeded {
        kind: BufferKind::Indices,
        needed: self.indices.len() + 3,
        capacity: self.index_capacity,
      });
    }

    self.indices.extend_from_slice(&triangle);
    Ok(())
  }

  /// Finish the build, trimming buffers to the live counts.
  pub fn finish(self) -> Mesh {
    Mesh::from_buffers(self.vertices, self.indices)
  }
}

/// One of the six faces of a chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
  NegX,
  PosX,
  NegY,
  PosY,
  NegZ,
  PosZ,
}

/// Face-local axes: `u` and `v` span the face, `normal` is the axis the
/// face is perpendicular to. `u × v` points into the chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceFrame {
  pub u: usize,
  pub v: usize,
  pub normal: usize,
  /// Face lies at the far end of its axis.
  pub far: bool,
}

impl Face {
  pub const ALL: [Face; 6] = [
    Face::NegX,
    Face::PosX,
    Face::NegY,
    Face::PosY,
    Face::NegZ,
    Face::PosZ,
  ];

  pub const fn frame(self) -> FaceFrame {
    match self {
      Face::NegX => FaceFrame { u: 1, v: 2, normal: 0, far: false },
      Face::PosX => FaceFrame { u: 2, v: 1, normal: 0, far: true },
      Face::NegY => FaceFrame { u: 2, v: 0, normal: 1, far: false },
      Face::PosY => FaceFrame { u: 0, v: 2, normal: 1, far: true },
      Face::NegZ => FaceFrame { u: 0, v: 1, normal: 2, far: false },
      Face::PosZ => FaceFrame { u: 1, v: 0, normal: 2, far: true },
    }
  }

  /// Unit vector pointing into the chunk.
  pub fn inward(self) -> Vec3 {
    let frame = self.frame();
    let mut n = [0.0f32; 3];
    n[frame.normal] = if frame.far { -1.0 } else { 1.0 };
    Vec3::from_array(n)
  }

  /// Check whether a point lies on this face's plane for a chunk spanning
  /// `0..=extent`.
  pub fn contains(self, point: Vec3, extent: f32) -> bool {
    let frame = self.frame();
    let plane = if frame.far { extent } else { 0.0 };
    point.to_array()[frame.normal] == plane
  }
}

/// Configuration for regular and transition extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfig {
  /// Density level of the surface; corners above it are outside.
  pub threshold: f32,

  /// Interpolate vertices along edges (true) or use edge midpoints (false).
  pub smooth: bool,

  /// Append every vertex unshared, for hard per-face normals.
  pub flat_shaded: bool,

  /// At LOD > 0, mesh the outermost stride layer one level finer instead
  /// of at the chunk's stride, stitched to the coarse interior with flat
  /// transition cells. The chunk's faces then match finer neighbors
  /// without separate seams.
  pub skip_boundary_cells: bool,

  /// Distance of the transition cell's coarse side from the shared face,
  /// as a fraction of the coarse stride. 0 keeps the seam on the face plane
  /// so it meets the unmodified coarse interior.
  pub transition_depth: f32,

  /// Vertex buffer capacity; `None` sizes for the worst case.
  pub vertex_capacity: Option<usize>,

  /// Index buffer capacity; `None` sizes for the worst case.
  pub index_capacity: Option<usize>,
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self {
      threshold: DEFAULT_THRESHOLD,
      smooth: true,
      flat_shaded: false,
      skip_boundary_cells: false,
      transition_depth: 0.0,
      vertex_capacity: None,
      index_capacity: None,
    }
  }
}

impl ExtractConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_threshold(mut self, threshold: f32) -> Self {
    self.threshold = threshold;
    self
  }

  pub fn with_smooth(mut self, smooth: bool) -> Self {
    self.smooth = smooth;
    self
  }

  pub fn with_flat_shaded(mut self, flat_shaded: bool) -> Self {
    self.flat_shaded = flat_shaded;
    self
  }

  pub fn with_skip_boundary_cells(mut self, skip: bool) -> Self {
    self.skip_boundary_cells = skip;
    self
  }

  pub fn with_transition_depth(mut self, depth: f32) -> Self {
    self.transition_depth = depth;
    self
  }

  /// Fix both buffer capacities instead of sizing for the worst case.
  pub fn with_capacity(mut self, vertices: usize, indices: usize) -> Self {
    self.vertex_capacity = Some(vertices);
    self.index_capacity = Some(indices);
    self
  }

  /// Builder for a walk over `cells` cells emitting at most
  /// `triangles_per_cell` triangles each, no vertex sharing assumed.
  pub(crate) fn builder(&self, cells: usize, triangles_per_cell: usize) -> MeshBuilder {
    let worst = cells * triangles_per_cell * 3;
    MeshBuilder::with_capacity(
      self.vertex_capacity.unwrap_or(worst),
      self.index_capacity.unwrap_or(worst),
    )
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
