//! Pipeline I/O types.

use glam::Vec3;

use crate::decimate::{DecimateConfig, DecimationReport};
use crate::density::NoiseParams;
use crate::types::{ExtractConfig, Face, Mesh};

/// How a chunk reconciles its resolution with its neighbors.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LodStrategy {
  /// Regular extraction only.
  #[default]
  None,
  /// Extract at the requested level and stitch seams on `faces`, each
  /// facing a neighbor one level finer.
  Transition { faces: Vec<Face> },
  /// Extract, then decimate the result.
  Decimate(DecimateConfig),
}

/// One chunk to build.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkRequest {
  /// World position of lattice point (0, 0, 0).
  pub origin: Vec3,
  /// Lattice points per axis.
  pub size: usize,
  pub lod: usize,
  pub noise: NoiseParams,
  pub extract: ExtractConfig,
  pub strategy: LodStrategy,
}

impl ChunkRequest {
  pub fn new(origin: Vec3, size: usize) -> Self {
    Self {
      origin,
      size,
      lod: 0,
      noise: NoiseParams::default(),
      extract: ExtractConfig::default(),
      strategy: LodStrategy::None,
    }
  }

  pub fn with_lod(mut self, lod: usize) -> Self {
    self.lod = lod;
    self
  }

  pub fn with_noise(mut self, noise: NoiseParams) -> Self {
    self.noise = noise;
    self
  }

  pub fn with_extract(mut self, extract: ExtractConfig) -> Self {
    self.extract = extract;
    self
  }

  pub fn with_strategy(mut self, strategy: LodStrategy) -> Self {
    self.strategy = strategy;
    self
  }
}

/// Seam geometry for one face.
#[derive(Clone, Debug, PartialEq)]
pub struct Seam {
  pub face: Face,
  pub mesh: Mesh,
}

/// Result of building one chunk.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltChunk {
  pub origin: Vec3,
  pub lod: usize,
  /// Chunk mesh in chunk-local lattice coordinates.
  pub mesh: Mesh,
  /// Seams requested by [`LodStrategy::Transition`].
  pub seams: Vec<Seam>,
  /// Present for [`LodStrategy::Decimate`].
  pub decimation: Option<DecimationReport>,
  /// Wall time for sampling and meshing, in microseconds.
  pub timing_us: u64,
}

impl BuiltChunk {
  /// Triangles across the chunk mesh and its seams.
  pub fn triangle_count(&self) -> usize {
    self.mesh.triangle_count() + self.seams.iter().map(|s| s.mesh.triangle_count()).sum::<usize>()
  }
}

/// Statistics from a batch build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
  /// Number of chunks built successfully.
  pub chunk_count: usize,
  /// Number of chunks whose build failed.
  pub failed: usize,
  /// Total processing time in microseconds.
  pub total_us: u64,
}
