//! Density lattices and the samplers that fill them.
//!
//! A lattice holds one scalar per lattice point of a chunk, X fastest:
//!
//! ```text
//! index = x + N * (y + N * z)
//!
//!        ┌── row (y, z): N contiguous samples along X ──┐
//! values [ x=0 x=1 ... x=N-1 | x=0 x=1 ... x=N-1 | ... ]
//!          └──── y=0, z=0 ──┘  └──── y=1, z=0 ──┘
//! ```
//!
//! Rows are independent, so [`sample_field`] fills them in parallel.

mod fractal;
mod planet;

pub use fractal::{DomainWarp, FractalNoise, FractalParams};
pub use planet::{NoiseParams, PlanetField};

use glam::Vec3;
use rayon::prelude::*;

use crate::constants::lattice_index;

/// Scalar field sampled at world positions.
///
/// Implementations must be pure: the same position always yields the same
/// value.
pub trait DensityField: Send + Sync {
  fn density(&self, position: Vec3) -> f32;
}

impl<F> DensityField for F
where
  F: Fn(Vec3) -> f32 + Send + Sync,
{
  #[inline]
  fn density(&self, position: Vec3) -> f32 {
    self(position)
  }
}

/// Cubic lattice of `size³` density samples.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityLattice {
  size: usize,
  values: Vec<f32>,
}

impl DensityLattice {
  /// Zero-filled lattice with `size` points per axis.
  pub fn new(size: usize) -> Self {
    Self {
      size,
      values: vec![0.0; size * size * size],
    }
  }

  /// Wrap existing samples laid out X fastest.
  ///
  /// # Panics
  /// If `values.len() != size³`.
  pub fn from_values(size: usize, values: Vec<f32>) -> Self {
    assert_eq!(
      values.len(),
      size * size * size,
      "lattice of size {} needs {} samples",
      size,
      size * size * size
    );
    Self { size, values }
  }

  /// Fill from a function of integer lattice coordinates.
  pub fn from_fn(size: usize, f: impl Fn(usize, usize, usize) -> f32) -> Self {
    let mut lattice = Self::new(size);
    for z in 0..size {
      for y in 0..size {
        for x in 0..size {
          lattice.values[lattice_index(x, y, z, size)] = f(x, y, z);
        }
      }
    }
    lattice
  }

  /// Lattice points per axis.
  #[inline]
  pub fn size(&self) -> usize {
    self.size
  }

  /// Outer extent in lattice units (`size - 1`).
  #[inline]
  pub fn extent(&self) -> usize {
    self.size.saturating_sub(1)
  }

  #[inline(always)]
  pub fn get(&self, x: usize, y: usize, z: usize) -> f32 {
    self.values[lattice_index(x, y, z, self.size)]
  }

  #[inline]
  pub fn values(&self) -> &[f32] {
    &self.values
  }

  #[inline]
  pub fn values_mut(&mut self) -> &mut [f32] {
    &mut self.values
  }
}

/// Overwrite every sample of `lattice` from `field`, with lattice point
/// (x, y, z) at world position `origin + (x, y, z)`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "density::sample_into"))]
pub fn sample_into<F: DensityField + ?Sized>(field: &F, origin: Vec3, lattice: &mut DensityLattice) {
  let size = lattice.size;
  if size == 0 {
    return;
  }

  lattice
    .values
    .par_chunks_mut(size)
    .enumerate()
    .for_each(|(row, samples)| {
      let y = row % size;
      let z = row / size;
      for (x, sample) in samples.iter_mut().enumerate() {
        *sample = field.density(origin + Vec3::new(x as f32, y as f32, z as f32));
      }
    });
}

/// Sample a fresh lattice of `size` points per axis from `field`.
pub fn sample_field<F: DensityField + ?Sized>(field: &F, origin: Vec3, size: usize) -> DensityLattice {
  let mut lattice = DensityLattice::new(size);
  sample_into(field, origin, &mut lattice);
  lattice
}

/// Sample the planet density for one chunk.
pub fn sample(chunk_origin: Vec3, chunk_size: usize, params: &NoiseParams) -> DensityLattice {
  sample_field(&PlanetField::new(params.clone()), chunk_origin, chunk_size)
}
