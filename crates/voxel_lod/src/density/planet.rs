//! Planet-shaped density: fractal terrain inside a radial falloff, with
//! caves carved where a second fractal layer runs high.
//!
//! ```text
//! terrain = fbm_terrain(x·s, z·s, y·s)          s = coordinate_scale
//! w       = warp(x, y, z)
//! t       = clamp(1 - exp(-k · (|w| - radius)), 0, 1)
//! cave    = fbm_caves(w.x·s, w.z·s, w.y·s)
//! density = lerp(cave > cave_threshold ? cave : terrain, 1, t)
//! ```
//!
//! Density approaches 1 away from the planet, so the outside of the surface
//! is the high side.

use glam::Vec3;

use super::fractal::{DomainWarp, FractalNoise, FractalParams};
use super::DensityField;

/// Planet density configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParams {
  pub seed: i32,
  /// Base frequency applied to every noise layer.
  pub frequency: f32,
  /// Terrain height layer.
  pub terrain: FractalParams,
  /// Cave layer.
  pub caves: FractalParams,
  /// Domain warp displacement amplitude.
  pub domain_warp_amplitude: f32,
  /// Distance from the origin where the falloff crosses zero.
  pub planet_radius: f32,
  /// Falloff steepness `k`.
  pub falloff: f32,
  /// Cave values above this replace the terrain value.
  pub cave_threshold: f32,
  /// Multiplier on sampling coordinates before noise lookup.
  pub coordinate_scale: f32,
}

impl Default for NoiseParams {
  fn default() -> Self {
    Self {
      seed: 1,
      frequency: 0.01,
      terrain: FractalParams::default(),
      caves: FractalParams::default(),
      domain_warp_amplitude: 1.0,
      planet_radius: 50.0,
      falloff: 0.3,
      cave_threshold: 0.4,
      coordinate_scale: 1.5,
    }
  }
}

impl NoiseParams {
  pub fn new(seed: i32) -> Self {
    Self {
      seed,
      ..Self::default()
    }
  }

  pub fn with_frequency(mut self, frequency: f32) -> Self {
    self.frequency = frequency;
    self
  }

  pub fn with_terrain(mut self, terrain: FractalParams) -> Self {
    self.terrain = terrain;
    self
  }

  pub fn with_caves(mut self, caves: FractalParams) -> Self {
    self.caves = caves;
    self
  }

  pub fn with_domain_warp(mut self, amplitude: f32) -> Self {
    self.domain_warp_amplitude = amplitude;
    self
  }

  pub fn with_planet_radius(mut self, radius: f32) -> Self {
    self.planet_radius = radius;
    self
  }

  pub fn with_falloff(mut self, falloff: f32) -> Self {
    self.falloff = falloff;
    self
  }

  pub fn with_cave_threshold(mut self, threshold: f32) -> Self {
    self.cave_threshold = threshold;
    self
  }

  pub fn with_coordinate_scale(mut self, scale: f32) -> Self {
    self.coordinate_scale = scale;
    self
  }
}

/// Density field built from [`NoiseParams`].
#[derive(Clone)]
pub struct PlanetField {
  params: NoiseParams,
  terrain: FractalNoise,
  caves: FractalNoise,
  warp: DomainWarp,
}

impl PlanetField {
  pub fn new(params: NoiseParams) -> Self {
    let seed = params.seed as u32;
    Self {
      terrain: FractalNoise::new(seed, params.frequency, params.terrain),
      caves: FractalNoise::new(seed, params.frequency, params.caves),
      warp: DomainWarp::new(
        seed,
        params.frequency,
        params.terrain,
        params.domain_warp_amplitude,
      ),
      params,
    }
  }

  pub fn params(&self) -> &NoiseParams {
    &self.params
  }

  /// Radial blend weight toward 1.0 at a (warped) position.
  #[inline]
  pub fn falloff(&self, warped: Vec3) -> f32 {
    let distance = warped.length();
    (1.0 - (-self.params.falloff * (distance - self.params.planet_radius)).exp()).clamp(0.0, 1.0)
  }
}

impl DensityField for PlanetField {
  fn density(&self, position: Vec3) -> f32 {
    let s = self.params.coordinate_scale;
    let terrain = self.terrain.get(Vec3::new(position.x * s, position.z * s, position.y * s));

    let warped = self.warp.apply(position);
    let t = self.falloff(warped);
    let cave = self.caves.get(Vec3::new(warped.x * s, warped.z * s, warped.y * s));

    let value = if cave > self.params.cave_threshold { cave } else { terrain };
    value + (1.0 - value) * t
  }
}

#[cfg(test)]
#[path = "planet_test.rs"]
mod planet_test;
