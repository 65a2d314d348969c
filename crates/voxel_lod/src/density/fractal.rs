//! Fractal Brownian motion with weighted strength, and domain warping.
//!
//! Octave `i` samples Perlin noise seeded `seed + i`. Amplitudes start at
//! the fractal bounding (so the sum stays near [-1, 1]) and shrink by
//! `gain` per octave. Weighted strength additionally scales the next
//! octave by how high the current one landed:
//!
//! ```text
//! amp *= lerp(1, min(n + 1, 2) / 2, weighted_strength)
//! ```

use glam::Vec3;
use noise::{NoiseFn, Perlin};

/// Octave settings for one fractal layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParams {
  /// Number of octaves (at least one is always sampled).
  pub octaves: u32,
  /// 0 = plain fBm, 1 = octaves fully damped by lower octave values.
  pub weighted_strength: f32,
  /// Frequency multiplier per octave.
  pub lacunarity: f32,
  /// Amplitude multiplier per octave.
  pub gain: f32,
}

impl Default for FractalParams {
  fn default() -> Self {
    Self {
      octaves: 1,
      weighted_strength: 1.0,
      lacunarity: 1.0,
      gain: 1.0,
    }
  }
}

impl FractalParams {
  pub fn with_octaves(mut self, octaves: u32) -> Self {
    self.octaves = octaves;
    self
  }

  pub fn with_weighted_strength(mut self, weighted_strength: f32) -> Self {
    self.weighted_strength = weighted_strength;
    self
  }

  pub fn with_lacunarity(mut self, lacunarity: f32) -> Self {
    self.lacunarity = lacunarity;
    self
  }

  pub fn with_gain(mut self, gain: f32) -> Self {
    self.gain = gain;
    self
  }

  /// Reciprocal of the summed octave amplitudes.
  pub fn bounding(&self) -> f32 {
    let gain = self.gain.abs();
    let mut amp = gain;
    let mut total = 1.0;
    for _ in 1..self.octaves.max(1) {
      total += amp;
      amp *= gain;
    }
    1.0 / total
  }
}

/// Multi-octave Perlin noise.
#[derive(Clone)]
pub struct FractalNoise {
  octaves: Vec<Perlin>,
  params: FractalParams,
  bounding: f32,
  frequency: f32,
}

impl FractalNoise {
  pub fn new(seed: u32, frequency: f32, params: FractalParams) -> Self {
    let octaves = (0..params.octaves.max(1))
      .map(|i| Perlin::new(seed.wrapping_add(i)))
      .collect();
    Self {
      octaves,
      params,
      bounding: params.bounding(),
      frequency,
    }
  }

  pub fn params(&self) -> &FractalParams {
    &self.params
  }

  /// Sample at `position` (scaled by the base frequency).
  pub fn get(&self, position: Vec3) -> f32 {
    let mut p = position.as_dvec3() * self.frequency as f64;
    let mut sum = 0.0f32;
    let mut amp = self.bounding;

    for octave in &self.octaves {
      let n = octave.get([p.x, p.y, p.z]) as f32;
      sum += n * amp;
      amp *= lerp(1.0, (n + 1.0).min(2.0) * 0.5, self.params.weighted_strength);
      p *= self.params.lacunarity as f64;
      amp *= self.params.gain;
    }

    sum
  }
}

/// Displaces sample positions by three decorrelated fractal noises.
#[derive(Clone)]
pub struct DomainWarp {
  axes: [FractalNoise; 3],
  amplitude: f32,
}

impl DomainWarp {
  pub fn new(seed: u32, frequency: f32, params: FractalParams, amplitude: f32) -> Self {
    // Plain fBm per axis; seeds spaced past the octave range.
    let params = params.with_weighted_strength(0.0);
    let stride = params.octaves.max(1);
    Self {
      axes: [
        FractalNoise::new(seed.wrapping_add(stride), frequency, params),
        FractalNoise::new(seed.wrapping_add(stride * 2), frequency, params),
        FractalNoise::new(seed.wrapping_add(stride * 3), frequency, params),
      ],
      amplitude,
    }
  }

  pub fn amplitude(&self) -> f32 {
    self.amplitude
  }

  /// Warped position.
  pub fn apply(&self, position: Vec3) -> Vec3 {
    if self.amplitude == 0.0 {
      return position;
    }
    let offset = Vec3::new(
      self.axes[0].get(position),
      self.axes[1].get(position),
      self.axes[2].get(position),
    );
    position + offset * self.amplitude
  }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
  a + (b - a) * t
}

#[cfg(test)]
#[path = "fractal_test.rs"]
mod fractal_test;
