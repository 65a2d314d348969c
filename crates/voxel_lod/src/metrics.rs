//! Build statistics for chunk meshing.
//!
//! Compiled in with the `metrics` feature and switched at runtime through
//! [`COLLECT_METRICS`]; without the feature [`BuildMetrics::record_chunk`]
//! is a no-op.
//!
//! ```ignore
//! let mut metrics = BuildMetrics::new();
//! for chunk in build_batch(&requests).into_iter().flatten() {
//!   metrics.record_chunk(&chunk);
//! }
//! log::info!("{:.0}us per chunk", metrics.build_timings.mean());
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

use crate::pipeline::BuiltChunk;

/// Runtime switch, honoured only when the `metrics` feature is on.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Last `capacity` timings in microseconds, with a running sum.
#[derive(Clone, Debug)]
pub struct TimingWindow {
  samples: VecDeque<u64>,
  capacity: usize,
  sum: u64,
}

impl TimingWindow {
  pub fn new(capacity: usize) -> Self {
    Self {
      samples: VecDeque::with_capacity(capacity),
      capacity,
      sum: 0,
    }
  }

  /// Record a timing; the oldest drops out once the window is full.
  pub fn push(&mut self, micros: u64) {
    if self.capacity == 0 {
      return;
    }
    if self.samples.len() == self.capacity {
      if let Some(evicted) = self.samples.pop_front() {
        self.sum -= evicted;
      }
    }
    self.samples.push_back(micros);
    self.sum += micros;
  }

  pub fn len(&self) -> usize {
    self.samples.len()
  }

  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }

  pub fn sum(&self) -> u64 {
    self.sum
  }

  /// 0.0 when empty.
  pub fn mean(&self) -> f64 {
    match self.samples.len() {
      0 => 0.0,
      n => self.sum as f64 / n as f64,
    }
  }

  pub fn max(&self) -> Option<u64> {
    self.samples.iter().copied().max()
  }

  pub fn clear(&mut self) {
    self.samples.clear();
    self.sum = 0;
  }
}

/// Running totals over built chunks.
#[derive(Clone, Debug)]
pub struct BuildMetrics {
  pub build_timings: TimingWindow,
  /// Chunks per LOD level; levels past 15 share the last slot.
  pub chunks_per_lod: [u64; 16],
  pub total_chunks: u64,
  /// Chunk mesh plus seam triangles.
  pub total_triangles: u64,
  pub total_vertices: u64,
  /// Input minus output triangles over all decimated chunks.
  pub decimated_triangles: u64,
  pub residual_holes: u64,
}

impl Default for BuildMetrics {
  fn default() -> Self {
    Self {
      build_timings: TimingWindow::new(128),
      chunks_per_lod: [0; 16],
      total_chunks: 0,
      total_triangles: 0,
      total_vertices: 0,
      decimated_triangles: 0,
      residual_holes: 0,
    }
  }
}

impl BuildMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Zero the per-period counters. `total_chunks` keeps counting.
  pub fn reset(&mut self) {
    self.build_timings.clear();
    self.chunks_per_lod = [0; 16];
    self.total_triangles = 0;
    self.total_vertices = 0;
    self.decimated_triangles = 0;
    self.residual_holes = 0;
  }

  pub fn record_chunk(&mut self, chunk: &BuiltChunk) {
    if !is_enabled() {
      return;
    }

    self.build_timings.push(chunk.timing_us);
    self.chunks_per_lod[chunk.lod.min(15)] += 1;
    self.total_chunks += 1;
    self.total_triangles += chunk.triangle_count() as u64;

    let seam_vertices: usize = chunk.seams.iter().map(|s| s.mesh.vertices.len()).sum();
    self.total_vertices += (chunk.mesh.vertices.len() + seam_vertices) as u64;

    if let Some(report) = &chunk.decimation {
      self.decimated_triangles += report.input_triangles.saturating_sub(report.output_triangles) as u64;
      self.residual_holes += report.residual_holes as u64;
    }
  }
}

#[cfg(all(test, feature = "metrics"))]
#[path = "metrics_test.rs"]
mod metrics_test;
