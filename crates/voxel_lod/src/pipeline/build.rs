//! Single chunk and batch builds.

use rayon::prelude::*;
use web_time::Instant;

use super::types::{BatchStats, BuiltChunk, ChunkRequest, LodStrategy, Seam};
use crate::constants::{lod_increment, stride_extent};
use crate::decimate::decimate;
use crate::density::{sample_field, DensityField, PlanetField};
use crate::error::Result;
use crate::extract::{extract, extract_seam};

/// Build one chunk from the planet field described by its noise settings.
pub fn build_chunk(request: &ChunkRequest) -> Result<BuiltChunk> {
  let field = PlanetField::new(request.noise.clone());
  build_chunk_with(&field, request)
}

/// Build one chunk from an arbitrary density field.
///
/// The request's noise settings are ignored.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "pipeline::build_chunk"))]
pub fn build_chunk_with<F: DensityField + ?Sized>(field: &F, request: &ChunkRequest) -> Result<BuiltChunk> {
  let start = Instant::now();

  let lattice = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("sample").entered();
    sample_field(field, request.origin, request.size)
  };

  let mut mesh = extract(&lattice, request.size, request.lod, &request.extract)?;
  let mut seams = Vec::new();
  let mut decimation = None;

  match &request.strategy {
    LodStrategy::None => {}
    LodStrategy::Transition { faces } => {
      for &face in faces {
        let seam = extract_seam(&lattice, request.size, request.lod, face, &request.extract)?;
        seams.push(Seam { face, mesh: seam });
      }
    }
    LodStrategy::Decimate(config) => {
      let extent = stride_extent(request.size, lod_increment(request.lod)) as f32;
      let result = decimate(&mesh, extent, config);
      mesh = result.mesh;
      decimation = Some(result.report);
    }
  }

  Ok(BuiltChunk {
    origin: request.origin,
    lod: request.lod,
    mesh,
    seams,
    decimation,
    timing_us: start.elapsed().as_micros() as u64,
  })
}

/// Build many chunks in parallel.
///
/// Results keep the order of `requests`; a failed chunk does not stop the
/// others.
pub fn build_batch(requests: &[ChunkRequest]) -> Vec<Result<BuiltChunk>> {
  if requests.is_empty() {
    return Vec::new();
  }

  requests.par_iter().map(build_chunk).collect()
}

/// Same as [`build_batch`] but also returns timing stats.
pub fn build_batch_timed(requests: &[ChunkRequest]) -> (Vec<Result<BuiltChunk>>, BatchStats) {
  let start = Instant::now();
  let results = build_batch(requests);
  let total_us = start.elapsed().as_micros() as u64;

  let failed = results.iter().filter(|r| r.is_err()).count();
  let stats = BatchStats {
    chunk_count: results.len() - failed,
    failed,
    total_us,
  };

  let triangles: usize = results
    .iter()
    .filter_map(|r| r.as_ref().ok())
    .map(BuiltChunk::triangle_count)
    .sum();
  log::debug!(
    "built {} chunks ({} failed, {} triangles) in {}us",
    stats.chunk_count,
    stats.failed,
    triangles,
    stats.total_us
  );

  (results, stats)
}

#[cfg(test)]
#[path = "build_test.rs"]
mod build_test;
