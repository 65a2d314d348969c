//! Extraction stage benchmarks.
//!
//! Measures the three meshing stages on a sphere lattice:
//! - **regular**: full-resolution and strided extraction
//! - **seam**: one transition face per LOD
//! - **decimate**: gap-refill on the LOD 0 mesh

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use voxel_lod::{
  decimate, extract, extract_seam, DecimateConfig, DensityLattice, ExtractConfig, Face,
};

const SIZE: usize = 33;

/// Sphere density: negative inside, positive outside.
fn sphere_lattice(radius: f32) -> DensityLattice {
  let center = Vec3::splat((SIZE - 1) as f32 * 0.5) + Vec3::new(0.13, -0.07, 0.21);
  DensityLattice::from_fn(SIZE, |x, y, z| {
    Vec3::new(x as f32, y as f32, z as f32).distance(center) - radius
  })
}

fn bench_regular(c: &mut Criterion) {
  let mut group = c.benchmark_group("extract/regular");
  let config = ExtractConfig::default();

  for radius in [6.0, 12.0, 15.0] {
    let lattice = sphere_lattice(radius);
    group.bench_with_input(BenchmarkId::new("lod0", format!("r={}", radius)), &radius, |b, _| {
      b.iter(|| extract(black_box(&lattice), SIZE, 0, &config))
    });
  }

  let lattice = sphere_lattice(12.0);
  for lod in 1..=3 {
    group.bench_with_input(BenchmarkId::new("r=12", format!("lod{}", lod)), &lod, |b, &lod| {
      b.iter(|| extract(black_box(&lattice), SIZE, lod, &config))
    });
  }

  group.finish();
}

fn bench_seam(c: &mut Criterion) {
  let mut group = c.benchmark_group("extract/seam");
  let config = ExtractConfig::default();
  let lattice = sphere_lattice(15.5);

  for lod in 1..=3 {
    group.bench_with_input(BenchmarkId::new("neg_x", format!("lod{}", lod)), &lod, |b, &lod| {
      b.iter(|| extract_seam(black_box(&lattice), SIZE, lod, Face::NegX, &config))
    });
  }

  group.finish();
}

fn bench_decimate(c: &mut Criterion) {
  let mut group = c.benchmark_group("extract/decimate");
  let lattice = sphere_lattice(12.0);
  let Ok(mesh) = extract(&lattice, SIZE, 0, &ExtractConfig::default()) else {
    return;
  };
  let extent = (SIZE - 1) as f32;

  for factor in [2, 4] {
    let config = DecimateConfig::new(factor);
    group.bench_with_input(BenchmarkId::new("sphere_r12", format!("k={}", factor)), &factor, |b, _| {
      b.iter(|| decimate(black_box(&mesh), extent, &config))
    });
  }

  group.finish();
}

criterion_group!(extraction, bench_regular, bench_seam, bench_decimate);

criterion_main!(extraction);
