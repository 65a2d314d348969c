//! voxel_lod - Level-of-detail isosurface meshing for chunked density fields
//!
//! This crate turns scalar density lattices into triangle meshes at several
//! levels of detail and keeps neighbouring chunks at different levels
//! crack-free.
//!
//! # Features
//!
//! - **Regular extraction**: Marching-cubes style contouring with a
//!   class/cell-data case table and order-independent edge interpolation
//! - **Transition seams**: 13-sample transition cells that stitch a fine
//!   face to a coarse neighbour
//! - **Gap-refill decimation**: Removes a fraction of interior vertices and
//!   fills the holes with angle-corrected fan triangles
//! - **Planet density**: Fractal Perlin terrain with caves, domain warp and
//!   a radial falloff, sampled in parallel
//!
//! # Example
//!
//! ```ignore
//! use voxel_lod::{build_chunk, ChunkRequest, Face, LodStrategy};
//! use glam::Vec3;
//!
//! let request = ChunkRequest::new(Vec3::new(-16.0, 40.0, -16.0), 33)
//!   .with_lod(1)
//!   .with_strategy(LodStrategy::Transition { faces: vec![Face::NegX] });
//!
//! let chunk = build_chunk(&request)?;
//! println!("{} triangles, {} seams", chunk.triangle_count(), chunk.seams.len());
//! ```

pub mod constants;
pub mod edge_table;
pub mod error;
pub mod tables;
pub mod types;

// Re-export commonly used items
pub use constants::{lattice_coord, lattice_index, lod_increment, CORNER_OFFSETS, LOD_TABLE};
pub use error::{BufferKind, MeshError, Result};
pub use types::{ExtractConfig, Face, FaceFrame, Mesh, MeshBuilder, MinMaxAABB};

// Density sampling
pub mod density;
pub use density::{sample, sample_field, DensityField, DensityLattice, NoiseParams, PlanetField};

// Regular and transition extraction
pub mod extract;
pub use extract::{extract, extract_seam, interpolate};

// Gap-refill decimation
pub mod decimate;
pub use decimate::{decimate, DecimateConfig, Decimation, DecimationReport};

// Chunk build pipeline
pub mod pipeline;
pub use pipeline::{build_batch, build_chunk, build_chunk_with, BuiltChunk, ChunkRequest, LodStrategy};

// Engine-agnostic build statistics
pub mod metrics;
