//! Chunk build pipeline.
//!
//! ```text
//! ┌──────────┐     ┌────────────┐     ┌──────────────────────────────┐
//! │ Sampling ├────►│ Extraction ├────►│ LOD strategy                 │
//! └──────────┘     └────────────┘     │  None       → mesh as is     │
//!   density           regular         │  Transition → + face seams   │
//!   lattice           cells           │  Decimate   → gap refill     │
//!                                     └──────────────────────────────┘
//! ```
//!
//! Chunks are independent, so batches run in parallel with rayon and come
//! back in request order.

mod build;
pub mod types;

pub use build::{build_batch, build_batch_timed, build_chunk, build_chunk_with};
pub use types::{BatchStats, BuiltChunk, ChunkRequest, LodStrategy, Seam};
