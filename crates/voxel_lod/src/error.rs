//! Errors raised while building a chunk mesh.
//!
//! Only buffer overflow is an error. Degenerate cells emit nothing, gaps the
//! decimator cannot close are counted in
//! [`DecimationReport`](crate::decimate::DecimationReport), and a lattice
//! whose size disagrees with the extractor's is an assertion failure.

use std::fmt;

/// Which output buffer ran out of room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferKind {
  Vertices,
  Indices,
}

impl fmt::Display for BufferKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BufferKind::Vertices => f.write_str("vertex"),
      BufferKind::Indices => f.write_str("index"),
    }
  }
}

/// Error type for mesh building failures.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MeshError {
  /// Appending would overrun a preallocated output buffer. The build is
  /// abandoned; nothing past capacity was written.
  #[error("{kind} buffer needs {needed} entries but capacity is {capacity}")]
  CapacityExceeded {
    kind: BufferKind,
    needed: usize,
    capacity: usize,
  },
}

pub type Result<T> = std::result::Result<T, MeshError>;
