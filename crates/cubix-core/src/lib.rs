//! Core types for the Cubix cube-surface game.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: face identifiers,
//! cell states, the doubled-coordinate vector type, and the argument
//! errors raised when callers hand in out-of-range coordinates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod vector;

pub use cell::{Cell, Mark};
pub use error::{CoordError, ParseMarkError};
pub use id::{FaceId, SurfaceEpoch};
pub use vector::Vec2;
