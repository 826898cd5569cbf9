//! Cube surface storage and cross-face traversal for Cubix.
//!
//! This crate owns the geometry of the game: six `size × size` faces
//! stored in one [`Surface`], a [`Cursor`] that walks straight lines
//! across face boundaries with the correct re-orientation, and the
//! [`run`] counter built on top of it.
//!
//! # Geometry
//!
//! Faces are numbered `0..6`. Leaving face `f` through its right, top,
//! left or bottom edge lands on face `f+1`, `f+2`, `f+4` or `f+5` (mod 6)
//! respectively; the rule lives in [`geometry::edge_transition`]. Straight
//! axis lines close after `4 * size` cells, diagonals either close after
//! `3 * size` cells or end at a cube corner.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod run;
pub mod surface;

#[cfg(test)]
pub(crate) mod compliance;

pub use cursor::Cursor;
pub use direction::Direction;
pub use error::SpaceError;
pub use run::{LineScan, Run, RunCount};
pub use surface::Surface;
