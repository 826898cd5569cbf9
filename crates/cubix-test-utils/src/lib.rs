//! Test fixtures for Cubix development.
//!
//! Provides helpers that lay straight lines of marks with a cursor,
//! build pre-filled surfaces, and shorten face construction in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{face, filled_surface, lay_line, LaidLine};
