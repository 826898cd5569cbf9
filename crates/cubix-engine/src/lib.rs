//! Game engine for Cubix.
//!
//! Provides [`Game`], which owns the cube surface, places marks, detects
//! winning runs, and tracks [`GameMetrics`]. The [`render`] module draws
//! the surface as an unfolded net for text front ends.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod game;
pub mod metrics;
pub mod render;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, GameError, GameState, Placement, WinningRun};
pub use metrics::GameMetrics;
pub use render::{face_legend, render_net};
