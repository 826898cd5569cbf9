//! Cubix: five-in-a-row played on the six faces of a cube.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Cubix sub-crates. For most users, adding `cubix` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cubix::prelude::*;
//!
//! let mut game = Game::new();
//! game.start(GameConfig::new(3, 5)).unwrap();
//!
//! // Three cells along the top row of face 0...
//! let front = FaceId::new(0).unwrap();
//! for x in 0..3 {
//!     game.place_mark(front, x, 2, Mark::Cross).unwrap();
//! }
//! // ...continue up the right-hand column of face 1.
//! let right = FaceId::new(1).unwrap();
//! game.place_mark(right, 2, 0, Mark::Cross).unwrap();
//! let placement = game.place_mark(right, 2, 1, Mark::Cross).unwrap();
//!
//! assert_eq!(placement.run_length(), 5);
//! assert_eq!(game.current_winner(), Some(Mark::Cross));
//!
//! let net = render_net(game.surface().unwrap(), front).unwrap();
//! assert_eq!(net.lines().count(), 9);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cubix-core` | Face IDs, cells and marks, vectors, coordinate errors |
//! | [`space`] | `cubix-space` | Surface storage, cursors, edge geometry, run counting |
//! | [`engine`] | `cubix-engine` | Game state machine, configuration, metrics, rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`cubix-core`).
///
/// Contains [`types::FaceId`], [`types::Cell`], [`types::Mark`],
/// [`types::Vec2`] and the argument error types.
pub use cubix_core as types;

/// Surface storage and cross-face traversal (`cubix-space`).
///
/// Provides [`space::Surface`], the [`space::Cursor`] that walks across
/// face edges, and the [`space::run`] counter.
pub use cubix_space as space;

/// The game itself (`cubix-engine`).
///
/// [`engine::Game`] for play, [`engine::render_net`] for drawing the
/// cube as an unfolded net.
pub use cubix_engine as engine;

/// Common imports for typical Cubix usage.
///
/// ```rust
/// use cubix::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use cubix_core::{Cell, FaceId, Mark, Vec2};

    // Errors
    pub use cubix_core::{CoordError, ParseMarkError};
    pub use cubix_space::SpaceError;

    // Space
    pub use cubix_space::{Cursor, Direction, Surface};

    // Engine
    pub use cubix_engine::{
        face_legend, render_net, ConfigError, Game, GameConfig, GameError, GameMetrics,
        GameState, Placement,
    };
}
