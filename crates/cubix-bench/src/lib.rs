//! Benchmark profiles and utilities for Cubix.
//!
//! Provides pre-built [`GameConfig`] profiles and deterministic move lists
//! for benchmarking:
//!
//! - [`reference_profile`]: 16x16 faces (1536 cells), win length 5
//! - [`stress_profile`]: 256x256 faces (~393K cells), win length 5
//! - [`reference_moves`]: deterministic distinct placements via seed
//! - [`play`]: feed a move list into a game until it ends

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cubix_core::{Cell, FaceId, Mark};
use cubix_engine::{Game, GameConfig, GameError};
use cubix_space::{SpaceError, Surface};

/// One placement in a move list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// Target face.
    pub face: FaceId,
    /// Board column.
    pub x: u32,
    /// Board row.
    pub y: u32,
    /// Mark placed.
    pub mark: Mark,
}

/// Reference profile: 16x16 faces, win length 5.
pub fn reference_profile() -> GameConfig {
    GameConfig::new(16, 5)
}

/// Stress profile: 256x256 faces, win length 5.
///
/// Axis loops are 1024 cells long, so scans through a filled region are
/// far more expensive than on the reference board.
pub fn stress_profile() -> GameConfig {
    GameConfig::new(256, 5)
}

/// Generate `n` deterministic placements on distinct cells of a board
/// of edge `size`, alternating Cross and Nought.
///
/// Cells are picked by a simple hash of the seed with linear probing, so
/// `n` is clamped to the cell count.
pub fn reference_moves(size: u32, n: usize, seed: u64) -> Vec<Move> {
    let cell_count = 6 * (size as usize) * (size as usize);
    let n = n.min(cell_count);
    let mut taken = vec![false; cell_count];
    let mut moves = Vec::with_capacity(n);

    for i in 0..n {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add((i as u64).wrapping_mul(1442695040888963407))
            % cell_count as u64) as usize;
        while taken[pos] {
            pos = (pos + 1) % cell_count;
        }
        taken[pos] = true;

        let s = size as usize;
        let face_area = s * s;
        let Ok(face) = FaceId::new((pos / face_area) as u8) else {
            continue;
        };
        let rem = pos % face_area;
        let mark = if i % 2 == 0 { Mark::Cross } else { Mark::Nought };
        moves.push(Move {
            face,
            x: (rem % s) as u32,
            y: (rem / s) as u32,
            mark,
        });
    }
    moves
}

/// Apply `moves` to `game` in order, stopping at the first win.
///
/// Returns the number of placements made, including the winning one.
pub fn play(game: &mut Game, moves: &[Move]) -> Result<usize, GameError> {
    let mut placed = 0;
    for m in moves {
        let p = game.place_mark(m.face, m.x, m.y, m.mark)?;
        placed += 1;
        if p.is_win() {
            break;
        }
    }
    Ok(placed)
}

/// A surface with every cell marked, the worst case for run scans: every
/// axis line closes a full loop.
pub fn filled(size: u32, mark: Mark) -> Result<Surface, SpaceError> {
    Surface::new(size, Cell::Marked(mark))
}
