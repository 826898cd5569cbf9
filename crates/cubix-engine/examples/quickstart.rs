//! Cubix quickstart: a scripted game that wins across a face edge.
//!
//! Demonstrates:
//!   1. Starting a game from a `GameConfig`
//!   2. Placing marks and reading run lengths
//!   3. Drawing the unfolded net around different centre faces
//!   4. Reading the winning record and the game metrics
//!
//! Run with:
//!   cargo run --example quickstart

use cubix_core::{FaceId, Mark};
use cubix_engine::{face_legend, render_net, Game, GameConfig, GameError, Placement};

// ─── Board parameters ───────────────────────────────────────────

const SIZE: u32 = 3;
const WIN_LENGTH: u32 = 5;

// ─── Script ─────────────────────────────────────────────────────
//
// Cross lays the top row of face 1 and carries on up the right-hand
// column of face 2 (1-based face numbers, as on screen).

const SCRIPT: [(u8, u32, u32, Mark); 9] = [
    (0, 0, 2, Mark::Cross),
    (0, 1, 1, Mark::Nought),
    (0, 1, 2, Mark::Cross),
    (0, 0, 0, Mark::Nought),
    (0, 2, 2, Mark::Cross),
    (3, 1, 1, Mark::Nought),
    (1, 2, 0, Mark::Cross),
    (5, 2, 2, Mark::Nought),
    (1, 2, 1, Mark::Cross),
];

fn show(game: &Game, centre: FaceId) -> Result<(), GameError> {
    let Some(surface) = game.surface() else {
        return Err(GameError::NotStarted);
    };
    print!("{}", face_legend(centre));
    print!("{}", render_net(surface, centre)?);
    println!();
    Ok(())
}

fn main() -> Result<(), GameError> {
    let mut game = Game::new();
    game.start(GameConfig::new(SIZE, WIN_LENGTH))?;
    println!("Board {SIZE}x{SIZE} per face, {WIN_LENGTH} in a row wins\n");

    for (f, x, y, mark) in SCRIPT {
        let face = FaceId::new(f).map_err(|e| GameError::Space(e.into()))?;
        let n = face.index() + 1;
        match game.place_mark(face, x, y, mark)? {
            Placement::Occupied => println!("{mark} at {n}:({x}, {y}) is occupied"),
            placement => println!(
                "{mark} at {n}:({x}, {y}) -> run {}",
                placement.run_length()
            ),
        }
    }
    println!();

    // The winning line bends from the first face onto its right neighbour.
    show(&game, FaceId::ALL[0])?;
    show(&game, FaceId::ALL[1])?;

    if let Some(win) = game.winning_run() {
        println!(
            "'{}' wins with {} along {} ({:?})",
            win.mark,
            win.length,
            win.direction,
            win.cursor.position()
        );
    }
    let m = game.metrics();
    println!(
        "{} placements, {} cursor steps, last scan {} us",
        m.placements, m.cursor_steps, m.last_scan_us
    );
    Ok(())
}
