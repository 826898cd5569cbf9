//! The game state machine.
//!
//! [`Game`] owns the single [`Surface`], places marks, scans the four
//! line directions through every placed mark, and keeps the winning
//! record once a run reaches the configured win length.
//!
//! # Lifecycle
//!
//! ```text
//! NotStarted ──start()──▶ InProgress ──winning placement──▶ Won
//!                              ▲                              │
//!                              └───────────start()────────────┘
//! ```

use std::error::Error;
use std::fmt;
use std::time::Instant;

use cubix_core::{Cell, FaceId, Mark};
use cubix_space::{run, Cursor, Direction, Run, SpaceError, Surface};

use crate::config::{ConfigError, GameConfig};
use crate::metrics::GameMetrics;

// ── GameError ──────────────────────────────────────────────────────

/// Errors returned by [`Game`] operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// No game has been started yet.
    NotStarted,
    /// The game already has a winner; start a new one.
    Finished {
        /// Mark that won.
        winner: Mark,
    },
    /// The requested configuration was rejected.
    Config(ConfigError),
    /// A coordinate or cursor was invalid for the current surface.
    Space(SpaceError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "no game in progress"),
            Self::Finished { winner } => write!(f, "game over: '{winner}' has won"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Space(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SpaceError> for GameError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── GameState ──────────────────────────────────────────────────────

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Constructed, waiting for [`Game::start`].
    NotStarted,
    /// Accepting placements.
    InProgress,
    /// A run reached the win length. Terminal until the next start.
    Won,
}

// ── WinningRun ─────────────────────────────────────────────────────

/// The record kept once a placement wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningRun {
    /// Cursor on the winning placement, stepping along the winning line.
    pub cursor: Cursor,
    /// The mark that won.
    pub mark: Mark,
    /// Direction of the winning line at the placed cell.
    pub direction: Direction,
    /// Length of the winning run.
    pub length: u32,
}

// ── Placement ──────────────────────────────────────────────────────

/// Outcome of an accepted [`Game::place_mark`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The cell already held a mark; nothing changed.
    Occupied,
    /// The mark was placed.
    Placed {
        /// Longest run through the placed cell.
        run: Run,
        /// The placement ended the game.
        won: bool,
    },
}

impl Placement {
    /// Length of the longest run through the placed cell, or 0 when the
    /// cell was occupied.
    pub fn run_length(&self) -> u32 {
        match self {
            Self::Occupied => 0,
            Self::Placed { run, .. } => run.length,
        }
    }

    /// Returns `true` if this placement won the game.
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Placed { won: true, .. })
    }
}

// ── Game ───────────────────────────────────────────────────────────

/// A two-player game on the surface of a cube.
///
/// # Examples
///
/// ```
/// use cubix_core::{FaceId, Mark};
/// use cubix_engine::{Game, GameConfig};
///
/// let mut game = Game::new();
/// game.start(GameConfig::new(4, 4)).unwrap();
/// let face = FaceId::new(0).unwrap();
/// for x in 0..4 {
///     game.place_mark(face, x, 0, Mark::Cross).unwrap();
/// }
/// assert_eq!(game.current_winner(), Some(Mark::Cross));
/// ```
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    surface: Option<Surface>,
    state: GameState,
    winner: Option<WinningRun>,
    to_move: Mark,
    metrics: GameMetrics,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game that has not been started. The configuration is the default
    /// until [`start`](Self::start) is called.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            surface: None,
            state: GameState::NotStarted,
            winner: None,
            to_move: Mark::Cross,
            metrics: GameMetrics::default(),
        }
    }

    /// Start a new game on an empty surface.
    ///
    /// Clears the winning record, the turn and the metrics. The previous
    /// surface, if any, is reset in place; cursors taken from it become
    /// stale. An invalid configuration leaves the current game untouched.
    pub fn start(&mut self, config: GameConfig) -> Result<(), GameError> {
        config.validate()?;
        if let Some(surface) = self.surface.as_mut() {
            surface.reset(config.size, Cell::Empty)?;
        } else {
            self.surface = Some(Surface::new(config.size, Cell::Empty)?);
        }
        self.config = config;
        self.state = GameState::InProgress;
        self.winner = None;
        self.to_move = Mark::Cross;
        self.metrics = GameMetrics::default();
        Ok(())
    }

    /// Start again with the current configuration.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.start(self.config)
    }

    /// Place `mark` at `(face, x, y)` and measure the runs through it.
    ///
    /// An occupied cell yields [`Placement::Occupied`] and leaves the
    /// surface unchanged, however often it is retried. Either mark may be
    /// placed regardless of [`to_move`](Self::to_move).
    pub fn place_mark(
        &mut self,
        face: FaceId,
        x: u32,
        y: u32,
        mark: Mark,
    ) -> Result<Placement, GameError> {
        match self.state {
            GameState::NotStarted => return Err(GameError::NotStarted),
            GameState::Won => {
                if let Some(w) = &self.winner {
                    return Err(GameError::Finished { winner: w.mark });
                }
            }
            GameState::InProgress => {}
        }
        let surface = self.surface.as_mut().ok_or(GameError::NotStarted)?;

        if !surface.get(face, x, y)?.is_empty() {
            self.metrics.rejected_occupied += 1;
            return Ok(Placement::Occupied);
        }
        surface.set(face, x, y, Cell::Marked(mark))?;

        let started = Instant::now();
        let scan = match run::scan(surface, face, x, y) {
            Ok(scan) => scan,
            Err(e) => {
                surface.set(face, x, y, Cell::Empty)?;
                return Err(e.into());
            }
        };
        let elapsed_us = started.elapsed().as_micros() as u64;
        self.metrics.record_scan(&scan, elapsed_us);

        let best = *scan.best();
        let won = best.length >= self.config.win_length;
        if won {
            let cursor = surface.cursor(face, x, y, best.direction.vector())?;
            self.winner = Some(WinningRun {
                cursor,
                mark,
                direction: best.direction,
                length: best.length,
            });
            self.state = GameState::Won;
        }
        self.to_move = mark.opponent();
        Ok(Placement::Placed { run: best, won })
    }

    /// The winning mark, read back through the winning cursor.
    pub fn current_winner(&self) -> Option<Mark> {
        let record = self.winner.as_ref()?;
        let surface = self.surface.as_ref()?;
        surface.read(&record.cursor).ok()?.mark()
    }

    /// The full winning record, if the game has been won.
    pub fn winning_run(&self) -> Option<&WinningRun> {
        self.winner.as_ref()
    }

    /// Contents of the cell at `(face, x, y)`.
    pub fn cell_value(&self, face: FaceId, x: u32, y: u32) -> Result<Cell, GameError> {
        let surface = self.surface.as_ref().ok_or(GameError::NotStarted)?;
        Ok(surface.get(face, x, y)?)
    }

    /// Edge length of each face.
    pub fn board_size(&self) -> u32 {
        self.config.size
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The mark expected to move next. Cross opens every game.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The surface, once a game has been started.
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Counters since the current game started.
    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubix_core::CoordError;

    const X: Cell = Cell::Marked(Mark::Cross);

    fn face(i: u8) -> FaceId {
        FaceId::new(i).unwrap()
    }

    fn started(size: u32, win_length: u32) -> Game {
        let mut g = Game::new();
        g.start(GameConfig::new(size, win_length)).unwrap();
        g
    }

    // ── Lifecycle ───────────────────────────────────────────────

    #[test]
    fn new_game_is_not_started() {
        let mut g = Game::new();
        assert_eq!(g.state(), GameState::NotStarted);
        assert!(g.surface().is_none());
        assert_eq!(g.board_size(), 4);
        assert_eq!(
            g.place_mark(face(0), 0, 0, Mark::Cross),
            Err(GameError::NotStarted)
        );
        assert_eq!(g.cell_value(face(0), 0, 0), Err(GameError::NotStarted));
        assert_eq!(g.current_winner(), None);
    }

    #[test]
    fn start_allocates_empty_surface() {
        let g = started(3, 5);
        assert_eq!(g.state(), GameState::InProgress);
        assert_eq!(g.board_size(), 3);
        let s = g.surface().unwrap();
        assert_eq!(s.cell_count(), 54);
        assert_eq!(s.count(Cell::Empty), 54);
    }

    #[test]
    fn invalid_config_keeps_running_game() {
        let mut g = started(3, 3);
        g.place_mark(face(1), 1, 1, Mark::Cross).unwrap();
        let err = g.start(GameConfig::new(3, 0)).unwrap_err();
        assert_eq!(err, GameError::Config(ConfigError::WinLengthZero));
        assert_eq!(g.state(), GameState::InProgress);
        assert_eq!(g.cell_value(face(1), 1, 1), Ok(X));
    }

    #[test]
    fn restart_clears_board_winner_and_metrics() {
        let mut g = started(2, 2);
        g.place_mark(face(0), 0, 0, Mark::Cross).unwrap();
        g.place_mark(face(0), 1, 0, Mark::Cross).unwrap();
        assert_eq!(g.state(), GameState::Won);

        g.restart().unwrap();
        assert_eq!(g.state(), GameState::InProgress);
        assert_eq!(g.current_winner(), None);
        assert!(g.winning_run().is_none());
        assert_eq!(g.metrics(), &GameMetrics::default());
        assert_eq!(g.surface().unwrap().count(Cell::Empty), 24);
        assert_eq!(g.to_move(), Mark::Cross);
    }

    #[test]
    fn start_with_new_size_invalidates_old_cursors() {
        let mut g = started(2, 2);
        let old = g
            .surface()
            .unwrap()
            .cursor(face(0), 0, 0, cubix_core::Vec2::new(1, 0))
            .unwrap();
        g.start(GameConfig::new(5, 4)).unwrap();
        assert_eq!(g.surface().unwrap().size(), 5);
        assert_eq!(
            g.surface().unwrap().read(&old),
            Err(SpaceError::StaleCursor)
        );
    }

    // ── Placement ───────────────────────────────────────────────

    #[test]
    fn single_mark_has_run_one() {
        let mut g = started(4, 4);
        let p = g.place_mark(face(2), 1, 2, Mark::Nought).unwrap();
        assert_eq!(p.run_length(), 1);
        assert!(!p.is_win());
        assert_eq!(g.cell_value(face(2), 1, 2), Ok(Cell::Marked(Mark::Nought)));
        assert_eq!(g.to_move(), Mark::Cross);
    }

    #[test]
    fn occupied_cell_is_rejected_every_time() {
        let mut g = started(4, 4);
        g.place_mark(face(0), 2, 2, Mark::Cross).unwrap();
        let before: Vec<Cell> = g.surface().unwrap().cells().to_vec();
        for mark in [Mark::Nought, Mark::Cross, Mark::Nought] {
            let p = g.place_mark(face(0), 2, 2, mark).unwrap();
            assert_eq!(p, Placement::Occupied);
            assert_eq!(p.run_length(), 0);
        }
        assert_eq!(g.surface().unwrap().cells(), &before[..]);
        assert_eq!(g.metrics().rejected_occupied, 3);
        assert_eq!(g.metrics().placements, 1);
        assert_eq!(g.to_move(), Mark::Nought);
    }

    #[test]
    fn out_of_range_coordinates_are_space_errors() {
        let mut g = started(3, 3);
        match g.place_mark(face(0), 3, 0, Mark::Cross) {
            Err(GameError::Space(SpaceError::Coord(CoordError::CoordOutOfRange { .. }))) => {}
            other => panic!("expected CoordOutOfRange, got {other:?}"),
        }
        assert_eq!(g.metrics().placements, 0);
    }

    #[test]
    fn row_of_win_length_wins() {
        let mut g = started(4, 4);
        for x in 0..3 {
            let p = g.place_mark(face(0), x, 0, Mark::Cross).unwrap();
            assert_eq!(p.run_length(), x + 1);
            assert!(!p.is_win());
        }
        let p = g.place_mark(face(0), 3, 0, Mark::Cross).unwrap();
        assert_eq!(p.run_length(), 4);
        assert!(p.is_win());
        assert_eq!(g.state(), GameState::Won);
        assert_eq!(g.current_winner(), Some(Mark::Cross));

        let w = g.winning_run().unwrap();
        assert_eq!(w.mark, Mark::Cross);
        assert_eq!(w.direction, Direction::Horizontal);
        assert_eq!(w.length, 4);
        assert_eq!(w.cursor.position().unwrap(), (face(0), 3, 0));
    }

    #[test]
    fn placing_after_win_is_refused() {
        let mut g = started(2, 2);
        g.place_mark(face(3), 0, 0, Mark::Nought).unwrap();
        g.place_mark(face(3), 0, 1, Mark::Nought).unwrap();
        assert_eq!(
            g.place_mark(face(3), 1, 1, Mark::Cross),
            Err(GameError::Finished {
                winner: Mark::Nought
            })
        );
        assert_eq!(g.cell_value(face(3), 1, 1), Ok(Cell::Empty));
    }

    #[test]
    fn opponent_marks_break_runs() {
        let mut g = started(4, 4);
        g.place_mark(face(0), 0, 0, Mark::Cross).unwrap();
        g.place_mark(face(0), 1, 0, Mark::Nought).unwrap();
        let p = g.place_mark(face(0), 2, 0, Mark::Cross).unwrap();
        assert_eq!(p.run_length(), 1);
    }

    #[test]
    fn metrics_track_scans() {
        let mut g = started(3, 5);
        g.place_mark(face(0), 1, 1, Mark::Cross).unwrap();
        let m = g.metrics();
        assert_eq!(m.placements, 1);
        // A lone mark stops every walk after one step.
        assert_eq!(m.cursor_steps, 8);
        assert_eq!(m.closed_loops, 0);
        assert_eq!(m.corner_terminations, 0);
    }

    #[test]
    fn error_display_and_source() {
        let e = GameError::Finished { winner: Mark::Cross };
        assert_eq!(e.to_string(), "game over: 'x' has won");
        assert!(e.source().is_none());
        let e = GameError::from(SpaceError::NullCursor);
        assert!(e.source().is_some());
    }
}
