//! Game configuration, validation, and error types.
//!
//! [`GameConfig`] is the input to [`Game::start`](crate::Game::start).
//! [`validate()`](GameConfig::validate) checks it before any surface is
//! allocated, so a rejected configuration leaves the running game intact.

use std::error::Error;
use std::fmt;

use cubix_core::CoordError;
use cubix_space::Surface;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`GameConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The board size is not a valid surface edge length.
    Coord(CoordError),
    /// A win length of zero would end the game before the first mark.
    WinLengthZero,
    /// No straight line on the surface can hold a run this long.
    WinLengthTooLong {
        /// The configured win length.
        win_length: u32,
        /// Exclusive upper bound, `4 * size`.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coord(e) => write!(f, "board size: {e}"),
            Self::WinLengthZero => write!(f, "win length must be at least 1"),
            Self::WinLengthTooLong { win_length, max } => {
                write!(f, "win length {win_length} must be below {max}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoordError> for ConfigError {
    fn from(e: CoordError) -> Self {
        Self::Coord(e)
    }
}

// ── GameConfig ─────────────────────────────────────────────────────

/// Board size and win length for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Edge length of each face. Default: 4.
    pub size: u32,
    /// Run length that wins. Default: 4. Must be in `1..4 * size`.
    pub win_length: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 4,
            win_length: 4,
        }
    }
}

impl GameConfig {
    /// Shorthand for `GameConfig { size, win_length }`.
    pub fn new(size: u32, win_length: u32) -> Self {
        Self { size, win_length }
    }

    /// Replace the board size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Replace the win length.
    pub fn with_win_length(mut self, win_length: u32) -> Self {
        self.win_length = win_length;
        self
    }

    /// Check the size against the surface limits and the win length
    /// against the longest possible line.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Surface::validate_size(self.size)?;
        if self.win_length == 0 {
            return Err(ConfigError::WinLengthZero);
        }
        // Axis loops hold 4 * size cells; the bound is exclusive.
        let max = 4 * self.size;
        if self.win_length >= max {
            return Err(ConfigError::WinLengthTooLong {
                win_length: self.win_length,
                max,
            });
        }
        Ok(())
    }
}
