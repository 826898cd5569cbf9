//! Error types for surface access and cursor traversal.

use cubix_core::{CoordError, Vec2};
use std::error::Error;
use std::fmt;

/// Errors arising from surface construction, indexing or cursor use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A size, face or board coordinate is out of range.
    Coord(CoordError),
    /// A step direction with a component outside `{-1, 0, 1}`, or the
    /// zero vector.
    InvalidStep {
        /// The rejected step.
        step: Vec2,
    },
    /// The cursor crossed a cube corner and no longer points at a cell.
    NullCursor,
    /// The cursor was built against a surface that has since been reset
    /// or against a different surface.
    StaleCursor,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coord(e) => write!(f, "{e}"),
            Self::InvalidStep { step } => {
                write!(f, "invalid step {step}: components must be -1, 0 or 1 and not both 0")
            }
            Self::NullCursor => write!(f, "cursor is null (crossed a cube corner)"),
            Self::StaleCursor => write!(f, "cursor does not belong to the current surface"),
        }
    }
}

impl Error for SpaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoordError> for SpaceError {
    fn from(e: CoordError) -> Self {
        Self::Coord(e)
    }
}
