//! The four canonical line directions.

use cubix_core::Vec2;
use std::fmt;

/// A line direction through a cell. Each covers both senses: a run along
/// `Horizontal` extends to the left and to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Step `(0, 1)`.
    Vertical,
    /// Step `(1, 0)`.
    Horizontal,
    /// Step `(1, 1)`.
    Diagonal,
    /// Step `(1, -1)`.
    AntiDiagonal,
}

impl Direction {
    /// All directions in scan order. Ties between equally long runs are
    /// resolved in favour of the earlier entry.
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Forward step vector in board units.
    pub fn vector(self) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(0, 1),
            Self::Horizontal => Vec2::new(1, 0),
            Self::Diagonal => Vec2::new(1, 1),
            Self::AntiDiagonal => Vec2::new(1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Diagonal => "diagonal",
            Self::AntiDiagonal => "anti-diagonal",
        };
        f.write_str(name)
    }
}
