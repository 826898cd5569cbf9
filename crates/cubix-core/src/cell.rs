//! Cell states and player marks.

use crate::error::ParseMarkError;
use std::fmt;
use std::str::FromStr;

/// A mark placed by one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The first player's mark, drawn as `x`.
    Cross,
    /// The second player's mark, drawn as `o`.
    Nought,
}

impl Mark {
    /// The other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Self::Cross => Self::Nought,
            Self::Nought => Self::Cross,
        }
    }

    /// Single-character glyph used by the text front end.
    pub fn glyph(self) -> char {
        match self {
            Self::Cross => 'x',
            Self::Nought => 'o',
        }
    }

    /// Parse a glyph back into a mark. Case-insensitive.
    pub fn from_glyph(c: char) -> Result<Self, ParseMarkError> {
        match c.to_ascii_lowercase() {
            'x' => Ok(Self::Cross),
            'o' => Ok(Self::Nought),
            _ => Err(ParseMarkError {
                input: c.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Mark {
    type Err = ParseMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_glyph(c),
            _ => Err(ParseMarkError {
                input: s.to_string(),
            }),
        }
    }
}

/// State of one cell on the cube surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Occupied by a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns `true` if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(m) => Some(m),
        }
    }

    /// Single-character glyph: `-` for empty, otherwise the mark's glyph.
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '-',
            Self::Marked(m) => m.glyph(),
        }
    }
}

impl From<Mark> for Cell {
    fn from(m: Mark) -> Self {
        Self::Marked(m)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_swaps() {
        assert_eq!(Mark::Cross.opponent(), Mark::Nought);
        assert_eq!(Mark::Nought.opponent(), Mark::Cross);
    }

    #[test]
    fn glyphs() {
        assert_eq!(Cell::Empty.glyph(), '-');
        assert_eq!(Cell::from(Mark::Cross).glyph(), 'x');
        assert_eq!(Cell::from(Mark::Nought).to_string(), "o");
    }

    #[test]
    fn parse_marks() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::Cross));
        assert_eq!("O".parse::<Mark>(), Ok(Mark::Nought));
        assert!("xo".parse::<Mark>().is_err());
        assert!("".parse::<Mark>().is_err());
        assert_eq!(
            Mark::from_glyph('-'),
            Err(ParseMarkError {
                input: "-".to_string()
            })
        );
    }

    #[test]
    fn cell_accessors() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::default().mark(), None);
        let c = Cell::Marked(Mark::Nought);
        assert!(!c.is_empty());
        assert_eq!(c.mark(), Some(Mark::Nought));
    }
}
