//! Argument errors shared across the workspace.
//!
//! These are the "invalid argument" kind: the caller handed in a size,
//! face or coordinate outside the valid range. They originate at the
//! boundary (often from user input) and are reported, never panicked on.

use std::error::Error;
use std::fmt;

/// A size, face or board coordinate outside its valid range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoordError {
    /// Attempted to build a surface with edge length zero.
    InvalidSize,
    /// Edge length exceeds the supported maximum.
    SizeTooLarge {
        /// The requested edge length.
        size: u32,
        /// Largest supported edge length.
        max: u32,
    },
    /// Face index outside `0..6`.
    FaceOutOfRange {
        /// The offending face index.
        face: u32,
    },
    /// Board coordinate outside `0..size` on at least one axis.
    CoordOutOfRange {
        /// Requested column.
        x: u32,
        /// Requested row.
        y: u32,
        /// Current edge length.
        size: u32,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize => write!(f, "board size must be at least 1"),
            Self::SizeTooLarge { size, max } => {
                write!(f, "board size {size} exceeds maximum of {max}")
            }
            Self::FaceOutOfRange { face } => {
                write!(f, "face {face} out of range: expected 0..6")
            }
            Self::CoordOutOfRange { x, y, size } => {
                write!(f, "cell ({x}, {y}) out of range: [0, {size}) x [0, {size})")
            }
        }
    }
}

impl Error for CoordError {}

/// A string that does not name a player mark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMarkError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseMarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mark '{}': expected 'x' or 'o'", self.input)
    }
}

impl Error for ParseMarkError {}
