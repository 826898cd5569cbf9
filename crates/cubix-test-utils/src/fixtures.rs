//! Reusable surface fixtures.
//!
//! - [`face`]: shorthand for a known-valid [`FaceId`].
//! - [`filled_surface`]: every cell set to one mark.
//! - [`lay_line`]: write a straight line of cells by walking a cursor,
//!   crossing faces exactly as run counting will.

use cubix_core::{Cell, FaceId, Mark, Vec2};
use cubix_space::{SpaceError, Surface};

/// Face `i`. Panics if `i >= 6`; only for literal face numbers in tests.
pub fn face(i: u8) -> FaceId {
    FaceId::new(i).unwrap_or_else(|e| panic!("fixture face: {e}"))
}

/// A surface of edge `size` with every cell marked `mark`.
pub fn filled_surface(size: u32, mark: Mark) -> Surface {
    Surface::new(size, Cell::Marked(mark)).unwrap_or_else(|e| panic!("fixture surface: {e}"))
}

/// Board cells written by [`lay_line`], in walking order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaidLine {
    pub cells: Vec<(FaceId, u32, u32)>,
}

impl LaidLine {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Distinct faces the line touches, in first-visit order.
    pub fn faces(&self) -> Vec<FaceId> {
        let mut out = Vec::new();
        for &(f, _, _) in &self.cells {
            if !out.contains(&f) {
                out.push(f);
            }
        }
        out
    }

    pub fn first(&self) -> Option<(FaceId, u32, u32)> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<(FaceId, u32, u32)> {
        self.cells.last().copied()
    }
}

/// Write `len` cells of `cell`, starting at `(face, x, y)` and walking a
/// cursor along `step`.
///
/// Returns [`SpaceError::NullCursor`] if the walk crosses a cube corner
/// before `len` cells are written; cells written so far stay written.
pub fn lay_line(
    surface: &mut Surface,
    face: FaceId,
    x: u32,
    y: u32,
    step: Vec2,
    len: u32,
    cell: Cell,
) -> Result<LaidLine, SpaceError> {
    let mut cursor = surface.cursor(face, x, y, step)?;
    let mut cells = Vec::with_capacity(len as usize);
    for i in 0..len {
        if i > 0 {
            cursor.advance()?;
        }
        surface.write(&cursor, cell)?;
        cells.push(cursor.position()?);
    }
    Ok(LaidLine { cells })
}
