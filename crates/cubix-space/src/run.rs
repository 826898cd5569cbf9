//! Run counting along straight lines on the cube surface.
//!
//! A run through a cell is measured by walking a cursor away from it in
//! both senses of a [`Direction`] until the line leaves the mark, hits a
//! cube corner, or comes back around to the starting cell. The last case
//! means the line is a closed loop fully covered by the mark; the walk
//! has then seen every cell of the loop and the opposite walk is skipped,
//! so no cell is counted twice.

use crate::cursor::Cursor;
use crate::direction::Direction;
use crate::error::SpaceError;
use crate::surface::Surface;
use cubix_core::{Cell, FaceId};
use smallvec::SmallVec;

/// Outcome of walking one way from a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunCount {
    /// Matching cells found, excluding the starting cell.
    pub matched: u32,
    /// Cursor advances performed.
    pub steps: u32,
    /// The walk returned to the starting cell.
    pub closed: bool,
    /// The walk ended by crossing a cube corner.
    pub corner: bool,
}

/// Walk from `start` while cells equal `cell`.
///
/// Starts one step past `start` and stops at the first non-matching cell,
/// at a corner crossing, or on returning to `start`. The cell under
/// `start` itself is not counted.
///
/// Returns [`SpaceError::NullCursor`] or [`SpaceError::StaleCursor`] if
/// `start` cannot be read on `surface`.
pub fn count(surface: &Surface, start: &Cursor, cell: Cell) -> Result<RunCount, SpaceError> {
    surface.read(start)?;
    let mut result = RunCount::default();
    let mut it = *start;
    loop {
        it.advance()?;
        result.steps += 1;
        if it.is_null() {
            result.corner = true;
            break;
        }
        if it == *start {
            result.closed = true;
            break;
        }
        if surface.read(&it)? != cell {
            break;
        }
        result.matched += 1;
    }
    Ok(result)
}

/// A run through one cell along one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Line direction.
    pub direction: Direction,
    /// Walk along the direction vector.
    pub forward: RunCount,
    /// Walk against the direction vector; `None` when the forward walk
    /// already closed the loop.
    pub backward: Option<RunCount>,
    /// Total run length including the starting cell.
    pub length: u32,
}

impl Run {
    /// Returns `true` if the run is a closed loop around the cube.
    pub fn is_closed(&self) -> bool {
        self.forward.closed
    }

    /// Returns `true` if either walk ended on a cube corner.
    pub fn hit_corner(&self) -> bool {
        self.forward.corner || self.backward.is_some_and(|b| b.corner)
    }

    /// Cursor advances performed by both walks.
    pub fn steps(&self) -> u32 {
        self.forward.steps + self.backward.map_or(0, |b| b.steps)
    }
}

/// Measure the run of the cell at `(face, x, y)` along `direction`.
pub fn measure(
    surface: &Surface,
    face: FaceId,
    x: u32,
    y: u32,
    direction: Direction,
) -> Result<Run, SpaceError> {
    let cell = surface.get(face, x, y)?;
    let start = surface.cursor(face, x, y, direction.vector())?;
    let forward = count(surface, &start, cell)?;
    if forward.closed {
        return Ok(Run {
            direction,
            forward,
            backward: None,
            length: forward.matched + 1,
        });
    }
    let backward = count(surface, &start.reversed(), cell)?;
    Ok(Run {
        direction,
        forward,
        backward: Some(backward),
        length: forward.matched + backward.matched + 1,
    })
}

/// Runs through one cell in all four directions.
#[derive(Clone, Debug)]
pub struct LineScan {
    runs: SmallVec<[Run; 4]>,
}

impl LineScan {
    /// Runs in [`Direction::ALL`] order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// The longest run; ties keep the earliest direction.
    pub fn best(&self) -> &Run {
        let mut best = &self.runs[0];
        for run in &self.runs[1..] {
            if run.length > best.length {
                best = run;
            }
        }
        best
    }

    /// Run along a specific direction.
    pub fn get(&self, direction: Direction) -> &Run {
        let i = Direction::ALL
            .iter()
            .position(|&d| d == direction)
            .unwrap_or(0);
        &self.runs[i]
    }

    /// Cursor advances performed across all four directions.
    pub fn steps(&self) -> u32 {
        self.runs.iter().map(Run::steps).sum()
    }
}

/// Measure the cell at `(face, x, y)` in every direction.
pub fn scan(surface: &Surface, face: FaceId, x: u32, y: u32) -> Result<LineScan, SpaceError> {
    let mut runs = SmallVec::new();
    for direction in Direction::ALL {
        runs.push(measure(surface, face, x, y, direction)?);
    }
    Ok(LineScan { runs })
}
