//! Flat cell storage for the six faces of the cube.

use crate::cursor::Cursor;
use crate::error::SpaceError;
use cubix_core::{Cell, CoordError, FaceId, SurfaceEpoch, Vec2};

/// The six `size × size` faces of the cube, stored contiguously.
///
/// Cell `(face, x, y)` lives at linear index `face * size² + y * size + x`.
/// The surface is the sole owner of board state; it knows nothing about
/// turns or rules and is mutated only through [`set`](Surface::set) and
/// [`write`](Surface::write).
///
/// Every construction and every [`reset`](Surface::reset) assigns a fresh
/// [`SurfaceEpoch`]. Cursors remember the epoch they were built against,
/// and [`read`](Surface::read)/[`write`](Surface::write) reject cursors
/// from any other epoch with [`SpaceError::StaleCursor`].
///
/// # Examples
///
/// ```
/// use cubix_core::{Cell, FaceId, Mark};
/// use cubix_space::Surface;
///
/// let mut surface = Surface::new(3, Cell::Empty).unwrap();
/// assert_eq!(surface.cell_count(), 54);
///
/// let face = FaceId::new(2).unwrap();
/// surface.set(face, 1, 2, Cell::Marked(Mark::Cross)).unwrap();
/// assert_eq!(surface.get(face, 1, 2).unwrap(), Cell::Marked(Mark::Cross));
/// assert_eq!(surface.index_of(face, 1, 2).unwrap(), 2 * 9 + 2 * 3 + 1);
/// ```
#[derive(Debug, Clone)]
pub struct Surface {
    size: u32,
    cells: Vec<Cell>,
    epoch: SurfaceEpoch,
}

impl Surface {
    /// Largest supported edge length. Keeps doubled local coordinates and
    /// the cell count comfortably inside `i32`/`usize`.
    pub const MAX_SIZE: u32 = 4096;

    /// Check an edge length without allocating.
    ///
    /// Returns `Err(CoordError::InvalidSize)` for 0 and
    /// `Err(CoordError::SizeTooLarge)` above [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn validate_size(size: u32) -> Result<(), CoordError> {
        if size == 0 {
            return Err(CoordError::InvalidSize);
        }
        if size > Self::MAX_SIZE {
            return Err(CoordError::SizeTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(())
    }

    /// Allocate `6 * size * size` cells, all set to `fill`.
    pub fn new(size: u32, fill: Cell) -> Result<Self, SpaceError> {
        Self::validate_size(size)?;
        Ok(Self {
            size,
            cells: vec![fill; Self::total_cells(size)],
            epoch: SurfaceEpoch::next(),
        })
    }

    /// Re-allocate in place with a new size, refilling every cell.
    ///
    /// All outstanding cursors become stale. On error the surface is
    /// left untouched.
    pub fn reset(&mut self, size: u32, fill: Cell) -> Result<(), SpaceError> {
        Self::validate_size(size)?;
        self.size = size;
        self.cells.clear();
        self.cells.resize(Self::total_cells(size), fill);
        self.epoch = SurfaceEpoch::next();
        Ok(())
    }

    fn total_cells(size: u32) -> usize {
        let s = size as usize;
        FaceId::COUNT as usize * s * s
    }

    /// Edge length of every face.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Cells per face (`size²`).
    pub fn face_area(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Total number of cells (`6 * size²`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Current epoch; changes on every [`reset`](Self::reset).
    pub fn epoch(&self) -> SurfaceEpoch {
        self.epoch
    }

    /// All cells in linear index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    fn check_coord(&self, x: u32, y: u32) -> Result<(), CoordError> {
        if x >= self.size || y >= self.size {
            return Err(CoordError::CoordOutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Linear index of a board cell.
    pub fn index_of(&self, face: FaceId, x: u32, y: u32) -> Result<usize, SpaceError> {
        self.check_coord(x, y)?;
        let s = self.size as usize;
        Ok(face.index() * s * s + (y as usize) * s + x as usize)
    }

    /// Board cell at a linear index; the inverse of [`index_of`](Self::index_of).
    ///
    /// Returns `None` if `index >= cell_count()`.
    pub fn position_of(&self, index: usize) -> Option<(FaceId, u32, u32)> {
        if index >= self.cells.len() {
            return None;
        }
        let s = self.size as usize;
        let area = s * s;
        let face = FaceId::ALL[index / area];
        let rem = index % area;
        Some((face, (rem % s) as u32, (rem / s) as u32))
    }

    /// Read a board cell.
    pub fn get(&self, face: FaceId, x: u32, y: u32) -> Result<Cell, SpaceError> {
        let i = self.index_of(face, x, y)?;
        Ok(self.cells[i])
    }

    /// Overwrite a board cell.
    pub fn set(&mut self, face: FaceId, x: u32, y: u32, cell: Cell) -> Result<(), SpaceError> {
        let i = self.index_of(face, x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Build a cursor at a board cell that advances by `step`.
    ///
    /// `step` components must each be -1, 0 or 1, and not both 0.
    pub fn cursor(&self, face: FaceId, x: u32, y: u32, step: Vec2) -> Result<Cursor, SpaceError> {
        self.check_coord(x, y)?;
        Cursor::new(self.epoch, self.size, face, x, y, step)
    }

    fn cursor_index(&self, cursor: &Cursor) -> Result<usize, SpaceError> {
        if cursor.epoch() != self.epoch {
            return Err(SpaceError::StaleCursor);
        }
        cursor.index()
    }

    /// Read the cell under a cursor.
    pub fn read(&self, cursor: &Cursor) -> Result<Cell, SpaceError> {
        let i = self.cursor_index(cursor)?;
        Ok(self.cells[i])
    }

    /// Overwrite the cell under a cursor.
    pub fn write(&mut self, cursor: &Cursor, cell: Cell) -> Result<(), SpaceError> {
        let i = self.cursor_index(cursor)?;
        self.cells[i] = cell;
        Ok(())
    }
}
