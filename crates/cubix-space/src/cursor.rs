//! Traversal cursor that walks straight lines across face boundaries.

use crate::error::SpaceError;
use crate::geometry::{self, Crossing};
use cubix_core::{FaceId, SurfaceEpoch, Vec2};

/// A movable position on a [`Surface`](crate::Surface).
///
/// A cursor holds a face, a local point in the doubled, centred system,
/// and a doubled step vector. [`advance`](Cursor::advance) moves it one
/// cell along the step. When the step leaves the face through one edge the
/// cursor lands on the neighbouring face with point and step rotated so
/// the line stays straight; when it leaves through a corner the cursor
/// becomes *null* and stays null.
///
/// Cursors are plain `Copy` values. They do not borrow the surface: they
/// record its [`SurfaceEpoch`] and size, and the surface checks the epoch
/// on every [`read`](crate::Surface::read) or [`write`](crate::Surface::write).
///
/// Two cursors compare equal when they sit on the same face at the same
/// local point; the step is ignored. All null cursors are equal.
///
/// # Examples
///
/// ```
/// use cubix_core::{Cell, FaceId, Vec2};
/// use cubix_space::Surface;
///
/// let surface = Surface::new(3, Cell::Empty).unwrap();
/// let face = FaceId::new(0).unwrap();
///
/// // Walking right off face 0 lands on face 1.
/// let mut c = surface.cursor(face, 2, 1, Vec2::new(1, 0)).unwrap();
/// c.advance().unwrap();
/// assert_eq!(c.face(), Some(FaceId::new(1).unwrap()));
///
/// // A straight axis line closes after 4 * size steps.
/// let start = surface.cursor(face, 0, 1, Vec2::new(1, 0)).unwrap();
/// let mut walker = start;
/// for _ in 0..12 {
///     walker.advance().unwrap();
/// }
/// assert_eq!(walker, start);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    epoch: SurfaceEpoch,
    size: u32,
    face: Option<FaceId>,
    point: Vec2,
    step: Vec2,
}

impl Cursor {
    pub(crate) fn new(
        epoch: SurfaceEpoch,
        size: u32,
        face: FaceId,
        x: u32,
        y: u32,
        step: Vec2,
    ) -> Result<Self, SpaceError> {
        let unit = |v: i32| (-1..=1).contains(&v);
        if !unit(step.x) || !unit(step.y) || step.is_zero() {
            return Err(SpaceError::InvalidStep { step });
        }
        Ok(Self {
            epoch,
            size,
            face: Some(face),
            point: Vec2::new(geometry::to_local(x, size), geometry::to_local(y, size)),
            step: step * 2,
        })
    }

    /// Returns `true` once the cursor has crossed a corner or been
    /// [`invalidate`](Self::invalidate)d.
    pub fn is_null(&self) -> bool {
        self.face.is_none()
    }

    /// Make the cursor null.
    pub fn invalidate(&mut self) {
        self.face = None;
    }

    /// Current face, or `None` for a null cursor.
    pub fn face(&self) -> Option<FaceId> {
        self.face
    }

    /// Current local point in the doubled, centred system.
    pub fn point(&self) -> Vec2 {
        self.point
    }

    /// Current step in board units (each component -1, 0 or 1).
    ///
    /// Rotates as the cursor crosses onto differently oriented faces.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.step.x / 2, self.step.y / 2)
    }

    /// Epoch of the surface this cursor was built against.
    pub fn epoch(&self) -> SurfaceEpoch {
        self.epoch
    }

    /// The same position walking the opposite way.
    pub fn reversed(&self) -> Self {
        Self {
            step: -self.step,
            ..*self
        }
    }

    /// Board position `(face, x, y)` under the cursor.
    pub fn position(&self) -> Result<(FaceId, u32, u32), SpaceError> {
        let face = self.face.ok_or(SpaceError::NullCursor)?;
        Ok((
            face,
            geometry::to_board(self.point.x, self.size),
            geometry::to_board(self.point.y, self.size),
        ))
    }

    /// Linear surface index under the cursor.
    pub fn index(&self) -> Result<usize, SpaceError> {
        let (face, x, y) = self.position()?;
        let s = self.size as usize;
        Ok(face.index() * s * s + (y as usize) * s + x as usize)
    }

    /// Move one cell along the step.
    ///
    /// After the call the cursor may be null (corner crossing); check
    /// [`is_null`](Self::is_null) before using it again. Advancing a null
    /// cursor returns [`SpaceError::NullCursor`].
    pub fn advance(&mut self) -> Result<(), SpaceError> {
        let face = self.face.ok_or(SpaceError::NullCursor)?;
        let size = self.size as i32;
        self.point += self.step;
        let d = geometry::overflow_vector(self.point, size);
        match geometry::classify(d) {
            Crossing::Inside => {}
            Crossing::Corner => self.face = None,
            Crossing::Edge(t) => {
                self.face = Some(face.offset(t.face_offset));
                self.point -= d * (2 * size);
                self.point = t.rotation.apply(self.point);
                self.step = t.rotation.apply(self.step);
            }
        }
        Ok(())
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        match (self.face, other.face) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b && self.point == other.point,
            _ => false,
        }
    }
}

impl Eq for Cursor {}
