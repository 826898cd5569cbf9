//! Strongly-typed identifiers: cube faces and surface epochs.

use crate::error::CoordError;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one of the six faces of the cube.
///
/// Faces are numbered `0..6` in the cyclic order that the edge-crossing
/// rule relies on: the four neighbours of face `f` are `f+1`, `f+2`,
/// `f+4` and `f+5` (mod 6), and `f+3` is the opposite face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(u8);

impl FaceId {
    /// Number of faces on a cube.
    pub const COUNT: u8 = 6;

    /// All six faces in index order.
    pub const ALL: [FaceId; 6] = [
        FaceId(0),
        FaceId(1),
        FaceId(2),
        FaceId(3),
        FaceId(4),
        FaceId(5),
    ];

    /// Create a face identifier.
    ///
    /// Returns `Err(CoordError::FaceOutOfRange)` if `index >= 6`.
    pub fn new(index: u8) -> Result<Self, CoordError> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(CoordError::FaceOutOfRange {
                face: u32::from(index),
            })
        }
    }

    /// Create a face identifier from an arbitrary integer, as received from
    /// user input.
    pub fn from_u32(index: u32) -> Result<Self, CoordError> {
        u8::try_from(index)
            .ok()
            .filter(|&i| i < Self::COUNT)
            .map(Self)
            .ok_or(CoordError::FaceOutOfRange { face: index })
    }

    /// The raw face index in `0..6`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The face `offset` positions further along the cyclic numbering.
    pub fn offset(self, offset: u8) -> Self {
        Self((self.0 + offset % Self::COUNT) % Self::COUNT)
    }

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Self {
        self.offset(3)
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for FaceId {
    type Error = CoordError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

/// Counter for unique [`SurfaceEpoch`] allocation.
static SURFACE_EPOCH_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of one surface allocation.
///
/// Allocated from a monotonic atomic counter via [`SurfaceEpoch::next`].
/// A surface takes a fresh epoch when it is created and every time it is
/// reset, so a cursor that remembers the epoch it was built against can
/// be rejected once the storage behind it has been re-sized or cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceEpoch(u64);

impl SurfaceEpoch {
    /// Allocate a fresh, unique epoch.
    ///
    /// Each call returns a value never returned before within this
    /// process. Thread-safe.
    pub fn next() -> Self {
        Self(SURFACE_EPOCH_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SurfaceEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
