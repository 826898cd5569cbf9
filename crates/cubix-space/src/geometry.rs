//! Edge-crossing geometry of the cube net.
//!
//! Every face uses the doubled, centred local system: board cell `(x, y)`
//! sits at `(2x + 1 - size, 2y + 1 - size)` and the face boundary lies at
//! `±size`. After a step, the per-axis overflow past that boundary decides
//! whether the point stayed on the face, crossed one edge, or crossed a
//! corner. For an edge crossing, [`edge_transition`] is the single source
//! of truth for which face comes next and how the local axes turn.

use cubix_core::Vec2;

/// How far `v` lies past the face boundary at `±size`, or 0 if inside.
pub fn overflow(v: i32, size: i32) -> i32 {
    if v >= size {
        v - size
    } else if v <= -size {
        v + size
    } else {
        0
    }
}

/// Per-axis [`overflow`] of a local point.
pub fn overflow_vector(point: Vec2, size: i32) -> Vec2 {
    Vec2::new(overflow(point.x, size), overflow(point.y, size))
}

/// Map a board coordinate in `0..size` to its doubled, centred local value.
pub fn to_local(v: u32, size: u32) -> i32 {
    2 * v as i32 + 1 - size as i32
}

/// Inverse of [`to_local`].
pub fn to_board(v: i32, size: u32) -> u32 {
    ((v + size as i32 - 1) / 2) as u32
}

/// Quarter-turn rotation applied to points and steps on an edge crossing.
///
/// `(px, py)` maps to `(py * a, px * b)` with `a, b ∈ {-1, 1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    a: i32,
    b: i32,
}

impl Rotation {
    /// Apply the rotation to a point or step vector.
    pub fn apply(self, v: Vec2) -> Vec2 {
        Vec2::new(v.y * self.a, v.x * self.b)
    }

    /// The rotation that undoes `self`.
    pub fn inverse(self) -> Self {
        // (x, y) -> (y*a, x*b) swaps axes, so undoing it swaps the factors.
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

/// Result of stepping off a face across exactly one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeTransition {
    /// How many faces forward (mod 6) the neighbouring face lies.
    pub face_offset: u8,
    /// Re-orientation of local axes on the neighbouring face.
    pub rotation: Rotation,
}

/// Classification of an overflow vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// The point is still on the current face.
    Inside,
    /// The point left through one edge.
    Edge(EdgeTransition),
    /// The point left through both axes at once: a cube corner, where the
    /// neighbouring face is ambiguous.
    Corner,
}

/// Classify an overflow vector whose components lie in `{-1, 0, 1}`.
pub fn classify(d: Vec2) -> Crossing {
    debug_assert!(
        d.x.abs() <= 1 && d.y.abs() <= 1,
        "overflow {d} exceeds one cell"
    );
    match (d.x != 0, d.y != 0) {
        (false, false) => Crossing::Inside,
        (true, true) => Crossing::Corner,
        _ => match edge_transition(d) {
            Some(t) => Crossing::Edge(t),
            None => Crossing::Corner,
        },
    }
}

/// Neighbour face offset and axis rotation for a single-axis overflow.
///
/// Returns `None` unless exactly one component of `d` is `±1`.
///
/// The offset is `d.x + 2 * d.y`, with negative values folded to
/// `3 - offset`; this fixes the cyclic face numbering of the net (right
/// +1, up +2, left +4, down +5). The rotation uses `a = d.x + |d.y|` and
/// `b = |d.x| - d.y`.
pub fn edge_transition(d: Vec2) -> Option<EdgeTransition> {
    let single_axis = (d.x.abs() == 1 && d.y == 0) || (d.x == 0 && d.y.abs() == 1);
    if !single_axis {
        return None;
    }
    let mut number = d.x + 2 * d.y;
    if number < 0 {
        number = 3 - number;
    }
    Some(EdgeTransition {
        face_offset: number as u8,
        rotation: Rotation {
            a: d.x + d.y.abs(),
            b: d.x.abs() - d.y,
        },
    })
}
