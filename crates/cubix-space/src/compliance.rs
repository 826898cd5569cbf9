//! Traversal compliance test helpers.
//!
//! These functions verify that a surface and its cursors satisfy the
//! geometric invariants every size must uphold. Reused by the surface
//! tests across a range of edge lengths.

use crate::surface::Surface;
use cubix_core::{FaceId, Vec2};
use indexmap::IndexSet;

const AXES: [Vec2; 4] = [
    Vec2::new(0, 1),
    Vec2::new(1, 0),
    Vec2::new(0, -1),
    Vec2::new(-1, 0),
];

const DIAGONALS: [Vec2; 4] = [
    Vec2::new(1, 1),
    Vec2::new(1, -1),
    Vec2::new(-1, 1),
    Vec2::new(-1, -1),
];

fn all_cells(surface: &Surface) -> Vec<(FaceId, u32, u32)> {
    (0..surface.cell_count())
        .filter_map(|i| surface.position_of(i))
        .collect()
}

/// Assert that `index_of` and `position_of` are mutually inverse and
/// cover every cell exactly once.
pub fn assert_index_bijection(surface: &Surface) {
    let cells = all_cells(surface);
    assert_eq!(cells.len(), surface.cell_count());
    let mut seen = IndexSet::new();
    for &(face, x, y) in &cells {
        let i = surface.index_of(face, x, y).unwrap();
        assert_eq!(surface.position_of(i), Some((face, x, y)));
        assert!(seen.insert(i), "index {i} produced twice");
    }
    assert_eq!(seen.len(), surface.cell_count());
}

/// Assert that a single step along any axis can be undone by reversing
/// the cursor and stepping once more.
pub fn assert_steps_reversible(surface: &Surface) {
    for (face, x, y) in all_cells(surface) {
        for step in AXES {
            let start = surface.cursor(face, x, y, step).unwrap();
            let mut c = start;
            c.advance().unwrap();
            let mut back = c.reversed();
            back.advance().unwrap();
            assert_eq!(
                back, start,
                "step {step} from ({face}, {x}, {y}) is not reversible"
            );
        }
    }
}

/// Assert that every axis line through every cell closes after exactly
/// `4 * size` steps and visits `4 * size` distinct cells.
pub fn assert_axis_loops_close(surface: &Surface) {
    let len = 4 * surface.size();
    for (face, x, y) in all_cells(surface) {
        for step in AXES {
            let start = surface.cursor(face, x, y, step).unwrap();
            let mut c = start;
            let mut visited = IndexSet::new();
            visited.insert(start.index().unwrap());
            for _ in 1..len {
                c.advance().unwrap();
                assert!(visited.insert(c.index().unwrap()), "axis loop revisits a cell");
            }
            c.advance().unwrap();
            assert_eq!(c, start, "axis loop from ({face}, {x}, {y}) does not close");
        }
    }
}

/// Assert that every face has four distinct edge neighbours, none of which
/// is itself or its opposite face.
pub fn assert_face_neighbours_distinct(surface: &Surface) {
    let last = surface.size() - 1;
    for face in FaceId::ALL {
        let exits = [
            (last, 0, Vec2::new(1, 0)),
            (0, last, Vec2::new(0, 1)),
            (0, 0, Vec2::new(-1, 0)),
            (0, 0, Vec2::new(0, -1)),
        ];
        let mut neighbours = IndexSet::new();
        for (x, y, step) in exits {
            let mut c = surface.cursor(face, x, y, step).unwrap();
            c.advance().unwrap();
            let next = c.face().unwrap();
            assert_ne!(next, face);
            assert_ne!(next, face.opposite());
            neighbours.insert(next);
        }
        assert_eq!(neighbours.len(), 4, "face {face} neighbours {neighbours:?}");
    }
}

/// Assert that diagonal walks either reach a corner or close within
/// `6 * size` steps, so run counting always terminates.
pub fn assert_diagonal_walks_terminate(surface: &Surface) {
    let bound = 6 * surface.size();
    for (face, x, y) in all_cells(surface) {
        for step in DIAGONALS {
            let start = surface.cursor(face, x, y, step).unwrap();
            let mut c = start;
            let mut ended = false;
            for _ in 0..bound {
                c.advance().unwrap();
                if c.is_null() || c == start {
                    ended = true;
                    break;
                }
            }
            assert!(ended, "diagonal from ({face}, {x}, {y}) step {step} never ends");
        }
    }
}

/// Run all compliance checks on a surface.
pub fn run_full_compliance(surface: &Surface) {
    assert_index_bijection(surface);
    assert_steps_reversible(surface);
    assert_axis_loops_close(surface);
    assert_face_neighbours_distinct(surface);
    assert_diagonal_walks_terminate(surface);
}
