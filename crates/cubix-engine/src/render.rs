//! ASCII rendering of the cube as an unfolded net.
//!
//! The net is built entirely from cursor walks, so it shows each face in
//! the orientation a run would see when crossing into it:
//!
//! ```text
//!        top
//! left  centre  right  opposite
//!       bottom
//! ```
//!
//! The horizontal band is one full axis loop through the centre face.

use cubix_core::{FaceId, Vec2};
use cubix_space::{SpaceError, Surface};

/// Draw the surface as a `3 * size` by `4 * size` block of cell glyphs
/// centred on `centre`.
///
/// Each line ends in `'\n'`; the first line is the top of the net, with
/// board `y` increasing upwards. Positions outside the net are spaces.
///
/// # Examples
///
/// ```
/// use cubix_core::{Cell, FaceId, Mark};
/// use cubix_engine::render::render_net;
/// use cubix_space::Surface;
///
/// let mut s = Surface::new(1, Cell::Empty).unwrap();
/// s.set(FaceId::new(0).unwrap(), 0, 0, Cell::Marked(Mark::Cross)).unwrap();
/// let net = render_net(&s, FaceId::new(0).unwrap()).unwrap();
/// assert_eq!(net, " -  \n-x--\n -  \n");
/// ```
pub fn render_net(surface: &Surface, centre: FaceId) -> Result<String, SpaceError> {
    let n = surface.size();
    let size = n as usize;
    let width = 4 * size;
    let height = 3 * size;
    // Row 0 is the bottom of the net.
    let mut grid = vec![vec![' '; width]; height];

    for y in 0..n {
        let mut c = surface.cursor(centre, 0, y, Vec2::new(1, 0))?;
        let row = &mut grid[size + y as usize];
        for col in 0..width {
            if col > 0 {
                c.advance()?;
            }
            row[(size + col) % width] = surface.read(&c)?.glyph();
        }
    }

    for x in 0..n {
        let col = size + x as usize;

        let mut down = surface.cursor(centre, x, 0, Vec2::new(0, -1))?;
        for j in 1..=size {
            down.advance()?;
            grid[size - j][col] = surface.read(&down)?.glyph();
        }

        let mut up = surface.cursor(centre, x, n - 1, Vec2::new(0, 1))?;
        for j in 1..=size {
            up.advance()?;
            grid[2 * size - 1 + j][col] = surface.read(&up)?.glyph();
        }
    }

    let mut out = String::with_capacity(height * (width + 1));
    for row in grid.iter().rev() {
        out.extend(row.iter());
        out.push('\n');
    }
    Ok(out)
}

/// Three-line map of the 1-based face numbers laid out as in
/// [`render_net`].
pub fn face_legend(centre: FaceId) -> String {
    let n = |k: u8| centre.offset(k).index() + 1;
    format!(
        " {}  \n{}{}{}{}\n {}  \n",
        n(2),
        n(4),
        n(0),
        n(1),
        n(3),
        n(5)
    )
}
