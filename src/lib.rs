//! Number spirals rendered as text.
//!
//! The integers `0..=n` are laid on a grid one step at a time, starting at
//! the origin and turning each time the walk pushes past the area covered so
//! far. The grid is then printed with every number right-aligned to the width
//! of `n`:
//!
//! ```
//! assert_eq!(
//!     numspiral::spiral(6),
//!     "6    \n5 0 1\n4 3 2\n",
//! );
//! ```

pub mod cli;
pub mod errors;
mod log;
pub mod render;
pub mod types;
pub mod walk;

use std::io;

pub use errors::{ArgsError, UnknownTag};
pub use types::{Bounds, Coord, CoordMap, Rotation, RowOrder, SpiralOptions, StepMap};
pub use walk::{Walk, invert, simulate};

/// Render the spiral for `n` with default options (clockwise, top-down).
pub fn spiral(n: usize) -> String {
    spiral_with(n, &SpiralOptions::default())
}

/// Render the spiral for `n`.
pub fn spiral_with(n: usize, options: &SpiralOptions) -> String {
    let (steps, bounds) = simulate(n, options.rotation);
    let coords = invert(&steps);
    render::render_rows(&bounds, &coords, n, options.row_order)
}

/// Render the spiral for `n` into `out` with a single write.
pub fn write_spiral<W: io::Write>(out: &mut W, n: usize, options: &SpiralOptions) -> io::Result<()> {
    out.write_all(spiral_with(n, options).as_bytes())?;
    out.flush()
}

/// Render the spiral for `n` to standard output.
pub fn print_spiral(n: usize, options: &SpiralOptions) -> io::Result<()> {
    write_spiral(&mut io::stdout().lock(), n, options)
}
