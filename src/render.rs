//! Text rendering of a walked spiral.
//!
//! Every cell of the bounding rectangle gets a field as wide as the largest
//! step number. Visited cells hold their step right-aligned; cells the walk
//! never reached are blank. Fields are joined by one space and every row ends
//! with a newline.

use std::fmt::{self, Write};

use glam::IVec2;

use crate::types::{Bounds, CoordMap, RowOrder};

/// Number of decimal digits in `n` (`0` has one).
pub fn digit_count(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Render rows from the largest Y down.
pub fn render(bounds: &Bounds, coords: &CoordMap, max_step: usize) -> String {
    render_rows(bounds, coords, max_step, RowOrder::TopDown)
}

/// Render rows in the given order.
pub fn render_rows(
    bounds: &Bounds,
    coords: &CoordMap,
    max_step: usize,
    order: RowOrder,
) -> String {
    let width = digit_count(max_step);
    // One field plus separator per cell, one newline per row.
    let capacity = bounds
        .width()
        .checked_mul(width + 1)
        .and_then(|row| row.checked_mul(bounds.height()))
        .unwrap_or(0);
    let mut out = String::with_capacity(capacity);
    write_rows(&mut out, bounds, coords, max_step, order)
        .expect("writing to a String never fails");
    out
}

/// Stream rows into any formatter sink.
pub fn write_rows<W: Write>(
    out: &mut W,
    bounds: &Bounds,
    coords: &CoordMap,
    max_step: usize,
    order: RowOrder,
) -> fmt::Result {
    let width = digit_count(max_step);
    let rows = bounds.min.y..=bounds.max.y;

    match order {
        RowOrder::TopDown => {
            for y in rows.rev() {
                write_row(out, bounds, coords, width, y)?;
            }
        }
        RowOrder::BottomUp => {
            for y in rows {
                write_row(out, bounds, coords, width, y)?;
            }
        }
    }
    Ok(())
}

fn write_row<W: Write>(
    out: &mut W,
    bounds: &Bounds,
    coords: &CoordMap,
    width: usize,
    y: i32,
) -> fmt::Result {
    for x in bounds.min.x..=bounds.max.x {
        if x > bounds.min.x {
            out.write_char(' ')?;
        }
        match coords.get(&IVec2::new(x, y)) {
            Some(step) => write!(out, "{step:>width$}")?,
            None => write!(out, "{:width$}", "")?,
        }
    }
    out.write_char('\n')
}
