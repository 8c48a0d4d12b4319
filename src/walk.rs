//! Spiral walk simulation.
//!
//! The cursor starts at the origin heading right and turns to the next
//! direction of its [`Rotation`] whenever the cell it stands on pushes a
//! bound outward. Because it only turns on a freshly crossed bound, the walk
//! never steps on a cell twice.

use glam::IVec2;

use crate::log::debug;
use crate::types::{Bounds, Coord, CoordMap, Rotation, StepMap};

/// Lazy walk over `(step, coordinate)` pairs.
///
/// The iterator is unbounded; [`simulate`] takes the first `n + 1` items.
#[derive(Debug, Clone)]
pub struct Walk {
    rotation: Rotation,
    heading: usize,
    cursor: Coord,
    step: usize,
    bounds: Bounds,
}

impl Walk {
    pub fn new(rotation: Rotation) -> Self {
        Self {
            rotation,
            heading: 0,
            cursor: IVec2::ZERO,
            step: 0,
            bounds: Bounds::new(),
        }
    }

    /// Rectangle covering every coordinate yielded so far.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current unit step.
    pub fn heading(&self) -> Coord {
        self.rotation.direction(self.heading)
    }
}

impl Iterator for Walk {
    type Item = (usize, Coord);

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.step;
        let here = self.cursor;

        if self.bounds.expand_to(here) {
            self.heading = (self.heading + 1) % 4;
            debug!(step, x = here.x, y = here.y, "bound crossed, turning");
        }
        self.cursor = here + self.heading();
        self.step += 1;

        Some((step, here))
    }
}

/// Walk `n + 1` steps and return where each step landed plus the final bounds.
pub fn simulate(n: usize, rotation: Rotation) -> (StepMap, Bounds) {
    let mut walk = Walk::new(rotation);
    // `0..=n` yields n + 1 items even for `usize::MAX`. The walk has no size
    // hint, so nothing is reserved up front.
    let steps: StepMap = (0..=n)
        .zip(walk.by_ref())
        .map(|(_, (_, coord))| coord)
        .collect();

    (steps, walk.bounds())
}

/// Map each visited coordinate back to its step.
pub fn invert(steps: &StepMap) -> CoordMap {
    steps
        .iter()
        .enumerate()
        .map(|(step, coord)| (*coord, step))
        .collect()
}
