//! Value types shared by the walker and the renderer.
//!
//! Coordinates are geometric: X grows to the right, Y grows upward. Rows are
//! printed with the largest Y first unless [`RowOrder::BottomUp`] is asked for.

use std::collections::HashMap;

use glam::IVec2;

use crate::errors::UnknownTag;

/// A cell of the unbounded grid. Equality and hashing are by value.
pub type Coord = IVec2;

/// Coordinate visited at each step, indexed by step (`0..=n`).
pub type StepMap = Vec<Coord>;

/// Inverse of a [`StepMap`]: which step landed on a given coordinate.
pub type CoordMap = HashMap<Coord, usize>;

/// Which way the spiral turns each time it crosses a bound.
///
/// Named after how the spiral looks in the default top-down output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Clockwise,
    CounterClockwise,
}

const CLOCKWISE: [Coord; 4] = [
    IVec2::new(1, 0),
    IVec2::new(0, -1),
    IVec2::new(-1, 0),
    IVec2::new(0, 1),
];

const COUNTER_CLOCKWISE: [Coord; 4] = [
    IVec2::new(1, 0),
    IVec2::new(0, 1),
    IVec2::new(-1, 0),
    IVec2::new(0, -1),
];

impl Rotation {
    /// The four unit steps in the order the walk cycles through them.
    /// Both orders start heading right.
    pub const fn directions(self) -> [Coord; 4] {
        match self {
            Rotation::Clockwise => CLOCKWISE,
            Rotation::CounterClockwise => COUNTER_CLOCKWISE,
        }
    }

    /// Direction at `index`, wrapping around after the fourth entry.
    #[inline]
    pub fn direction(self, index: usize) -> Coord {
        self.directions()[index % 4]
    }
}

/// Order in which grid rows are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowOrder {
    /// Largest Y first, so the output reads like a y-up plot.
    #[default]
    TopDown,
    /// Smallest Y first.
    BottomUp,
}

/// Smallest axis-aligned rectangle containing every coordinate seen so far.
///
/// Starts as the single cell at the origin and only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow the rectangle to cover `coord`, moving at most one edge.
    ///
    /// Edges are checked in the order max x, max y, min x, min y and only the
    /// first one `coord` lies strictly outside of is moved. Returns whether an
    /// edge moved.
    pub fn expand_to(&mut self, coord: Coord) -> bool {
        if coord.x > self.max.x {
            self.max.x = coord.x;
        } else if coord.y > self.max.y {
            self.max.y = coord.y;
        } else if coord.x < self.min.x {
            self.min.x = coord.x;
        } else if coord.y < self.min.y {
            self.min.y = coord.y;
        } else {
            return false;
        }
        true
    }

    /// Whether `coord` lies inside the rectangle, edges included.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.cmpge(self.min).all() && coord.cmple(self.max).all()
    }

    /// Number of columns covered.
    pub fn width(&self) -> usize {
        (self.max.x - self.min.x) as usize + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> usize {
        (self.max.y - self.min.y) as usize + 1
    }
}

/// Layout knobs for a rendered spiral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpiralOptions {
    pub rotation: Rotation,
    pub row_order: RowOrder,
}

impl SpiralOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    /// Build options from short tags: `cw`, `ccw`, `top-down`, `bottom-up`.
    ///
    /// Fixture files name their layout this way, e.g. `24.ccw.bottom-up.txt`.
    /// Later tags override earlier ones.
    pub fn from_tags<'a, I>(tags: I) -> Result<Self, UnknownTag>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().try_fold(Self::default(), |options, tag| {
            Ok(match tag {
                "cw" => options.rotation(Rotation::Clockwise),
                "ccw" => options.rotation(Rotation::CounterClockwise),
                "top-down" => options.row_order(RowOrder::TopDown),
                "bottom-up" => options.row_order(RowOrder::BottomUp),
                other => return Err(UnknownTag { tag: other.to_string() }),
            })
        })
    }
}
