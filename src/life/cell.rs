//! Cells and the coordinate key they are stored under

use serde::Serialize;

/// Position of a cell on the unbounded plane.
///
/// Used as the key of a [`GameState`](super::GameState). Two cells at the
/// same position always share a key and distinct positions never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`, `None` past the edges of `i64`
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// A single tracked cell: position plus whether it is alive this generation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
    pub active: bool,
}

impl Cell {
    /// Inactive cell at `(x, y)`
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y, active: false }
    }

    pub const fn with_state(x: i64, y: i64, active: bool) -> Self {
        Self { x, y, active }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}
