//! Sparse game state: only live cells and the border that could come alive

use super::cell::{Cell, Coord};
use std::collections::hash_map::{self, HashMap};

/// Mapping from position to tracked cell.
///
/// A position missing from the map is an inactive cell with no special
/// significance. Equality compares both key sets and every cell field, so
/// it is independent of insertion or iteration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    cells: HashMap<Coord, Cell>,
}

/// Inclusive bounding box of the live cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an unpadded state where every listed position is alive.
    /// Repeated positions collapse into one cell.
    pub fn from_active<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let cells = positions
            .into_iter()
            .map(|(x, y)| (Coord::new(x, y), Cell::with_state(x, y, true)))
            .collect();
        Self { cells }
    }

    /// Insert a cell, replacing whatever was tracked at its position
    pub fn insert(&mut self, cell: Cell) -> Option<Cell> {
        self.cells.insert(cell.coord(), cell)
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// True if a live cell is tracked at `coord`
    pub fn is_active(&self, coord: Coord) -> bool {
        self.cells.get(&coord).is_some_and(|c| c.active)
    }

    /// Number of tracked cells, live and border
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tracked cells in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values()
    }

    pub fn active_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values().filter(|c| c.active)
    }

    pub fn population(&self) -> usize {
        self.active_cells().count()
    }

    /// Live positions sorted by row then column
    pub fn active_coords(&self) -> Vec<Coord> {
        let mut coords: Vec<Coord> = self.active_cells().map(Cell::coord).collect();
        coords.sort_by_key(|c| (c.y, c.x));
        coords
    }

    /// Bounding box of the live cells, `None` when nothing is alive
    pub fn bounds(&self) -> Option<Bounds> {
        let mut live = self.active_cells();
        let first = live.next()?.coord();
        let mut bounds = Bounds { min: first, max: first };
        for cell in live {
            bounds.min.x = bounds.min.x.min(cell.x);
            bounds.min.y = bounds.min.y.min(cell.y);
            bounds.max.x = bounds.max.x.max(cell.x);
            bounds.max.y = bounds.max.y.max(cell.y);
        }
        Some(bounds)
    }

    /// Padded copy of this state, see [`pad`](super::pad::pad)
    pub fn pad(&self) -> Self {
        super::pad::pad(self)
    }

    /// Next generation, already padded. See [`next_state`](super::step::next_state)
    pub fn next_state(&self) -> Self {
        super::step::next_state(self)
    }
}

impl FromIterator<Cell> for GameState {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().map(|c| (c.coord(), c)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a GameState {
    type Item = &'a Cell;
    type IntoIter = hash_map::Values<'a, Coord, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.values()
    }
}
