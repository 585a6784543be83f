//! Moore neighbourhood and the live-neighbour count

use super::cell::Cell;
use super::state::GameState;

/// Offsets of the eight surrounding cells, row by row
#[rustfmt::skip]
const OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// The cells around `cell`, all inactive. Only their positions matter.
/// There are eight of them except at the edges of `i64`, where positions
/// that cannot be represented are left out.
pub fn neighbors(cell: &Cell) -> impl Iterator<Item = Cell> {
    let origin = cell.coord();
    OFFSETS
        .into_iter()
        .filter_map(move |(dx, dy)| origin.offset(dx, dy))
        .map(|c| Cell::new(c.x, c.y))
}

/// Number of neighbours of `cell` that are tracked in `state` and alive.
/// Untracked positions count as dead.
pub fn active_neighbor_count(state: &GameState, cell: &Cell) -> u8 {
    neighbors(cell)
        .filter(|n| state.is_active(n.coord()))
        .count() as u8
}

/// Conway's B3/S23 rule
#[inline]
pub fn survives(was_active: bool, count: u8) -> bool {
    matches!((was_active, count), (true, 2) | (_, 3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::Coord;

    #[test]
    fn neighbors_surround_without_center() {
        let around: Vec<Cell> = neighbors(&Cell::with_state(10, -5, true)).collect();
        assert_eq!(around.len(), 8);
        assert!(around.iter().all(|n| !n.active));
        assert!(!around.iter().any(|n| n.coord() == Coord::new(10, -5)));
        for n in &around {
            assert!((n.x - 10).abs() <= 1 && (n.y + 5).abs() <= 1);
        }
    }

    #[test]
    fn corner_of_the_plane_has_three_neighbors() {
        let around: Vec<Cell> = neighbors(&Cell::new(i64::MAX, i64::MIN)).collect();
        assert_eq!(around.len(), 3);
        assert!(around.contains(&Cell::new(i64::MAX - 1, i64::MIN)));
        assert!(around.contains(&Cell::new(i64::MAX - 1, i64::MIN + 1)));
        assert!(around.contains(&Cell::new(i64::MAX, i64::MIN + 1)));
    }

    #[test]
    fn opposite_edges_are_not_adjacent() {
        let state = GameState::from_active([(i64::MAX, 0), (i64::MIN, 0), (i64::MIN + 1, 0)]);
        assert_eq!(active_neighbor_count(&state, &Cell::with_state(i64::MIN, 0, true)), 1);
        assert_eq!(active_neighbor_count(&state, &Cell::with_state(i64::MAX, 0, true)), 0);
    }

    #[test]
    fn count_ignores_inactive_and_missing() {
        let mut state = GameState::from_active([(0, 1), (1, 1), (5, 5)]);
        state.insert(Cell::new(-1, -1));
        assert_eq!(active_neighbor_count(&state, &Cell::new(0, 0)), 2);
        assert_eq!(active_neighbor_count(&state, &Cell::new(20, 20)), 0);
    }

    #[test]
    fn count_does_not_include_self() {
        let state = GameState::from_active([(0, 0)]);
        assert_eq!(active_neighbor_count(&state, &Cell::with_state(0, 0, true)), 0);
    }

    #[test]
    fn rule_table() {
        assert!(survives(true, 2));
        assert!(survives(true, 3));
        assert!(survives(false, 3));
        assert!(!survives(false, 2));
        assert!(!survives(true, 1));
        assert!(!survives(true, 4));
    }
}
