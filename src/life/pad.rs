//! Padding: surround live cells with the dead cells that may be born next
//!
//! A dead cell needs exactly three live neighbours to be born, so only dead
//! cells touched by at least two live cells are worth tracking. A padded
//! glider looks like this (`x` live, `_` tracked dead):
//!
//! ```text
//!       x _
//!   _ _ x _
//!   x x x _
//!   _ _ _
//! ```
//!
//! Cost scales with the live population and its border, never with a
//! bounding box.

use super::cell::Coord;
use super::rules::neighbors;
use super::state::GameState;
use std::collections::HashSet;

/// Copy of `state` plus every untracked position with two or more live
/// neighbours, added as an inactive cell.
pub fn pad(state: &GameState) -> GameState {
    let mut padded = state.clone();
    let mut touched_once: HashSet<Coord> = HashSet::new();

    for cell in state.active_cells() {
        for neighbor in neighbors(cell) {
            let coord = neighbor.coord();
            if padded.contains(coord) {
                continue;
            }
            // second distinct live cell touching this position
            if !touched_once.insert(coord) {
                padded.insert(neighbor);
            }
        }
    }

    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::Cell;

    #[test]
    fn lone_cell_gets_no_border() {
        let padded = pad(&GameState::from_active([(0, 0)]));
        assert_eq!(padded.len(), 1);
    }

    #[test]
    fn pair_shares_a_border() {
        // (0,0) and (1,0) both touch the columns x=0..1 above and below
        let padded = pad(&GameState::from_active([(0, 0), (1, 0)]));
        for c in [(0, -1), (1, -1), (0, 1), (1, 1)] {
            let cell = padded.get(Coord::new(c.0, c.1)).unwrap();
            assert!(!cell.active);
        }
        assert!(!padded.contains(Coord::new(-1, 0)));
        assert!(!padded.contains(Coord::new(2, 0)));
        assert_eq!(padded.len(), 6);
    }

    #[test]
    fn glider_matches_documented_shape() {
        let glider = GameState::from_active([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let padded = pad(&glider);
        assert_eq!(padded.population(), 5);
        // every tracked dead cell touches at least two live ones
        for cell in padded.iter().filter(|c| !c.active) {
            let live = crate::life::rules::active_neighbor_count(&padded, cell);
            assert!(live >= 2, "{cell:?} has {live} live neighbours");
        }
        assert!(padded.contains(Coord::new(3, 2)));
        assert!(!padded.contains(Coord::new(-1, 3)));
    }

    #[test]
    fn existing_cells_are_kept_as_is() {
        let mut state = GameState::from_active([(0, 0), (2, 0)]);
        state.insert(Cell::new(1, 0));
        let padded = pad(&state);
        assert_eq!(padded.get(Coord::new(1, 0)), Some(&Cell::new(1, 0)));
        assert!(padded.contains(Coord::new(1, 1)));
        assert!(padded.contains(Coord::new(1, -1)));
    }

    #[test]
    fn padding_twice_keeps_live_set() {
        let state = GameState::from_active([(0, 0), (1, 0), (2, 0), (2, -1), (1, -2)]);
        let once = pad(&state);
        let twice = pad(&once);
        assert_eq!(once.active_coords(), twice.active_coords());
        assert_eq!(once, twice);
    }
}
