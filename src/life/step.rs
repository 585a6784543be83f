//! One generation of Conway's rule over a padded state

use super::cell::Cell;
use super::pad::pad;
use super::rules::{active_neighbor_count, survives};
use super::state::GameState;

/// Apply B3/S23 to every tracked cell of `state` and pad the result.
///
/// Only cells that are alive now or were alive before are carried over;
/// dead cells that stay dead are dropped and the padder re-adds whichever
/// of them still matter.
pub fn next_state(state: &GameState) -> GameState {
    let next: GameState = state
        .iter()
        .filter_map(|cell| {
            let count = active_neighbor_count(state, cell);
            let was_active = cell.active;
            if count == 0 && !was_active {
                return None;
            }
            let active = survives(was_active, count);
            (active || was_active).then(|| Cell::with_state(cell.x, cell.y, active))
        })
        .collect();

    pad(&next)
}
