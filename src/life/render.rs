//! Render filter: hand every tracked cell to a renderer that may veto it
//!
//! A veto is not cosmetic. A cell the renderer rejects is removed from the
//! state that feeds the next transition, so a renderer that clips to its
//! viewport also stops the simulation outside of it.

use super::state::GameState;

/// What a renderer returned for a cell. Only an explicit `false` drops it.
pub trait Verdict {
    fn keeps(self) -> bool;
}

impl Verdict for () {
    fn keeps(self) -> bool {
        true
    }
}

impl Verdict for bool {
    fn keeps(self) -> bool {
        self
    }
}

impl Verdict for Option<bool> {
    fn keeps(self) -> bool {
        self != Some(false)
    }
}

/// Called once per tracked cell per generation, in unspecified order
pub trait Render {
    /// Returns `false` to remove the cell from the simulation
    fn render(&mut self, x: i64, y: i64, active: bool) -> bool;
}

impl<F, V> Render for F
where
    F: FnMut(i64, i64, bool) -> V,
    V: Verdict,
{
    fn render(&mut self, x: i64, y: i64, active: bool) -> bool {
        self(x, y, active).keeps()
    }
}

/// Renderer that draws nothing and keeps every cell
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepAll;

impl Render for KeepAll {
    fn render(&mut self, _x: i64, _y: i64, _active: bool) -> bool {
        true
    }
}

/// Pass each cell of `state` to `renderer` and return the cells it kept
pub fn render<R: Render + ?Sized>(state: &GameState, renderer: &mut R) -> GameState {
    state
        .iter()
        .filter(|cell| renderer.render(cell.x, cell.y, cell.active))
        .copied()
        .collect()
}
