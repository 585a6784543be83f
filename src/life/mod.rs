//! Sparse Game of Life engine
//!
//! Only live cells and the dead cells that could be born next generation are
//! stored. Every step builds a fresh [`GameState`]: render filter, then
//! transition, then padding.

pub mod cell;
pub mod driver;
pub mod pad;
pub mod render;
pub mod rules;
pub mod state;
pub mod step;

pub use cell::{Cell, Coord};
pub use driver::{run, Flow, Generations, Limit, LoopControl, Pending, RunSummary, Simulation, UntilStable};
pub use pad::pad;
pub use render::{render, KeepAll, Render, Verdict};
pub use rules::{active_neighbor_count, neighbors};
pub use state::{Bounds, GameState};
pub use step::next_state;
