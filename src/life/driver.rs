//! Driving the simulation: render, transition, compare, then ask whether to go on
//!
//! The loop never recurses. [`run`] asks a [`LoopControl`] after every
//! generation. Callers that need to decide later (a frame clock, a key
//! press) use [`Simulation::step`] and hold on to the [`Pending`]
//! continuation until they are ready; dropping it halts the run for good.

use super::render::{render, Render};
use super::state::GameState;
use tracing::{debug, info};

/// Decision taken after each generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// Policy consulted once per generation with whether the state changed
pub trait LoopControl {
    fn decide(&mut self, changed: bool) -> Flow;
}

impl<F> LoopControl for F
where
    F: FnMut(bool) -> Flow,
{
    fn decide(&mut self, changed: bool) -> Flow {
        self(changed)
    }
}

/// Keep going while something changes
#[derive(Clone, Copy, Debug, Default)]
pub struct UntilStable;

impl LoopControl for UntilStable {
    fn decide(&mut self, changed: bool) -> Flow {
        if changed {
            Flow::Continue
        } else {
            Flow::Halt
        }
    }
}

/// Wraps another policy and halts once `max_steps` generations were computed
#[derive(Clone, Debug)]
pub struct Limit<L> {
    inner: L,
    max_steps: u64,
    steps: u64,
}

impl<L: LoopControl> Limit<L> {
    pub fn new(inner: L, max_steps: u64) -> Self {
        Self { inner, max_steps, steps: 0 }
    }
}

impl<L: LoopControl> LoopControl for Limit<L> {
    fn decide(&mut self, changed: bool) -> Flow {
        self.steps += 1;
        if self.steps >= self.max_steps {
            return Flow::Halt;
        }
        self.inner.decide(changed)
    }
}

/// A simulation paused between generations
#[derive(Clone, Debug)]
pub struct Simulation {
    current: GameState,
    generation: u64,
}

impl Simulation {
    /// Start from live positions. The state is padded before the first step.
    pub fn new<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Self::from_state(GameState::from_active(positions).pad())
    }

    /// Resume from a saved, already padded state
    pub fn from_state(current: GameState) -> Self {
        Self { current, generation: 0 }
    }

    pub fn state(&self) -> &GameState {
        &self.current
    }

    /// Generations completed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Render, compute the next generation and compare it with what was
    /// rendered. Nothing advances until [`Pending::resume`] is called.
    pub fn step<R: Render + ?Sized>(&self, renderer: &mut R) -> Pending {
        let rendered = render(&self.current, renderer);
        let next = rendered.next_state();
        let changed = rendered != next;
        debug!(
            generation = self.generation,
            population = next.population(),
            tracked = next.len(),
            changed,
            "computed generation"
        );
        Pending {
            changed,
            rendered,
            next,
            generation: self.generation + 1,
        }
    }
}

/// Result of a step, holding the continuation to the next generation
#[derive(Clone, Debug)]
pub struct Pending {
    changed: bool,
    rendered: GameState,
    next: GameState,
    generation: u64,
}

impl Pending {
    /// Whether the next state differs structurally from the rendered one
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// The state after the renderer's vetoes, before the transition
    pub fn rendered(&self) -> &GameState {
        &self.rendered
    }

    pub fn next_state(&self) -> &GameState {
        &self.next
    }

    /// Continue with the next generation
    pub fn resume(self) -> Simulation {
        Simulation {
            current: self.next,
            generation: self.generation,
        }
    }
}

/// Outcome of [`run`]
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Number of transitions computed
    pub steps: u64,
    /// True when the last step produced no change
    pub stable: bool,
    /// State computed by the last step
    pub last: GameState,
}

/// Drive a simulation from `initial` until `control` halts it.
///
/// Each pass renders the current state, computes the next one and hands
/// `changed` to `control`. [`Flow::Continue`] plays the role of invoking
/// the continuation. The first step happens before `control` is asked, so
/// `steps` is always one more than the number of continues.
pub fn run<I, R, L>(initial: I, mut renderer: R, mut control: L) -> RunSummary
where
    I: IntoIterator<Item = (i64, i64)>,
    R: Render,
    L: LoopControl,
{
    let mut sim = Simulation::new(initial);
    info!(population = sim.state().population(), "starting simulation");

    loop {
        let pending = sim.step(&mut renderer);
        let changed = pending.changed();
        match control.decide(changed) {
            Flow::Continue => sim = pending.resume(),
            Flow::Halt => {
                info!(steps = pending.generation, stable = !changed, "simulation halted");
                return RunSummary {
                    steps: pending.generation,
                    stable: !changed,
                    last: pending.next,
                };
            }
        }
    }
}

/// Unbounded lazy sequence of padded generations, without a render filter.
/// The first item is the generation after the starting state.
#[derive(Clone, Debug)]
pub struct Generations {
    current: GameState,
}

impl Generations {
    pub fn new(start: GameState) -> Self {
        Self { current: start }
    }
}

impl Iterator for Generations {
    type Item = GameState;

    fn next(&mut self) -> Option<GameState> {
        let next = self.current.next_state();
        self.current = next.clone();
        Some(next)
    }
}
