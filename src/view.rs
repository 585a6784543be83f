//! Interactive terminal view
//!
//! The view is the renderer and loop control of the simulation. It draws
//! every tracked cell that lands on screen and, with clipping on, vetoes
//! the ones that do not, which removes them from the simulation.

use crate::colors::{scheme_color, scheme_for_key, BORDER, LIVE, STATUS};
use crate::config::ViewConfig;
use crate::life::{Bounds, Flow, Limit, LoopControl, Simulation, UntilStable};
use crate::terminal::Terminal;
use crossterm::event::{KeyCode, KeyModifiers};
use std::io;
use tracing::info;

/// Character drawn for tracked dead cells when the border is shown
const BORDER_CHAR: char = '·';
/// Cells panned per arrow key press
const PAN_STEP: i64 = 4;

/// Window of the plane shown on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// World position drawn at the top-left screen cell
    pub left: i64,
    pub top: i64,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// Viewport of the given size whose centre is the centre of `bounds`
    pub fn centered(bounds: Option<Bounds>, width: u16, height: u16) -> Self {
        let (cx, cy) = bounds
            .map(|b| (midpoint(b.min.x, b.max.x), midpoint(b.min.y, b.max.y)))
            .unwrap_or((0, 0));
        Self {
            left: cx.saturating_sub(i64::from(width) / 2),
            top: cy.saturating_sub(i64::from(height) / 2),
            width,
            height,
        }
    }

    pub fn panned(&self, dx: i64, dy: i64) -> Self {
        Self {
            left: self.left.wrapping_add(dx),
            top: self.top.wrapping_add(dy),
            ..*self
        }
    }

    /// Screen position of a world cell, `None` when it is off screen
    pub fn to_screen(&self, x: i64, y: i64) -> Option<(i32, i32)> {
        let sx = x.checked_sub(self.left)?;
        let sy = y.checked_sub(self.top)?;
        if (0..i64::from(self.width)).contains(&sx) && (0..i64::from(self.height)).contains(&sy) {
            Some((sx as i32, sy as i32))
        } else {
            None
        }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.to_screen(x, y).is_some()
    }
}

/// Midpoint of `lo..=hi` rounded towards `lo`, without overflow
fn midpoint(lo: i64, hi: i64) -> i64 {
    lo + (hi.abs_diff(lo) / 2) as i64
}

/// Runtime state for interactive controls
pub struct ViewState {
    pub speed: f32,        // Seconds per generation
    pub color_scheme: u8,  // 0-9
    pub paused: bool,
    pub pan: (i64, i64),
}

impl ViewState {
    pub fn new(initial_speed: f32, color_scheme: u8) -> Self {
        Self {
            speed: initial_speed,
            color_scheme,
            paused: false,
            pan: (0, 0),
        }
    }

    /// Handle keypress, returns true if should quit
    pub fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        if let Some(scheme) = scheme_for_key(code) {
            self.color_scheme = scheme;
            return false;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            // Number keys: change speed (1=fastest, 9=slowest, 0=very slow)
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.speed = match c {
                    '0' => 0.5,
                    '1' => 0.005,
                    '2' => 0.01,
                    '3' => 0.02,
                    '4' => 0.03,
                    '5' => 0.05,
                    '6' => 0.07,
                    '7' => 0.1,
                    '8' => 0.15,
                    _ => 0.2,
                };
            }
            KeyCode::Left | KeyCode::Char('h') => self.pan.0 -= PAN_STEP,
            KeyCode::Right | KeyCode::Char('l') => self.pan.0 += PAN_STEP,
            KeyCode::Up | KeyCode::Char('k') => self.pan.1 -= PAN_STEP,
            KeyCode::Down | KeyCode::Char('j') => self.pan.1 += PAN_STEP,
            KeyCode::Char('c') => self.pan = (0, 0),
            _ => {}
        }
        false
    }
}

/// Why the view stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Stable,
    Limit,
}

/// Stop on stability unless running forever
#[derive(Clone, Copy, Debug)]
struct Stability {
    infinite: bool,
}

impl LoopControl for Stability {
    fn decide(&mut self, changed: bool) -> Flow {
        if self.infinite {
            Flow::Continue
        } else {
            UntilStable.decide(changed)
        }
    }
}

/// Loop policy of the view, capped at `max_generations` if given
fn view_control(config: &ViewConfig) -> Limit<Stability> {
    let inner = Stability { infinite: config.infinite };
    Limit::new(inner, config.max_generations.unwrap_or(u64::MAX))
}

/// Run the simulation in the terminal until it halts or the user quits
pub fn run(term: &mut Terminal, config: &ViewConfig, cells: Vec<(i64, i64)>) -> io::Result<(Outcome, u64)> {
    let mut state = ViewState::new(config.time_step, config.color_scheme);
    let mut control = view_control(config);

    let mut sim = Simulation::new(cells);
    let (w, h) = term.size();
    let mut base = Viewport::centered(sim.state().bounds(), w, h.saturating_sub(1));

    loop {
        if term.refresh_size()? {
            let (w, h) = term.size();
            base = Viewport::centered(sim.state().bounds(), w, h.saturating_sub(1));
        }

        if let Some((code, mods)) = term.check_key()? {
            if state.handle_key(code, mods) {
                info!(generation = sim.generation(), "quit by user");
                return Ok((Outcome::Quit, sim.generation()));
            }
        }

        if state.paused {
            term.sleep(0.1);
            continue;
        }

        let viewport = base.panned(state.pan.0, state.pan.1);
        term.clear();

        let pending = {
            let scheme = state.color_scheme;
            let mut draw = |x: i64, y: i64, active: bool| -> bool {
                let Some((sx, sy)) = viewport.to_screen(x, y) else {
                    return !config.clip;
                };
                if active {
                    let (color, bold) = scheme_color(scheme, LIVE, true);
                    term.set(sx, sy, config.draw_char, Some(color), bold);
                } else if config.show_border {
                    let (color, bold) = scheme_color(scheme, BORDER, false);
                    term.set(sx, sy, BORDER_CHAR, Some(color), bold);
                }
                true
            };
            sim.step(&mut draw)
        };

        let rendered = pending.rendered();
        let status = format!(
            " gen {}  pop {}  tracked {}{} ",
            sim.generation(),
            rendered.population(),
            rendered.len(),
            if config.clip { "  [clip]" } else { "" },
        );
        draw_status(term, &status, state.color_scheme);
        term.present()?;
        term.sleep(state.speed);

        let changed = pending.changed();
        match control.decide(changed) {
            Flow::Continue => sim = pending.resume(),
            Flow::Halt => {
                let outcome = if changed { Outcome::Limit } else { Outcome::Stable };
                let generation = sim.generation() + 1;
                info!(generation, ?outcome, "simulation halted");
                wait_for_quit(term, &format!("{status} halted ({outcome:?}), q to quit "), state.color_scheme)?;
                return Ok((outcome, generation));
            }
        }
    }
}

fn draw_status(term: &mut Terminal, text: &str, scheme: u8) {
    let (_, h) = term.size();
    let (color, bold) = scheme_color(scheme, STATUS, false);
    term.set_str(0, i32::from(h) - 1, text, Some(color), bold);
}

/// Keep the last frame on screen until the user quits
fn wait_for_quit(term: &mut Terminal, status: &str, scheme: u8) -> io::Result<()> {
    draw_status(term, status, scheme);
    term.present()?;
    loop {
        if let Some((KeyCode::Char('q') | KeyCode::Esc, _)) = term.check_key()? {
            return Ok(());
        }
        term.sleep(0.05);
    }
}
