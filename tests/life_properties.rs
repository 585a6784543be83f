//! Behaviour of the engine through its public API

use rand::rngs::StdRng;
use rand::SeedableRng;
use sparselife::life::{
    active_neighbor_count, neighbors, next_state, pad, render, run, Cell, Coord, Flow, GameState,
    Generations, KeepAll, Simulation, UntilStable,
};
use sparselife::patterns::{self, random_soup};

fn soup(seed: u64) -> GameState {
    let cells = random_soup(24, 24, 0.35, &mut StdRng::seed_from_u64(seed)).unwrap();
    GameState::from_active(cells)
}

fn builtin(name: &str) -> Vec<(i64, i64)> {
    patterns::find(name).unwrap().coords().unwrap()
}

#[test]
fn padding_is_idempotent() {
    for seed in 0..8 {
        let once = pad(&soup(seed));
        let twice = pad(&once);
        assert_eq!(once.active_coords(), twice.active_coords());
        assert!(twice.len() <= once.len());
        assert_eq!(twice, once, "seed {seed}");
    }
}

#[test]
fn padding_tracks_exactly_the_two_touch_border() {
    let state = soup(3);
    let padded = pad(&state);
    for cell in padded.iter().filter(|c| !c.active) {
        assert!(active_neighbor_count(&state, cell) >= 2);
    }
    // any untracked neighbour of a live cell touches at most one live cell
    for live in state.active_cells() {
        for n in neighbors(live) {
            if !padded.contains(n.coord()) {
                assert!(active_neighbor_count(&state, &n) <= 1);
            }
        }
    }
}

#[test]
fn neighbour_count_matches_brute_force() {
    let state = soup(11).pad();
    for cell in state.iter() {
        let mut expected = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) != (0, 0) && state.is_active(Coord::new(cell.x + dx, cell.y + dy)) {
                    expected += 1;
                }
            }
        }
        assert_eq!(active_neighbor_count(&state, cell), expected);
    }
}

#[test]
fn isolated_cell_dies() {
    let next = next_state(&GameState::from_active([(0, 0)]).pad());
    assert_eq!(next.population(), 0);
}

#[test]
fn block_is_a_still_life() {
    let mut state = GameState::from_active(builtin("block")).pad();
    let start = state.active_coords();
    for _ in 0..5 {
        state = next_state(&state);
        assert_eq!(state.active_coords(), start);
    }
}

#[test]
fn blinker_has_period_two() {
    let vertical = GameState::from_active([(0, -1), (0, 0), (0, 1)]).pad();
    let horizontal = next_state(&vertical);
    assert_eq!(
        horizontal.active_coords(),
        vec![Coord::new(-1, 0), Coord::new(0, 0), Coord::new(1, 0)]
    );
    assert_eq!(next_state(&horizontal).active_coords(), vertical.active_coords());
}

#[test]
fn glider_moves_diagonally_every_four_generations() {
    let start = GameState::from_active(builtin("glider")).pad();
    let after = Generations::new(start.clone()).nth(3).unwrap();
    let shifted: Vec<Coord> = start.active_coords().iter().filter_map(|c| c.offset(1, 1)).collect();
    assert_eq!(after.active_coords(), shifted);
}

#[test]
fn tracked_cells_stay_small_for_a_far_apart_pair() {
    // two blocks a million cells apart cost no more than two blocks
    let mut cells = builtin("block");
    cells.extend(builtin("block").into_iter().map(|(x, y)| (x + 1_000_000, y - 1_000_000)));
    let state = GameState::from_active(cells).pad();
    assert_eq!(state.len(), 2 * GameState::from_active(builtin("block")).pad().len());
}

#[test]
fn plane_edges_do_not_wrap() {
    // a row split across the i64 edge is a domino and a lone cell, not a blinker
    let mut state = GameState::from_active([(i64::MAX, 0), (i64::MIN, 0), (i64::MIN + 1, 0)]).pad();
    for _ in 0..3 {
        state = next_state(&state);
    }
    assert_eq!(state.population(), 0);
}

#[test]
fn continuation_count_matches_transitions() {
    for allowed in 0..5u64 {
        let mut continues = 0u64;
        let mut renders = 0u64;
        let summary = run(
            [(0, -1), (0, 0), (0, 1)],
            |_x: i64, _y: i64, _active: bool| renders += 1,
            |_changed: bool| {
                if continues < allowed {
                    continues += 1;
                    Flow::Continue
                } else {
                    Flow::Halt
                }
            },
        );
        assert_eq!(continues, allowed);
        // the first transition runs before the loop control is consulted
        assert_eq!(summary.steps, allowed + 1);
        assert!(renders > 0);
    }
}

#[test]
fn never_continuing_halts_after_one_step() {
    let mut calls = 0;
    let summary = run(builtin("glider"), KeepAll, |_changed: bool| {
        calls += 1;
        Flow::Halt
    });
    assert_eq!(calls, 1);
    assert_eq!(summary.steps, 1);
}

#[test]
fn default_loop_stops_when_stable() {
    let summary = run(builtin("beacon").into_iter().take(4), KeepAll, UntilStable);
    assert!(summary.stable);
    assert_eq!(summary.last.population(), 4);
}

#[test]
fn rejecting_every_cell_empties_the_next_state() {
    let sim = Simulation::new(builtin("pulsar"));
    let pending = sim.step(&mut |_x: i64, _y: i64, _active: bool| false);
    assert!(pending.rendered().is_empty());
    assert_eq!(pending.next_state().population(), 0);
    assert!(!pending.changed());
}

#[test]
fn render_sees_every_tracked_cell_once() {
    let state = soup(5).pad();
    let mut seen = Vec::new();
    let kept = render(&state, &mut |x: i64, y: i64, active: bool| seen.push(Cell::with_state(x, y, active)));
    assert_eq!(kept, state);
    assert_eq!(seen.len(), state.len());
    assert_eq!(seen.into_iter().collect::<GameState>(), state);
}

#[test]
fn unchanged_detection_ignores_order() {
    let a = GameState::from_active(builtin("pulsar")).pad();
    let mut reversed = builtin("pulsar");
    reversed.reverse();
    let b = GameState::from_active(reversed).pad();
    assert_eq!(a, b);
}

#[test]
fn pending_can_be_resumed_later() {
    let sim = Simulation::new(builtin("glider"));
    let mut saved = Vec::new();
    let mut current = sim;
    for _ in 0..3 {
        let pending = current.step(&mut KeepAll);
        saved.push(pending.next_state().clone());
        current = pending.resume();
    }
    assert_eq!(current.generation(), 3);
    assert_eq!(current.state(), &saved[2]);

    // restarting from a saved state replays the same future
    let replay = Simulation::from_state(saved[0].clone()).step(&mut KeepAll);
    assert_eq!(replay.next_state(), &saved[1]);
}
