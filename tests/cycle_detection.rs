mod common;

use common::grid_from_art;
use wiresim::{find_loop, SimError, Simulation};

#[test]
fn test_decaying_circuit_settles_into_period_one() {
    // No source: the line decays from 6 to 0, then every state repeats.
    let sim = Simulation::from_grid(&grid_from_art(&["77777"]));
    let (rest, found) = find_loop(sim, Some(1_000)).unwrap();
    assert_eq!(found.period, 1);
    assert_eq!(rest.charges(), &[0]);
}

#[test]
fn test_blinker_has_period_two() {
    let sim = Simulation::from_grid(&grid_from_art(&[
        "77.....",
        "777.111",
        "...1..1",
        "...1111",
    ]));
    let (at_loop, found) = find_loop(sim, Some(1_000)).unwrap();
    assert_eq!(found.period, 2);

    // The state at detection recurs exactly one period later.
    let mut ahead = at_loop.clone();
    for _ in 0..found.period {
        ahead = ahead.step();
    }
    assert_eq!(ahead.charges(), at_loop.charges());
    assert_eq!(ahead.state_hash(), at_loop.state_hash());

    // And no tick strictly inside the period matches the detection state.
    let mut inside = at_loop.clone();
    for _ in 1..found.period {
        inside = inside.step();
        assert_ne!(inside.state_hash(), at_loop.state_hash());
    }
}

#[test]
fn test_detection_tick_matches_step_count() {
    let sim = Simulation::from_grid(&grid_from_art(&["44444"]));
    let (rest, found) = find_loop(sim, None).unwrap();
    // Charge 3 decays over three ticks; the fourth stepped state is the
    // first repeat of the all-zero state.
    assert_eq!(found.detected_at, 4);
    assert_eq!(rest.tick(), 4);
}

#[test]
fn test_budget_exhaustion_surfaces_error() {
    let sim = Simulation::from_grid(&grid_from_art(&["77777"]));
    match find_loop(sim, Some(3)) {
        Err(SimError::ExceededBudget(3)) => {}
        other => panic!("expected ExceededBudget, got {other:?}"),
    }
}

#[test]
fn test_hashes_are_stable_across_reconstruction() {
    let art = &["12.34", ".777.", "1...1"];
    let a = Simulation::from_grid(&grid_from_art(art));
    let b = Simulation::from_grid(&grid_from_art(art));
    assert_eq!(a.state_hash(), b.state_hash());
    assert_eq!(a.step().state_hash(), b.step().state_hash());
}
