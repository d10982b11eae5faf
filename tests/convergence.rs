extern crate float_eq;
extern crate gridworld;

use float_eq::*;
use gridworld::mdps::solvers::{dp, mc_methods, sarsa, td_methods};
use gridworld::*;

fn dp_values(grid: &GridWorld) -> ValueTable {
    let cfg = EngineConfig {
        theta: 1e-12,
        ..Default::default()
    };
    dp::evaluate_uniform(grid, &cfg).unwrap().v
}

fn as_vec(v: &ValueTable) -> Vec<f64> {
    v.iter().cloned().collect()
}

/// Both bounds must hold: `abs` catches noise, `rel` a bias proportional to distance.
fn assert_near_dp(v: &ValueTable, grid: &GridWorld, abs: f64, rel: f64) {
    let (v, dp) = (as_vec(v), as_vec(&dp_values(grid)));
    assert_float_eq!(v, dp, abs_all <= abs);
    assert_float_eq!(v, dp, rmax_all <= rel);
}

/// Steps the greedy policy needs to reach a corner, if it gets there within `N*N` moves.
fn greedy_steps(grid: &GridWorld, pi: &Policy, s: State) -> Option<usize> {
    let mut cur = s;
    for n in 0..grid.n_s() {
        if grid.is_terminal(cur) {
            return Some(n);
        }
        cur = grid.transition(cur, pi[cur.ix()]);
    }

    None
}

#[test]
fn dp_fixed_point_is_transpose_symmetric() {
    for n in [4, 5] {
        let grid = GridWorld::new(n).unwrap();

        let v = dp_values(&grid);

        assert_float_eq!(as_vec(&v), as_vec(&v.t().to_owned()), abs_all <= 1e-9);
    }
}

#[test]
fn dp_exact_equality_stop_reaches_a_fixed_point() {
    let grid = GridWorld::new(4).unwrap();

    let ret = dp::evaluate_uniform(&grid, &EngineConfig::default()).unwrap();

    assert_float_eq!(as_vec(&ret.v), as_vec(&dp_values(&grid)), abs_all <= 1e-9);
}

#[test]
fn mc_prediction_converges_to_dp() {
    let grid = GridWorld::new(4).unwrap();
    let cfg = EngineConfig {
        episodes: 50_000,
        ..Default::default()
    };

    let v = mc_methods::mc_prediction(&grid, &cfg, &mut SeededSource::new(2718)).unwrap();

    assert_near_dp(&v, &grid, 0.6, 0.04);
}

#[test]
fn td_lambda_converges_to_dp() {
    let grid = GridWorld::new(4).unwrap();
    let cfg = EngineConfig {
        episodes: 50_000,
        alpha: 0.0005,
        lambda: 0.8,
        ..Default::default()
    };

    let v = td_methods::td_lambda(&grid, &cfg, &mut SeededSource::new(2718)).unwrap();

    assert_near_dp(&v, &grid, 0.9, 0.06);
}

#[test]
fn td_n_converges_to_dp() {
    let grid = GridWorld::new(4).unwrap();
    let cfg = EngineConfig {
        iterations: 1_000_000,
        horizon: 2,
        alpha: 0.0005,
        ..Default::default()
    };

    let v = td_methods::td_n(&grid, &cfg, &mut SeededSource::new(2718)).unwrap();

    assert_near_dp(&v, &grid, 0.8, 0.05);
}

#[test]
fn sarsa_policies_beat_the_random_walk() {
    let grid = GridWorld::new(4).unwrap();
    let random_walk = dp_values(&grid);
    let cfg = EngineConfig {
        episodes: 5000,
        alpha: 0.05,
        lambda: 0.5,
        ..Default::default()
    };

    for learned in [
        sarsa::sarsa(&grid, &cfg, &mut SeededSource::new(2718)).unwrap(),
        sarsa::sarsa_lambda(&grid, &cfg, &mut SeededSource::new(2718)).unwrap(),
    ] {
        for s in grid.states().filter(|&s| !grid.is_terminal(s)) {
            let steps = greedy_steps(&grid, &learned.pi_star, s);
            assert!(
                steps.is_some_and(|n| (n as f64) < -random_walk[s.ix()]),
                "{s:?}: greedy needs {steps:?} steps, random walk {}",
                -random_walk[s.ix()]
            );
        }
    }
}

#[test]
fn sarsa_policy_is_shortest_path_next_to_corners() {
    let grid = GridWorld::new(5).unwrap();
    let cfg = EngineConfig {
        episodes: 5000,
        alpha: 0.05,
        ..Default::default()
    };

    let learned = sarsa::sarsa(&grid, &cfg, &mut SeededSource::new(31415)).unwrap();

    for (s, a) in [
        ((0, 1), Action::Left),
        ((1, 0), Action::Up),
        ((4, 3), Action::Right),
        ((3, 4), Action::Down),
    ] {
        assert_eq!(learned.pi_star[State::from(s).ix()], a);
    }
}
