use super::super::grid_world::{Action, GridWorld};
use super::super::tables::{greedy_policy, value_table, Policy, ValueTable};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use tracing::{debug, info};

#[derive(Debug, Clone, serde::Serialize)]
pub struct Evaluation {
    pub v: ValueTable,
    pub sweeps: usize,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ValueIteration {
    pub v: ValueTable,
    pub pi: Policy,
    pub iterations: usize,
}

/// Iterative policy evaluation of the uniform random policy - Sutton & Barto 2018, 4.1.
///
/// Sweeps are synchronous: each one reads only the previous table. Without a
/// sweep budget it runs until the fixed point.
pub fn evaluate_uniform(grid: &GridWorld, cfg: &EngineConfig) -> Result<Evaluation> {
    cfg.validate()?;

    let p = 1. / Action::COUNT as f64;
    let mut v = value_table(grid);
    let mut sweep = 0;
    loop {
        sweep += 1;
        let mut v_new = value_table(grid);
        for s in grid.states() {
            let expected = Action::ALL
                .iter()
                .map(|&a| p * v[grid.transition(s, a).ix()])
                .sum::<f64>();
            v_new[s.ix()] = grid.reward(s) + cfg.gamma * expected;
        }

        let delta = max_abs_diff(&v, &v_new);
        debug!(sweep, delta, "dp sweep");
        v = v_new;
        if delta <= cfg.theta {
            info!(sweeps = sweep, "dp evaluation converged");
            return Ok(Evaluation { v, sweeps: sweep });
        }
        budget_left(cfg, sweep)?;
    }
}

/// Alternates a one-step evaluation under the current greedy policy with greedy
/// improvement, stopping once the policy no longer changes.
pub fn value_iteration(grid: &GridWorld, cfg: &EngineConfig) -> Result<ValueIteration> {
    cfg.validate()?;

    let mut v = value_table(grid);
    let mut pi = greedy_policy(grid, &v, cfg.gamma);
    let mut iteration = 0;
    loop {
        iteration += 1;
        let mut v_new = value_table(grid);
        for s in grid.states() {
            v_new[s.ix()] = grid.reward(s) + cfg.gamma * v[grid.transition(s, pi[s.ix()]).ix()];
        }

        let pi_new = greedy_policy(grid, &v_new, cfg.gamma);
        v = v_new;
        let stable = pi_new == pi;
        pi = pi_new;
        debug!(iteration, stable, "value iteration");
        if stable {
            info!(iterations = iteration, "value iteration converged");
            return Ok(ValueIteration {
                v,
                pi,
                iterations: iteration,
            });
        }
        budget_left(cfg, iteration)?;
    }
}

fn budget_left(cfg: &EngineConfig, done: usize) -> Result<()> {
    match cfg.max_sweeps {
        Some(max) if done >= max => Err(Error::NotConverged { sweeps: done }),
        _ => Ok(()),
    }
}

fn max_abs_diff(a: &ValueTable, b: &ValueTable) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0., f64::max)
}
