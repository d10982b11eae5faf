use super::super::behavior::{BehaviorPolicy, UniformPolicy};
use super::super::episode::random_start;
use super::super::grid_world::GridWorld;
use super::super::random_source::RandomSource;
use super::super::tables::{value_table, ValueTable};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use tracing::{debug, info};

/// n-step TD prediction of the uniform random policy.
///
/// Every iteration is an independent rollout of `horizon + 1` random steps
/// from a random start, and only that start state is updated. A horizon of 0
/// is one-step TD.
pub fn td_n(grid: &GridWorld, cfg: &EngineConfig, rng: &mut dyn RandomSource) -> Result<ValueTable> {
    cfg.validate()?;

    let mut v = value_table(grid);
    for _ in 0..cfg.iterations {
        let start = random_start(grid, rng);
        let mut s = start;
        let mut g = 0.;
        let mut discount = 1.;
        for _ in 0..=cfg.horizon {
            g += discount * grid.reward(s);
            discount *= cfg.gamma;
            s = grid.transition(s, UniformPolicy.act(s, rng));
        }

        let target = g + discount * v[s.ix()];
        let old = v[start.ix()];
        v[start.ix()] = old + cfg.alpha * (target - old);
    }

    info!(
        iterations = cfg.iterations,
        horizon = cfg.horizon,
        "td(n) done"
    );
    Ok(v)
}

/// TD(lambda) prediction of the uniform random policy with accumulating traces.
///
/// The TD error of each step is applied to the whole table, weighted by the trace.
pub fn td_lambda(
    grid: &GridWorld,
    cfg: &EngineConfig,
    rng: &mut dyn RandomSource,
) -> Result<ValueTable> {
    cfg.validate()?;

    let mut v = value_table(grid);
    let mut steps = 0;
    for e in 0..cfg.episodes {
        let mut trace = value_table(grid);
        let mut s = random_start(grid, rng);
        let mut len = 0;
        while !grid.is_terminal(s) {
            if len == cfg.max_episode_steps {
                return Err(Error::EpisodeTooLong {
                    limit: cfg.max_episode_steps,
                });
            }

            trace *= cfg.gamma * cfg.lambda;
            trace[s.ix()] += 1.;

            let next = grid.transition(s, UniformPolicy.act(s, rng));
            let delta = grid.reward(s) + cfg.gamma * v[next.ix()] - v[s.ix()];
            v.scaled_add(cfg.alpha * delta, &trace);

            s = next;
            len += 1;
        }

        debug!(episode = e, len, "td(lambda) episode");
        steps += len;
    }

    info!(episodes = cfg.episodes, steps, "td(lambda) done");
    Ok(v)
}
