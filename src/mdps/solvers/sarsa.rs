use super::super::behavior::{BehaviorPolicy, EpsilonGreedy};
use super::super::episode::random_start;
use super::super::grid_world::{Action, GridWorld, State};
use super::super::random_source::RandomSource;
use super::super::tables::{q_table, QTable};
use super::ControlOutcome;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use tracing::{debug, info};

/// On-policy TD control - Sutton & Barto 2018, 6.4.
pub fn sarsa(grid: &GridWorld, cfg: &EngineConfig, rng: &mut dyn RandomSource) -> Result<ControlOutcome> {
    run(grid, cfg, rng, false)
}

/// SARSA with accumulating traces over the whole Q table - Sutton & Barto 2018, 12.7.
pub fn sarsa_lambda(
    grid: &GridWorld,
    cfg: &EngineConfig,
    rng: &mut dyn RandomSource,
) -> Result<ControlOutcome> {
    run(grid, cfg, rng, true)
}

fn run(
    grid: &GridWorld,
    cfg: &EngineConfig,
    rng: &mut dyn RandomSource,
    traced: bool,
) -> Result<ControlOutcome> {
    cfg.validate()?;

    let mut q = q_table(grid);
    let mut steps = 0;
    for e in 0..cfg.episodes {
        let epsilon = cfg.epsilon.epsilon(e);
        let mut trace = traced.then(|| q_table(grid));
        let mut s = random_start(grid, rng);
        let mut a = choose(&q, epsilon, s, rng);
        let mut len = 0;
        while !grid.is_terminal(s) {
            if len == cfg.max_episode_steps {
                return Err(Error::EpisodeTooLong {
                    limit: cfg.max_episode_steps,
                });
            }

            let r = grid.reward(s);
            let s_next = grid.transition(s, a);
            let a_next = choose(&q, epsilon, s_next, rng);
            let delta = r + cfg.gamma * q[s_next.ix_with(a_next)] - q[s.ix_with(a)];
            match trace.as_mut() {
                Some(tr) => {
                    *tr *= cfg.gamma * cfg.lambda;
                    tr[s.ix_with(a)] += 1.;
                    q.scaled_add(cfg.alpha * delta, tr);
                }
                None => q[s.ix_with(a)] += cfg.alpha * delta,
            }

            (s, a) = (s_next, a_next);
            len += 1;
        }

        debug!(episode = e, epsilon, len, "sarsa episode");
        steps += len;
    }

    info!(episodes = cfg.episodes, steps, traced, "sarsa done");
    Ok(ControlOutcome::from_q(q, steps))
}

fn choose(q: &QTable, epsilon: f64, s: State, rng: &mut dyn RandomSource) -> Action {
    EpsilonGreedy { q, epsilon }.act(s, rng)
}
