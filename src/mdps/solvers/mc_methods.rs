use super::super::behavior::{EpsilonGreedy, UniformPolicy};
use super::super::episode::{discounted_returns, generate_episode, Step};
use super::super::grid_world::GridWorld;
use super::super::random_source::RandomSource;
use super::super::tables::{q_table, value_table, ValueTable};
use super::ControlOutcome;
use crate::config::{EngineConfig, Visit};
use crate::error::Result;
use ndarray::{Array, Dimension, NdIndex};
use tracing::{debug, info};

/// Monte Carlo prediction of the uniform random policy.
/// Ref: https://youtu.be/P0ZvxeQqv0A?si=RLKdOUTNEfKXE63C
pub fn mc_prediction(
    grid: &GridWorld,
    cfg: &EngineConfig,
    rng: &mut dyn RandomSource,
) -> Result<ValueTable> {
    cfg.validate()?;

    let mut v = value_table(grid);
    let mut visits = Array::zeros(v.raw_dim());
    for e in 0..cfg.episodes {
        let ep = generate_episode(grid, &UniformPolicy, rng, cfg.max_episode_steps)?;
        debug!(episode = e, len = ep.len(), "mc prediction episode");
        running_mean_update(&mut v, &mut visits, &ep, cfg.gamma, cfg.visit, |x| x.s.ix());
    }

    info!(episodes = cfg.episodes, visit = ?cfg.visit, "mc prediction done");
    Ok(v)
}

/// On-policy first-visit Monte Carlo control with an epsilon-greedy behaviour
/// policy - Sutton & Barto 2018, 5.4.
///
/// NOTE: With the `1/(1+k)` schedule the sample means stay anchored to early,
/// mostly random returns, and on 5x5 grids this does not settle on the
/// optimal policy.
pub fn mc_control(
    grid: &GridWorld,
    cfg: &EngineConfig,
    rng: &mut dyn RandomSource,
) -> Result<ControlOutcome> {
    cfg.validate()?;

    let mut q = q_table(grid);
    let mut visits = Array::zeros(q.raw_dim());
    let mut steps = 0;
    for e in 0..cfg.episodes {
        let epsilon = cfg.epsilon.epsilon(e);
        let ep = generate_episode(
            grid,
            &EpsilonGreedy { q: &q, epsilon },
            rng,
            cfg.max_episode_steps,
        )?;
        debug!(episode = e, epsilon, len = ep.len(), "mc control episode");
        steps += ep.len();
        running_mean_update(&mut q, &mut visits, &ep, cfg.gamma, Visit::First, |x| {
            x.s.ix_with(x.a)
        });
    }

    info!(episodes = cfg.episodes, steps, "mc control done");
    Ok(ControlOutcome::from_q(q, steps))
}

/// Folds the returns of one episode into `table` as incremental sample means.
fn running_mean_update<D, I>(
    table: &mut Array<f64, D>,
    visits: &mut Array<u32, D>,
    ep: &[Step],
    gamma: f64,
    visit: Visit,
    key: impl Fn(&Step) -> I,
) where
    D: Dimension,
    I: NdIndex<D> + Copy,
{
    let returns = discounted_returns(ep, gamma);

    let mut seen = Array::from_elem(table.raw_dim(), false);
    for (step, g) in ep.iter().zip(returns) {
        let ix = key(step);
        if visit == Visit::First && seen[ix] {
            continue;
        }
        seen[ix] = true;

        visits[ix] += 1;
        let (n, old) = (visits[ix] as f64, table[ix]);
        table[ix] = old + (g - old) / n;
    }
}
