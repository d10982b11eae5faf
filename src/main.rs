use gridworld::mdps::solvers::{dp, mc_methods, sarsa, td_methods};
use gridworld::*;
use serde_json::to_string_pretty;
use std::path::Path;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => RunConfig::load(Path::new(&path))?,
        None => RunConfig::default(),
    };
    info!(algorithm = ?cfg.algorithm, grid_size = cfg.grid_size, seed = ?cfg.seed, "starting run");

    let grid = GridWorld::new(cfg.grid_size)?;
    let rng = &mut match cfg.seed {
        Some(seed) => SeededSource::new(seed),
        None => SeededSource::from_entropy(),
    };
    let ecfg = &cfg.engine;

    match cfg.algorithm {
        Algorithm::DpEvaluation => {
            let ret = dp::evaluate_uniform(&grid, ecfg)?;
            println!("Number of sweeps: {}", ret.sweeps);
            println!("{}", to_string_pretty(&ret)?);
        }
        Algorithm::ValueIteration => {
            let ret = dp::value_iteration(&grid, ecfg)?;
            println!("Number of iterations: {}\n{}", ret.iterations, ret.pi);
            println!("{}", to_string_pretty(&ret)?);
        }
        Algorithm::MonteCarlo => {
            let v = mc_methods::mc_prediction(&grid, ecfg, rng)?;
            println!("{}", to_string_pretty(&v)?);
        }
        Algorithm::TdN => {
            let v = td_methods::td_n(&grid, ecfg, rng)?;
            println!("{}", to_string_pretty(&v)?);
        }
        Algorithm::TdLambda => {
            let v = td_methods::td_lambda(&grid, ecfg, rng)?;
            println!("{}", to_string_pretty(&v)?);
        }
        Algorithm::MonteCarloControl => report(mc_methods::mc_control(&grid, ecfg, rng)?)?,
        Algorithm::Sarsa => report(sarsa::sarsa(&grid, ecfg, rng)?)?,
        Algorithm::SarsaLambda => report(sarsa::sarsa_lambda(&grid, ecfg, rng)?)?,
    }

    Ok(())
}

fn report(ret: ControlOutcome) -> anyhow::Result<()> {
    println!("Total steps: {}\n{}", ret.steps, ret.pi_star);
    println!("{}", to_string_pretty(&ret)?);
    Ok(())
}
