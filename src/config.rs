use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Exploration probability as a function of the episode index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EpsilonSchedule {
    /// `epsilon0 / (1 + k)`.
    Decaying { epsilon0: f64 },
    Constant { epsilon: f64 },
}

impl EpsilonSchedule {
    pub fn epsilon(&self, episode: usize) -> f64 {
        match *self {
            EpsilonSchedule::Decaying { epsilon0 } => epsilon0 / (1 + episode) as f64,
            EpsilonSchedule::Constant { epsilon } => epsilon,
        }
    }

    fn base(&self) -> f64 {
        match *self {
            EpsilonSchedule::Decaying { epsilon0 } => epsilon0,
            EpsilonSchedule::Constant { epsilon } => epsilon,
        }
    }
}

impl Default for EpsilonSchedule {
    fn default() -> Self {
        EpsilonSchedule::Decaying { epsilon0: 1.0 }
    }
}

/// Which occurrences of a state within an episode are credited by Monte Carlo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visit {
    #[default]
    First,
    Every,
}

/// Knobs shared by all engines. Each engine reads only the fields it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Episode budget for the episodic engines.
    pub episodes: usize,
    /// Number of independent transitions for TD(n).
    pub iterations: usize,
    /// Sweep budget for DP evaluation and value iteration. `None` sweeps until
    /// the fixed point.
    pub max_sweeps: Option<usize>,
    pub alpha: f64,
    pub lambda: f64,
    pub gamma: f64,
    /// Largest per-state change still counted as a fixed point. Zero means exact equality.
    pub theta: f64,
    /// TD(n) horizon.
    pub horizon: usize,
    pub epsilon: EpsilonSchedule,
    pub max_episode_steps: usize,
    pub visit: Visit,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            iterations: 100_000,
            max_sweeps: None,
            alpha: 0.1,
            lambda: 0.9,
            gamma: 1.0,
            theta: 0.0,
            horizon: 0,
            epsilon: EpsilonSchedule::default(),
            max_episode_steps: 1_000_000,
            visit: Visit::First,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        check("alpha", self.alpha, "alpha > 0", |v| v > 0.)?;
        check("lambda", self.lambda, "0 <= lambda <= 1", unit)?;
        check("gamma", self.gamma, "0 <= gamma <= 1", unit)?;
        check("theta", self.theta, "theta >= 0", |v| v >= 0.)?;
        check("epsilon", self.epsilon.base(), "0 <= epsilon <= 1", unit)?;
        check(
            "max_episode_steps",
            self.max_episode_steps as f64,
            "a positive step ceiling",
            |v| v > 0.,
        )?;
        check(
            "max_sweeps",
            self.max_sweeps.map_or(1., |n| n as f64),
            "a positive sweep budget",
            |v| v > 0.,
        )
    }
}

fn unit(v: f64) -> bool {
    (0. ..=1.).contains(&v)
}

fn check(name: &'static str, value: f64, expected: &'static str, ok: fn(f64) -> bool) -> Result<()> {
    if ok(value) {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            expected,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    DpEvaluation,
    ValueIteration,
    MonteCarlo,
    TdN,
    TdLambda,
    MonteCarloControl,
    Sarsa,
    SarsaLambda,
}

/// What the runner binary executes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub grid_size: usize,
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
    pub engine: EngineConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            seed: None,
            algorithm: Algorithm::DpEvaluation,
            engine: EngineConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg = serde_json::from_str::<RunConfig>(json)?;
        cfg.engine.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config '{}'", path.display()),
            source,
        })?;
        Self::from_json(&json)
    }
}
