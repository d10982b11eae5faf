//! Tabular prediction and control on a square grid world with absorbing
//! corners - Sutton & Barto 2018, example 4.1.

pub mod config;
pub mod error;
pub mod mdps;

pub use config::{Algorithm, EngineConfig, EpsilonSchedule, RunConfig, Visit};
pub use error::{Error, Result};
pub use mdps::grid_world::{Action, GridWorld, State};
pub use mdps::random_source::{RandomSource, SeededSource};
pub use mdps::solvers::ControlOutcome;
pub use mdps::tables::{greedy_policy, Policy, QTable, ValueTable};
