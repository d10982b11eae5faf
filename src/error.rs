//! Error types for the grid world crate

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("grid size {size} is too small (must be at least {min})")]
    InvalidGridSize { size: usize, min: usize },

    #[error("invalid {name} = {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("episode exceeded {limit} steps without reaching a terminal state")]
    EpisodeTooLong { limit: usize },

    #[error("no fixed point after {sweeps} sweeps")]
    NotConverged { sweeps: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
