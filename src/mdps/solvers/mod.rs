pub mod dp;
pub mod mc_methods;
pub mod sarsa;
pub mod td_methods;

use super::tables::{q_optimum, Policy, QTable, ValueTable};
use serde::Serialize;

/// What a control engine hands back: the learned Q table and what it implies.
#[derive(Debug, Clone, Serialize)]
pub struct ControlOutcome {
    pub q: QTable,
    pub v_star: ValueTable,
    pub pi_star: Policy,
    /// Steps taken across all episodes.
    pub steps: usize,
}

impl ControlOutcome {
    pub fn from_q(q: QTable, steps: usize) -> Self {
        let (v_star, pi_star) = q_optimum(&q);
        Self {
            q,
            v_star,
            pi_star,
            steps,
        }
    }
}
