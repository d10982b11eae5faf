use super::grid_world::{Action, State};
use super::random_source::RandomSource;
use super::tables::{greedy_action, QTable};

/// Picks the action taken from a state while generating experience.
pub trait BehaviorPolicy {
    fn act(&self, s: State, rng: &mut dyn RandomSource) -> Action;
}

/// Each of the four actions with probability 1/4.
pub struct UniformPolicy;

impl BehaviorPolicy for UniformPolicy {
    fn act(&self, _s: State, rng: &mut dyn RandomSource) -> Action {
        rng.uniform_action()
    }
}

/// Greedy on `q` when a uniform draw exceeds `epsilon`, otherwise uniform over all actions.
pub struct EpsilonGreedy<'a> {
    pub q: &'a QTable,
    pub epsilon: f64,
}

impl BehaviorPolicy for EpsilonGreedy<'_> {
    fn act(&self, s: State, rng: &mut dyn RandomSource) -> Action {
        if rng.uniform_real01() > self.epsilon {
            greedy_action(self.q, s)
        } else {
            rng.uniform_action()
        }
    }
}
