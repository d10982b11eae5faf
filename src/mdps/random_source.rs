use super::grid_world::Action;
use rand::prelude::*;

/// Stream of uniform draws driving the episodic engines.
pub trait RandomSource {
    /// Uniform integer in `[0, upper)`.
    fn uniform_int(&mut self, upper: usize) -> usize;

    /// Uniform real in `[0, 1)`.
    fn uniform_real01(&mut self) -> f64;

    fn uniform_action(&mut self) -> Action;
}

pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn uniform_int(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    fn uniform_real01(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn uniform_action(&mut self) -> Action {
        *Action::ALL.choose(&mut self.rng).unwrap_or(&Action::Up)
    }
}
