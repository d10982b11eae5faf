use super::behavior::BehaviorPolicy;
use super::grid_world::{Action, GridWorld, State};
use super::random_source::RandomSource;
use crate::error::{Error, Result};

/// One step of an episode: the state left, the action taken and the reward collected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub s: State,
    pub a: Action,
    pub r: f64,
}

/// Row first, then column, each uniform over `[0, N)`.
pub fn random_start(grid: &GridWorld, rng: &mut dyn RandomSource) -> State {
    let row = rng.uniform_int(grid.size());
    let col = rng.uniform_int(grid.size());
    State::new(row, col)
}

/// Follows `pi` from a random start until a terminal state.
///
/// A terminal start yields an empty episode. Fails once more than `max_steps`
/// steps have been taken.
pub fn generate_episode(
    grid: &GridWorld,
    pi: &dyn BehaviorPolicy,
    rng: &mut dyn RandomSource,
    max_steps: usize,
) -> Result<Vec<Step>> {
    let mut s = random_start(grid, rng);
    let mut ep = vec![];
    while !grid.is_terminal(s) {
        if ep.len() == max_steps {
            return Err(Error::EpisodeTooLong { limit: max_steps });
        }

        let a = pi.act(s, rng);
        ep.push(Step {
            s,
            a,
            r: grid.reward(s),
        });
        s = grid.transition(s, a);
    }

    Ok(ep)
}

/// `G_t = r_t + gamma * G_{t+1}` for every step, computed back to front.
pub fn discounted_returns(ep: &[Step], gamma: f64) -> Vec<f64> {
    let mut returns = vec![0.; ep.len()];
    let mut g = 0.;
    for t in (0..ep.len()).rev() {
        g = ep[t].r + gamma * g;
        returns[t] = g;
    }

    debug_assert_eq!(returns.len(), ep.len());
    returns
}

#[cfg(test)]
mod tests {
    use super::super::behavior::UniformPolicy;
    use super::super::random_source::{scripted::ScriptedSource, SeededSource};
    use super::*;
    use assertor::*;
    use float_eq::*;
    use Action::*;

    #[test]
    fn walks_until_terminal() {
        let grid = GridWorld::new(4).unwrap();
        let rng = &mut ScriptedSource::new(&[0, 2], &[], &[Up, Left, Left]);

        let ep = generate_episode(&grid, &UniformPolicy, rng, 100).unwrap();

        assert_that!(ep.iter().map(|x| x.s).collect::<Vec<_>>()).is_equal_to(vec![
            State::new(0, 2),
            State::new(0, 2),
            State::new(0, 1),
        ]);
        assert_that!(ep.iter().map(|x| x.a).collect::<Vec<_>>()).is_equal_to(vec![Up, Left, Left]);
        assert!(ep.iter().all(|x| x.r == -1.));
        assert!(rng.is_exhausted());
    }

    #[test]
    fn terminal_start_is_empty() {
        let grid = GridWorld::new(5).unwrap();
        let rng = &mut ScriptedSource::new(&[4, 4], &[], &[]);

        let ep = generate_episode(&grid, &UniformPolicy, rng, 100).unwrap();

        assert!(ep.is_empty());
    }

    #[test]
    fn step_ceiling_is_reported() {
        let grid = GridWorld::new(4).unwrap();
        let rng = &mut ScriptedSource::new(&[0, 2], &[], &[Up, Up, Up]);

        let res = generate_episode(&grid, &UniformPolicy, rng, 3);

        assert!(matches!(res, Err(Error::EpisodeTooLong { limit: 3 })));
    }

    #[test]
    fn seeded_episodes_terminate_and_end_next_to_a_corner() {
        let grid = GridWorld::new(5).unwrap();
        let rng = &mut SeededSource::new(2718);
        for _ in 0..200 {
            let ep = generate_episode(&grid, &UniformPolicy, rng, 1_000_000).unwrap();
            if let Some(last) = ep.last() {
                assert!(grid.is_terminal(grid.transition(last.s, last.a)));
            }
        }
    }

    #[test]
    fn returns_accumulate_backwards() {
        let ep = [-1., -2., -3.].map(|r| Step {
            s: State::new(0, 1),
            a: Up,
            r,
        });

        assert_float_eq!(discounted_returns(&ep, 1.), vec![-6., -5., -3.], abs_all <= 1e-12);
        assert_float_eq!(discounted_returns(&ep, 0.5), vec![-2.75, -3.5, -3.], abs_all <= 1e-12);
    }
}
