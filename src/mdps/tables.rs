use super::grid_world::{Action, GridWorld, State};
use ndarray::{Array2, Array3, ArrayView1};

/// One estimate per state, indexed `[row, col]`.
pub type ValueTable = Array2<f64>;

/// One estimate per state-action pair, indexed `[row, col, action]`.
pub type QTable = Array3<f64>;

/// Greedy action per state, indexed `[row, col]`.
pub type Policy = Array2<Action>;

pub fn value_table(grid: &GridWorld) -> ValueTable {
    ValueTable::zeros((grid.size(), grid.size()))
}

pub fn q_table(grid: &GridWorld) -> QTable {
    QTable::zeros((grid.size(), grid.size(), Action::COUNT))
}

/// First action with the strictly largest score, walking `Action::ALL` in order.
pub fn first_argmax(score: impl Fn(Action) -> f64) -> (Action, f64) {
    let mut best = (Action::Up, f64::NEG_INFINITY);
    for a in Action::ALL {
        let v = score(a);
        if v > best.1 {
            best = (a, v);
        }
    }

    best
}

/// One-step lookahead greedy policy over a state-value table.
pub fn greedy_policy(grid: &GridWorld, v: &ValueTable, gamma: f64) -> Policy {
    Policy::from_shape_fn((grid.size(), grid.size()), |(row, col)| {
        let s = State::new(row, col);
        first_argmax(|a| grid.reward(s) + gamma * v[grid.transition(s, a).ix()]).0
    })
}

pub fn greedy_action(q: &QTable, s: State) -> Action {
    let qs = q_row(q, s);
    first_argmax(|a| qs[a.index()]).0
}

pub fn q_row(q: &QTable, s: State) -> ArrayView1<'_, f64> {
    q.slice(ndarray::s![s.row, s.col, ..])
}

/// `max_a Q` and `argmax_a Q` for every state.
pub fn q_optimum(q: &QTable) -> (ValueTable, Policy) {
    let (rows, cols, _) = q.dim();
    let mut v_star = ValueTable::zeros((rows, cols));
    let mut pi_star = Policy::from_elem((rows, cols), Action::Up);
    for ((row, col), v) in v_star.indexed_iter_mut() {
        let (a, best) = {
            let qs = q_row(q, State::new(row, col));
            first_argmax(|a| qs[a.index()])
        };
        *v = best;
        pi_star[[row, col]] = a;
    }

    (v_star, pi_star)
}
