use crate::error::{Error, Result};
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moves available in every state. The declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Up => "UP",
            Action::Down => "DOWN",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
        };
        f.pad(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub row: usize,
    pub col: usize,
}

impl State {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index into an `N×N` table.
    pub fn ix(self) -> [usize; 2] {
        [self.row, self.col]
    }

    /// Index into an `N×N×4` table.
    pub fn ix_with(self, a: Action) -> [usize; 3] {
        [self.row, self.col, a.index()]
    }
}

impl From<(usize, usize)> for State {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Square grid with absorbing corners at `(0,0)` and `(N-1,N-1)`.
///
/// Every move out of a non-terminal cell costs 1. Moves that would leave the
/// grid leave the agent where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWorld {
    size: usize,
}

impl GridWorld {
    pub const MIN_SIZE: usize = 3;

    pub fn new(size: usize) -> Result<Self> {
        if size < Self::MIN_SIZE {
            return Err(Error::InvalidGridSize {
                size,
                min: Self::MIN_SIZE,
            });
        }

        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn n_s(&self) -> usize {
        self.size * self.size
    }

    pub fn is_terminal(&self, s: State) -> bool {
        let last = self.size - 1;
        (s.row == 0 && s.col == 0) || (s.row == last && s.col == last)
    }

    pub fn reward(&self, s: State) -> f64 {
        if self.is_terminal(s) {
            0.
        } else {
            -1.
        }
    }

    pub fn transition(&self, s: State, a: Action) -> State {
        if self.is_terminal(s) {
            return s;
        }

        let last = self.size - 1;
        let State { mut row, mut col } = s;
        match a {
            Action::Up => row = row.saturating_sub(1),
            Action::Down => row = (row + 1).min(last),
            Action::Left => col = col.saturating_sub(1),
            Action::Right => col = (col + 1).min(last),
        }

        State { row, col }
    }

    /// All states in row-major order.
    pub fn states(&self) -> impl Iterator<Item = State> {
        iproduct!(0..self.size, 0..self.size).map(State::from)
    }
}
