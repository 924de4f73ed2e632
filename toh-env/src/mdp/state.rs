//! Arrangements of rings on poles.
use crate::Move;
use std::fmt;

/// An arrangement of rings on poles.
///
/// Each pole lists ring sizes from bottom to top, so the last element is the
/// ring that can be moved. Equality and hashing are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State(Vec<Vec<usize>>);

impl State {
    /// Constructs a state from poles listed bottom to top.
    pub fn new(poles: Vec<Vec<usize>>) -> Self {
        Self(poles)
    }

    /// All rings on the first pole, largest at the bottom.
    pub fn initial(n_poles: usize, n_rings: usize) -> Self {
        let mut poles = vec![vec![]; n_poles];
        poles[0] = (1..=n_rings).rev().collect();
        Self(poles)
    }

    /// All rings on the last pole, largest at the bottom.
    pub fn goal(n_poles: usize, n_rings: usize) -> Self {
        let mut poles = vec![vec![]; n_poles];
        poles[n_poles - 1] = (1..=n_rings).rev().collect();
        Self(poles)
    }

    /// The poles, each listed bottom to top.
    pub fn poles(&self) -> &[Vec<usize>] {
        &self.0
    }

    /// The number of poles.
    pub fn n_poles(&self) -> usize {
        self.0.len()
    }

    /// `true` iff no ring rests on a smaller one.
    pub fn is_valid(&self) -> bool {
        self.0
            .iter()
            .all(|pole| pole.windows(2).all(|w| w[0] > w[1]))
    }

    /// Moves the topmost ring of `mv.source` onto `mv.dest`.
    ///
    /// Returns `None` when the source pole is empty. The size order on the
    /// destination is not checked here: putting a ring on a smaller one gives a
    /// state for which [`State::is_valid`] returns `false`.
    ///
    /// Panics if a pole index of `mv` is out of range.
    pub fn apply(&self, mv: Move) -> Option<State> {
        let mut poles = self.0.clone();
        let ring = poles[mv.source].pop()?;
        poles[mv.dest].push(ring);
        Some(Self(poles))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, pole) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", pole)?;
        }
        write!(f, ")")
    }
}
