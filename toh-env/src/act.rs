//! Actions of [`TohEnv`](crate::TohEnv).
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use toh_core::Act;

/// Moving the topmost ring of `source` onto `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Pole the ring is taken from.
    pub source: usize,

    /// Pole the ring is put on.
    pub dest: usize,
}

impl Move {
    /// Constructs a move.
    pub fn new(source: usize, dest: usize) -> Self {
        Self { source, dest }
    }

    /// The move that happens when the action slips: same source, the
    /// destination shifted to the next pole.
    ///
    /// With a slip the destination may wrap around onto the source pole, in
    /// which case the ring is put back where it was.
    pub fn slipped(self, n_poles: usize) -> Self {
        Self {
            source: self.source,
            dest: (self.dest + 1) % n_poles,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pole {} to Pole {}", self.source + 1, self.dest + 1)
    }
}

/// All moves between distinct poles, ordered by `(source, dest)`.
///
/// The position of a move in the set is its action index.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSet(Vec<Move>);

impl ActionSet {
    /// Enumerates the `n_poles * (n_poles - 1)` moves.
    pub fn new(n_poles: usize) -> Self {
        Self(
            (0..n_poles)
                .permutations(2)
                .map(|p| Move::new(p[0], p[1]))
                .collect(),
        )
    }

    /// The number of actions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there is no action, which never happens with two or more poles.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The move of action `ix`.
    pub fn get(&self, ix: usize) -> Option<Move> {
        self.0.get(ix).copied()
    }

    /// The action index of `mv`.
    pub fn index_of(&self, mv: Move) -> Option<usize> {
        self.0.iter().position(|m| *m == mv)
    }

    /// Iterates over the moves in action order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

/// Action of [`TohEnv`](crate::TohEnv): an index into the [`ActionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TohAct {
    pub act: usize,
}

impl TohAct {
    /// Constructs the action of index `act`.
    pub fn new(act: usize) -> Self {
        Self { act }
    }
}

impl Act for TohAct {
    fn len(&self) -> usize {
        1
    }
}

impl From<usize> for TohAct {
    fn from(act: usize) -> Self {
        Self { act }
    }
}
