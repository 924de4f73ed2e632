//! The Tower of Hanoi as a finite MDP.
mod model;
mod space;
mod state;
pub use model::{initial_distribution, TransitionModel, TransitionTable, GOAL_REWARD};
pub use space::StateSpace;
pub use state::State;

use crate::{error::TohError, ActionSet, Move, TohEnvConfig};
use log::info;
use toh_core::{DiscreteMdp, Transition};

/// Immutable description of the puzzle as an MDP.
///
/// Everything is computed in [`TohMdp::new`]; afterwards the value is only
/// read, so it can be shared between environments with an
/// [`Arc`](std::sync::Arc).
#[derive(Debug, Clone)]
pub struct TohMdp {
    n_poles: usize,
    n_rings: usize,
    actions: ActionSet,
    space: StateSpace,
    goal: State,
    transitions: TransitionTable,
    isd: Vec<f32>,
}

impl TohMdp {
    /// Enumerates the states and builds the tables.
    ///
    /// The configuration is validated before any work is done.
    pub fn new(config: &TohEnvConfig) -> Result<Self, TohError> {
        config.validate()?;
        let (n_poles, n_rings) = (config.poles, config.rings);

        let actions = ActionSet::new(n_poles);
        let space = StateSpace::enumerate(State::initial(n_poles, n_rings), &actions);
        let goal = State::goal(n_poles, n_rings);
        let transitions = TransitionModel::new(
            &space,
            goal.clone(),
            config.noise,
            config.step_reward,
            config.invalid_reward,
        )
        .build(&actions)?;
        let isd = initial_distribution(&space)?;

        info!(
            "Built Tower of Hanoi MDP with {} poles and {} rings: {} states, {} actions",
            n_poles,
            n_rings,
            space.len(),
            actions.len()
        );

        Ok(Self {
            n_poles,
            n_rings,
            actions,
            space,
            goal,
            transitions,
            isd,
        })
    }

    /// The number of poles.
    pub fn n_poles(&self) -> usize {
        self.n_poles
    }

    /// The number of rings.
    pub fn n_rings(&self) -> usize {
        self.n_rings
    }

    /// The moves, in action-index order.
    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// The move of action `a`.
    pub fn action(&self, a: usize) -> Option<Move> {
        self.actions.get(a)
    }

    /// The enumerated states and their indices.
    pub fn states(&self) -> &StateSpace {
        &self.space
    }

    /// The state of index `s`.
    ///
    /// Panics if `s` is out of range.
    pub fn state(&self, s: usize) -> &State {
        self.space.state(s)
    }

    /// The index of the goal state, `None` if it can not be reached (two poles).
    pub fn goal_index(&self) -> Option<usize> {
        self.space.index_of(&self.goal)
    }

    /// `true` if `s` is the goal state.
    pub fn is_goal(&self, s: usize) -> bool {
        *self.space.state(s) == self.goal
    }

    /// The whole transition table, `[state][action]`.
    pub fn transition_table(&self) -> &TransitionTable {
        &self.transitions
    }
}

impl DiscreteMdp for TohMdp {
    fn n_states(&self) -> usize {
        self.space.len()
    }

    fn n_actions(&self) -> usize {
        self.actions.len()
    }

    fn transitions(&self, s: usize, a: usize) -> &[Transition] {
        &self.transitions[s][a]
    }

    fn initial_distribution(&self) -> &[f32] {
        &self.isd
    }
}
