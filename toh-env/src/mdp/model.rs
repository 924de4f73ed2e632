//! Transition table and initial-state distribution.
use super::{State, StateSpace};
use crate::{error::TohError, ActionSet, Move};
use toh_core::Transition;

/// Reward for the move that completes the puzzle.
pub const GOAL_REWARD: f32 = 1.0;

/// Outcomes of every action in every state, indexed as `table[state][action]`.
pub type TransitionTable = Vec<Vec<Vec<Transition>>>;

/// Builds the transition table of a [`StateSpace`].
///
/// * The goal state is absorbing: every action loops back with reward 0 and
///   ends the episode.
/// * A move from an empty pole leaves the state unchanged with the step reward.
/// * A move putting a ring on a smaller one leaves the state unchanged, gives
///   the invalid-move reward and ends the episode.
/// * A move reaching the goal gives [`GOAL_REWARD`] and ends the episode.
/// * Any other move gives the step reward.
///
/// With `noise > 0` every action has two outcomes: the intended move with
/// probability `1 - noise`, and with probability `noise` the move slipped onto
/// the next pole (see [`Move::slipped`]).
pub struct TransitionModel<'a> {
    space: &'a StateSpace,
    goal: State,
    noise: f32,
    step_reward: f32,
    invalid_reward: f32,
}

impl<'a> TransitionModel<'a> {
    /// Constructs the model. `noise` is expected to be validated already.
    pub fn new(
        space: &'a StateSpace,
        goal: State,
        noise: f32,
        step_reward: f32,
        invalid_reward: f32,
    ) -> Self {
        Self {
            space,
            goal,
            noise,
            step_reward,
            invalid_reward,
        }
    }

    /// Builds the table for every state in the space and every action in `actions`.
    pub fn build(&self, actions: &ActionSet) -> Result<TransitionTable, TohError> {
        (0..self.space.len())
            .map(|s| {
                actions
                    .iter()
                    .map(|&mv| self.transitions(s, mv))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }

    /// Outcomes of `mv` in state `s`.
    pub fn transitions(&self, s: usize, mv: Move) -> Result<Vec<Transition>, TohError> {
        if *self.space.state(s) == self.goal {
            return Ok(vec![Transition::new(1.0, s, 0.0, true)]);
        }

        if self.noise == 0.0 {
            Ok(vec![self.outcome(s, mv, 1.0)?])
        } else {
            let slipped = mv.slipped(self.space.state(s).n_poles());
            Ok(vec![
                self.outcome(s, mv, 1.0 - self.noise)?,
                self.outcome(s, slipped, self.noise)?,
            ])
        }
    }

    fn outcome(&self, s: usize, mv: Move, probability: f32) -> Result<Transition, TohError> {
        let t = match self.space.state(s).apply(mv) {
            None => Transition::new(probability, s, self.step_reward, false),
            Some(next) if !next.is_valid() => {
                Transition::new(probability, s, self.invalid_reward, true)
            }
            Some(next) => {
                let ix = self.index_of(&next)?;
                if next == self.goal {
                    Transition::new(probability, ix, GOAL_REWARD, true)
                } else {
                    Transition::new(probability, ix, self.step_reward, false)
                }
            }
        };
        Ok(t)
    }

    fn index_of(&self, state: &State) -> Result<usize, TohError> {
        self.space
            .index_of(state)
            .ok_or_else(|| TohError::UnknownState(state.to_string()))
    }
}

/// Uniform distribution over the valid states of `space`.
pub fn initial_distribution(space: &StateSpace) -> Result<Vec<f32>, TohError> {
    let weights = space
        .iter()
        .map(|s| if s.is_valid() { 1f32 } else { 0f32 })
        .collect::<Vec<_>>();
    let total: f32 = weights.iter().sum();
    if total == 0.0 {
        return Err(TohError::NoValidState);
    }
    Ok(weights.into_iter().map(|w| w / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = -0.1;
    const INVALID: f32 = -5.0;

    fn setup(n_poles: usize, n_rings: usize) -> (StateSpace, ActionSet) {
        let actions = ActionSet::new(n_poles);
        let space = StateSpace::enumerate(State::initial(n_poles, n_rings), &actions);
        (space, actions)
    }

    fn ix(space: &StateSpace, poles: Vec<Vec<usize>>) -> usize {
        space.index_of(&State::new(poles)).unwrap()
    }

    #[test]
    fn test_deterministic_outcomes() {
        let (space, _) = setup(3, 2);
        let model = TransitionModel::new(&space, State::goal(3, 2), 0.0, STEP, INVALID);
        let start = ix(&space, vec![vec![2, 1], vec![], vec![]]);
        let s = ix(&space, vec![vec![2], vec![], vec![1]]);

        // regular move
        assert_eq!(
            model.transitions(start, Move::new(0, 2)).unwrap(),
            vec![Transition::new(1.0, s, STEP, false)]
        );

        // empty source
        assert_eq!(
            model.transitions(start, Move::new(1, 2)).unwrap(),
            vec![Transition::new(1.0, start, STEP, false)]
        );

        // illegal stacking ends the episode in place
        assert_eq!(
            model.transitions(s, Move::new(0, 2)).unwrap(),
            vec![Transition::new(1.0, s, INVALID, true)]
        );
    }

    #[test]
    fn test_goal_reward() {
        let (space, _) = setup(3, 2);
        let model = TransitionModel::new(&space, State::goal(3, 2), 0.0, STEP, INVALID);
        let s = ix(&space, vec![vec![], vec![1], vec![2]]);
        let goal = ix(&space, vec![vec![], vec![], vec![2, 1]]);
        assert_eq!(
            model.transitions(s, Move::new(1, 2)).unwrap(),
            vec![Transition::new(1.0, goal, GOAL_REWARD, true)]
        );
    }

    #[test]
    fn test_goal_is_absorbing() {
        let (space, actions) = setup(3, 3);
        let model = TransitionModel::new(&space, State::goal(3, 3), 0.3, STEP, INVALID);
        let goal = space.index_of(&State::goal(3, 3)).unwrap();
        for &mv in actions.iter() {
            assert_eq!(
                model.transitions(goal, mv).unwrap(),
                vec![Transition::new(1.0, goal, 0.0, true)]
            );
        }
    }

    #[test]
    fn test_slip() {
        let (space, _) = setup(3, 2);
        let model = TransitionModel::new(&space, State::goal(3, 2), 0.5, STEP, INVALID);
        let start = ix(&space, vec![vec![2, 1], vec![], vec![]]);
        let on_1 = ix(&space, vec![vec![2], vec![1], vec![]]);
        let on_2 = ix(&space, vec![vec![2], vec![], vec![1]]);
        assert_eq!(
            model.transitions(start, Move::new(0, 1)).unwrap(),
            vec![
                Transition::new(0.5, on_1, STEP, false),
                Transition::new(0.5, on_2, STEP, false),
            ]
        );
    }

    #[test]
    fn test_slip_back_onto_source() {
        let (space, _) = setup(3, 2);
        let model = TransitionModel::new(&space, State::goal(3, 2), 0.25, STEP, INVALID);
        let start = ix(&space, vec![vec![2, 1], vec![], vec![]]);
        let on_2 = ix(&space, vec![vec![2], vec![], vec![1]]);
        assert_eq!(
            model.transitions(start, Move::new(0, 2)).unwrap(),
            vec![
                Transition::new(0.75, on_2, STEP, false),
                Transition::new(0.25, start, STEP, false),
            ]
        );
    }

    #[test]
    fn test_table_shape() {
        let (space, actions) = setup(4, 2);
        let model = TransitionModel::new(&space, State::goal(4, 2), 0.1, STEP, INVALID);
        let table = model.build(&actions).unwrap();
        assert_eq!(table.len(), space.len());
        assert!(table.iter().all(|row| row.len() == actions.len()));
    }

    #[test]
    fn test_initial_distribution() {
        let (space, _) = setup(3, 3);
        let isd = initial_distribution(&space).unwrap();
        assert_eq!(isd.len(), 27);
        assert!(isd.iter().all(|&p| (p - 1.0 / 27.0).abs() < 1e-6));
    }
}
