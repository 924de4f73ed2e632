//! Enumeration of reachable states and the mapping between states and indices.
use super::State;
use crate::ActionSet;
use log::debug;
use std::collections::HashMap;

/// The valid states reachable from a start state, indexed in discovery order.
#[derive(Debug, Clone)]
pub struct StateSpace {
    states: Vec<State>,
    index: HashMap<State, usize>,
}

impl StateSpace {
    /// Computes the smallest set of states containing `start` that is closed
    /// under applying any action and keeping the valid results.
    ///
    /// States are expanded in the order they were discovered, each with the
    /// actions in the order of `actions`, so the indices are reproducible for
    /// a fixed number of poles and rings. Expansion stops when every
    /// discovered state has been expanded without admitting a new one.
    pub fn enumerate(start: State, actions: &ActionSet) -> Self {
        debug_assert!(start.is_valid());
        let mut states = vec![start.clone()];
        let mut index = HashMap::from([(start, 0)]);
        let mut cursor = 0;

        while cursor < states.len() {
            let n_before = states.len();
            for &mv in actions.iter() {
                let next = match states[cursor].apply(mv) {
                    Some(next) if next.is_valid() => next,
                    _ => continue,
                };
                if !index.contains_key(&next) {
                    index.insert(next.clone(), states.len());
                    states.push(next);
                }
            }
            cursor += 1;

            if states.len() > n_before {
                debug!(
                    "Expanded {} of {} discovered states",
                    cursor,
                    states.len()
                );
            }
        }

        Self { states, index }
    }

    /// The number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`, the start state is part of the space.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The state of index `ix`.
    ///
    /// Panics if `ix` is out of range.
    pub fn state(&self, ix: usize) -> &State {
        &self.states[ix]
    }

    /// The state of index `ix`, `None` if out of range.
    pub fn get(&self, ix: usize) -> Option<&State> {
        self.states.get(ix)
    }

    /// The index of `state`, `None` if it was not discovered.
    pub fn index_of(&self, state: &State) -> Option<usize> {
        self.index.get(state).copied()
    }

    /// Iterates over the states in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }
}
