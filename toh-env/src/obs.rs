use toh_core::Obs;

/// Observation of [`TohEnv`](crate::TohEnv): the index of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TohObs {
    pub state: usize,
}

impl From<usize> for TohObs {
    fn from(state: usize) -> Self {
        Self { state }
    }
}

impl Obs for TohObs {
    fn dummy(_n: usize) -> Self {
        Self { state: 0 }
    }

    fn len(&self) -> usize {
        1
    }
}
