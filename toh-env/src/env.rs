mod config;
mod render;
use crate::{Move, State, TohAct, TohMdp, TohObs};
use anyhow::Result;
pub use config::TohEnvConfig;
use log::info;
pub use render::{RenderMode, Renderer};
use std::sync::Arc;
use toh_core::{
    error::CoreError,
    record::{Record, RecordValue},
    DiscreteMdp, DiscreteMdpDriver, Env, Info, Obs, Step,
};

/// Information attached to every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TohInfo {
    /// Probability of the transition that happened.
    pub prob: f32,
}

impl Info for TohInfo {}

/// The Tower of Hanoi environment.
///
/// The MDP is shared through an [`Arc`], so environments running concurrent
/// episodes on the same puzzle can be created with [`TohEnv::from_mdp`]
/// without enumerating the states again. The current state, the last action
/// and the random number generator belong to each environment.
pub struct TohEnv {
    driver: DiscreteMdpDriver<TohMdp>,

    renderer: Renderer,

    // Renders at every reset and step if set
    render_mode: Option<RenderMode>,

    // Truncates the episode after this number of steps
    max_steps: Option<usize>,

    // Steps since the last reset
    n_steps: usize,
}

impl TohEnv {
    /// Builds an environment on an already constructed MDP.
    ///
    /// Only the episode settings of `config` are used (`max_steps` and
    /// `render_mode`); the puzzle is the one of `mdp`.
    pub fn from_mdp(mdp: Arc<TohMdp>, config: &TohEnvConfig, seed: u64) -> Self {
        let renderer = Renderer::new(mdp.n_poles(), mdp.n_rings());
        Self {
            driver: DiscreteMdpDriver::from_seed(mdp, seed),
            renderer,
            render_mode: config.render_mode,
            max_steps: config.max_steps,
            n_steps: 0,
        }
    }

    /// The MDP the environment runs on.
    pub fn mdp(&self) -> &Arc<TohMdp> {
        self.driver.mdp()
    }

    /// The number of actions.
    pub fn n_actions(&self) -> usize {
        self.mdp().n_actions()
    }

    /// The current state, `None` before the first reset.
    pub fn state(&self) -> Option<&State> {
        self.driver.state().map(|s| self.mdp().state(s))
    }

    /// The last move taken in the current episode.
    pub fn last_move(&self) -> Option<Move> {
        self.driver
            .last_action()
            .and_then(|a| self.mdp().action(a))
    }

    /// Renders the current state.
    ///
    /// See [`Renderer::render`] for the return value.
    pub fn render(&self, mode: RenderMode) -> Result<Option<String>> {
        let s = self.driver.state().ok_or(CoreError::NotReset)?;
        self.renderer
            .render(self.mdp().state(s), self.last_move(), mode)
    }

    // Renders according to the configured mode, the ansi frame goes to `record`.
    fn render_into(&self, record: &mut Record) -> Result<()> {
        if let Some(mode) = self.render_mode {
            if let Some(frame) = self.render(mode)? {
                record.insert("frame", RecordValue::String(frame));
            }
        }
        Ok(())
    }
}

impl Env for TohEnv {
    type Config = TohEnvConfig;
    type Obs = TohObs;
    type Act = TohAct;
    type Info = TohInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized,
    {
        let mdp = TohMdp::new(config)?;
        Ok(Self::from_mdp(Arc::new(mdp), config, seed as u64))
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let t = self.driver.step(a.act)?;
        self.n_steps += 1;

        let is_terminated = t.done as i8;
        let is_truncated = match self.max_steps {
            Some(max_steps) => (!t.done && self.n_steps >= max_steps) as i8,
            None => 0,
        };

        let mut record = Record::empty();
        if let Some(mv) = self.last_move() {
            record.insert("move", RecordValue::String(mv.to_string()));
        }
        record.insert("prob", RecordValue::Scalar(t.probability));
        self.render_into(&mut record)?;

        let step = Step::new(
            t.next_state.into(),
            *a,
            vec![t.reward],
            vec![is_terminated],
            vec![is_truncated],
            TohInfo {
                prob: t.probability,
            },
            TohObs::dummy(1),
        );

        Ok((step, record))
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.n_steps = 0;
        let s = self.driver.reset()?;
        if self.render_mode == Some(RenderMode::Human) {
            self.render(RenderMode::Human)?;
        }
        Ok(s.into())
    }

    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let (mut step, record) = self.step(a)?;
        if step.is_done() {
            step.init_obs = self.reset()?;
        }
        Ok((step, record))
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.driver.seed(ix as u64);
        let obs = self.reset()?;
        info!("Reset with index {}, state = {}", ix, self.mdp().state(obs.state));
        Ok(obs)
    }
}
