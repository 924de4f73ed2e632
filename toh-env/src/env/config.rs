//! Configuration of [`TohEnv`](super::TohEnv).
use super::RenderMode;
use crate::error::TohError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`TohEnv`](super::TohEnv).
///
/// ```
/// use toh_env::TohEnvConfig;
///
/// let config = TohEnvConfig::default()
///     .poles(4)
///     .rings(3)
///     .noise(0.1)
///     .step_reward(-0.01);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct TohEnvConfig {
    /// The number of poles, at least 2.
    pub(crate) poles: usize,

    /// The number of rings, at least 1.
    pub(crate) rings: usize,

    /// Probability in `[0, 1)` that a move slips onto the next pole.
    pub(crate) noise: f32,

    /// Reward of an ordinary move.
    pub(crate) step_reward: f32,

    /// Reward of a move putting a ring on a smaller one.
    pub(crate) invalid_reward: f32,

    /// Episodes are truncated after this number of steps.
    pub(crate) max_steps: Option<usize>,

    /// Renders the environment at every reset and step when set.
    pub(crate) render_mode: Option<RenderMode>,
}

impl Default for TohEnvConfig {
    fn default() -> Self {
        Self {
            poles: 3,
            rings: 3,
            noise: 0.0,
            step_reward: 0.0,
            invalid_reward: 0.0,
            max_steps: None,
            render_mode: None,
        }
    }
}

impl TohEnvConfig {
    /// Sets the number of poles.
    pub fn poles(mut self, v: usize) -> Self {
        self.poles = v;
        self
    }

    /// Sets the number of rings.
    pub fn rings(mut self, v: usize) -> Self {
        self.rings = v;
        self
    }

    /// Sets the probability of slipping.
    pub fn noise(mut self, v: f32) -> Self {
        self.noise = v;
        self
    }

    /// Sets the reward of an ordinary move.
    pub fn step_reward(mut self, v: f32) -> Self {
        self.step_reward = v;
        self
    }

    /// Sets the reward of an invalid move.
    pub fn invalid_reward(mut self, v: f32) -> Self {
        self.invalid_reward = v;
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets the render mode.
    pub fn render_mode(mut self, v: Option<RenderMode>) -> Self {
        self.render_mode = v;
        self
    }

    /// Checks every value against its domain.
    pub fn validate(&self) -> Result<(), TohError> {
        if self.poles < 2 {
            return Err(TohError::InvalidConfig(format!(
                "poles must be at least 2, got {}",
                self.poles
            )));
        }
        if self.rings < 1 {
            return Err(TohError::InvalidConfig(format!(
                "rings must be at least 1, got {}",
                self.rings
            )));
        }
        if !(0.0..1.0).contains(&self.noise) {
            return Err(TohError::InvalidConfig(format!(
                "noise must be in [0, 1), got {}",
                self.noise
            )));
        }
        if !self.step_reward.is_finite() || !self.invalid_reward.is_finite() {
            return Err(TohError::InvalidConfig(
                "rewards must be finite".to_string(),
            ));
        }
        if self.max_steps == Some(0) {
            return Err(TohError::InvalidConfig(
                "max_steps must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Constructs [`TohEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TohEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
