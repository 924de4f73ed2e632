//! Policies and objects built from a YAML configuration.
use super::Env;
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader, path::Path};

/// Chooses the next action of an episode.
///
/// Observations and actions of the environments in this workspace are
/// indices: the policy reads the index of the current state and returns the
/// index of an action. Sampling may consume the policy's own random state, so
/// it takes `&mut self`.
pub trait Policy<E: Env> {
    /// Returns the action to take after observing `obs`.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}

/// An object built from a serializable configuration.
pub trait Configurable<E: Env> {
    /// Configuration.
    type Config: Clone + DeserializeOwned;

    /// Builds the object, failing if `config` is out of its domain.
    fn build(config: Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// Builds the object with the configuration in the YAML file at `path`.
    ///
    /// Errors from reading the file, parsing it and [`Configurable::build`]
    /// are all returned.
    fn build_from_path(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let rdr = BufReader::new(File::open(path)?);
        let config = serde_yaml::from_reader(rdr)?;
        Self::build(config)
    }
}
