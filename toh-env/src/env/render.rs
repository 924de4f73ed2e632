//! Text rendering of the poles.
use crate::{error::TohError, Move, State};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Where [`Renderer::render`] sends the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Writes to the standard output.
    Human,

    /// Returns the frame as a string.
    Ansi,
}

/// Draws poles as columns and rings as bars whose width is the ring size.
///
/// ```text
/// Pole 1 to Pole 3
///    ||      ||      ||
///    ||      ||      ||
///  ~~||~~    ||      ||
/// ~~~||~~~   ||     ~||~
/// ‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    n_rings: usize,
    empty: String,
    rings: Vec<String>,
    floor: String,
}

impl Renderer {
    /// Constructs a renderer for `n_poles` poles holding rings `1..=n_rings`.
    pub fn new(n_poles: usize, n_rings: usize) -> Self {
        let n = n_rings;
        let rings = (1..=n)
            .map(|r| {
                format!(
                    "{pad}{bar}||{bar}{pad}",
                    pad = " ".repeat(n - r),
                    bar = "~".repeat(r)
                )
            })
            .collect();

        Self {
            n_rings,
            empty: format!("{pad}||{pad}", pad = " ".repeat(n)),
            rings,
            floor: "\u{203e}".repeat((2 * n + 4) * n_poles),
        }
    }

    /// The frame of `state`, headed by the last move or an empty line.
    ///
    /// Fails with [`TohError::RingMismatch`] if `state` has a ring outside
    /// `1..=n_rings` or more rings on a pole than the renderer was built for.
    pub fn frame(&self, state: &State, last_move: Option<Move>) -> Result<String, TohError> {
        let fits = state.poles().iter().all(|pole| {
            pole.len() <= self.n_rings && pole.iter().all(|&r| r >= 1 && r <= self.n_rings)
        });
        if !fits {
            return Err(TohError::RingMismatch(state.to_string(), self.n_rings));
        }
        let height = self.n_rings + 1;

        // Columns listed top to bottom.
        let columns = state
            .poles()
            .iter()
            .map(|pole| {
                let mut column = vec![self.empty.as_str(); height - pole.len()];
                column.extend(pole.iter().rev().map(|&r| self.rings[r - 1].as_str()));
                column
            })
            .collect::<Vec<_>>();

        let mut out = match last_move {
            Some(mv) => format!("{}\n", mv),
            None => "\n".to_string(),
        };
        for row in 0..height {
            for column in columns.iter() {
                out.push_str(column[row]);
            }
            out.push('\n');
        }
        out.push_str(&self.floor);
        out.push('\n');
        Ok(out)
    }

    /// Renders `state` in the given mode.
    ///
    /// Returns the frame with [`RenderMode::Ansi`] and `None` with
    /// [`RenderMode::Human`], which writes it to the standard output.
    pub fn render(
        &self,
        state: &State,
        last_move: Option<Move>,
        mode: RenderMode,
    ) -> Result<Option<String>> {
        let frame = self.frame(state, last_move)?;
        match mode {
            RenderMode::Ansi => Ok(Some(frame)),
            RenderMode::Human => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(frame.as_bytes())?;
                handle.flush()?;
                Ok(None)
            }
        }
    }
}
