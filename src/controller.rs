use core::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::display::{DisplaySet, query_displays};
use crate::state::{SavedState, StateError};
use crate::tool::{ToolError, ToolOutput, ToolRunner};

/// Error type for the controller module
#[derive(Error, Debug)]
pub enum ToggleError {
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error("No external display found")]
    NoExternalDisplay,
    #[error("{0}")]
    CommandFailed(String),
}

type Result<T = ()> = std::result::Result<T, ToggleError>;

/// Result of a successful toggle operation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Disabled,
    Enabled,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Disabled => write!(f, "External display disabled"),
            Outcome::Enabled => write!(f, "External display enabled"),
        }
    }
}

/// Snapshot of the external display for a presentation layer.
///
/// A single value handed to whatever renders it, instead of mutable fields
/// observed in place.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExternalStatus {
    /// An external display appears in the tool's report
    pub connected: bool,
    /// The reported external display has a resolution (is not a placeholder)
    pub enabled: bool,
    /// A saved state file exists to restore from
    pub restorable: bool,
}

impl fmt::Display for ExternalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.connected, self.enabled, self.restorable) {
            (false, _, true) => write!(f, "External display disconnected (saved state available)"),
            (false, _, false) => write!(f, "No external display"),
            (true, true, _) => write!(f, "External display active"),
            (true, false, _) => write!(f, "External display disabled"),
        }
    }
}

/// Queries displays through the tool, classifies them, persists the
/// last-known external configuration, and issues enable/disable directives.
pub struct DisplayController<R> {
    runner: R,
    state_path: PathBuf,
}

impl<R: ToolRunner> DisplayController<R> {
    pub fn new(runner: R, state_path: PathBuf) -> Self {
        Self { runner, state_path }
    }

    /// Returns the parsed set of displays from a fresh report
    pub fn list(&self) -> Result<DisplaySet> {
        Ok(query_displays(&self.runner)?)
    }

    /// Returns a status snapshot of the external display
    pub fn status(&self) -> Result<ExternalStatus> {
        let set = self.list()?;
        let external = set.external();

        Ok(ExternalStatus {
            connected: external.is_some(),
            enabled: external.is_some_and(|d| d.enabled()),
            restorable: self.state_path.exists(),
        })
    }

    /// Toggles the external display.
    ///
    /// A visible external display is disabled; an invisible one is re-enabled
    /// from saved state when a state file exists. With neither, this fails
    /// with [`ToggleError::NoExternalDisplay`] without issuing any mutating
    /// invocation.
    pub fn toggle(&self) -> Result<Outcome> {
        let set = self.list()?;

        if let Some(external) = set.external() {
            let id = external.id().to_string();
            self.disable(&id)
        } else if self.state_path.exists() {
            self.enable()
        } else {
            Err(ToggleError::NoExternalDisplay)
        }
    }

    /// Disables the currently visible external display, or fails with
    /// [`ToggleError::NoExternalDisplay`]
    pub fn disable_external(&self) -> Result<Outcome> {
        let set = self.list()?;
        let external = set.external().ok_or(ToggleError::NoExternalDisplay)?;
        let id = external.id().to_string();
        self.disable(&id)
    }

    /// Disables the display with the given id, persisting the current
    /// arrangement first so it can be restored later.
    pub fn disable(&self, id: &str) -> Result<Outcome> {
        // Fresh capture: the report may have changed since the caller's query.
        let set = self.list()?;

        match set.arrangement() {
            Some(line) => SavedState::new(line, id).store(&self.state_path)?,
            None => log::warn!("report has no arrangement line, not saving state"),
        }

        let directive = format!("id:{} enabled:false", id);
        let output = self.runner.run(&[&directive])?;
        Self::check(output)?;

        Ok(Outcome::Disabled)
    }

    /// Re-enables the external display recorded in the state file.
    ///
    /// The enable directive alone restores visibility; the saved arrangement
    /// is then replayed best-effort to restore resolution and position, and
    /// its result is discarded.
    pub fn enable(&self) -> Result<Outcome> {
        let state = SavedState::load(&self.state_path)?;

        let directive = format!("id:{} enabled:true", state.display_id);
        let output = self.runner.run(&[&directive])?;
        Self::check(output)?;

        if let Some(args) = state.arrangement_args() {
            match self.runner.run(&args) {
                Ok(output) if !output.succeeded() => {
                    log::debug!("arrangement replay reported: {}", output.text.trim());
                }
                Ok(_) => {}
                Err(err) => log::debug!("arrangement replay failed to launch: {}", err),
            }
        }

        Ok(Outcome::Enabled)
    }

    /// Judges a mutating invocation, surfacing the tool's own text as the
    /// failure message.
    fn check(output: ToolOutput) -> Result {
        if output.succeeded() {
            let text = output.text.trim();
            if !text.is_empty() {
                log::warn!("displayplacer reported: {}", text);
            }
            return Ok(());
        }

        let text = output.text.trim();
        if text.is_empty() {
            // Non-zero exit with nothing printed; synthesize a message.
            return Err(ToggleError::CommandFailed(match output.code {
                Some(code) => format!("displayplacer exited with status {}", code),
                None => "displayplacer terminated by signal".to_string(),
            }));
        }

        Err(ToggleError::CommandFailed(text.to_string()))
    }
}
