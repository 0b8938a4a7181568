use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::tool::TOOL_NAME;

/// File name of the state file in the home directory
const STATE_FILE_NAME: &str = ".display-toggle-state";

/// Error type for the state module
#[derive(Error, Debug)]
pub enum StateError {
    #[error("No saved state ({} is missing or unreadable)", .path.display())]
    Missing { path: PathBuf },
    #[error("Invalid state file at {} (expected two lines)", .path.display())]
    Malformed { path: PathBuf },
    #[error("Failed to write state file")]
    Io(#[from] std::io::Error),
}

type Result<T = ()> = std::result::Result<T, StateError>;

/// The last-known external display configuration, persisted across sessions.
///
/// Exactly two lines of UTF-8 text: the tool's invocation-echo line captured
/// before the display was disabled, then the external display id. The file
/// is overwritten on every disable and never deleted, so the id may refer to
/// a display that has since been unplugged or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedState {
    /// The captured arrangement command line (line 1, verbatim)
    pub arrangement: String,
    /// The external display id (line 2, trimmed at read time)
    pub display_id: String,
}

/// Returns `<home>/.display-toggle-state`, or `None` when the home directory
/// cannot be determined.
pub fn default_state_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(STATE_FILE_NAME))
}

impl SavedState {
    pub fn new(arrangement: impl Into<String>, display_id: impl Into<String>) -> Self {
        Self {
            arrangement: arrangement.into(),
            display_id: display_id.into(),
        }
    }

    /// Reads the state file.
    ///
    /// A file that is absent or unreadable reads as `Missing`; one with
    /// fewer than two lines reads as `Malformed`. Lines past the second are
    /// ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let Ok(content) = fs::read_to_string(path) else {
            return Err(StateError::Missing {
                path: path.to_path_buf(),
            });
        };

        let mut lines = content.lines();
        let (Some(arrangement), Some(display_id)) = (lines.next(), lines.next()) else {
            return Err(StateError::Malformed {
                path: path.to_path_buf(),
            });
        };

        Ok(Self::new(arrangement, display_id.trim()))
    }

    /// Writes the two-line state file, atomically overwriting any prior
    /// content (sibling temp file + rename).
    pub fn store(&self, path: &Path) -> Result {
        let mut tmp = path.as_os_str().to_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, format!("{}\n{}", self.arrangement, self.display_id))?;
        fs::rename(&tmp, path)?;

        log::info!("saved display state to {}", path.display());
        Ok(())
    }

    /// Splits the arrangement line into replayable tool arguments.
    ///
    /// Returns `None` unless the line begins with the tool's own name. The
    /// remainder is split on single spaces with empty tokens dropped, which
    /// is how the echo line round-trips back into an invocation.
    pub fn arrangement_args(&self) -> Option<Vec<&str>> {
        if !self.arrangement.starts_with(TOOL_NAME) {
            return None;
        }

        Some(
            self.arrangement[TOOL_NAME.len()..]
                .split(' ')
                .filter(|token| !token.is_empty())
                .collect(),
        )
    }
}
