use std::io;
use std::process::Command;

use thiserror::Error;

/// Name of the external binary, also the prefix of its arrangement echo line.
pub const TOOL_NAME: &str = "displayplacer";

/// Install locations probed in order: Homebrew on Apple Silicon, then the
/// Intel prefix.
const ARM_LOCATION: &str = "/opt/homebrew/bin/displayplacer";
const INTEL_LOCATION: &str = "/usr/local/bin/displayplacer";

/// Error type for the tool module
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("displayplacer not found (tried /opt/homebrew/bin and /usr/local/bin)")]
    NotFound(#[source] io::Error),
}

type Result<T = ()> = std::result::Result<T, ToolError>;

/// Captured result of one tool invocation
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Combined stdout and stderr text
    pub text: String,
    /// Exit code, `None` when the child was terminated by a signal
    pub code: Option<i32>,
}

impl ToolOutput {
    /// Whether the invocation should be treated as successful.
    ///
    /// The exit code is the primary signal; only when it is unavailable does
    /// this fall back to "any output means failure".
    pub fn succeeded(&self) -> bool {
        match self.code {
            Some(code) => code == 0,
            None => self.text.trim().is_empty(),
        }
    }
}

/// Runs the external display tool and captures its output
pub trait ToolRunner {
    fn run(&self, args: &[&str]) -> Result<ToolOutput>;
}

/// Invokes `displayplacer`, falling back across its install locations
#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayPlacer;

impl DisplayPlacer {
    fn spawn(path: &str, args: &[&str]) -> io::Result<ToolOutput> {
        // Blocking call: waits for the child to exit, no timeout.
        let output = Command::new(path).args(args).output()?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ToolOutput {
            text,
            code: output.status.code(),
        })
    }
}

impl ToolRunner for DisplayPlacer {
    fn run(&self, args: &[&str]) -> Result<ToolOutput> {
        match Self::spawn(ARM_LOCATION, args) {
            Ok(output) => Ok(output),
            Err(_) => {
                log::debug!("no {} at {}, trying {}", TOOL_NAME, ARM_LOCATION, INTEL_LOCATION);
                Self::spawn(INTEL_LOCATION, args).map_err(|err| {
                    log::error!("{} not found at any known location", TOOL_NAME);
                    ToolError::NotFound(err)
                })
            }
        }
    }
}
