//! A library to toggle an external display on macOS.
//!
//! This library drives the `displayplacer` command-line tool: it parses the
//! tool's `list` report to classify displays as built-in or external, issues
//! `id:<id> enabled:<bool>` directives, and persists the last-known external
//! arrangement to `~/.display-toggle-state` so the display can be re-enabled
//! after it has vanished from the report.

mod controller;
mod display;
mod state;
mod tool;
mod types;

#[cfg(feature = "json")]
pub mod json;

pub use controller::*;
pub use display::*;
pub use state::*;
pub use tool::*;
pub use types::*;
