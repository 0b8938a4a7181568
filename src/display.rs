use core::fmt;

use crate::tool::{TOOL_NAME, ToolError, ToolRunner};
use crate::types::Resolution;

/// Line markers in the `displayplacer list` report.
const PERSISTENT_ID_MARKER: &str = "Persistent screen id:";
const INTERNAL_MARKER: &str = "Type: MacBook built in";
const EXTERNAL_MARKER: &str = "Type: external";
const RESOLUTION_MARKER: &str = "Resolution:";

/// Classification of a display reported by the tool
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    Internal,
    External,
    Other,
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayKind::Internal => write!(f, "internal"),
            DisplayKind::External => write!(f, "external"),
            DisplayKind::Other => write!(f, "other"),
        }
    }
}

/// A single display as reported by the tool; derived transiently from the
/// report, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    id: String,
    kind: DisplayKind,
    enabled: bool,
    resolution: Option<Resolution>,
}

impl DisplayRecord {
    /// The persistent screen id
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    /// A display without a resolution line is a disabled/placeholder entry
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }
}

impl fmt::Display for DisplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Display {{ id: {}, kind: {}, enabled: {}, resolution: ",
            self.id, self.kind, self.enabled
        )?;
        match self.resolution {
            Some(resolution) => write!(f, "{} }}", resolution),
            None => write!(f, "- }}"),
        }
    }
}

/// A struct that represents the set of displays parsed from one report
#[derive(Debug, Clone, Default)]
pub struct DisplaySet {
    /// The displays in report order
    displays: Vec<DisplayRecord>,
    /// The tool's invocation-echo line, replayable to restore the current
    /// arrangement
    arrangement: Option<String>,
}

impl DisplaySet {
    /// Parses the tool's human-readable `list` report.
    ///
    /// Single line-oriented pass: a persistent-id line starts a new record,
    /// type lines classify the most recently seen record, and a resolution
    /// line marks it enabled. An unrecognizable report parses to an empty
    /// set.
    pub fn parse(report: &str) -> Self {
        let mut displays: Vec<DisplayRecord> = Vec::new();
        let mut arrangement = None;

        for line in report.lines() {
            if line.contains(PERSISTENT_ID_MARKER) {
                let id = line
                    .split_once(": ")
                    .map(|(_, rest)| rest.trim())
                    .unwrap_or_default();
                displays.push(DisplayRecord {
                    id: id.to_string(),
                    kind: DisplayKind::Other,
                    enabled: false,
                    resolution: None,
                });
                continue;
            }

            if arrangement.is_none() && line.starts_with(TOOL_NAME) {
                arrangement = Some(line.to_string());
                continue;
            }

            let Some(current) = displays.last_mut() else {
                continue;
            };

            if line.contains(INTERNAL_MARKER) {
                current.kind = DisplayKind::Internal;
            } else if line.contains(EXTERNAL_MARKER) {
                current.kind = DisplayKind::External;
            } else if line.contains(RESOLUTION_MARKER) {
                current.enabled = true;
                current.resolution = line
                    .split_once(": ")
                    .and_then(|(_, rest)| rest.split_whitespace().next())
                    .and_then(|value| value.parse().ok());
            }
        }

        log::debug!(
            "parsed {} display(s), arrangement line {}",
            displays.len(),
            if arrangement.is_some() { "found" } else { "missing" }
        );

        DisplaySet {
            displays,
            arrangement,
        }
    }

    /// Iterates over the displays in this set
    pub fn displays(&self) -> impl ExactSizeIterator<Item = &DisplayRecord> {
        self.displays.iter()
    }

    /// Returns the built-in display, if one was reported
    pub fn internal(&self) -> Option<&DisplayRecord> {
        self.displays
            .iter()
            .rev()
            .find(|d| d.kind == DisplayKind::Internal)
    }

    /// Returns the external display, if one was reported.
    ///
    /// When the report carries several external displays the last one in
    /// scan order wins; this models exactly one external display.
    pub fn external(&self) -> Option<&DisplayRecord> {
        self.displays
            .iter()
            .rev()
            .find(|d| d.kind == DisplayKind::External)
    }

    /// The tool's invocation-echo line, if the report carried one
    pub fn arrangement(&self) -> Option<&str> {
        self.arrangement.as_deref()
    }
}

impl fmt::Display for DisplaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DisplaySet {{ displays: [")?;
        for (i, display) in self.displays.iter().enumerate() {
            if i > 0 {
                writeln!(f, ", ")?;
            }
            write!(f, "    {}", display)?;
        }
        write!(f, "\n] }}")
    }
}

/// Queries the tool for the current set of displays.
pub fn query_displays<R: ToolRunner>(runner: &R) -> Result<DisplaySet, ToolError> {
    let output = runner.run(&["list"])?;
    Ok(DisplaySet::parse(&output.text))
}
