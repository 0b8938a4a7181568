use serde::Serialize;

use crate::controller::ExternalStatus;
use crate::display::{DisplayRecord, DisplaySet};

/// Serializable resolution for JSON output
#[derive(Serialize)]
pub struct ResolutionJson {
    pub width: u32,
    pub height: u32,
}

/// Serializable display record for JSON output
#[derive(Serialize)]
pub struct DisplayJson {
    pub id: String,
    pub kind: String,
    pub enabled: bool,
    pub resolution: Option<ResolutionJson>,
}

/// Serializable report for JSON output
#[derive(Serialize)]
pub struct ReportJson {
    pub displays: Vec<DisplayJson>,
    pub arrangement: Option<String>,
}

/// Serializable status snapshot for JSON output
#[derive(Serialize)]
pub struct StatusJson {
    pub connected: bool,
    pub enabled: bool,
    pub restorable: bool,
}

/// Converts a display record to JSON serializable format
pub fn display_to_json(display: &DisplayRecord) -> DisplayJson {
    DisplayJson {
        id: display.id().to_string(),
        kind: display.kind().to_string(),
        enabled: display.enabled(),
        resolution: display.resolution().map(|r| ResolutionJson {
            width: r.width,
            height: r.height,
        }),
    }
}

/// Converts a parsed report to JSON serializable format
pub fn report_to_json(set: &DisplaySet) -> ReportJson {
    ReportJson {
        displays: set.displays().map(display_to_json).collect(),
        arrangement: set.arrangement().map(str::to_string),
    }
}

/// Converts a status snapshot to JSON serializable format
pub fn status_to_json(status: &ExternalStatus) -> StatusJson {
    StatusJson {
        connected: status.connected,
        enabled: status.enabled,
        restorable: status.restorable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_displays_and_arrangement() {
        let set = DisplaySet::parse(
            "Persistent screen id: ABC\nType: external screen\nResolution: 2560x1440\ndisplayplacer \"id:ABC res:2560x1440\"\n",
        );

        let json = serde_json::to_value(report_to_json(&set)).unwrap();

        assert_eq!(json["displays"][0]["id"], "ABC");
        assert_eq!(json["displays"][0]["kind"], "external");
        assert_eq!(json["displays"][0]["enabled"], true);
        assert_eq!(json["displays"][0]["resolution"]["width"], 2560);
        assert_eq!(
            json["arrangement"],
            "displayplacer \"id:ABC res:2560x1440\""
        );
    }

    #[test]
    fn status_serializes_flags() {
        let status = ExternalStatus {
            connected: true,
            enabled: false,
            restorable: true,
        };

        let json = serde_json::to_value(status_to_json(&status)).unwrap();

        assert_eq!(json["connected"], true);
        assert_eq!(json["enabled"], false);
        assert_eq!(json["restorable"], true);
    }
}
