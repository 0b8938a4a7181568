use displaytoggle::{DisplayKind, DisplaySet, Resolution};

const INTERNAL_ID: &str = "37D8832A-2D66-02CA-B9F7-8F30A301B230";
const EXTERNAL_ID: &str = "9A8C5C59-9D15-4D31-A199-6B1E6AD3DCBC";

const ARRANGEMENT: &str = "displayplacer \"id:37D8832A-2D66-02CA-B9F7-8F30A301B230 res:1440x900 origin:(0,0) degree:0\" \"id:9A8C5C59-9D15-4D31-A199-6B1E6AD3DCBC res:2560x1440 origin:(1440,0) degree:0\"";

fn full_report() -> String {
    format!(
        "Persistent screen id: {INTERNAL_ID}
Contextual screen id: 69733382
Type: MacBook built in screen
Resolution: 1440x900
Hertz: 60
Color Depth: 8
Scaling: on
Origin: (0,0) - main display
Rotation: 0

Persistent screen id: {EXTERNAL_ID}
Contextual screen id: 724061396
Type: external screen
Resolution: 2560x1440
Hertz: 60
Color Depth: 8
Scaling: off
Origin: (1440,0)
Rotation: 0

Execute the command below to set your screens to the current arrangement:

{ARRANGEMENT}
"
    )
}

#[test]
fn classifies_internal_and_external() {
    let _ = env_logger::builder().is_test(true).try_init();

    let set = DisplaySet::parse(&full_report());

    assert_eq!(set.displays().count(), 2);

    let internal = set.internal().expect("internal display");
    assert_eq!(internal.id(), INTERNAL_ID);
    assert_eq!(internal.kind(), DisplayKind::Internal);

    let external = set.external().expect("external display");
    assert_eq!(external.id(), EXTERNAL_ID);
    assert_eq!(external.kind(), DisplayKind::External);
}

#[test]
fn resolution_marker_decides_enabled() {
    // Built-in block with a resolution, external block without one: the
    // external entry is a disabled placeholder.
    let report = format!(
        "Persistent screen id: {INTERNAL_ID}
Type: MacBook built in screen
Resolution: 1440x900

Persistent screen id: {EXTERNAL_ID}
Type: external screen
Enabled: false
"
    );

    let set = DisplaySet::parse(&report);

    assert!(set.internal().expect("internal").enabled());
    let external = set.external().expect("external");
    assert!(!external.enabled());
    assert_eq!(external.resolution(), None);
}

#[test]
fn resolution_values_are_parsed() {
    let set = DisplaySet::parse(&full_report());

    assert_eq!(
        set.internal().and_then(|d| d.resolution()),
        Some(Resolution::new(1440, 900))
    );
    assert_eq!(
        set.external().and_then(|d| d.resolution()),
        Some(Resolution::new(2560, 1440))
    );
}

#[test]
fn unparsable_resolution_still_marks_enabled() {
    let report = format!(
        "Persistent screen id: {EXTERNAL_ID}
Type: external screen
Resolution: unknown
"
    );

    let set = DisplaySet::parse(&report);
    let external = set.external().expect("external");

    assert!(external.enabled());
    assert_eq!(external.resolution(), None);
}

#[test]
fn last_external_wins() {
    let report = "Persistent screen id: FIRST-EXTERNAL
Type: external screen
Resolution: 1920x1080

Persistent screen id: SECOND-EXTERNAL
Type: external screen
Resolution: 2560x1440
";

    let set = DisplaySet::parse(report);

    assert_eq!(set.external().map(|d| d.id()), Some("SECOND-EXTERNAL"));
}

#[test]
fn unclassified_block_stays_other() {
    let report = "Persistent screen id: MYSTERY-SCREEN
Type: iMac built in screen
Resolution: 5120x2880
";

    let set = DisplaySet::parse(report);
    let display = set.displays().next().expect("one display");

    assert_eq!(display.kind(), DisplayKind::Other);
    assert!(set.internal().is_none());
    assert!(set.external().is_none());
}

#[test]
fn arrangement_line_is_captured() {
    let set = DisplaySet::parse(&full_report());

    assert_eq!(set.arrangement(), Some(ARRANGEMENT));
}

#[test]
fn markers_before_any_id_are_ignored() {
    let report = format!(
        "Resolution: 800x600
Type: external screen

Persistent screen id: {EXTERNAL_ID}
Type: external screen
Resolution: 2560x1440
"
    );

    let set = DisplaySet::parse(&report);

    assert_eq!(set.displays().count(), 1);
    assert_eq!(set.external().map(|d| d.id()), Some(EXTERNAL_ID));
}

#[test]
fn empty_report_parses_to_empty_set() {
    let set = DisplaySet::parse("");

    assert_eq!(set.displays().count(), 0);
    assert!(set.external().is_none());
    assert!(set.internal().is_none());
    assert!(set.arrangement().is_none());
}

#[test]
fn resolution_from_str() {
    assert_eq!("2560x1440".parse::<Resolution>().ok(), Some(Resolution::new(2560, 1440)));
    assert!("2560".parse::<Resolution>().is_err());
    assert!("axb".parse::<Resolution>().is_err());
}
