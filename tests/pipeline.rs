use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::json;
use tempfile::TempDir;

use sob_tally::analysis::{analyze, Report, SOB_MARKER};
use sob_tally::chart::ChartData;
use sob_tally::config::AnalysisConfig;
use sob_tally::export::{discover_exports, load_messages};
use sob_tally::{AnalysisError, ExportError};

const DEVAN: &str = "Devan  :)";
// 2024-05-06T12:00:00Z and two days later
const T1: i64 = 1_714_996_800_000;
const T2: i64 = 1_715_169_600_000;

fn write_export(dir: &Path, name: &str, messages: serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    let export = json!({
        "participants": [{"name": DEVAN}, {"name": "Yunfei"}],
        "title": "Svengers",
        "messages": messages,
    });
    fs::write(&path, export.to_string()).unwrap();
    path
}

fn two_part_export(dir: &Path) {
    write_export(
        dir,
        "message_1.json",
        json!([
            {"sender_name": DEVAN, "timestamp_ms": T1, "content": format!("ugh {0}{0}", SOB_MARKER)},
            {"sender_name": "Yunfei", "timestamp_ms": T1 + 5, "content": SOB_MARKER.repeat(7)},
            {"sender_name": DEVAN, "timestamp_ms": T1 + 10, "photos": [{"uri": "x.jpg"}]},
        ]),
    );
    write_export(
        dir,
        "message_2.json",
        json!([
            {"sender_name": DEVAN, "timestamp_ms": T2, "content": SOB_MARKER.repeat(3)},
            {"sender_name": DEVAN, "timestamp_ms": T2 + 1, "content": "😭 not in export encoding"},
        ]),
    );
}

#[test]
fn test_two_exports_end_to_end() {
    let dir = TempDir::new().unwrap();
    two_part_export(dir.path());

    let yaml = format!("input_dir: {:?}\n", dir.path());
    let config = AnalysisConfig::from_yaml(&yaml).unwrap();

    let paths = config.input_paths().unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("message_1.json"));

    let messages = load_messages(&paths).unwrap();
    assert_eq!(messages.len(), 5);

    let analysis = analyze(&messages, &config.matcher()).unwrap();
    assert_eq!(analysis.total_count, 2);
    assert_eq!(analysis.max_count, 3);
    assert_eq!(analysis.max_count_timestamp.map(|t| t.timestamp_millis()), Some(T2));
    assert_eq!(analysis.per_message_counts, vec![2, 3]);
    assert_eq!(analysis.occurrence_timestamps.len(), 5);

    let report = Report::build(&analysis, &config.labels, &Utc).unwrap();
    assert_eq!(report.span_days, 2);
    assert_eq!(report.daily_average, Some(1.0));

    let charts = ChartData::build(&analysis, &config.chart, &Utc);
    assert_eq!(charts.histogram.bins.len(), 50);
    assert_eq!(charts.histogram.total(), 5);
    assert_eq!(charts.distribution.entries(), &[(2, 1), (3, 1)]);
    assert_eq!(charts.slices.len(), 2);
    // Tuesday 2024-05-07 falls between the two messages
    assert_eq!(charts.ticks.len(), 1);
    assert_eq!(charts.ticks[0].label(), "2024-05-07");
}

#[test]
fn test_discover_orders_parts_numerically() {
    let dir = TempDir::new().unwrap();
    for name in ["message_10.json", "message_2.json", "message_1.json", "notes.json"] {
        write_export(dir.path(), name, json!([]));
    }

    let paths = discover_exports(dir.path()).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["message_1.json", "message_2.json", "message_10.json"]);
}

#[test]
fn test_empty_dir_has_no_exports() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        discover_exports(dir.path()),
        Err(ExportError::NoExports(_))
    ));
}

#[test]
fn test_malformed_export_aborts() {
    let dir = TempDir::new().unwrap();
    let good = write_export(dir.path(), "message_1.json", json!([]));
    let bad = dir.path().join("message_2.json");
    fs::write(&bad, "{\"messages\": [{\"sender_name\": 3}]}").unwrap();

    let err = load_messages(&[good, bad.clone()]).unwrap_err();
    match err {
        ExportError::Parse { path, .. } => assert_eq!(path, bad),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_no_qualifying_messages_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_export(
        dir.path(),
        "message_1.json",
        json!([{"sender_name": "Yunfei", "timestamp_ms": T1, "content": SOB_MARKER}]),
    );

    let config = AnalysisConfig::default();
    let messages = load_messages(&[path]).unwrap();
    let analysis = analyze(&messages, &config.matcher()).unwrap();

    assert!(analysis.is_empty());
    assert_eq!(
        Report::build(&analysis, &config.labels, &Utc).unwrap_err(),
        AnalysisError::NoOccurrences {
            subject: "Devan".to_string()
        }
    );
    let charts = ChartData::build(&analysis, &config.chart, &Utc);
    assert!(charts.histogram.bins.is_empty());
    assert!(charts.slices.is_empty());
}
