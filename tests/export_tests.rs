mod common;
use common::test_pool;

use studymetrics::db::queries::save_session;
use studymetrics::export::{ExportFormat, ExportLogic};

#[test]
fn csv_export_writes_header_and_rows() {
    let (dir, mut pool) = test_pool();

    save_session(&mut pool, 1800, "Math", "Clear", "Home").expect("save");
    save_session(&mut pool, 900, "Language", "Unknown", "").expect("save");

    let out = dir.path().join("sessions.csv");
    let out_str = out.to_string_lossy().to_string();

    ExportLogic::export(&mut pool, ExportFormat::Csv, &Some(out_str), false).expect("export");

    let content = std::fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();

    assert_eq!(
        lines.next(),
        Some("id,start_time,end_time,duration,subject,weather_condition,location")
    );
    assert_eq!(lines.clone().count(), 2);
    assert!(content.contains("Math"));
    assert!(content.contains("Language"));
    assert!(content.contains("1800"));
}

#[test]
fn json_export_is_a_parsable_array_in_chronological_order() {
    let (dir, mut pool) = test_pool();

    // Longer duration → earlier computed start_time.
    save_session(&mut pool, 600, "Science", "Rain", "").expect("save");
    save_session(&mut pool, 60, "History", "Unknown", "").expect("save");

    let out = dir.path().join("sessions.json");
    let out_str = out.to_string_lossy().to_string();

    ExportLogic::export(&mut pool, ExportFormat::Json, &Some(out_str), false).expect("export");

    let content = std::fs::read_to_string(&out).expect("read json");
    let rows: Vec<serde_json::Value> = serde_json::from_str(&content).expect("parse");

    assert_eq!(rows.len(), 2);
    // Oldest start first.
    assert_eq!(rows[0]["duration_secs"], 600);
    assert_eq!(rows[1]["duration_secs"], 60);
    assert_eq!(rows[0]["subject"], "Science");
}

#[test]
fn export_with_no_sessions_writes_nothing() {
    let (dir, mut pool) = test_pool();

    let out = dir.path().join("empty.csv");
    let out_str = out.to_string_lossy().to_string();

    ExportLogic::export(&mut pool, ExportFormat::Csv, &Some(out_str), false).expect("export");

    assert!(!out.exists());
}

#[test]
fn force_overwrites_an_existing_file() {
    let (dir, mut pool) = test_pool();

    save_session(&mut pool, 120, "General", "Unknown", "").expect("save");

    let out = dir.path().join("sessions.csv");
    std::fs::write(&out, "stale contents").expect("seed file");

    let out_str = out.to_string_lossy().to_string();
    ExportLogic::export(&mut pool, ExportFormat::Csv, &Some(out_str), true).expect("export");

    let content = std::fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("id,start_time"));
}
