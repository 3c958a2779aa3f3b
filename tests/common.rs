#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use studymetrics::db::initialize::init_db;
use studymetrics::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn smx() -> Command {
    cargo_bin_cmd!("studymetrics")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studymetrics.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Library-level helper: an initialized store on a throwaway database.
pub fn test_pool() -> (tempfile::TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.sqlite");
    let pool = DbPool::new(path.to_str().expect("utf8 path")).expect("open db");
    init_db(&pool.conn).expect("init db");
    (dir, pool)
}

/// Initialize DB via the CLI and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    smx()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    smx()
        .args([
            "--db", db_path, "add", "30m", "--subject", "Math", "--weather", "Clear",
        ])
        .assert()
        .success();

    smx()
        .args([
            "--db", db_path, "add", "1h", "--subject", "Science", "--weather", "Unknown",
        ])
        .assert()
        .success();
}
