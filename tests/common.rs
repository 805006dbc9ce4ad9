#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn clg() -> Command {
    cargo_bin_cmd!("charitylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_charitylog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and seed a donor, an event and a volunteer (ids 1, 1, 1)
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables); --test keeps the user config untouched
    clg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    clg()
        .args([
            "--db",
            db_path,
            "add-donor",
            "--first",
            "Ada",
            "--last",
            "Lovelace",
            "--postcode",
            "AB1 2CD",
            "--house",
            "12",
            "--phone",
            "0123 456 789",
        ])
        .assert()
        .success();

    clg()
        .args([
            "--db",
            db_path,
            "add-event",
            "Winter Gala",
            "--room",
            "Main hall",
            "--when",
            "2025-12-01 18:30",
            "--cost",
            "100",
        ])
        .assert()
        .success();

    clg()
        .args([
            "--db",
            db_path,
            "add-volunteer",
            "Grace Hopper",
            "--role",
            "steward",
            "--event",
            "1",
        ])
        .assert()
        .success();
}

/// Add one donation linking donor 1, event 1 and volunteer 1.
pub fn add_donation(db_path: &str, amount: &str, date: &str) {
    clg()
        .args([
            "--db",
            db_path,
            "add-donation",
            "--amount",
            amount,
            "--date",
            date,
            "--donor",
            "1",
            "--event",
            "1",
            "--volunteer",
            "1",
        ])
        .assert()
        .success();
}
