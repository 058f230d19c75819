#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdl() -> Command {
    cargo_bin_cmd!("rdietlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdietlogger.sqlite", name));
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

pub fn init_db(db_path: &str) {
    rdl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an entry through the CLI and return the id printed after '#'.
pub fn add_entry(db_path: &str, food: &str, calories: &str, meal: &str) -> String {
    let out = rdl()
        .args([
            "--db",
            db_path,
            "add",
            "--food",
            food,
            "--calories",
            calories,
            "--meal",
            meal,
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8_lossy(&out);
    let start = stdout.find('#').expect("id marker in add output") + 1;
    stdout[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect()
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_entry(db_path, "燕麦粥", "150", "breakfast");
    add_entry(db_path, "米饭", "200", "lunch");
}
