use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db, init_db_with_data, rdl, setup_test_db, temp_out};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    rdl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.lines().next().unwrap().contains("calories"));
    assert!(content.contains("燕麦粥"));
    assert!(content.contains("米饭"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    rdl()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(rows.as_array().map(|a| a.len()), Some(2));
    assert!(content.contains("米饭"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    let out = temp_out("export_empty_range", "csv");
    init_db_with_data(&db_path);

    rdl()
        .args([
            "--db", &db_path, "export", "--file", &out, "--range", "2001",
        ])
        .assert()
        .success();

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path);

    rdl()
        .args(["--db", &db_path, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_copy");
    let out = temp_out("backup_copy", "sqlite");
    init_db_with_data(&db_path);

    rdl()
        .args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success();

    assert!(Path::new(&out).exists());
    assert!(fs::metadata(&out).unwrap().len() > 0);
}
