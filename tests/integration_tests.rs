use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

mod common;
use common::{add_entry, init_db, init_db_with_data, rdl, setup_test_db};

#[test]
fn test_add_today_delete_cycle() {
    let db_path = setup_test_db("add_today_delete");
    init_db(&db_path);

    let id = add_entry(&db_path, "米饭", "200", "lunch");
    assert!(!id.is_empty());

    rdl()
        .args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("今日摄入统计"))
        .stdout(contains("米饭"))
        .stdout(is_match(r"热量 \(kcal\)\S*\s+\x1b\[1m200\x1b").unwrap())
        .stdout(contains("午餐"));

    rdl()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("删除成功"));

    rdl()
        .args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("暂无今日记录"))
        .stdout(is_match(r"热量 \(kcal\)\S*\s+\x1b\[1m0\x1b").unwrap())
        .stdout(contains("米饭").not());
}

#[test]
fn test_add_accepts_chinese_meal_label_and_macros() {
    let db_path = setup_test_db("add_chinese_meal");
    init_db(&db_path);

    rdl()
        .args([
            "--db",
            &db_path,
            "add",
            "--food",
            "鸡胸肉沙拉",
            "--calories",
            "350",
            "--meal",
            "晚餐",
            "--protein",
            "35",
            "--carbs",
            "15",
            "--fat",
            "12",
        ])
        .assert()
        .success()
        .stdout(contains("添加成功"))
        .stdout(contains("晚餐"))
        .stdout(contains("蛋白质 35g"));
}

#[test]
fn test_add_without_calories_fails() {
    let db_path = setup_test_db("add_missing_calories");
    init_db(&db_path);

    rdl()
        .args(["--db", &db_path, "add", "--food", "苹果"])
        .assert()
        .failure()
        .stderr(contains("热量"));

    rdl()
        .args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("暂无今日记录"));
}

#[test]
fn test_add_without_food_fails() {
    let db_path = setup_test_db("add_missing_food");
    init_db(&db_path);

    rdl()
        .args(["--db", &db_path, "add", "--food", "   ", "--calories", "100"])
        .assert()
        .failure()
        .stderr(contains("食物名称"));
}

#[test]
fn test_add_rejects_unknown_meal() {
    let db_path = setup_test_db("add_bad_meal");
    init_db(&db_path);

    rdl()
        .args([
            "--db",
            &db_path,
            "add",
            "--food",
            "面包",
            "--calories",
            "120",
            "--meal",
            "brunch",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid meal"));
}

#[test]
fn test_del_unknown_id_is_a_noop() {
    let db_path = setup_test_db("del_unknown");
    init_db_with_data(&db_path);

    rdl()
        .args(["--db", &db_path, "del", "42", "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing deleted"));

    rdl()
        .args(["--db", &db_path, "list", "--today"])
        .assert()
        .success()
        .stdout(contains("燕麦粥"))
        .stdout(contains("米饭"));
}

#[test]
fn test_list_filters_by_meal() {
    let db_path = setup_test_db("list_meal_filter");
    init_db_with_data(&db_path);

    rdl()
        .args(["--db", &db_path, "list", "--today", "--meal", "lunch"])
        .assert()
        .success()
        .stdout(contains("米饭"))
        .stdout(contains("燕麦粥").not());
}

#[test]
fn test_list_rejects_bad_period() {
    let db_path = setup_test_db("list_bad_period");
    init_db(&db_path);

    rdl()
        .args(["--db", &db_path, "list", "--period", "2025-13"])
        .assert()
        .failure();
}

#[test]
fn test_analyze_prints_report_sections() {
    let db_path = setup_test_db("analyze_sections");
    init_db_with_data(&db_path);

    rdl()
        .args(["--db", &db_path, "analyze"])
        .assert()
        .success()
        .stdout(contains("每周营养分析"))
        .stdout(contains("营养建议"))
        .stdout(contains("热量摄入不足"));
}

#[test]
fn test_analyze_empty_log_still_reports() {
    let db_path = setup_test_db("analyze_empty");
    init_db(&db_path);

    rdl()
        .args(["--db", &db_path, "analyze"])
        .assert()
        .success()
        .stdout(contains("每周营养分析"));
}

#[test]
fn test_recipes_list_and_show() {
    let db_path = setup_test_db("recipes_show");
    init_db(&db_path);

    rdl()
        .args(["--db", &db_path, "recipes"])
        .assert()
        .success()
        .stdout(contains("番茄鸡蛋面"))
        .stdout(contains("香菇炖鸡汤"));

    rdl()
        .args(["--db", &db_path, "recipes", "--show", "4"])
        .assert()
        .success()
        .stdout(contains("清蒸鲈鱼"))
        .stdout(contains("食材"));

    rdl()
        .args(["--db", &db_path, "recipes", "--show", "99"])
        .assert()
        .failure()
        .stderr(contains("Recipe not found"));
}

#[test]
fn test_recipes_category_filter() {
    let db_path = setup_test_db("recipes_category");
    init_db(&db_path);

    rdl()
        .args(["--db", &db_path, "recipes", "--category", "减脂餐"])
        .assert()
        .success()
        .stdout(contains("鸡胸肉沙拉"))
        .stdout(contains("番茄鸡蛋面").not());
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rdl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_db_info_counts_entries() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rdl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total entries"))
        .stdout(contains("Log rows"));
}

#[test]
fn test_analyze_rejects_date_at_calendar_limit() {
    let db_path = setup_test_db("analyze_date_limit");
    init_db(&db_path);

    rdl()
        .args(["--db", &db_path, "analyze", "--date=-262143-01-03"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}
