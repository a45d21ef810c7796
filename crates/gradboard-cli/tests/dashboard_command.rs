use assert_cmd::cargo::cargo_bin_cmd;
use gradboard_testing::assertions::assert_section_status;
use gradboard_testing::fixtures::{self, ANNOUNCEMENTS_PATH, POLITICS_PATH, SCHOOLS_PATH};
use gradboard_testing::TestWorld;
use predicates::prelude::*;
use serde_json::{Value, json};

#[test]
fn test_dashboard_json_loads_every_section() {
    let api = fixtures::dashboard_api(45).start_background().unwrap();
    let world = TestWorld::new().with_base_url(&api.base_url());

    let mut cmd = cargo_bin_cmd!("gradboard");
    world
        .configure_command(&mut cmd)
        .args(["--format", "json", "dashboard"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let content = &json["content"];
    assert_section_status(&content["schools"], "ready").unwrap();
    assert_section_status(&content["announcements"], "ready").unwrap();

    let charts = content["charts"].as_array().unwrap();
    assert_eq!(charts.len(), 4);
    for chart in charts {
        assert_section_status(&chart["section"], "ready").unwrap();
    }
    assert_eq!(api.hits(SCHOOLS_PATH), 1);
    assert_eq!(api.hits(ANNOUNCEMENTS_PATH), 1);
}

#[test]
fn test_failed_chart_is_inline_and_exit_is_zero() {
    let api = fixtures::dashboard_api(10)
        .status(POLITICS_PATH, 500)
        .start_background()
        .unwrap();
    let world = TestWorld::new().with_base_url(&api.base_url());

    let mut cmd = cargo_bin_cmd!("gradboard");
    world
        .configure_command(&mut cmd)
        .args(["--format", "json", "dashboard"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let politics = json["content"]["charts"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == "politics")
        .unwrap()
        .clone();
    assert_section_status(&politics["section"], "failed").unwrap();
    assert_eq!(politics["section"]["label"], "加载 近三年政治国家线 数据失败");
    assert_section_status(&json["content"]["schools"], "ready").unwrap();
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_html_dashboard_written_to_file() {
    let api = fixtures::dashboard_api(20)
        .status(ANNOUNCEMENTS_PATH, 500)
        .start_background()
        .unwrap();
    let world = TestWorld::new().with_base_url(&api.base_url());
    let out = world.temp_dir().join("dashboard.html");

    let mut cmd = cargo_bin_cmd!("gradboard");
    world
        .configure_command(&mut cmd)
        .args(["--format", "html", "dashboard", "--output"])
        .arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote dashboard to"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("加载公告失败: HTTP error! status: 500"));
    assert!(html.contains(r#"id="chart-cs-total""#));
    assert!(html.contains("示例大学1"));
}

#[test]
fn test_disabled_chart_is_not_requested() {
    let api = fixtures::dashboard_api(5).start_background().unwrap();
    let config = format!(
        r#"
[server]
base_url = "{}"

[dashboard]
announcements = false

[[charts]]
id = "politics"
endpoint = "{}"
title = "近三年政治国家线"
kind = "bar"
enabled = false
"#,
        api.base_url(),
        POLITICS_PATH
    );
    let world = TestWorld::new().with_config(&config);

    let mut cmd = cargo_bin_cmd!("gradboard");
    world
        .configure_command(&mut cmd)
        .args(["--format", "json", "dashboard"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_section_status(&json["content"]["announcements"], "skipped").unwrap();
    assert_eq!(
        json["content"]["charts"][0]["section"],
        json!({ "status": "skipped" })
    );
    assert_eq!(api.hits(POLITICS_PATH), 0);
    assert_eq!(api.hits(ANNOUNCEMENTS_PATH), 0);
}

#[test]
fn test_text_dashboard_shows_placeholders() {
    let api = fixtures::dashboard_api(0)
        .json(ANNOUNCEMENTS_PATH, &json!([]))
        .start_background()
        .unwrap();
    let world = TestWorld::new().with_base_url(&api.base_url());

    let mut cmd = cargo_bin_cmd!("gradboard");
    world.configure_command(&mut cmd).arg("dashboard");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("没有更多院校数据"))
        .stdout(predicate::str::contains("暂无公告"));
}
