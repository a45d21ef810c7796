//! Sample payloads for the dashboard endpoints.

use crate::mock_api::MockApiBuilder;
use serde_json::{Value, json};

pub const SCHOOLS_PATH: &str = "/api/schools/list";
pub const ANNOUNCEMENTS_PATH: &str = "/api/announcements";
pub const CS_TOTAL_PATH: &str = "/api/national-lines/computer-science-total";
pub const POLITICS_PATH: &str = "/api/national-lines/politics-recent";
pub const ENGLISH_MATH_PATH: &str = "/api/national-lines/english-math-subjects";
pub const EXAM_TYPE_RATIO_PATH: &str = "/api/stats/exam-type-ratio";

const LEVELS: [&str; 4] = ["985", "211", "双一流", ""];
const PROVINCES: [&str; 5] = ["北京", "上海", "江苏", "湖北", "四川"];

/// One school record; `id` is 1-based and names are unique
pub fn school(id: usize) -> Value {
    json!({
        "id": id,
        "name": format!("示例大学{}", id),
        "level": LEVELS[id % LEVELS.len()],
        "province": PROVINCES[id % PROVINCES.len()],
        "region": if id % 3 == 0 { "B区" } else { "A区" },
        "computer_rank": if id % 2 == 0 { Value::from("A-") } else { Value::Null },
        "enrollment_24_school_total": id * 3,
        "enrollment_24_academic": 0,
        "enrollment_24_professional": Value::Null,
        "exam_subjects": "101政治 201英语一 301数学一 408计算机学科专业基础",
    })
}

pub fn schools(count: usize) -> Value {
    Value::Array((1..=count).map(school).collect())
}

pub fn announcements() -> Value {
    json!([
        {
            "title": "2025年硕士研究生复试名单公布",
            "url": "https://yz.example.edu/notice/1",
            "timestamp": "2025-03-14T09:30:00+08:00"
        },
        {
            "title": "调剂系统开放通知",
            "timestamp": "2025-04-01 08:00:00"
        },
        { "title": "<b>招生简章</b> 更新" }
    ])
}

/// Canonical trend payload with explicit axis bounds
pub fn cs_total_trend() -> Value {
    json!({
        "years": ["2023", "2024", "2025"],
        "series": [
            { "name": "A区", "data": [273, 266, 272] },
            { "name": "B区", "data": [263, 256, null] }
        ],
        "yAxis": { "min": 240, "max": 300 }
    })
}

/// Trend payload whose series declare bar rendering
pub fn politics_trend() -> Value {
    json!({
        "years": ["2023", "2024", "2025"],
        "series": [
            { "name": "A区", "type": "bar", "data": [46, 43, 47] },
            { "name": "B区", "type": "bar", "data": [43, 40, 44] }
        ]
    })
}

/// Older flat `<name>_scores` shape
pub fn english_math_legacy() -> Value {
    json!({
        "years": ["2023", "2024", "2025"],
        "english1_scores": [46, 43, 44],
        "math1_scores": [69, 68, 70]
    })
}

pub fn exam_type_ratio() -> Value {
    json!([
        { "name": "自命题", "value": 62 },
        { "name": "408", "value": 38 }
    ])
}

/// Every dashboard endpoint answering with fixture data
pub fn dashboard_api(school_count: usize) -> MockApiBuilder {
    MockApiBuilder::new()
        .json(SCHOOLS_PATH, &schools(school_count))
        .json(ANNOUNCEMENTS_PATH, &announcements())
        .json(CS_TOTAL_PATH, &cs_total_trend())
        .json(POLITICS_PATH, &politics_trend())
        .json(ENGLISH_MATH_PATH, &english_math_legacy())
        .json(EXAM_TYPE_RATIO_PATH, &exam_type_ratio())
}
