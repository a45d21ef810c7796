//! Chart option building.
//!
//! Turns national-line and proportion payloads into the option object the
//! charting library consumes. Trend payloads come in three shapes; `series`
//! is canonical, `scores` and flat `<name>_scores` keys are older variants
//! of the same endpoints.

use crate::error::{Error, Result};
use gradboard_types::{AxisBounds, ChartKind, ProportionSlice, SeriesPayload};
use serde::Serialize;
use serde_json::{Map, Value};

const SCORES_SUFFIX: &str = "_scores";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    #[serde(skip)]
    pub kind: ChartKind,
    pub title: Title,
    pub tooltip: Tooltip,
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<CategoryAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<ValueAxis>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub left: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub trigger: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub data: Vec<String>,
    pub bottom: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxis {
    #[serde(rename = "type")]
    pub axis_type: &'static str,
    /// Gapped (bar) vs. flush (line) category placement
    pub boundary_gap: bool,
    pub data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAxis {
    #[serde(rename = "type")]
    pub axis_type: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Cartesian(CartesianSeries),
    Pie(PieSeries),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartesianSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub series_type: ChartKind,
    pub data: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub series_type: ChartKind,
    pub radius: &'static str,
    pub center: [&'static str; 2],
    pub data: Vec<ProportionSlice>,
    pub label: LabelVisibility,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelVisibility {
    pub show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Emphasis {
    pub label: LabelVisibility,
}

impl ChartOption {
    /// Category labels, empty for pie charts
    pub fn categories(&self) -> &[String] {
        self.x_axis.as_ref().map(|a| a.data.as_slice()).unwrap_or(&[])
    }
}

/// Build the option for any configured chart kind
pub fn build_chart(payload: &Value, title: &str, kind: ChartKind) -> Result<ChartOption> {
    match kind {
        ChartKind::Pie => build_proportion_chart(payload, title),
        ChartKind::Line | ChartKind::Bar => build_trend_chart(payload, title, kind),
    }
}

/// Line/bar chart from a national-line payload
pub fn build_trend_chart(payload: &Value, title: &str, kind: ChartKind) -> Result<ChartOption> {
    let obj = payload.as_object().ok_or_else(|| Error::missing("years"))?;

    let years = obj
        .get("years")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::missing("years"))?
        .iter()
        .map(category_label)
        .collect::<Vec<_>>();

    let series = extract_series(obj)?;

    let is_bar = kind == ChartKind::Bar
        || series
            .iter()
            .any(|s| s.kind.as_deref() == Some(ChartKind::Bar.as_str()));
    let effective = if is_bar { ChartKind::Bar } else { ChartKind::Line };

    let legend = obj
        .get("legend")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(category_label).collect())
        .unwrap_or_else(|| series.iter().map(|s| s.name.clone()).collect());

    let bounds = obj
        .get("yAxis")
        .and_then(|v| serde_json::from_value::<AxisBounds>(v.clone()).ok())
        .unwrap_or_default();

    let series = series
        .into_iter()
        .map(|s| {
            let series_type = match s.kind.as_deref() {
                Some("bar") => ChartKind::Bar,
                Some("line") => ChartKind::Line,
                _ => effective,
            };
            Series::Cartesian(CartesianSeries {
                name: s.name,
                series_type,
                data: s.data,
            })
        })
        .collect();

    Ok(ChartOption {
        kind: effective,
        title: Title {
            text: title.to_string(),
            left: "center",
        },
        tooltip: Tooltip {
            trigger: "axis",
            formatter: None,
        },
        legend: Legend {
            data: legend,
            bottom: 10,
        },
        x_axis: Some(CategoryAxis {
            axis_type: "category",
            boundary_gap: is_bar,
            data: years,
        }),
        y_axis: Some(ValueAxis {
            axis_type: "value",
            min: bounds.min,
            max: bounds.max,
        }),
        series,
    })
}

/// Radial chart from a `[{name, value}]` payload (or the older `{labels, data}`)
pub fn build_proportion_chart(payload: &Value, title: &str) -> Result<ChartOption> {
    let slices = extract_slices(payload)?;
    let legend = slices.iter().map(|s| s.name.clone()).collect();

    Ok(ChartOption {
        kind: ChartKind::Pie,
        title: Title {
            text: title.to_string(),
            left: "center",
        },
        tooltip: Tooltip {
            trigger: "item",
            formatter: Some("{a} <br/>{b} : {c} ({d}%)"),
        },
        legend: Legend {
            data: legend,
            bottom: 15,
        },
        x_axis: None,
        y_axis: None,
        series: vec![Series::Pie(PieSeries {
            name: title.to_string(),
            series_type: ChartKind::Pie,
            radius: "55%",
            center: ["50%", "58%"],
            data: slices,
            label: LabelVisibility { show: false },
            emphasis: Emphasis {
                label: LabelVisibility { show: true },
            },
        })],
    })
}

fn extract_series(obj: &Map<String, Value>) -> Result<Vec<SeriesPayload>> {
    if let Some(series) = obj.get("series").filter(|v| !v.is_null()) {
        let items = series.as_array().ok_or_else(|| Error::missing("series"))?;
        return items
            .iter()
            .map(|item| -> Result<SeriesPayload> {
                let name = item
                    .get("name")
                    .map(category_label)
                    .ok_or_else(|| Error::missing("series[].name"))?;
                let kind = item.get("type").and_then(Value::as_str).map(str::to_string);
                let data = item
                    .get("data")
                    .and_then(Value::as_array)
                    .map(|points| points.iter().map(point).collect())
                    .unwrap_or_default();
                Ok(SeriesPayload { name, kind, data })
            })
            .collect();
    }

    if let Some(scores) = obj.get("scores").filter(|v| !v.is_null()) {
        let map = scores.as_object().ok_or_else(|| Error::missing("scores"))?;
        return Ok(map
            .iter()
            .map(|(name, values)| named_points(name, values))
            .collect());
    }

    let flat: Vec<SeriesPayload> = obj
        .iter()
        .filter_map(|(key, values)| {
            let name = key.strip_suffix(SCORES_SUFFIX)?;
            values.is_array().then(|| named_points(name, values))
        })
        .collect();

    if flat.is_empty() {
        return Err(Error::missing("series"));
    }
    Ok(flat)
}

fn named_points(name: &str, values: &Value) -> SeriesPayload {
    SeriesPayload {
        name: name.to_string(),
        kind: None,
        data: values
            .as_array()
            .map(|points| points.iter().map(point).collect())
            .unwrap_or_default(),
    }
}

fn extract_slices(payload: &Value) -> Result<Vec<ProportionSlice>> {
    match payload {
        Value::Array(items) => items
            .iter()
            .map(|item| -> Result<ProportionSlice> {
                let name = item
                    .get("name")
                    .map(category_label)
                    .ok_or_else(|| Error::missing("name"))?;
                let value = item
                    .get("value")
                    .and_then(point)
                    .ok_or_else(|| Error::missing("value"))?;
                Ok(ProportionSlice { name, value })
            })
            .collect(),
        Value::Object(obj) => {
            let labels = obj
                .get("labels")
                .and_then(Value::as_array)
                .ok_or_else(|| Error::missing("labels"))?;
            let data = obj
                .get("data")
                .and_then(Value::as_array)
                .ok_or_else(|| Error::missing("data"))?;
            Ok(labels
                .iter()
                .zip(data)
                .map(|(label, value)| ProportionSlice {
                    name: category_label(label),
                    value: point(value).unwrap_or(0.0),
                })
                .collect())
        }
        _ => Err(Error::missing("name")),
    }
}

fn category_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn point(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_series_line_chart() {
        let payload = json!({
            "years": ["2023", "2024", "2025"],
            "legend": ["A区", "B区"],
            "series": [
                {"name": "A区", "type": "line", "data": [273, 279, 277]},
                {"name": "B区", "type": "line", "data": [263, 269, null]}
            ],
            "yAxis": {"min": 250, "max": null}
        });

        let option = build_trend_chart(&payload, "近三年计算机总分国家线", ChartKind::Line).unwrap();
        assert_eq!(option.kind, ChartKind::Line);
        assert_eq!(option.categories(), &["2023", "2024", "2025"]);
        assert!(!option.x_axis.as_ref().unwrap().boundary_gap);
        assert_eq!(option.y_axis.as_ref().unwrap().min, Some(250.0));
        assert_eq!(option.y_axis.as_ref().unwrap().max, None);
        assert_eq!(option.series.len(), 2);
        let Series::Cartesian(b) = &option.series[1] else {
            panic!("expected cartesian series");
        };
        assert_eq!(b.data, vec![Some(263.0), Some(269.0), None]);
    }

    #[test]
    fn test_bar_series_gaps_the_axis() {
        let payload = json!({
            "years": [2023, 2024],
            "series": [{"name": "政治", "type": "bar", "data": [38, 40]}]
        });
        let option = build_trend_chart(&payload, "政治", ChartKind::Line).unwrap();
        assert_eq!(option.kind, ChartKind::Bar);
        assert!(option.x_axis.unwrap().boundary_gap);
        assert_eq!(option.legend.data, vec!["政治"]);
    }

    #[test]
    fn test_configured_bar_kind_applies_to_untyped_series() {
        let payload = json!({"years": ["2024"], "scores": {"A区": [37]}});
        let option = build_trend_chart(&payload, "政治", ChartKind::Bar).unwrap();
        let Series::Cartesian(s) = &option.series[0] else {
            panic!("expected cartesian series");
        };
        assert_eq!(s.series_type, ChartKind::Bar);
    }

    #[test]
    fn test_legacy_scores_map_keeps_order() {
        let payload = json!({
            "years": ["2023", "2024"],
            "scores": {"英语一": [50, 51], "英语二": [47, 48], "数学一": [73, 74]}
        });
        let option = build_trend_chart(&payload, "英/数", ChartKind::Line).unwrap();
        assert_eq!(option.legend.data, vec!["英语一", "英语二", "数学一"]);
    }

    #[test]
    fn test_null_series_falls_through_to_legacy_keys() {
        let payload = json!({
            "years": ["2024"],
            "series": null,
            "scores": {"A区": [273]}
        });
        let option = build_trend_chart(&payload, "总分", ChartKind::Line).unwrap();
        assert_eq!(option.legend.data, vec!["A区"]);

        let flat = json!({"years": ["2024"], "series": null, "scores": null, "a_scores": [1]});
        let option = build_trend_chart(&flat, "总分", ChartKind::Line).unwrap();
        assert_eq!(option.legend.data, vec!["a"]);
    }

    #[test]
    fn test_legacy_flat_score_keys() {
        let payload = json!({
            "years": ["2023", "2024"],
            "a_scores": [273, 279],
            "b_scores": [263, 269]
        });
        let option = build_trend_chart(&payload, "总分", ChartKind::Line).unwrap();
        assert_eq!(option.legend.data, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_years_is_malformed() {
        let payload = json!({"series": []});
        assert_eq!(
            build_trend_chart(&payload, "x", ChartKind::Line),
            Err(Error::missing("years"))
        );
        assert_eq!(
            build_trend_chart(&json!([1, 2]), "x", ChartKind::Line),
            Err(Error::missing("years"))
        );
    }

    #[test]
    fn test_missing_series_is_malformed() {
        let payload = json!({"years": ["2024"]});
        assert_eq!(
            build_trend_chart(&payload, "x", ChartKind::Line),
            Err(Error::missing("series"))
        );
    }

    #[test]
    fn test_proportion_chart_shows_labels_on_emphasis_only() {
        let payload = json!([{"name": "自命题", "value": 12}, {"name": "统考408", "value": 30}]);
        let option = build_chart(&payload, "自命题 vs 408 比例", ChartKind::Pie).unwrap();
        assert_eq!(option.kind, ChartKind::Pie);
        assert!(option.x_axis.is_none());
        assert_eq!(option.legend.data, vec!["自命题", "统考408"]);

        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["series"][0]["type"], "pie");
        assert_eq!(json["series"][0]["label"]["show"], false);
        assert_eq!(json["series"][0]["emphasis"]["label"]["show"], true);
        assert_eq!(json["tooltip"]["trigger"], "item");
        assert!(json.get("xAxis").is_none());
    }

    #[test]
    fn test_legacy_labels_data_proportion() {
        let payload = json!({"labels": ["自命题", "统考408"], "data": [3, 5]});
        let option = build_proportion_chart(&payload, "比例").unwrap();
        let Series::Pie(pie) = &option.series[0] else {
            panic!("expected pie series");
        };
        assert_eq!(pie.data[1].value, 5.0);
    }

    #[test]
    fn test_proportion_without_values_is_malformed() {
        let payload = json!([{"name": "自命题"}]);
        assert_eq!(
            build_proportion_chart(&payload, "比例"),
            Err(Error::missing("value"))
        );
    }

    #[test]
    fn test_trend_option_serializes_camel_case_axes() {
        let payload = json!({"years": ["2024"], "series": [{"name": "A", "data": [1]}]});
        let option = build_trend_chart(&payload, "t", ChartKind::Line).unwrap();
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["xAxis"]["type"], "category");
        assert_eq!(json["xAxis"]["boundaryGap"], false);
        assert_eq!(json["yAxis"]["type"], "value");
        assert_eq!(json["series"][0]["type"], "line");
        assert!(json.get("kind").is_none());
    }
}
