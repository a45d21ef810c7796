use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One displayable entity as returned by the API (a school row, typically).
///
/// Fields are kept as raw JSON values in server order. Every field is optional;
/// a value counts as absent when it is missing, `null`, an empty string,
/// `false` or numeric zero, so callers fall back to a placeholder for all of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder used by fixtures and tests
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Display text of a field, or `None` when the field counts as absent.
    pub fn display_value(&self, field: &str) -> Option<String> {
        self.0.get(field).and_then(display_text)
    }

    /// Identity used for the school detail link. Unlike `display_value`,
    /// a numeric zero id is still an id.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(number_text(n)),
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(|item| display_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(",");
            if joined.is_empty() { None } else { Some(joined) }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Whole floats print without a fractional part (`12.0` shows as `12`)
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Parse a JSON array body into a collection, keeping server order.
pub fn parse_collection(body: &str) -> crate::Result<Vec<Record>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value_falls_back_on_falsy_values() {
        let record = Record::new()
            .with("name", "四川大学")
            .with("empty", "")
            .with("zero", 0)
            .with("null", Value::Null)
            .with("no", false)
            .with("count", 42);

        assert_eq!(record.display_value("name").as_deref(), Some("四川大学"));
        assert_eq!(record.display_value("count").as_deref(), Some("42"));
        assert_eq!(record.display_value("empty"), None);
        assert_eq!(record.display_value("zero"), None);
        assert_eq!(record.display_value("null"), None);
        assert_eq!(record.display_value("no"), None);
        assert_eq!(record.display_value("missing"), None);
    }

    #[test]
    fn test_whole_floats_display_as_integers() {
        let record = Record::new()
            .with("enrollment_24_school_total", 12.0)
            .with("ratio", 0.5)
            .with("big", 1_234_567_u64);

        assert_eq!(record.display_value("enrollment_24_school_total").as_deref(), Some("12"));
        assert_eq!(record.display_value("ratio").as_deref(), Some("0.5"));
        assert_eq!(record.display_value("big").as_deref(), Some("1234567"));
    }

    #[test]
    fn test_array_values_join_with_commas() {
        let record = Record::new().with("exam_subjects", json!(["政治", "英语一", "408"]));
        assert_eq!(
            record.display_value("exam_subjects").as_deref(),
            Some("政治,英语一,408")
        );
    }

    #[test]
    fn test_id_accepts_strings_and_numbers() {
        assert_eq!(Record::new().with("id", "scu").id().as_deref(), Some("scu"));
        assert_eq!(Record::new().with("id", 0).id().as_deref(), Some("0"));
        assert_eq!(Record::new().with("id", "").id(), None);
        assert_eq!(Record::new().id(), None);
    }

    #[test]
    fn test_parse_collection_keeps_server_order() {
        let body = r#"[{"name":"b","id":2},{"name":"a","id":1},{"name":"c","id":3}]"#;
        let records = parse_collection(body).unwrap();
        let names: Vec<_> = records
            .iter()
            .filter_map(|r| r.display_value("name"))
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_collection_rejects_non_array() {
        assert!(parse_collection(r#"{"name":"x"}"#).is_err());
    }
}
