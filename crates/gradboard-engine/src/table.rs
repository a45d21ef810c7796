use gradboard_types::Record;
use serde::Serialize;

/// Badge colouring for categorical cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Info,
    Warning,
    Danger,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Secondary => "secondary",
            Tone::Info => "info",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// Value → tone table for a categorical field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeRule {
    tones: Vec<(String, Tone)>,
    fallback: Tone,
    fallback_label: Option<String>,
}

impl BadgeRule {
    pub fn new(fallback: Tone) -> Self {
        Self {
            tones: Vec::new(),
            fallback,
            fallback_label: None,
        }
    }

    pub fn when(mut self, value: impl Into<String>, tone: Tone) -> Self {
        self.tones.push((value.into(), tone));
        self
    }

    /// Label shown instead of the column placeholder when the value is absent
    pub fn with_fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = Some(label.into());
        self
    }

    pub fn tone_for(&self, value: Option<&str>) -> Tone {
        value
            .and_then(|v| {
                self.tones
                    .iter()
                    .find(|(candidate, _)| candidate == v)
                    .map(|(_, tone)| *tone)
            })
            .unwrap_or(self.fallback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    /// Link to `<base><percent-encoded record id>`
    Link { base: String },
    Badge(BadgeRule),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: String,
    pub header: String,
    pub field: String,
    pub format: CellFormat,
    /// Default width in px; also the cell's minimum width
    pub width: u32,
    pub align: Align,
    pub placeholder: String,
    pub resizable: bool,
}

pub const TEXT_PLACEHOLDER: &str = "N/A";
pub const COUNT_PLACEHOLDER: &str = "-";

impl ColumnSpec {
    pub fn text(field: impl Into<String>, header: impl Into<String>, width: u32) -> Self {
        let field = field.into();
        Self {
            key: field.clone(),
            header: header.into(),
            field,
            format: CellFormat::Text,
            width,
            align: Align::Left,
            placeholder: TEXT_PLACEHOLDER.to_string(),
            resizable: true,
        }
    }

    pub fn link(mut self, base: impl Into<String>) -> Self {
        self.format = CellFormat::Link { base: base.into() };
        self
    }

    pub fn badge(mut self, rule: BadgeRule) -> Self {
        self.format = CellFormat::Badge(rule);
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn fixed(mut self) -> Self {
        self.resizable = false;
        self
    }
}

/// Ordered column list of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<ColumnSpec>,
}

impl ColumnSchema {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn default_widths(&self) -> Vec<u32> {
        self.columns.iter().map(|c| c.width).collect()
    }
}

/// Column layout of the dashboard school table
pub fn school_columns() -> ColumnSchema {
    ColumnSchema::new(vec![
        ColumnSpec::text("name", "院校名称", 180).link("/school/"),
        ColumnSpec::text("level", "院校等级", 80).badge(
            BadgeRule::new(Tone::Secondary)
                .when("985", Tone::Danger)
                .when("211", Tone::Warning)
                .when("双一流", Tone::Info)
                .with_fallback_label("普通院校"),
        ),
        ColumnSpec::text("province", "省份", 80),
        ColumnSpec::text("region", "地区", 60).badge(
            BadgeRule::new(Tone::Secondary)
                .when("A区", Tone::Primary)
                .when("B区", Tone::Info),
        ),
        ColumnSpec::text("computer_rank", "计算机等级", 120),
        ColumnSpec::text("enrollment_24_school_total", "24年招生总数", 100)
            .centered()
            .placeholder(COUNT_PLACEHOLDER),
        ColumnSpec::text("enrollment_24_academic", "24年学硕", 100)
            .centered()
            .placeholder(COUNT_PLACEHOLDER),
        ColumnSpec::text("enrollment_24_professional", "24年专硕", 100)
            .centered()
            .placeholder(COUNT_PLACEHOLDER),
        ColumnSpec::text("exam_subjects", "初试科目", 160).placeholder(COUNT_PLACEHOLDER),
    ])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub width: u32,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellModel {
    pub column: String,
    pub text: String,
    pub is_placeholder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    pub align: Align,
    pub min_width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowModel {
    pub cells: Vec<CellModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TableBody {
    Rows { rows: Vec<RowModel> },
    /// Single "no data" row spanning every column
    Empty { colspan: usize },
}

impl TableBody {
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows { rows } => rows.len(),
            TableBody::Empty { .. } => 0,
        }
    }
}

/// Header cells, taking widths from live resizer state when given
pub fn build_header(schema: &ColumnSchema, widths: Option<&[u32]>) -> Vec<HeaderCell> {
    schema
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| HeaderCell {
            key: column.key.clone(),
            label: column.header.clone(),
            width: widths
                .and_then(|w| w.get(idx).copied())
                .unwrap_or(column.width),
            resizable: column.resizable,
        })
        .collect()
}

pub fn build_row(record: &Record, schema: &ColumnSchema) -> RowModel {
    let cells = schema
        .columns()
        .iter()
        .map(|column| build_cell(record, column))
        .collect();
    RowModel { cells }
}

/// One row per record in slice order; an empty slice becomes the empty-state row.
pub fn build_table_body(records: &[Record], schema: &ColumnSchema) -> TableBody {
    if records.is_empty() {
        return TableBody::Empty {
            colspan: schema.len(),
        };
    }
    TableBody::Rows {
        rows: records.iter().map(|r| build_row(r, schema)).collect(),
    }
}

fn build_cell(record: &Record, column: &ColumnSpec) -> CellModel {
    let value = record.display_value(&column.field);

    let (text, is_placeholder) = match (&value, &column.format) {
        (Some(v), _) => (v.clone(), false),
        (None, CellFormat::Badge(rule)) => match &rule.fallback_label {
            Some(label) => (label.clone(), false),
            None => (column.placeholder.clone(), true),
        },
        (None, _) => (column.placeholder.clone(), true),
    };

    let (href, tone) = match &column.format {
        CellFormat::Text => (None, None),
        CellFormat::Link { base } => (
            record
                .id()
                .map(|id| format!("{}{}", base, encode_uri_component(&id))),
            None,
        ),
        CellFormat::Badge(rule) => (None, Some(rule.tone_for(value.as_deref()))),
    };

    CellModel {
        column: column.key.clone(),
        text,
        is_placeholder,
        href,
        tone,
        align: column.align,
        min_width: column.width,
    }
}

/// Percent-encode everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(id: &str, name: &str, level: &str, region: &str) -> Record {
        Record::new()
            .with("id", id)
            .with("name", name)
            .with("level", level)
            .with("province", "四川")
            .with("region", region)
            .with("enrollment_24_school_total", 120)
    }

    #[test]
    fn test_rows_follow_slice_order_and_schema() {
        let schema = school_columns();
        let records = vec![
            school("scu", "四川大学", "985", "A区"),
            school("swjtu", "西南交通大学", "211", "B区"),
        ];

        let body = build_table_body(&records, &schema);
        let TableBody::Rows { rows } = body else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells.len(), schema.len());
        assert_eq!(rows[0].cells[0].text, "四川大学");
        assert_eq!(rows[1].cells[0].text, "西南交通大学");
        assert_eq!(rows[0].cells[0].href.as_deref(), Some("/school/scu"));
        assert_eq!(rows[0].cells[1].tone, Some(Tone::Danger));
        assert_eq!(rows[1].cells[1].tone, Some(Tone::Warning));
        assert_eq!(rows[0].cells[3].tone, Some(Tone::Primary));
        assert_eq!(rows[1].cells[3].tone, Some(Tone::Info));
    }

    #[test]
    fn test_missing_values_use_placeholders() {
        let schema = school_columns();
        let row = build_row(&Record::new().with("name", "无名"), &schema);

        let by_key = |key: &str| row.cells.iter().find(|c| c.column == key).unwrap();
        assert_eq!(by_key("province").text, "N/A");
        assert!(by_key("province").is_placeholder);
        assert_eq!(by_key("enrollment_24_academic").text, "-");
        assert_eq!(by_key("exam_subjects").text, "-");
        // level falls back to a label, not the placeholder
        assert_eq!(by_key("level").text, "普通院校");
        assert_eq!(by_key("level").tone, Some(Tone::Secondary));
        assert_eq!(by_key("region").text, "N/A");
        assert_eq!(by_key("region").tone, Some(Tone::Secondary));
        assert_eq!(by_key("name").href, None);
    }

    #[test]
    fn test_empty_slice_spans_all_columns() {
        let schema = school_columns();
        assert_eq!(
            build_table_body(&[], &schema),
            TableBody::Empty { colspan: 9 }
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let schema = school_columns();
        let records = vec![school("a", "甲", "双一流", "A区")];
        assert_eq!(
            build_table_body(&records, &schema),
            build_table_body(&records, &schema)
        );
    }

    #[test]
    fn test_header_prefers_live_widths() {
        let schema = school_columns();
        let mut widths = schema.default_widths();
        widths[0] = 250;
        let header = build_header(&schema, Some(&widths));
        assert_eq!(header[0].width, 250);
        assert_eq!(header[1].width, 80);
        assert_eq!(build_header(&schema, None)[0].width, 180);
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("abc-1_2.x"), "abc-1_2.x");
        assert_eq!(encode_uri_component("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_uri_component("川大"), "%E5%B7%9D%E5%A4%A7");
    }
}
