//! Assertions over the CLI's JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the number of data rows in a `schools` result
pub fn assert_row_count(json: &Value, expected: usize) -> Result<()> {
    let body = &json["content"]["table"]["body"];
    let count = match body["state"].as_str() {
        Some("rows") => body["rows"]
            .as_array()
            .context("Expected 'content.table.body.rows' array in JSON")?
            .len(),
        Some("empty") => 0,
        other => anyhow::bail!("Unexpected table body state: {:?}", other),
    };

    if count != expected {
        anyhow::bail!("Expected {} rows, got {}", expected, count);
    }
    Ok(())
}

/// Assert the numbered pagination buttons, in display order
pub fn assert_page_numbers(json: &Value, expected: &[u64]) -> Result<()> {
    let items = json["content"]["table"]["pagination"]["items"]
        .as_array()
        .context("Expected 'content.table.pagination.items' array in JSON")?;

    let numbers: Vec<u64> = items.iter().filter_map(|item| item["number"].as_u64()).collect();
    if numbers != expected {
        anyhow::bail!("Expected page buttons {:?}, got {:?}", expected, numbers);
    }
    Ok(())
}

/// Text of the first cell in every row
pub fn first_column(json: &Value) -> Result<Vec<String>> {
    let rows = json["content"]["table"]["body"]["rows"]
        .as_array()
        .context("Expected 'content.table.body.rows' array in JSON")?;

    rows.iter()
        .map(|row| {
            row["cells"][0]["text"]
                .as_str()
                .map(str::to_string)
                .context("Row without a first cell")
        })
        .collect()
}

/// Assert a dashboard section's status (`ready`, `failed` or `skipped`)
pub fn assert_section_status(section: &Value, expected: &str) -> Result<()> {
    let status = section["status"]
        .as_str()
        .context("Expected 'status' on dashboard section")?;

    if status != expected {
        anyhow::bail!("Expected section status {}, got {} ({})", expected, status, section);
    }
    Ok(())
}
