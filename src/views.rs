//! Record Views
//!
//! Renders store contents for display: the classic one-line-per-product
//! listing, a bordered table, or JSON.

use crate::error::ApiError;
use crate::record::Record;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Table,
    Json,
}

impl ListFormat {
    pub fn parse(format: &str) -> Result<Self, ApiError> {
        match format {
            "text" => Ok(ListFormat::Text),
            "table" => Ok(ListFormat::Table),
            "json" => Ok(ListFormat::Json),
            _ => Err(ApiError::InvalidInput(format!(
                "Invalid format: {} (must be 'text', 'table', or 'json')",
                format
            ))),
        }
    }
}

/// `ID: <id>, Name: <name>, Price: <price>, Quantity: <quantity>`
pub fn format_record_line(record: &Record) -> String {
    format!(
        "ID: {}, Name: {}, Price: {}, Quantity: {}",
        record.id(),
        record.name(),
        record.price(),
        record.quantity()
    )
}

/// One display line per record, each newline-terminated.
pub fn format_records_text(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format_record_line(record));
        out.push('\n');
    }
    out
}

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn format_records_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No products found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Price", "Quantity"]);
    for record in records {
        table.add_row(vec![
            record.id().to_string(),
            record.name().to_string(),
            record.price().to_string(),
            record.quantity().to_string(),
        ]);
    }
    format!(
        "{}\n\n{}\n\nTotal: {} product(s)",
        format_section_heading("Inventory"),
        table,
        records.len()
    )
}

pub fn format_records_json(records: &[Record]) -> Result<String, ApiError> {
    let out = json!({ "products": records, "total": records.len() });
    serde_json::to_string_pretty(&out)
        .map_err(|e| ApiError::InvalidInput(format!("Failed to serialize products: {}", e)))
}

pub fn format_records(records: &[Record], format: ListFormat) -> Result<String, ApiError> {
    match format {
        ListFormat::Text => Ok(format_records_text(records)),
        ListFormat::Table => Ok(format_records_table(records)),
        ListFormat::Json => format_records_json(records),
    }
}
