//! Catalog export to JSON and CSV

use anyhow::Result;
use catalog_core::{FormatDecision, LectureRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Base name of the exported catalog files
pub const CATALOG_FILE_STEM: &str = "lectures_with_order";

/// Name of the format vote summary file
pub const FORMAT_ANALYSIS_FILE: &str = "date_format_analysis.json";

const CSV_DELIMITER: &str = ";";
const UTF8_BOM: &str = "\u{feff}";

/// One exported catalog row, columns in output order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogRow {
    pub order: usize,
    pub title: String,
    pub number: Option<String>,
    /// Raw date phrase, empty when none was found
    pub date: String,
    /// DD/MM/YYYY, empty when the date could not be parsed
    pub date_standard: String,
    pub description: Option<String>,
}

impl From<&LectureRecord> for CatalogRow {
    fn from(record: &LectureRecord) -> Self {
        Self {
            order: record.order,
            title: record.title.clone(),
            number: record.raw_identifier.clone(),
            date: record.raw_date_text.clone().unwrap_or_default(),
            date_standard: record.canonical_date.clone().unwrap_or_default(),
            description: record.description.clone(),
        }
    }
}

/// Rows for a sorted batch
pub fn catalog_rows(records: &[LectureRecord]) -> Vec<CatalogRow> {
    records.iter().map(CatalogRow::from).collect()
}

/// Render rows as a `;`-separated CSV document with a UTF-8 BOM
pub fn to_csv(rows: &[CatalogRow]) -> String {
    let mut out = String::from(UTF8_BOM);
    out.push_str(&["order", "title", "number", "date", "date_standard", "description"].join(CSV_DELIMITER));
    out.push('\n');
    
    for row in rows {
        let order = row.order.to_string();
        let fields = [
            order.as_str(),
            row.title.as_str(),
            row.number.as_deref().unwrap_or(""),
            row.date.as_str(),
            row.date_standard.as_str(),
            row.description.as_deref().unwrap_or(""),
        ];
        let line: Vec<String> = fields.iter().map(|f| escape_csv_field(f)).collect();
        out.push_str(&line.join(CSV_DELIMITER));
        out.push('\n');
    }
    
    out
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(CSV_DELIMITER) || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write rows as a pretty-printed JSON array
pub async fn write_json(path: &Path, rows: &[CatalogRow]) -> Result<()> {
    let json_data = serde_json::to_string_pretty(rows)?;
    tokio::fs::write(path, json_data).await?;
    info!("💾 Catalog saved to: {}", path.display());
    Ok(())
}

/// Write rows as CSV
pub async fn write_csv(path: &Path, rows: &[CatalogRow]) -> Result<()> {
    tokio::fs::write(path, to_csv(rows)).await?;
    info!("💾 Also saved as CSV: {}", path.display());
    Ok(())
}

/// Write the format vote summary
pub async fn write_format_analysis(path: &Path, decision: &FormatDecision) -> Result<()> {
    let json_data = serde_json::to_string_pretty(decision)?;
    tokio::fs::write(path, json_data).await?;
    info!("📝 Format analysis saved to: {}", path.display());
    Ok(())
}
