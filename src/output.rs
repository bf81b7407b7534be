use serde::Serialize;
use std::error::Error;
use tabled::{builder::Builder, settings::Style};

use crate::types::UtilisationTable;

pub fn write_csv<T: Serialize>(path: &str, rows: &[T]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), Box<dyn Error>> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Render the derived table as a markdown-style grid. The header row comes
/// from the column schema, so the three month columns carry the resolved
/// month names.
pub fn render_table(table: &UtilisationTable) -> String {
    if table.rows.is_empty() {
        return "(no rows)".to_string();
    }
    let mut builder = Builder::default();
    builder.push_record(table.columns.iter().map(|c| c.header.as_str()));
    for row in &table.rows {
        builder.push_record(row.cells());
    }
    builder.build().with(Style::markdown()).to_string()
}

pub fn preview_table(table: &UtilisationTable) {
    println!("{}\n", render_table(table));
}
