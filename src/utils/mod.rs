use crate::errors::Result;
use crate::group::Grouped;
use crate::records::Record;
use log::info;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Writes one group of records as CSV.
///
/// Columns are every field seen in the group, in first-appearance order. Strings are
/// written as-is, other values as compact JSON, and absent fields as empty cells.
pub fn export_to_csv<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?; // csv::Error automatically converted by #[from]

    let headers = collect_headers(records);
    writer.write_record(&headers)?;

    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|name| record.get(name).map(cell).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?; // io::Error automatically converted
    info!("wrote {} rows to '{}'", records.len(), path.display());
    Ok(())
}

/// Writes the groups as a pretty-printed JSON object keyed by discriminant.
pub fn export_to_json<W: Write, T: Serialize>(
    writer: &mut W,
    grouped: &Grouped<T>,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, grouped)?;
    writeln!(writer)?;
    Ok(())
}

fn collect_headers(records: &[Record]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for record in records {
        for name in record.fields().keys() {
            if !headers.iter().any(|h| h == name) {
                headers.push(name.clone());
            }
        }
    }
    headers
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
