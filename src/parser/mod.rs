use crate::errors::{GroupError, Result};
use crate::records::Record;
use log::warn;
use serde_json::{Deserializer, Value};
use std::io::Read;

/// Reads records from a JSON array or from newline-delimited JSON objects.
///
/// In lenient mode a value that cannot become a [`Record`] is skipped and reported in the
/// returned warnings; otherwise the first such value fails the whole read.
pub fn extract_records<R: Read>(
    reader: &mut R,
    field: &str,
    lenient: bool,
) -> Result<(Vec<Record>, Vec<String>)> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    let values = parse_values(&input)?;

    let mut records = Vec::with_capacity(values.len());
    let mut warnings = Vec::new();
    for (index, value) in values.into_iter().enumerate() {
        match Record::from_value(index, value, field) {
            Ok(record) => records.push(record),
            Err(e) if lenient => {
                warn!("skipping record: {}", e);
                warnings.push(e.to_string());
            }
            Err(e) => return Err(e),
        }
    }

    Ok((records, warnings))
}

fn parse_values(input: &str) -> Result<Vec<Value>> {
    let trimmed = input.trim_start();
    match trimmed.chars().next() {
        None => Ok(Vec::new()),
        Some('[') => Ok(serde_json::from_str(trimmed)?),
        // Newline-delimited: one object per value, whitespace between them
        Some('{') => Deserializer::from_str(trimmed)
            .into_iter::<Value>()
            .map(|value| value.map_err(GroupError::from))
            .collect(),
        Some(_) => Err(GroupError::NotAnArray),
    }
}
