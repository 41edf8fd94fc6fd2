use std::io::{self, Write};

use serde_json::{Map, Value};

use crate::{DataRecord, ErrorRecord, Extraction, FetchResult};

const RULE_WIDTH: usize = 30;

/// Write the human-readable summary of `result`.
///
/// Section order is fixed: subject, URL, success, metadata, raw content,
/// extracted data, extraction error. Absent sections are skipped.
pub fn report<W: Write>(result: &FetchResult, out: &mut W) -> io::Result<()> {
    match result {
        FetchResult::Data(record) => report_data(record, out),
        FetchResult::Error(record) => report_error(record, out),
    }
}

fn report_data<W: Write>(record: &DataRecord, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Saved Data Summary:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Company: {}", record.company)?;
    writeln!(out, "URL: {}", record.url)?;
    writeln!(out, "Success: {}", record.success)?;

    if let Some(metadata) = record.metadata.as_ref().filter(|map| !map.is_empty()) {
        writeln!(out)?;
        writeln!(out, "Metadata available:")?;
        write_entries(metadata, out)?;
    }

    if let Some(content) = record.content.as_ref() {
        writeln!(out)?;
        writeln!(out, "Content:")?;
        for (format, text) in content {
            writeln!(out, "{}: {} chars", format, text.chars().count())?;
        }
    }

    match &record.extraction {
        Some(Extraction::Data(map)) if !map.is_empty() => {
            writeln!(out)?;
            writeln!(out, "Extracted Data:")?;
            write_entries(map, out)?;
        }
        Some(Extraction::Error(message)) => {
            writeln!(out)?;
            writeln!(out, "Extraction Error: {message}")?;
        }
        _ => {}
    }
    Ok(())
}

fn report_error<W: Write>(record: &ErrorRecord, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Error during scraping: {}", record.error)
}

fn write_entries<W: Write>(map: &Map<String, Value>, out: &mut W) -> io::Result<()> {
    for (key, value) in map {
        writeln!(out, "{key}: {}", format_value(value))?;
    }
    Ok(())
}

/// Strings print bare; everything else as compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
