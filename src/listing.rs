//! Registry listing output.
//!
//! Turns parsed records into the `exgen list` presentation: one
//! `slug | title | difficulty | tags` line per record in source order, a
//! matched/total footer, or a JSON array of the records.

use crate::error::{Error, Result};
use crate::registry::{Document, Record};

/// Selects records carrying `tag`, or every record when no tag is given.
/// Source order is preserved.
pub fn filter_by_tag<'a>(document: &'a Document, tag: Option<&str>) -> Vec<&'a Record> {
    document
        .iter()
        .filter(|record| match tag {
            Some(tag) => record.list("tags").is_some_and(|tags| tags.iter().any(|t| t == tag)),
            None => true,
        })
        .collect()
}

/// Renders one record as a `slug | title | difficulty | tags` line.
/// Absent fields render as empty columns.
pub fn record_line(record: &Record) -> String {
    let tags = record.list("tags").map(|tags| tags.join(", ")).unwrap_or_default();
    format!(
        "{} | {} | {} | {}",
        record.slug(),
        record.scalar("title").unwrap_or_default(),
        record.scalar("difficulty").unwrap_or_default(),
        tags
    )
}

/// Renders the listing footer: a matched count when a tag filter was
/// applied, a total count otherwise.
pub fn listing_footer(count: usize, tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("-- {count} question(s) matched tag '{tag}'"),
        None => format!("-- {count} total question(s)"),
    }
}

/// Renders records as a pretty-printed JSON array.
///
/// # Errors
/// * `Error::SerdeError` if serialization fails
pub fn records_to_json(records: &[&Record]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(Error::SerdeError)
}
