//! Parser for the question registry format.
//!
//! The registry is a restricted, indentation-sensitive subset of YAML:
//! a top-level list of records (`- ` at column zero), `key: value` scalar
//! lines, one block-scalar form (`key: |` followed by indented lines), and
//! one list form (`checklist:` followed by indented `- ` bullets). Comments
//! (`#`) and blank lines are ignored. Anchors, flow collections, nested
//! mappings and multi-document streams are intentionally unsupported.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// A single field value: either one string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Value {
    /// Returns the scalar content, or `None` for a list.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    /// Returns the list content, or `None` for a scalar.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Scalar(_) => None,
            Value::List(items) => Some(items),
        }
    }
}

/// One parsed registry entry.
///
/// Field order is preserved from the source text. Unrecognized keys are kept
/// verbatim so future registry fields pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    pub fields: IndexMap<String, Value>,
}

impl Record {
    /// Returns the scalar value stored under `key`, if any.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_scalar)
    }

    /// Returns the list value stored under `key`, if any.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).and_then(Value::as_list)
    }

    /// The record's slug, or the empty string if it has none.
    pub fn slug(&self) -> &str {
        self.scalar("slug").unwrap_or_default()
    }
}

/// An ordered collection of records, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub records: Vec<Record>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Finds the record whose `slug` field equals `slug`.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.slug() == slug)
    }
}

/// How the parser treats lines that match no grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Skip unrecognized lines silently.
    #[default]
    Lenient,
    /// Fail with a parse error naming the offending line.
    Strict,
}

/// Parser state, carrying the context needed to resume on the next line.
#[derive(Debug)]
enum State {
    /// Default state between records and fields.
    Scanning,
    /// Inside a `key: |` block; collects lines indented past `base_indent`.
    CollectingBlockScalar { base_indent: usize, field: String, lines: Vec<String> },
    /// Inside a `checklist:` list; collects `- ` bullets indented at least
    /// `min_indent`.
    CollectingList { min_indent: usize, field: String },
}

/// Number of leading space characters. Tabs are not counted or expanded;
/// the format's indentation contract is spaces-only.
fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Drops up to `count` leading characters, used to strip block-scalar
/// indentation without panicking on short lines.
fn strip_leading(line: &str, count: usize) -> String {
    line.chars().skip(count).collect()
}

fn finish_block(current: &mut Option<Record>, field: String, lines: Vec<String>) {
    if let Some(record) = current {
        let joined = lines.join("\n");
        let joined = joined.trim_end_matches('\n').to_string();
        record.fields.insert(field, Value::Scalar(joined));
    }
}

/// Splits `tags` given as a comma-separated scalar into a trimmed list,
/// dropping empty entries. List-valued `tags` are left as-is.
fn normalize_tags(record: &mut Record) {
    let split = match record.fields.get("tags") {
        Some(Value::Scalar(raw)) => raw
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(String::from)
            .collect::<Vec<_>>(),
        _ => return,
    };
    record.fields.insert("tags".to_string(), Value::List(split));
}

/// Parses a registry document into ordered records.
///
/// The parser is a three-state machine (scanning, block scalar, bullet list).
/// Falling out of a collecting state reprocesses the triggering line under
/// scanning rules through an explicit per-line loop, so adversarial input
/// with many short continuations cannot grow the stack.
///
/// # Errors
/// * `Error::ParseError` under [`Strictness::Strict`] when a line matches no
///   grammar rule; lenient mode drops such lines silently.
pub fn parse_document(input: &str, strictness: Strictness) -> Result<Document> {
    let mut records: Vec<Record> = Vec::new();
    let mut current: Option<Record> = None;
    let mut state = State::Scanning;

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        let indent = indent_of(line);

        // Runs at most twice per line: once in a collecting state and once
        // more after falling back to scanning.
        let mut consumed = false;
        while !consumed {
            state = match state {
                State::CollectingBlockScalar { base_indent, field, mut lines } => {
                    if trimmed.is_empty() {
                        // Interior blank lines are part of the block and
                        // preserve paragraph breaks in the joined text.
                        lines.push(String::new());
                        consumed = true;
                        State::CollectingBlockScalar { base_indent, field, lines }
                    } else if trimmed.starts_with('#') {
                        // Comment lines never become block content.
                        consumed = true;
                        State::CollectingBlockScalar { base_indent, field, lines }
                    } else if indent > base_indent {
                        lines.push(strip_leading(line, base_indent + 2));
                        consumed = true;
                        State::CollectingBlockScalar { base_indent, field, lines }
                    } else {
                        // Block ended; reprocess this line under scanning.
                        finish_block(&mut current, field, lines);
                        State::Scanning
                    }
                }
                State::CollectingList { min_indent, field } => {
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        consumed = true;
                        State::CollectingList { min_indent, field }
                    } else if indent >= min_indent && trimmed.starts_with("- ") {
                        if let Some(record) = current.as_mut() {
                            if let Some(Value::List(items)) = record.fields.get_mut(&field) {
                                items.push(trimmed[2..].to_string());
                            }
                        }
                        consumed = true;
                        State::CollectingList { min_indent, field }
                    } else {
                        // List ended; reprocess this line under scanning.
                        State::Scanning
                    }
                }
                State::Scanning => {
                    consumed = true;
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        State::Scanning
                    } else if indent == 0 && line.starts_with("- ") {
                        if let Some(record) = current.take() {
                            records.push(record);
                        }
                        let mut record = Record::default();
                        let tail = line[2..].trim();
                        if let Some((key, value)) = tail.split_once(':') {
                            record.fields.insert(
                                key.trim().to_string(),
                                Value::Scalar(value.trim().to_string()),
                            );
                        }
                        current = Some(record);
                        State::Scanning
                    } else if let Some((key, value)) = trimmed.split_once(':') {
                        let key = key.trim().to_string();
                        let value = value.trim();
                        if current.is_none() {
                            if strictness == Strictness::Strict {
                                return Err(Error::ParseError {
                                    line: line_number,
                                    message: format!(
                                        "field '{key}' appears before any '- ' record marker"
                                    ),
                                });
                            }
                            log::debug!("skipping line {line_number}: field outside a record");
                            State::Scanning
                        } else if value == "|" {
                            State::CollectingBlockScalar {
                                base_indent: indent,
                                field: key,
                                lines: Vec::new(),
                            }
                        } else if key == "checklist" {
                            if let Some(record) = current.as_mut() {
                                record.fields.insert(key.clone(), Value::List(Vec::new()));
                            }
                            State::CollectingList { min_indent: indent + 2, field: key }
                        } else {
                            if let Some(record) = current.as_mut() {
                                record.fields.insert(key, Value::Scalar(value.to_string()));
                            }
                            State::Scanning
                        }
                    } else {
                        if strictness == Strictness::Strict {
                            return Err(Error::ParseError {
                                line: line_number,
                                message: format!("unrecognized line: '{trimmed}'"),
                            });
                        }
                        log::debug!("skipping unrecognized line {line_number}: '{trimmed}'");
                        State::Scanning
                    }
                }
            };
        }
    }

    // Flush whatever was still open at end of input.
    if let State::CollectingBlockScalar { field, lines, .. } = state {
        finish_block(&mut current, field, lines);
    }
    if let Some(record) = current {
        records.push(record);
    }

    let mut document = Document { records };
    for record in &mut document.records {
        normalize_tags(record);
    }
    Ok(document)
}

/// Reads and parses the registry file at `path`.
pub fn load_registry<P: AsRef<std::path::Path>>(
    path: P,
    strictness: Strictness,
) -> Result<Document> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(Error::IoError)?;
    parse_document(&content, strictness)
}
