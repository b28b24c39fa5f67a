//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - The randomuser.me envelope: `{"results": [{...}, ...], "info": {...}}`
//! - A JSON array of records: `[{...}, {...}]`
//! - A single record object: `{...}`
//! - Newline-delimited JSON (NDJSON), one record per line
//!
//! Each record is deserialized on its own so failures can name the offending (1-based) record.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, Record};

/// What to do with a record that does not deserialize into a [`Record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedRecordPolicy {
    /// Abort ingestion with [`IngestionError::InvalidRecord`].
    #[default]
    Fail,
    /// Drop the record, log a warning and keep going.
    Skip,
}

/// Options for JSON parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonOptions {
    pub malformed: MalformedRecordPolicy,
}

/// A parsed dataset plus the number of records dropped under [`MalformedRecordPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Parsed {
    pub(crate) dataset: DataSet,
    pub(crate) skipped: usize,
}

/// Ingest a JSON file into an in-memory [`DataSet`].
pub fn ingest_json_from_path(path: impl AsRef<Path>, options: &JsonOptions) -> IngestionResult<DataSet> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text, options)
}

/// Ingest JSON from an in-memory string into a [`DataSet`].
///
/// The input is first parsed as a single JSON document. If that fails but its first non-blank line
/// is a complete JSON value, it is treated as NDJSON; otherwise the JSON syntax error is returned.
pub fn ingest_json_from_str(input: &str, options: &JsonOptions) -> IngestionResult<DataSet> {
    parse_document(input, options).map(|p| p.dataset)
}

/// Ingest NDJSON (one record per line) from an in-memory string.
pub fn ingest_ndjson_from_str(input: &str, options: &JsonOptions) -> IngestionResult<DataSet> {
    parse_ndjson(input, options).map(|p| p.dataset)
}

pub(crate) fn parse_document(input: &str, options: &JsonOptions) -> IngestionResult<Parsed> {
    let trimmed = non_empty(input)?;

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(mut obj)) => match obj.remove("results") {
            Some(Value::Array(items)) => records_from_values(numbered(items), options),
            Some(_) => Err(IngestionError::SchemaMismatch {
                message: "'results' must be an array of records".to_string(),
            }),
            None => records_from_values([(1, Value::Object(obj))], options),
        },
        Ok(Value::Array(items)) => records_from_values(numbered(items), options),
        Ok(_) => Err(IngestionError::SchemaMismatch {
            message: "json must be an object, an array of records, or NDJSON".to_string(),
        }),
        Err(e) if first_line_is_json(trimmed) => {
            tracing::debug!(error = %e, "input is not a single json document, reading as ndjson");
            parse_ndjson(input, options)
        }
        Err(e) => Err(e.into()),
    }
}

/// NDJSON only if the first non-blank line is a complete JSON value on its own. A truncated
/// pretty-printed document never is.
fn first_line_is_json(input: &str) -> bool {
    input
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .is_some_and(|line| serde_json::from_str::<Value>(line).is_ok())
}

pub(crate) fn parse_ndjson(input: &str, options: &JsonOptions) -> IngestionResult<Parsed> {
    non_empty(input)?;

    let mut values = Vec::new();
    let mut skipped = 0;
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(v) => values.push((i + 1, v)),
            Err(e) => match options.malformed {
                MalformedRecordPolicy::Fail => {
                    return Err(IngestionError::SchemaMismatch {
                        message: format!("invalid ndjson at line {}: {}", i + 1, e),
                    });
                }
                MalformedRecordPolicy::Skip => {
                    tracing::warn!(line = i + 1, error = %e, "skipping invalid ndjson line");
                    skipped += 1;
                }
            },
        }
    }

    let mut parsed = records_from_values(values, options)?;
    parsed.skipped += skipped;
    Ok(parsed)
}

fn non_empty(input: &str) -> IngestionResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }
    Ok(trimmed)
}

/// Pairs array elements with their 1-based position.
fn numbered(items: Vec<Value>) -> impl Iterator<Item = (usize, Value)> {
    items.into_iter().enumerate().map(|(idx0, v)| (idx0 + 1, v))
}

/// `record` is the 1-based array position, or the physical line number for NDJSON.
fn records_from_values<I>(values: I, options: &JsonOptions) -> IngestionResult<Parsed>
where
    I: IntoIterator<Item = (usize, Value)>,
{
    let mut results = Vec::new();
    let mut skipped = 0;

    for (record, v) in values {
        match serde_json::from_value::<Record>(v) {
            Ok(r) => results.push(r),
            Err(e) => match options.malformed {
                MalformedRecordPolicy::Fail => {
                    return Err(IngestionError::InvalidRecord {
                        record,
                        message: e.to_string(),
                    });
                }
                MalformedRecordPolicy::Skip => {
                    tracing::warn!(record, error = %e, "skipping malformed record");
                    skipped += 1;
                }
            },
        }
    }

    Ok(Parsed {
        dataset: DataSet::new(results),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "gender": "female",
        "name": {"title": "Ms", "first": "Ana", "last": "Lopez"},
        "location": {
            "city": "Madrid", "country": "Spain",
            "coordinates": {"latitude": "40.4", "longitude": "-3.7"},
            "timezone": {"offset": "+1:00", "description": "Brussels"}
        },
        "email": "ana.lopez@example.com",
        "login": {"username": "bluebird42", "password": "x"},
        "dob": {"date": "1990-01-01T00:00:00.000Z", "age": 35},
        "registered": {"date": "2012-03-04T05:06:07.000Z", "age": 13},
        "nat": "ES"
    }"#;

    #[test]
    fn parses_single_record_object_and_ignores_unknown_keys() {
        let ds = ingest_json_from_str(RECORD, &JsonOptions::default()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.results[0].login.username, "bluebird42");
        assert_eq!(ds.results[0].dob.age, 35);
    }

    #[test]
    fn results_must_be_an_array() {
        let err = ingest_json_from_str(r#"{"results": 3}"#, &JsonOptions::default()).unwrap_err();
        assert!(err.to_string().contains("'results' must be an array"));
    }

    #[test]
    fn scalar_document_is_rejected() {
        let err = ingest_json_from_str("42", &JsonOptions::default()).unwrap_err();
        assert!(matches!(err, IngestionError::SchemaMismatch { .. }));
    }

    #[test]
    fn single_line_syntax_error_is_a_json_error() {
        let err = ingest_json_from_str("{not json", &JsonOptions::default()).unwrap_err();
        assert!(matches!(err, IngestionError::Json(_)));
    }

    #[test]
    fn skip_policy_counts_dropped_records() {
        let input = format!(r#"{{"results": [{RECORD}, {{"gender": "male"}}, {RECORD}]}}"#);
        let opts = JsonOptions {
            malformed: MalformedRecordPolicy::Skip,
        };
        let parsed = parse_document(&input, &opts).unwrap();
        assert_eq!(parsed.dataset.len(), 2);
        assert_eq!(parsed.skipped, 1);
    }

    #[test]
    fn ndjson_skip_policy_drops_bad_lines() {
        let line = RECORD.replace('\n', " ");
        let input = format!("{line}\n{{oops\n{line}\n");
        let opts = JsonOptions {
            malformed: MalformedRecordPolicy::Skip,
        };
        let parsed = parse_ndjson(&input, &opts).unwrap();
        assert_eq!(parsed.dataset.len(), 2);
        assert_eq!(parsed.skipped, 1);

        let err = parse_ndjson(&input, &JsonOptions::default()).unwrap_err();
        assert!(err.to_string().contains("invalid ndjson at line 2"));
    }

    #[test]
    fn ndjson_record_errors_use_physical_line_numbers() {
        let line = RECORD.replace('\n', " ");
        let input = format!("{line}\n\n{{\"gender\": \"male\"}}\n");

        let err = parse_ndjson(&input, &JsonOptions::default()).unwrap_err();
        assert!(
            matches!(err, IngestionError::InvalidRecord { record: 3, .. }),
            "unexpected error: {err}"
        );

        let err = ingest_json_from_str(&input, &JsonOptions::default()).unwrap_err();
        assert!(matches!(err, IngestionError::InvalidRecord { record: 3, .. }));

        let leading_blank = format!("\n{input}");
        let err = ingest_json_from_str(&leading_blank, &JsonOptions::default()).unwrap_err();
        assert!(matches!(err, IngestionError::InvalidRecord { record: 4, .. }));
    }

    #[test]
    fn multi_line_syntax_error_is_not_read_as_ndjson() {
        let broken = &RECORD[..RECORD.len() / 2];
        let opts = JsonOptions {
            malformed: MalformedRecordPolicy::Skip,
        };
        assert!(matches!(parse_document(broken, &opts), Err(IngestionError::Json(_))));
    }
}
