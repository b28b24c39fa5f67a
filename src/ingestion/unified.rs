//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_from_path`], which loads a file into an in-memory
//! [`crate::types::DataSet`].
//!
//! - If [`IngestionOptions::format`] is `None`, the format is inferred from the file extension.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{IngestionError, IngestionResult};
use crate::types::DataSet;

use super::json::{self, JsonOptions};
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};

/// Supported ingestion formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// A single JSON document (envelope, array or object), falling back to NDJSON.
    Json,
    /// Newline-delimited JSON, one record per line.
    Ndjson,
}

impl IngestionFormat {
    /// Parse an ingestion format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "ndjson" | "jsonl" => Some(Self::Ndjson),
            _ => None,
        }
    }
}

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<IngestionFormat>,
    /// JSON parsing options.
    pub json: JsonOptions,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("json", &self.json)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: None,
            json: JsonOptions::default(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Unified ingestion entry point for path-based sources.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with record/skip counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use randomuser_queries::ingestion::{ingest_from_path, IngestionOptions, TracingObserver};
/// use randomuser_queries::processing::get_full_names;
///
/// # fn main() -> Result<(), randomuser_queries::IngestionError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     ..Default::default()
/// };
/// let ds = ingest_from_path("users.json", &opts)?;
/// for name in get_full_names(&ds) {
///     println!("{name}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<DataSet> {
    let path = path.as_ref();
    let format = options.format.or_else(|| infer_format_from_path(path));
    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format,
    };

    tracing::debug!(path = %path.display(), ?format, "starting ingestion");

    let result = match format {
        Some(fmt) => ingest_with_format(path, fmt, &options.json),
        None => Err(IngestionError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    };

    match &result {
        Ok(parsed) => {
            let stats = IngestionStats {
                records: parsed.dataset.len(),
                skipped: parsed.skipped,
            };
            tracing::debug!(records = stats.records, skipped = stats.skipped, "ingestion finished");
            if let Some(obs) = options.observer.as_ref() {
                obs.on_success(&ctx, stats);
            }
        }
        Err(e) => {
            if let Some(obs) = options.observer.as_ref() {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result.map(|parsed| parsed.dataset)
}

fn ingest_with_format(path: &Path, format: IngestionFormat, options: &JsonOptions) -> IngestionResult<json::Parsed> {
    let text = fs::read_to_string(path)?;
    match format {
        IngestionFormat::Json => json::parse_document(&text, options),
        IngestionFormat::Ndjson => json::parse_ndjson(&text, options),
    }
}

fn severity_for_error(e: &IngestionError) -> IngestionSeverity {
    match e {
        IngestionError::Io(_) => IngestionSeverity::Critical,
        IngestionError::Json(_) => IngestionSeverity::Error,
        IngestionError::SchemaMismatch { .. } => IngestionSeverity::Error,
        IngestionError::InvalidRecord { .. } => IngestionSeverity::Error,
        IngestionError::UnsupportedFormat { .. } => IngestionSeverity::Warning,
    }
}

fn infer_format_from_path(path: &Path) -> Option<IngestionFormat> {
    path.extension()
        .and_then(|s| s.to_str())
        .and_then(IngestionFormat::from_extension)
}

/// Convenience helper for callers that want an owned request object.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling ingestion.
    pub options: IngestionOptions,
}

impl IngestionRequest {
    /// Execute the request by calling [`ingest_from_path`].
    pub fn run(&self) -> IngestionResult<DataSet> {
        ingest_from_path(&self.path, &self.options)
    }
}
