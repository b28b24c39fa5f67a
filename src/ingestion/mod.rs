//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - auto-detects JSON vs NDJSON by file extension (or you can override via [`IngestionOptions`])
//! - deserializes every record into a typed [`crate::types::Record`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! In-memory input is handled by the functions in [`json`].

pub mod json;
pub mod observability;
pub mod unified;

pub use json::{ingest_json_from_path, ingest_json_from_str, ingest_ndjson_from_str, JsonOptions, MalformedRecordPolicy};
pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, TracingObserver,
};
pub use unified::{ingest_from_path, IngestionFormat, IngestionOptions, IngestionRequest};
