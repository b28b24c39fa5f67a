//! `randomuser-queries` loads randomuser-style JSON profiles into a typed, in-memory
//! [`types::DataSet`] and answers questions about them with small, pure query functions.
//!
//! ## Ingestion
//!
//! [`ingestion::ingest_from_path`] reads `.json` (the `{"results": [...]}` envelope, a bare array,
//! or a single object) and `.ndjson`/`.jsonl` files. Every record is deserialized into a
//! [`types::Record`], so queries use named fields instead of string-keyed lookups. Malformed
//! records either fail ingestion or are skipped, per [`ingestion::MalformedRecordPolicy`].
//!
//! ## Queries
//!
//! Everything in [`processing`] takes `&DataSet` and never fails. Sequences come back in source
//! order unless the query sorts; an empty dataset yields an empty sequence, an empty map, `0.0`
//! or `None`.
//!
//! ```rust
//! use randomuser_queries::ingestion::{ingest_json_from_str, JsonOptions};
//! use randomuser_queries::processing::{get_average_age, get_full_names, get_oldest_user};
//!
//! let input = r#"{"results": [{
//!     "gender": "female",
//!     "name": {"first": "Ana", "last": "Lopez"},
//!     "location": {
//!         "country": "Spain", "city": "Madrid",
//!         "coordinates": {"latitude": "40.41", "longitude": "-3.70"},
//!         "timezone": {"offset": "+1:00"}
//!     },
//!     "login": {"username": "bluebird42"},
//!     "dob": {"age": 35},
//!     "email": "ana.lopez@example.com",
//!     "registered": {"date": "2012-03-04T05:06:07.000Z", "age": 13},
//!     "nat": "ES"
//! }]}"#;
//!
//! let ds = ingest_json_from_str(input, &JsonOptions::default()).unwrap();
//! assert_eq!(get_full_names(&ds), vec!["Ana Lopez".to_string()]);
//! assert_eq!(get_average_age(&ds), 35.0);
//! assert_eq!(get_oldest_user(&ds).map(|u| u.age), Some(35));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: JSON/NDJSON loading, options and observers
//! - [`types`]: record + dataset types and query result projections
//! - [`processing`]: the query functions (filter/map/sort/reduce)
//! - [`error`]: error types used by ingestion

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{IngestionError, IngestionResult};
