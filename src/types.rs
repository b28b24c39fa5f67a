//! Core data model types.
//!
//! Ingestion produces an in-memory [`DataSet`] of typed [`Record`]s. Queries in
//! [`crate::processing`] read records through these named fields and return the small projection
//! types defined at the bottom of this module.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A user's given and family name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

impl Name {
    /// Create a name from first and last parts.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }
}

/// Formats as `"{first} {last}"`.
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// Latitude/longitude, kept as the strings the source provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timezone {
    /// UTC offset such as `"+5:30"` or `"-3:00"`.
    pub offset: String,
}

/// Where a user lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub timezone: Timezone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub username: String,
}

/// Date-of-birth metadata. Only the age is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dob {
    pub age: u32,
}

/// Registration metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registered {
    /// ISO-8601-like timestamp, e.g. `"2007-07-09T05:51:59.390Z"`.
    pub date: String,
    /// Years since registration.
    pub age: u32,
}

impl Registered {
    /// Year component of [`Self::date`].
    ///
    /// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps and plain
    /// `YYYY-MM-DD` dates. Returns `None` if none of these match.
    pub fn year(&self) -> Option<i32> {
        let raw = self.date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.year());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.year());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// One user profile.
///
/// Keys present in real randomuser.me payloads but not listed here (`picture`, `phone`, `id`,
/// ...) are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    pub gender: String,
    pub location: Location,
    pub login: Login,
    pub dob: Dob,
    pub email: String,
    pub registered: Registered,
    pub nat: String,
}

/// In-memory dataset of user records.
///
/// `results` keeps source order; every query that returns a sequence preserves it unless the
/// query is explicitly a sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    pub results: Vec<Record>,
}

impl DataSet {
    /// Create a dataset from records.
    pub fn new(results: Vec<Record>) -> Self {
        Self { results }
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.results.iter()
    }

    /// Create a new dataset containing only records that match `predicate`.
    pub fn filter_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        let results = self
            .results
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        Self { results }
    }

    /// Project every record through `mapper`, in source order.
    pub fn map_records<T, F>(&self, mapper: F) -> Vec<T>
    where
        F: FnMut(&Record) -> T,
    {
        self.results.iter().map(mapper).collect()
    }

    /// Reduce (fold) all records into an accumulator value.
    ///
    /// This is similar to `Iterator::fold`, but provides each record by reference.
    pub fn reduce_records<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &Record) -> A,
    {
        self.results.iter().fold(init, |acc, r| reducer(acc, r))
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl FromIterator<Record> for DataSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Full name and email of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameEmail {
    pub name: String,
    pub email: String,
}

/// Full name and age of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameAge {
    pub name: String,
    pub age: u32,
}

/// Full name and city of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCity {
    pub name: String,
    pub city: String,
}

/// Full name and raw registration date of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRegistered {
    pub name: String,
    pub registered: String,
}

/// The user returned by [`crate::processing::get_oldest_user`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OldestUser {
    pub name: String,
    pub age: u32,
    pub email: String,
}

/// Counts of `"male"` and `"female"` records. Other gender values are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
}
