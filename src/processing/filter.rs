//! Record filtering queries.
//!
//! Every function here returns matches in source order.

use crate::types::{DataSet, NameCity, NameEmail, NameRegistered, Record};

/// Returns a new [`DataSet`] containing only records for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_records`]. The result can be fed to any
/// other query, e.g. the average age of one country.
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&Record) -> bool,
{
    dataset.filter_records(predicate)
}

/// Full name and email of users whose country equals `country`, ignoring case.
pub fn get_users_by_country(dataset: &DataSet, country: &str) -> Vec<NameEmail> {
    let wanted = country.to_lowercase();
    dataset
        .iter()
        .filter(|r| r.location.country.to_lowercase() == wanted)
        .map(|r| NameEmail {
            name: r.name.to_string(),
            email: r.email.clone(),
        })
        .collect()
}

/// Emails of users strictly older than `age`.
pub fn get_emails_of_older_than(dataset: &DataSet, age: u32) -> Vec<String> {
    dataset
        .iter()
        .filter(|r| r.dob.age > age)
        .map(|r| r.email.clone())
        .collect()
}

/// Usernames starting with `prefix`, ignoring case.
///
/// An empty prefix matches every username.
pub fn get_usernames_starting_with(dataset: &DataSet, prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    dataset
        .iter()
        .filter(|r| r.login.username.to_lowercase().starts_with(&prefix))
        .map(|r| r.login.username.clone())
        .collect()
}

/// Full name and city of users whose timezone offset is exactly `offset`.
pub fn find_users_in_timezone(dataset: &DataSet, offset: &str) -> Vec<NameCity> {
    dataset
        .iter()
        .filter(|r| r.location.timezone.offset == offset)
        .map(|r| NameCity {
            name: r.name.to_string(),
            city: r.location.city.clone(),
        })
        .collect()
}

/// Full name and registration date of users who registered strictly before `year`.
///
/// Records whose registration date has no parseable year are skipped.
pub fn get_registered_before_year(dataset: &DataSet, year: i32) -> Vec<NameRegistered> {
    dataset
        .iter()
        .filter(|r| match r.registered.year() {
            Some(y) => y < year,
            None => {
                tracing::warn!(
                    username = %r.login.username,
                    date = %r.registered.date,
                    "unparseable registration date, skipping record"
                );
                false
            }
        })
        .map(|r| NameRegistered {
            name: r.name.to_string(),
            registered: r.registered.date.clone(),
        })
        .collect()
}
