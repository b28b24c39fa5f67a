//! Aggregations over a [`DataSet`].

use std::collections::BTreeMap;

use crate::types::{DataSet, GenderCounts, OldestUser, Record};

/// Fold all records into an accumulator.
///
/// This is a convenience wrapper around [`DataSet::reduce_records`].
pub fn reduce<A, F>(dataset: &DataSet, init: A, reducer: F) -> A
where
    F: FnMut(A, &Record) -> A,
{
    dataset.reduce_records(init, reducer)
}

/// Counts `"male"` and `"female"` records.
///
/// Any other gender value is ignored, so `male + female <= dataset.len()`.
pub fn count_users_by_gender(dataset: &DataSet) -> GenderCounts {
    reduce(dataset, GenderCounts::default(), |mut acc, r| {
        match r.gender.as_str() {
            "male" => acc.male += 1,
            "female" => acc.female += 1,
            _ => {}
        }
        acc
    })
}

/// Arithmetic mean of every user's age, or `0.0` for an empty dataset.
pub fn get_average_age(dataset: &DataSet) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }
    let total = reduce(dataset, 0u64, |acc, r| acc + u64::from(r.dob.age));
    total as f64 / dataset.len() as f64
}

/// Number of users per nationality code.
///
/// Only observed codes appear as keys.
pub fn group_users_by_nationality(dataset: &DataSet) -> BTreeMap<String, usize> {
    reduce(dataset, BTreeMap::new(), |mut acc, r| {
        *acc.entry(r.nat.clone()).or_insert(0) += 1;
        acc
    })
}

/// The oldest user, or `None` for an empty dataset.
///
/// On ties the earliest record wins: the candidate starts at the first record and is only replaced
/// by a strictly greater age.
pub fn get_oldest_user(dataset: &DataSet) -> Option<OldestUser> {
    let mut records = dataset.iter();
    let first = records.next()?;
    let oldest = records.fold(first, |best, r| if r.dob.age > best.dob.age { r } else { best });

    Some(OldestUser {
        name: oldest.name.to_string(),
        age: oldest.dob.age,
        email: oldest.email.clone(),
    })
}
