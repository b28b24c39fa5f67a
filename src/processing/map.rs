//! Per-record projections.

use crate::types::{DataSet, Record};

/// Projects every record through `mapper`, preserving source order.
///
/// This is a convenience wrapper around [`DataSet::map_records`].
pub fn map<T, F>(dataset: &DataSet, mapper: F) -> Vec<T>
where
    F: FnMut(&Record) -> T,
{
    dataset.map_records(mapper)
}

/// `"{first} {last}"` for every record.
pub fn get_full_names(dataset: &DataSet) -> Vec<String> {
    map(dataset, |r| r.name.to_string())
}

/// `(latitude, longitude)` for every record, as the raw strings.
pub fn get_all_coordinates(dataset: &DataSet) -> Vec<(String, String)> {
    map(dataset, |r| {
        let c = &r.location.coordinates;
        (c.latitude.clone(), c.longitude.clone())
    })
}
