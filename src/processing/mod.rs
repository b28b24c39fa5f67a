//! Read-only queries over a [`crate::types::DataSet`].
//!
//! Every query is a pure function of `&DataSet` plus scalar parameters. None of them fail: an empty
//! dataset produces an empty sequence, an empty map, `0.0`, or `None`.
//!
//! - [`mod@filter`]: [`get_users_by_country`], [`get_emails_of_older_than`],
//!   [`get_usernames_starting_with`], [`find_users_in_timezone`], [`get_registered_before_year`]
//! - [`mod@map`]: [`get_full_names`], [`get_all_coordinates`]
//! - [`mod@sort`]: [`sort_users_by_age`]
//! - [`mod@reduce`]: [`count_users_by_gender`], [`get_average_age`], [`group_users_by_nationality`],
//!   [`get_oldest_user`]
//!
//! The generic [`filter()`], [`map()`] and [`reduce()`] building blocks compose with the queries:
//!
//! ```rust
//! use randomuser_queries::processing::{filter, get_average_age};
//! use randomuser_queries::types::DataSet;
//!
//! let ds = DataSet::default();
//! let french = filter(&ds, |r| r.nat == "FR");
//! assert_eq!(get_average_age(&french), 0.0);
//! ```

pub mod filter;
pub mod map;
pub mod reduce;
pub mod sort;

#[cfg(test)]
pub(crate) mod fixtures;

pub use filter::{
    filter, find_users_in_timezone, get_emails_of_older_than, get_registered_before_year,
    get_users_by_country, get_usernames_starting_with,
};
pub use map::{get_all_coordinates, get_full_names, map};
pub use reduce::{
    count_users_by_gender, get_average_age, get_oldest_user, group_users_by_nationality, reduce,
};
pub use sort::sort_users_by_age;
