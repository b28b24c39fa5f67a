//! Ordering queries.

use crate::types::{DataSet, NameAge};

/// Full name and age of every user, sorted by age.
///
/// Ascending unless `descending` is set. The sort is stable in both directions: users with equal
/// ages keep their source order.
pub fn sort_users_by_age(dataset: &DataSet, descending: bool) -> Vec<NameAge> {
    let mut out: Vec<NameAge> = dataset
        .iter()
        .map(|r| NameAge {
            name: r.name.to_string(),
            age: r.dob.age,
        })
        .collect();

    if descending {
        out.sort_by(|a, b| b.age.cmp(&a.age));
    } else {
        out.sort_by_key(|u| u.age);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::fixtures::{dataset, user, RecordExt};

    fn names(users: &[NameAge]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn sorts_ascending_by_default() {
        let ds = dataset(vec![
            user("b", "40").age(40),
            user("a", "20").age(20),
            user("c", "30").age(30),
        ]);
        let out = sort_users_by_age(&ds, false);
        assert_eq!(names(&out), vec!["a 20", "c 30", "b 40"]);
        assert_eq!(
            out[0],
            NameAge {
                name: "a 20".to_string(),
                age: 20
            }
        );
    }

    #[test]
    fn descending_is_reverse_of_ascending_for_unique_ages() {
        let ds = dataset(vec![
            user("b", "40").age(40),
            user("a", "20").age(20),
            user("c", "30").age(30),
        ]);
        let mut asc = sort_users_by_age(&ds, false);
        asc.reverse();
        assert_eq!(sort_users_by_age(&ds, true), asc);
    }

    #[test]
    fn ties_keep_source_order_in_both_directions() {
        let ds = dataset(vec![
            user("first", "tie").age(30),
            user("young", "one").age(10),
            user("second", "tie").age(30),
        ]);
        assert_eq!(
            names(&sort_users_by_age(&ds, false)),
            vec!["young one", "first tie", "second tie"]
        );
        assert_eq!(
            names(&sort_users_by_age(&ds, true)),
            vec!["first tie", "second tie", "young one"]
        );
    }

    #[test]
    fn sorting_empty_dataset_is_empty() {
        assert!(sort_users_by_age(&DataSet::default(), true).is_empty());
    }
}
