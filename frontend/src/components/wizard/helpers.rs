//! Small pure helpers shared by the wizard's update and view logic.

use common::model::staff::Staff;

/// Refresh decision for a dependent list (the roster of a department, the
/// wards of a province) after its owning selection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh<'a> {
    /// The selection was cleared: drop the stale list, issue no fetch.
    Clear,
    /// Fetch the list for this selection key and replace the old one in full.
    Fetch(&'a str),
}

/// An empty selection empties the dependent list without touching the
/// gateway; anything else triggers a refetch.
pub fn refresh_for(selection: &str) -> Refresh<'_> {
    if selection.is_empty() {
        Refresh::Clear
    } else {
        Refresh::Fetch(selection)
    }
}

/// Client-side roster search: keeps staff whose name or id contains `query`
/// as a case-insensitive substring, preserving roster order. An empty query
/// keeps the whole roster.
pub fn filter_roster(roster: &[Staff], query: &str) -> Vec<Staff> {
    let needle = query.to_lowercase();
    roster
        .iter()
        .filter(|staff| {
            staff.name.to_lowercase().contains(&needle)
                || staff.id.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_roster, refresh_for, Refresh};
    use common::model::staff::Staff;

    fn khoa_a() -> Vec<Staff> {
        vec![
            Staff {
                id: "E1".to_string(),
                name: "Nguyen Van A".to_string(),
                department_name: "Khoa A".to_string(),
            },
            Staff {
                id: "E2".to_string(),
                name: "Tran Thi B".to_string(),
                department_name: "Khoa A".to_string(),
            },
        ]
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let found = filter_roster(&khoa_a(), "van a");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "E1");
    }

    #[test]
    fn search_matches_the_staff_id_too() {
        let found = filter_roster(&khoa_a(), "e2");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Tran Thi B");
    }

    #[test]
    fn empty_query_keeps_the_whole_roster() {
        assert_eq!(filter_roster(&khoa_a(), "").len(), 2);
    }

    #[test]
    fn empty_selection_clears_the_dependent_list_without_a_fetch() {
        assert_eq!(refresh_for(""), Refresh::Clear);
    }

    #[test]
    fn non_empty_selection_refetches_under_its_own_key() {
        assert_eq!(refresh_for("Khoa A"), Refresh::Fetch("Khoa A"));
        assert_eq!(refresh_for("01"), Refresh::Fetch("01"));
    }
}
