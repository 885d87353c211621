use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::model::{Employee, Gender};

// ---------------------------------------------------------------------------
// Roster – immutable snapshot + read-only queries
// ---------------------------------------------------------------------------

/// An immutable snapshot of loaded employees with derived read-only views.
///
/// Built once from the loader's output and never mutated, so it is safe to
/// share between any number of concurrent readers. All queries are plain
/// scans; the snapshot is small and fully buffered.
#[derive(Debug, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Take ownership of a record sequence, in load order.
    pub fn new(employees: Vec<Employee>) -> Self {
        Roster { employees }
    }

    /// The full snapshot, in load order.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of employees in the snapshot.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// First employee with the given id, if any.
    ///
    /// Ids are expected to be unique but this is not enforced; with
    /// duplicates the first match in load order wins.
    pub fn find_by_id(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// All employees of the given gender, load order preserved.
    pub fn by_gender(&self, gender: Gender) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.gender == gender)
            .collect()
    }

    /// Partition the snapshot by division name.
    ///
    /// Groups are keyed by name in sorted order; members keep load order.
    pub fn group_by_division(&self) -> BTreeMap<&str, Vec<&Employee>> {
        let mut groups: BTreeMap<&str, Vec<&Employee>> = BTreeMap::new();
        for e in &self.employees {
            groups.entry(&e.division.name).or_default().push(e);
        }
        groups
    }

    /// Headcount per division name.
    pub fn count_by_division(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for e in &self.employees {
            *counts.entry(&e.division.name).or_default() += 1;
        }
        counts
    }

    /// Arithmetic mean of all salaries, or 0.0 for an empty snapshot.
    pub fn average_salary(&self) -> f64 {
        if self.employees.is_empty() {
            return 0.0;
        }
        let total: i64 = self.employees.iter().map(|e| e.salary).sum();
        total as f64 / self.employees.len() as f64
    }

    /// Employee with the earliest birth date, or `None` if empty.
    /// Ties go to the first match in load order.
    pub fn oldest(&self) -> Option<&Employee> {
        self.employees.iter().min_by_key(|e| e.birth_date)
    }

    /// Employee with the latest birth date, or `None` if empty.
    /// Ties go to the first match in load order.
    pub fn youngest(&self) -> Option<&Employee> {
        // min_by_key keeps the first of equal keys, max_by_key the last;
        // Reverse keeps the first-encountered tie-break for both extremes.
        self.employees.iter().min_by_key(|e| Reverse(e.birth_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Division;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Five-person fixture: three men, two women, two divisions.
    fn fixture() -> Roster {
        let division_a = Arc::new(Division::new("Division A"));
        let division_b = Arc::new(Division::new("Division B"));
        let make = |id, name: &str, gender, birth_date, division: &Arc<Division>, salary| Employee {
            id,
            name: name.to_string(),
            gender,
            birth_date,
            division: Arc::clone(division),
            salary,
        };
        Roster::new(vec![
            make(1, "Ozzy Osbourne", Gender::Male, date(1948, 12, 3), &division_a, 50000),
            make(2, "Lady Gaga", Gender::Female, date(1986, 3, 28), &division_a, 60000),
            make(3, "Hans Rudolf Giger", Gender::Male, date(1940, 2, 5), &division_b, 55000),
            make(4, "Madonna", Gender::Female, date(1958, 8, 16), &division_b, 70000),
            make(5, "Alfredo James Pacino", Gender::Male, date(1940, 4, 25), &division_a, 45000),
        ])
    }

    #[test]
    fn all_returns_the_full_snapshot_in_order() {
        let roster = fixture();
        assert_eq!(roster.len(), 5);
        let ids: Vec<i64> = roster.all().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn find_by_id_returns_the_matching_record() {
        let roster = fixture();
        let found = roster.find_by_id(2).unwrap();
        assert_eq!(found.name, "Lady Gaga");
        assert_eq!(found.gender, Gender::Female);
    }

    #[test]
    fn find_by_id_returns_none_for_unknown_id() {
        assert!(fixture().find_by_id(999).is_none());
    }

    #[test]
    fn by_gender_partitions_the_snapshot() {
        let roster = fixture();
        let males = roster.by_gender(Gender::Male);
        let females = roster.by_gender(Gender::Female);
        assert_eq!(males.len(), 3);
        assert_eq!(females.len(), 2);
        assert_eq!(males.len() + females.len(), roster.len());
        // Load order preserved within each partition.
        let male_ids: Vec<i64> = males.iter().map(|e| e.id).collect();
        assert_eq!(male_ids, vec![1, 3, 5]);
    }

    #[test]
    fn group_by_division_keeps_load_order_within_groups() {
        let roster = fixture();
        let groups = roster.group_by_division();
        assert_eq!(groups.len(), 2);
        let a: Vec<i64> = groups["Division A"].iter().map(|e| e.id).collect();
        let b: Vec<i64> = groups["Division B"].iter().map(|e| e.id).collect();
        assert_eq!(a, vec![1, 2, 5]);
        assert_eq!(b, vec![3, 4]);
    }

    #[test]
    fn count_by_division_matches_group_sizes() {
        let roster = fixture();
        let counts = roster.count_by_division();
        assert_eq!(counts["Division A"], 3);
        assert_eq!(counts["Division B"], 2);
    }

    #[test]
    fn average_salary_is_the_arithmetic_mean() {
        // (50000 + 60000 + 55000 + 70000 + 45000) / 5 = 56000
        assert_eq!(fixture().average_salary(), 56000.0);
    }

    #[test]
    fn oldest_has_the_earliest_birth_date() {
        let roster = fixture();
        let oldest = roster.oldest().unwrap();
        assert_eq!(oldest.id, 3);
        assert_eq!(oldest.name, "Hans Rudolf Giger");
    }

    #[test]
    fn youngest_has_the_latest_birth_date() {
        let roster = fixture();
        let youngest = roster.youngest().unwrap();
        assert_eq!(youngest.id, 2);
        assert_eq!(youngest.name, "Lady Gaga");
    }

    #[test]
    fn birth_date_ties_go_to_the_first_in_load_order() {
        let division = Arc::new(Division::new("X"));
        let twin = |id, name: &str| Employee {
            id,
            name: name.to_string(),
            gender: Gender::Female,
            birth_date: date(1970, 6, 1),
            division: Arc::clone(&division),
            salary: 100,
        };
        let roster = Roster::new(vec![twin(1, "First"), twin(2, "Second")]);
        assert_eq!(roster.oldest().unwrap().id, 1);
        assert_eq!(roster.youngest().unwrap().id, 1);
    }

    #[test]
    fn empty_snapshot_uses_zero_and_none_sentinels() {
        let empty = Roster::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.all().is_empty());
        assert_eq!(empty.average_salary(), 0.0);
        assert!(empty.oldest().is_none());
        assert!(empty.youngest().is_none());
        assert!(empty.group_by_division().is_empty());
        assert!(empty.count_by_division().is_empty());
    }
}
