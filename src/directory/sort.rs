use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::types::dto::user::UserRecord;

/// Columns the directory table can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Email,
    WorkEmail,
    Role,
    Status,
    Gender,
    Nationality,
    Teams,
    Contact,
}

impl SortColumn {
    pub const ALL: [SortColumn; 9] = [
        SortColumn::Name,
        SortColumn::Email,
        SortColumn::WorkEmail,
        SortColumn::Role,
        SortColumn::Status,
        SortColumn::Gender,
        SortColumn::Nationality,
        SortColumn::Teams,
        SortColumn::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Email => "email",
            SortColumn::WorkEmail => "work-email",
            SortColumn::Role => "role",
            SortColumn::Status => "status",
            SortColumn::Gender => "gender",
            SortColumn::Nationality => "nationality",
            SortColumn::Teams => "teams",
            SortColumn::Contact => "contact",
        }
    }

    fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        match self {
            SortColumn::Name => compare_text(&a.name, &b.name),
            SortColumn::Email => compare_text(&a.email, &b.email),
            SortColumn::WorkEmail => compare_text(&a.work_email, &b.work_email),
            SortColumn::Role => compare_text(&a.role, &b.role),
            SortColumn::Status => compare_text(&a.status, &b.status),
            SortColumn::Gender => compare_text(&a.gender, &b.gender),
            SortColumn::Nationality => compare_text(&a.nationality, &b.nationality),
            SortColumn::Teams => compare_text(&a.teams.join(", "), &b.teams.join(", ")),
            SortColumn::Contact => a.contact.cmp(&b.contact),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == wanted)
            .ok_or_else(|| format!("unknown sort column '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort column and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// Result of clicking `column`: the same column flips direction,
    /// another column starts ascending
    pub fn toggled(current: Option<SortState>, column: SortColumn) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column,
                direction: state.direction.reversed(),
            },
            _ => SortState::ascending(column),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable sort; `None` keeps source order
pub fn sort_records(records: &mut [&UserRecord], sort: Option<SortState>) {
    let Some(state) = sort else {
        return;
    };

    records.sort_by(|a, b| {
        let ordering = state.column.compare(a, b);
        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::user_record;

    fn names(records: &[&UserRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let first = SortState::toggled(None, SortColumn::Name);
        assert_eq!(first, SortState::ascending(SortColumn::Name));

        let second = SortState::toggled(Some(first), SortColumn::Name);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortState::toggled(Some(second), SortColumn::Name);
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_other_column_starts_ascending() {
        let descending = SortState {
            column: SortColumn::Name,
            direction: SortDirection::Descending,
        };

        let next = SortState::toggled(Some(descending), SortColumn::Email);
        assert_eq!(next, SortState::ascending(SortColumn::Email));
    }

    #[test]
    fn test_sort_is_case_insensitive_and_reversible() {
        let a = user_record("bob", "1@x.com", "R", &[]);
        let b = user_record("Alice", "2@x.com", "R", &[]);
        let c = user_record("carol", "3@x.com", "R", &[]);
        let mut rows = vec![&a, &b, &c];

        sort_records(&mut rows, Some(SortState::ascending(SortColumn::Name)));
        assert_eq!(names(&rows), vec!["Alice", "bob", "carol"]);

        sort_records(
            &mut rows,
            Some(SortState {
                column: SortColumn::Name,
                direction: SortDirection::Descending,
            }),
        );
        assert_eq!(names(&rows), vec!["carol", "bob", "Alice"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let a = user_record("A", "a@x.com", "Designer", &[]);
        let b = user_record("B", "b@x.com", "Engineer", &[]);
        let c = user_record("C", "c@x.com", "Designer", &[]);
        let mut rows = vec![&a, &b, &c];

        sort_records(&mut rows, Some(SortState::ascending(SortColumn::Role)));
        assert_eq!(names(&rows), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_no_sort_keeps_source_order() {
        let a = user_record("Z", "z@x.com", "R", &[]);
        let b = user_record("A", "a@x.com", "R", &[]);
        let mut rows = vec![&a, &b];

        sort_records(&mut rows, None);
        assert_eq!(names(&rows), vec!["Z", "A"]);
    }

    #[test]
    fn test_contact_sorts_numerically() {
        let mut a = user_record("A", "a@x.com", "R", &[]);
        let mut b = user_record("B", "b@x.com", "R", &[]);
        a.contact = 10_000_000_000;
        b.contact = 9_000_000_000;
        let mut rows = vec![&a, &b];

        sort_records(&mut rows, Some(SortState::ascending(SortColumn::Contact)));
        assert_eq!(names(&rows), vec!["B", "A"]);
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("work_email".parse::<SortColumn>(), Ok(SortColumn::WorkEmail));
        assert_eq!(" Name ".parse::<SortColumn>(), Ok(SortColumn::Name));
        assert!("salary".parse::<SortColumn>().is_err());
    }
}
