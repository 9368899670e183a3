use std::collections::BTreeSet;

use crate::types::dto::user::UserRecord;

/// Keep records whose role is selected; no selection keeps everything
pub fn filter_by_role<'a>(records: Vec<&'a UserRecord>, roles: &BTreeSet<String>) -> Vec<&'a UserRecord> {
    if roles.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| roles.contains(&record.role))
        .collect()
}

/// Keep records belonging to at least one selected team
pub fn filter_by_team<'a>(records: Vec<&'a UserRecord>, teams: &BTreeSet<String>) -> Vec<&'a UserRecord> {
    if teams.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| record.teams.iter().any(|team| teams.contains(team)))
        .collect()
}
