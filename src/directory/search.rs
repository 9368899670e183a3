use crate::types::dto::user::UserRecord;

/// String-valued fields of a record, in display order
fn searchable_fields(record: &UserRecord) -> impl Iterator<Item = &str> {
    [
        Some(record.id.as_str()),
        Some(record.name.as_str()),
        Some(record.email.as_str()),
        Some(record.work_email.as_str()),
        Some(record.gender.as_str()),
        Some(record.nationality.as_str()),
        Some(record.role.as_str()),
        Some(record.status.as_str()),
        record.profile_pic.as_deref(),
    ]
    .into_iter()
    .flatten()
}

/// Whether any string field contains `term`, ignoring case
pub fn matches(record: &UserRecord, term: &str) -> bool {
    let needle = term.to_lowercase();
    searchable_fields(record).any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the records matching `term`; an empty term keeps everything
pub fn search<'a>(records: Vec<&'a UserRecord>, term: &str) -> Vec<&'a UserRecord> {
    if term.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| matches(record, term))
        .collect()
}
