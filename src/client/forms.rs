use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::types::dto::user::UserRecord;
use crate::types::internal::options::{
    GENDER_OPTIONS, NATIONALITY_OPTIONS, ROLE_OPTIONS, TEAM_OPTIONS, UserStatus,
};

/// Fields collected when adding a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateUserForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(email(message = "Invalid work email address"))]
    pub work_email: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[validate(custom(function = "validate_nationality"))]
    pub nationality: String,

    /// Anything below ten digits is not taken for a phone number
    #[validate(range(min = 1_000_000_000, message = "Invalid contact number"))]
    pub contact: i64,

    #[validate(custom(function = "validate_role"))]
    pub role: String,

    #[validate(
        length(min = 1, message = "At least one team must be selected"),
        custom(function = "validate_teams")
    )]
    pub teams: Vec<String>,

    /// Server default (Active) applies when absent
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,

    pub date_of_birth: Option<NaiveDate>,
}

/// Fields collected when editing a user
///
/// Teams have no minimum here; the server still refuses an empty set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EditUserForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_role"))]
    pub role: String,

    #[validate(custom(function = "validate_status"))]
    pub status: String,

    #[validate(custom(function = "validate_teams"))]
    pub teams: Vec<String>,
}

impl EditUserForm {
    /// Pre-filled from the record being edited
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
            status: record.status.clone(),
            teams: record.teams.clone(),
        }
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn one_of(value: &str, options: &[&str], code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if options.contains(&value) {
        Ok(())
    } else {
        Err(invalid(code, message))
    }
}

fn validate_gender(gender: &str) -> Result<(), ValidationError> {
    one_of(gender, &GENDER_OPTIONS, "gender", "Gender is required")
}

fn validate_nationality(nationality: &str) -> Result<(), ValidationError> {
    one_of(nationality, &NATIONALITY_OPTIONS, "nationality", "Nationality is required")
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    one_of(role, &ROLE_OPTIONS, "role", "Role is required")
}

fn validate_teams(teams: &[String]) -> Result<(), ValidationError> {
    if teams.iter().all(|team| TEAM_OPTIONS.contains(&team.as_str())) {
        Ok(())
    } else {
        Err(invalid("teams", "Invalid team selection"))
    }
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    status
        .parse::<UserStatus>()
        .map(|_| ())
        .map_err(|_| invalid("status", "Invalid status"))
}

/// Field messages, ordered by field name
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            let messages = errs
                .iter()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
                .collect();
            (field, messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields.into_iter().flat_map(|(_, messages)| messages).collect()
}
