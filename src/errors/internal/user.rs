use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    /// Missing or malformed field, or malformed identifier
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("User already exists: {email}")]
    DuplicateEmail { email: String },

    #[error("User ID not found: {user_id}")]
    NotFound { user_id: String },
}
