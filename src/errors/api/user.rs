use crate::errors::internal::{InternalError, UserError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for directory endpoints
#[derive(Object, Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UserErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// User directory error types
#[derive(ApiResponse, Debug)]
pub enum UserApiError {
    /// Missing or malformed field, or malformed user id
    #[oai(status = 400)]
    ValidationFailed(Json<UserErrorResponse>),

    /// Another user already uses the email
    #[oai(status = 400)]
    DuplicateEmail(Json<UserErrorResponse>),

    /// No user with the given id
    #[oai(status = 404)]
    NotFound(Json<UserErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<UserErrorResponse>),
}

impl UserApiError {
    /// Create a ValidationFailed error
    pub fn validation_failed(message: impl Into<String>) -> Self {
        UserApiError::ValidationFailed(Json(UserErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email() -> Self {
        UserApiError::DuplicateEmail(Json(UserErrorResponse {
            error: "duplicate_email".to_string(),
            message: "User with this email already exists.".to_string(),
            status_code: 400,
        }))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        UserApiError::NotFound(Json(UserErrorResponse {
            error: "not_found".to_string(),
            message: "User not found.".to_string(),
            status_code: 404,
        }))
    }

    /// Convert InternalError to UserApiError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::User(UserError::Validation { message }) => {
                tracing::debug!("Validation failed: {}", message);
                Self::validation_failed(message.clone())
            }
            InternalError::User(UserError::DuplicateEmail { email }) => {
                tracing::warn!("Duplicate email attempt: {}", email);
                Self::duplicate_email()
            }
            InternalError::User(UserError::NotFound { user_id }) => {
                tracing::debug!("User not found: {}", user_id);
                Self::not_found()
            }
            InternalError::Database(_) => {
                tracing::error!("Database failure in user operation: {}", err);
                Self::internal_server_error()
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Parse error for {}: {}", value_type, err);
                Self::internal_server_error()
            }
            InternalError::Storage(_) => {
                tracing::error!("Image storage failure: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        UserApiError::InternalError(Json(UserErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error.".to_string(),
            status_code: 500,
        }))
    }

    fn response(&self) -> &UserErrorResponse {
        match self {
            UserApiError::ValidationFailed(json)
            | UserApiError::DuplicateEmail(json)
            | UserApiError::NotFound(json)
            | UserApiError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.response().message.clone()
    }

    pub fn status_code(&self) -> u16 {
        self.response().status_code
    }
}

impl From<InternalError> for UserApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for UserApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
