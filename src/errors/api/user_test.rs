#[cfg(test)]
mod tests {
    use crate::errors::UserApiError;
    use crate::errors::internal::{InternalError, StorageError, UserError};
    use sea_orm::DbErr;
    use std::path::PathBuf;

    #[test]
    fn test_database_error_converts_to_internal_server_error() {
        let db_err = DbErr::RecordNotFound("test".to_string());
        let internal_err = InternalError::database("list_users", db_err);
        let api_err = UserApiError::from_internal_error(internal_err);

        assert_eq!(api_err.message(), "Internal server error.");
        assert_eq!(api_err.status_code(), 500);
    }

    #[test]
    fn test_database_error_does_not_leak_details() {
        let db_err = DbErr::Custom("disk I/O error at /var/lib/people.db".to_string());
        let api_err = UserApiError::from_internal_error(InternalError::database("insert_user", db_err));

        assert!(!api_err.message().contains("people.db"));
        assert!(!api_err.message().contains("insert_user"));
    }

    #[test]
    fn test_parse_error_converts_to_internal_server_error() {
        let internal_err = InternalError::parse("teams", "expected value at line 1");
        let api_err = UserApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 500);
    }

    #[test]
    fn test_storage_error_converts_to_internal_server_error() {
        let internal_err = InternalError::Storage(StorageError::Write {
            path: PathBuf::from("uploads/x.png"),
            source: std::io::Error::other("disk full"),
        });
        let api_err = UserApiError::from_internal_error(internal_err);

        assert_eq!(api_err.message(), "Internal server error.");
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let internal_err = InternalError::validation("All fields are required.");
        let api_err = UserApiError::from_internal_error(internal_err);

        assert!(matches!(api_err, UserApiError::ValidationFailed(_)));
        assert_eq!(api_err.message(), "All fields are required.");
        assert_eq!(api_err.status_code(), 400);
    }

    #[test]
    fn test_duplicate_email_converts_to_bad_request() {
        let internal_err = InternalError::User(UserError::DuplicateEmail {
            email: "a@x.com".to_string(),
        });
        let api_err = UserApiError::from_internal_error(internal_err);

        assert!(matches!(api_err, UserApiError::DuplicateEmail(_)));
        assert_eq!(api_err.message(), "User with this email already exists.");
        assert_eq!(api_err.status_code(), 400);
    }

    #[test]
    fn test_not_found_converts_to_404() {
        let internal_err = InternalError::User(UserError::NotFound {
            user_id: "0f8fad5b-d9cb-469f-a165-70867728950e".to_string(),
        });
        let api_err = UserApiError::from_internal_error(internal_err);

        assert!(matches!(api_err, UserApiError::NotFound(_)));
        assert_eq!(api_err.message(), "User not found.");
        assert_eq!(api_err.status_code(), 404);
    }

    #[test]
    fn test_display_uses_message() {
        let api_err = UserApiError::not_found();
        assert_eq!(api_err.to_string(), "User not found.");
    }
}
