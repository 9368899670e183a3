#[cfg(test)]
mod tests {
    use crate::errors::internal::{DatabaseError, InternalError, UserError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_includes_operation() {
        let db_err = DbErr::RecordNotFound("test record".to_string());
        let error = InternalError::database("insert_user", db_err);

        let error_string = error.to_string();
        assert!(error_string.contains("insert_user"));
        assert!(error_string.contains("Database error"));
    }

    #[test]
    fn test_transaction_commit_error_message() {
        let error = InternalError::Database(DatabaseError::TransactionCommit {
            source: DbErr::Custom("locked".to_string()),
        });

        assert!(error.to_string().contains("Committing transaction failed"));
    }

    #[test]
    fn test_parse_error_includes_value_type() {
        let error = InternalError::parse("contact", "invalid digit found in string");

        let error_string = error.to_string();
        assert!(error_string.contains("contact"));
        assert!(error_string.contains("invalid digit"));
        assert!(error_string.contains("Parse error"));
    }

    #[test]
    fn test_validation_shorthand_builds_user_error() {
        let error = InternalError::validation("Invalid user ID.");

        match error {
            InternalError::User(UserError::Validation { message }) => {
                assert_eq!(message, "Invalid user ID.");
            }
            other => panic!("Expected validation error, got: {:?}", other),
        }
    }

    #[test]
    fn test_user_error_messages() {
        let duplicate = UserError::DuplicateEmail {
            email: "a@x.com".to_string(),
        };
        assert_eq!(duplicate.to_string(), "User already exists: a@x.com");

        let missing = UserError::NotFound {
            user_id: "abc".to_string(),
        };
        assert_eq!(missing.to_string(), "User ID not found: abc");
    }
}
