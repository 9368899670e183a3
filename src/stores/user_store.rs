use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set, SqlErr};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::errors::internal::UserError;
use crate::types::db::user::{self, ActiveModel, Entity as User};
use crate::types::internal::user::{NewUser, UserPatch};

/// Persistence for directory records
///
/// Every method takes the connection so callers can run several calls
/// inside one transaction.
#[derive(Debug, Default)]
pub struct UserStore;

impl UserStore {
    pub fn new() -> Self {
        Self
    }

    /// All records, in insertion order
    pub async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<user::Model>, InternalError> {
        User::find()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_users", e))
    }

    pub async fn find_by_email<C: ConnectionTrait>(
        &self,
        conn: &C,
        email: &str,
    ) -> Result<Option<user::Model>, InternalError> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: &str,
    ) -> Result<Option<user::Model>, InternalError> {
        User::find_by_id(id.to_string())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_user_by_id", e))
    }

    /// Insert a new record under a freshly generated id
    ///
    /// A unique violation on the email column is reported as DuplicateEmail.
    pub async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        new_user: NewUser,
    ) -> Result<user::Model, InternalError> {
        let now = Utc::now().timestamp();
        let email = new_user.email.clone();

        let model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(new_user.name),
            email: Set(new_user.email),
            work_email: Set(new_user.work_email),
            gender: Set(new_user.gender),
            nationality: Set(new_user.nationality),
            contact: Set(new_user.contact),
            role: Set(new_user.role),
            teams: Set(encode_teams(&new_user.teams)?),
            status: Set(new_user.status),
            date_of_birth: Set(new_user.date_of_birth),
            profile_pic: Set(new_user.profile_pic),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(conn)
            .await
            .map_err(|e| map_write_error("insert_user", &email, e))
    }

    /// Apply an edit to an existing record
    ///
    /// Returns `None` when no record has the id.
    pub async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: &str,
        patch: UserPatch,
    ) -> Result<Option<user::Model>, InternalError> {
        let Some(existing) = self.find_by_id(conn, id).await? else {
            return Ok(None);
        };

        let email = patch.email.clone();
        let mut model: ActiveModel = existing.into();
        model.name = Set(patch.name);
        model.email = Set(patch.email);
        model.role = Set(patch.role);
        model.status = Set(patch.status);
        model.teams = Set(encode_teams(&patch.teams)?);
        if let Some(profile_pic) = patch.profile_pic {
            model.profile_pic = Set(Some(profile_pic));
        }
        model.updated_at = Set(Utc::now().timestamp());

        let updated = model
            .update(conn)
            .await
            .map_err(|e| map_write_error("update_user", &email, e))?;

        Ok(Some(updated))
    }

    /// Hard delete; returns whether a record was removed
    pub async fn delete<C: ConnectionTrait>(&self, conn: &C, id: &str) -> Result<bool, InternalError> {
        let result = User::delete_by_id(id.to_string())
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_user", e))?;

        Ok(result.rows_affected > 0)
    }
}

fn encode_teams(teams: &[String]) -> Result<String, InternalError> {
    serde_json::to_string(teams).map_err(|e| InternalError::parse("teams", e.to_string()))
}

fn map_write_error(operation: &str, email: &str, err: sea_orm::DbErr) -> InternalError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::DuplicateEmail {
            email: email.to_string(),
        }
        .into(),
        _ => InternalError::database(operation, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{new_user, setup_test_db};

    #[tokio::test]
    async fn test_insert_assigns_id_and_round_trips_teams() {
        let db = setup_test_db().await;
        let store = UserStore::new();

        let model = store
            .insert(&db, new_user("Ada", "ada@example.com", &["Technology", "Design"]))
            .await
            .unwrap();

        assert!(Uuid::parse_str(&model.id).is_ok());
        assert_eq!(model.teams, r#"["Technology","Design"]"#);
        assert_eq!(model.created_at, model.updated_at);
    }

    #[tokio::test]
    async fn test_insert_duplicate_email_is_rejected_by_constraint() {
        let db = setup_test_db().await;
        let store = UserStore::new();

        store.insert(&db, new_user("Ada", "ada@example.com", &["Product"])).await.unwrap();
        let result = store.insert(&db, new_user("Other", "ada@example.com", &["Product"])).await;

        match result {
            Err(InternalError::User(UserError::DuplicateEmail { email })) => {
                assert_eq!(email, "ada@example.com");
            }
            other => panic!("Expected DuplicateEmail, got: {:?}", other),
        }
        assert_eq!(store.list(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_returns_every_record_in_insertion_order() {
        let db = setup_test_db().await;
        let store = UserStore::new();

        for (name, email) in [("A", "a@x.com"), ("B", "b@x.com"), ("C", "c@x.com")] {
            store.insert(&db, new_user(name, email, &["Design"])).await.unwrap();
        }

        let names: Vec<String> = store.list(&db).await.unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_find_by_email_and_id() {
        let db = setup_test_db().await;
        let store = UserStore::new();
        let created = store.insert(&db, new_user("Ada", "ada@example.com", &["Product"])).await.unwrap();

        let by_email = store.find_by_email(&db, "ada@example.com").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(created.id.clone()));

        let by_id = store.find_by_id(&db, &created.id).await.unwrap();
        assert_eq!(by_id.map(|u| u.email), Some("ada@example.com".to_string()));

        assert!(store.find_by_email(&db, "nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_changes_only_patched_fields() {
        let db = setup_test_db().await;
        let store = UserStore::new();
        let created = store.insert(&db, new_user("Ada", "ada@example.com", &["Product"])).await.unwrap();

        let patch = UserPatch {
            name: "Ada L.".to_string(),
            email: "ada@example.com".to_string(),
            role: "Product Manager".to_string(),
            status: "Inactive".to_string(),
            teams: vec!["Marketing".to_string()],
            profile_pic: None,
        };
        let updated = store.update(&db, &created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.name, "Ada L.");
        assert_eq!(updated.status, "Inactive");
        assert_eq!(updated.teams, r#"["Marketing"]"#);
        assert_eq!(updated.work_email, created.work_email);
        assert_eq!(updated.contact, created.contact);
        assert_eq!(updated.profile_pic, created.profile_pic);
    }

    #[tokio::test]
    async fn test_update_missing_record_returns_none() {
        let db = setup_test_db().await;
        let store = UserStore::new();

        let patch = UserPatch {
            name: "Ghost".to_string(),
            email: "ghost@example.com".to_string(),
            role: "Product Manager".to_string(),
            status: "Active".to_string(),
            teams: vec![],
            profile_pic: None,
        };

        let result = store.update(&db, &Uuid::new_v4().to_string(), patch).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_was_removed() {
        let db = setup_test_db().await;
        let store = UserStore::new();
        let created = store.insert(&db, new_user("Ada", "ada@example.com", &["Product"])).await.unwrap();

        assert!(store.delete(&db, &created.id).await.unwrap());
        assert!(!store.delete(&db, &created.id).await.unwrap());
        assert!(store.list(&db).await.unwrap().is_empty());
    }
}
