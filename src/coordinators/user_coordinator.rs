use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::app_data::AppData;
use crate::config::database::DatabaseConnections;
use crate::errors::InternalError;
use crate::errors::internal::UserError;
use crate::stores::{ImageStorage, UserStore};
use crate::types::dto::user::UserRecord;
use crate::types::internal::options::{UserStatus, normalize_teams};
use crate::types::internal::user::{CreateUserInput, ImageUpload, NewUser, UpdateUserInput, UserPatch};

const MISSING_FIELDS: &str = "All fields are required.";
const INVALID_ID: &str = "Invalid user ID.";

/// Handles the lifecycle of directory records: list, create, edit, delete
pub struct UserCoordinator {
    connections: DatabaseConnections,
    user_store: Arc<UserStore>,
    image_storage: Arc<dyn ImageStorage>,
}

impl UserCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            connections: app_data.connections.clone(),
            user_store: Arc::clone(&app_data.user_store),
            image_storage: Arc::clone(&app_data.image_storage),
        }
    }

    /// Every record, unpaginated
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, InternalError> {
        let users = self.user_store.list(&self.connections.directory).await?;

        users.into_iter().map(UserRecord::try_from).collect()
    }

    /// Validate, check email uniqueness, store the picture, insert
    ///
    /// The uniqueness check and the insert share one transaction; the unique
    /// index on email catches anything that slips between them.
    pub async fn create_user(&self, input: CreateUserInput) -> Result<UserRecord, InternalError> {
        let (mut new_user, image) = validate_create(input)?;

        let txn = self.connections.begin_transaction().await?;

        if self.user_store.find_by_email(&txn, &new_user.email).await?.is_some() {
            return Err(UserError::DuplicateEmail { email: new_user.email }.into());
        }

        if let Some(image) = image {
            new_user.profile_pic = Some(self.image_storage.store(image).await?);
        }
        let stored_image = new_user.profile_pic.clone();

        let created = match async {
            let created = self.user_store.insert(&txn, new_user).await?;
            DatabaseConnections::commit_transaction(txn).await?;
            Ok::<_, InternalError>(created)
        }
        .await
        {
            Ok(created) => created,
            Err(err) => {
                self.discard_image(stored_image.as_deref()).await;
                return Err(err);
            }
        };

        tracing::info!("Created user {}", created.id);

        UserRecord::try_from(created)
    }

    /// Apply the edit subset to an existing record
    pub async fn update_user(&self, input: UpdateUserInput) -> Result<UserRecord, InternalError> {
        let (id, mut patch, image) = validate_update(input)?;

        let txn = self.connections.begin_transaction().await?;

        if self.user_store.find_by_id(&txn, &id).await?.is_none() {
            return Err(UserError::NotFound { user_id: id }.into());
        }

        if let Some(image) = image {
            patch.profile_pic = Some(self.image_storage.store(image).await?);
        }
        let stored_image = patch.profile_pic.clone();

        let updated = match async {
            let updated = self
                .user_store
                .update(&txn, &id, patch)
                .await?
                .ok_or_else(|| UserError::NotFound { user_id: id.clone() })?;
            DatabaseConnections::commit_transaction(txn).await?;
            Ok::<_, InternalError>(updated)
        }
        .await
        {
            Ok(updated) => updated,
            Err(err) => {
                self.discard_image(stored_image.as_deref()).await;
                return Err(err);
            }
        };

        tracing::info!("Updated user {}", updated.id);

        UserRecord::try_from(updated)
    }

    /// Drop a picture stored for a write that did not go through
    async fn discard_image(&self, url: Option<&str>) {
        let Some(url) = url else {
            return;
        };

        if let Err(err) = self.image_storage.discard(url).await {
            tracing::warn!("Failed to discard unused profile picture {}: {}", url, err);
        }
    }

    /// Hard delete
    pub async fn delete_user(&self, id: Option<String>) -> Result<(), InternalError> {
        let id = validate_id(id)?;

        if !self.user_store.delete(&self.connections.directory, &id).await? {
            return Err(UserError::NotFound { user_id: id }.into());
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

/// Trimmed value, `None` when absent or blank
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_id(id: Option<String>) -> Result<String, InternalError> {
    let id = present(id).ok_or_else(|| InternalError::validation(INVALID_ID))?;

    Uuid::parse_str(&id)
        .map(|uuid| uuid.to_string())
        .map_err(|_| InternalError::validation(INVALID_ID))
}

fn validate_status(status: Option<String>) -> Result<UserStatus, InternalError> {
    match present(status) {
        Some(status) => status
            .parse::<UserStatus>()
            .map_err(|_| InternalError::validation(format!("Invalid status: {}", status))),
        None => Ok(UserStatus::default()),
    }
}

fn validate_image(image: Option<ImageUpload>) -> Result<Option<ImageUpload>, InternalError> {
    match &image {
        Some(ImageUpload {
            content_type: Some(content_type),
            ..
        }) if !content_type.starts_with("image/") => {
            Err(InternalError::validation("Profile picture must be an image."))
        }
        _ => Ok(image),
    }
}

fn validate_create(input: CreateUserInput) -> Result<(NewUser, Option<ImageUpload>), InternalError> {
    let teams = normalize_teams(&input.teams);

    let (Some(name), Some(email), Some(work_email), Some(gender), Some(nationality), Some(contact), Some(role)) = (
        present(input.name),
        present(input.email),
        present(input.work_email),
        present(input.gender),
        present(input.nationality),
        present(input.contact),
        present(input.role),
    ) else {
        return Err(InternalError::validation(MISSING_FIELDS));
    };

    if teams.is_empty() {
        return Err(InternalError::validation(MISSING_FIELDS));
    }

    let contact = contact
        .parse::<i64>()
        .map_err(|_| InternalError::validation("Contact must be a number."))?;

    let status = validate_status(input.status)?;

    let date_of_birth = present(input.date_of_birth)
        .map(|value| NaiveDate::parse_from_str(&value, "%Y-%m-%d"))
        .transpose()
        .map_err(|_| InternalError::validation("Date of birth must be formatted as YYYY-MM-DD."))?;

    let image = validate_image(input.image)?;

    let new_user = NewUser {
        name,
        email,
        work_email,
        gender,
        nationality,
        contact,
        role,
        teams,
        status: status.to_string(),
        date_of_birth,
        profile_pic: None,
    };

    Ok((new_user, image))
}

fn validate_update(
    input: UpdateUserInput,
) -> Result<(String, UserPatch, Option<ImageUpload>), InternalError> {
    let id = validate_id(input.id)?;
    let teams = normalize_teams(&input.teams);

    let (Some(name), Some(email), Some(role), Some(status)) = (
        present(input.name),
        present(input.email),
        present(input.role),
        present(input.status),
    ) else {
        return Err(InternalError::validation(MISSING_FIELDS));
    };

    if teams.is_empty() {
        return Err(InternalError::validation(MISSING_FIELDS));
    }

    let status = validate_status(Some(status))?;
    let image = validate_image(input.image)?;

    let patch = UserPatch {
        name,
        email,
        role,
        status: status.to_string(),
        teams,
        profile_pic: None,
    };

    Ok((id, patch, image))
}

#[cfg(test)]
#[path = "user_coordinator_tests.rs"]
mod user_coordinator_tests;
