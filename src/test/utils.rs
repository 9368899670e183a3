// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::app_data::AppData;
use crate::config::database::DatabaseConnections;
use crate::errors::InternalError;
use crate::stores::ImageStorage;
use crate::types::dto::user::UserRecord;
use crate::types::internal::user::{ImageUpload, NewUser};

/// Creates an in-memory directory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates AppData backed by an in-memory database and a recording image storage
///
/// Callers can discard what they don't need:
/// ```rust
/// let (app_data, _images) = setup_test_app_data().await;
/// ```
pub async fn setup_test_app_data() -> (Arc<AppData>, Arc<RecordingImageStorage>) {
    let db = setup_test_db().await;
    let images = Arc::new(RecordingImageStorage::default());

    let app_data = AppData::new(
        DatabaseConnections { directory: db },
        images.clone(),
    );

    (Arc::new(app_data), images)
}

/// A valid record with fixed details apart from name, email and teams
pub fn new_user(name: &str, email: &str, teams: &[&str]) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        work_email: format!("work.{}", email),
        gender: "Female".to_string(),
        nationality: "British".to_string(),
        contact: 5550100,
        role: "Developer".to_string(),
        teams: teams.iter().map(|t| t.to_string()).collect(),
        status: "Active".to_string(),
        date_of_birth: None,
        profile_pic: None,
    }
}

/// A small PNG-typed upload
pub fn png_upload() -> ImageUpload {
    ImageUpload {
        file_name: Some("avatar.png".to_string()),
        content_type: Some("image/png".to_string()),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

/// Image storage that keeps uploads in memory and hands out predictable URLs
#[derive(Default)]
pub struct RecordingImageStorage {
    stored: Mutex<Vec<ImageUpload>>,
    discarded: Mutex<Vec<String>>,
}

impl RecordingImageStorage {
    pub fn stored_count(&self) -> usize {
        self.stored.lock().unwrap().len()
    }

    pub fn discarded(&self) -> Vec<String> {
        self.discarded.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStorage for RecordingImageStorage {
    async fn store(&self, image: ImageUpload) -> Result<String, InternalError> {
        let mut stored = self.stored.lock().unwrap();
        stored.push(image);
        Ok(format!("http://test.local/uploads/image-{}.png", stored.len()))
    }

    async fn discard(&self, url: &str) -> Result<(), InternalError> {
        self.discarded.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// A wire record with fixed details apart from the fields the view model filters on
pub fn user_record(name: &str, email: &str, role: &str, teams: &[&str]) -> UserRecord {
    UserRecord {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        work_email: format!("{}@corp.example", name.to_lowercase()),
        gender: "Other".to_string(),
        nationality: "Canadian".to_string(),
        contact: 4165550100,
        role: role.to_string(),
        teams: teams.iter().map(|t| t.to_string()).collect(),
        status: "Active".to_string(),
        date_of_birth: None,
        profile_pic: None,
    }
}
