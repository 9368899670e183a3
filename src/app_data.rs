use std::sync::Arc;

use crate::config::BootstrapSettings;
use crate::config::database::DatabaseConnections;
use crate::errors::InternalError;
use crate::stores::{ImageStorage, LocalImageStorage, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ├─ connections (DatabaseConnections)
///   ├─ user_store (Arc<UserStore>)
///   └─ image_storage (Arc<dyn ImageStorage>)
///   ↓ wrapped in Arc<AppData>
///   └─ UserCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub connections: DatabaseConnections,
    pub user_store: Arc<UserStore>,
    pub image_storage: Arc<dyn ImageStorage>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// Database connections should be initialized and migrated before calling this.
    pub async fn init(
        connections: DatabaseConnections,
        settings: &BootstrapSettings,
    ) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let image_storage: Arc<dyn ImageStorage> = Arc::new(LocalImageStorage::new(
            settings.upload_dir(),
            settings.public_base_url(),
        ));

        let app_data = Self::new(connections, image_storage);

        tracing::info!("AppData initialization complete");

        Ok(app_data)
    }

    /// Assemble AppData from already-built collaborators
    pub fn new(connections: DatabaseConnections, image_storage: Arc<dyn ImageStorage>) -> Self {
        Self {
            connections,
            user_store: Arc::new(UserStore::new()),
            image_storage,
        }
    }
}
