// Common test utilities for integration tests
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use people_directory::AppData;
use people_directory::api;
use people_directory::config::database::DatabaseConnections;
use people_directory::config::{BootstrapSettings, MockEnvironment};
use poem::test::TestClient;
use poem::{Endpoint, Response};
use tempfile::TempDir;

/// Settings pointing at an in-memory database and a scratch upload directory
pub fn test_settings(upload_dir: &Path, public_base_url: &str) -> BootstrapSettings {
    let env = MockEnvironment::empty()
        .with_var("DATABASE_URL", "sqlite::memory:")
        .with_var("UPLOAD_DIR", &upload_dir.to_string_lossy())
        .with_var("PUBLIC_BASE_URL", public_base_url);

    BootstrapSettings::from_env_provider(Arc::new(env)).expect("Failed to load test settings")
}

/// Creates a migrated in-memory directory database
pub async fn setup_test_connections() -> DatabaseConnections {
    let connections = DatabaseConnections::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    connections
        .migrate()
        .await
        .expect("Failed to run migrations");

    connections
}

/// The full HTTP application backed by fresh storage
///
/// The returned TempDir holds uploaded pictures and must outlive the endpoint.
pub async fn setup_test_app(
    public_base_url: &str,
) -> (impl Endpoint<Output = Response> + use<>, TempDir) {
    let upload_dir = TempDir::new().expect("Failed to create upload dir");
    let settings = test_settings(upload_dir.path(), public_base_url);

    let connections = setup_test_connections().await;
    let app_data = AppData::init(connections, &settings)
        .await
        .expect("Failed to initialize AppData");

    (api::routes(Arc::new(app_data), &settings), upload_dir)
}

/// A poem test client over the full application
pub async fn setup_test_client() -> (TestClient<impl Endpoint<Output = Response> + use<>>, TempDir) {
    let (app, upload_dir) = setup_test_app("http://localhost:3088").await;
    (TestClient::new(app), upload_dir)
}
