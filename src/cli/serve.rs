// Serve command: connect, migrate and run the HTTP API

use std::sync::Arc;

use poem::Server;
use poem::listener::TcpListener;

use crate::api;
use crate::app_data::AppData;
use crate::config::BootstrapSettings;
use crate::config::database::DatabaseConnections;

/// Run the directory API until the process is stopped
pub async fn run_server(settings: BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting with {:?}", settings);

    let connections = DatabaseConnections::init(&settings).await?;
    connections.migrate().await?;
    tracing::info!("Connected to database: {}", settings.database_url());

    tokio::fs::create_dir_all(settings.upload_dir()).await?;

    let app_data = Arc::new(AppData::init(connections, &settings).await?);
    let app = api::routes(app_data, &settings);

    let address = settings.server_address();
    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at {}/swagger", settings.public_base_url());

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
