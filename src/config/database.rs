use sea_orm::{Database, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use migration::{Migrator, MigratorTrait};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Database connection owned by main and shared through AppData
#[derive(Clone)]
pub struct DatabaseConnections {
    pub directory: DatabaseConnection,
}

impl DatabaseConnections {
    /// Connect to the directory database
    ///
    /// Does NOT run migrations - call migrate() separately.
    pub async fn init(bootstrap_settings: &BootstrapSettings) -> Result<Self, InternalError> {
        Self::connect(bootstrap_settings.database_url()).await
    }

    pub async fn connect(database_url: &str) -> Result<Self, InternalError> {
        let directory = Database::connect(database_url)
            .await
            .map_err(|e| InternalError::database("connect_database", e))?;

        tracing::debug!("Connected to directory database: {}", database_url);

        Ok(Self { directory })
    }

    pub async fn migrate(&self) -> Result<(), InternalError> {
        Migrator::up(&self.directory, None)
            .await
            .map_err(|e| InternalError::database("run_migrations", e))?;

        tracing::debug!("Directory database migrations completed");

        Ok(())
    }

    pub async fn begin_transaction(&self) -> Result<DatabaseTransaction, InternalError> {
        self.directory
            .begin()
            .await
            .map_err(|source| InternalError::Database(DatabaseError::TransactionBegin { source }))
    }

    pub async fn commit_transaction(txn: DatabaseTransaction) -> Result<(), InternalError> {
        txn.commit()
            .await
            .map_err(|source| InternalError::Database(DatabaseError::TransactionCommit { source }))
    }
}
