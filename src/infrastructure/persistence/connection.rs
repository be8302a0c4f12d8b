use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::persistence::error::DbError;

/// Manages the database connection pool
pub struct DbPool {
    connection: DatabaseConnection,
}

impl DbPool {
    /// Creates a new database connection pool
    pub async fn new(config: &AppConfig) -> Result<Self, DbError> {
        info!("Connecting to database: {}", config.database.url);

        match Database::connect(&config.database.url).await {
            Ok(connection) => {
                info!("Database connection established");
                Ok(DbPool { connection })
            }
            Err(e) => Err(DbError::Connection(format!(
                "failed to connect to database: {e}"
            ))),
        }
    }

    /// Returns the database connection
    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}
