use migration::{Migrator, MigratorTrait};
use tracing::info;

use crate::commands::connect;
use crate::domain::errors::RegistryError;

/// Execute the migrate command
pub async fn execute(steps: Option<u32>) -> Result<(), RegistryError> {
    let (pool, _repos) = connect().await?;
    let conn = pool.get_connection();

    match steps {
        Some(n) => {
            info!("Running {} migrations", n);
            Migrator::up(conn, Some(n)).await?;
        }
        None => {
            info!("Running all pending migrations");
            Migrator::up(conn, None).await?;
        }
    }

    info!("Migrations finished");
    Ok(())
}

/// Drop everything and run all migrations again
pub async fn reset() -> Result<(), RegistryError> {
    let (pool, _repos) = connect().await?;
    let conn = pool.get_connection();

    info!("Resetting database");
    Migrator::fresh(conn).await?;

    info!("Database reset finished");
    Ok(())
}

/// Show migration status
pub async fn status() -> Result<(), RegistryError> {
    let (pool, _repos) = connect().await?;
    let conn = pool.get_connection();

    Migrator::status(conn).await?;
    Ok(())
}
