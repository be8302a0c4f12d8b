pub mod donors;
pub mod export;
pub mod imports;
pub mod medals;
pub mod migrate;
pub mod overview;

use crate::config::AppConfig;
use crate::domain::errors::RegistryError;
use crate::infrastructure::persistence::{DbPool, Repositories, RepositoryFactory};

/// Connects using the environment configuration and builds the repositories.
pub async fn connect() -> Result<(DbPool, Repositories), RegistryError> {
    let config = AppConfig::from_env();
    let pool = DbPool::new(&config).await?;
    let repos = RepositoryFactory::create_repositories(pool.get_connection());
    Ok((pool, repos))
}
