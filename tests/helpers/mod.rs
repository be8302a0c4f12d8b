//! Shared setup for integration tests: a fresh in-memory SQLite database
//! with all migrations applied, including the seeded reference data.

use chrono::NaiveDateTime;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use donor_registry::infrastructure::persistence::{Repositories, RepositoryFactory};

pub async fn setup() -> (DatabaseConnection, Repositories) {
    // A single pooled connection, or every pool member would get its own
    // private in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).sqlx_logging(false);

    let conn = Database::connect(options)
        .await
        .expect("in-memory database should connect");
    Migrator::up(&conn, None)
        .await
        .expect("migrations should apply");
    let repos = RepositoryFactory::create_repositories(&conn);
    (conn, repos)
}

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 3, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}

/// A well-formed import line for one donor.
pub fn import_line(rodne_cislo: &str, first_name: &str, last_name: &str, count: i32) -> String {
    format!("{rodne_cislo};{first_name};{last_name};DLOUHÁ 1;PRAHA;11000;111;{count}")
}
