pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_import_tables;
mod m20250601_000002_create_medals_tables;
mod m20250601_000003_create_donors_overview;
mod m20250601_000004_create_override_ignore_note;
mod m20250601_000005_create_contact_import_log;
mod m20250601_000006_fill_lists;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_import_tables::Migration),
            Box::new(m20250601_000002_create_medals_tables::Migration),
            Box::new(m20250601_000003_create_donors_overview::Migration),
            Box::new(m20250601_000004_create_override_ignore_note::Migration),
            Box::new(m20250601_000005_create_contact_import_log::Migration),
            Box::new(m20250601_000006_fill_lists::Migration),
        ]
    }
}
