use sea_orm::DatabaseConnection;

use crate::infrastructure::persistence::repositories::{
    AwardedMedalRepository, BatchRepository, ContactImportLogRepository,
    DonationCenterRepository, IgnoredDonorRepository, MedalRepository, NoteRepository,
    OverrideRepository, OverviewRepository, RecordRepository, Repositories,
};

/// Factory for creating repositories
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create all repositories over one shared connection
    pub fn create_repositories(conn: &DatabaseConnection) -> Repositories {
        Repositories {
            awarded_medal: AwardedMedalRepository::new(conn.clone()),
            batch: BatchRepository::new(conn.clone()),
            contact_import_log: ContactImportLogRepository::new(conn.clone()),
            donation_center: DonationCenterRepository::new(conn.clone()),
            ignored_donor: IgnoredDonorRepository::new(conn.clone()),
            medal: MedalRepository::new(conn.clone()),
            note: NoteRepository::new(conn.clone()),
            overview: OverviewRepository::new(conn.clone()),
            override_: OverrideRepository::new(conn.clone()),
            record: RecordRepository::new(conn.clone()),
        }
    }
}
