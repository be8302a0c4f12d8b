pub mod awarded_medal_repository;
pub mod batch_repository;
pub mod contact_import_log_repository;
pub mod donation_center_repository;
pub mod ignored_donor_repository;
pub mod medal_repository;
pub mod note_repository;
pub mod override_repository;
pub mod overview_repository;
pub mod record_repository;

pub use awarded_medal_repository::AwardedMedalRepository;
pub use batch_repository::BatchRepository;
pub use contact_import_log_repository::ContactImportLogRepository;
pub use donation_center_repository::DonationCenterRepository;
pub use ignored_donor_repository::IgnoredDonorRepository;
pub use medal_repository::MedalRepository;
pub use note_repository::NoteRepository;
pub use override_repository::OverrideRepository;
pub use overview_repository::OverviewRepository;
pub use record_repository::RecordRepository;

/// Collection of all repositories
#[derive(Clone)]
pub struct Repositories {
    pub awarded_medal: AwardedMedalRepository,
    pub batch: BatchRepository,
    pub contact_import_log: ContactImportLogRepository,
    pub donation_center: DonationCenterRepository,
    pub ignored_donor: IgnoredDonorRepository,
    pub medal: MedalRepository,
    pub note: NoteRepository,
    pub overview: OverviewRepository,
    pub override_: OverrideRepository,
    pub record: RecordRepository,
}
