pub mod awarded_medals;
pub mod batches;
pub mod contact_import_logs;
pub mod donation_centers;
pub mod donors_override;
pub mod donors_overview;
pub mod ignored_donors;
pub mod medals;
pub mod notes;
pub mod records;
