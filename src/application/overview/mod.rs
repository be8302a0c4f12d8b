pub mod reconcile;
pub mod refresh;
pub mod snapshot;

pub use refresh::OverviewRefresher;
pub use snapshot::Snapshot;
