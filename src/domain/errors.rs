use thiserror::Error;

use crate::infrastructure::persistence::error::DbError;

/// Error type for registry operations.
///
/// Malformed import data is never an error at this level: the parsers return
/// it inside their result structures for human review. These variants cover
/// caller mistakes (unknown slugs, donors without records) and infrastructure
/// failures.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("donor {0} has no records")]
    DonorNotFound(String),
    #[error("batch {0} does not exist")]
    BatchNotFound(i32),
    #[error("medal {0} does not exist")]
    MedalNotFound(String),
    #[error("unknown donation center slug: {0}")]
    UnknownCenterSlug(String),
    #[error("donation center {0} has no overview column")]
    UnmappedCenterSlug(String),
    #[error("medal {0} has no overview column")]
    UnmappedMedalSlug(String),
    #[error("nothing to import after filtering the input")]
    NothingToImport,
    #[error("input contains lines that need manual review")]
    InvalidLinesPresent,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl From<sea_orm::DbErr> for RegistryError {
    fn from(err: sea_orm::DbErr) -> Self {
        RegistryError::Db(DbError::SeaOrm(err))
    }
}
