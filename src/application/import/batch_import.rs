//! Batch import of donation records.
//!
//! Takes lines already accepted by the line parser, creates one batch row
//! for the import event, appends the records and rebuilds the overview. The
//! two-pass repair workflow (validate, let a human fix, resubmit) happens in
//! the caller; this service refuses input that still has invalid lines.

use chrono::NaiveDateTime;
use sea_orm::Set;
use tracing::info;

use crate::application::overview::refresh::OverviewRefresher;
use crate::domain::errors::RegistryError;
use crate::domain::services::line_parser::validate_import_data;
use crate::infrastructure::persistence::entities::records;
use crate::infrastructure::persistence::repositories::Repositories;

#[derive(Debug, Clone, Copy)]
pub struct ImportOutcome {
    pub batch_id: i32,
    pub records_imported: usize,
    pub donors_refreshed: usize,
}

pub struct BatchImporter {
    repos: Repositories,
    refresher: OverviewRefresher,
}

impl BatchImporter {
    pub fn new(repos: Repositories) -> Self {
        let refresher = OverviewRefresher::new(repos.clone());
        Self { repos, refresher }
    }

    /// Imports a raw text blob. The blob must survive validation with no
    /// invalid lines; callers wanting the repair workflow run
    /// `validate_import_data` themselves first.
    pub async fn import_text(
        &self,
        text: &str,
        center_slug: Option<&str>,
    ) -> Result<ImportOutcome, RegistryError> {
        let validation = validate_import_data(text);
        if !validation.invalid_lines.is_empty() {
            return Err(RegistryError::InvalidLinesPresent);
        }
        self.import_lines(&validation.valid_lines, center_slug).await
    }

    /// Imports validated lines under a batch stamped with the current time.
    pub async fn import_lines(
        &self,
        lines: &[String],
        center_slug: Option<&str>,
    ) -> Result<ImportOutcome, RegistryError> {
        self.import_lines_at(lines, center_slug, chrono::Utc::now().naive_utc())
            .await
    }

    /// Imports validated lines under a batch with an explicit timestamp.
    pub async fn import_lines_at(
        &self,
        lines: &[String],
        center_slug: Option<&str>,
        imported_at: NaiveDateTime,
    ) -> Result<ImportOutcome, RegistryError> {
        if lines.is_empty() {
            return Err(RegistryError::NothingToImport);
        }

        let donation_center_id = match center_slug {
            Some(slug) => {
                let center = self
                    .repos
                    .donation_center
                    .find_by_slug(slug)
                    .await?
                    .ok_or_else(|| RegistryError::UnknownCenterSlug(slug.to_string()))?;
                Some(center.id)
            }
            None => None,
        };

        let batch = self
            .repos
            .batch
            .insert(donation_center_id, imported_at)
            .await?;

        let mut rows = Vec::with_capacity(lines.len());
        for line in lines {
            let row = record_from_line(batch.id, line)
                .ok_or(RegistryError::InvalidLinesPresent)?;
            rows.push(row);
        }

        let records_imported = rows.len();
        self.repos.record.insert_many(rows).await?;

        let donors_refreshed = self.refresher.refresh(None).await?;

        info!(
            "Imported batch {}: {} records, {} donors in overview",
            batch.id, records_imported, donors_refreshed
        );

        Ok(ImportOutcome {
            batch_id: batch.id,
            records_imported,
            donors_refreshed,
        })
    }

    /// Deletes one batch with its records and rebuilds the overview.
    pub async fn delete_batch(&self, batch_id: i32) -> Result<usize, RegistryError> {
        if self.repos.batch.find_by_id(batch_id).await?.is_none() {
            return Err(RegistryError::BatchNotFound(batch_id));
        }

        self.repos.batch.delete_with_records(batch_id).await?;
        let donors_refreshed = self.refresher.refresh(None).await?;

        info!("Deleted batch {}", batch_id);
        Ok(donors_refreshed)
    }
}

/// Builds a record row from a validated import line. Returns None for lines
/// the validator would not have passed.
fn record_from_line(batch_id: i32, line: &str) -> Option<records::ActiveModel> {
    let parts: Vec<&str> = line.split(';').collect();
    if parts.len() != 8 {
        return None;
    }

    let donation_count: i32 = parts[7].parse().ok()?;

    Some(records::ActiveModel {
        id: sea_orm::NotSet,
        batch_id: Set(batch_id),
        rodne_cislo: Set(parts[0].to_string()),
        first_name: Set(parts[1].to_string()),
        last_name: Set(parts[2].to_string()),
        address: Set(parts[3].to_string()),
        city: Set(parts[4].to_string()),
        postal_code: Set(parts[5].to_string()),
        kod_pojistovny: Set(parts[6].to_string()),
        donation_count: Set(donation_count),
    })
}
