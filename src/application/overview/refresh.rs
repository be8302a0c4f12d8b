//! Rebuilds the donors_overview table from the record ledger.
//!
//! The overview is derived state: everything in it can be recomputed from
//! records, overrides, awarded medals and the ignore list, and this module
//! is the only writer. A full rebuild and a single-donor rebuild share the
//! same per-donor reduction; both replace rows inside one transaction so
//! readers never see a half-written table.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use sea_orm::Set;
use tracing::info;

use crate::application::overview::reconcile::{
    apply_degree_extraction, reconcile_donor, DonorRecord,
};
use crate::application::overview::snapshot::Snapshot;
use crate::domain::errors::RegistryError;
use crate::infrastructure::persistence::entities::{batches, donors_overview, records};
use crate::infrastructure::persistence::repositories::Repositories;

/// Recomputes overview rows; the sole sanctioned writer of donors_overview.
#[derive(Clone)]
pub struct OverviewRefresher {
    repos: Repositories,
}

type BatchInfo = (NaiveDateTime, Option<i32>);

impl OverviewRefresher {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Recomputes the whole table, or just one donor's row when a national
    /// id is given. Returns the number of rows written.
    pub async fn refresh(&self, rodne_cislo: Option<&str>) -> Result<usize, RegistryError> {
        match rodne_cislo {
            Some(rc) => self.refresh_one(rc).await,
            None => self.refresh_all().await,
        }
    }

    async fn refresh_all(&self) -> Result<usize, RegistryError> {
        let snapshot = Snapshot::load(&self.repos).await?;
        let batch_info = self.batch_info().await?;
        let ignored = self.repos.ignored_donor.rodna_cisla().await?;

        let all_records = self.repos.record.all().await?;
        let mut by_donor: HashMap<&str, Vec<&records::Model>> = HashMap::new();
        for record in &all_records {
            if ignored.contains(&record.rodne_cislo) {
                continue;
            }
            by_donor
                .entry(record.rodne_cislo.as_str())
                .or_default()
                .push(record);
        }

        let overrides: HashMap<String, _> = self
            .repos
            .override_
            .all()
            .await?
            .into_iter()
            .map(|row| (row.rodne_cislo.clone(), row))
            .collect();

        let mut awarded: HashMap<String, HashSet<i32>> = HashMap::new();
        for award in self.repos.awarded_medal.all().await? {
            awarded
                .entry(award.rodne_cislo)
                .or_default()
                .insert(award.medal_id);
        }

        let empty_awards = HashSet::new();
        let mut donors: Vec<&str> = by_donor.keys().copied().collect();
        donors.sort_unstable();

        let mut rows = Vec::with_capacity(donors.len());
        for rodne_cislo in donors {
            let history = join_history(&by_donor[rodne_cislo], &batch_info);
            let row = reconcile_donor(
                rodne_cislo,
                &history,
                overrides.get(rodne_cislo),
                awarded.get(rodne_cislo).unwrap_or(&empty_awards),
                &snapshot,
            );
            if let Some(mut row) = row {
                apply_degree_extraction(&mut row);
                rows.push(into_active_model(row));
            }
        }

        let written = rows.len();
        self.repos.overview.replace_all(rows).await?;
        info!("Overview rebuilt: {} donors", written);
        Ok(written)
    }

    async fn refresh_one(&self, rodne_cislo: &str) -> Result<usize, RegistryError> {
        let donor_records = self.repos.record.find_by_rodne_cislo(rodne_cislo).await?;
        if donor_records.is_empty() {
            return Err(RegistryError::DonorNotFound(rodne_cislo.to_string()));
        }

        let ignored = self.repos.ignored_donor.rodna_cisla().await?;
        if ignored.contains(rodne_cislo) {
            // An ignored donor keeps their ledger but has no overview row.
            self.repos.overview.replace_one(rodne_cislo, None).await?;
            info!("Overview row removed for ignored donor {}", rodne_cislo);
            return Ok(0);
        }

        let snapshot = Snapshot::load(&self.repos).await?;
        let batch_info = self.batch_info().await?;

        let refs: Vec<&records::Model> = donor_records.iter().collect();
        let history = join_history(&refs, &batch_info);

        let override_row = self.repos.override_.get(rodne_cislo).await?;
        let awarded: HashSet<i32> = self
            .repos
            .awarded_medal
            .find_for_donor(rodne_cislo)
            .await?
            .into_iter()
            .map(|award| award.medal_id)
            .collect();

        let row = reconcile_donor(
            rodne_cislo,
            &history,
            override_row.as_ref(),
            &awarded,
            &snapshot,
        );

        match row {
            Some(mut row) => {
                apply_degree_extraction(&mut row);
                self.repos
                    .overview
                    .replace_one(rodne_cislo, Some(into_active_model(row)))
                    .await?;
                Ok(1)
            }
            None => Err(RegistryError::DonorNotFound(rodne_cislo.to_string())),
        }
    }

    async fn batch_info(&self) -> Result<HashMap<i32, BatchInfo>, RegistryError> {
        let all: Vec<batches::Model> = self.repos.batch.all().await?;
        Ok(all
            .into_iter()
            .map(|batch| (batch.id, (batch.imported_at, batch.donation_center_id)))
            .collect())
    }
}

/// Joins a donor's records with their batches' timestamps and centers.
/// Records whose batch is missing cannot be dated and are skipped; the
/// foreign key makes that unreachable in practice.
fn join_history<'a>(
    donor_records: &[&'a records::Model],
    batch_info: &HashMap<i32, BatchInfo>,
) -> Vec<DonorRecord<'a>> {
    donor_records
        .iter()
        .filter_map(|record| {
            batch_info
                .get(&record.batch_id)
                .map(|(imported_at, center_id)| DonorRecord {
                    record,
                    imported_at: *imported_at,
                    donation_center_id: *center_id,
                })
        })
        .collect()
}

fn into_active_model(row: donors_overview::Model) -> donors_overview::ActiveModel {
    donors_overview::ActiveModel {
        rodne_cislo: Set(row.rodne_cislo),
        first_name: Set(row.first_name),
        last_name: Set(row.last_name),
        address: Set(row.address),
        city: Set(row.city),
        postal_code: Set(row.postal_code),
        kod_pojistovny: Set(row.kod_pojistovny),
        donation_count_fm: Set(row.donation_count_fm),
        donation_count_fm_bubenik: Set(row.donation_count_fm_bubenik),
        donation_count_trinec: Set(row.donation_count_trinec),
        donation_count_manual: Set(row.donation_count_manual),
        donation_count_total: Set(row.donation_count_total),
        awarded_medal_br: Set(row.awarded_medal_br),
        awarded_medal_st: Set(row.awarded_medal_st),
        awarded_medal_zl: Set(row.awarded_medal_zl),
        awarded_medal_kr3: Set(row.awarded_medal_kr3),
        awarded_medal_kr2: Set(row.awarded_medal_kr2),
        awarded_medal_kr1: Set(row.awarded_medal_kr1),
        awarded_medal_plk: Set(row.awarded_medal_plk),
    }
}
