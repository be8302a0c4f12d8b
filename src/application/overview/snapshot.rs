//! Read-only reference-data snapshot for one reconciliation run.
//!
//! Donation centers and medals are read repeatedly while rebuilding the
//! overview, so they are loaded once up front and passed around explicitly.
//! Loading also resolves every slug to its overview column slot, so the
//! engine never touches column names built from strings at runtime.

use std::collections::HashMap;

use crate::domain::errors::RegistryError;
use crate::infrastructure::persistence::entities::{donation_centers, medals};
use crate::infrastructure::persistence::repositories::Repositories;

/// Overview column slot a donation count lands in. `Manual` collects batches
/// that have no donation center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterSlot {
    Fm,
    FmBubenik,
    Trinec,
    Manual,
}

fn slot_for_slug(slug: &str) -> Option<CenterSlot> {
    match slug {
        "fm" => Some(CenterSlot::Fm),
        "fm_bubenik" => Some(CenterSlot::FmBubenik),
        "trinec" => Some(CenterSlot::Trinec),
        _ => None,
    }
}

const MEDAL_SLUGS: [&str; 7] = ["br", "st", "zl", "kr3", "kr2", "kr1", "plk"];

/// Reference data frozen for the duration of one reconciliation run.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub centers: Vec<donation_centers::Model>,
    /// Sorted by minimum_donations ascending.
    pub medals: Vec<medals::Model>,
    slots_by_center_id: HashMap<i32, CenterSlot>,
}

impl Snapshot {
    /// Builds a snapshot from already-fetched reference data, verifying that
    /// every slug has an overview column. An unmapped slug means the schema
    /// and the reference table diverged, which no amount of refreshing can
    /// fix, so it fails loudly here.
    pub fn new(
        centers: Vec<donation_centers::Model>,
        medals: Vec<medals::Model>,
    ) -> Result<Self, RegistryError> {
        let mut slots_by_center_id = HashMap::new();
        for center in &centers {
            let slot = slot_for_slug(&center.slug)
                .ok_or_else(|| RegistryError::UnmappedCenterSlug(center.slug.clone()))?;
            slots_by_center_id.insert(center.id, slot);
        }

        for medal in &medals {
            if !MEDAL_SLUGS.contains(&medal.slug.as_str()) {
                return Err(RegistryError::UnmappedMedalSlug(medal.slug.clone()));
            }
        }

        Ok(Self {
            centers,
            medals,
            slots_by_center_id,
        })
    }

    /// Loads reference data from the database.
    pub async fn load(repos: &Repositories) -> Result<Self, RegistryError> {
        let centers = repos.donation_center.all().await?;
        let medals = repos.medal.all().await?;
        Self::new(centers, medals)
    }

    /// Overview slot for a batch's donation center; batches without a center
    /// count as manual imports.
    pub fn slot_for_center(&self, donation_center_id: Option<i32>) -> CenterSlot {
        donation_center_id
            .and_then(|id| self.slots_by_center_id.get(&id).copied())
            .unwrap_or(CenterSlot::Manual)
    }
}
