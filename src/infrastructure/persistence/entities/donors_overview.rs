//! SeaORM entity for the donors_overview table
//!
//! Fully derived state. Rebuilt by the overview refresher from records,
//! overrides, awarded medals and the ignore list; nothing else writes here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "donors_overview")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rodne_cislo: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub kod_pojistovny: String,
    pub donation_count_fm: i32,
    pub donation_count_fm_bubenik: i32,
    pub donation_count_trinec: i32,
    pub donation_count_manual: i32,
    pub donation_count_total: i32,
    pub awarded_medal_br: bool,
    pub awarded_medal_st: bool,
    pub awarded_medal_zl: bool,
    pub awarded_medal_kr3: bool,
    pub awarded_medal_kr2: bool,
    pub awarded_medal_kr1: bool,
    pub awarded_medal_plk: bool,
}

impl Model {
    /// Donation count reported by the center with the given slug, with
    /// "manual" standing in for batches that have no center. The mapping is
    /// spelled out per column; an unknown slug returns None.
    pub fn donation_count_for(&self, slug: &str) -> Option<i32> {
        match slug {
            "fm" => Some(self.donation_count_fm),
            "fm_bubenik" => Some(self.donation_count_fm_bubenik),
            "trinec" => Some(self.donation_count_trinec),
            "manual" => Some(self.donation_count_manual),
            _ => None,
        }
    }

    /// Whether the donor holds the medal with the given slug.
    pub fn awarded_medal(&self, slug: &str) -> Option<bool> {
        match slug {
            "br" => Some(self.awarded_medal_br),
            "st" => Some(self.awarded_medal_st),
            "zl" => Some(self.awarded_medal_zl),
            "kr3" => Some(self.awarded_medal_kr3),
            "kr2" => Some(self.awarded_medal_kr2),
            "kr1" => Some(self.awarded_medal_kr1),
            "plk" => Some(self.awarded_medal_plk),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
