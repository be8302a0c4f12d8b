//! SeaORM entity for the donors_override table
//!
//! Manual corrections of a donor's personal data. Any non-null field wins
//! over the record-derived value during the overview refresh.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "donors_override")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rodne_cislo: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub kod_pojistovny: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
