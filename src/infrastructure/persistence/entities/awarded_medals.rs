//! SeaORM entity for the awarded_medals table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "awarded_medals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rodne_cislo: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub medal_id: i32,
    /// NULL for awards imported from the legacy system with no known date.
    pub awarded_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
