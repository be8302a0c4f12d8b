//! SeaORM entity for the ignored_donors table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ignored_donors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rodne_cislo: String,
    pub reason: String,
    pub ignored_since: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
