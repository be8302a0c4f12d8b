//! SeaORM entity for the medals reference table

use std::cmp::Ordering;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "medals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    /// Accusative form of the title, for generated documents.
    pub title_acc: String,
    /// Instrumental form of the title, for generated documents.
    pub title_instr: String,
    pub minimum_donations: i32,
}

impl Model {
    /// Medals are ordered by the donation count they require.
    pub fn cmp_by_threshold(&self, other: &Model) -> Ordering {
        self.minimum_donations.cmp(&other.minimum_donations)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
