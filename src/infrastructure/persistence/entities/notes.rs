//! SeaORM entity for the notes table
//!
//! One free-text note per donor, holding e-mails, phone numbers and whatever
//! else the operators record.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::services::contact_parser::{find_emails, find_phones};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rodne_cislo: String,
    #[sea_orm(column_type = "Text")]
    pub note: String,
}

impl Model {
    /// All e-mail addresses present in the note text.
    pub fn emails(&self) -> Vec<String> {
        find_emails(&self.note)
    }

    /// All phone numbers present in the note text.
    pub fn phones(&self) -> Vec<String> {
        find_phones(&self.note)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
