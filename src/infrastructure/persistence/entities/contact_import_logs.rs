//! SeaORM entity for the contact_import_logs audit table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_import_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub imported_at: DateTime,
    pub imported_by: Option<String>,
    pub filename: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub input_data: String,
    pub processed_lines_count: i32,
    pub created_notes_count: i32,
    pub updated_notes_count: i32,
    pub emails_added_count: i32,
    pub phones_added_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
