use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::infrastructure::persistence::entities::notes;
use crate::infrastructure::persistence::error::DbError;

/// Repository for donor notes
#[derive(Clone)]
pub struct NoteRepository {
    conn: DatabaseConnection,
}

impl NoteRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, rodne_cislo: &str) -> Result<Option<notes::Model>, DbError> {
        notes::Entity::find_by_id(rodne_cislo)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Creates or overwrites the donor's note
    pub async fn save(&self, rodne_cislo: &str, note: &str) -> Result<notes::Model, DbError> {
        let existing = notes::Entity::find_by_id(rodne_cislo)
            .one(&self.conn)
            .await?;

        let saved = if let Some(model) = existing {
            let mut update: notes::ActiveModel = model.into();
            update.note = Set(note.to_string());
            update.update(&self.conn).await?
        } else {
            let new_note = notes::ActiveModel {
                rodne_cislo: Set(rodne_cislo.to_string()),
                note: Set(note.to_string()),
            };
            new_note.insert(&self.conn).await?
        };

        Ok(saved)
    }
}
