use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::infrastructure::persistence::entities::donors_override;
use crate::infrastructure::persistence::error::DbError;

/// Repository for manual personal-data overrides
#[derive(Clone)]
pub struct OverrideRepository {
    conn: DatabaseConnection,
}

impl OverrideRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(
        &self,
        rodne_cislo: &str,
    ) -> Result<Option<donors_override::Model>, DbError> {
        donors_override::Entity::find_by_id(rodne_cislo)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn all(&self) -> Result<Vec<donors_override::Model>, DbError> {
        donors_override::Entity::find()
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// One override row per donor; saving replaces the previous one.
    pub async fn save(&self, row: donors_override::Model) -> Result<(), DbError> {
        let existing = donors_override::Entity::find_by_id(&row.rodne_cislo)
            .one(&self.conn)
            .await?;

        if existing.is_some() {
            donors_override::Entity::delete_by_id(&row.rodne_cislo)
                .exec(&self.conn)
                .await?;
        }

        let replacement = donors_override::ActiveModel {
            rodne_cislo: Set(row.rodne_cislo),
            first_name: Set(row.first_name),
            last_name: Set(row.last_name),
            address: Set(row.address),
            city: Set(row.city),
            postal_code: Set(row.postal_code),
            kod_pojistovny: Set(row.kod_pojistovny),
        };
        replacement.insert(&self.conn).await?;
        Ok(())
    }

    pub async fn delete(&self, rodne_cislo: &str) -> Result<(), DbError> {
        donors_override::Entity::delete_by_id(rodne_cislo)
            .exec(&self.conn)
            .await?;
        Ok(())
    }
}
