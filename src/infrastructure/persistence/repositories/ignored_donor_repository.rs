use std::collections::HashSet;

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::infrastructure::persistence::entities::ignored_donors;
use crate::infrastructure::persistence::error::DbError;

/// Repository for the ignore list.
///
/// Ignored donors keep their records in the ledger; they are only excluded
/// from the overview and everything downstream of it.
#[derive(Clone)]
pub struct IgnoredDonorRepository {
    conn: DatabaseConnection,
}

impl IgnoredDonorRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn all(&self) -> Result<Vec<ignored_donors::Model>, DbError> {
        ignored_donors::Entity::find()
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// National ids of all ignored donors
    pub async fn rodna_cisla(&self) -> Result<HashSet<String>, DbError> {
        let rows = self.all().await?;
        Ok(rows.into_iter().map(|row| row.rodne_cislo).collect())
    }

    pub async fn add(
        &self,
        rodne_cislo: &str,
        reason: &str,
        ignored_since: NaiveDateTime,
    ) -> Result<(), DbError> {
        let row = ignored_donors::ActiveModel {
            rodne_cislo: Set(rodne_cislo.to_string()),
            reason: Set(reason.to_string()),
            ignored_since: Set(ignored_since),
        };
        row.insert(&self.conn).await?;
        Ok(())
    }

    pub async fn remove(&self, rodne_cislo: &str) -> Result<(), DbError> {
        ignored_donors::Entity::delete_by_id(rodne_cislo)
            .exec(&self.conn)
            .await?;
        Ok(())
    }
}
