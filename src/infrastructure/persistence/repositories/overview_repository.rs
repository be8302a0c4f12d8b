use std::collections::HashSet;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::infrastructure::persistence::entities::{donors_overview, medals};
use crate::infrastructure::persistence::error::DbError;

/// Batched inserts keep the bind-parameter count below the SQLite limit.
const INSERT_CHUNK: usize = 500;

/// Repository for the derived donors_overview table.
///
/// The overview refresher is the only writer; everything else reads.
#[derive(Clone)]
pub struct OverviewRepository {
    conn: DatabaseConnection,
}

impl OverviewRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, rodne_cislo: &str) -> Result<Option<donors_overview::Model>, DbError> {
        donors_overview::Entity::find_by_id(rodne_cislo)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// All overview rows ordered by national id
    pub async fn all(&self) -> Result<Vec<donors_overview::Model>, DbError> {
        donors_overview::Entity::find()
            .order_by_asc(donors_overview::Column::RodneCislo)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// National ids of all donors currently present in the overview
    pub async fn known_rodna_cisla(&self) -> Result<HashSet<String>, DbError> {
        let rcs: Vec<String> = donors_overview::Entity::find()
            .select_only()
            .column(donors_overview::Column::RodneCislo)
            .into_tuple()
            .all(&self.conn)
            .await?;

        Ok(rcs.into_iter().collect())
    }

    /// Replaces the entire overview table in one transaction, so concurrent
    /// readers never observe a half-empty table.
    pub async fn replace_all(
        &self,
        rows: Vec<donors_overview::ActiveModel>,
    ) -> Result<(), DbError> {
        let txn = self.conn.begin().await?;

        donors_overview::Entity::delete_many().exec(&txn).await?;

        for chunk in rows.chunks(INSERT_CHUNK) {
            donors_overview::Entity::insert_many(chunk.to_vec())
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(())
    }

    /// Replaces a single donor's row (delete-then-reinsert) in one
    /// transaction. `None` removes the row without writing a new one.
    pub async fn replace_one(
        &self,
        rodne_cislo: &str,
        row: Option<donors_overview::ActiveModel>,
    ) -> Result<(), DbError> {
        let txn = self.conn.begin().await?;

        donors_overview::Entity::delete_by_id(rodne_cislo)
            .exec(&txn)
            .await?;

        if let Some(row) = row {
            donors_overview::Entity::insert(row).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    /// Donors whose donation total reaches the medal's threshold but who do
    /// not hold the medal yet
    pub async fn eligible_for_medal(
        &self,
        medal: &medals::Model,
    ) -> Result<Vec<donors_overview::Model>, DbError> {
        let awarded_column = awarded_medal_column(&medal.slug)
            .ok_or_else(|| DbError::Query(format!("unknown medal slug: {}", medal.slug)))?;

        donors_overview::Entity::find()
            .filter(donors_overview::Column::DonationCountTotal.gte(medal.minimum_donations))
            .filter(awarded_column.eq(false))
            .order_by_asc(donors_overview::Column::RodneCislo)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }
}

/// Maps a medal slug to its overview flag column.
///
/// The overview table carries one boolean column per medal; the mapping is
/// spelled out here instead of being built from strings at runtime.
pub fn awarded_medal_column(slug: &str) -> Option<donors_overview::Column> {
    match slug {
        "br" => Some(donors_overview::Column::AwardedMedalBr),
        "st" => Some(donors_overview::Column::AwardedMedalSt),
        "zl" => Some(donors_overview::Column::AwardedMedalZl),
        "kr3" => Some(donors_overview::Column::AwardedMedalKr3),
        "kr2" => Some(donors_overview::Column::AwardedMedalKr2),
        "kr1" => Some(donors_overview::Column::AwardedMedalKr1),
        "plk" => Some(donors_overview::Column::AwardedMedalPlk),
        _ => None,
    }
}
