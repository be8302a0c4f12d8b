use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::infrastructure::persistence::entities::records;
use crate::infrastructure::persistence::error::DbError;

/// Repository for the append-only donation record ledger
#[derive(Clone)]
pub struct RecordRepository {
    conn: DatabaseConnection,
}

impl RecordRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Bulk-inserts the records of one batch
    pub async fn insert_many(&self, rows: Vec<records::ActiveModel>) -> Result<(), DbError> {
        if rows.is_empty() {
            return Ok(());
        }

        records::Entity::insert_many(rows).exec(&self.conn).await?;
        Ok(())
    }

    /// Full donation history of one donor across all batches
    pub async fn find_by_rodne_cislo(
        &self,
        rodne_cislo: &str,
    ) -> Result<Vec<records::Model>, DbError> {
        records::Entity::find()
            .filter(records::Column::RodneCislo.eq(rodne_cislo))
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// The whole ledger, for a full overview rebuild
    pub async fn all(&self) -> Result<Vec<records::Model>, DbError> {
        records::Entity::find()
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_batch(&self, batch_id: i32) -> Result<Vec<records::Model>, DbError> {
        records::Entity::find()
            .filter(records::Column::BatchId.eq(batch_id))
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }
}
