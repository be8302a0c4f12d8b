use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::infrastructure::persistence::entities::{batches, records};
use crate::infrastructure::persistence::error::DbError;

/// Repository for import batches
#[derive(Clone)]
pub struct BatchRepository {
    conn: DatabaseConnection,
}

impl BatchRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Creates a new batch row for one import event
    pub async fn insert(
        &self,
        donation_center_id: Option<i32>,
        imported_at: NaiveDateTime,
    ) -> Result<batches::Model, DbError> {
        let batch = batches::ActiveModel {
            id: sea_orm::NotSet,
            donation_center_id: Set(donation_center_id),
            imported_at: Set(imported_at),
        };

        batch.insert(&self.conn).await.map_err(Into::into)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<batches::Model>, DbError> {
        batches::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// All batches, oldest first
    pub async fn all(&self) -> Result<Vec<batches::Model>, DbError> {
        batches::Entity::find()
            .order_by_asc(batches::Column::ImportedAt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Deletes a batch together with its records.
    ///
    /// Records reference the batch through a foreign key, so they go first,
    /// in the same transaction.
    pub async fn delete_with_records(&self, batch_id: i32) -> Result<(), DbError> {
        let txn = self.conn.begin().await?;

        records::Entity::delete_many()
            .filter(records::Column::BatchId.eq(batch_id))
            .exec(&txn)
            .await?;

        batches::Entity::delete_by_id(batch_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
