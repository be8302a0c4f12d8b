use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::infrastructure::persistence::entities::contact_import_logs;
use crate::infrastructure::persistence::error::DbError;

/// Repository for the contact-import audit trail
#[derive(Clone)]
pub struct ContactImportLogRepository {
    conn: DatabaseConnection,
}

impl ContactImportLogRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Appends one audit row per import operation
    pub async fn insert(
        &self,
        row: contact_import_logs::ActiveModel,
    ) -> Result<contact_import_logs::Model, DbError> {
        row.insert(&self.conn).await.map_err(Into::into)
    }

    /// All audit rows, newest first
    pub async fn all(&self) -> Result<Vec<contact_import_logs::Model>, DbError> {
        contact_import_logs::Entity::find()
            .order_by_desc(contact_import_logs::Column::ImportedAt)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }
}
