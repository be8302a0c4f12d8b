use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::infrastructure::persistence::entities::medals;
use crate::infrastructure::persistence::error::DbError;

/// Repository for medal reference data
#[derive(Clone)]
pub struct MedalRepository {
    conn: DatabaseConnection,
}

impl MedalRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All medals ordered by the donation count they require
    pub async fn all(&self) -> Result<Vec<medals::Model>, DbError> {
        medals::Entity::find()
            .order_by_asc(medals::Column::MinimumDonations)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<medals::Model>, DbError> {
        medals::Entity::find()
            .filter(medals::Column::Slug.eq(slug))
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }
}
