use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::infrastructure::persistence::entities::donation_centers;
use crate::infrastructure::persistence::error::DbError;

/// Repository for donation center reference data
#[derive(Clone)]
pub struct DonationCenterRepository {
    conn: DatabaseConnection,
}

impl DonationCenterRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All donation centers in id order
    pub async fn all(&self) -> Result<Vec<donation_centers::Model>, DbError> {
        donation_centers::Entity::find()
            .order_by_asc(donation_centers::Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<donation_centers::Model>, DbError> {
        donation_centers::Entity::find()
            .filter(donation_centers::Column::Slug.eq(slug))
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }
}
