use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::infrastructure::persistence::entities::awarded_medals;
use crate::infrastructure::persistence::error::DbError;

/// Repository for medal awards
#[derive(Clone)]
pub struct AwardedMedalRepository {
    conn: DatabaseConnection,
}

impl AwardedMedalRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn all(&self) -> Result<Vec<awarded_medals::Model>, DbError> {
        awarded_medals::Entity::find()
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_for_donor(
        &self,
        rodne_cislo: &str,
    ) -> Result<Vec<awarded_medals::Model>, DbError> {
        awarded_medals::Entity::find()
            .filter(awarded_medals::Column::RodneCislo.eq(rodne_cislo))
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Awards a medal to a donor. `awarded_at` is None only for legacy
    /// imports where the award date is unknown.
    pub async fn award(
        &self,
        rodne_cislo: &str,
        medal_id: i32,
        awarded_at: Option<NaiveDateTime>,
    ) -> Result<(), DbError> {
        let row = awarded_medals::ActiveModel {
            rodne_cislo: Set(rodne_cislo.to_string()),
            medal_id: Set(medal_id),
            awarded_at: Set(awarded_at),
        };
        row.insert(&self.conn).await?;
        Ok(())
    }

    /// Removes an awarded medal (un-award)
    pub async fn remove(&self, rodne_cislo: &str, medal_id: i32) -> Result<(), DbError> {
        awarded_medals::Entity::delete_by_id((rodne_cislo.to_string(), medal_id))
            .exec(&self.conn)
            .await?;
        Ok(())
    }
}
