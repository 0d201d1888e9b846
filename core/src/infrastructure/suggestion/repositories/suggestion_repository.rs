use sea_orm::{DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        suggestion::{entities::MealSuggestion, ports::SuggestionRepository},
    },
    entity::meal_suggestions::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresSuggestionRepository {
    pub db: DatabaseConnection,
}

impl PostgresSuggestionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SuggestionRepository for PostgresSuggestionRepository {
    async fn fetch_all(&self) -> Result<Vec<MealSuggestion>, CoreError> {
        let suggestions = Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch meal suggestions: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(MealSuggestion::from)
            .collect();

        Ok(suggestions)
    }

    async fn upsert_many(&self, suggestions: Vec<MealSuggestion>) -> Result<u64, CoreError> {
        if suggestions.is_empty() {
            return Ok(0);
        }

        let models = suggestions.into_iter().map(ActiveModel::from);

        let inserted = Entity::insert_many(models)
            .on_conflict(OnConflict::column(Column::Suggestion).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert meal suggestions: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(inserted)
    }
}
