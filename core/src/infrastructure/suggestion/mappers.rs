use sea_orm::ActiveValue::Set;

use crate::{domain::suggestion::entities::MealSuggestion, entity::meal_suggestions};

impl From<meal_suggestions::Model> for MealSuggestion {
    fn from(model: meal_suggestions::Model) -> Self {
        Self {
            id: model.id,
            suggestion: model.suggestion,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<MealSuggestion> for meal_suggestions::ActiveModel {
    fn from(suggestion: MealSuggestion) -> Self {
        Self {
            id: Set(suggestion.id),
            suggestion: Set(suggestion.suggestion),
            created_at: Set(suggestion.created_at.fixed_offset()),
        }
    }
}
