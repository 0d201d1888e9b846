use crate::domain::{
    common::entities::app_errors::CoreError,
    suggestion::{entities::MealSuggestion, value_objects::SuggestMealsInput},
};

/// Persistent pool of general meal suggestions.
#[cfg_attr(test, mockall::automock)]
pub trait SuggestionRepository: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<MealSuggestion>, CoreError>> + Send;

    /// Inserts the suggestions, skipping any text already in the pool.
    /// Returns the number of new rows.
    fn upsert_many(
        &self,
        suggestions: Vec<MealSuggestion>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SuggestionService: Send + Sync {
    fn suggest_meals(
        &self,
        input: SuggestMealsInput,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
