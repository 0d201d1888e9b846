use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    recipe::ports::RecipeRepository,
    suggestion::{
        entities::MealSuggestion,
        helpers::{parse_suggestions, sample_suggestions, suggestion_messages},
        ports::{SuggestionRepository, SuggestionService},
        value_objects::SuggestMealsInput,
    },
};

impl<SR, RR, HC, LLM> SuggestionService for Service<SR, RR, HC, LLM>
where
    SR: SuggestionRepository,
    RR: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self))]
    async fn suggest_meals(&self, input: SuggestMealsInput) -> Result<Vec<String>, CoreError> {
        let ingredients = input.ingredient_list();

        if ingredients.is_none() {
            let cached = match self.suggestion_repository.fetch_all().await {
                Ok(cached) => cached,
                Err(e) => {
                    tracing::warn!("Failed to read suggestion cache, generating instead: {}", e);
                    Vec::new()
                }
            };

            if !cached.is_empty() {
                let pool = cached.into_iter().map(|s| s.suggestion).collect();
                let sample = sample_suggestions(pool, &mut rand::thread_rng());
                tracing::debug!(count = sample.len(), "Serving suggestions from cache");
                return Ok(sample);
            }
        }

        let raw = self
            .llm_client
            .generate_text(suggestion_messages(ingredients.as_deref()))
            .await?;
        let suggestions = parse_suggestions(&raw);

        // Ingredient-specific results are situational and stay out of the pool.
        if ingredients.is_none() && !suggestions.is_empty() {
            let rows = suggestions.iter().cloned().map(MealSuggestion::new).collect();
            match self.suggestion_repository.upsert_many(rows).await {
                Ok(inserted) => tracing::debug!(inserted, "Cached new suggestions"),
                Err(e) => tracing::error!("Failed to cache suggestions: {}", e),
            }
        }

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::always;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository, llm::ports::MockLLMClient,
        recipe::ports::MockRecipeRepository, suggestion::ports::MockSuggestionRepository,
    };

    fn cached(names: &[&str]) -> Vec<MealSuggestion> {
        names
            .iter()
            .map(|name| MealSuggestion {
                id: Uuid::new_v4(),
                suggestion: name.to_string(),
                created_at: Utc::now(),
            })
            .collect()
    }

    fn service(
        suggestions: MockSuggestionRepository,
        llm: MockLLMClient,
    ) -> Service<MockSuggestionRepository, MockRecipeRepository, MockHealthCheckRepository, MockLLMClient>
    {
        Service::new(
            suggestions,
            MockRecipeRepository::new(),
            MockHealthCheckRepository::new(),
            llm,
        )
    }

    #[tokio::test]
    async fn test_serves_sample_from_cache_without_calling_model() {
        let names = ["Paella", "Ramen", "Goulash", "Pho", "Moussaka", "Tagine", "Biryani"];
        let mut repository = MockSuggestionRepository::new();
        let pool = cached(&names);
        repository
            .expect_fetch_all()
            .times(3)
            .returning(move || {
                let pool = pool.clone();
                Box::pin(async move { Ok(pool) })
            });
        repository.expect_upsert_many().never();

        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().never();

        let service = service(repository, llm);

        for _ in 0..3 {
            let result = service
                .suggest_meals(SuggestMealsInput::default())
                .await
                .unwrap();
            assert_eq!(result.len(), 5);
            assert!(result.iter().all(|s| names.contains(&s.as_str())));
        }
    }

    #[tokio::test]
    async fn test_empty_cache_generates_and_persists() {
        let mut repository = MockSuggestionRepository::new();
        repository
            .expect_fetch_all()
            .times(1)
            .returning(|| Box::pin(async { Ok(Vec::new()) }));
        repository
            .expect_upsert_many()
            .withf(|rows: &Vec<MealSuggestion>| {
                rows.len() == 5 && rows[0].suggestion == "Lasagna"
            })
            .times(1)
            .returning(|rows| Box::pin(async move { Ok(rows.len() as u64) }));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().times(1).returning(|_| {
            Box::pin(async {
                Ok("1. Lasagna\n2. Curry\n3. Burritos\n4. Gumbo\n5. Falafel\n6. Extra".to_string())
            })
        });

        let result = service(repository, llm)
            .suggest_meals(SuggestMealsInput::default())
            .await
            .unwrap();

        assert_eq!(result, vec!["Lasagna", "Curry", "Burritos", "Gumbo", "Falafel"]);
    }

    #[tokio::test]
    async fn test_ingredient_suggestions_bypass_cache() {
        let mut repository = MockSuggestionRepository::new();
        repository.expect_fetch_all().never();
        repository.expect_upsert_many().never();

        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(|messages| messages[1].content.contains("eggs, spinach"))
            .times(1)
            .returning(|_| Box::pin(async { Ok("Frittata\nShakshuka".to_string()) }));

        let result = service(repository, llm)
            .suggest_meals(SuggestMealsInput {
                ingredients: Some(vec!["eggs".to_string(), " spinach ".to_string()]),
            })
            .await
            .unwrap();

        assert_eq!(result, vec!["Frittata", "Shakshuka"]);
    }

    #[tokio::test]
    async fn test_cache_write_failure_does_not_fail_request() {
        let mut repository = MockSuggestionRepository::new();
        repository
            .expect_fetch_all()
            .returning(|| Box::pin(async { Ok(Vec::new()) }));
        repository
            .expect_upsert_many()
            .with(always())
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .returning(|_| Box::pin(async { Ok("Chili".to_string()) }));

        let result = service(repository, llm)
            .suggest_meals(SuggestMealsInput::default())
            .await
            .unwrap();

        assert_eq!(result, vec!["Chili"]);
    }

    #[tokio::test]
    async fn test_cache_read_failure_falls_back_to_model() {
        let mut repository = MockSuggestionRepository::new();
        repository
            .expect_fetch_all()
            .returning(|| Box::pin(async { Err(CoreError::InternalServerError) }));
        repository
            .expect_upsert_many()
            .returning(|rows| Box::pin(async move { Ok(rows.len() as u64) }));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .times(1)
            .returning(|_| Box::pin(async { Ok("Stew".to_string()) }));

        let result = service(repository, llm)
            .suggest_meals(SuggestMealsInput::default())
            .await
            .unwrap();

        assert_eq!(result, vec!["Stew"]);
    }

    #[tokio::test]
    async fn test_upstream_error_is_propagated() {
        let mut repository = MockSuggestionRepository::new();
        repository
            .expect_fetch_all()
            .returning(|| Box::pin(async { Ok(Vec::new()) }));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .returning(|_| Box::pin(async { Err(CoreError::Upstream { status: 429 }) }));

        let err = service(repository, llm)
            .suggest_meals(SuggestMealsInput::default())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Upstream { status: 429 });
    }
}
