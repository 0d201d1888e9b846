use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    recipe::{
        entities::{DualRecipe, Recipe},
        helpers::{normalize_dish_name, parse_dual_recipe, recipe_messages},
        ports::{RecipeRepository, RecipeService},
        value_objects::GetRecipeInput,
    },
    suggestion::ports::SuggestionRepository,
};

impl<SR, RR, HC, LLM> RecipeService for Service<SR, RR, HC, LLM>
where
    SR: SuggestionRepository,
    RR: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self), fields(dish_name = %input.dish_name))]
    async fn get_recipe(&self, input: GetRecipeInput) -> Result<DualRecipe, CoreError> {
        let dish_name = normalize_dish_name(&input.dish_name);
        if dish_name.is_empty() {
            return Err(CoreError::InvalidPayload("dishName is required".to_string()));
        }

        match self
            .recipe_repository
            .find_by_dish_name(dish_name.clone())
            .await
        {
            Ok(Some(cached)) => {
                tracing::debug!(recipe_id = %cached.id, "Serving recipe from cache");
                return Ok(DualRecipe::from(cached));
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Recipe cache lookup failed, generating instead: {}", e),
        }

        let raw = self
            .llm_client
            .generate_text(recipe_messages(&dish_name))
            .await?;

        let recipe = match parse_dual_recipe(&raw) {
            Ok(recipe) => recipe,
            Err(fallback) => return Ok(fallback.into_recipe(&dish_name)),
        };

        if let Err(e) = self
            .recipe_repository
            .create(Recipe::new(dish_name, recipe.clone()))
            .await
        {
            tracing::error!("Failed to cache recipe: {}", e);
        }

        Ok(recipe)
    }
}
