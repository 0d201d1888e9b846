use tracing::instrument;

use crate::domain::{
    analysis::{
        helpers::{
            INGREDIENT_PROMPT, calorie_messages, image_input, nutrition_messages,
            parse_ingredients,
        },
        ports::AnalysisService,
        value_objects::{AnalyzeImageInput, CalorieEstimateInput, NutritionAnalysisInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    recipe::ports::RecipeRepository,
    suggestion::ports::SuggestionRepository,
};

impl<SR, RR, HC, LLM> AnalysisService for Service<SR, RR, HC, LLM>
where
    SR: SuggestionRepository,
    RR: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self))]
    async fn analyze_nutrition(&self, input: NutritionAnalysisInput) -> Result<String, CoreError> {
        self.llm_client
            .generate_text(nutrition_messages(&input.meal))
            .await
    }

    #[instrument(skip(self))]
    async fn estimate_calories(&self, input: CalorieEstimateInput) -> Result<String, CoreError> {
        self.llm_client
            .generate_text(calorie_messages(&input.food_input))
            .await
    }

    #[instrument(skip(self, input), fields(mime_type = ?input.mime_type))]
    async fn extract_ingredients(&self, input: AnalyzeImageInput) -> Result<Vec<String>, CoreError> {
        let image = image_input(input)?;
        let raw = self
            .llm_client
            .generate_with_image(INGREDIENT_PROMPT.to_string(), image)
            .await?;

        Ok(parse_ingredients(&raw))
    }
}
