use tracing::instrument;

use crate::domain::{
    analysis::ports::AnalysisService,
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::ChatService,
    dispatch::{
        entities::{AssistantRequest, AssistantResponse},
        ports::DispatchService,
    },
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    planning::ports::PlanningService,
    recipe::ports::{RecipeRepository, RecipeService},
    suggestion::ports::{SuggestionRepository, SuggestionService},
};

impl<SR, RR, HC, LLM> DispatchService for Service<SR, RR, HC, LLM>
where
    SR: SuggestionRepository,
    RR: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, request), fields(request_type = request.request_type()))]
    async fn dispatch(&self, request: AssistantRequest) -> Result<AssistantResponse, CoreError> {
        if !self.llm_client.has_credentials() {
            tracing::error!("LLM gateway key is missing");
            return Err(CoreError::MissingCredential);
        }

        let response = match request {
            AssistantRequest::AnalyzeImage(input) => AssistantResponse::Ingredients {
                ingredients: self.extract_ingredients(input).await?,
            },
            AssistantRequest::Suggest(input) => AssistantResponse::Suggestions {
                suggestions: self.suggest_meals(input).await?,
            },
            AssistantRequest::Recipe(input) => AssistantResponse::Recipe {
                recipe: self.get_recipe(input).await?,
            },
            AssistantRequest::MealPlan(input) => AssistantResponse::MealPlan {
                meal_plan: self.generate_meal_plan(input).await?,
            },
            AssistantRequest::Chat(input) => AssistantResponse::Chat {
                response: self.chat(input).await?,
            },
            AssistantRequest::DietGuide(input) => {
                AssistantResponse::DietGuide(self.generate_diet_guide(input).await?)
            }
            AssistantRequest::Enhance(input) => {
                AssistantResponse::Enhancement(self.enhance_dish(input).await?)
            }
            AssistantRequest::NutritionAnalysis(input) => AssistantResponse::NutritionAnalysis {
                analysis: self.analyze_nutrition(input).await?,
            },
            AssistantRequest::CalorieEstimate(input) => AssistantResponse::CalorieEstimate {
                result: self.estimate_calories(input).await?,
            },
        };

        Ok(response)
    }
}
