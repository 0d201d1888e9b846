use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    planning::{
        entities::{DietGuide, Enhancement, MealPlan},
        helpers::{
            ENHANCEMENT_FAILED, GUIDE_FAILED, diet_guide_messages, enhancement_messages,
            meal_plan_messages, parse_meal_plan, parse_tool_arguments,
        },
        ports::PlanningService,
        schema::{diet_guide_tool, enhancement_tool},
        value_objects::{DietGuideInput, EnhanceDishInput, MealPlanInput},
    },
    recipe::ports::RecipeRepository,
    suggestion::ports::SuggestionRepository,
};

impl<SR, RR, HC, LLM> PlanningService for Service<SR, RR, HC, LLM>
where
    SR: SuggestionRepository,
    RR: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self))]
    async fn generate_meal_plan(&self, input: MealPlanInput) -> Result<MealPlan, CoreError> {
        let raw = self
            .llm_client
            .generate_text(meal_plan_messages(&input))
            .await?;

        parse_meal_plan(&raw)
    }

    #[instrument(skip(self))]
    async fn generate_diet_guide(&self, input: DietGuideInput) -> Result<DietGuide, CoreError> {
        let arguments = self
            .llm_client
            .generate_with_tool(diet_guide_messages(&input), diet_guide_tool())
            .await?;

        parse_tool_arguments::<DietGuide>(arguments, GUIDE_FAILED).map(DietGuide::truncated)
    }

    #[instrument(skip(self))]
    async fn enhance_dish(&self, input: EnhanceDishInput) -> Result<Enhancement, CoreError> {
        let arguments = self
            .llm_client
            .generate_with_tool(enhancement_messages(&input), enhancement_tool())
            .await?;

        parse_tool_arguments::<Enhancement>(arguments, ENHANCEMENT_FAILED).map(Enhancement::cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository, llm::ports::MockLLMClient,
        recipe::ports::MockRecipeRepository, suggestion::ports::MockSuggestionRepository,
    };

    fn service(
        llm: MockLLMClient,
    ) -> Service<MockSuggestionRepository, MockRecipeRepository, MockHealthCheckRepository, MockLLMClient>
    {
        Service::new(
            MockSuggestionRepository::new(),
            MockRecipeRepository::new(),
            MockHealthCheckRepository::new(),
            llm,
        )
    }

    const GUIDE: &str = r#"{
        "title": "Heart Healthy",
        "overview": "Lower sodium, more fiber.",
        "recommendations": ["a", "b", "c", "d", "e", "f"],
        "mealPlan": {"breakfast": "Oats", "lunch": "Lentil soup", "dinner": "Salmon", "snacks": "Apple"},
        "tips": ["1", "2", "3", "4"]
    }"#;

    #[tokio::test]
    async fn test_diet_guide_has_every_required_field() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_tool()
            .withf(|_, tool| tool.name == "create_diet_guide")
            .returning(|_, _| Box::pin(async { Ok(Some(GUIDE.to_string())) }));

        let guide = service(llm)
            .generate_diet_guide(DietGuideInput {
                preferences: "heart healthy".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(guide.recommendations.len(), 5);
        assert_eq!(guide.tips.len(), 4);
        assert_eq!(guide.meal_plan.snacks, "Apple");
    }

    #[tokio::test]
    async fn test_diet_guide_without_tool_call_fails() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_tool()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let err = service(llm)
            .generate_diet_guide(DietGuideInput {
                preferences: "keto".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to generate guide");
    }

    #[tokio::test]
    async fn test_enhancement_additions_always_have_ingredient() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_tool()
            .withf(|messages, tool| {
                tool.name == "suggest_enhancements" && messages[1].content.contains("garlic, rice")
            })
            .returning(|_, _| {
                Box::pin(async {
                    Ok(Some(
                        r#"{"additions":[{"ingredient":"Soy sauce","instructions":"Add at the end"},{"ingredient":""}]}"#
                            .to_string(),
                    ))
                })
            });

        let enhancement = service(llm)
            .enhance_dish(EnhanceDishInput {
                dish: "Fried rice".to_string(),
                current_ingredients: vec!["garlic".to_string(), "rice".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(enhancement.additions.len(), 1);
        assert!(enhancement.additions.iter().all(|a| !a.ingredient.is_empty()));
        assert_eq!(enhancement.general_tips, None);
    }

    #[tokio::test]
    async fn test_enhancement_without_tool_call_fails() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_tool()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let err = service(llm)
            .enhance_dish(EnhanceDishInput {
                dish: "Chili".to_string(),
                current_ingredients: Vec::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::GenerationFailed("Failed to generate suggestions".to_string()));
    }

    #[tokio::test]
    async fn test_meal_plan_parse_failure_fails_request() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .returning(|_| Box::pin(async { Ok("Here is your plan: eat well".to_string()) }));

        let err = service(llm)
            .generate_meal_plan(MealPlanInput {
                preferences: "vegetarian".to_string(),
                number_of_people: None,
                dietary_restrictions: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_upstream_error_propagates() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .returning(|_| Box::pin(async { Err(CoreError::Upstream { status: 429 }) }));

        let err = service(llm)
            .generate_meal_plan(MealPlanInput {
                preferences: "anything".to_string(),
                number_of_people: Some(2),
                dietary_restrictions: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Upstream { status: 429 });
    }
}
