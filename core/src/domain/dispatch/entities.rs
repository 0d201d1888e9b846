use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    analysis::value_objects::{AnalyzeImageInput, CalorieEstimateInput, NutritionAnalysisInput},
    conversation::value_objects::ChatInput,
    planning::{
        entities::{DietGuide, Enhancement, MealPlan},
        value_objects::{DietGuideInput, EnhanceDishInput, MealPlanInput},
    },
    recipe::{entities::DualRecipe, value_objects::GetRecipeInput},
    suggestion::value_objects::SuggestMealsInput,
};

/// One variant per `type` discriminator value.
#[derive(Debug, Clone)]
pub enum AssistantRequest {
    AnalyzeImage(AnalyzeImageInput),
    Suggest(SuggestMealsInput),
    Recipe(GetRecipeInput),
    MealPlan(MealPlanInput),
    Chat(ChatInput),
    DietGuide(DietGuideInput),
    Enhance(EnhanceDishInput),
    NutritionAnalysis(NutritionAnalysisInput),
    CalorieEstimate(CalorieEstimateInput),
}

impl AssistantRequest {
    pub const TYPES: [&'static str; 9] = [
        "analyze-image",
        "suggest",
        "recipe",
        "meal-plan",
        "chat",
        "diet-guide",
        "enhance",
        "nutrition-analysis",
        "calorie-estimate",
    ];

    pub fn request_type(&self) -> &'static str {
        match self {
            AssistantRequest::AnalyzeImage(_) => "analyze-image",
            AssistantRequest::Suggest(_) => "suggest",
            AssistantRequest::Recipe(_) => "recipe",
            AssistantRequest::MealPlan(_) => "meal-plan",
            AssistantRequest::Chat(_) => "chat",
            AssistantRequest::DietGuide(_) => "diet-guide",
            AssistantRequest::Enhance(_) => "enhance",
            AssistantRequest::NutritionAnalysis(_) => "nutrition-analysis",
            AssistantRequest::CalorieEstimate(_) => "calorie-estimate",
        }
    }
}

/// Response body; each variant serializes to the shape its request type promises.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum AssistantResponse {
    Ingredients {
        ingredients: Vec<String>,
    },
    Suggestions {
        suggestions: Vec<String>,
    },
    Recipe {
        recipe: DualRecipe,
    },
    MealPlan {
        #[serde(rename = "mealPlan")]
        meal_plan: MealPlan,
    },
    Chat {
        response: String,
    },
    DietGuide(DietGuide),
    Enhancement(Enhancement),
    NutritionAnalysis {
        analysis: String,
    },
    CalorieEstimate {
        result: String,
    },
}
