use serde::de::DeserializeOwned;

use crate::domain::{
    common::{entities::app_errors::CoreError, strip_code_fences},
    llm::entities::ChatMessage,
    planning::{
        entities::MealPlan,
        value_objects::{DietGuideInput, EnhanceDishInput, MealPlanInput},
    },
};

const PLANNER_PROMPT: &str =
    "You are a meal planning expert. Always respond with valid JSON only.";
const NUTRITIONIST_PROMPT: &str =
    "You are a nutritionist who writes practical, balanced diet guides.";
const CHEF_PROMPT: &str =
    "You are a creative chef who improves home-cooked dishes with simple additions.";

pub const GUIDE_FAILED: &str = "Failed to generate guide";
pub const ENHANCEMENT_FAILED: &str = "Failed to generate suggestions";

pub fn meal_plan_messages(input: &MealPlanInput) -> Vec<ChatMessage> {
    let mut prompt = format!(
        "Create a 7-day meal plan (Monday to Sunday) for these preferences: {}.",
        input.preferences.trim()
    );
    if let Some(people) = input.number_of_people {
        prompt.push_str(&format!(" Portions should serve {people} people."));
    }
    if let Some(restrictions) = input
        .dietary_restrictions
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
    {
        prompt.push_str(&format!(" Respect these dietary restrictions: {restrictions}."));
    }
    prompt.push_str(
        r#"

Respond with JSON only, one key per weekday:
{
  "Monday": { "breakfast": "meal", "lunch": "meal", "dinner": "meal" },
  "Tuesday": { "breakfast": "meal", "lunch": "meal", "dinner": "meal" },
  ...
  "Sunday": { "breakfast": "meal", "lunch": "meal", "dinner": "meal" }
}"#,
    );

    vec![ChatMessage::system(PLANNER_PROMPT), ChatMessage::user(prompt)]
}

pub fn diet_guide_messages(input: &DietGuideInput) -> Vec<ChatMessage> {
    let prompt = format!(
        "Write a diet guide for: {}. Include a title, a short overview, exactly 5 recommendations, \
         a one-day meal plan (breakfast, lunch, dinner, snacks) and exactly 4 tips.",
        input.preferences.trim()
    );

    vec![ChatMessage::system(NUTRITIONIST_PROMPT), ChatMessage::user(prompt)]
}

pub fn enhancement_messages(input: &EnhanceDishInput) -> Vec<ChatMessage> {
    let ingredients = if input.current_ingredients.is_empty() {
        "not specified".to_string()
    } else {
        input.current_ingredients.join(", ")
    };
    let prompt = format!(
        "I am cooking {} with these ingredients: {}. Suggest ingredients I could add to make it \
         better, with short instructions for each, plus any general tips.",
        input.dish.trim(),
        ingredients
    );

    vec![ChatMessage::system(CHEF_PROMPT), ChatMessage::user(prompt)]
}

pub fn parse_meal_plan(raw: &str) -> Result<MealPlan, CoreError> {
    serde_json::from_str(strip_code_fences(raw)).map_err(|e| {
        tracing::error!("Failed to parse meal plan JSON: {}", e);
        CoreError::MalformedResponse("Failed to parse meal plan".to_string())
    })
}

/// Decodes forced tool-call arguments. A missing call or arguments that do not
/// match the declared schema both surface as `GenerationFailed(failure)`.
pub fn parse_tool_arguments<T: DeserializeOwned>(
    arguments: Option<String>,
    failure: &str,
) -> Result<T, CoreError> {
    let Some(arguments) = arguments else {
        tracing::error!("Model returned no tool call");
        return Err(CoreError::GenerationFailed(failure.to_string()));
    };

    serde_json::from_str(&arguments).map_err(|e| {
        tracing::error!("Tool call arguments do not match schema: {}", e);
        CoreError::GenerationFailed(failure.to_string())
    })
}
