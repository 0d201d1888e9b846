use crate::domain::{
    common::strip_code_fences,
    llm::entities::ChatMessage,
    recipe::entities::{DualRecipe, RawRecipeText},
};

const SYSTEM_PROMPT: &str =
    "You are a professional chef providing detailed recipes. Always respond with valid JSON only.";

pub fn recipe_messages(dish_name: &str) -> Vec<ChatMessage> {
    let prompt = format!(
        r#"Provide two versions of a recipe for {dish_name}:
1. "standard": a convenient version that may use store-bought shortcuts (sauces, doughs, spice mixes).
2. "fromScratch": the same dish made entirely from basic ingredients.

Both versions MUST yield exactly the same number of servings and portion size.

Respond with JSON only, using this structure:
{{
  "title": "dish name",
  "standard": {{
    "ingredients": ["ingredient 1", "ingredient 2"],
    "steps": ["step 1", "step 2"],
    "tips": "helpful cooking tips"
  }},
  "fromScratch": {{
    "ingredients": ["ingredient 1", "ingredient 2"],
    "steps": ["step 1", "step 2"],
    "tips": "helpful cooking tips"
  }}
}}"#
    );

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)]
}

/// Parses a dual recipe out of model text. The error side carries the raw text
/// so the caller can build a degraded recipe from it.
pub fn parse_dual_recipe(raw: &str) -> Result<DualRecipe, RawRecipeText> {
    serde_json::from_str::<DualRecipe>(strip_code_fences(raw)).map_err(|e| {
        tracing::warn!("Failed to parse recipe JSON: {}", e);
        RawRecipeText(raw.to_string())
    })
}

/// Cache key for a dish name: surrounding whitespace is not significant.
pub fn normalize_dish_name(dish_name: &str) -> String {
    dish_name.split_whitespace().collect::<Vec<_>>().join(" ")
}
