use sea_orm::ActiveValue::Set;
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::{domain::recipe::entities::Recipe, entity::recipes};

/// Reads a JSONB string array; anything else becomes an empty list.
fn string_list(value: JsonValue, column: &str) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!("Column {} is not a string array: {}", column, e);
        Vec::new()
    })
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self {
            id: model.id,
            dish_name: model.dish_name,
            title: model.title,
            standard_ingredients: string_list(model.standard_ingredients, "standard_ingredients"),
            standard_steps: string_list(model.standard_steps, "standard_steps"),
            standard_tips: model.standard_tips,
            scratch_ingredients: string_list(model.scratch_ingredients, "scratch_ingredients"),
            scratch_steps: string_list(model.scratch_steps, "scratch_steps"),
            scratch_tips: model.scratch_tips,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<Recipe> for recipes::ActiveModel {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: Set(recipe.id),
            dish_name: Set(recipe.dish_name),
            title: Set(recipe.title),
            standard_ingredients: Set(JsonValue::from(recipe.standard_ingredients)),
            standard_steps: Set(JsonValue::from(recipe.standard_steps)),
            standard_tips: Set(recipe.standard_tips),
            scratch_ingredients: Set(JsonValue::from(recipe.scratch_ingredients)),
            scratch_steps: Set(JsonValue::from(recipe.scratch_steps)),
            scratch_tips: Set(recipe.scratch_tips),
            created_at: Set(recipe.created_at.fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_model_into_recipe() {
        let model = recipes::Model {
            id: Uuid::new_v4(),
            dish_name: "tacos".to_string(),
            title: "Tacos".to_string(),
            standard_ingredients: json!(["shells"]),
            standard_steps: json!(["Fill"]),
            standard_tips: "Warm".to_string(),
            scratch_ingredients: json!(["masa"]),
            scratch_steps: json!({ "unexpected": true }),
            scratch_tips: String::new(),
            created_at: Utc::now().fixed_offset(),
        };

        let recipe = Recipe::from(model);
        assert_eq!(recipe.standard_ingredients, vec!["shells"]);
        assert_eq!(recipe.scratch_ingredients, vec!["masa"]);
        assert!(recipe.scratch_steps.is_empty());
    }
}
