use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

pub const FALLBACK_TIPS: &str = "AI-generated recipe";

/// One rendition of a dish. Both renditions of a [`DualRecipe`] serve the same
/// number of portions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeVariant {
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_tips")]
    pub tips: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DualRecipe {
    pub title: String,
    pub standard: RecipeVariant,
    pub from_scratch: RecipeVariant,
}

/// Cached recipe row, keyed by the dish name the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub dish_name: String,
    pub title: String,
    pub standard_ingredients: Vec<String>,
    pub standard_steps: Vec<String>,
    pub standard_tips: String,
    pub scratch_ingredients: Vec<String>,
    pub scratch_steps: Vec<String>,
    pub scratch_tips: String,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(dish_name: String, recipe: DualRecipe) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            dish_name,
            title: recipe.title,
            standard_ingredients: recipe.standard.ingredients,
            standard_steps: recipe.standard.steps,
            standard_tips: recipe.standard.tips,
            scratch_ingredients: recipe.from_scratch.ingredients,
            scratch_steps: recipe.from_scratch.steps,
            scratch_tips: recipe.from_scratch.tips,
            created_at: now,
        }
    }
}

impl From<Recipe> for DualRecipe {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            standard: RecipeVariant {
                ingredients: recipe.standard_ingredients,
                steps: recipe.standard_steps,
                tips: recipe.standard_tips,
            },
            from_scratch: RecipeVariant {
                ingredients: recipe.scratch_ingredients,
                steps: recipe.scratch_steps,
                tips: recipe.scratch_tips,
            },
        }
    }
}

/// Model output that could not be parsed as a [`DualRecipe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecipeText(pub String);

impl RawRecipeText {
    /// Best-effort recipe: every non-empty line becomes a step of both variants.
    pub fn into_recipe(self, dish_name: &str) -> DualRecipe {
        let mut steps: Vec<String> = self
            .0
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if steps.is_empty() {
            steps.push("No instructions were returned for this dish.".to_string());
        }

        let variant = RecipeVariant {
            ingredients: Vec::new(),
            steps,
            tips: FALLBACK_TIPS.to_string(),
        };

        DualRecipe {
            title: dish_name.to_string(),
            standard: variant.clone(),
            from_scratch: variant,
        }
    }
}

/// Models sometimes return tips as a list; fold it into one paragraph.
fn deserialize_tips<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tips {
        Text(String),
        List(Vec<String>),
    }

    Ok(match Option::<Tips>::deserialize(deserializer)? {
        Some(Tips::Text(text)) => text,
        Some(Tips::List(items)) => items.join("\n"),
        None => String::new(),
    })
}
