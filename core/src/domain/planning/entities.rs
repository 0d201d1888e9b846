use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const MAX_TIPS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayMeals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

/// Seven-day plan keyed by weekday name on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    #[serde(rename = "Monday", alias = "monday")]
    pub monday: DayMeals,
    #[serde(rename = "Tuesday", alias = "tuesday")]
    pub tuesday: DayMeals,
    #[serde(rename = "Wednesday", alias = "wednesday")]
    pub wednesday: DayMeals,
    #[serde(rename = "Thursday", alias = "thursday")]
    pub thursday: DayMeals,
    #[serde(rename = "Friday", alias = "friday")]
    pub friday: DayMeals,
    #[serde(rename = "Saturday", alias = "saturday")]
    pub saturday: DayMeals,
    #[serde(rename = "Sunday", alias = "sunday")]
    pub sunday: DayMeals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietMealPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietGuide {
    pub title: String,
    pub overview: String,
    pub recommendations: Vec<String>,
    pub meal_plan: DietMealPlan,
    pub tips: Vec<String>,
}

impl DietGuide {
    /// Caps list lengths to what the guide layout renders.
    pub fn truncated(mut self) -> Self {
        self.recommendations.truncate(MAX_RECOMMENDATIONS);
        self.tips.truncate(MAX_TIPS);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Addition {
    pub ingredient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Enhancement {
    pub additions: Vec<Addition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_tips: Option<String>,
}

impl Enhancement {
    /// Drops additions without an ingredient and turns blank text into `None`.
    pub fn cleaned(self) -> Self {
        let additions = self
            .additions
            .into_iter()
            .filter_map(|addition| {
                let ingredient = addition.ingredient.trim().to_string();
                if ingredient.is_empty() {
                    return None;
                }
                Some(Addition {
                    ingredient,
                    instructions: non_blank(addition.instructions),
                })
            })
            .collect();

        Self {
            additions,
            general_tips: non_blank(self.general_tips),
        }
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
