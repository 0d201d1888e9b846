pub mod meal_suggestions;
pub mod recipes;
