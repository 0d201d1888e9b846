#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestMealsInput {
    pub ingredients: Option<Vec<String>>,
}

impl SuggestMealsInput {
    /// Trimmed, non-empty ingredients, or `None` when the caller asked for
    /// general suggestions.
    pub fn ingredient_list(&self) -> Option<Vec<String>> {
        let ingredients: Vec<String> = self
            .ingredients
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();

        if ingredients.is_empty() {
            None
        } else {
            Some(ingredients)
        }
    }
}
