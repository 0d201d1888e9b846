use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{DualRecipe, Recipe},
        value_objects::GetRecipeInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    /// Case-insensitive lookup on the dish name.
    fn find_by_dish_name(
        &self,
        dish_name: String,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn get_recipe(
        &self,
        input: GetRecipeInput,
    ) -> impl Future<Output = Result<DualRecipe, CoreError>> + Send;
}
