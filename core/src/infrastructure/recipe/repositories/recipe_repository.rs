use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, Func},
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Recipe, ports::RecipeRepository},
    },
    entity::recipes::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn find_by_dish_name(&self, dish_name: String) -> Result<Option<Recipe>, CoreError> {
        // Duplicate rows from concurrent misses resolve to the oldest one.
        let recipe = Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::DishName))).eq(dish_name.to_lowercase()))
            .order_by_asc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipe by dish name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Recipe::from);

        Ok(recipe)
    }

    async fn create(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let created = ActiveModel::from(recipe)
            .insert(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Recipe::from(created))
    }
}
