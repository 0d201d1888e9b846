use crate::domain::{
    common::entities::app_errors::CoreError,
    planning::{
        entities::{DietGuide, Enhancement, MealPlan},
        value_objects::{DietGuideInput, EnhanceDishInput, MealPlanInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PlanningService: Send + Sync {
    fn generate_meal_plan(
        &self,
        input: MealPlanInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn generate_diet_guide(
        &self,
        input: DietGuideInput,
    ) -> impl Future<Output = Result<DietGuide, CoreError>> + Send;

    fn enhance_dish(
        &self,
        input: EnhanceDishInput,
    ) -> impl Future<Output = Result<Enhancement, CoreError>> + Send;
}
