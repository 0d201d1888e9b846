use crate::domain::{
    analysis::value_objects::{AnalyzeImageInput, CalorieEstimateInput, NutritionAnalysisInput},
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    /// Free-form prose, returned untouched.
    fn analyze_nutrition(
        &self,
        input: NutritionAnalysisInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn estimate_calories(
        &self,
        input: CalorieEstimateInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn extract_ingredients(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
