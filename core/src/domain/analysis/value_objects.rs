#[derive(Debug, Clone)]
pub struct NutritionAnalysisInput {
    pub meal: String,
}

#[derive(Debug, Clone)]
pub struct CalorieEstimateInput {
    pub food_input: String,
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    /// Raw base64 or a complete `data:` URL.
    pub image: String,
    pub mime_type: Option<String>,
}
