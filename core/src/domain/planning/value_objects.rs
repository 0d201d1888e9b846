#[derive(Debug, Clone)]
pub struct MealPlanInput {
    pub preferences: String,
    pub number_of_people: Option<u32>,
    pub dietary_restrictions: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DietGuideInput {
    pub preferences: String,
}

#[derive(Debug, Clone)]
pub struct EnhanceDishInput {
    pub dish: String,
    pub current_ingredients: Vec<String>,
}
