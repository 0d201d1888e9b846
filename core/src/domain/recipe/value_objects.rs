#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRecipeInput {
    pub dish_name: String,
}
