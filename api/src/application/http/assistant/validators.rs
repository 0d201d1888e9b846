use axum::{
    Json,
    extract::{FromRequest, Request},
};
use chefmate_core::domain::{
    analysis::value_objects::{AnalyzeImageInput, CalorieEstimateInput, NutritionAnalysisInput},
    common::entities::app_errors::CoreError,
    conversation::value_objects::ChatInput,
    dispatch::entities::AssistantRequest,
    llm::entities::ChatMessage,
    planning::value_objects::{DietGuideInput, EnhanceDishInput, MealPlanInput},
    recipe::value_objects::GetRecipeInput,
    suggestion::value_objects::SuggestMealsInput,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AnalyzeImageValidator {
    /// Base64 image data or a `data:` URL.
    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,

    #[serde(default, rename = "mimeType")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct SuggestValidator {
    #[serde(default)]
    #[validate(length(max = 50, message = "too many ingredients"))]
    pub ingredients: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeValidator {
    #[validate(length(min = 1, max = 200, message = "dishName is required"))]
    pub dish_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanValidator {
    #[validate(length(min = 1, max = 2000, message = "preferences is required"))]
    pub preferences: String,

    #[serde(default)]
    #[validate(range(min = 1, max = 50, message = "numberOfPeople must be between 1 and 50"))]
    pub number_of_people: Option<u32>,

    #[serde(default)]
    pub dietary_restrictions: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatValidator {
    #[validate(length(min = 1, max = 4000, message = "message is required"))]
    pub message: String,

    #[serde(default)]
    pub system_prompt: Option<String>,

    #[serde(default)]
    pub context: Option<Value>,

    #[serde(default)]
    #[validate(length(max = 100, message = "history is too long"))]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DietGuideValidator {
    #[validate(length(min = 1, max = 2000, message = "preferences is required"))]
    pub preferences: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceValidator {
    #[validate(length(min = 1, max = 200, message = "dish is required"))]
    pub dish: String,

    /// A list, or one comma-separated string.
    #[serde(default, deserialize_with = "deserialize_ingredient_list")]
    #[schema(value_type = Vec<String>)]
    pub current_ingredients: Vec<String>,
}

fn deserialize_ingredient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Ingredients {
        Text(String),
        List(Vec<String>),
    }

    let items = match Option::<Ingredients>::deserialize(deserializer)? {
        Some(Ingredients::Text(text)) => text.split(',').map(str::to_owned).collect(),
        Some(Ingredients::List(items)) => items,
        None => Vec::new(),
    };

    Ok(items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NutritionAnalysisValidator {
    #[validate(length(min = 1, max = 4000, message = "meal is required"))]
    pub meal: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalorieEstimateValidator {
    #[validate(length(min = 1, max = 4000, message = "foodInput is required"))]
    pub food_input: String,
}

/// Request body of `POST /meal-suggestions`, discriminated by `type`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AssistantRequestValidator {
    AnalyzeImage(AnalyzeImageValidator),
    Suggest(SuggestValidator),
    Recipe(RecipeValidator),
    MealPlan(MealPlanValidator),
    Chat(ChatValidator),
    DietGuide(DietGuideValidator),
    Enhance(EnhanceValidator),
    NutritionAnalysis(NutritionAnalysisValidator),
    CalorieEstimate(CalorieEstimateValidator),
}

impl AssistantRequestValidator {
    /// Decodes a raw body. An absent or unknown `type` is reported separately
    /// from a known type with a bad payload.
    pub fn decode(body: Value) -> Result<Self, ApiError> {
        let known = body
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|kind| AssistantRequest::TYPES.iter().any(|known| *known == kind));
        if !known {
            return Err(CoreError::InvalidRequestType.into());
        }

        let request: Self = serde_json::from_value(body)
            .map_err(|e| CoreError::InvalidPayload(e.to_string()))?;
        request.validate_payload()?;

        Ok(request)
    }

    fn validate_payload(&self) -> Result<(), ApiError> {
        let result = match self {
            Self::AnalyzeImage(payload) => payload.validate(),
            Self::Suggest(payload) => payload.validate(),
            Self::Recipe(payload) => payload.validate(),
            Self::MealPlan(payload) => payload.validate(),
            Self::Chat(payload) => payload.validate(),
            Self::DietGuide(payload) => payload.validate(),
            Self::Enhance(payload) => payload.validate(),
            Self::NutritionAnalysis(payload) => payload.validate(),
            Self::CalorieEstimate(payload) => payload.validate(),
        };

        result.map_err(|e| ApiError::Validation(e.to_string()))
    }
}

impl From<AssistantRequestValidator> for AssistantRequest {
    fn from(request: AssistantRequestValidator) -> Self {
        match request {
            AssistantRequestValidator::AnalyzeImage(p) => {
                AssistantRequest::AnalyzeImage(AnalyzeImageInput {
                    image: p.image,
                    mime_type: p.mime_type,
                })
            }
            AssistantRequestValidator::Suggest(p) => AssistantRequest::Suggest(SuggestMealsInput {
                ingredients: p.ingredients,
            }),
            AssistantRequestValidator::Recipe(p) => AssistantRequest::Recipe(GetRecipeInput {
                dish_name: p.dish_name,
            }),
            AssistantRequestValidator::MealPlan(p) => AssistantRequest::MealPlan(MealPlanInput {
                preferences: p.preferences,
                number_of_people: p.number_of_people,
                dietary_restrictions: p.dietary_restrictions,
            }),
            AssistantRequestValidator::Chat(p) => AssistantRequest::Chat(ChatInput {
                message: p.message,
                system_prompt: p.system_prompt,
                context: p.context,
                history: p.history,
            }),
            AssistantRequestValidator::DietGuide(p) => {
                AssistantRequest::DietGuide(DietGuideInput {
                    preferences: p.preferences,
                })
            }
            AssistantRequestValidator::Enhance(p) => AssistantRequest::Enhance(EnhanceDishInput {
                dish: p.dish,
                current_ingredients: p.current_ingredients,
            }),
            AssistantRequestValidator::NutritionAnalysis(p) => {
                AssistantRequest::NutritionAnalysis(NutritionAnalysisInput { meal: p.meal })
            }
            AssistantRequestValidator::CalorieEstimate(p) => {
                AssistantRequest::CalorieEstimate(CalorieEstimateInput {
                    food_input: p.food_input,
                })
            }
        }
    }
}

/// Extracts a validated [`AssistantRequest`] from a JSON body.
pub struct DispatchRequest(pub AssistantRequest);

impl<S> FromRequest<S> for DispatchRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidJson(e.body_text()))?;

        let request = AssistantRequestValidator::decode(body)?;
        Ok(Self(request.into()))
    }
}
