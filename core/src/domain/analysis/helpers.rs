use base64::{Engine, engine::general_purpose::STANDARD};

use crate::domain::{
    analysis::value_objects::AnalyzeImageInput,
    common::entities::app_errors::CoreError,
    llm::entities::{ChatMessage, ImageInput},
};

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

pub const INGREDIENT_PROMPT: &str = "Identify every food ingredient visible in this image. \
     Respond with a comma-separated list of ingredient names only, no extra text.";

const NUTRITIONIST_PROMPT: &str =
    "You are a registered nutritionist. Give clear, practical nutrition information.";

pub fn nutrition_messages(meal: &str) -> Vec<ChatMessage> {
    let prompt = format!(
        "Analyze the nutritional content of this meal: {}. Cover estimated calories, \
         macronutrients, notable vitamins and minerals, and suggestions to make it healthier.",
        meal.trim()
    );
    vec![ChatMessage::system(NUTRITIONIST_PROMPT), ChatMessage::user(prompt)]
}

pub fn calorie_messages(food_input: &str) -> Vec<ChatMessage> {
    let prompt = format!(
        "Estimate the calories in: {}. Give a per-item breakdown and a total.",
        food_input.trim()
    );
    vec![ChatMessage::system(NUTRITIONIST_PROMPT), ChatMessage::user(prompt)]
}

/// Accepts a data URL as-is; otherwise checks the payload is valid base64.
pub fn image_input(input: AnalyzeImageInput) -> Result<ImageInput, CoreError> {
    let image = input.image.trim();
    if image.is_empty() {
        return Err(CoreError::InvalidPayload("image is required".to_string()));
    }

    if let Some(rest) = image.strip_prefix("data:") {
        let Some((mime_type, data)) = rest.split_once(";base64,") else {
            return Err(CoreError::InvalidPayload(
                "image data URL must be base64 encoded".to_string(),
            ));
        };
        return Ok(ImageInput {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        });
    }

    STANDARD.decode(image).map_err(|e| {
        tracing::warn!("Rejected image payload: {}", e);
        CoreError::InvalidPayload("image is not valid base64".to_string())
    })?;

    let mime_type = input
        .mime_type
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());

    Ok(ImageInput {
        mime_type,
        data: image.to_string(),
    })
}

pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
