use axum::extract::State;
use chefmate_core::domain::dispatch::{entities::AssistantResponse, ports::DispatchService};

use crate::application::http::{
    assistant::validators::DispatchRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/meal-suggestions",
    tag = "assistant",
    summary = "Run an assistant request",
    description = "Dispatches the body to the handler named by its `type` field: meal suggestions, recipes, meal plans, chat, diet guides, dish enhancements, nutrition and calorie analysis, or ingredient extraction from an image.",
    request_body = crate::application::http::assistant::validators::AssistantRequestValidator,
    responses(
        (status = 200, body = AssistantResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn dispatch(
    State(state): State<AppState>,
    DispatchRequest(request): DispatchRequest,
) -> Result<Response<AssistantResponse>, ApiError> {
    let response = state
        .service
        .dispatch(request)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(response))
}

/// CORS preflight; the headers come from the router's CORS layer.
pub async fn preflight() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}
