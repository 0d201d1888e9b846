use utoipa::OpenApi;

use crate::application::http::{
    assistant::handlers::dispatch, health::handlers::health_check,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Chefmate API", description = "Recipe assistant backed by an LLM gateway"),
    paths(
        dispatch::dispatch,
        health_check::health_live,
        health_check::health_ready,
    ),
    tags(
        (name = "assistant", description = "Meal suggestions, recipes, planning and analysis"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
