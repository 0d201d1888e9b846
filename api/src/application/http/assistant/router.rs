use axum::{Router, routing::post};

use super::handlers::dispatch::{dispatch, preflight};
use crate::application::http::server::app_state::AppState;

pub fn assistant_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/meal-suggestions", state.args.server.root_path),
        post(dispatch).options(preflight),
    )
}
