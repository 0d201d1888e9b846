use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderName, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use chefmate_core::{application::create_service, domain::common::ChefmateConfig};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    assistant::router::assistant_routes,
    health::router::health_routes,
    server::{app_state::AppState, openapi::ApiDoc},
};
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = ChefmateConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
        let uri: String = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ]);

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();
    openapi.paths = paths;

    let router = Router::new()
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(format!("{}/api-docs/openapi.json", root_path), openapi),
        )
        .merge(assistant_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}

/// Adds request metrics and the `/metrics` endpoint. The recorder is global, so
/// this runs once per process.
pub fn with_metrics(router: Router, root_path: &str) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    router
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, StatusCode, header};
    use axum_test::TestServer;
    use chefmate_core::{
        domain::common::{LLMConfig, services::Service},
        infrastructure::{
            health::PostgresHealthCheckRepository, llm::GatewayLLMClient,
            recipe::PostgresRecipeRepository, suggestion::PostgresSuggestionRepository,
        },
    };
    use clap::Parser;
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};

    use super::*;

    fn test_server(api_key: Option<&str>) -> TestServer {
        let args = Arc::new(Args::parse_from(["chefmate", "--root-path", ""]));
        let db = DatabaseConnection::Disconnected;
        let service = Service::new(
            PostgresSuggestionRepository::new(db.clone()),
            PostgresRecipeRepository::new(db.clone()),
            PostgresHealthCheckRepository::new(db),
            GatewayLLMClient::new(LLMConfig {
                api_key: api_key.map(str::to_string),
                base_url: "http://127.0.0.1:9/v1".to_string(),
                model: "google/gemini-2.5-flash".to_string(),
            }),
        );

        let app = router(AppState::new(args, service)).unwrap();
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_type_is_500_with_error_body() {
        let server = test_server(Some("key"));

        let response = server
            .post("/meal-suggestions")
            .json(&json!({ "type": "bake-off" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>(), json!({ "error": "Invalid request type" }));
    }

    #[tokio::test]
    async fn test_missing_credential_is_reported() {
        let server = test_server(None);

        let response = server
            .post("/meal-suggestions")
            .json(&json!({ "type": "recipe", "dishName": "Tacos" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "LLM_API_KEY is not configured" })
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_500() {
        let server = test_server(Some("key"));

        let response = server
            .post("/meal-suggestions")
            .text("{ not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.json::<Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn test_preflight_allows_any_origin() {
        let server = test_server(None);

        let response = server
            .method(Method::OPTIONS, "/meal-suggestions")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://app.example.com"))
            .add_header(
                header::ACCESS_CONTROL_REQUEST_METHOD,
                HeaderValue::from_static("POST"),
            )
            .add_header(
                header::ACCESS_CONTROL_REQUEST_HEADERS,
                HeaderValue::from_static("apikey,content-type"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
        let allowed = response
            .header(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .to_str()
            .unwrap()
            .to_string();
        assert!(allowed.contains("x-client-info"));
        assert!(allowed.contains("apikey"));
    }

    #[tokio::test]
    async fn test_plain_options_is_empty_200() {
        let server = test_server(None);

        let response = server.method(Method::OPTIONS, "/meal-suggestions").await;

        response.assert_status_ok();
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_health_probes() {
        let server = test_server(None);

        let live = server.get("/health").await;
        live.assert_status_ok();
        live.assert_text("ok");

        let ready = server.get("/health/ready").await;
        ready.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let server = test_server(None);

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status_ok();
        let doc = response.json::<Value>();
        assert!(doc["paths"]["/meal-suggestions"]["post"].is_object());
    }
}
