use crate::{
    domain::common::{ChefmateConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        llm::GatewayLLMClient,
        recipe::PostgresRecipeRepository,
        suggestion::PostgresSuggestionRepository,
    },
};

pub type ChefmateService = Service<
    PostgresSuggestionRepository,
    PostgresRecipeRepository,
    PostgresHealthCheckRepository,
    GatewayLLMClient,
>;

pub async fn create_service(config: ChefmateConfig) -> Result<ChefmateService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    if config.llm.api_key().is_none() {
        tracing::warn!("LLM_API_KEY is not set; assistant requests will fail until it is configured");
    }

    Ok(Service::new(
        PostgresSuggestionRepository::new(postgres.get_db()),
        PostgresRecipeRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
        GatewayLLMClient::new(config.llm),
    ))
}
