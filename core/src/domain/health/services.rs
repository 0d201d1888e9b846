use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    llm::ports::LLMClient,
    recipe::ports::RecipeRepository,
    suggestion::ports::SuggestionRepository,
};

impl<SR, RR, HC, LLM> HealthCheckService for Service<SR, RR, HC, LLM>
where
    SR: SuggestionRepository,
    RR: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository, llm::ports::MockLLMClient,
        recipe::ports::MockRecipeRepository, suggestion::ports::MockSuggestionRepository,
    };

    #[tokio::test]
    async fn test_readiness_reports_repository_status() {
        let mut health = MockHealthCheckRepository::new();
        health.expect_readiness().returning(|| {
            Box::pin(async {
                Ok(DatabaseHealthStatus {
                    healthy: true,
                    response_time_ms: 3,
                })
            })
        });

        let service = Service::new(
            MockSuggestionRepository::new(),
            MockRecipeRepository::new(),
            health,
            MockLLMClient::new(),
        );

        let status = service.readiness().await.unwrap();
        assert!(status.healthy);
        assert_eq!(status.response_time_ms, 3);
    }
}
