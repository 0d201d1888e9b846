use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    conversation::{helpers::build_conversation, ports::ChatService, value_objects::ChatInput},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    recipe::ports::RecipeRepository,
    suggestion::ports::SuggestionRepository,
};

impl<SR, RR, HC, LLM> ChatService for Service<SR, RR, HC, LLM>
where
    SR: SuggestionRepository,
    RR: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(turns = input.history.len()))]
    async fn chat(&self, input: ChatInput) -> Result<String, CoreError> {
        let messages = build_conversation(input)?;
        self.llm_client.generate_text(messages).await
    }
}
