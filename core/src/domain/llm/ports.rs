use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::entities::{ChatMessage, ImageInput, ToolSchema},
};

/// Chat-completions gateway used by every generation handler.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Whether the gateway credential is configured.
    fn has_credentials(&self) -> bool;

    /// Plain completion; returns the assistant message content.
    fn generate_text(
        &self,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Completion with a forced tool call; returns the raw JSON arguments of the
    /// first tool call, or `None` when the model did not call the tool.
    fn generate_with_tool(
        &self,
        messages: Vec<ChatMessage>,
        tool: ToolSchema,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn generate_with_image(
        &self,
        prompt: String,
        image: ImageInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
