use serde_json::Value;

use crate::domain::llm::entities::ChatMessage;

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub message: String,
    pub system_prompt: Option<String>,
    /// Arbitrary caller state, serialized into the system prompt.
    pub context: Option<Value>,
    pub history: Vec<ChatMessage>,
}
