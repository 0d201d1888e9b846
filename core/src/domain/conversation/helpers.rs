use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::value_objects::ChatInput,
    llm::entities::{ChatMessage, ChatRole},
};

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful cooking assistant. Provide clear, practical cooking advice.";

/// `[system (+context), ...history, user]`. History may only replay user and
/// assistant turns.
pub fn build_conversation(input: ChatInput) -> Result<Vec<ChatMessage>, CoreError> {
    if input
        .history
        .iter()
        .any(|message| message.role == ChatRole::System)
    {
        return Err(CoreError::InvalidPayload(
            "history may only contain user and assistant messages".to_string(),
        ));
    }

    let mut system = input
        .system_prompt
        .filter(|prompt| !prompt.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

    if let Some(context) = input.context.filter(|c| !c.is_null()) {
        system.push_str("\n\nContext: ");
        system.push_str(&context.to_string());
    }

    let mut messages = Vec::with_capacity(input.history.len() + 2);
    messages.push(ChatMessage::system(system));
    messages.extend(input.history);
    messages.push(ChatMessage::user(input.message));

    Ok(messages)
}
