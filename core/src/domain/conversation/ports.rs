use crate::domain::{
    common::entities::app_errors::CoreError, conversation::value_objects::ChatInput,
};

#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    /// Stateless: the caller replays the whole conversation on every turn.
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<String, CoreError>> + Send;
}
