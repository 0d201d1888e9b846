use crate::domain::{
    common::entities::app_errors::CoreError,
    dispatch::entities::{AssistantRequest, AssistantResponse},
};

#[cfg_attr(test, mockall::automock)]
pub trait DispatchService: Send + Sync {
    /// Routes a decoded request to its handler. Fails with
    /// [`CoreError::MissingCredential`] before touching the cache or the gateway
    /// when no API key is configured.
    fn dispatch(
        &self,
        request: AssistantRequest,
    ) -> impl Future<Output = Result<AssistantResponse, CoreError>> + Send;
}
