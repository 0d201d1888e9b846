use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid request type")]
    InvalidRequestType,

    #[error("Invalid request: {0}")]
    InvalidPayload(String),

    #[error("LLM_API_KEY is not configured")]
    MissingCredential,

    #[error("AI API error: {status}")]
    Upstream { status: u16 },

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    GenerationFailed(String),

    #[error("Internal server error")]
    InternalServerError,
}
