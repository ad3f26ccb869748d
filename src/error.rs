use thiserror::Error;

// Failures from the outbound OpenAI calls. Never retried; the handler logs
// the detail and answers with a generic message.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no template for objective '{0}'")]
    UnsupportedObjective(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
