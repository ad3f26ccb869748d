use crate::openai::OpenAiClient;

// App's shared state
pub struct AppState {
    pub openai: OpenAiClient,
}
