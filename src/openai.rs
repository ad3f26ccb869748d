use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::ProviderError;

const COMPLETIONS_PATH: &str = "/v1/engines/text-davinci-002/completions";
const MODERATIONS_PATH: &str = "/v1/moderations";
const MAX_TOKENS: u32 = 1000;

// OpenAI moderation request format
#[derive(Serialize)]
struct ModerationRequest<'a> {
    input: &'a str,
}

#[derive(Deserialize)]
struct ModerationResponse {
    results: Vec<ModerationResult>,
}

#[derive(Deserialize)]
struct ModerationResult {
    flagged: bool,
}

// OpenAI completion request format
#[derive(Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    temperature: f64,
    max_tokens: u32,
    frequency_penalty: u32,
    presence_penalty: u32,
    n: u32,
    user: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<serde_json::Value>,
}

/// Moderation pre-check against the provider's content policy.
#[async_trait]
pub trait ModerationGate {
    async fn check(&self, text: &str) -> Result<bool, ProviderError>;
}

/// Text-completion call. `variants` is the number of choices requested,
/// `user_tag` the opaque identity forwarded for provider-side abuse tracking.
#[async_trait]
pub trait CompletionService {
    async fn complete(
        &self,
        prompt: &str,
        temperature: f64,
        variants: u32,
        user_tag: &str,
    ) -> Result<Vec<serde_json::Value>, ProviderError>;
}

pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let res = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.json::<R>().await?)
    }
}

#[async_trait]
impl ModerationGate for OpenAiClient {
    async fn check(&self, text: &str) -> Result<bool, ProviderError> {
        let response: ModerationResponse = self
            .post_json(MODERATIONS_PATH, &ModerationRequest { input: text })
            .await?;

        response
            .results
            .first()
            .map(|result| result.flagged)
            .ok_or_else(|| ProviderError::Malformed("moderation response had no results".to_string()))
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        temperature: f64,
        variants: u32,
        user_tag: &str,
    ) -> Result<Vec<serde_json::Value>, ProviderError> {
        let request = CompletionRequest {
            prompt,
            temperature,
            max_tokens: MAX_TOKENS,
            frequency_penalty: 0,
            presence_penalty: 0,
            n: variants,
            user: user_tag,
        };

        let response: CompletionResponse = self.post_json(COMPLETIONS_PATH, &request).await?;
        Ok(response.choices)
    }
}
