use crate::error::GenerateError;
use crate::models::GenerateRequest;
use crate::openai::{CompletionService, ModerationGate};
use crate::prompt::{build_prompt, creativity_to_temperature};

// Fixed user-facing message for moderation-blocked requests
pub const POLICY_MESSAGE: &str = "Request was found promoting sexual, hateful, violent, or self-harm content. Please try again with a different content.";

// Outcome of one generation request. Exactly one path is taken: blocked by
// the moderation pre-check, or generated by the completion call.
#[derive(Debug)]
pub enum PromptResult {
    Blocked,
    Generated(Vec<serde_json::Value>),
}

// The generation pipeline: temperature lookup -> prompt build -> moderation
// pre-check -> completion call. A moderation flag short-circuits before the
// completion call is issued.
pub async fn handle_generation<P>(
    provider: &P,
    req: &GenerateRequest,
    caller_id: &str,
) -> Result<PromptResult, GenerateError>
where
    P: ModerationGate + CompletionService + Sync,
{
    let temperature = creativity_to_temperature(&req.creativity);
    let prompt = build_prompt(req)?;

    if provider.check(&prompt).await? {
        return Ok(PromptResult::Blocked);
    }

    let user_tag = format!("user{}", caller_id);
    let choices = provider
        .complete(&prompt, temperature, req.variants, &user_tag)
        .await?;

    Ok(PromptResult::Generated(choices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct FakeProvider {
        flagged: bool,
        choices: Vec<serde_json::Value>,
        completion_called: AtomicBool,
        seen: Mutex<Option<(f64, u32, String)>>,
    }

    #[async_trait]
    impl ModerationGate for FakeProvider {
        async fn check(&self, _text: &str) -> Result<bool, ProviderError> {
            Ok(self.flagged)
        }
    }

    #[async_trait]
    impl CompletionService for FakeProvider {
        async fn complete(
            &self,
            _prompt: &str,
            temperature: f64,
            variants: u32,
            user_tag: &str,
        ) -> Result<Vec<serde_json::Value>, ProviderError> {
            self.completion_called.store(true, Ordering::SeqCst);
            *self.seen.lock().unwrap() = Some((temperature, variants, user_tag.to_string()));
            Ok(self.choices.clone())
        }
    }

    fn podcast_request() -> GenerateRequest {
        GenerateRequest {
            objective: "Podcast".to_string(),
            tone: "funny".to_string(),
            language: "english".to_string(),
            keywords: "dogs, parks".to_string(),
            creativity: "high".to_string(),
            variants: 2,
        }
    }

    #[tokio::test]
    async fn flagged_prompt_short_circuits() {
        let provider = FakeProvider {
            flagged: true,
            ..Default::default()
        };

        let result = handle_generation(&provider, &podcast_request(), "42")
            .await
            .unwrap();

        assert!(matches!(result, PromptResult::Blocked));
        assert!(!provider.completion_called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn clean_prompt_relays_choices_in_order() {
        let provider = FakeProvider {
            choices: vec![json!({"text": "first"}), json!({"text": "second"})],
            ..Default::default()
        };

        let result = handle_generation(&provider, &podcast_request(), "42")
            .await
            .unwrap();

        match result {
            PromptResult::Generated(choices) => {
                assert_eq!(choices, vec![json!({"text": "first"}), json!({"text": "second"})]);
            }
            PromptResult::Blocked => panic!("expected generated choices"),
        }
    }

    #[tokio::test]
    async fn completion_receives_computed_parameters() {
        let provider = FakeProvider::default();

        handle_generation(&provider, &podcast_request(), "42")
            .await
            .unwrap();

        let seen = provider.seen.lock().unwrap().clone();
        let (temperature, variants, user_tag) = seen.unwrap();
        assert_eq!(temperature, 0.9);
        assert_eq!(variants, 2);
        assert_eq!(user_tag, "user42");
    }

    #[tokio::test]
    async fn unsupported_objective_never_reaches_provider() {
        let provider = FakeProvider::default();
        let mut req = podcast_request();
        req.objective = "Haiku".to_string();

        let err = handle_generation(&provider, &req, "42").await.unwrap_err();

        assert!(matches!(err, GenerateError::UnsupportedObjective(_)));
        assert!(!provider.completion_called.load(Ordering::SeqCst));
    }
}
