use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::{FAILED_REQUESTS, MODERATION_BLOCKED, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{GenerateRequest, GenerateResponse};
use crate::orchestrator::{self, PromptResult};
use crate::state::AppState;

// Fixed fallback message for unexpected failures; detail stays in the logs
const FALLBACK_MESSAGE: &str = "Unable to complete request.";

// POST handler - the single catch boundary for the generation pipeline.
// Nothing below this point escapes uncaught.
pub async fn copywriter_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<GenerateRequest>,
) -> Response {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    // caller identity, injected by the upstream auth layer
    let caller_id = headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let result = orchestrator::handle_generation(&state.openai, &payload, caller_id).await;

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    match result {
        Ok(PromptResult::Generated(choices)) => (
            StatusCode::OK,
            Json(GenerateResponse {
                message: "Generated".to_string(),
                status: "Success".to_string(),
                choices,
            }),
        )
            .into_response(),
        Ok(PromptResult::Blocked) => {
            MODERATION_BLOCKED.inc();
            (
                StatusCode::BAD_REQUEST,
                Json(GenerateResponse {
                    message: orchestrator::POLICY_MESSAGE.to_string(),
                    status: "Failed".to_string(),
                    choices: vec![],
                }),
            )
                .into_response()
        }
        Err(e) => {
            FAILED_REQUESTS.inc();
            eprintln!("[Copywriter] request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": FALLBACK_MESSAGE })),
            )
                .into_response()
        }
    }
}
