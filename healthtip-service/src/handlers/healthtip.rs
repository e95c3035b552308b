use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::prompts::{strip_artifacts, GENERATION_FAILED_REPLY};
use crate::services::GenerationParams;
use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct HealthTipRequest {
    #[serde(default)]
    pub user_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthTipResponse {
    pub response: String,
}

/// The relay operation: validate input, assemble the prompt, call the
/// provider once, and answer with the cleaned model text.
///
/// Provider failures of any kind collapse into a fixed fallback reply with
/// status 200 — the caller always gets *a* response; the raw error goes to
/// the operator log only.
#[tracing::instrument(skip(state, request))]
pub async fn health_tip(
    State(state): State<AppState>,
    Json(request): Json<HealthTipRequest>,
) -> (StatusCode, Json<HealthTipResponse>) {
    let user_input = request.user_prompt.as_deref().unwrap_or("").trim();

    if user_input.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(HealthTipResponse {
                response: state.config.template.empty_input_reply.to_string(),
            }),
        );
    }

    let payload = state.config.template.assemble(user_input);
    let params = GenerationParams {
        model: state.config.generation.model.clone(),
        max_tokens: state.config.generation.max_tokens,
        temperature: state.config.generation.temperature,
    };

    match state.provider.complete(&payload, &params).await {
        Ok(text) => (
            StatusCode::OK,
            Json(HealthTipResponse {
                response: strip_artifacts(&text),
            }),
        ),
        Err(e) => {
            tracing::error!(
                error = %e,
                template = %state.config.template.name,
                "Provider call failed, substituting fallback reply"
            );
            (
                StatusCode::OK,
                Json(HealthTipResponse {
                    response: GENERATION_FAILED_REPLY.to_string(),
                }),
            )
        }
    }
}
