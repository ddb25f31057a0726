//! Axum route handlers for the Synthesis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;
use crate::synthesis::synthesizer::{
    is_empty_project_data, render_project_data, synthesize_prompt,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnToPromptRequest {
    #[serde(default)]
    pub project_data: Value,
}

#[derive(Debug, Serialize)]
pub struct TurnToPromptResponse {
    pub prompt: String,
}

/// POST /api/turntoprompt
pub async fn handle_turn_to_prompt(
    State(state): State<AppState>,
    payload: Result<Json<TurnToPromptRequest>, JsonRejection>,
) -> Result<Json<TurnToPromptResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!("Unreadable turntoprompt body: {rejection}");
            TurnToPromptRequest::default()
        }
    };

    if is_empty_project_data(&request.project_data) {
        return Err(AppError::Validation(
            "Project data is required in the request body".to_string(),
        ));
    }

    let project_json = render_project_data(&request.project_data)?;

    let prompt = synthesize_prompt(&request.project_data, &project_json, state.llm.as_ref())
        .await
        .map_err(|e| {
            AppError::upstream("Failed to generate prompt", e, state.config.environment)
        })?;

    Ok(Json(TurnToPromptResponse { prompt }))
}
