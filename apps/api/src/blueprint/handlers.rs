//! Axum route handlers for the Blueprint API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderValue,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::blueprint::generator::generate_blueprint;
use crate::errors::AppError;
use crate::state::AppState;

/// Header carrying the number of schema issues found in the returned blueprint.
pub const SCHEMA_ISSUES_HEADER: &str = "x-blueprint-schema-issues";

#[derive(Debug, Default, Deserialize)]
pub struct ProjectInfoRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /api/getprojectinfo
///
/// Turns a project description into a blueprint. The body is the model's JSON, unmodified.
pub async fn handle_get_project_info(
    State(state): State<AppState>,
    payload: Result<Json<ProjectInfoRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!("Unreadable project info body: {rejection}");
            ProjectInfoRequest::default()
        }
    };

    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Message is required".to_string()))?;

    let generated = generate_blueprint(&message, state.llm.as_ref())
        .await
        .map_err(|e| {
            AppError::upstream("Failed to process request", e, state.config.environment)
        })?;

    let mut response = Json(generated.blueprint).into_response();
    response.headers_mut().insert(
        SCHEMA_ISSUES_HEADER,
        HeaderValue::from(generated.audit.issues.len()),
    );

    Ok(response)
}
