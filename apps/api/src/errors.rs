use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::config::Environment;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The completion provider failed, or its output could not be used.
    /// `message` is the generic, caller-facing text; `source` is only exposed in development.
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: LlmError,
        expose_details: bool,
    },

    #[error("Not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn upstream(message: &'static str, source: LlmError, environment: Environment) -> Self {
        AppError::Upstream {
            message,
            source,
            expose_details: environment.is_development(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone(), None)
            }
            AppError::Upstream {
                message,
                source,
                expose_details,
            } => {
                match source {
                    LlmError::Parse(e) => {
                        tracing::error!("{message}: model returned unparsable JSON: {e}")
                    }
                    other => tracing::error!("{message}: completion call failed: {other}"),
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message.to_string(),
                    expose_details.then(|| source.to_string()),
                )
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string(), None),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(message));
        if let Some(details) = details {
            body.insert("details".to_string(), json!(details));
        }

        (status, Json(Value::Object(body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request_with_error_field() {
        let (status, body) =
            body_json(AppError::Validation("Message is required".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Message is required"}));
    }

    #[tokio::test]
    async fn test_upstream_error_hides_details_in_production() {
        let error = AppError::upstream(
            "Failed to process request",
            LlmError::EmptyContent,
            Environment::Production,
        );
        let (status, body) = body_json(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to process request"}));
    }

    #[tokio::test]
    async fn test_upstream_error_shows_details_in_development() {
        let error = AppError::upstream(
            "Failed to process request",
            LlmError::Api {
                status: 401,
                message: "Incorrect API key provided".to_string(),
            },
            Environment::Development,
        );
        let (status, body) = body_json(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to process request");
        assert_eq!(
            body["details"],
            "API error (status 401): Incorrect API key provided"
        );
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) = body_json(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }
}
