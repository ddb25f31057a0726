//! Prompt Synthesizer: turns a blueprint back into a natural-language implementation brief.

use anyhow::Context;
use serde_json::Value;
use tracing::debug;

use crate::blueprint::schema::audit_blueprint;
use crate::errors::AppError;
use crate::llm_client::{CompletionProvider, CompletionRequest, LlmError};
use crate::synthesis::prompts::{build_synthesis_prompt, synthesis_system};

/// Upper bound on the length of the generated brief.
pub const SYNTHESIS_MAX_TOKENS: u32 = 2000;
/// Non-zero so repeated calls produce varied phrasing.
pub const SYNTHESIS_TEMPERATURE: f32 = 0.7;

/// Returns true when the payload carries nothing to synthesize from.
pub fn is_empty_project_data(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.trim().is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Renders the project data as the indented JSON text embedded in the prompt.
pub fn render_project_data(project_data: &Value) -> Result<String, AppError> {
    serde_json::to_string_pretty(project_data)
        .context("Failed to serialize project data")
        .map_err(AppError::Internal)
}

/// Asks the completion provider for an implementation brief. Returns the trimmed text.
///
/// Any JSON is accepted; data that does not look like a blueprint is only logged.
pub async fn synthesize_prompt(
    project_data: &Value,
    project_json: &str,
    llm: &dyn CompletionProvider,
) -> Result<String, LlmError> {
    let audit = audit_blueprint(project_data);
    if !audit.resembles_blueprint() {
        debug!(
            fields_present = audit.fields_present,
            "Project data does not resemble a blueprint; synthesizing anyway"
        );
    }

    let request = CompletionRequest::new(synthesis_system(), build_synthesis_prompt(project_json))
        .max_tokens(SYNTHESIS_MAX_TOKENS)
        .temperature(SYNTHESIS_TEMPERATURE);

    let text = llm.complete(&request).await?;
    let prompt = text.trim();
    if prompt.is_empty() {
        return Err(LlmError::EmptyContent);
    }

    Ok(prompt.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_project_data_variants() {
        assert!(is_empty_project_data(&Value::Null));
        assert!(is_empty_project_data(&json!({})));
        assert!(is_empty_project_data(&json!([])));
        assert!(is_empty_project_data(&json!("  ")));
    }

    #[test]
    fn test_non_empty_project_data_variants() {
        assert!(!is_empty_project_data(&json!({"project_name": "Gear Swap"})));
        assert!(!is_empty_project_data(&json!(["anything"])));
        assert!(!is_empty_project_data(&json!(0)));
        assert!(!is_empty_project_data(&json!(false)));
    }

    #[test]
    fn test_render_project_data_is_indented() {
        let rendered = render_project_data(&json!({"project_name": "Gear Swap"})).unwrap();
        assert_eq!(rendered, "{\n  \"project_name\": \"Gear Swap\"\n}");
    }

    #[test]
    fn test_temperature_is_non_zero() {
        assert!(SYNTHESIS_TEMPERATURE > 0.0);
    }
}
