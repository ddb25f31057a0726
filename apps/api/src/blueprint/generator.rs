//! Blueprint Generator: one JSON-mode completion call per project description.

use serde_json::Value;
use tracing::{info, warn};

use crate::blueprint::prompts::{blueprint_system, build_blueprint_prompt};
use crate::blueprint::schema::{audit_blueprint, SchemaAudit};
use crate::llm_client::{parse_json_content, CompletionProvider, CompletionRequest, LlmError};

/// The model's blueprint, exactly as returned, plus the audit of its shape.
#[derive(Debug)]
pub struct GeneratedBlueprint {
    pub blueprint: Value,
    pub audit: SchemaAudit,
}

/// Generates a project blueprint for a free-text description.
///
/// The returned JSON is never rewritten. Schema drift is audited and logged,
/// and the best-effort data is still handed back to the caller.
pub async fn generate_blueprint(
    message: &str,
    llm: &dyn CompletionProvider,
) -> Result<GeneratedBlueprint, LlmError> {
    let request = CompletionRequest::new(blueprint_system(), build_blueprint_prompt(message))
        .json_mode();

    let text = llm.complete(&request).await?;
    let blueprint = parse_json_content(&text)?;

    let audit = audit_blueprint(&blueprint);
    if audit.is_conformant() {
        info!("Blueprint generated with all {} fields", audit.fields_present);
    } else {
        warn!(
            issues = audit.issues.len(),
            "Blueprint deviates from schema: {}",
            audit.summary()
        );
    }

    Ok(GeneratedBlueprint { blueprint, audit })
}
