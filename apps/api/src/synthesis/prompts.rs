// All LLM prompt constants for the Prompt Synthesizer.

use crate::llm_client::prompts::ARCHITECT_PERSONA;

/// System prompt for implementation-brief synthesis. Plain text output, no JSON mode.
pub fn synthesis_system() -> String {
    format!(
        "{ARCHITECT_PERSONA} You write clear, well-organized implementation briefs \
        that AI coding assistants can follow step by step. Respond in markdown."
    )
}

/// Synthesis prompt template. Replace `{project_json}` before sending.
pub const SYNTHESIS_PROMPT_TEMPLATE: &str = r#"Below is a structured project blueprint in JSON format.
Turn it into a natural-language implementation prompt that can be handed directly to an AI coding assistant.

The prompt MUST:
1. Open with a high-level description of the project and its purpose
2. Give specific implementation instructions for each main feature
3. Reference the recommended technologies and explain where each one is used
4. Include styling guidance derived from the color schema and the fonts
5. Call out the potential challenges and how to mitigate them while building
6. Order the work logically, so that foundations come before the features built on them

Format the result in markdown with headings and lists. Do not return JSON.

PROJECT BLUEPRINT:
{project_json}"#;

pub fn build_synthesis_prompt(project_json: &str) -> String {
    SYNTHESIS_PROMPT_TEMPLATE.replace("{project_json}", project_json)
}
