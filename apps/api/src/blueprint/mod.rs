// Blueprint Generator: project description in, structured project blueprint out.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod schema;
