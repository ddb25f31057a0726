// Prompt Synthesizer: project blueprint in, coding-assistant prompt out.

pub mod handlers;
pub mod prompts;
pub mod synthesizer;
