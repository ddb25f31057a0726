// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Persona shared by both the blueprint and the synthesis system prompts.
pub const ARCHITECT_PERSONA: &str = "You are a senior software architect \
    that makes the best choices and provides the best possible advice.";

/// Closing instruction appended to prompts that expect structured, actionable output.
pub const PRECISION_INSTRUCTION: &str = "\
    Be technically precise and provide actionable, implementation-focused information \
    rather than general advice.";
