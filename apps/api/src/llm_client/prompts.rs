// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Instruction that enforces a bare JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Respond with the JSON object only. \
Do NOT wrap it in markdown code fences. \
Do NOT include any text before or after the JSON object.";

/// Instruction against echoing the schema's angle-bracket placeholders.
pub const NO_PLACEHOLDERS_INSTRUCTION: &str = "\
Don't include placeholders like <...> in your response, replace them with actual content.";
