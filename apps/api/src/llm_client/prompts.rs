// Shared prompt fragments. Each feature module keeps its own prompts.rs next to it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to every prompt that rewrites a candidate's own material.
pub const TRUTHFULNESS_INSTRUCTION: &str = "\
    CRITICAL: Use only facts present in the candidate's resume. \
    Do NOT invent employers, titles, dates, degrees, certifications or metrics. \
    Rephrase and reorder, never fabricate.";
