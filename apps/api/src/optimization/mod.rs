// Resume optimization: keyword extraction, match scoring, resume rewrite, cover letter.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod keywords;
pub mod optimizer;
pub mod prompts;
pub mod scoring;
