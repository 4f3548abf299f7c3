// LLM prompt constants for interview question generation.

/// Question generation prompt. Replace `{job_role}` and `{company_clause}` before sending.
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate exactly 5 interview questions for a {job_role} position{company_clause}.

Mix the categories: include behavioral, technical, situational and leadership questions.
Behavioral questions should invite STAR-method answers (Situation, Task, Action, Result).

Return a JSON ARRAY of exactly 5 objects with this EXACT schema:
[
  {"question": "Tell me about a time you ...", "category": "behavioral"}
]

"category" MUST be one of: "behavioral", "technical", "situational", "leadership"."#;

/// Appended after the role when a company name is given. Replace `{company_name}`.
pub const COMPANY_CLAUSE_TEMPLATE: &str = " at {company_name}";
