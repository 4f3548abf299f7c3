// LLM prompt constants for the resume optimization pipeline.

/// Keyword extraction prompt. Replace `{job_description}` before sending.
pub const KEYWORDS_PROMPT_TEMPLATE: &str = r#"Extract the 10 most important keywords and skills from the job description below.
Prefer concrete skills, tools, technologies and qualifications over generic words.

Return a JSON ARRAY of strings and nothing else, for example:
["Rust", "PostgreSQL", "distributed systems", "code review", "mentoring"]

JOB DESCRIPTION:
{job_description}"#;

/// System prompt for the resume rewrite.
pub const RESUME_SYSTEM: &str = "You are an expert resume writer and ATS optimization specialist. \
    You improve how a candidate's real experience is presented for a specific role. \
    You never add experience, skills or credentials the candidate does not have.";

/// Resume rewrite prompt.
/// Replace: {truthfulness_instruction}, {keywords}, {job_description}, {resume}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"{truthfulness_instruction}

Rewrite the resume below so it targets the job description.
- Lead with the experience most relevant to the role
- Work these keywords in where the resume genuinely supports them: {keywords}
- Use strong action verbs and keep quantified results exactly as stated
- Keep a plain-text layout with clear section headings

JOB DESCRIPTION:
{job_description}

CURRENT RESUME:
{resume}

Return only the optimized resume text."#;

/// System prompt for the cover letter.
pub const COVER_LETTER_SYSTEM: &str = "You are an expert career coach who writes concise, \
    specific and professional cover letters grounded in the candidate's actual resume.";

/// Cover letter prompt.
/// Replace: {truthfulness_instruction}, {job_description}, {resume}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"{truthfulness_instruction}

Write a cover letter of 3 to 4 paragraphs for the job description below, based on the resume.
- Open with genuine interest in the role
- Connect two or three concrete achievements from the resume to the role's requirements
- Close with a short call to action
- Do not include placeholder addresses or dates

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}

Return only the cover letter text."#;
