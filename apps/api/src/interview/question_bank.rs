//! Static interview question bank. Deterministic, no network, no storage.
//!
//! Lookup: normalize (trim + lowercase) → exact role match → first role in table order that
//! is contained in, or contains, the query → default set.

use serde::Serialize;

use crate::interview::Category::{self, Behavioral, Leadership, Situational, Technical};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankQuestion {
    pub question: &'static str,
    pub category: Category,
}

const fn q(question: &'static str, category: Category) -> BankQuestion {
    BankQuestion { question, category }
}

pub const DEFAULT_ROLE: &str = "default";

/// Roles in lookup order. Substring matching takes the first hit.
pub static ROLE_QUESTIONS: [(&str, [BankQuestion; 5]); 5] = [
    (
        "software engineer",
        [
            q(
                "Walk me through how you would design a URL shortening service that handles millions of requests per day.",
                Technical,
            ),
            q(
                "Tell me about a time you disagreed with a teammate on a technical approach. How did you resolve it?",
                Behavioral,
            ),
            q(
                "A production release you shipped is causing intermittent errors and the on-call engineer is unreachable. What do you do?",
                Situational,
            ),
            q(
                "Describe a time you mentored a less experienced engineer or raised the bar for your team's code quality.",
                Leadership,
            ),
            q(
                "How do you decide between optimizing existing code and rewriting it? Give an example.",
                Technical,
            ),
        ],
    ),
    (
        "product manager",
        [
            q(
                "Tell me about a product you launched from idea to release. What was your role at each stage?",
                Behavioral,
            ),
            q(
                "How would you prioritize a backlog when engineering capacity is cut by half for a quarter?",
                Situational,
            ),
            q(
                "Which metrics would you use to measure the success of a new onboarding flow, and why?",
                Technical,
            ),
            q(
                "Describe a time you aligned stakeholders with conflicting goals around a single roadmap.",
                Leadership,
            ),
            q(
                "Tell me about a feature you decided not to build. How did you reach that decision?",
                Behavioral,
            ),
        ],
    ),
    (
        "data scientist",
        [
            q(
                "How would you detect and handle data leakage when building a predictive model?",
                Technical,
            ),
            q(
                "Explain a complex model you built to a non-technical stakeholder. How did you make it understandable?",
                Behavioral,
            ),
            q(
                "An A/B test shows a significant lift, but the product team suspects novelty effects. What do you do next?",
                Situational,
            ),
            q(
                "How do you choose between a simpler interpretable model and a more accurate black-box model?",
                Technical,
            ),
            q(
                "Describe a time you changed how your team approached experimentation or data quality.",
                Leadership,
            ),
        ],
    ),
    (
        "marketing manager",
        [
            q(
                "Tell me about a campaign that underperformed. What did you learn and change?",
                Behavioral,
            ),
            q(
                "How would you allocate a fixed budget across channels for a product launch in a new market?",
                Situational,
            ),
            q(
                "Which metrics do you track to evaluate brand awareness versus demand generation?",
                Technical,
            ),
            q(
                "Describe how you built or grew a marketing team and set its priorities.",
                Leadership,
            ),
            q(
                "Tell me about a time you used customer research to reposition a product.",
                Behavioral,
            ),
        ],
    ),
    (
        "sales representative",
        [
            q(
                "Tell me about the hardest deal you closed. What made the difference?",
                Behavioral,
            ),
            q(
                "A prospect says your product is too expensive compared to a competitor. How do you respond?",
                Situational,
            ),
            q(
                "How do you qualify leads and manage your pipeline to hit a quarterly quota?",
                Technical,
            ),
            q(
                "Describe a time you shared a sales technique that improved your team's results.",
                Leadership,
            ),
            q(
                "Tell me about a time you lost a deal. What did you do afterwards?",
                Behavioral,
            ),
        ],
    ),
];

pub static DEFAULT_QUESTIONS: [BankQuestion; 5] = [
    q(
        "Tell me about yourself and why you are interested in this role.",
        Behavioral,
    ),
    q(
        "Describe a challenging project you worked on and how you handled it.",
        Behavioral,
    ),
    q(
        "How would you handle a situation where you had to meet a tight deadline with limited resources?",
        Situational,
    ),
    q(
        "What skills or tools do you consider essential for this position, and how have you used them?",
        Technical,
    ),
    q(
        "Tell me about a time you took initiative or led others toward a goal.",
        Leadership,
    ),
];

/// Result of a bank lookup: the role key that matched, or `DEFAULT_ROLE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankMatch {
    pub role: &'static str,
    pub questions: &'static [BankQuestion],
}

pub fn normalize_role(role: &str) -> String {
    role.trim().to_lowercase()
}

pub fn lookup(role: &str) -> BankMatch {
    let query = normalize_role(role);

    if !query.is_empty() {
        if let Some((name, questions)) = ROLE_QUESTIONS.iter().find(|(name, _)| *name == query) {
            return BankMatch {
                role: *name,
                questions,
            };
        }

        if let Some((name, questions)) = ROLE_QUESTIONS
            .iter()
            .find(|(name, _)| query.contains(name) || name.contains(query.as_str()))
        {
            return BankMatch {
                role: *name,
                questions,
            };
        }
    }

    BankMatch {
        role: DEFAULT_ROLE,
        questions: &DEFAULT_QUESTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(found: &BankMatch) -> Vec<Category> {
        found.questions.iter().map(|q| q.category).collect()
    }

    #[test]
    fn test_software_engineer_exact_match() {
        let found = lookup("Software Engineer");
        assert_eq!(found.role, "software engineer");
        assert_eq!(found.questions, &ROLE_QUESTIONS[0].1);
        assert_eq!(
            categories(&found),
            vec![Technical, Behavioral, Situational, Leadership, Technical]
        );
    }

    #[test]
    fn test_every_known_role_matches_itself_verbatim() {
        for (name, questions) in ROLE_QUESTIONS.iter() {
            let padded = format!("  {}  ", name.to_uppercase());
            let found = lookup(&padded);
            assert_eq!(found.role, *name);
            assert_eq!(found.questions, questions);
        }
    }

    #[test]
    fn test_unknown_role_returns_default() {
        let found = lookup("Astronaut");
        assert_eq!(found.role, DEFAULT_ROLE);
        assert_eq!(found.questions, &DEFAULT_QUESTIONS);
    }

    #[test]
    fn test_unrelated_roles_all_return_default() {
        for role in ["Chef", "pilot", "Underwater basket weaver", "nurse practitioner"] {
            assert_eq!(lookup(role).questions, &DEFAULT_QUESTIONS, "role: {role}");
        }
    }

    #[test]
    fn test_query_containing_role_matches_role() {
        let found = lookup("Senior Software Engineer II");
        assert_eq!(found.role, "software engineer");
    }

    #[test]
    fn test_query_contained_in_role_matches_first_in_table_order() {
        // "manager" is inside both "product manager" and "marketing manager".
        assert_eq!(lookup("Manager").role, "product manager");
        assert_eq!(lookup("data").role, "data scientist");
    }

    #[test]
    fn test_empty_query_returns_default() {
        assert_eq!(lookup("   ").role, DEFAULT_ROLE);
        assert_eq!(lookup("").questions, &DEFAULT_QUESTIONS);
    }

    #[test]
    fn test_every_set_has_five_questions() {
        assert!(ROLE_QUESTIONS.iter().all(|(_, qs)| qs.len() == 5));
        assert_eq!(DEFAULT_QUESTIONS.len(), 5);
    }
}
