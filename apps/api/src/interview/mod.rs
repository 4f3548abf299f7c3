// Interview preparation: model-generated questions with a fixed fallback, and a static bank.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod question_bank;

/// Interview question category. Serialized lowercase; parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    Behavioral,
    Technical,
    Situational,
    Leadership,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Behavioral => "behavioral",
            Category::Technical => "technical",
            Category::Situational => "situational",
            Category::Leadership => "leadership",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown question category '{0}'")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "behavioral" => Ok(Category::Behavioral),
            "technical" => Ok(Category::Technical),
            "situational" => Ok(Category::Situational),
            "leadership" => Ok(Category::Leadership),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
