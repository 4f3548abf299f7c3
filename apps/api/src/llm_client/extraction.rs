//! Tagged result for "expect JSON from the model, substitute a fixed value otherwise".

use tracing::{info, warn};

/// Outcome of parsing structured model output.
///
/// Both arms carry a usable value. `Fallback` means the model's text could not be used and a
/// fixed substitute was returned instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<T> {
    Parsed(T),
    Fallback(T),
}

impl<T> Extraction<T> {
    /// Parses `text` with `parse`; on `Err` logs the reason and substitutes `fallback()`.
    pub fn parse_or_fallback<E, P, F>(what: &str, text: &str, parse: P, fallback: F) -> Self
    where
        E: std::fmt::Display,
        P: FnOnce(&str) -> Result<T, E>,
        F: FnOnce() -> T,
    {
        match parse(text) {
            Ok(value) => {
                info!("Parsed {what} from model output");
                Extraction::Parsed(value)
            }
            Err(e) => {
                warn!("Could not parse {what} from model output ({e}); using fallback");
                Extraction::Fallback(fallback())
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback(_))
    }

    /// "model" or "fallback", for logs.
    pub fn source(&self) -> &'static str {
        match self {
            Extraction::Parsed(_) => "model",
            Extraction::Fallback(_) => "fallback",
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Extraction::Parsed(v) | Extraction::Fallback(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Extraction::Parsed(v) | Extraction::Fallback(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_number(text: &str) -> Result<u32, std::num::ParseIntError> {
        text.trim().parse()
    }

    #[test]
    fn test_parsed_arm_keeps_model_value() {
        let result = Extraction::parse_or_fallback("number", " 42 ", parse_number, || 7);
        assert_eq!(result, Extraction::Parsed(42));
        assert!(!result.is_fallback());
        assert_eq!(result.source(), "model");
    }

    #[test]
    fn test_fallback_arm_on_parse_error() {
        let result = Extraction::parse_or_fallback("number", "forty-two", parse_number, || 7);
        assert!(result.is_fallback());
        assert_eq!(result.source(), "fallback");
        assert_eq!(*result.value(), 7);
        assert_eq!(result.into_inner(), 7);
    }
}
