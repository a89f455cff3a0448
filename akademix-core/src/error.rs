//! Structured errors
//!
//! Errors never crash a widget. They are values that travel back to the
//! caller with a machine-readable code and, where possible, a hint on how
//! to recover.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
    // Unit converter
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNREPRESENTED_UNIT: &str = "UNREPRESENTED_UNIT";
    pub const INVALID_TRANSITION: &str = "INVALID_TRANSITION";
    // Grade-point estimator
    pub const INVALID_GRADE: &str = "INVALID_GRADE";
    pub const INVALID_CREDITS: &str = "INVALID_CREDITS";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    // Focus timer
    pub const INVALID_MODE: &str = "INVALID_MODE";
    // Quick notes
    pub const EMPTY_NOTE: &str = "EMPTY_NOTE";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Computation continued with degraded result
    Warning,
    /// Computation failed for this request
    Error,
    /// Nothing further can be evaluated
    Fatal,
}

/// Structured error carried inside `Value::Error`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AkademixError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    pub severity: Severity,
}

impl AkademixError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Enter a plain decimal number such as 12.5")
    }

    pub fn div_zero() -> Self {
        Self::new(codes::DIV_ZERO, "Division by zero")
    }

    pub fn undefined_func(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FUNC, format!("Unknown function: {}", name))
            .with_suggestion("Use help() to list available functions")
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() expects {} arguments, got {}", func, expected, got))
            .with_suggestion(format!("Use help('{}') for usage", func))
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got))
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_severity(Severity::Fatal)
    }

    // ========== Converter Error Constructors ==========

    pub fn unknown_category(key: &str) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown unit category: {}", key))
            .with_suggestion("Use list_categories() to see registered categories")
    }

    pub fn unrepresented_unit(unit: &str, category: &str) -> Self {
        Self::new(codes::UNREPRESENTED_UNIT,
            format!("Unit '{}' has no rate in category '{}'", unit, category))
            .with_suggestion(format!("Use units_for('{}') to see valid units", category))
            .with_severity(Severity::Warning)
    }

    pub fn invalid_transition(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_TRANSITION, details.into())
    }

    // ========== Grade Error Constructors ==========

    pub fn invalid_grade(grade: &str) -> Self {
        Self::new(codes::INVALID_GRADE, format!("Unknown letter grade: {}", grade))
            .with_suggestion("Valid grades: A, A-, B+, B, B-, C+, C, D, E")
    }

    pub fn invalid_credits(credits: i64) -> Self {
        Self::new(codes::INVALID_CREDITS, format!("Unsupported credit load: {}", credits))
            .with_suggestion("Credits must be one of 1, 2, 3, 4, 6")
    }

    pub fn not_found(what: &str, id: u64) -> Self {
        Self::new(codes::NOT_FOUND, format!("No {} with id {}", what, id))
    }

    pub fn invalid_mode(mode: &str) -> Self {
        Self::new(codes::INVALID_MODE, format!("Unknown timer mode: {}", mode))
            .with_suggestion("Modes: focus, break")
    }

    pub fn empty_note() -> Self {
        Self::new(codes::EMPTY_NOTE, "A note needs a title or some content")
    }
}

impl std::fmt::Display for AkademixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for AkademixError {}

impl From<NumberError> for AkademixError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::parse_error(s),
            NumberError::DivisionByZero => Self::div_zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_suggestion() {
        let err = AkademixError::unknown_category("flux");
        let text = err.to_string();
        assert!(text.starts_with("[UNKNOWN_CATEGORY]"));
        assert!(text.contains("flux"));
        assert!(text.contains("list_categories"));
    }

    #[test]
    fn test_unrepresented_unit_is_warning() {
        let err = AkademixError::unrepresented_unit("furlong", "length");
        assert_eq!(err.severity, Severity::Warning);
        assert_eq!(err.code, codes::UNREPRESENTED_UNIT);
    }

    #[test]
    fn test_from_number_error() {
        let err: AkademixError = NumberError::DivisionByZero.into();
        assert_eq!(err.code, codes::DIV_ZERO);
        let err: AkademixError = NumberError::ParseError("x".into()).into();
        assert_eq!(err.code, codes::PARSE_ERROR);
    }

    #[test]
    fn test_serializes_without_empty_suggestion() {
        let err = AkademixError::div_zero();
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("suggestion"));
        assert!(json.contains("\"severity\":\"error\""));
    }
}
