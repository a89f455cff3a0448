//! Akademix Grades - Grade-point (GPA) estimator
//!
//! A [`GradeBook`] holds courses with a credit load and a letter grade and
//! reports the credit-weighted average on the 4.0 scale.

mod error;
mod grade;
mod book;
mod helpers;
mod functions;

pub use error::GradeError;
pub use grade::{Grade, ALLOWED_CREDITS, validate_credits};
pub use book::{Course, GradeBook};

use akademix_plugin::PluginRegistry;

/// Load grade functions into registry
pub fn load_grades_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(functions::GradePoints)
        .with_function(functions::Gpa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_grades_library() {
        let registry = load_grades_library(PluginRegistry::new());
        assert_eq!(registry.function_count(), 2);
        assert!(registry.get_function("gpa").is_some());
    }
}
