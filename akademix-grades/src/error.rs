//! Grade book errors

use akademix_core::AkademixError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("unknown letter grade: {0}")]
    UnknownGrade(String),

    /// Credit load outside the offered values
    #[error("{0} credits is not an offered course load")]
    InvalidCredits(i64),

    #[error("course name must not be empty")]
    EmptyName,

    #[error("no course with id {0}")]
    CourseNotFound(u64),
}

impl From<GradeError> for AkademixError {
    fn from(err: GradeError) -> Self {
        match err {
            GradeError::UnknownGrade(g) => AkademixError::invalid_grade(&g),
            GradeError::InvalidCredits(c) => AkademixError::invalid_credits(c),
            e @ GradeError::EmptyName => AkademixError::domain_error(e.to_string()),
            GradeError::CourseNotFound(id) => AkademixError::not_found("course", id),
        }
    }
}
