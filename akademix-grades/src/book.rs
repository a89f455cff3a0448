//! Grade book: the course list behind the GPA estimate
//!
//! `gpa = Σ(credits × points) / Σ credits`, or `0` for an empty book.

use akademix_core::Number;
use serde::Serialize;
use tracing::debug;

use crate::grade::{validate_credits, Grade};
use crate::GradeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: u64,
    pub name: String,
    pub credits: u32,
    pub grade: Grade,
}

impl Course {
    /// Credit-weighted points
    pub fn weighted_points(&self) -> Number {
        Number::from_i64(self.credits as i64).mul(&self.grade.points())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GradeBook {
    courses: Vec<Course>,
    next_id: u64,
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course and return its id
    pub fn add(&mut self, name: &str, credits: i64, grade: Grade) -> Result<u64, GradeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GradeError::EmptyName);
        }
        let credits = validate_credits(credits)?;

        self.next_id += 1;
        let id = self.next_id;
        self.courses.push(Course { id, name: name.to_string(), credits, grade });
        debug!(id, name, credits, grade = %grade, "course added");
        Ok(id)
    }

    pub fn remove(&mut self, id: u64) -> Result<Course, GradeError> {
        let index = self.courses.iter()
            .position(|c| c.id == id)
            .ok_or(GradeError::CourseNotFound(id))?;
        Ok(self.courses.remove(index))
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    pub fn total_points(&self) -> Number {
        self.courses.iter()
            .fold(Number::zero(), |acc, c| acc.add(&c.weighted_points()))
    }

    pub fn gpa(&self) -> Number {
        let credits = self.total_credits();
        if credits == 0 {
            return Number::zero();
        }
        self.total_points()
            .checked_div(&Number::from_i64(credits as i64))
            .unwrap_or_else(|_| Number::zero())
    }

    /// GPA rendered with two decimals, e.g. `3.45`
    pub fn gpa_display(&self) -> String {
        self.gpa().to_fixed(2)
    }
}
