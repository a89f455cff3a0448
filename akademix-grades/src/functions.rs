//! Grade-point functions

use akademix_plugin::prelude::*;

use crate::book::{Course, GradeBook};
use crate::helpers::{extract_credits, extract_grade};

// ============ grade_points ============

pub struct GradePoints;

static GRADE_POINTS_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("grade", "Text", "Letter grade: A, A-, B+, B, B-, C+, C, D or E"),
];

static GRADE_POINTS_EXAMPLES: [&str; 2] = [
    "grade_points(\"A-\") → 3.7",
    "grade_points(\"E\") → 0",
];

static GRADE_POINTS_RELATED: [&str; 1] = ["gpa"];

impl FunctionPlugin for GradePoints {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "grade_points",
            description: "Points of a letter grade on the 4.0 scale",
            usage: "grade_points(grade)",
            args: &GRADE_POINTS_ARGS,
            returns: "Number",
            examples: &GRADE_POINTS_EXAMPLES,
            category: "grades",
            related: &GRADE_POINTS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(AkademixError::arg_count("grade_points", 1, 0));
        }
        match extract_grade(&args[0], "grade_points", "grade") {
            Ok(grade) => Value::Number(grade.points()),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ gpa ============

pub struct Gpa;

static GPA_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("courses", "List", "Objects with credits, grade and an optional name"),
];

static GPA_EXAMPLES: [&str; 2] = [
    "gpa([{credits: 3, grade: \"A\"}, {credits: 2, grade: \"B\"}]) → {gpa: 3.6, display: \"3.60\", ...}",
    "gpa([]) → {gpa: 0, display: \"0.00\", ...}",
];

static GPA_RELATED: [&str; 1] = ["grade_points"];

fn course_to_value(course: &Course) -> Value {
    Value::object([
        ("name", Value::Text(course.name.clone())),
        ("credits", Value::Number(Number::from_i64(course.credits as i64))),
        ("grade", Value::Text(course.grade.symbol().to_string())),
        ("points", Value::Number(course.weighted_points())),
    ])
}

fn build_book(courses: &[Value]) -> Result<GradeBook, AkademixError> {
    let mut book = GradeBook::new();
    for (i, course) in courses.iter().enumerate() {
        let fields = match course {
            Value::Object(map) => map,
            other => return Err(AkademixError::arg_type("gpa", "courses", "List of Object", other.type_name())),
        };
        let credits = fields.get("credits")
            .ok_or_else(|| AkademixError::domain_error(format!("gpa(): course {} has no credits", i + 1)))
            .and_then(|v| extract_credits(v, "gpa", "credits"))?;
        let grade = fields.get("grade")
            .ok_or_else(|| AkademixError::domain_error(format!("gpa(): course {} has no grade", i + 1)))
            .and_then(|v| extract_grade(v, "gpa", "grade"))?;
        let name = match fields.get("name").and_then(Value::as_text) {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => format!("course {}", i + 1),
        };
        book.add(&name, credits, grade)?;
    }
    Ok(book)
}

impl FunctionPlugin for Gpa {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "gpa",
            description: "Credit-weighted grade point average",
            usage: "gpa(courses)",
            args: &GPA_ARGS,
            returns: "Object",
            examples: &GPA_EXAMPLES,
            category: "grades",
            related: &GPA_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(AkademixError::arg_count("gpa", 1, 0));
        }
        let courses = match &args[0] {
            Value::List(items) => items,
            Value::Error(e) => return Value::Error(e.clone()),
            other => return Value::Error(AkademixError::arg_type("gpa", "courses", "List", other.type_name())),
        };
        let book = match build_book(courses) {
            Ok(b) => b,
            Err(e) => return Value::Error(e),
        };

        Value::object([
            ("gpa", Value::Number(book.gpa())),
            ("display", Value::Text(book.gpa_display())),
            ("total_credits", Value::Number(Number::from_i64(book.total_credits() as i64))),
            ("total_points", Value::Number(book.total_points())),
            ("count", Value::Number(Number::from_i64(book.len() as i64))),
            ("courses", Value::List(book.courses().iter().map(course_to_value).collect())),
        ])
    }
}
