//! Argument extraction for grade functions

use akademix_core::{AkademixError, Number, Value};

use crate::grade::Grade;

/// Extract a letter grade from a Text value
pub fn extract_grade(value: &Value, func: &str, arg: &str) -> Result<Grade, AkademixError> {
    match value {
        Value::Text(s) => s.parse::<Grade>().map_err(AkademixError::from),
        Value::Error(e) => Err(e.clone()),
        other => Err(AkademixError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Extract a whole credit count from a Number value, or from the text of
/// a credit selector such as `"3"`
pub fn extract_credits(value: &Value, func: &str, arg: &str) -> Result<i64, AkademixError> {
    match value {
        Value::Number(n) => whole(n, func, arg),
        Value::Text(s) => {
            let n = Number::from_str(s).map_err(|_| AkademixError::arg_type(func, arg, "Number", "Text"))?;
            whole(&n, func, arg)
        }
        Value::Error(e) => Err(e.clone()),
        other => Err(AkademixError::arg_type(func, arg, "Number", other.type_name())),
    }
}

fn whole(n: &Number, func: &str, arg: &str) -> Result<i64, AkademixError> {
    n.to_i64()
        .filter(|_| n.is_integer())
        .ok_or_else(|| AkademixError::domain_error(
            format!("{}(): {} must be a whole number, got {}", func, arg, n)
        ))
}
