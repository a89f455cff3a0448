//! Argument extraction shared by the unit functions

use akademix_core::{AkademixError, Number, Value};

use crate::format::parse_input_with_precision;

/// Extract a Text string from a Value
pub fn extract_text(value: &Value, func: &str, arg: &str) -> Result<String, AkademixError> {
    match value {
        Value::Text(s) => Ok(s.clone()),
        Value::Null => Err(AkademixError::arg_type(func, arg, "Text", "Null")),
        Value::Error(e) => Err(e.clone()),
        other => Err(AkademixError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Value field that may be empty.
///
/// Null, blank text and unparseable text all mean "no value". Text is
/// parsed at `precision` decimal digits.
pub fn extract_input(
    value: &Value,
    func: &str,
    arg: &str,
    precision: usize,
) -> Result<Option<Number>, AkademixError> {
    match value {
        Value::Number(n) => Ok(Some(n.clone())),
        Value::Null => Ok(None),
        Value::Text(s) => Ok(parse_input_with_precision(s, precision)),
        Value::Error(e) => Err(e.clone()),
        other => Err(AkademixError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract optional Number (may be missing or null)
pub fn extract_optional_number(args: &[Value], index: usize) -> Option<Number> {
    args.get(index).and_then(|v| match v {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use akademix_core::codes;

    #[test]
    fn test_extract_text() {
        let val = Value::Text("km".to_string());
        assert_eq!(extract_text(&val, "test", "arg").unwrap(), "km");

        let err = extract_text(&Value::Bool(true), "test", "arg").unwrap_err();
        assert_eq!(err.code, codes::ARG_TYPE);
    }

    #[test]
    fn test_extract_input() {
        let n = Number::from_i64(5);
        assert_eq!(extract_input(&Value::Number(n.clone()), "f", "v", 50).unwrap(), Some(n));
        assert_eq!(extract_input(&Value::Null, "f", "v", 50).unwrap(), None);
        assert_eq!(extract_input(&Value::Text("  ".into()), "f", "v", 50).unwrap(), None);
        assert_eq!(extract_input(&Value::Text("x1".into()), "f", "v", 50).unwrap(), None);
        assert_eq!(
            extract_input(&Value::Text("2.5".into()), "f", "v", 50).unwrap(),
            Some(Number::from_decimal(25, 1))
        );
        assert!(extract_input(&Value::List(vec![]), "f", "v", 50).is_err());

        let wide = extract_input(&Value::Text("1/3".into()), "f", "v", 80).unwrap().unwrap();
        assert_eq!(wide.with_precision(50), Number::from_str("1/3").unwrap());
        assert_ne!(wide, Number::from_str("1/3").unwrap());
    }

    #[test]
    fn test_extract_optional_number() {
        let args = vec![Value::Null, Value::Number(Number::from_i64(3))];
        assert_eq!(extract_optional_number(&args, 0), None);
        assert_eq!(extract_optional_number(&args, 1), Some(Number::from_i64(3)));
        assert_eq!(extract_optional_number(&args, 2), None);
    }
}
