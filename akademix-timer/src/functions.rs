//! Focus timer functions

use akademix_plugin::prelude::*;

use crate::mode::TimerMode;
use crate::timer::format_time;

/// Whole, non-negative seconds from a Number value
fn extract_seconds(value: &Value, func: &str) -> Result<u32, AkademixError> {
    match value {
        Value::Number(n) => n.to_i64()
            .and_then(|s| u32::try_from(s).ok())
            .ok_or_else(|| AkademixError::domain_error(
                format!("{}(): seconds must be a whole number of at least 0, got {}", func, n)
            )),
        Value::Error(e) => Err(e.clone()),
        other => Err(AkademixError::arg_type(func, "seconds", "Number", other.type_name())),
    }
}

fn extract_mode(value: &Value, func: &str) -> Result<TimerMode, AkademixError> {
    match value {
        Value::Text(s) => s.parse::<TimerMode>().map_err(AkademixError::from),
        Value::Error(e) => Err(e.clone()),
        other => Err(AkademixError::arg_type(func, "mode", "Text", other.type_name())),
    }
}

// ============ format_time ============

pub struct FormatTime;

static FORMAT_TIME_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("seconds", "Number", "Whole seconds left"),
];

static FORMAT_TIME_EXAMPLES: [&str; 2] = [
    "format_time(1500) → \"25:00\"",
    "format_time(65) → \"01:05\"",
];

static FORMAT_TIME_RELATED: [&str; 1] = ["session_length"];

impl FunctionPlugin for FormatTime {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "format_time",
            description: "Render seconds as MM:SS",
            usage: "format_time(seconds)",
            args: &FORMAT_TIME_ARGS,
            returns: "Text",
            examples: &FORMAT_TIME_EXAMPLES,
            category: "timer",
            related: &FORMAT_TIME_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(AkademixError::arg_count("format_time", 1, 0));
        }
        match extract_seconds(&args[0], "format_time") {
            Ok(s) => Value::Text(format_time(s)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ session_length ============

pub struct SessionLength;

static SESSION_LENGTH_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("mode", "Text", "\"focus\" or \"break\""),
];

static SESSION_LENGTH_EXAMPLES: [&str; 2] = [
    "session_length(\"focus\") → 1500",
    "session_length(\"break\") → 300",
];

static SESSION_LENGTH_RELATED: [&str; 1] = ["format_time"];

impl FunctionPlugin for SessionLength {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "session_length",
            description: "Full length of a timer session in seconds",
            usage: "session_length(mode)",
            args: &SESSION_LENGTH_ARGS,
            returns: "Number",
            examples: &SESSION_LENGTH_EXAMPLES,
            category: "timer",
            related: &SESSION_LENGTH_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(AkademixError::arg_count("session_length", 1, 0));
        }
        match extract_mode(&args[0], "session_length") {
            Ok(mode) => Value::Number(Number::from_i64(mode.duration_secs() as i64)),
            Err(e) => Value::Error(e),
        }
    }
}
