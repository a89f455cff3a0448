//! Unit conversion functions

use akademix_plugin::prelude::*;

use crate::category::{CategoryInfo, Tier};
use crate::format::format_significant;
use crate::helpers::{extract_input, extract_optional_number, extract_text};
use crate::registry::CATEGORIES;

fn text_list(items: &[&'static str]) -> Value {
    Value::List(items.iter().map(|s| Value::Text(s.to_string())).collect())
}

fn category_to_value(info: CategoryInfo) -> Value {
    Value::object([
        ("key", Value::Text(info.key.to_string())),
        ("label", Value::Text(info.label.to_string())),
        ("tier", Value::Text(match info.tier {
            Tier::Primary => "primary".to_string(),
            Tier::Secondary => "secondary".to_string(),
        })),
        ("base", Value::Text(info.base.to_string())),
        ("units", text_list(&info.units)),
    ])
}

/// Shared argument handling for `convert` and `convert_text`.
///
/// Input and result are both held at the context's working precision.
fn run_conversion(func: &str, args: &[Value], ctx: &EvalContext) -> Result<Option<Number>, AkademixError> {
    if args.len() < 4 {
        return Err(AkademixError::arg_count(func, 4, args.len()));
    }
    let precision = ctx.precision as usize;
    let value = extract_input(&args[0], func, "value", precision)?
        .map(|v| v.with_precision(precision));
    let from = extract_text(&args[1], func, "from_unit")?;
    let to = extract_text(&args[2], func, "to_unit")?;
    let category = extract_text(&args[3], func, "category")?;

    let result = CATEGORIES.convert(value.as_ref(), &from, &to, &category)?;
    Ok(result.map(|r| r.with_precision(precision)))
}

// ============ convert ============

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("value", "Number", "Value to convert; null or blank text means empty"),
    ArgMeta::required("from_unit", "Text", "Source unit (e.g., \"km\")"),
    ArgMeta::required("to_unit", "Text", "Target unit (e.g., \"mile\")"),
    ArgMeta::required("category", "Text", "Category key (e.g., \"length\")"),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(1, \"km\", \"m\", \"length\") → 1000",
    "convert(100, \"C\", \"K\", \"temp\") → 373.15",
    "convert(1, \"KB\", \"Byte\", \"data\") → 1024",
];

static CONVERT_RELATED: [&str; 3] = ["convert_text", "units_for", "list_categories"];

impl FunctionPlugin for Convert {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert",
            description: "Convert a value between two units of one category",
            usage: "convert(value, from_unit, to_unit, category)",
            args: &CONVERT_ARGS,
            returns: "Number",
            examples: &CONVERT_EXAMPLES,
            category: "units",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        match run_conversion("convert", args, ctx) {
            Ok(result) => result.into(),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ convert_text ============

pub struct ConvertText;

static CONVERT_TEXT_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("text", "Text", "Raw field text, parsed leniently"),
    ArgMeta::required("from_unit", "Text", "Source unit"),
    ArgMeta::required("to_unit", "Text", "Target unit"),
    ArgMeta::required("category", "Text", "Category key"),
];

static CONVERT_TEXT_EXAMPLES: [&str; 3] = [
    "convert_text(\"1\", \"km\", \"mile\", \"length\") → \"0.621373\"",
    "convert_text(\"\", \"km\", \"m\", \"length\") → \"\"",
    "convert_text(\"abc\", \"C\", \"F\", \"temp\") → \"\"",
];

static CONVERT_TEXT_RELATED: [&str; 2] = ["convert", "format_number"];

impl FunctionPlugin for ConvertText {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_text",
            description: "Convert field text and render the result for display",
            usage: "convert_text(text, from_unit, to_unit, category)",
            args: &CONVERT_TEXT_ARGS,
            returns: "Text",
            examples: &CONVERT_TEXT_EXAMPLES,
            category: "units",
            related: &CONVERT_TEXT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        match run_conversion("convert_text", args, ctx) {
            Ok(Some(n)) => Value::Text(format_significant(&n, ctx.display_digits)),
            Ok(None) => Value::Text(String::new()),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ list_categories ============

pub struct ListCategories;

static LIST_CATEGORIES_ARGS: [ArgMeta; 0] = [];

static LIST_CATEGORIES_EXAMPLES: [&str; 1] = [
    "list_categories() → [{key: \"length\", label: \"Length (m)\", ...}, ...]",
];

static LIST_CATEGORIES_RELATED: [&str; 2] = ["units_for", "convert"];

impl FunctionPlugin for ListCategories {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_categories",
            description: "All unit categories in display order, primary tabs first",
            usage: "list_categories()",
            args: &LIST_CATEGORIES_ARGS,
            returns: "List",
            examples: &LIST_CATEGORIES_EXAMPLES,
            category: "units",
            related: &LIST_CATEGORIES_RELATED,
        }
    }

    fn call(&self, _args: &[Value], _ctx: &EvalContext) -> Value {
        Value::List(CATEGORIES.infos().into_iter().map(category_to_value).collect())
    }
}

// ============ units_for ============

pub struct UnitsFor;

static UNITS_FOR_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("category", "Text", "Category key"),
];

static UNITS_FOR_EXAMPLES: [&str; 2] = [
    "units_for(\"temp\") → [\"C\", \"F\", \"K\", \"R\"]",
    "units_for(\"angle\") → [\"deg\", \"rad\", \"grad\"]",
];

static UNITS_FOR_RELATED: [&str; 1] = ["list_categories"];

impl FunctionPlugin for UnitsFor {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "units_for",
            description: "Unit symbols of one category, in display order",
            usage: "units_for(category)",
            args: &UNITS_FOR_ARGS,
            returns: "List",
            examples: &UNITS_FOR_EXAMPLES,
            category: "units",
            related: &UNITS_FOR_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(AkademixError::arg_count("units_for", 1, 0));
        }
        let key = match extract_text(&args[0], "units_for", "category") {
            Ok(k) => k,
            Err(e) => return Value::Error(e),
        };
        match CATEGORIES.units_for(&key) {
            Ok(units) => text_list(&units),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ format_number ============

pub struct FormatNumber;

static FORMAT_NUMBER_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Value to render"),
    ArgMeta::optional("digits", "Number", "Significant digits", "context display digits"),
];

static FORMAT_NUMBER_EXAMPLES: [&str; 2] = [
    "format_number(123.456789) → \"123.457\"",
    "format_number(2.5, 2) → \"2.5\"",
];

static FORMAT_NUMBER_RELATED: [&str; 1] = ["convert_text"];

impl FunctionPlugin for FormatNumber {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "format_number",
            description: "Round to significant digits and strip redundant zeros",
            usage: "format_number(value, [digits])",
            args: &FORMAT_NUMBER_ARGS,
            returns: "Text",
            examples: &FORMAT_NUMBER_EXAMPLES,
            category: "units",
            related: &FORMAT_NUMBER_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(AkademixError::arg_count("format_number", 1, 0));
        }
        let value = match extract_input(&args[0], "format_number", "value", ctx.precision as usize) {
            Ok(Some(n)) => n,
            Ok(None) => return Value::Text(String::new()),
            Err(e) => return Value::Error(e),
        };
        let digits = match extract_optional_number(args, 1) {
            Some(d) => match d.to_i64() {
                Some(d) if d >= 1 => d.min(17) as u32,
                _ => return Value::Error(AkademixError::domain_error(
                    format!("format_number(): digits must be a positive integer, got {}", d)
                )),
            },
            None => ctx.display_digits,
        };
        Value::Text(format_significant(&value, digits))
    }
}
