//! JSON-RPC request handling and tool implementations

use std::sync::Arc;

use akademix_core::{AkademixError, Number, Value};
use akademix_plugin::{EvalContext, PluginRegistry};
use akademix_notes::{note_to_value, NoteBook};
use akademix_timer::{format_time, FocusTimer, TimerError, TimerMode};
use akademix_units::{format_result, ConverterWidget, UnitsError, CATEGORIES};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};

use crate::config::Config;

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "akademix";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        McpError { code, message: message.into(), data: None }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

impl McpResponse {
    pub fn failure(id: Option<JsonValue>, error: McpError) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }
}

/// Registry with every widget library loaded
pub fn standard_registry() -> PluginRegistry {
    let registry = PluginRegistry::new();
    let registry = akademix_units::load_units_library(registry);
    let registry = akademix_grades::load_grades_library(registry);
    let registry = akademix_timer::load_timer_library(registry);
    akademix_notes::load_notes_library(registry)
}

/// One server process: function registry plus the stateful widget sessions
pub struct Server {
    ctx: EvalContext,
    converter: ConverterWidget<'static>,
    timer: FocusTimer,
    notes: NoteBook,
}

impl Server {
    pub fn new(config: Config) -> Result<Self, UnitsError> {
        let ctx = EvalContext::new(Arc::new(standard_registry()))
            .with_precision(config.precision)
            .with_display_digits(config.display_digits);
        let converter = ConverterWidget::new(&CATEGORIES)?
            .with_display_digits(config.display_digits)
            .with_precision(config.precision as usize);
        info!(
            functions = ctx.registry.function_count(),
            display_digits = ctx.display_digits,
            "server initialized"
        );
        Ok(Server { ctx, converter, timer: FocusTimer::new(), notes: NoteBook::new() })
    }

    pub fn handle_request(&mut self, request: &McpRequest) -> McpResponse {
        if request.jsonrpc != "2.0" {
            return McpResponse::failure(
                request.id.clone(),
                McpError::new(INVALID_REQUEST, format!("Unsupported jsonrpc version: {}", request.jsonrpc)),
            );
        }

        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => handle_initialize(&request.params),
            "initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => handle_tools_list(),
            "tools/call" => self.handle_tool_call(&request.params),

            _ => Err(McpError::new(METHOD_NOT_FOUND, format!("Method not found: {}", request.method))),
        };

        match result {
            Ok(r) => McpResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id.clone(),
                result: Some(r),
                error: None,
            },
            Err(e) => McpResponse::failure(request.id.clone(), e),
        }
    }

    fn handle_tool_call(&mut self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or(json!({}));
        debug!(tool = name, "tool call");

        match name {
            "convert" => self.tool_convert(&args),
            "list_categories" => Ok(self.tool_function("list_categories", vec![])),
            "units_for" => {
                let category = required_text(&args, "category")?;
                Ok(self.tool_function("units_for", vec![Value::Text(category)]))
            }
            "gpa" => {
                let courses = args.get("courses")
                    .ok_or_else(|| McpError::invalid_params("Missing courses argument"))?;
                Ok(self.tool_function("gpa", vec![json_to_value(courses)]))
            }
            "converter" => self.tool_converter(&args),
            "timer" => self.tool_timer(&args),
            "notes" => self.tool_notes(&args),
            "help" => {
                let name = args.get("name").and_then(|v| v.as_str());
                let help = self.ctx.registry.help(name);
                Ok(json!({
                    "content": [{ "type": "text", "text": format_help(&help) }],
                    "data": value_to_json(&help)
                }))
            }
            "list_functions" => {
                let category = args.get("category").and_then(|v| v.as_str());
                let functions = self.ctx.registry.list_functions(category);
                Ok(json!({
                    "content": [{ "type": "text", "text": "Functions listed" }],
                    "data": value_to_json(&functions)
                }))
            }
            _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
        }
    }

    /// Call a registry function and wrap its value as a tool result
    fn tool_function(&self, name: &str, args: Vec<Value>) -> JsonValue {
        let value = self.ctx.registry.call_function(name, &args, &self.ctx);
        tool_result(&value, value.to_string())
    }

    fn tool_convert(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let value = args.get("value").map(json_to_value).unwrap_or(Value::Null);
        let from = required_text(args, "from_unit")?;
        let to = required_text(args, "to_unit")?;
        let category = required_text(args, "category")?;

        let call_args = [value.clone(), Value::Text(from.clone()), Value::Text(to.clone()), Value::Text(category)];
        let result = self.ctx.registry.call_function("convert", &call_args, &self.ctx);

        let text = match &result {
            Value::Error(e) => e.to_string(),
            Value::Number(n) => {
                let shown = format_result(Some(n), self.ctx.display_digits);
                format!("{} {} = {} {}", value, from, shown, to)
            }
            _ => String::new(),
        };
        Ok(tool_result(&result, text))
    }

    fn tool_converter(&mut self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let action = required_text(args, "action")?;
        let converter = &mut self.converter;

        let outcome = match action.as_str() {
            "state" => Ok(()),
            "select_tab" => converter.select_tab(&required_text(args, "value")?),
            "more" => {
                converter.open_grid();
                Ok(())
            }
            "select_tile" => converter.select_tile(&required_text(args, "value")?),
            "back" => converter.back(),
            "input" => converter.set_input(&raw_text(args, "value")),
            "from_unit" => converter.set_from_unit(&required_text(args, "value")?),
            "to_unit" => converter.set_to_unit(&required_text(args, "value")?),
            "swap" => converter.swap(),
            other => return Err(McpError::invalid_params(format!("Unknown converter action: {}", other))),
        };

        let state = serde_json::to_value(converter.state())
            .map_err(|e| McpError::new(INTERNAL_ERROR, e.to_string()))?;

        match outcome {
            Ok(()) => {
                let text = format!(
                    "[{}] {}: {} {} = {} {}",
                    converter.view(),
                    converter.category().label,
                    converter.input(),
                    converter.from_unit(),
                    converter.result(),
                    converter.to_unit(),
                );
                Ok(json!({
                    "content": [{ "type": "text", "text": text }],
                    "state": state
                }))
            }
            Err(e) => {
                warn!(action = %action, error = %e, "converter action rejected");
                let err: AkademixError = e.into();
                Ok(json!({
                    "content": [{ "type": "text", "text": err.to_string() }],
                    "state": state,
                    "error": { "code": err.code, "message": err.message },
                    "isError": true
                }))
            }
        }
    }

    fn tool_timer(&mut self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let action = required_text(args, "action")?;
        let timer = &mut self.timer;

        let mut finished = false;
        match action.as_str() {
            "state" => {}
            "toggle" => timer.toggle(),
            "reset" => timer.reset(),
            "switch_mode" => {
                let mode: TimerMode = required_text(args, "value")?
                    .parse()
                    .map_err(|e: TimerError| McpError::invalid_params(e.to_string()))?;
                timer.switch_mode(mode);
            }
            "tick" => {
                let seconds = match args.get("value") {
                    None | Some(JsonValue::Null) => 1,
                    Some(v) => v.as_u64()
                        .and_then(|n| u32::try_from(n).ok())
                        .ok_or_else(|| McpError::invalid_params("tick value must be a whole number of seconds"))?,
                };
                finished = timer.advance(seconds);
            }
            other => return Err(McpError::invalid_params(format!("Unknown timer action: {}", other))),
        }

        let state = serde_json::to_value(timer.state())
            .map_err(|e| McpError::new(INTERNAL_ERROR, e.to_string()))?;
        let status = if timer.is_active() { "running" } else { "paused" };
        let text = format!("[{}] {} {}", timer.mode(), format_time(timer.remaining()), status);
        Ok(json!({
            "content": [{ "type": "text", "text": text }],
            "state": state,
            "finished": finished
        }))
    }

    fn tool_notes(&mut self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let action = required_text(args, "action")?;
        let notes = &mut self.notes;

        let outcome = match action.as_str() {
            "list" => Ok(()),
            "add" => notes.add(&raw_text(args, "title"), &raw_text(args, "content")).map(|_| ()),
            "delete" => {
                let id = args.get("id")
                    .and_then(|v| v.as_u64())
                    .ok_or_else(|| McpError::invalid_params("Missing id argument"))?;
                notes.remove(id).map(|_| ())
            }
            other => return Err(McpError::invalid_params(format!("Unknown notes action: {}", other))),
        };

        let listed = Value::List(notes.notes().iter().map(note_to_value).collect());
        match outcome {
            Ok(()) => {
                let text = format!("{} notes saved", notes.len());
                Ok(json!({
                    "content": [{ "type": "text", "text": text }],
                    "data": value_to_json(&listed)
                }))
            }
            Err(e) => {
                warn!(action = %action, error = %e, "notes action rejected");
                let err: AkademixError = e.into();
                Ok(json!({
                    "content": [{ "type": "text", "text": err.to_string() }],
                    "data": value_to_json(&listed),
                    "error": { "code": err.code, "message": err.message },
                    "isError": true
                }))
            }
        }
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Echo the client's protocol version
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Student productivity widgets: unit converter, GPA estimator, focus timer and quick notes"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use 'list_categories' to see unit categories and 'convert' for one-off conversions. The 'converter' tool drives a stateful converter widget. Use 'gpa' to estimate a grade point average, 'timer' for focus sessions and 'notes' for quick notes."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value between two units of one category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": ["number", "string", "null"],
                            "description": "Value to convert; empty or non-numeric text gives an empty result"
                        },
                        "from_unit": { "type": "string", "description": "Source unit, e.g. km" },
                        "to_unit": { "type": "string", "description": "Target unit, e.g. mile" },
                        "category": { "type": "string", "description": "Category key, e.g. length" }
                    },
                    "required": ["from_unit", "to_unit", "category"]
                }
            },
            {
                "name": "list_categories",
                "description": "List unit categories with their units, primary tabs first.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "units_for",
                "description": "List the units of one category in display order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "description": "Category key" }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "gpa",
                "description": "Credit-weighted grade point average on the 4.0 scale.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "courses": {
                            "type": "array",
                            "description": "Courses with credits (1, 2, 3, 4 or 6) and a letter grade",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "credits": { "type": "integer", "enum": [1, 2, 3, 4, 6] },
                                    "grade": {
                                        "type": "string",
                                        "enum": ["A", "A-", "B+", "B", "B-", "C+", "C", "D", "E"]
                                    }
                                },
                                "required": ["credits", "grade"]
                            }
                        }
                    },
                    "required": ["courses"]
                }
            },
            {
                "name": "converter",
                "description": "Drive the converter widget: switch tabs, open the grid, type values, change units, swap.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "action": {
                            "type": "string",
                            "enum": ["state", "select_tab", "more", "select_tile", "back", "input", "from_unit", "to_unit", "swap"]
                        },
                        "value": {
                            "type": ["string", "number"],
                            "description": "Category key, unit symbol or input text, depending on the action"
                        }
                    },
                    "required": ["action"]
                }
            },
            {
                "name": "timer",
                "description": "Drive the focus timer: 25 minute focus or 5 minute break sessions.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "action": {
                            "type": "string",
                            "enum": ["state", "toggle", "reset", "switch_mode", "tick"]
                        },
                        "value": {
                            "type": ["string", "integer"],
                            "description": "Mode for switch_mode (focus or break); elapsed seconds for tick (default 1)"
                        }
                    },
                    "required": ["action"]
                }
            },
            {
                "name": "notes",
                "description": "Quick notes, newest first. A note needs a title or content.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "action": { "type": "string", "enum": ["list", "add", "delete"] },
                        "title": { "type": "string" },
                        "content": { "type": "string" },
                        "id": { "type": "integer", "description": "Note id for delete" }
                    },
                    "required": ["action"]
                }
            },
            {
                "name": "help",
                "description": "Get documentation for a function, or general help.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Function name. Omit for general help." }
                    }
                }
            },
            {
                "name": "list_functions",
                "description": "List all available functions, optionally by category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Filter by category",
                            "enum": ["units", "grades", "timer", "notes"]
                        }
                    }
                }
            }
        ]
    }))
}

fn required_text(args: &JsonValue, key: &str) -> Result<String, McpError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

/// Field text as typed: numbers are accepted as-is, anything missing is empty
fn raw_text(args: &JsonValue, key: &str) -> String {
    match args.get(key) {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn tool_result(value: &Value, text: String) -> JsonValue {
    match value {
        Value::Error(e) => json!({
            "content": [{ "type": "text", "text": text }],
            "error": { "code": e.code, "message": e.message },
            "isError": true
        }),
        other => json!({
            "content": [{ "type": "text", "text": text }],
            "data": value_to_json(other)
        }),
    }
}

fn format_help(help: &Value) -> String {
    match help {
        Value::Object(map) => {
            let mut out = String::new();
            if let Some(Value::Text(n)) = map.get("name") { out.push_str(&format!("# {}\n\n", n)); }
            if let Some(Value::Text(d)) = map.get("description") { out.push_str(&format!("{}\n\n", d)); }
            if let Some(Value::Text(u)) = map.get("usage") { out.push_str(&format!("**Usage:** `{}`\n\n", u)); }
            if out.is_empty() { help.to_string() } else { out }
        }
        Value::Error(e) => format!("Error: {}", e.message),
        other => other.to_string(),
    }
}

/// JSON arguments -> values. Strings stay text; functions that expect a
/// number parse text themselves, so names like `"2024"` survive.
pub fn json_to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Number(Number::from_i64(i)),
            None => Number::from_str(&n.to_string())
                .map(Value::Number)
                .unwrap_or_else(|_| Value::Text(n.to_string())),
        },
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(arr) => Value::List(arr.iter().map(json_to_value).collect()),
        JsonValue::Object(obj) => Value::Object(obj.iter().map(|(k, v)| (k.clone(), json_to_value(v))).collect()),
    }
}

pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => JsonValue::String(n.to_string()),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::List(l) => JsonValue::Array(l.iter().map(value_to_json).collect()),
        Value::Object(o) => JsonValue::Object(o.iter().map(|(k, v)| (k.clone(), value_to_json(v))).collect()),
        Value::Error(e) => json!({"_error": {"code": e.code, "message": e.message}}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> Server {
        Server::new(Config::default()).unwrap()
    }

    fn request(id: i64, method: &str, params: JsonValue) -> McpRequest {
        serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params
        })).unwrap()
    }

    fn call(server: &mut Server, tool: &str, arguments: JsonValue) -> JsonValue {
        let response = server.handle_request(&request(1, "tools/call", json!({
            "name": tool,
            "arguments": arguments
        })));
        assert!(response.error.is_none(), "unexpected error: {:?}", response.error);
        response.result.unwrap()
    }

    fn converter(server: &mut Server, action: &str, value: Option<JsonValue>) -> JsonValue {
        let mut args = json!({ "action": action });
        if let Some(v) = value {
            args["value"] = v;
        }
        call(server, "converter", args)
    }

    #[test]
    fn test_initialize() {
        let mut s = server();
        let response = s.handle_request(&request(1, "initialize", json!({
            "protocolVersion": "2024-11-05",
            "clientInfo": { "name": "test" }
        })));
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(response.id, Some(json!(1)));
    }

    #[test]
    fn test_unknown_method() {
        let mut s = server();
        let response = s.handle_request(&request(2, "resources/list", json!({})));
        assert_eq!(response.error.map(|e| e.code), Some(METHOD_NOT_FOUND));
    }

    #[test]
    fn test_bad_jsonrpc_version() {
        let mut s = server();
        let req: McpRequest = serde_json::from_value(json!({
            "jsonrpc": "1.0", "id": 3, "method": "ping"
        })).unwrap();
        assert_eq!(s.handle_request(&req).error.map(|e| e.code), Some(INVALID_REQUEST));
    }

    #[test]
    fn test_tools_list() {
        let mut s = server();
        let result = s.handle_request(&request(1, "tools/list", json!({}))).result.unwrap();
        let names: Vec<&str> = result["tools"].as_array().unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert_eq!(names, vec![
            "convert", "list_categories", "units_for", "gpa", "converter", "timer", "notes", "help", "list_functions",
        ]);
    }

    #[test]
    fn test_unknown_tool() {
        let mut s = server();
        let response = s.handle_request(&request(1, "tools/call", json!({ "name": "eval" })));
        assert_eq!(response.error.map(|e| e.code), Some(INVALID_PARAMS));
    }

    #[test]
    fn test_convert_tool() {
        let mut s = server();
        let result = call(&mut s, "convert", json!({
            "value": 100, "from_unit": "C", "to_unit": "K", "category": "temp"
        }));
        assert_eq!(result["content"][0]["text"], "100 C = 373.15 K");
        assert!(result.get("isError").is_none());

        let result = call(&mut s, "convert", json!({
            "value": "", "from_unit": "km", "to_unit": "m", "category": "length"
        }));
        assert_eq!(result["data"], JsonValue::Null);
        assert_eq!(result["content"][0]["text"], "");

        let result = call(&mut s, "convert", json!({
            "from_unit": "km", "to_unit": "m", "category": "length"
        }));
        assert_eq!(result["content"][0]["text"], "");

        let result = call(&mut s, "convert", json!({
            "value": "2.5", "from_unit": "km", "to_unit": "m", "category": "length"
        }));
        assert_eq!(result["content"][0]["text"], "2.5 km = 2500 m");

        let result = call(&mut s, "convert", json!({
            "value": 1, "from_unit": "km", "to_unit": "m", "category": "flux"
        }));
        assert_eq!(result["isError"], true);
        assert_eq!(result["error"]["code"], "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_convert_tool_missing_argument() {
        let mut s = server();
        let response = s.handle_request(&request(1, "tools/call", json!({
            "name": "convert",
            "arguments": { "value": 1, "from_unit": "km" }
        })));
        assert_eq!(response.error.map(|e| e.code), Some(INVALID_PARAMS));
    }

    #[test]
    fn test_units_for_and_categories() {
        let mut s = server();
        let result = call(&mut s, "units_for", json!({ "category": "angle" }));
        assert_eq!(result["data"], json!(["deg", "rad", "grad"]));

        let result = call(&mut s, "list_categories", json!({}));
        assert_eq!(result["data"].as_array().map(Vec::len), Some(12));
        assert_eq!(result["data"][0]["key"], "length");
    }

    #[test]
    fn test_gpa_tool() {
        let mut s = server();
        let result = call(&mut s, "gpa", json!({
            "courses": [
                { "name": "Calculus", "credits": 3, "grade": "A" },
                { "credits": 2, "grade": "B" },
                { "credits": 1, "grade": "E" }
            ]
        }));
        // (12 + 6 + 0) / 6
        assert_eq!(result["data"]["display"], "3.00");
    }

    #[test]
    fn test_gpa_tool_keeps_numeric_names() {
        let mut s = server();
        let result = call(&mut s, "gpa", json!({
            "courses": [
                { "name": "2024", "credits": 3, "grade": "A" },
                { "name": "Physics", "credits": "2", "grade": "B" }
            ]
        }));
        assert_eq!(result["data"]["courses"][0]["name"], "2024");
        assert_eq!(result["data"]["courses"][1]["name"], "Physics");
        assert_eq!(result["data"]["display"], "3.60");
    }

    #[test]
    fn test_converter_session_swap() {
        let mut s = server();
        converter(&mut s, "from_unit", Some(json!("m")));
        converter(&mut s, "to_unit", Some(json!("cm")));
        let result = converter(&mut s, "input", Some(json!(5)));
        assert_eq!(result["state"]["result"], "500");

        let result = converter(&mut s, "swap", None);
        assert_eq!(result["state"]["input"], "500");
        assert_eq!(result["state"]["from_unit"], "cm");
        assert_eq!(result["state"]["result"], "5");
    }

    #[test]
    fn test_converter_session_navigation() {
        let mut s = server();
        let result = converter(&mut s, "more", None);
        assert_eq!(result["state"]["view"], "grid-view");

        let result = converter(&mut s, "select_tile", Some(json!("speed")));
        assert_eq!(result["state"]["view"], "secondary-view");
        assert_eq!(result["state"]["category"], "speed");

        let result = converter(&mut s, "back", None);
        assert_eq!(result["state"]["view"], "grid-view");

        let result = converter(&mut s, "back", None);
        assert_eq!(result["isError"], true);
        assert_eq!(result["error"]["code"], "INVALID_TRANSITION");
        assert_eq!(result["state"]["view"], "grid-view");
    }

    #[test]
    fn test_timer_session() {
        let mut s = server();
        let result = call(&mut s, "timer", json!({ "action": "state" }));
        assert_eq!(result["state"]["mode"], "focus");
        assert_eq!(result["state"]["display"], "25:00");

        call(&mut s, "timer", json!({ "action": "toggle" }));
        let result = call(&mut s, "timer", json!({ "action": "tick", "value": 90 }));
        assert_eq!(result["state"]["display"], "23:30");
        assert_eq!(result["content"][0]["text"], "[focus] 23:30 running");

        let result = call(&mut s, "timer", json!({ "action": "switch_mode", "value": "break" }));
        assert_eq!(result["state"]["remaining"], 300);
        assert_eq!(result["state"]["active"], false);

        call(&mut s, "timer", json!({ "action": "toggle" }));
        let result = call(&mut s, "timer", json!({ "action": "tick", "value": 300 }));
        assert_eq!(result["finished"], true);
        assert_eq!(result["state"]["display"], "00:00");
        assert_eq!(result["state"]["progress"], "100.0");
    }

    #[test]
    fn test_timer_bad_mode() {
        let mut s = server();
        let response = s.handle_request(&request(1, "tools/call", json!({
            "name": "timer",
            "arguments": { "action": "switch_mode", "value": "nap" }
        })));
        assert_eq!(response.error.map(|e| e.code), Some(INVALID_PARAMS));
    }

    #[test]
    fn test_notes_session() {
        let mut s = server();
        call(&mut s, "notes", json!({ "action": "add", "title": "Tugas RPL", "content": "" }));
        let result = call(&mut s, "notes", json!({ "action": "add", "content": "chapter 4" }));
        assert_eq!(result["content"][0]["text"], "2 notes saved");
        assert_eq!(result["data"][0]["heading"], "chapter 4");
        assert_eq!(result["data"][1]["title"], "Tugas RPL");

        let result = call(&mut s, "notes", json!({ "action": "add", "title": "  " }));
        assert_eq!(result["isError"], true);
        assert_eq!(result["error"]["code"], "EMPTY_NOTE");
        assert_eq!(result["data"].as_array().map(Vec::len), Some(2));

        let result = call(&mut s, "notes", json!({ "action": "delete", "id": 1 }));
        assert_eq!(result["data"].as_array().map(Vec::len), Some(1));

        let result = call(&mut s, "notes", json!({ "action": "delete", "id": 1 }));
        assert_eq!(result["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_converter_unknown_action() {
        let mut s = server();
        let response = s.handle_request(&request(1, "tools/call", json!({
            "name": "converter",
            "arguments": { "action": "teleport" }
        })));
        assert_eq!(response.error.map(|e| e.code), Some(INVALID_PARAMS));
    }

    #[test]
    fn test_help_and_list_functions() {
        let mut s = server();
        let result = call(&mut s, "help", json!({ "name": "convert" }));
        assert!(result["content"][0]["text"].as_str().unwrap().starts_with("# convert"));

        let result = call(&mut s, "list_functions", json!({ "category": "grades" }));
        let names: Vec<&str> = result["data"].as_array().unwrap()
            .iter()
            .filter_map(|f| f["name"].as_str())
            .collect();
        assert_eq!(names, vec!["gpa", "grade_points"]);
    }

    #[test]
    fn test_json_value_conversion() {
        assert!(json_to_value(&json!(null)).is_null());
        assert_eq!(json_to_value(&json!(3)).as_number(), Some(&Number::from_i64(3)));
        assert_eq!(json_to_value(&json!(2.5)).as_number(), Some(&Number::from_decimal(25, 1)));
        assert_eq!(json_to_value(&json!("12")).as_text(), Some("12"));
        assert_eq!(json_to_value(&json!("km")).as_text(), Some("km"));
        assert_eq!(json_to_value(&json!("E")).as_text(), Some("E"));

        assert_eq!(value_to_json(&Value::Text("x".into())), json!("x"));
        assert_eq!(value_to_json(&Value::Null), JsonValue::Null);
    }
}
