//! Quick note functions

use std::collections::HashMap;

use akademix_plugin::prelude::*;

use crate::book::NoteBook;
use crate::note::Note;

fn field_text(fields: &HashMap<String, Value>, key: &str) -> Result<String, AkademixError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::Text(s)) => Ok(s.clone()),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(other) => Ok(other.to_string()),
    }
}

pub fn note_to_value(note: &Note) -> Value {
    Value::object([
        ("id", Value::Number(Number::from_i64(note.id as i64))),
        ("title", Value::Text(note.title.clone())),
        ("content", Value::Text(note.content.clone())),
        ("heading", Value::Text(note.heading().to_string())),
        ("color", Value::Text(note.color.name().to_string())),
    ])
}

// ============ note_board ============

pub struct NoteBoard;

static NOTE_BOARD_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("notes", "List", "Objects with title and content, oldest first"),
];

static NOTE_BOARD_EXAMPLES: [&str; 2] = [
    "note_board([{title: \"RPL\"}, {content: \"chapter 4\"}]) → [{id: 2, ...}, {id: 1, ...}]",
    "note_board([{title: \" \"}]) → #ERROR: EMPTY_NOTE",
];

static NOTE_BOARD_RELATED: [&str; 0] = [];

fn build_board(entries: &[Value]) -> Result<NoteBook, AkademixError> {
    let mut book = NoteBook::new();
    for entry in entries {
        let fields = match entry {
            Value::Object(map) => map,
            other => return Err(AkademixError::arg_type("note_board", "notes", "List of Object", other.type_name())),
        };
        let title = field_text(fields, "title")?;
        let content = field_text(fields, "content")?;
        book.add(&title, &content)?;
    }
    Ok(book)
}

impl FunctionPlugin for NoteBoard {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "note_board",
            description: "Lay out notes as cards, newest first, rejecting blank notes",
            usage: "note_board(notes)",
            args: &NOTE_BOARD_ARGS,
            returns: "List",
            examples: &NOTE_BOARD_EXAMPLES,
            category: "notes",
            related: &NOTE_BOARD_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(AkademixError::arg_count("note_board", 1, 0));
        }
        let entries = match &args[0] {
            Value::List(items) => items,
            Value::Error(e) => return Value::Error(e.clone()),
            other => return Value::Error(AkademixError::arg_type("note_board", "notes", "List", other.type_name())),
        };
        match build_board(entries) {
            Ok(book) => Value::List(book.notes().iter().map(note_to_value).collect()),
            Err(e) => Value::Error(e),
        }
    }
}
