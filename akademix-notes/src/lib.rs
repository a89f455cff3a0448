//! Akademix Notes - Quick notes board
//!
//! A [`NoteBook`] keeps short notes newest first. A note needs a title or
//! some content; everything else is stored as typed.

mod error;
mod note;
mod book;
mod functions;

pub use error::NoteError;
pub use note::{Note, NoteColor};
pub use book::NoteBook;
pub use functions::note_to_value;

use akademix_plugin::PluginRegistry;

/// Load note functions into registry
pub fn load_notes_library(registry: PluginRegistry) -> PluginRegistry {
    registry.with_function(functions::NoteBoard)
}
