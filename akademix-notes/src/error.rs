//! Note book errors

use akademix_core::AkademixError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// Both title and content were blank
    #[error("note has neither a title nor content")]
    EmptyNote,

    #[error("no note with id {0}")]
    NoteNotFound(u64),
}

impl From<NoteError> for AkademixError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::EmptyNote => AkademixError::empty_note(),
            NoteError::NoteNotFound(id) => AkademixError::not_found("note", id),
        }
    }
}
