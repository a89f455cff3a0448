//! Note book: newest note first

use tracing::debug;

use crate::note::{Note, NoteColor};
use crate::NoteError;

#[derive(Debug, Clone, Default)]
pub struct NoteBook {
    notes: Vec<Note>,
    next_id: u64,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note in front of the others and return its id.
    ///
    /// Rejected only when title and content are both blank. Text is
    /// stored as typed.
    pub fn add(&mut self, title: &str, content: &str) -> Result<u64, NoteError> {
        if title.trim().is_empty() && content.trim().is_empty() {
            return Err(NoteError::EmptyNote);
        }

        self.next_id += 1;
        let id = self.next_id;
        let note = Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            color: NoteColor::for_id(id),
        };
        self.notes.insert(0, note);
        debug!(id, notes = self.notes.len(), "note added");
        Ok(id)
    }

    pub fn remove(&mut self, id: u64) -> Result<Note, NoteError> {
        let index = self.notes.iter()
            .position(|n| n.id == id)
            .ok_or(NoteError::NoteNotFound(id))?;
        debug!(id, "note removed");
        Ok(self.notes.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Newest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut book = NoteBook::new();
        let first = book.add("Tugas RPL", "").unwrap();
        let second = book.add("", "read chapter 4").unwrap();
        let ids: Vec<u64> = book.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn test_blank_note_rejected() {
        let mut book = NoteBook::new();
        assert_eq!(book.add("  ", "\n\t"), Err(NoteError::EmptyNote));
        assert!(book.is_empty());
    }

    #[test]
    fn test_text_kept_as_typed() {
        let mut book = NoteBook::new();
        let id = book.add(" Exam ", "room 2\n").unwrap();
        let note = book.get(id).unwrap();
        assert_eq!(note.title, " Exam ");
        assert_eq!(note.content, "room 2\n");
    }

    #[test]
    fn test_remove() {
        let mut book = NoteBook::new();
        let a = book.add("a", "").unwrap();
        let b = book.add("b", "").unwrap();
        assert_eq!(book.remove(a).unwrap().title, "a");
        assert_eq!(book.len(), 1);
        assert_eq!(book.notes()[0].id, b);
        assert_eq!(book.remove(a), Err(NoteError::NoteNotFound(a)));
    }

    #[test]
    fn test_ids_not_reused() {
        let mut book = NoteBook::new();
        let a = book.add("a", "").unwrap();
        book.remove(a).unwrap();
        let b = book.add("b", "").unwrap();
        assert_ne!(a, b);
    }
}
