//! A single note and its card color

use serde::Serialize;

/// Pastel card colors, assigned in rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Yellow,
    Blue,
    Pink,
    Green,
    Purple,
}

impl NoteColor {
    pub const PALETTE: [NoteColor; 5] = [
        NoteColor::Yellow,
        NoteColor::Blue,
        NoteColor::Pink,
        NoteColor::Green,
        NoteColor::Purple,
    ];

    /// Color for the note with this id
    pub fn for_id(id: u64) -> Self {
        Self::PALETTE[(id.saturating_sub(1) % Self::PALETTE.len() as u64) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            NoteColor::Yellow => "yellow",
            NoteColor::Blue => "blue",
            NoteColor::Pink => "pink",
            NoteColor::Green => "green",
            NoteColor::Purple => "purple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub color: NoteColor,
}

impl Note {
    /// Title shown on the card; falls back to the first content line
    pub fn heading(&self) -> &str {
        if !self.title.trim().is_empty() {
            return self.title.trim();
        }
        self.content.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("")
    }
}
