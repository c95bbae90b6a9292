//! Modal prompts. Each one yields `Some(answer)` or `None` when cancelled.

use crate::library::Track;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Folder to load into the queue (replaces it).
    OpenFolder,
    /// Path of a single file to add.
    AddTrack,
    /// 1-based position for `track`; blank or cancelled means "at the end".
    Position { track: Track },
    /// Name to look for, without extension.
    Search,
    /// y/n before removing the track at `index`.
    ConfirmRemove { index: usize, name: String },
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    /// Yes/no prompts take a single keypress instead of a text line.
    pub fn is_confirmation(&self) -> bool {
        matches!(self.kind, PromptKind::ConfirmRemove { .. })
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::OpenFolder => " open folder ",
            PromptKind::AddTrack => " add track ",
            PromptKind::Position { .. } => " position ",
            PromptKind::Search => " search ",
            PromptKind::ConfirmRemove { .. } => " remove track ",
        }
    }

    /// The question shown above the input line.
    pub fn question(&self, queue_len: usize, extension: &str) -> String {
        match &self.kind {
            PromptKind::OpenFolder => "Folder to load:".to_string(),
            PromptKind::AddTrack => format!("Path of the .{extension} file to add:"),
            PromptKind::Position { track } => format!(
                "Position to insert '{}' (1 to {}, blank = end):",
                track.name,
                queue_len + 1
            ),
            PromptKind::Search => format!("Song name to search (without .{extension}):"),
            PromptKind::ConfirmRemove { name, .. } => {
                format!("Are you sure you want to remove '{name}'? [y/n]")
            }
        }
    }
}
