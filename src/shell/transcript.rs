//! Transcript store: the ordered command/response log of a session.

/// Whether an entry echoes user input or shows command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Command,
    Response,
}

/// One line group in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub content: String,
}

impl TranscriptEntry {
    pub fn command(content: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Command,
            content: content.into(),
        }
    }

    pub fn response(content: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Response,
            content: content.into(),
        }
    }

    pub fn is_command(&self) -> bool {
        self.kind == EntryKind::Command
    }
}

/// Append-only log of entries, emptied only by [`Transcript::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranscriptEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
