//! Clipboard snapshot value object

use super::ContentType;

/// Copy of every (type, data) pair the clipboard held at one moment.
///
/// Entries keep the order the OS reported them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    entries: Vec<(ContentType, Vec<u8>)>,
}

impl ClipboardSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. A later entry for the same type replaces the earlier one.
    pub fn push(&mut self, content_type: ContentType, data: Vec<u8>) {
        if let Some(entry) = self.entries.iter_mut().find(|(ty, _)| *ty == content_type) {
            entry.1 = data;
        } else {
            self.entries.push((content_type, data));
        }
    }

    pub fn get(&self, content_type: &ContentType) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(ty, _)| ty == content_type)
            .map(|(_, data)| data.as_slice())
    }

    pub fn types(&self) -> impl Iterator<Item = &ContentType> {
        self.entries.iter().map(|(ty, _)| ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContentType, &[u8])> {
        self.entries.iter().map(|(ty, data)| (ty, data.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
