//! In-process pasteboard
//!
//! Clones share one store, the way every process sees the same OS clipboard.

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::ports::{ClipboardError, Pasteboard};
use crate::domain::clipboard::ContentType;

/// Insertion-ordered in-memory pasteboard
#[derive(Debug, Clone, Default)]
pub struct MemoryPasteboard {
    entries: Rc<RefCell<Vec<(ContentType, Vec<u8>)>>>,
}

impl MemoryPasteboard {
    /// Create an empty pasteboard
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self, data: Vec<u8>, content_type: &ContentType) {
        let mut entries = self.entries.borrow_mut();
        if let Some(entry) = entries.iter_mut().find(|(ty, _)| ty == content_type) {
            entry.1 = data;
        } else {
            entries.push((content_type.clone(), data));
        }
    }

    fn read(&self, content_type: &ContentType) -> Option<Vec<u8>> {
        self.entries
            .borrow()
            .iter()
            .find(|(ty, _)| ty == content_type)
            .map(|(_, data)| data.clone())
    }
}

impl Pasteboard for MemoryPasteboard {
    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }

    fn types(&mut self) -> Result<Vec<ContentType>, ClipboardError> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .map(|(ty, _)| ty.clone())
            .collect())
    }

    fn string_for_type(
        &mut self,
        content_type: &ContentType,
    ) -> Result<Option<String>, ClipboardError> {
        Ok(self
            .read(content_type)
            .and_then(|data| String::from_utf8(data).ok()))
    }

    fn set_string_for_type(
        &mut self,
        content: &str,
        content_type: &ContentType,
    ) -> Result<(), ClipboardError> {
        self.write(content.as_bytes().to_vec(), content_type);
        Ok(())
    }

    fn data_for_type(
        &mut self,
        content_type: &ContentType,
    ) -> Result<Option<Vec<u8>>, ClipboardError> {
        Ok(self.read(content_type))
    }

    fn set_data_for_type(
        &mut self,
        data: &[u8],
        content_type: &ContentType,
    ) -> Result<(), ClipboardError> {
        self.write(data.to_vec(), content_type);
        Ok(())
    }
}
