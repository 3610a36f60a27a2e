//! Pasteboard port interface

use thiserror::Error;

use crate::domain::clipboard::ContentType;

/// Pasteboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read from clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),

    #[error("Content type '{0}' is not supported by this clipboard backend")]
    UnsupportedType(String),
}

/// Port for the OS shared clipboard.
///
/// Every method is a single synchronous call into the OS; no batching or retry.
pub trait Pasteboard {
    /// Whether this backend can store content under `content_type`.
    ///
    /// Checked before any destructive write.
    fn supports_type(&self, _content_type: &ContentType) -> bool {
        true
    }

    /// Remove every entry of every type.
    fn clear(&mut self) -> Result<(), ClipboardError>;

    /// Type identifiers currently present, in the order the OS reports them.
    fn types(&mut self) -> Result<Vec<ContentType>, ClipboardError>;

    /// String stored under `content_type`.
    ///
    /// # Returns
    /// `Ok(None)` when the type is absent or its data is not a string
    fn string_for_type(
        &mut self,
        content_type: &ContentType,
    ) -> Result<Option<String>, ClipboardError>;

    /// Write `content` under `content_type`, alongside whatever is already present.
    fn set_string_for_type(
        &mut self,
        content: &str,
        content_type: &ContentType,
    ) -> Result<(), ClipboardError>;

    /// Raw bytes stored under `content_type`, if the backend can express them.
    fn data_for_type(
        &mut self,
        content_type: &ContentType,
    ) -> Result<Option<Vec<u8>>, ClipboardError>;

    /// Write raw bytes under `content_type`, alongside whatever is already present.
    fn set_data_for_type(
        &mut self,
        data: &[u8],
        content_type: &ContentType,
    ) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed pasteboard types
impl Pasteboard for Box<dyn Pasteboard> {
    fn supports_type(&self, content_type: &ContentType) -> bool {
        self.as_ref().supports_type(content_type)
    }

    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.as_mut().clear()
    }

    fn types(&mut self) -> Result<Vec<ContentType>, ClipboardError> {
        self.as_mut().types()
    }

    fn string_for_type(
        &mut self,
        content_type: &ContentType,
    ) -> Result<Option<String>, ClipboardError> {
        self.as_mut().string_for_type(content_type)
    }

    fn set_string_for_type(
        &mut self,
        content: &str,
        content_type: &ContentType,
    ) -> Result<(), ClipboardError> {
        self.as_mut().set_string_for_type(content, content_type)
    }

    fn data_for_type(
        &mut self,
        content_type: &ContentType,
    ) -> Result<Option<Vec<u8>>, ClipboardError> {
        self.as_mut().data_for_type(content_type)
    }

    fn set_data_for_type(
        &mut self,
        data: &[u8],
        content_type: &ContentType,
    ) -> Result<(), ClipboardError> {
        self.as_mut().set_data_for_type(data, content_type)
    }
}
