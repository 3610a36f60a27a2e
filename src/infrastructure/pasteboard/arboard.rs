//! Cross-platform pasteboard adapter using arboard
//!
//! Works on Windows and Linux (X11/Wayland). arboard has no type
//! enumeration, so types are discovered by probing the formats it
//! understands: UTF-8 text and images.

use log::debug;

use crate::application::ports::{ClipboardError, Pasteboard};
use crate::domain::clipboard::ContentType;

/// Identifier reported for image content
#[cfg(windows)]
pub const IMAGE_TYPE: &str = "CF_DIB";

/// Identifier reported for image content
#[cfg(not(windows))]
pub const IMAGE_TYPE: &str = "image/png";

/// Pasteboard adapter over an open arboard clipboard
pub struct ArboardPasteboard {
    clipboard: arboard::Clipboard,
}

impl ArboardPasteboard {
    /// Open the system clipboard
    pub fn open() -> Result<Self, ClipboardError> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        debug!("Opened arboard clipboard");
        Ok(Self { clipboard })
    }

    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            // Present but not valid UTF-8
            Err(arboard::Error::ConversionFailure) => Ok(None),
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        }
    }

    fn has_image(&mut self) -> Result<bool, ClipboardError> {
        match self.clipboard.get_image() {
            Ok(_) => Ok(true),
            Err(arboard::Error::ContentNotAvailable) | Err(arboard::Error::ConversionFailure) => {
                Ok(false)
            }
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        }
    }
}

impl Pasteboard for ArboardPasteboard {
    fn supports_type(&self, content_type: &ContentType) -> bool {
        content_type.is_plain_text()
    }

    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.clipboard
            .clear()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }

    fn types(&mut self) -> Result<Vec<ContentType>, ClipboardError> {
        let mut types = Vec::new();
        if self.read_text()?.is_some() {
            types.push(ContentType::plain_text());
        }
        if self.has_image()? {
            types.push(ContentType::new(IMAGE_TYPE));
        }
        debug!("Probed {} clipboard type(s)", types.len());
        Ok(types)
    }

    fn string_for_type(
        &mut self,
        content_type: &ContentType,
    ) -> Result<Option<String>, ClipboardError> {
        if !content_type.is_plain_text() {
            return Ok(None);
        }
        self.read_text()
    }

    fn set_string_for_type(
        &mut self,
        content: &str,
        content_type: &ContentType,
    ) -> Result<(), ClipboardError> {
        if !self.supports_type(content_type) {
            return Err(ClipboardError::UnsupportedType(content_type.to_string()));
        }
        self.clipboard
            .set_text(content)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }

    fn data_for_type(
        &mut self,
        content_type: &ContentType,
    ) -> Result<Option<Vec<u8>>, ClipboardError> {
        // Images come back as raw RGBA without a container; only text round-trips
        Ok(self
            .string_for_type(content_type)?
            .map(String::into_bytes))
    }

    fn set_data_for_type(
        &mut self,
        data: &[u8],
        content_type: &ContentType,
    ) -> Result<(), ClipboardError> {
        if !self.supports_type(content_type) {
            return Err(ClipboardError::UnsupportedType(content_type.to_string()));
        }
        let text = std::str::from_utf8(data).map_err(|_| {
            ClipboardError::WriteFailed(format!("{} data is not valid UTF-8", content_type))
        })?;
        self.set_string_for_type(text, content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(windows))]
    fn image_type_is_mime() {
        assert_eq!(IMAGE_TYPE, "image/png");
    }

    #[test]
    #[ignore = "needs a display server"]
    fn open_system_clipboard() {
        assert!(ArboardPasteboard::open().is_ok());
    }
}
