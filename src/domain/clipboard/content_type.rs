//! Content type value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidContentTypeError;

/// UTF-8 plain text as named by the macOS pasteboard
pub const PLAIN_TEXT_UTF8_MACOS: &str = "public.utf8-plain-text";

/// UTF-8 plain text as named by the Windows clipboard
pub const PLAIN_TEXT_UTF8_WINDOWS: &str = "CF_UNICODETEXT";

/// UTF-8 plain text as named by X11/Wayland selections
pub const PLAIN_TEXT_UTF8_MIME: &str = "text/plain;charset=utf-8";

/// Identifier naming the format of a clipboard entry.
///
/// No enumeration is fixed: any non-blank identifier the OS reports (or the
/// user asks for) is a valid content type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentType(String);

impl ContentType {
    /// Wrap a raw identifier without validation.
    ///
    /// Used by adapters for identifiers reported by the OS itself.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The platform's UTF-8 plain text type
    pub fn plain_text() -> Self {
        Self::new(Self::plain_text_id())
    }

    /// Raw identifier of the platform's UTF-8 plain text type
    pub const fn plain_text_id() -> &'static str {
        if cfg!(target_os = "macos") {
            PLAIN_TEXT_UTF8_MACOS
        } else if cfg!(windows) {
            PLAIN_TEXT_UTF8_WINDOWS
        } else {
            PLAIN_TEXT_UTF8_MIME
        }
    }

    /// Whether this is the platform's plain text type
    pub fn is_plain_text(&self) -> bool {
        self.0 == Self::plain_text_id()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContentType {
    fn default() -> Self {
        Self::plain_text()
    }
}

impl FromStr for ContentType {
    type Err = InvalidContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidContentTypeError {
                input: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
