//! Clipboard value objects

mod content_type;
mod snapshot;

pub use content_type::{
    ContentType, PLAIN_TEXT_UTF8_MACOS, PLAIN_TEXT_UTF8_MIME, PLAIN_TEXT_UTF8_WINDOWS,
};
pub use snapshot::ClipboardSnapshot;
