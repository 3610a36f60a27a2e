//! Pasteboard infrastructure module
//!
//! Uses the native `NSPasteboard` on macOS and arboard everywhere else.
//! [`MemoryPasteboard`] is an in-process stand-in.

#[cfg(target_os = "macos")]
mod appkit;
#[cfg(not(target_os = "macos"))]
mod arboard;
mod memory;

#[cfg(target_os = "macos")]
pub use self::appkit::AppKitPasteboard;
#[cfg(not(target_os = "macos"))]
pub use self::arboard::ArboardPasteboard;
pub use self::memory::MemoryPasteboard;

use crate::application::ports::{ClipboardError, Pasteboard};

/// Open the system pasteboard for the current platform
pub fn open_system_pasteboard() -> Result<Box<dyn Pasteboard>, ClipboardError> {
    #[cfg(target_os = "macos")]
    {
        Ok(Box::new(AppKitPasteboard::general()?))
    }

    #[cfg(not(target_os = "macos"))]
    {
        Ok(Box::new(ArboardPasteboard::open()?))
    }
}
