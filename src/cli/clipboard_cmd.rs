//! Clipboard command handlers
//!
//! Each command renders its stdout text as a `String`, so the wording can be
//! checked against an in-memory pasteboard.

use crate::application::ports::{ClipboardError, Pasteboard};
use crate::application::{format_types, ClipboardAccessor};
use crate::domain::clipboard::ContentType;

/// Printed by `types` when the clipboard is empty
pub const NO_TYPES_MESSAGE: &str = "clipboard empty, hence no types";

/// Printed by `clip` when the clipboard is empty
pub const NO_CONTENT_MESSAGE: &str = "No content";

/// `clear`: empty the clipboard. Prints nothing.
pub fn run_clear<P: Pasteboard>(accessor: &mut ClipboardAccessor<P>) -> Result<(), ClipboardError> {
    accessor.clear()
}

/// `set`: replace the clipboard with `text` under `content_type`. Prints nothing.
pub fn run_set<P: Pasteboard>(
    accessor: &mut ClipboardAccessor<P>,
    text: &str,
    content_type: &ContentType,
) -> Result<(), ClipboardError> {
    accessor.set_content(text, content_type)
}

/// `types`: the type listing, or a fallback line when empty
pub fn render_types<P: Pasteboard>(accessor: &mut ClipboardAccessor<P>) -> String {
    let listing = accessor.list_types_as_text();
    if listing.is_empty() {
        format!("{}\n", NO_TYPES_MESSAGE)
    } else {
        listing
    }
}

/// `clip`: the content under `content_type` with the type listing.
///
/// Falls back to [`NO_CONTENT_MESSAGE`] on an empty clipboard, or to a usage
/// hint naming the available types when the requested one is missing.
pub fn render_clip<P: Pasteboard>(
    accessor: &mut ClipboardAccessor<P>,
    content_type: &ContentType,
    program: &str,
) -> String {
    if let Some(content) = accessor.get_content(content_type) {
        return format!(
            "clipboard contains: '{}'\n{}",
            content,
            accessor.list_types_as_text()
        );
    }

    let types = accessor.list_types();
    match types.first() {
        None => format!("{}\n", NO_CONTENT_MESSAGE),
        Some(first) => format!(
            "Unknown content type{}:\n{}\nCall `{program} clip -t TYPE` with the type of content you want to get, e.g.:\n{program} clip -t {first}\n",
            if types.len() > 1 { "s" } else { "" },
            format_types(&types),
        ),
    }
}
