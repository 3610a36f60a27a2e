//! Clipboard accessor use case
//!
//! Wraps a [`Pasteboard`] with the read/write/clear/inspect operations the
//! CLI exposes. The pasteboard handle is opened on first use and reused for
//! the accessor's lifetime.

use std::ops::{Deref, DerefMut};

use log::{debug, warn};

use crate::domain::clipboard::{ClipboardSnapshot, ContentType};

use super::ports::{ClipboardError, Pasteboard};

/// Opens a pasteboard handle
pub type Connector<P> = Box<dyn FnMut() -> Result<P, ClipboardError>>;

/// Render type identifiers as one `- {type}` bullet line each.
///
/// An empty slice renders as an empty string.
pub fn format_types(types: &[ContentType]) -> String {
    types.iter().map(|ty| format!("- {}\n", ty)).collect()
}

/// Clipboard operations over a lazily opened pasteboard handle
pub struct ClipboardAccessor<P: Pasteboard> {
    connect: Connector<P>,
    handle: Option<P>,
}

impl<P: Pasteboard> ClipboardAccessor<P> {
    /// Create an accessor. `connect` runs at most once, on first use.
    pub fn new(connect: impl FnMut() -> Result<P, ClipboardError> + 'static) -> Self {
        Self {
            connect: Box::new(connect),
            handle: None,
        }
    }

    /// The cached pasteboard handle, opening it on first call.
    pub fn handle(&mut self) -> Result<&mut P, ClipboardError> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => {
                debug!("Opening clipboard handle");
                (self.connect)()?
            }
        };
        Ok(self.handle.insert(handle))
    }

    /// Empty every type and entry. Clearing an empty clipboard is a no-op.
    pub fn clear(&mut self) -> Result<(), ClipboardError> {
        self.handle()?.clear()
    }

    /// True if the clipboard advertises no content types
    pub fn is_empty(&mut self) -> bool {
        self.list_types().is_empty()
    }

    /// Type identifiers currently present, in OS order.
    ///
    /// Read failures are logged and reported as an empty clipboard.
    pub fn list_types(&mut self) -> Vec<ContentType> {
        match self.handle().and_then(|handle| handle.types()) {
            Ok(types) => types,
            Err(e) => {
                warn!("Could not list clipboard types, treating clipboard as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// [`list_types`](Self::list_types) rendered with [`format_types`]
    pub fn list_types_as_text(&mut self) -> String {
        format_types(&self.list_types())
    }

    /// Clear the clipboard, then write `content` under `content_type`.
    ///
    /// Entries of every other type are destroyed, not merged. A type the
    /// backend cannot store is rejected before anything is cleared.
    pub fn set_content(
        &mut self,
        content: &str,
        content_type: &ContentType,
    ) -> Result<(), ClipboardError> {
        let handle = self.handle()?;
        if !handle.supports_type(content_type) {
            return Err(ClipboardError::UnsupportedType(content_type.to_string()));
        }
        handle.clear()?;
        handle.set_string_for_type(content, content_type)?;
        debug!("Wrote {} bytes as {}", content.len(), content_type);
        Ok(())
    }

    /// String content stored under `content_type`.
    ///
    /// Returns `None` when the type is absent, its data is not a string, or
    /// the read fails. Present but empty content is `Some("")`.
    pub fn get_content(&mut self, content_type: &ContentType) -> Option<String> {
        match self
            .handle()
            .and_then(|handle| handle.string_for_type(content_type))
        {
            Ok(content) => content,
            Err(e) => {
                warn!("Treating {} as absent: {}", content_type, e);
                None
            }
        }
    }

    /// Copy every (type, data) pair out of the clipboard.
    ///
    /// Types whose data the backend cannot express as bytes are skipped.
    pub fn save_state(&mut self) -> Result<ClipboardSnapshot, ClipboardError> {
        let handle = self.handle()?;
        let mut snapshot = ClipboardSnapshot::new();
        for content_type in handle.types()? {
            match handle.data_for_type(&content_type)? {
                Some(data) => snapshot.push(content_type, data),
                None => debug!("Skipping {} in snapshot: no byte representation", content_type),
            }
        }
        Ok(snapshot)
    }

    /// Replace the clipboard contents with `snapshot`.
    pub fn restore_state(&mut self, snapshot: &ClipboardSnapshot) -> Result<(), ClipboardError> {
        let handle = self.handle()?;
        handle.clear()?;
        for (content_type, data) in snapshot.iter() {
            handle.set_data_for_type(data, content_type)?;
        }
        Ok(())
    }

    /// Snapshot the clipboard and hand back a guard that restores it on drop.
    pub fn preserve(mut self) -> Result<SnapshotGuard<P>, ClipboardError> {
        let snapshot = self.save_state()?;
        debug!("Preserved {} clipboard entries", snapshot.len());
        Ok(SnapshotGuard {
            accessor: self,
            snapshot,
        })
    }
}

/// Restores a saved clipboard state when dropped.
///
/// Dereferences to the wrapped accessor so it can be used in between.
pub struct SnapshotGuard<P: Pasteboard> {
    accessor: ClipboardAccessor<P>,
    snapshot: ClipboardSnapshot,
}

impl<P: Pasteboard> SnapshotGuard<P> {
    pub fn snapshot(&self) -> &ClipboardSnapshot {
        &self.snapshot
    }
}

impl<P: Pasteboard> Deref for SnapshotGuard<P> {
    type Target = ClipboardAccessor<P>;

    fn deref(&self) -> &Self::Target {
        &self.accessor
    }
}

impl<P: Pasteboard> DerefMut for SnapshotGuard<P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.accessor
    }
}

impl<P: Pasteboard> Drop for SnapshotGuard<P> {
    fn drop(&mut self) {
        if let Err(e) = self.accessor.restore_state(&self.snapshot) {
            warn!("Failed to restore clipboard state: {}", e);
        }
    }
}
