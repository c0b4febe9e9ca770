//! Photo bindings for roster members.
//!
//! A selected photo file is resolved at submit time into an owned handle,
//! the in-process analog of an object URL. A handle stays displayable until
//! it is explicitly released; callers must release the handle of a member
//! they are about to discard.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// A displayable reference to a bound photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoHandle {
    id: u64,
    source: PathBuf,
}

impl PhotoHandle {
    /// The displayable URL for this binding.
    pub fn url(&self) -> String {
        format!("mem://photo/{}", self.id)
    }

    /// File name of the originally selected file.
    pub fn file_name(&self) -> &str {
        self.source
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("photo")
    }
}

// A handle serializes as its URL, the shape the list cards display.
impl Serialize for PhotoHandle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url())
    }
}

/// Registry of live photo bindings.
#[derive(Debug, Default)]
pub struct PhotoBinder {
    next_id: u64,
    live: HashSet<u64>,
}

impl PhotoBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a selected file into a displayable handle.
    ///
    /// Binding is a purely in-process operation; the file itself is never
    /// read or written.
    pub fn bind(&mut self, source: &Path) -> PhotoHandle {
        self.next_id += 1;
        self.live.insert(self.next_id);
        tracing::debug!("Bound photo {} from {:?}", self.next_id, source);

        PhotoHandle {
            id: self.next_id,
            source: source.to_path_buf(),
        }
    }

    /// Release a binding. Returns false if it was not live.
    pub fn release(&mut self, handle: &PhotoHandle) -> bool {
        let was_live = self.live.remove(&handle.id);
        if was_live {
            tracing::debug!("Released photo {}", handle.id);
        } else {
            tracing::warn!("Photo {} released more than once", handle.id);
        }
        was_live
    }

    /// Number of currently live bindings.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
